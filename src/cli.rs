//! CLI - Command Line Interface for ReelView
//!
//! Run without arguments to launch the interactive TUI; subcommands give a
//! scriptable surface over the same catalog operations. All output is
//! JSON-parseable with `--json`.
//!
//! # Examples
//!
//! ```bash
//! reelview list popular
//! reelview details 550 --json
//! reelview trailer 550
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::io::IsTerminal;

use crate::models::ListCategory;

// =============================================================================
// Exit Codes
// =============================================================================

/// Exit codes for CLI operations (semantic for scripting)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General error
    Error = 1,
    /// Invalid arguments
    InvalidArgs = 2,
    /// Network or catalog service error
    NetworkError = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

// =============================================================================
// Main CLI Structure
// =============================================================================

/// ReelView - terminal movie browser for TMDB
///
/// Run without arguments to launch the interactive TUI.
/// Use subcommands for automation and scripting.
#[derive(Parser, Debug)]
#[command(
    name = "reelview",
    version,
    about = "Terminal movie browser for TMDB",
    after_help = "EXAMPLES:\n\
                  reelview                    Launch interactive TUI\n\
                  reelview list top_rated     Print the top rated list\n\
                  reelview details 550        Full record for one movie\n\
                  reelview trailer 550        Print the trailer watch URL"
)]
pub struct Cli {
    /// Output format as JSON (default for non-TTY)
    #[arg(long, short = 'j', global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Subcommand to run (omit for TUI mode)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Check if running in CLI mode (has subcommand)
    pub fn is_cli_mode(&self) -> bool {
        self.command.is_some()
    }

    /// Check if JSON output should be used
    pub fn should_json(&self) -> bool {
        self.json || !std::io::stdout().is_terminal()
    }
}

// =============================================================================
// Subcommands
// =============================================================================

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print one of the browse lists
    #[command(visible_alias = "ls")]
    List(ListCmd),

    /// Print the full record for a movie
    #[command(visible_alias = "d")]
    Details(DetailsCmd),

    /// Print titles similar to a movie
    #[command(visible_alias = "sim")]
    Similar(SimilarCmd),

    /// Print the watch URL of a movie's trailer
    #[command(visible_alias = "tr")]
    Trailer(TrailerCmd),
}

/// Which browse list to print
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryArg {
    Popular,
    #[value(name = "now_playing", alias = "now-playing")]
    NowPlaying,
    Upcoming,
    #[value(name = "top_rated", alias = "top-rated")]
    TopRated,
}

impl From<CategoryArg> for ListCategory {
    fn from(arg: CategoryArg) -> ListCategory {
        match arg {
            CategoryArg::Popular => ListCategory::Popular,
            CategoryArg::NowPlaying => ListCategory::NowPlaying,
            CategoryArg::Upcoming => ListCategory::Upcoming,
            CategoryArg::TopRated => ListCategory::TopRated,
        }
    }
}

/// Print one of the browse lists
#[derive(Args, Debug)]
pub struct ListCmd {
    /// List category
    #[arg(value_enum)]
    pub category: CategoryArg,

    /// Page number (starting at 1)
    #[arg(long, short = 'p', default_value = "1")]
    pub page: u32,

    /// Maximum number of results
    #[arg(long, short = 'l', default_value = "20")]
    pub limit: usize,
}

/// Print the full record for a movie
#[derive(Args, Debug)]
pub struct DetailsCmd {
    /// TMDB movie id
    #[arg(required = true)]
    pub id: u64,
}

/// Print titles similar to a movie
#[derive(Args, Debug)]
pub struct SimilarCmd {
    /// TMDB movie id
    #[arg(required = true)]
    pub id: u64,

    /// Maximum number of results
    #[arg(long, short = 'l', default_value = "20")]
    pub limit: usize,
}

/// Print the watch URL of a movie's trailer
#[derive(Args, Debug)]
pub struct TrailerCmd {
    /// TMDB movie id
    #[arg(required = true)]
    pub id: u64,
}

// =============================================================================
// Output Helpers
// =============================================================================

/// Generic JSON output wrapper with status
#[derive(Debug, Serialize)]
pub struct JsonOutput<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub exit_code: i32,
}

fn is_zero(n: &i32) -> bool {
    *n == 0
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            exit_code: 0,
        }
    }
}

/// Output handler for consistent formatting
pub struct Output {
    pub json: bool,
    pub quiet: bool,
}

impl Output {
    pub fn new(cli: &Cli) -> Self {
        Self {
            json: cli.should_json(),
            quiet: cli.quiet,
        }
    }

    /// Print success data; callers fall back to JSON for non-JSON mode when
    /// they have no human formatting of their own
    pub fn print<T: Serialize>(&self, data: T) -> anyhow::Result<()> {
        if self.json {
            let output = JsonOutput::success(data);
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
        Ok(())
    }

    /// Print a plain human line (non-JSON mode only)
    pub fn line(&self, msg: impl std::fmt::Display) {
        if !self.json {
            println!("{}", msg);
        }
    }

    /// Print error and return exit code
    pub fn error(&self, msg: impl Into<String>, code: ExitCode) -> ExitCode {
        let msg = msg.into();
        if self.json {
            let output = JsonOutput::<()> {
                data: None,
                error: Some(msg),
                exit_code: code.into(),
            };
            if let Ok(json) = serde_json::to_string_pretty(&output) {
                eprintln!("{}", json);
            }
        } else if !self.quiet {
            eprintln!("Error: {}", msg);
        }
        code
    }

    /// Print info message (suppressed in quiet and JSON modes)
    pub fn info(&self, msg: impl std::fmt::Display) {
        if !self.quiet && !self.json {
            eprintln!("{}", msg);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_args_is_tui_mode() {
        let cli = Cli::parse_from(["reelview"]);
        assert!(!cli.is_cli_mode());
    }

    #[test]
    fn test_list_command() {
        let cli = Cli::parse_from(["reelview", "list", "now_playing", "--page", "2"]);
        assert!(cli.is_cli_mode());
        if let Some(Command::List(cmd)) = cli.command {
            assert_eq!(cmd.category, CategoryArg::NowPlaying);
            assert_eq!(cmd.page, 2);
            assert_eq!(cmd.limit, 20);
        } else {
            panic!("Expected List command");
        }
    }

    #[test]
    fn test_category_arg_maps_to_model() {
        assert_eq!(
            ListCategory::from(CategoryArg::TopRated),
            ListCategory::TopRated
        );
        assert_eq!(
            ListCategory::from(CategoryArg::Popular),
            ListCategory::Popular
        );
    }

    #[test]
    fn test_details_command() {
        let cli = Cli::parse_from(["reelview", "details", "550"]);
        if let Some(Command::Details(cmd)) = cli.command {
            assert_eq!(cmd.id, 550);
        } else {
            panic!("Expected Details command");
        }
    }

    #[test]
    fn test_trailer_alias() {
        let cli = Cli::parse_from(["reelview", "tr", "550"]);
        assert!(matches!(cli.command, Some(Command::Trailer(_))));
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["reelview", "--json", "--quiet", "list", "popular"]);
        assert!(cli.json);
        assert!(cli.quiet);
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(i32::from(ExitCode::Success), 0);
        assert_eq!(i32::from(ExitCode::Error), 1);
        assert_eq!(i32::from(ExitCode::InvalidArgs), 2);
        assert_eq!(i32::from(ExitCode::NetworkError), 3);
    }
}
