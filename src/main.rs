//! ReelView - terminal movie browser for TMDB
//!
//! # Usage
//!
//! ```bash
//! # Launch interactive TUI
//! reelview
//!
//! # CLI mode (for scripting)
//! reelview list popular
//! reelview details 550 --json
//! reelview trailer 550
//! ```

use std::io::{stdout, Stdout};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use reelview::api::TmdbClient;
use reelview::app::App;
use reelview::cli::{Cli, Command, ExitCode, Output};
use reelview::commands;
use reelview::config::Config;
use reelview::ui::screens;

/// Terminal type alias for convenience
type Tui = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.is_cli_mode() {
        // CLI mode: execute command and exit
        let exit_code = run_cli(cli).await;
        std::process::exit(exit_code.into());
    } else {
        // TUI mode: launch interactive interface
        run_tui().await
    }
}

/// Run CLI command and return exit code
async fn run_cli(cli: Cli) -> ExitCode {
    let output = Output::new(&cli);

    match cli.command {
        Some(Command::List(cmd)) => commands::list_cmd(cmd, &output).await,
        Some(Command::Details(cmd)) => commands::details_cmd(cmd, &output).await,
        Some(Command::Similar(cmd)) => commands::similar_cmd(cmd, &output).await,
        Some(Command::Trailer(cmd)) => commands::trailer_cmd(cmd, &output).await,
        // Unreachable: is_cli_mode() gates on a present subcommand
        None => ExitCode::Success,
    }
}

// =============================================================================
// TUI Mode
// =============================================================================

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run interactive TUI
async fn run_tui() -> Result<()> {
    let mut config = Config::load();
    let client = TmdbClient::new(config.tmdb_api_key());

    let mut terminal = init_terminal()?;
    let mut app = App::new();

    let result = run_event_loop(&mut terminal, &mut app, &client).await;

    // Always restore terminal, even on error
    restore_terminal(&mut terminal)?;

    result
}

/// Main event loop - loads pending screen data, renders, handles input
async fn run_event_loop(terminal: &mut Tui, app: &mut App, client: &TmdbClient) -> Result<()> {
    const TICK_RATE: Duration = Duration::from_millis(100);

    while app.running {
        // A screen was just entered: show the loading frame, then suspend
        // until all of its fetches resolve. Input is not read while a load
        // is in flight, so results always land on the screen that asked.
        if app.pending_load().is_some() {
            terminal.draw(screens::render_loading)?;
            app.load_screen(client).await;
        }

        terminal.draw(|frame| screens::render(frame, app))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (ignore releases on Windows)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
    }

    Ok(())
}
