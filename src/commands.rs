//! CLI Command Handlers
//!
//! Each handler takes its parsed args and the Output helper, talks to the
//! catalog client, and returns a semantic exit code.

use crate::api::tmdb::poster_url;
use crate::api::TmdbClient;
use crate::cli::{DetailsCmd, ExitCode, ListCmd, Output, SimilarCmd, TrailerCmd};
use crate::config::Config;
use crate::models::{select_trailer, ListCategory, Movie};
use crate::player;

fn client() -> TmdbClient {
    let mut config = Config::load();
    TmdbClient::new(config.tmdb_api_key())
}

fn print_movie_lines(output: &Output, movies: &[Movie]) {
    for (i, movie) in movies.iter().enumerate() {
        output.line(format!("{:2}. {}", i + 1, movie));
    }
}

// =============================================================================
// List Command
// =============================================================================

pub async fn list_cmd(cmd: ListCmd, output: &Output) -> ExitCode {
    if cmd.page < 1 {
        return output.error("page must be >= 1", ExitCode::InvalidArgs);
    }

    let category = ListCategory::from(cmd.category);
    output.info(format!("Fetching {} list (page {})...", category, cmd.page));

    match client().fetch_list(category, cmd.page).await {
        Ok(mut movies) => {
            movies.truncate(cmd.limit);
            if output.json {
                if let Err(e) = output.print(&movies) {
                    return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
                }
            } else {
                print_movie_lines(output, &movies);
            }
            ExitCode::Success
        }
        Err(e) => output.error(e.to_string(), ExitCode::NetworkError),
    }
}

// =============================================================================
// Details Command
// =============================================================================

pub async fn details_cmd(cmd: DetailsCmd, output: &Output) -> ExitCode {
    output.info(format!("Fetching details for {}...", cmd.id));

    match client().movie_detail(cmd.id).await {
        Ok(detail) => {
            if output.json {
                if let Err(e) = output.print(&detail) {
                    return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
                }
            } else {
                output.line(&detail);
                if !detail.genres.is_empty() {
                    output.line(detail.genres.join(", "));
                }
                if let Some(url) = poster_url(detail.poster_path.as_deref()) {
                    output.line(url);
                }
                if !detail.overview.is_empty() {
                    output.line("");
                    output.line(&detail.overview);
                }
            }
            ExitCode::Success
        }
        Err(e) => output.error(e.to_string(), ExitCode::NetworkError),
    }
}

// =============================================================================
// Similar Command
// =============================================================================

pub async fn similar_cmd(cmd: SimilarCmd, output: &Output) -> ExitCode {
    output.info(format!("Fetching titles similar to {}...", cmd.id));

    match client().similar_movies(cmd.id).await {
        Ok(mut movies) => {
            movies.truncate(cmd.limit);
            if output.json {
                if let Err(e) = output.print(&movies) {
                    return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
                }
            } else if movies.is_empty() {
                output.line("No similar titles");
            } else {
                print_movie_lines(output, &movies);
            }
            ExitCode::Success
        }
        Err(e) => output.error(e.to_string(), ExitCode::NetworkError),
    }
}

// =============================================================================
// Trailer Command
// =============================================================================

pub async fn trailer_cmd(cmd: TrailerCmd, output: &Output) -> ExitCode {
    output.info(format!("Fetching videos for {}...", cmd.id));

    match client().movie_videos(cmd.id).await {
        Ok(videos) => match select_trailer(&videos) {
            Some(video) => {
                let url = player::watch_url(&video.key);
                if output.json {
                    #[derive(serde::Serialize)]
                    struct TrailerOut<'a> {
                        key: &'a str,
                        name: &'a str,
                        site: &'a str,
                        url: String,
                    }
                    let out = TrailerOut {
                        key: &video.key,
                        name: &video.name,
                        site: &video.site,
                        url,
                    };
                    if let Err(e) = output.print(&out) {
                        return output
                            .error(format!("Failed to serialize: {}", e), ExitCode::Error);
                    }
                } else {
                    output.line(url);
                }
                ExitCode::Success
            }
            None => output.error("no playable video for this title", ExitCode::Error),
        },
        Err(e) => output.error(e.to_string(), ExitCode::NetworkError),
    }
}
