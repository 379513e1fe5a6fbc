//! Data structures for ReelView
//!
//! Everything here is read-only catalog data: fetched from TMDB, held in
//! screen state while the screen is visible, and dropped on reload or exit.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// List Categories
// =============================================================================

/// The four browsable movie lists offered by the catalog service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListCategory {
    Popular,
    NowPlaying,
    Upcoming,
    TopRated,
}

impl ListCategory {
    /// All categories, in the order the Browse screen shows them.
    pub const ALL: [ListCategory; 4] = [
        ListCategory::Popular,
        ListCategory::NowPlaying,
        ListCategory::Upcoming,
        ListCategory::TopRated,
    ];

    /// URL path segment under `/movie/` for this list.
    pub fn path_segment(&self) -> &'static str {
        match self {
            ListCategory::Popular => "popular",
            ListCategory::NowPlaying => "now_playing",
            ListCategory::Upcoming => "upcoming",
            ListCategory::TopRated => "top_rated",
        }
    }

    /// Row heading shown in the Browse screen.
    pub fn label(&self) -> &'static str {
        match self {
            ListCategory::Popular => "Popular Movies",
            ListCategory::NowPlaying => "Now Playing",
            ListCategory::Upcoming => "Coming Soon",
            ListCategory::TopRated => "Top Rated",
        }
    }
}

impl fmt::Display for ListCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path_segment())
    }
}

// =============================================================================
// Movie Models
// =============================================================================

/// Movie summary as returned by the list and similar endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub overview: String,
    pub vote_average: f32,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub release_date: Option<String>,
}

impl Movie {
    /// Release year, if the release date is present and well-formed.
    pub fn year(&self) -> Option<u16> {
        self.release_date.as_deref().and_then(extract_year)
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.year() {
            Some(year) => write!(f, "{} ({}) ★ {:.1}", self.title, year, self.vote_average),
            None => write!(f, "{} ★ {:.1}", self.title, self.vote_average),
        }
    }
}

/// Full movie record from the detail endpoint.
///
/// Runtime and genres only exist here; list fetches never carry them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieDetail {
    pub id: u64,
    pub title: String,
    pub overview: String,
    pub vote_average: f32,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub release_date: Option<String>,
    pub runtime: Option<u32>,
    pub genres: Vec<String>,
}

impl MovieDetail {
    pub fn year(&self) -> Option<u16> {
        self.release_date.as_deref().and_then(extract_year)
    }

    /// Runtime as "2h 56m" / "45m", when known.
    pub fn runtime_str(&self) -> Option<String> {
        self.runtime.map(|mins| {
            let hours = mins / 60;
            let rest = mins % 60;
            if hours > 0 {
                format!("{}h {}m", hours, rest)
            } else {
                format!("{}m", rest)
            }
        })
    }
}

impl fmt::Display for MovieDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year = self.year().map(|y| format!(" ({})", y)).unwrap_or_default();
        write!(f, "{}{} ★ {:.1}", self.title, year, self.vote_average)?;
        if let Some(runtime) = self.runtime_str() {
            write!(f, " - {}", runtime)?;
        }
        Ok(())
    }
}

// =============================================================================
// Video Models
// =============================================================================

/// A playable media reference (trailer, clip, teaser) attached to a movie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    /// Opaque playback key, meaningful only to the hosting site.
    pub key: String,
    pub name: String,
    /// Hosting provider, e.g. "YouTube".
    pub site: String,
    /// The service's type tag, e.g. "Trailer" or "Clip".
    pub kind: String,
}

impl Video {
    pub fn is_youtube_trailer(&self) -> bool {
        self.kind == "Trailer" && self.site == "YouTube"
    }
}

impl fmt::Display for Video {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}/{}] {}", self.site, self.kind, self.name)
    }
}

/// Pick the video the play button should open.
///
/// The first YouTube trailer wins; failing that, the first video of any
/// kind. `None` means there is nothing playable and the play affordance
/// must not be offered.
pub fn select_trailer(videos: &[Video]) -> Option<&Video> {
    videos
        .iter()
        .find(|v| v.is_youtube_trailer())
        .or_else(|| videos.first())
}

// =============================================================================
// Utility Functions
// =============================================================================

/// Extract year from a date string like "2022-03-04".
fn extract_year(date: &str) -> Option<u16> {
    if date.len() >= 4 {
        date[..4].parse().ok()
    } else {
        None
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
