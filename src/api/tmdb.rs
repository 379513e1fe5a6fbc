//! TMDB (The Movie Database) API client
//!
//! Read-only catalog access: the four browse lists, per-movie details,
//! similar titles, and trailer metadata.
//! API docs: https://developer.themoviedb.org/docs

use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::models::{ListCategory, Movie, MovieDetail, Video};

/// Base URL of the image-serving origin. URLs are `{base}/{tier}{path}`.
const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// TMDB API error types
#[derive(Error, Debug)]
pub enum TmdbError {
    #[error("page must be >= 1, got {0}")]
    InvalidPage(u32),

    #[error("resource not found (404)")]
    NotFound,

    #[error("server returned status {0}")]
    Status(u16),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("failed to fetch {category} list (page {page}): {source}")]
    List {
        category: ListCategory,
        page: u32,
        source: Box<TmdbError>,
    },
}

/// TMDB API client
///
/// Stateless wrapper over the catalog endpoints. The API key travels as the
/// `api_key` query parameter on every request (the service's legacy scheme).
pub struct TmdbClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl TmdbClient {
    /// Create a new client with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, "https://api.themoviedb.org/3")
    }

    /// Create a client with a custom base URL (for testing)
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
        }
    }

    /// Make an authenticated GET request and deserialize the JSON body
    async fn get<T: for<'de> Deserialize<'de>>(
        &self,
        endpoint: &str,
        extra: &[(&str, String)],
    ) -> Result<T, TmdbError> {
        let url = format!("{}{}", self.base_url, endpoint);

        let response = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(extra)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                let body = response.text().await?;
                serde_json::from_str(&body)
                    .map_err(|e| TmdbError::InvalidResponse(format!("JSON parse error: {}", e)))
            }
            StatusCode::NOT_FOUND => Err(TmdbError::NotFound),
            status => Err(TmdbError::Status(status.as_u16())),
        }
    }

    /// Fetch one page of a browse list.
    ///
    /// Failures carry the category and page so the caller can tell which
    /// list broke. `page` starts at 1; 0 is rejected without a request.
    pub async fn fetch_list(
        &self,
        category: ListCategory,
        page: u32,
    ) -> Result<Vec<Movie>, TmdbError> {
        if page < 1 {
            return Err(TmdbError::InvalidPage(page));
        }

        let endpoint = format!("/movie/{}", category.path_segment());
        let response: Result<ListResponse, _> = self
            .get(&endpoint, &[("page", page.to_string())])
            .await;

        match response {
            Ok(list) => Ok(list.into_movies()),
            Err(source) => Err(TmdbError::List {
                category,
                page,
                source: Box::new(source),
            }),
        }
    }

    /// Get the full record for one movie, including runtime and genres
    pub async fn movie_detail(&self, id: u64) -> Result<MovieDetail, TmdbError> {
        let endpoint = format!("/movie/{}", id);
        let response: DetailResponse = self.get(&endpoint, &[]).await?;
        Ok(response.into_detail())
    }

    /// Get movies similar to the given one. An empty list is a valid answer.
    pub async fn similar_movies(&self, id: u64) -> Result<Vec<Movie>, TmdbError> {
        let endpoint = format!("/movie/{}/similar", id);
        let response: ListResponse = self.get(&endpoint, &[]).await?;
        Ok(response.into_movies())
    }

    /// Get trailer/clip metadata for a movie. An empty list is a valid answer.
    pub async fn movie_videos(&self, id: u64) -> Result<Vec<Video>, TmdbError> {
        let endpoint = format!("/movie/{}/videos", id);
        let response: VideosResponse = self.get(&endpoint, &[]).await?;
        Ok(response.into_videos())
    }
}

// =============================================================================
// Image URLs
// =============================================================================

/// Image resolution tiers used by this client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSize {
    /// Poster artwork (w500)
    Poster,
    /// Wider backdrop artwork (w780)
    Backdrop,
}

impl ImageSize {
    pub fn tier(&self) -> &'static str {
        match self {
            ImageSize::Poster => "w500",
            ImageSize::Backdrop => "w780",
        }
    }
}

/// Build a full image URL from a partial path.
///
/// Pure string assembly: no request is made and the result may 404. An
/// absent or empty path yields `None` and the caller renders a placeholder.
pub fn image_url(path: Option<&str>, size: ImageSize) -> Option<String> {
    match path {
        Some(p) if !p.is_empty() => Some(format!("{}/{}{}", IMAGE_BASE_URL, size.tier(), p)),
        _ => None,
    }
}

/// Poster-tier image URL
pub fn poster_url(path: Option<&str>) -> Option<String> {
    image_url(path, ImageSize::Poster)
}

/// Backdrop-tier image URL
pub fn backdrop_url(path: Option<&str>) -> Option<String> {
    image_url(path, ImageSize::Backdrop)
}

// =============================================================================
// Response Structures (internal deserialization)
// =============================================================================

#[derive(Debug, Deserialize)]
struct ListResponse {
    results: Vec<MovieRaw>,
}

impl ListResponse {
    fn into_movies(self) -> Vec<Movie> {
        self.results.into_iter().map(MovieRaw::into_movie).collect()
    }
}

#[derive(Debug, Deserialize)]
struct MovieRaw {
    id: u64,
    title: Option<String>,
    overview: Option<String>,
    vote_average: Option<f32>,
    poster_path: Option<String>,
    backdrop_path: Option<String>,
    release_date: Option<String>,
}

impl MovieRaw {
    fn into_movie(self) -> Movie {
        Movie {
            id: self.id,
            title: self.title.unwrap_or_default(),
            overview: self.overview.unwrap_or_default(),
            vote_average: self.vote_average.unwrap_or(0.0),
            poster_path: self.poster_path,
            backdrop_path: self.backdrop_path,
            release_date: self.release_date,
        }
    }
}

#[derive(Debug, Deserialize)]
struct DetailResponse {
    id: u64,
    title: String,
    overview: Option<String>,
    vote_average: Option<f32>,
    poster_path: Option<String>,
    backdrop_path: Option<String>,
    release_date: Option<String>,
    runtime: Option<u32>,
    #[serde(default)]
    genres: Vec<GenreRaw>,
}

impl DetailResponse {
    fn into_detail(self) -> MovieDetail {
        MovieDetail {
            id: self.id,
            title: self.title,
            overview: self.overview.unwrap_or_default(),
            vote_average: self.vote_average.unwrap_or(0.0),
            poster_path: self.poster_path,
            backdrop_path: self.backdrop_path,
            release_date: self.release_date,
            runtime: self.runtime,
            genres: self.genres.into_iter().map(|g| g.name).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenreRaw {
    name: String,
}

#[derive(Debug, Deserialize)]
struct VideosResponse {
    results: Vec<VideoRaw>,
}

impl VideosResponse {
    fn into_videos(self) -> Vec<Video> {
        self.results.into_iter().map(VideoRaw::into_video).collect()
    }
}

#[derive(Debug, Deserialize)]
struct VideoRaw {
    id: String,
    key: String,
    name: Option<String>,
    site: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

impl VideoRaw {
    fn into_video(self) -> Video {
        Video {
            id: self.id,
            key: self.key,
            name: self.name.unwrap_or_default(),
            site: self.site.unwrap_or_default(),
            kind: self.kind.unwrap_or_default(),
        }
    }
}
