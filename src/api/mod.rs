//! API clients for external services
//!
//! - TMDB: movie lists, details, similar titles, and trailer metadata

pub mod tmdb;

pub use tmdb::TmdbClient;
