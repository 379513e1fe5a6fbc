//! Terminal UI components
//!
//! Built with ratatui. Keyboard-first navigation throughout.

pub mod screens;
pub mod theme;

pub use theme::Theme;
