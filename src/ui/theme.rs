//! Color palette and style helpers for the TUI
//!
//! A dark cinema look: deep charcoal background, the brand blue of the
//! original client for chrome, gold for ratings.

use ratatui::style::{Color, Modifier, Style};

/// ReelView color palette
pub struct Theme;

impl Theme {
    /// Background: deep charcoal
    pub const BACKGROUND: Color = Color::Rgb(0x10, 0x10, 0x14);

    /// Primary: brand blue
    pub const PRIMARY: Color = Color::Rgb(0x00, 0x7a, 0xff);

    /// Accent: rating gold
    pub const ACCENT: Color = Color::Rgb(0xff, 0xd7, 0x00);

    /// Text: soft white
    pub const TEXT: Color = Color::Rgb(0xe6, 0xe6, 0xe6);

    /// Dim: muted gray
    pub const DIM: Color = Color::Rgb(0x5a, 0x5a, 0x66);

    /// Success: green
    pub const SUCCESS: Color = Color::Rgb(0x30, 0xd1, 0x58);

    /// Warning: orange
    pub const WARNING: Color = Color::Rgb(0xff, 0x9f, 0x0a);

    /// Error: red
    pub const ERROR: Color = Color::Rgb(0xff, 0x45, 0x3a);

    /// Slightly lighter background for the status bar
    pub const BACKGROUND_LIGHT: Color = Color::Rgb(0x1a, 0x1a, 0x22);

    /// Border color (dim blue)
    pub const BORDER: Color = Color::Rgb(0x20, 0x4a, 0x7d);

    /// Border color when focused (full blue)
    pub const BORDER_FOCUSED: Color = Self::PRIMARY;

    // ═══════════════════════════════════════════════════════════════════════
    // STYLE HELPERS
    // ═══════════════════════════════════════════════════════════════════════

    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Self::TEXT)
    }

    /// Dimmed/muted text
    pub fn dimmed() -> Style {
        Style::default().fg(Self::DIM)
    }

    /// Title/header style
    pub fn title() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Accent text style (gold)
    pub fn accent() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected list item (inverted on blue)
    pub fn selected() -> Style {
        Style::default()
            .fg(Self::BACKGROUND)
            .bg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Error style
    pub fn error() -> Style {
        Style::default()
            .fg(Self::ERROR)
            .add_modifier(Modifier::BOLD)
    }

    /// Normal border
    pub fn border() -> Style {
        Style::default().fg(Self::BORDER)
    }

    /// Focused border
    pub fn border_focused() -> Style {
        Style::default()
            .fg(Self::BORDER_FOCUSED)
            .add_modifier(Modifier::BOLD)
    }

    /// Loading indicator
    pub fn loading() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Status bar
    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND_LIGHT)
    }

    /// Active tab label
    pub fn tab_active() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Inactive tab label
    pub fn tab_inactive() -> Style {
        Style::default().fg(Self::DIM)
    }

    /// Keybinding hint
    pub fn keybind() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    /// Rating style by value: green is good, orange middling, dim poor
    pub fn rating(rating: f32) -> Style {
        if rating >= 7.5 {
            Style::default().fg(Self::SUCCESS)
        } else if rating >= 6.0 {
            Style::default().fg(Self::WARNING)
        } else {
            Style::default().fg(Self::DIM)
        }
    }
}
