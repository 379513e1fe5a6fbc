//! Screen navigation state machine
//!
//! A standalone controller owning the single "what is on screen" value and
//! the parameters carried between screens. It renders nothing, so the whole
//! state machine is unit-testable without a terminal.
//!
//! Supported paths:
//! forward  Home -> Details, Browse -> Details, Details -> Details (similar
//!          title re-entry), Details -> Player;
//! backward Player -> Details, Details -> Browse (two fixed edges, not a
//!          general back-stack);
//! tab      Home <-> Browse, a parallel top-level selector shown only while
//!          one of those two screens is current.

use std::fmt;

/// The closed set of screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Browse,
    Details,
    Player,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Screen::Home => "Home",
            Screen::Browse => "Browse",
            Screen::Details => "Details",
            Screen::Player => "Player",
        };
        write!(f, "{}", name)
    }
}

/// The two tabs of the tab selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Browse,
}

impl Tab {
    pub fn screen(&self) -> Screen {
        match self {
            Tab::Home => Screen::Home,
            Tab::Browse => Screen::Browse,
        }
    }

    pub fn other(&self) -> Tab {
        match self {
            Tab::Home => Tab::Browse,
            Tab::Browse => Tab::Home,
        }
    }
}

/// Forward transition payloads, one per destination.
///
/// Each destination names exactly the parameters it needs, so navigating to
/// the player without a playback key cannot be expressed.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Details { movie_id: u64 },
    Player { video_key: String, title: String },
}

/// Parameters carried across transitions.
///
/// Entries are overwritten by forward transitions and never cleared: a
/// screen revisited later still sees the values from its last visit. The
/// backward edges leave the bag completely untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavParams {
    pub movie_id: Option<u64>,
    pub video_key: Option<String>,
    pub title: Option<String>,
}

/// Navigation controller: current screen + carried parameters.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    screen: Screen,
    tab: Tab,
    params: NavParams,
}

impl Navigator {
    /// Start at Home with an empty parameter bag
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_screen(&self) -> Screen {
        self.screen
    }

    pub fn params(&self) -> &NavParams {
        &self.params
    }

    /// Active tab of the Home/Browse selector
    pub fn active_tab(&self) -> Tab {
        self.tab
    }

    /// Whether the tab bar is visible (only over Home and Browse)
    pub fn tab_bar_visible(&self) -> bool {
        matches!(self.screen, Screen::Home | Screen::Browse)
    }

    /// Take a forward edge: store the route's parameters, then switch screens.
    ///
    /// Synchronous and infallible; the caller re-renders afterwards.
    pub fn transition(&mut self, route: Route) {
        match route {
            Route::Details { movie_id } => {
                self.params.movie_id = Some(movie_id);
                self.screen = Screen::Details;
            }
            Route::Player { video_key, title } => {
                self.params.video_key = Some(video_key);
                self.params.title = Some(title);
                self.screen = Screen::Player;
            }
        }
    }

    /// Take a backward edge: Player -> Details or Details -> Browse.
    ///
    /// The parameter bag is left as-is. Returns false (and does nothing)
    /// from Home or Browse, which have no backward edge.
    pub fn back(&mut self) -> bool {
        match self.screen {
            Screen::Player => {
                self.screen = Screen::Details;
                true
            }
            Screen::Details => {
                self.screen = Screen::Browse;
                self.tab = Tab::Browse;
                true
            }
            Screen::Home | Screen::Browse => false,
        }
    }

    /// Switch the Home/Browse tab. Ignored while Details or Player is up.
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        if !self.tab_bar_visible() {
            return false;
        }
        self.tab = tab;
        self.screen = tab.screen();
        true
    }

    /// Switch to whichever of Home/Browse is not active
    pub fn toggle_tab(&mut self) -> bool {
        self.select_tab(self.tab.other())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
