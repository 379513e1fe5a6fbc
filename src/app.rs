//! App state and core application logic
//!
//! Owns the navigation controller, the per-screen view state, and the
//! screen load routines. Keyboard handling mutates state only; the render
//! layer in `main` reads it.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::api::TmdbClient;
use crate::models::{select_trailer, ListCategory, Movie, MovieDetail, Video};
use crate::nav::{Navigator, Route, Screen};

/// How many popular titles the Home screen features.
const FEATURED_COUNT: usize = 5;

/// How many similar titles the Details screen offers.
const SIMILAR_COUNT: usize = 10;

// =============================================================================
// Per-Screen State
// =============================================================================

/// Home screen: the featured slice of the popular list.
#[derive(Debug, Clone, Default)]
pub struct HomeState {
    pub movies: Vec<Movie>,
    pub selected: usize,
}

impl HomeState {
    pub fn set_movies(&mut self, movies: Vec<Movie>) {
        self.movies = movies;
        self.selected = 0;
    }

    pub fn up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn down(&mut self) {
        if self.selected + 1 < self.movies.len() {
            self.selected += 1;
        }
    }

    pub fn selected_movie(&self) -> Option<&Movie> {
        self.movies.get(self.selected)
    }
}

/// Browse screen: the four category rows plus a row/column cursor.
///
/// `lists` is indexed parallel to [`ListCategory::ALL`].
#[derive(Debug, Clone, Default)]
pub struct BrowseState {
    pub lists: [Vec<Movie>; 4],
    pub active_row: usize,
    pub cursors: [usize; 4],
}

impl BrowseState {
    /// Replace all four rows at once. Rows are only ever set together:
    /// either every category loaded or every row is empty.
    pub fn set_lists(&mut self, lists: [Vec<Movie>; 4]) {
        self.lists = lists;
        self.active_row = 0;
        self.cursors = [0; 4];
    }

    pub fn clear(&mut self) {
        self.set_lists(Default::default());
    }

    pub fn row_up(&mut self) {
        self.active_row = self.active_row.saturating_sub(1);
    }

    pub fn row_down(&mut self) {
        if self.active_row + 1 < self.lists.len() {
            self.active_row += 1;
        }
    }

    pub fn cursor_left(&mut self) {
        let cursor = &mut self.cursors[self.active_row];
        *cursor = cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        let len = self.lists[self.active_row].len();
        let cursor = &mut self.cursors[self.active_row];
        if *cursor + 1 < len {
            *cursor += 1;
        }
    }

    pub fn selected_movie(&self) -> Option<&Movie> {
        self.lists[self.active_row].get(self.cursors[self.active_row])
    }

    pub fn is_empty(&self) -> bool {
        self.lists.iter().all(|l| l.is_empty())
    }
}

/// Details screen: the full record plus similar titles and videos.
#[derive(Debug, Clone, Default)]
pub struct DetailsState {
    pub movie: Option<MovieDetail>,
    pub similar: Vec<Movie>,
    pub videos: Vec<Video>,
    pub similar_selected: usize,
}

impl DetailsState {
    pub fn set_data(&mut self, movie: MovieDetail, similar: Vec<Movie>, videos: Vec<Video>) {
        self.movie = Some(movie);
        self.similar = similar;
        self.videos = videos;
        self.similar_selected = 0;
    }

    pub fn clear(&mut self) {
        self.movie = None;
        self.similar.clear();
        self.videos.clear();
        self.similar_selected = 0;
    }

    pub fn similar_left(&mut self) {
        self.similar_selected = self.similar_selected.saturating_sub(1);
    }

    pub fn similar_right(&mut self) {
        if self.similar_selected + 1 < self.similar.len() {
            self.similar_selected += 1;
        }
    }

    pub fn selected_similar(&self) -> Option<&Movie> {
        self.similar.get(self.similar_selected)
    }

    /// The video the play key would open, if any.
    pub fn trailer(&self) -> Option<&Video> {
        select_trailer(&self.videos)
    }
}

// =============================================================================
// Main Application State
// =============================================================================

/// Main application state
#[derive(Debug, Default)]
pub struct App {
    /// Navigation controller (single source of truth for the visible screen)
    pub nav: Navigator,
    /// Whether the app is running
    pub running: bool,
    /// Last load error, shown in the status line
    pub error: Option<String>,
    /// Screen whose data must be (re)fetched before the next render
    pending_load: Option<Screen>,

    pub home: HomeState,
    pub browse: BrowseState,
    pub details: DetailsState,
}

impl App {
    pub fn new() -> Self {
        Self {
            running: true,
            // Home fetches on first render, like every screen entry
            pending_load: Some(Screen::Home),
            ..Self::default()
        }
    }

    /// Screen waiting on a fetch, if any. Cleared by [`App::load_screen`].
    pub fn pending_load(&self) -> Option<Screen> {
        self.pending_load
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.running = false;
    }

    fn report_error(&mut self, err: impl ToString) {
        self.error = Some(err.to_string());
    }

    /// Mark the currently visible screen for a fresh fetch.
    ///
    /// Every entry into a screen re-triggers its load from scratch; a
    /// failed fetch is final only for that visit.
    fn mark_current_for_load(&mut self) {
        match self.nav.current_screen() {
            Screen::Home | Screen::Browse | Screen::Details => {
                self.pending_load = Some(self.nav.current_screen());
            }
            // Player renders purely from the parameter bag
            Screen::Player => {}
        }
    }

    // -------------------------------------------------------------------------
    // Screen Loading
    // -------------------------------------------------------------------------

    /// Fetch data for the pending screen, if any.
    ///
    /// Awaited inline on the UI task, so a load always completes (or fails)
    /// before input is handled again and can never write into a screen the
    /// user has already left.
    pub async fn load_screen(&mut self, client: &TmdbClient) {
        let Some(screen) = self.pending_load.take() else {
            return;
        };
        match screen {
            Screen::Home => self.load_home(client).await,
            Screen::Browse => self.load_browse(client).await,
            Screen::Details => self.load_details(client).await,
            Screen::Player => {}
        }
    }

    async fn load_home(&mut self, client: &TmdbClient) {
        match client.fetch_list(ListCategory::Popular, 1).await {
            Ok(mut movies) => {
                movies.truncate(FEATURED_COUNT);
                self.home.set_movies(movies);
            }
            Err(e) => {
                self.report_error(e);
                self.home.set_movies(Vec::new());
            }
        }
    }

    /// Load all four Browse rows concurrently, all-or-nothing: if any one
    /// list fails, every row falls back to empty rather than rendering a
    /// partial screen.
    async fn load_browse(&mut self, client: &TmdbClient) {
        let joined = tokio::try_join!(
            client.fetch_list(ListCategory::Popular, 1),
            client.fetch_list(ListCategory::NowPlaying, 1),
            client.fetch_list(ListCategory::Upcoming, 1),
            client.fetch_list(ListCategory::TopRated, 1),
        );
        match joined {
            Ok((popular, now_playing, upcoming, top_rated)) => {
                self.browse
                    .set_lists([popular, now_playing, upcoming, top_rated]);
            }
            Err(e) => {
                self.report_error(e);
                self.browse.clear();
            }
        }
    }

    /// Load detail, similar titles, and videos concurrently for the movie
    /// id carried in the parameter bag. Same all-or-nothing join as Browse.
    async fn load_details(&mut self, client: &TmdbClient) {
        let Some(id) = self.nav.params().movie_id else {
            // Nothing selected yet; stale visits render "not found"
            self.details.clear();
            return;
        };
        let joined = tokio::try_join!(
            client.movie_detail(id),
            client.similar_movies(id),
            client.movie_videos(id),
        );
        match joined {
            Ok((movie, mut similar, videos)) => {
                similar.truncate(SIMILAR_COUNT);
                self.details.set_data(movie, similar, videos);
            }
            Err(e) => {
                self.report_error(e);
                self.details.clear();
            }
        }
    }

    // -------------------------------------------------------------------------
    // Navigation Actions
    // -------------------------------------------------------------------------

    /// Open the Details screen for a movie
    pub fn open_details(&mut self, movie_id: u64) {
        self.nav.transition(Route::Details { movie_id });
        self.mark_current_for_load();
    }

    /// Open the Player for the current detail's selected trailer.
    ///
    /// Does nothing when there is no playable video.
    pub fn play_trailer(&mut self) -> bool {
        let (key, title) = match (self.details.trailer(), &self.details.movie) {
            (Some(video), Some(movie)) => (video.key.clone(), movie.title.clone()),
            _ => return false,
        };
        self.nav.transition(Route::Player {
            video_key: key,
            title,
        });
        true
    }

    /// Run the fixed backward edge for the current screen
    pub fn go_back(&mut self) -> bool {
        if self.nav.back() {
            self.mark_current_for_load();
            true
        } else {
            false
        }
    }

    /// Toggle the Home/Browse tab
    pub fn toggle_tab(&mut self) -> bool {
        if self.nav.toggle_tab() {
            self.mark_current_for_load();
            true
        } else {
            false
        }
    }

    // -------------------------------------------------------------------------
    // Keyboard Event Handling
    // -------------------------------------------------------------------------

    /// Handle a key press, returns true if it was consumed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Any keypress dismisses the last error
        self.error = None;

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return true;
        }

        match key.code {
            KeyCode::Char('q') => {
                self.quit();
                return true;
            }
            KeyCode::Tab => return self.toggle_tab(),
            KeyCode::Esc => return self.go_back(),
            _ => {}
        }

        match self.nav.current_screen() {
            Screen::Home => self.handle_home_key(key),
            Screen::Browse => self.handle_browse_key(key),
            Screen::Details => self.handle_details_key(key),
            Screen::Player => false,
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.home.up();
                true
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.home.down();
                true
            }
            KeyCode::Enter => {
                if let Some(id) = self.home.selected_movie().map(|m| m.id) {
                    self.open_details(id);
                }
                true
            }
            _ => false,
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.browse.row_up();
                true
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.browse.row_down();
                true
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.browse.cursor_left();
                true
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.browse.cursor_right();
                true
            }
            KeyCode::Enter => {
                if let Some(id) = self.browse.selected_movie().map(|m| m.id) {
                    self.open_details(id);
                }
                true
            }
            _ => false,
        }
    }

    fn handle_details_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.details.similar_left();
                true
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.details.similar_right();
                true
            }
            KeyCode::Enter => {
                // Re-enter Details on the selected similar title
                if let Some(id) = self.details.selected_similar().map(|m| m.id) {
                    self.open_details(id);
                }
                true
            }
            KeyCode::Char('p') => self.play_trailer(),
            _ => false,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
