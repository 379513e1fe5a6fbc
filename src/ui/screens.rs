//! Screen renderers
//!
//! Pure view layer: every function reads `App` state and draws widgets.
//! Nothing in here mutates state or performs I/O.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::models::Movie;
use crate::nav::{Screen, Tab};
use crate::player;
use crate::ui::Theme;

/// Top-level render: content for the current screen, the tab bar while it
/// is visible, and the status line.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default().style(ratatui::style::Style::default().bg(Theme::BACKGROUND)),
        area,
    );

    let mut constraints = vec![Constraint::Min(1)];
    if app.nav.tab_bar_visible() {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    match app.nav.current_screen() {
        Screen::Home => render_home(frame, chunks[0], app),
        Screen::Browse => render_browse(frame, chunks[0], app),
        Screen::Details => render_details(frame, chunks[0], app),
        Screen::Player => render_player(frame, chunks[0], app),
    }

    if app.nav.tab_bar_visible() {
        render_tab_bar(frame, chunks[1], app);
    }
    render_status_bar(frame, chunks[chunks.len() - 1], app);
}

/// Centered loading frame drawn before a screen's fetches are awaited
pub fn render_loading(frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default().style(ratatui::style::Style::default().bg(Theme::BACKGROUND)),
        area,
    );

    let loading = Paragraph::new("⟳ Loading...")
        .style(Theme::loading())
        .alignment(Alignment::Center);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(1),
            Constraint::Percentage(45),
        ])
        .split(area);
    frame.render_widget(loading, vertical[1]);
}

// =============================================================================
// Home Screen
// =============================================================================

fn render_home(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border_focused())
        .title(Span::styled(" ✨ FEATURED TODAY ", Theme::title()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.home.movies.is_empty() {
        let empty = Paragraph::new("No featured titles")
            .style(Theme::dimmed())
            .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(app.home.movies.len() as u16 + 1),
            Constraint::Min(1),
        ])
        .split(inner);

    let items: Vec<ListItem> = app
        .home
        .movies
        .iter()
        .enumerate()
        .map(|(i, movie)| movie_line(movie, i == app.home.selected))
        .collect();
    frame.render_widget(List::new(items), chunks[0]);

    // Synopsis of the highlighted title below the list
    if let Some(movie) = app.home.selected_movie() {
        let mut lines = vec![Line::from("")];
        if !movie.overview.is_empty() {
            lines.push(Line::from(Span::styled(movie.overview.clone(), Theme::text())));
        }
        let synopsis = Paragraph::new(Text::from(lines)).wrap(Wrap { trim: true });
        frame.render_widget(synopsis, chunks[1]);
    }
}

fn movie_line(movie: &Movie, is_selected: bool) -> ListItem<'static> {
    let marker = if is_selected { "▸ " } else { "  " };
    let year_str = movie.year().map(|y| format!(" ({})", y)).unwrap_or_default();

    let line = Line::from(vec![
        Span::styled(
            marker.to_string(),
            if is_selected { Theme::accent() } else { Theme::dimmed() },
        ),
        Span::styled(
            movie.title.clone(),
            if is_selected { Theme::selected() } else { Theme::text() },
        ),
        Span::styled(year_str, Theme::dimmed()),
        Span::raw(" "),
        Span::styled(
            format!("★ {:.1}", movie.vote_average),
            Theme::rating(movie.vote_average),
        ),
    ]);

    ListItem::new(line)
}

// =============================================================================
// Browse Screen
// =============================================================================

fn render_browse(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    for (row_idx, row_area) in rows.iter().enumerate() {
        render_browse_row(frame, *row_area, app, row_idx);
    }
}

fn render_browse_row(frame: &mut Frame, area: Rect, app: &App, row_idx: usize) {
    let is_active = row_idx == app.browse.active_row;
    let category = crate::models::ListCategory::ALL[row_idx];
    let movies = &app.browse.lists[row_idx];
    let cursor = app.browse.cursors[row_idx];

    let border_style = if is_active {
        Theme::border_focused()
    } else {
        Theme::border()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(Span::styled(format!(" {} ", category.label()), Theme::title()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if movies.is_empty() {
        let empty = Paragraph::new("Nothing here")
            .style(Theme::dimmed())
            .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    // Horizontal strip of titles, windowed around the cursor
    let mut spans = Vec::new();
    for (i, movie) in movies.iter().enumerate().skip(cursor.saturating_sub(2)) {
        let selected = is_active && i == cursor;
        spans.push(Span::styled(
            format!(" {} ", movie.title),
            if selected { Theme::selected() } else { Theme::text() },
        ));
        spans.push(Span::styled(
            format!("★{:.1}", movie.vote_average),
            Theme::rating(movie.vote_average),
        ));
        spans.push(Span::styled("  │ ", Theme::dimmed()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

// =============================================================================
// Details Screen
// =============================================================================

fn render_details(frame: &mut Frame, area: Rect, app: &App) {
    let Some(movie) = &app.details.movie else {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border())
            .title(Span::styled(" DETAILS ", Theme::title()));
        let not_found = Paragraph::new("Movie not found")
            .style(Theme::dimmed())
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(not_found, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(4)])
        .split(area);

    // Info panel
    let title_text = format!(" {} ", movie.title);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border_focused())
        .title(Span::styled(title_text, Theme::title()));
    let inner = block.inner(chunks[0]);
    frame.render_widget(block, chunks[0]);

    let mut meta_spans = vec![Span::styled(
        format!("★ {:.1}/10", movie.vote_average),
        Theme::rating(movie.vote_average),
    )];
    if let Some(year) = movie.year() {
        meta_spans.push(Span::styled(" │ ", Theme::dimmed()));
        meta_spans.push(Span::styled(year.to_string(), Theme::text()));
    }
    if let Some(runtime) = movie.runtime_str() {
        meta_spans.push(Span::styled(" │ ", Theme::dimmed()));
        meta_spans.push(Span::styled(runtime, Theme::text()));
    }

    let mut lines = vec![Line::from(meta_spans)];
    if !movie.genres.is_empty() {
        lines.push(Line::from(Span::styled(
            movie.genres.join(", "),
            Theme::dimmed(),
        )));
    }
    if app.details.trailer().is_some() {
        lines.push(Line::from(vec![
            Span::styled(" p ", Theme::keybind()),
            Span::styled("▶ Play Trailer", Theme::text()),
        ]));
    }
    lines.push(Line::from(""));
    if !movie.overview.is_empty() {
        lines.push(Line::from(Span::styled(movie.overview.clone(), Theme::text())));
    }

    let info = Paragraph::new(Text::from(lines)).wrap(Wrap { trim: true });
    frame.render_widget(info, inner);

    // Similar titles strip
    render_similar_strip(frame, chunks[1], app);
}

fn render_similar_strip(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border())
        .title(Span::styled(" MORE LIKE THIS ", Theme::title()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.details.similar.is_empty() {
        let empty = Paragraph::new("No similar titles")
            .style(Theme::dimmed())
            .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    let cursor = app.details.similar_selected;
    let mut spans = Vec::new();
    for (i, movie) in app
        .details
        .similar
        .iter()
        .enumerate()
        .skip(cursor.saturating_sub(2))
    {
        let selected = i == cursor;
        spans.push(Span::styled(
            format!(" {} ", movie.title),
            if selected { Theme::selected() } else { Theme::text() },
        ));
        spans.push(Span::styled("  │ ", Theme::dimmed()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

// =============================================================================
// Player Screen
// =============================================================================

fn render_player(frame: &mut Frame, area: Rect, app: &App) {
    let params = app.nav.params();
    let title = params.title.as_deref().unwrap_or("Trailer");

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border_focused())
        .title(Span::styled(" ▶ NOW PLAYING ", Theme::title()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(title.to_string(), Theme::accent())),
        Line::from(""),
    ];

    match params.video_key.as_deref() {
        Some(key) => {
            lines.push(Line::from(Span::styled(
                player::watch_url(key),
                Theme::text(),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Open the link above to watch the trailer",
                Theme::dimmed(),
            )));
        }
        None => {
            lines.push(Line::from(Span::styled("No video selected", Theme::dimmed())));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(" ESC ", Theme::keybind()),
        Span::styled("Back to details", Theme::dimmed()),
    ]));

    let content = Paragraph::new(Text::from(lines)).alignment(Alignment::Center);
    frame.render_widget(content, inner);
}

// =============================================================================
// Chrome
// =============================================================================

fn render_tab_bar(frame: &mut Frame, area: Rect, app: &App) {
    let active = app.nav.active_tab();
    let line = Line::from(vec![
        Span::raw("  "),
        Span::styled(
            "🏠 Home",
            if active == Tab::Home { Theme::tab_active() } else { Theme::tab_inactive() },
        ),
        Span::styled("   │   ", Theme::dimmed()),
        Span::styled(
            "🎬 Browse",
            if active == Tab::Browse { Theme::tab_active() } else { Theme::tab_inactive() },
        ),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let screen_indicator = Span::styled(
        format!(" {} ", app.nav.current_screen().to_string().to_uppercase()),
        ratatui::style::Style::default()
            .fg(Theme::BACKGROUND)
            .bg(Theme::PRIMARY),
    );

    let keys = match app.nav.current_screen() {
        Screen::Home => " ↑↓:select  ↵:details  TAB:browse  q:quit ",
        Screen::Browse => " ↑↓:row  ←→:title  ↵:details  TAB:home  q:quit ",
        Screen::Details => " ←→:similar  ↵:open  p:play  ESC:back  q:quit ",
        Screen::Player => " ESC:back  q:quit ",
    };

    let mut spans = vec![
        screen_indicator,
        Span::raw(" "),
        Span::styled(keys, Theme::dimmed()),
    ];

    if let Some(error) = &app.error {
        spans.push(Span::styled(" ✗ ", Theme::error()));
        spans.push(Span::styled(error.clone(), Theme::error()));
    }

    let status = Paragraph::new(Line::from(spans)).style(Theme::status_bar());
    frame.render_widget(status, area);
}
