//! End-to-end flow tests for ReelView
//!
//! Drives the app state machine against a mock catalog server: screen
//! loads, navigation between screens, and the all-or-nothing join policy.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mockito::{Matcher, Server, ServerGuard};
use reelview::api::TmdbClient;
use reelview::app::App;
use reelview::nav::Screen;

// =============================================================================
// Mock Response Fixtures
// =============================================================================

fn popular_body() -> &'static str {
    r#"{
        "page": 1,
        "results": [
            {
                "id": 550,
                "title": "Fight Club",
                "overview": "An insomniac office worker crosses paths with a soap maker.",
                "vote_average": 8.4,
                "poster_path": "/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg",
                "backdrop_path": "/fCayJrkfRaCRCTh8GqN30f8oyQF.jpg",
                "release_date": "1999-10-15"
            },
            {
                "id": 680,
                "title": "Pulp Fiction",
                "overview": "A burger-loving hit man and his partner.",
                "vote_average": 8.5,
                "poster_path": "/d5iIlFn5s0ImszYzBPb8JPIfbXD.jpg",
                "backdrop_path": null,
                "release_date": "1994-09-10"
            }
        ],
        "total_pages": 1,
        "total_results": 2
    }"#
}

fn generic_list_body() -> &'static str {
    r#"{
        "page": 1,
        "results": [
            {
                "id": 11,
                "title": "Some Movie",
                "overview": "",
                "vote_average": 6.1,
                "poster_path": null,
                "backdrop_path": null,
                "release_date": "2020-02-02"
            }
        ],
        "total_pages": 1,
        "total_results": 1
    }"#
}

fn detail_body_550() -> &'static str {
    r#"{
        "id": 550,
        "title": "Fight Club",
        "overview": "An insomniac office worker crosses paths with a soap maker.",
        "vote_average": 8.4,
        "poster_path": "/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg",
        "backdrop_path": "/fCayJrkfRaCRCTh8GqN30f8oyQF.jpg",
        "release_date": "1999-10-15",
        "runtime": 139,
        "genres": [{"id": 18, "name": "Drama"}]
    }"#
}

fn similar_body() -> &'static str {
    r#"{
        "page": 1,
        "results": [
            {
                "id": 807,
                "title": "Se7en",
                "overview": "Two homicide detectives.",
                "vote_average": 8.4,
                "poster_path": "/6yoghtyTpznpBik8EngEmJskVUO.jpg",
                "backdrop_path": null,
                "release_date": "1995-09-22"
            }
        ],
        "total_pages": 1,
        "total_results": 1
    }"#
}

fn videos_body() -> &'static str {
    r#"{
        "id": 550,
        "results": [
            {"id": "v1", "key": "c1", "name": "Scene", "site": "YouTube", "type": "Clip"},
            {"id": "v2", "key": "k1", "name": "Trailer", "site": "YouTube", "type": "Trailer"},
            {"id": "v3", "key": "k2", "name": "Trailer", "site": "Vimeo", "type": "Trailer"}
        ]
    }"#
}

async fn mock_details_endpoints(server: &mut ServerGuard) -> Vec<mockito::Mock> {
    let detail = server
        .mock("GET", "/movie/550")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(detail_body_550())
        .create_async()
        .await;
    let similar = server
        .mock("GET", "/movie/550/similar")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(similar_body())
        .create_async()
        .await;
    let videos = server
        .mock("GET", "/movie/550/videos")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(videos_body())
        .create_async()
        .await;
    vec![detail, similar, videos]
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::empty()));
}

// =============================================================================
// Home -> Details Flow
// =============================================================================

#[tokio::test]
async fn test_home_select_fetches_details_keyed_on_selection() {
    let mut server = Server::new_async().await;

    let popular = server
        .mock("GET", "/movie/popular")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(popular_body())
        .create_async()
        .await;
    let detail_mocks = mock_details_endpoints(&mut server).await;

    let client = TmdbClient::with_base_url("test_key", server.url());
    let mut app = App::new();

    // Home mounts and fetches its featured list
    app.load_screen(&client).await;
    popular.assert_async().await;
    assert_eq!(app.home.movies.len(), 2);

    // Select the first featured title
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.nav.current_screen(), Screen::Details);
    assert_eq!(app.nav.params().movie_id, Some(550));
    assert_eq!(app.pending_load(), Some(Screen::Details));

    // Details mounts and independently fetches all three endpoints for 550
    app.load_screen(&client).await;
    for mock in &detail_mocks {
        mock.assert_async().await;
    }

    let movie = app.details.movie.as_ref().unwrap();
    assert_eq!(movie.id, 550);
    assert_eq!(movie.runtime, Some(139));
    assert_eq!(app.details.similar.len(), 1);
    assert_eq!(app.details.videos.len(), 3);
}

// =============================================================================
// Browse Join Policy
// =============================================================================

#[tokio::test]
async fn test_browse_loads_all_four_lists() {
    let mut server = Server::new_async().await;

    let mut mocks = Vec::new();
    for path in [
        "/movie/popular",
        "/movie/now_playing",
        "/movie/upcoming",
        "/movie/top_rated",
    ] {
        mocks.push(
            server
                .mock("GET", path)
                .match_query(Matcher::Any)
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(generic_list_body())
                .create_async()
                .await,
        );
    }

    let client = TmdbClient::with_base_url("test_key", server.url());
    let mut app = App::new();
    app.toggle_tab();
    assert_eq!(app.pending_load(), Some(Screen::Browse));

    app.load_screen(&client).await;

    for mock in &mocks {
        mock.assert_async().await;
    }
    for list in &app.browse.lists {
        assert_eq!(list.len(), 1);
    }
    assert!(app.error.is_none());
}

#[tokio::test]
async fn test_browse_partial_failure_empties_every_row() {
    let mut server = Server::new_async().await;

    // Three categories succeed, now-playing fails
    let mut _ok_mocks = Vec::new();
    for path in ["/movie/popular", "/movie/upcoming", "/movie/top_rated"] {
        _ok_mocks.push(
            server
                .mock("GET", path)
                .match_query(Matcher::Any)
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(generic_list_body())
                .create_async()
                .await,
        );
    }
    let _failing = server
        .mock("GET", "/movie/now_playing")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("Internal Server Error")
        .create_async()
        .await;

    let client = TmdbClient::with_base_url("test_key", server.url());
    let mut app = App::new();
    app.toggle_tab();
    app.load_screen(&client).await;

    // All-or-nothing: no partially populated screen
    assert!(app.browse.is_empty());
    let error = app.error.as_deref().unwrap();
    assert!(error.contains("now_playing"));
}

// =============================================================================
// Details -> Player Flow
// =============================================================================

#[tokio::test]
async fn test_play_trailer_and_back_keeps_movie_id() {
    let mut server = Server::new_async().await;
    let _detail_mocks = mock_details_endpoints(&mut server).await;

    let client = TmdbClient::with_base_url("test_key", server.url());
    let mut app = App::new();

    app.open_details(550);
    app.load_screen(&client).await;

    // First YouTube trailer wins over the clip and the Vimeo trailer
    press(&mut app, KeyCode::Char('p'));
    assert_eq!(app.nav.current_screen(), Screen::Player);
    assert_eq!(app.nav.params().video_key.as_deref(), Some("k1"));
    assert_eq!(app.nav.params().title.as_deref(), Some("Fight Club"));

    // Back to Details: parameter bag untouched, fetch re-triggered
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.nav.current_screen(), Screen::Details);
    assert_eq!(app.nav.params().movie_id, Some(550));
    assert_eq!(app.pending_load(), Some(Screen::Details));
}

#[tokio::test]
async fn test_details_failure_renders_empty_not_crash() {
    let mut server = Server::new_async().await;

    let _not_found = server
        .mock("GET", "/movie/550")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(r#"{"success": false, "status_code": 34, "status_message": "Not found"}"#)
        .create_async()
        .await;
    // Similar/videos may or may not be reached before the join fails
    let mut _side_mocks = Vec::new();
    for path in ["/movie/550/similar", "/movie/550/videos"] {
        _side_mocks.push(
            server
                .mock("GET", path)
                .match_query(Matcher::Any)
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(r#"{"id": 550, "results": []}"#)
                .create_async()
                .await,
        );
    }

    let client = TmdbClient::with_base_url("test_key", server.url());
    let mut app = App::new();
    app.open_details(550);
    app.load_screen(&client).await;

    // Failure stays on the screen with empty data; navigation is untouched
    assert_eq!(app.nav.current_screen(), Screen::Details);
    assert!(app.details.movie.is_none());
    assert!(app.details.similar.is_empty());
    assert!(app.details.videos.is_empty());
    assert!(app.error.is_some());

    // And the play affordance is suppressed
    press(&mut app, KeyCode::Char('p'));
    assert_eq!(app.nav.current_screen(), Screen::Details);
}

// =============================================================================
// Similar Re-entry
// =============================================================================

#[tokio::test]
async fn test_similar_selection_reenters_details_with_new_id() {
    let mut server = Server::new_async().await;
    let _detail_mocks = mock_details_endpoints(&mut server).await;

    let second_detail = server
        .mock("GET", "/movie/807")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "id": 807,
                "title": "Se7en",
                "overview": "Two homicide detectives.",
                "vote_average": 8.4,
                "poster_path": null,
                "backdrop_path": null,
                "release_date": "1995-09-22",
                "runtime": 127,
                "genres": [{"id": 80, "name": "Crime"}]
            }"#,
        )
        .create_async()
        .await;
    let mut _side_mocks = Vec::new();
    for path in ["/movie/807/similar", "/movie/807/videos"] {
        _side_mocks.push(
            server
                .mock("GET", path)
                .match_query(Matcher::Any)
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(r#"{"id": 807, "results": []}"#)
                .create_async()
                .await,
        );
    }

    let client = TmdbClient::with_base_url("test_key", server.url());
    let mut app = App::new();

    app.open_details(550);
    app.load_screen(&client).await;
    assert_eq!(app.details.selected_similar().unwrap().id, 807);

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.nav.current_screen(), Screen::Details);
    assert_eq!(app.nav.params().movie_id, Some(807));

    app.load_screen(&client).await;
    second_detail.assert_async().await;
    assert_eq!(app.details.movie.as_ref().unwrap().id, 807);
}
