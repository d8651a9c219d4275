use std::sync::atomic::{AtomicUsize, Ordering};

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use serde_json::json;
use vibe::api::{EndpointTarget, FetchError, FortuneSource, HttpFortuneSource};
use vibe::core::state::ViewState;
use vibe::core::viewer::request_fortune;
use vibe::tui::TuiState;
use vibe::tui::ui::draw_ui;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, Request, Respond, ResponseTemplate,
};

// ============================================================================
// Helper Functions
// ============================================================================

/// The eight fortunes the demo backend is seeded with.
const FORTUNES: [&str; 8] = [
    "The automation journey begins with a single script.",
    "Testing is not just finding bugs, it's ensuring quality.",
    "CI/CD pipelines turn code into reliable software.",
    "Docker containers make deployment predictable.",
    "Playwright enables bulletproof end-to-end testing.",
    "Every commit should be potentially shippable.",
    "Automation frees developers to solve harder problems.",
    "Quality gates prevent bad code from reaching production.",
];

/// Serves `FORTUNES` in order, wrapping around, like the backend's
/// `/api/list/next` cursor.
struct RoundRobin {
    cursor: AtomicUsize,
}

impl Respond for RoundRobin {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        let index = self.cursor.fetch_add(1, Ordering::SeqCst) % FORTUNES.len();
        ResponseTemplate::new(200).set_body_json(json!({ "text": FORTUNES[index] }))
    }
}

/// Serves a scrambled pick from `FORTUNES` on every call.
struct Shuffled {
    calls: AtomicUsize,
}

impl Respond for Shuffled {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        let index = (n * 5 + 3) % FORTUNES.len();
        ResponseTemplate::new(200).set_body_json(json!({ "text": FORTUNES[index] }))
    }
}

async fn mount_json(server: &MockServer, route: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Renders the whole viewer and returns the screen contents as one string.
fn screen(state: &ViewState) -> String {
    let mut tui = TuiState::new();
    tui.buttons.disabled = state.is_loading;

    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| draw_ui(f, state, &tui)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect::<String>()
}

/// A base URL nothing is listening on.
fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

// ============================================================================
// Scenarios
// ============================================================================

#[tokio::test]
async fn test_initial_state() {
    let state = ViewState::new("http://localhost:8000");

    assert!(state.displayed_text.is_empty());
    assert!(state.error_message.is_empty());
    assert!(!state.is_loading);

    let tui = TuiState::new();
    assert!(!tui.buttons.disabled);
    assert_eq!(tui.buttons.label(EndpointTarget::Random), "Random");
    assert_eq!(tui.buttons.label(EndpointTarget::Next), "Next");

    let text = screen(&state);
    assert!(text.contains("Vibe Code App"));
    assert!(text.contains("API: http://localhost:8000"));
    assert!(!text.contains("Failed to fetch"));
}

#[tokio::test]
async fn test_random_displays_exact_text() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/api/random",
        json!({ "text": "The automation journey begins with a single script." }),
    )
    .await;

    let source = HttpFortuneSource::new(server.uri());
    let mut state = ViewState::new(source.base_url());

    request_fortune(&mut state, &source, EndpointTarget::Random).await;

    assert_eq!(
        state.displayed_text,
        "The automation journey begins with a single script."
    );
    assert!(!state.is_loading);
    assert!(state.error_message.is_empty());

    let text = screen(&state);
    assert!(text.contains("The automation journey begins with a single script."));
    assert!(text.contains("Random"));
    assert!(!text.contains("Loading..."));
}

#[tokio::test]
async fn test_next_twice_shows_different_fortunes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/list/next"))
        .respond_with(RoundRobin {
            cursor: AtomicUsize::new(0),
        })
        .expect(2)
        .mount(&server)
        .await;

    let source = HttpFortuneSource::new(server.uri());
    let mut state = ViewState::new(source.base_url());

    request_fortune(&mut state, &source, EndpointTarget::Next).await;
    let first = state.displayed_text.clone();
    request_fortune(&mut state, &source, EndpointTarget::Next).await;
    let second = state.displayed_text.clone();

    assert_eq!(first, FORTUNES[0]);
    assert_eq!(second, FORTUNES[1]);
    assert_ne!(first, second);
}

#[tokio::test]
async fn test_server_error_keeps_text_and_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/random"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "detail": "Failed to fetch random response: database is locked"
        })))
        .mount(&server)
        .await;

    let source = HttpFortuneSource::new(server.uri());
    let mut state = ViewState::new(source.base_url());
    state.displayed_text = "Docker containers make deployment predictable.".to_string();

    request_fortune(&mut state, &source, EndpointTarget::Random).await;

    assert_eq!(
        state.displayed_text,
        "Docker containers make deployment predictable."
    );
    assert!(state.error_message.contains("500"));
    assert!(!state.is_loading);

    let text = screen(&state);
    assert!(text.contains("status: 500"));
}

#[tokio::test]
async fn test_unreachable_backend_reports_network_failure() {
    let source = HttpFortuneSource::new(unreachable_base_url());
    let mut state = ViewState::new(source.base_url());

    request_fortune(&mut state, &source, EndpointTarget::Random).await;

    assert!(state.displayed_text.is_empty());
    assert!(state.error_message.starts_with("Failed to fetch: network error"));
    assert!(!state.is_loading);
}

#[tokio::test]
async fn test_random_five_times_stays_within_known_fortunes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/random"))
        .respond_with(Shuffled {
            calls: AtomicUsize::new(0),
        })
        .expect(5)
        .mount(&server)
        .await;

    let source = HttpFortuneSource::new(server.uri());
    let mut state = ViewState::new(source.base_url());

    for _ in 0..5 {
        request_fortune(&mut state, &source, EndpointTarget::Random).await;
        assert!(
            FORTUNES.contains(&state.displayed_text.as_str()),
            "unexpected fortune: {}",
            state.displayed_text
        );
        assert!(!state.is_loading);
    }
}

// ============================================================================
// Response Handling
// ============================================================================

#[tokio::test]
async fn test_success_clears_previous_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/random"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    mount_json(&server, "/api/list/next", json!({ "text": "T" })).await;

    let source = HttpFortuneSource::new(server.uri());
    let mut state = ViewState::new(source.base_url());

    request_fortune(&mut state, &source, EndpointTarget::Random).await;
    assert!(state.error_message.contains("503"));

    request_fortune(&mut state, &source, EndpointTarget::Next).await;
    assert_eq!(state.displayed_text, "T");
    assert!(state.error_message.is_empty());
}

#[tokio::test]
async fn test_repeated_identical_responses_are_idempotent() {
    let server = MockServer::start().await;
    mount_json(&server, "/api/random", json!({ "text": "T" })).await;

    let source = HttpFortuneSource::new(server.uri());
    let mut state = ViewState::new(source.base_url());

    for _ in 0..3 {
        request_fortune(&mut state, &source, EndpointTarget::Random).await;
        assert_eq!(state.displayed_text, "T");
    }
}

#[tokio::test]
async fn test_missing_text_field_shows_raw_json() {
    let server = MockServer::start().await;
    mount_json(&server, "/api/random", json!({ "status": "ok" })).await;

    let source = HttpFortuneSource::new(server.uri());
    let result = source.fetch(EndpointTarget::Random).await;

    assert_eq!(result, Ok(r#"{"status":"ok"}"#.to_string()));
}

#[tokio::test]
async fn test_malformed_json_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/random"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let source = HttpFortuneSource::new(server.uri());
    let mut state = ViewState::new(source.base_url());
    state.displayed_text = "previous".to_string();

    request_fortune(&mut state, &source, EndpointTarget::Random).await;

    assert_eq!(state.displayed_text, "previous");
    assert!(state.error_message.starts_with("Failed to fetch: parse error"));
    assert!(!state.is_loading);
}

#[tokio::test]
async fn test_http_error_variant_carries_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/list/next"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let source = HttpFortuneSource::new(server.uri());
    let result = source.fetch(EndpointTarget::Next).await;

    assert_eq!(result, Err(FetchError::Http { status: 404 }));
}

#[tokio::test]
async fn test_each_button_hits_its_own_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/random"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "text": "random" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/list/next"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "text": "next" })))
        .expect(1)
        .mount(&server)
        .await;

    let source = HttpFortuneSource::new(server.uri());
    let mut state = ViewState::new(source.base_url());

    request_fortune(&mut state, &source, EndpointTarget::Random).await;
    assert_eq!(state.displayed_text, "random");
    request_fortune(&mut state, &source, EndpointTarget::Next).await;
    assert_eq!(state.displayed_text, "next");
}
