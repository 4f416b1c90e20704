#![cfg(not(target_arch = "wasm32"))]
use gamerev_common::ViewState;
use gamerev_web::api::{
    load_game_detail, load_search_results, ApiError, GameApi, GameSource, GAME_FETCH_ERROR,
    SEARCH_FETCH_ERROR,
};
use gamerev_web::config::ApiConfig;
use reqwest::Url;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Serve exactly one canned HTTP response and report the request line it got.
async fn serve_once(status_line: &str, body: &str) -> (Url, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
        body.len()
    );
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = vec![0u8; 4096];
        let n = socket.read(&mut buf).await.unwrap();
        let request = String::from_utf8_lossy(&buf[..n]).to_string();
        let request_line = request.lines().next().unwrap_or_default().to_string();
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
        let _ = tx.send(request_line);
    });

    (Url::parse(&format!("http://{addr}")).unwrap(), rx)
}

fn api(base_url: Url) -> GameApi {
    GameApi::new(ApiConfig {
        base_url,
        timeout: Duration::from_secs(5),
    })
    .unwrap()
}

#[tokio::test]
async fn fetch_game_decodes_detail_body() {
    let body = r#"{"id":42,"title":"Foo","thumb":"foo.png","releaseDate":"2017-03-03",
        "publisher":"Nintendo","description":"d",
        "reviewList":[{"username":"a","content":"x","starPoint":4},
                      {"username":"b","content":"y","starPoint":4},
                      {"username":"c","content":"z","starPoint":2}]}"#;
    let (base, request) = serve_once("200 OK", body).await;

    let game = api(base).fetch_game("42").await.unwrap();

    assert_eq!(request.await.unwrap(), "GET /games/42 HTTP/1.1");
    assert_eq!(game.title, "Foo");
    let summary = game.rating_summary();
    assert_eq!(summary.average_display(), "3.3");
    let heights: Vec<(i32, f64)> = summary
        .buckets()
        .iter()
        .map(|b| (b.stars, b.height_percent))
        .collect();
    assert_eq!(heights, vec![(2, 50.0), (4, 100.0)]);
}

#[tokio::test]
async fn search_sends_keyword_query() {
    let (base, request) = serve_once("200 OK", r#"{"content":[]}"#).await;

    let state = load_search_results(&api(base), "zelda").await;

    assert_eq!(request.await.unwrap(), "GET /games?kw=zelda HTTP/1.1");
    assert_eq!(state, ViewState::Loaded(Vec::new()));
}

#[tokio::test]
async fn server_error_is_reported_as_status() {
    let (base, _request) = serve_once("500 Internal Server Error", "{}").await;

    let err = api(base).fetch_game("42").await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 500, .. }), "{err:?}");
}

#[tokio::test]
async fn server_error_collapses_to_generic_message() {
    let (base, _request) = serve_once("500 Internal Server Error", "{}").await;

    let state = load_game_detail(&api(base), "42").await;
    assert_eq!(state, ViewState::Error(GAME_FETCH_ERROR.to_string()));
}

#[tokio::test]
async fn malformed_body_collapses_to_generic_message() {
    let (base, _request) = serve_once("200 OK", "not json").await;

    let state = load_search_results(&api(base), "mario").await;
    assert_eq!(state, ViewState::Error(SEARCH_FETCH_ERROR.to_string()));
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let base = Url::parse(&format!("http://{addr}")).unwrap();
    let err = api(base).fetch_game("1").await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)), "{err:?}");
}
