use crate::config::ApiConfig;
use async_trait::async_trait;
use gamerev_common::ViewState;
use gamerev_ui::display_types::{Game, Review, SearchResultItem};
use reqwest::Url;
use serde::Deserialize;
use std::future::Future;
use std::rc::Rc;
use thiserror::Error;
use tracing::{debug, error};

/// Shown on the detail page whenever the game can't be fetched
pub const GAME_FETCH_ERROR: &str = "Failed to fetch game data.";
/// Shown on the search page whenever the search can't be run
pub const SEARCH_FETCH_ERROR: &str = "Failed to fetch search results.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("server returned {status} for {url}")]
    Status { status: u16, url: String },
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("request timed out")]
    Timeout,
    #[error("cannot build request URL from base {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::Transport(e)
        }
    }
}

// -- Wire types (camelCase JSON from the review backend) --

/// Ids arrive as JSON numbers from some backends and strings from others
#[derive(Deserialize)]
#[serde(untagged)]
enum WireId {
    Number(serde_json::Number),
    Text(String),
}

impl From<WireId> for String {
    fn from(id: WireId) -> Self {
        match id {
            WireId::Number(n) => n.to_string(),
            WireId::Text(s) => s,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GameResponse {
    id: WireId,
    title: String,
    thumb: Option<String>,
    release_date: Option<String>,
    publisher: Option<String>,
    description: Option<String>,
    review_list: Option<Vec<ReviewResponse>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReviewResponse {
    username: Option<String>,
    content: Option<String>,
    star_point: i32,
}

#[derive(Deserialize)]
struct SearchResponse {
    content: Option<Vec<SearchItemResponse>>,
}

#[derive(Deserialize)]
struct SearchItemResponse {
    id: WireId,
    title: String,
    thumb: Option<String>,
}

fn thumb_url(thumb: Option<String>) -> Option<String> {
    thumb.filter(|url| !url.trim().is_empty())
}

impl From<GameResponse> for Game {
    fn from(g: GameResponse) -> Self {
        Game {
            id: g.id.into(),
            title: g.title,
            thumb_url: thumb_url(g.thumb),
            release_date: g.release_date.unwrap_or_default(),
            publisher: g.publisher.unwrap_or_default(),
            description: g.description.unwrap_or_default(),
            reviews: g
                .review_list
                .unwrap_or_default()
                .into_iter()
                .map(|r| Review {
                    username: r.username.unwrap_or_default(),
                    content: r.content.unwrap_or_default(),
                    star_point: r.star_point,
                })
                .collect(),
        }
    }
}

impl From<SearchItemResponse> for SearchResultItem {
    fn from(item: SearchItemResponse) -> Self {
        SearchResultItem {
            id: item.id.into(),
            title: item.title,
            thumb_url: thumb_url(item.thumb),
        }
    }
}

/// Decode a `GET /games/{id}` body
pub fn parse_game(body: &[u8]) -> Result<Game, ApiError> {
    let game: GameResponse = serde_json::from_slice(body)?;
    Ok(game.into())
}

/// Decode a `GET /games?kw=` body
pub fn parse_search_results(body: &[u8]) -> Result<Vec<SearchResultItem>, ApiError> {
    let page: SearchResponse = serde_json::from_slice(body)?;
    Ok(page
        .content
        .unwrap_or_default()
        .into_iter()
        .map(SearchResultItem::from)
        .collect())
}

/// Read access to the game catalogue.
///
/// Futures are not `Send`: in the browser everything runs on one thread.
#[async_trait(?Send)]
pub trait GameSource {
    async fn fetch_game(&self, game_id: &str) -> Result<Game, ApiError>;
    async fn search_games(&self, keyword: &str) -> Result<Vec<SearchResultItem>, ApiError>;
}

/// Cloneable handle to the active [`GameSource`], provided through context.
#[derive(Clone)]
pub struct GameSourceHandle(Rc<dyn GameSource>);

impl GameSourceHandle {
    pub fn new(source: impl GameSource + 'static) -> Self {
        Self(Rc::new(source))
    }

    pub fn source(&self) -> Rc<dyn GameSource> {
        self.0.clone()
    }
}

/// HTTP client for the review backend
#[derive(Clone)]
pub struct GameApi {
    config: ApiConfig,
    http: reqwest::Client,
}

impl GameApi {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.timeout);
        let http = builder.build()?;
        Ok(Self { config, http })
    }

    /// `{base}/games/{id}`, with the id encoded as a single path segment
    pub fn game_url(&self, game_id: &str) -> Result<Url, ApiError> {
        self.endpoint(&["games", game_id])
    }

    /// `{base}/games?kw={keyword}`
    pub fn search_url(&self, keyword: &str) -> Result<Url, ApiError> {
        let mut url = self.endpoint(&["games"])?;
        url.query_pairs_mut().append_pair("kw", keyword);
        Ok(url)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.config.base_url.clone();
        url.set_query(None);
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.config.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_body(&self, url: Url) -> Result<Vec<u8>, ApiError> {
        debug!("GET {}", url);
        let request = async {
            let resp = self.http.get(url.clone()).send().await?;
            let status = resp.status();
            if !status.is_success() {
                return Err(ApiError::Status {
                    status: status.as_u16(),
                    url: url.to_string(),
                });
            }
            Ok(resp.bytes().await?.to_vec())
        };
        with_timeout(self.config.timeout, request).await
    }
}

#[async_trait(?Send)]
impl GameSource for GameApi {
    async fn fetch_game(&self, game_id: &str) -> Result<Game, ApiError> {
        let body = self.get_body(self.game_url(game_id)?).await?;
        parse_game(&body)
    }

    async fn search_games(&self, keyword: &str) -> Result<Vec<SearchResultItem>, ApiError> {
        let body = self.get_body(self.search_url(keyword)?).await?;
        parse_search_results(&body)
    }
}

/// The browser fetch has no timeout of its own, so race it against a timer.
#[cfg(target_arch = "wasm32")]
async fn with_timeout<T>(
    limit: std::time::Duration,
    request: impl Future<Output = Result<T, ApiError>>,
) -> Result<T, ApiError> {
    use futures_util::future::{select, Either};

    let request = Box::pin(request);
    let timer = Box::pin(gloo_timers::future::sleep(limit));
    match select(request, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(ApiError::Timeout),
    }
}

/// Native clients carry the timeout on the reqwest client itself.
#[cfg(not(target_arch = "wasm32"))]
async fn with_timeout<T>(
    _limit: std::time::Duration,
    request: impl Future<Output = Result<T, ApiError>>,
) -> Result<T, ApiError> {
    request.await
}

/// Fetch one game for the detail view. Any failure is logged and collapses
/// into the generic error state.
pub async fn load_game_detail(source: &dyn GameSource, game_id: &str) -> ViewState<Game> {
    match source.fetch_game(game_id).await {
        Ok(game) => ViewState::Loaded(game),
        Err(e) => {
            error!("Failed to fetch game {game_id}: {e}");
            ViewState::Error(GAME_FETCH_ERROR.to_string())
        }
    }
}

/// Run a keyword search for the results view. An empty result set is a
/// successful load, not an error.
pub async fn load_search_results(
    source: &dyn GameSource,
    keyword: &str,
) -> ViewState<Vec<SearchResultItem>> {
    match source.search_games(keyword).await {
        Ok(results) => ViewState::Loaded(results),
        Err(e) => {
            error!("Failed to search games for {keyword:?}: {e}");
            ViewState::Error(SEARCH_FETCH_ERROR.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    const GAME_42: &str = r#"{
        "id": 42,
        "title": "Foo",
        "thumb": "https://img.example/foo.png",
        "releaseDate": "2017-03-03",
        "publisher": "Nintendo",
        "description": "An adventure.",
        "reviewList": [
            {"username": "a", "content": "great", "starPoint": 4},
            {"username": "b", "content": "good", "starPoint": 4},
            {"username": "c", "content": "meh", "starPoint": 2}
        ]
    }"#;

    /// In-memory catalogue. Unknown ids answer with a 500 like the backend does.
    #[derive(Default)]
    struct FakeSource {
        games: HashMap<String, Game>,
        results: HashMap<String, Vec<SearchResultItem>>,
        calls: RefCell<Vec<String>>,
    }

    #[async_trait(?Send)]
    impl GameSource for FakeSource {
        async fn fetch_game(&self, game_id: &str) -> Result<Game, ApiError> {
            self.calls.borrow_mut().push(format!("game:{game_id}"));
            self.games.get(game_id).cloned().ok_or(ApiError::Status {
                status: 500,
                url: format!("/games/{game_id}"),
            })
        }

        async fn search_games(&self, keyword: &str) -> Result<Vec<SearchResultItem>, ApiError> {
            self.calls.borrow_mut().push(format!("search:{keyword}"));
            self.results
                .get(keyword)
                .cloned()
                .ok_or(ApiError::Timeout)
        }
    }

    fn api(base: &str) -> GameApi {
        let config = ApiConfig {
            base_url: Url::parse(base).unwrap(),
            ..ApiConfig::default()
        };
        GameApi::new(config).unwrap()
    }

    #[test]
    fn game_url_appends_id_segment() {
        let api = api("http://localhost:8080");
        assert_eq!(
            api.game_url("42").unwrap().as_str(),
            "http://localhost:8080/games/42"
        );
        assert_eq!(
            api.game_url("a b").unwrap().as_str(),
            "http://localhost:8080/games/a%20b"
        );
    }

    #[test]
    fn urls_keep_base_path_prefix() {
        let api = api("https://reviews.example/api/");
        assert_eq!(
            api.game_url("7").unwrap().as_str(),
            "https://reviews.example/api/games/7"
        );
    }

    #[test]
    fn search_url_encodes_keyword() {
        let api = api("http://localhost:8080");
        assert_eq!(
            api.search_url("zelda").unwrap().as_str(),
            "http://localhost:8080/games?kw=zelda"
        );
        assert_eq!(
            api.search_url("zelda & link").unwrap().as_str(),
            "http://localhost:8080/games?kw=zelda+%26+link"
        );
    }

    #[test]
    fn parse_game_maps_wire_fields() {
        let game = parse_game(GAME_42.as_bytes()).unwrap();
        assert_eq!(game.id, "42");
        assert_eq!(game.title, "Foo");
        assert_eq!(game.thumb_url.as_deref(), Some("https://img.example/foo.png"));
        assert_eq!(game.release_date, "2017-03-03");
        assert_eq!(game.reviews.len(), 3);
        assert_eq!(game.reviews[2].username, "c");
        assert_eq!(game.reviews[2].star_point, 2);

        let summary = game.rating_summary();
        assert_eq!(summary.average_display(), "3.3");
        assert_eq!(summary.max_count(), 2);
        assert_eq!(summary.counts().get(&4), Some(&2));
        assert_eq!(summary.counts().get(&2), Some(&1));
    }

    #[test]
    fn parse_game_tolerates_missing_and_null_fields() {
        let game = parse_game(br#"{"id": "abc", "title": "Bar", "thumb": "", "reviewList": null}"#)
            .unwrap();
        assert_eq!(game.id, "abc");
        assert!(game.thumb_url.is_none());
        assert!(game.reviews.is_empty());
        assert_eq!(game.publisher, "");
    }

    #[test]
    fn parse_game_rejects_malformed_body() {
        assert!(matches!(parse_game(b"<html>oops</html>"), Err(ApiError::Decode(_))));
        assert!(matches!(parse_game(b"null"), Err(ApiError::Decode(_))));
    }

    #[test]
    fn parse_search_results_reads_content() {
        let results = parse_search_results(
            br#"{"content": [{"id": 7, "title": "Zelda", "thumb": "z.png"}, {"id": 8, "title": "Link"}]}"#,
        )
        .unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, "7");
        assert_eq!(results[0].thumb_url.as_deref(), Some("z.png"));
        assert!(results[1].thumb_url.is_none());
    }

    #[test]
    fn parse_search_results_empty_or_null_content() {
        assert!(parse_search_results(br#"{"content": []}"#).unwrap().is_empty());
        assert!(parse_search_results(br#"{"content": null}"#).unwrap().is_empty());
        assert!(parse_search_results(br#"{}"#).unwrap().is_empty());
    }

    #[tokio::test]
    async fn load_game_detail_loaded() {
        let mut source = FakeSource::default();
        source
            .games
            .insert("42".to_string(), parse_game(GAME_42.as_bytes()).unwrap());

        let state = load_game_detail(&source, "42").await;
        let game = state.loaded().unwrap();
        assert_eq!(game.title, "Foo");
        assert_eq!(*source.calls.borrow(), vec!["game:42".to_string()]);
    }

    #[tokio::test]
    async fn load_game_detail_failure_collapses_to_generic_error() {
        let source = FakeSource::default();
        let state = load_game_detail(&source, "404").await;
        assert_eq!(state, ViewState::Error(GAME_FETCH_ERROR.to_string()));
        assert!(!state.is_loading());
    }

    #[tokio::test]
    async fn load_search_results_empty_is_loaded_not_error() {
        let mut source = FakeSource::default();
        source.results.insert("zelda".to_string(), Vec::new());

        let state = load_search_results(&source, "zelda").await;
        assert_eq!(state, ViewState::Loaded(Vec::new()));
    }

    #[tokio::test]
    async fn load_search_results_failure_collapses_to_generic_error() {
        let source = FakeSource::default();
        let state = load_search_results(&source, "zelda").await;
        assert_eq!(state, ViewState::Error(SEARCH_FETCH_ERROR.to_string()));
    }
}
