// wordsplice-server: HTTP front end for the splicing engine.
//
// The dictionary is loaded once at startup and shared read-only with every
// request; each request is an independent, stateless engine invocation.

mod config;

use std::path::Path;
use std::sync::Arc;

use axum::{
    Router,
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use wordsplice_core::dictionary::normalize;
use wordsplice_core::{Dictionary, find_valid_words};

use crate::config::Config;

/// Shared application state: the dictionary, immutable after startup.
#[derive(Clone)]
struct AppState {
    dictionary: Arc<Dictionary>,
}

#[derive(Debug, Deserialize)]
struct WordsRequest {
    #[serde(default)]
    words: Vec<String>,
}

#[derive(Debug, Serialize)]
struct WordsResponse {
    words: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "./config.toml".to_string());
    let config = if Path::new(&config_path).is_file() {
        Config::load(Path::new(&config_path))?
    } else {
        Config::default()
    };

    let filter = if config.debug {
        "wordsplice_server=debug,tower_http=debug"
    } else {
        "wordsplice_server=info"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("loading dictionary from {}", config.dictionary_path.display());
    let dictionary = Dictionary::from_path(&config.dictionary_path)?;
    info!("dictionary loaded, {} words", dictionary.len());

    let state = AppState {
        dictionary: Arc::new(dictionary),
    };
    let app = router(state);

    let addr = format!("{}:{}", config.host, config.port);
    info!("listening on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/words", post(find_words))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}

/// `POST /words`: splice the request words against the dictionary.
///
/// Words are trimmed and lowercased here, before they reach the engine.
/// An empty result is the expected "nothing qualified" outcome and maps to
/// 404, not to an error.
async fn find_words(State(state): State<AppState>, Json(request): Json<WordsRequest>) -> Response {
    let words: Vec<String> = request.words.iter().map(|w| normalize(w)).collect();
    debug!("searching over {} input words", words.len());

    let found = find_valid_words(&words, &state.dictionary);
    if found.is_empty() {
        (StatusCode::NOT_FOUND, "no words found").into_response()
    } else {
        Json(WordsResponse { words: found }).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(words: &[&str]) -> AppState {
        AppState {
            dictionary: Arc::new(Dictionary::from_words(words.iter().copied())),
        }
    }

    fn request(words: &[&str]) -> Json<WordsRequest> {
        Json(WordsRequest {
            words: words.iter().map(|w| w.to_string()).collect(),
        })
    }

    #[tokio::test]
    async fn matching_words_return_ok() {
        let response = find_words(State(state(&["cod"])), request(&["cab", "motor", "and"])).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn no_matches_return_not_found() {
        let response = find_words(State(state(&[])), request(&["cab", "motor", "and"])).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn too_few_words_return_not_found() {
        let response = find_words(State(state(&["cod"])), request(&["cab", "motor"])).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn request_words_are_normalized_before_search() {
        // mixed case and stray whitespace must not change the outcome
        let response =
            find_words(State(state(&["cod"])), request(&[" CAB ", "Motor", "and\n"])).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn request_body_shape() {
        let request: WordsRequest =
            serde_json::from_str(r#"{"words": ["cat", "dog", "cow"]}"#).unwrap();
        assert_eq!(request.words, vec!["cat", "dog", "cow"]);

        // a body without "words" is an empty query, not a parse failure
        let request: WordsRequest = serde_json::from_str("{}").unwrap();
        assert!(request.words.is_empty());
    }

    #[test]
    fn response_body_shape() {
        let body = serde_json::to_string(&WordsResponse {
            words: vec!["cod".to_string()],
        })
        .unwrap();
        assert_eq!(body, r#"{"words":["cod"]}"#);
    }
}
