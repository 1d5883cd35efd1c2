use reqwest::{StatusCode, Url};
use thiserror::Error;

use crate::domain::deck::{Draw, NewDeck};

pub const DEFAULT_BASE_URL: &str = "https://deckofcardsapi.com/api/deck";

/// HTTP access to the deck service. Owns its own client; nothing is shared
/// process-wide.
pub struct Repository {
    pub(in crate::repository) client: reqwest::Client,
    pub(in crate::repository) base_url: Url,
}

#[derive(Debug, Error)]
pub enum CreateRepositoryError {
    #[error("invalid base url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("unsupported url scheme: {0}")]
    UnsupportedScheme(String),

    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(StatusCode),

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The two deck service calls a game needs.
#[allow(async_fn_in_trait)]
pub trait DeckApi {
    async fn new_shuffled_deck(&self) -> Result<NewDeck, ApiError>;

    async fn draw_card(&self, deck_id: &str) -> Result<Draw, ApiError>;
}

impl Repository {
    pub fn new(base_url: &str) -> Result<Repository, CreateRepositoryError> {
        let client = reqwest::Client::builder().build()?;
        Repository::with_client(base_url, client)
    }

    pub fn with_client(
        base_url: &str,
        client: reqwest::Client,
    ) -> Result<Repository, CreateRepositoryError> {
        let base_url = normalize_base_url(base_url)?;
        Ok(Repository { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// `{base}/{segments..}/?{query}`, each segment percent-encoded.
    pub(in crate::repository) fn endpoint(&self, segments: &[&str], query: (&str, &str)) -> Url {
        let mut url = self.base_url.clone();
        // http(s) urls always have a path, checked in `normalize_base_url`.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments).push("");
        }
        url.query_pairs_mut().append_pair(query.0, query.1);
        url
    }

    pub(in crate::repository) fn new_deck_url(&self) -> Url {
        self.endpoint(&["new", "shuffle"], ("deck_count", "1"))
    }

    pub(in crate::repository) fn draw_url(&self, deck_id: &str) -> Url {
        self.endpoint(&[deck_id, "draw"], ("count", "1"))
    }
}

fn normalize_base_url(base_url: &str) -> Result<Url, CreateRepositoryError> {
    let trimmed = base_url.trim_end_matches('/');
    let url = Url::parse(trimmed).map_err(|e| CreateRepositoryError::InvalidUrl {
        url: base_url.to_string(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" if !url.cannot_be_a_base() => Ok(url),
        other => Err(CreateRepositoryError::UnsupportedScheme(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_default_url() {
        let repo = Repository::new(DEFAULT_BASE_URL).unwrap();
        assert_eq!(repo.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn strips_trailing_slashes() {
        let repo = Repository::new("http://127.0.0.1:8080/api/deck//").unwrap();
        assert_eq!(repo.base_url(), "http://127.0.0.1:8080/api/deck");
    }

    #[test]
    fn builds_service_endpoints() {
        let repo = Repository::new("http://127.0.0.1:8080/api/deck").unwrap();
        assert_eq!(
            repo.new_deck_url().as_str(),
            "http://127.0.0.1:8080/api/deck/new/shuffle/?deck_count=1"
        );
        assert_eq!(
            repo.draw_url("3p40paa87x90").as_str(),
            "http://127.0.0.1:8080/api/deck/3p40paa87x90/draw/?count=1"
        );
    }

    #[test]
    fn deck_id_is_encoded_as_one_segment() {
        let repo = Repository::new(DEFAULT_BASE_URL).unwrap();
        assert_eq!(
            repo.draw_url("a/b?c#d").as_str(),
            "https://deckofcardsapi.com/api/deck/a%2Fb%3Fc%23d/draw/?count=1"
        );
    }

    #[test]
    fn rejects_relative_url() {
        assert!(matches!(
            Repository::new("api/deck"),
            Err(CreateRepositoryError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn rejects_non_http_scheme() {
        assert!(matches!(
            Repository::new("ftp://example.com/deck"),
            Err(CreateRepositoryError::UnsupportedScheme(s)) if s == "ftp"
        ));
    }
}
