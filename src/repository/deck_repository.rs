use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::domain::deck::{Draw, NewDeck};

use super::repository::{ApiError, DeckApi, Repository};

impl DeckApi for Repository {
    async fn new_shuffled_deck(&self) -> Result<NewDeck, ApiError> {
        self.get_json(self.new_deck_url()).await
    }

    async fn draw_card(&self, deck_id: &str) -> Result<Draw, ApiError> {
        self.get_json(self.draw_url(deck_id)).await
    }
}

impl Repository {
    // The response is consumed or dropped before returning on every path.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        tracing::debug!(%url, "GET");
        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            tracing::warn!(%url, error = %e, "request failed");
            ApiError::Transport(e)
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(%url, %status, "unexpected status");
            return Err(ApiError::Status(status));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
