use crate::model::{Game, GameDetails};
use async_trait::async_trait;
use image::DynamicImage;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered {status}")]
    Status { url: String, status: StatusCode },
    #[error("unexpected body from {url}: {reason}")]
    Decode { url: String, reason: String },
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Read-only view of the schedule backend.
#[async_trait]
pub trait ScheduleApi: Send + Sync {
    /// Most recently played game; `None` when the backend answers `null`.
    async fn last_game(&self) -> ApiResult<Option<Game>>;

    /// Remaining games, earliest first, in the order the backend returns them.
    async fn schedule(&self) -> ApiResult<Vec<Game>>;

    async fn game_details(&self, id: &str) -> ApiResult<GameDetails>;
}

pub struct DataClient {
    client: Client,
    base_url: String,
}

impl DataClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.url(path);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| ApiError::Transport { url: url.clone(), source })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status { url, status });
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|source| ApiError::Transport { url: url.clone(), source })?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode {
            url,
            reason: e.to_string(),
        })
    }

    /// Downloads and decodes a team logo.
    pub async fn fetch_logo(&self, url: &str) -> ApiResult<DynamicImage> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ApiError::Transport { url: url.to_string(), source })?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status { url: url.to_string(), status });
        }
        let bytes = resp
            .bytes()
            .await
            .map_err(|source| ApiError::Transport { url: url.to_string(), source })?;
        image::load_from_memory(&bytes).map_err(|e| ApiError::Decode {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl ScheduleApi for DataClient {
    async fn last_game(&self) -> ApiResult<Option<Game>> {
        self.get_json("/api/last-game").await
    }

    async fn schedule(&self) -> ApiResult<Vec<Game>> {
        self.get_json("/api/schedule").await
    }

    async fn game_details(&self, id: &str) -> ApiResult<GameDetails> {
        self.get_json(&format!("/api/game/{}", id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_deserialize_schedule_sample() {
        let content = fs::read_to_string("fixtures/schedule.json").expect("Failed to read sample file");
        let games: Vec<Game> = serde_json::from_str(&content).expect("Failed to deserialize");
        assert!(!games.is_empty());
    }

    #[test]
    fn test_deserialize_details_sample() {
        let content = fs::read_to_string("fixtures/game_details.json").expect("Failed to read sample file");
        let details: GameDetails = serde_json::from_str(&content).expect("Failed to deserialize");
        assert_eq!(details.scorers.len(), 3);
    }

    #[test]
    fn null_last_game_decodes_to_none() {
        let game: Option<Game> = serde_json::from_str("null").expect("null should decode");
        assert!(game.is_none());
    }

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let client = DataClient::new("http://localhost:5000/");
        assert_eq!(client.url("/api/schedule"), "http://localhost:5000/api/schedule");
    }
}
