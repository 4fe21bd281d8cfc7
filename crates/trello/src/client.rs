//! Trello REST API client.

use anyhow::{bail, Context, Result};
use reqwest::{Client, ClientBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use burndown_core::Time;

const DEFAULT_BASE_URL: &str = "https://api.trello.com/1";

/// Authenticated Trello API client.
#[derive(Clone)]
pub struct TrelloClient {
    /// HTTP client
    client: Client,

    /// API base URL
    base_url: String,

    /// API key
    key: String,

    /// Authorization token
    token: String,
}

impl TrelloClient {
    /// Create a client against the public Trello API.
    ///
    /// Fails when either credential is empty.
    pub fn new(key: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL, key, token)
    }

    /// Create a client against a custom base URL.
    pub fn with_base_url(
        base_url: impl Into<String>,
        key: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self> {
        let key = key.into();
        let token = token.into();
        if key.is_empty() || token.is_empty() {
            bail!("Trello API key and token are required");
        }

        Ok(Self {
            client: ClientBuilder::new()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
            base_url: base_url.into(),
            key,
            token,
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!(path, "calling Trello API");

        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .query(&[("key", self.key.as_str()), ("token", self.token.as_str())])
            .send()
            .await
            .context("Failed to call Trello API")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            bail!("Trello API error (status {}): {}", status, error_text);
        }

        response
            .json()
            .await
            .context("Failed to parse Trello response")
    }

    /// All boards the authenticated member can see.
    pub async fn boards(&self) -> Result<Vec<Board>> {
        self.get("/members/me/boards").await
    }

    /// Lists on a board.
    pub async fn lists(&self, board_id: &str) -> Result<Vec<BoardList>> {
        self.get(&format!("/boards/{board_id}/lists")).await
    }

    /// Cards in a list.
    pub async fn cards(&self, list_id: &str) -> Result<Vec<Card>> {
        self.get(&format!("/lists/{list_id}/cards")).await
    }

    /// Create a card in a list.
    pub async fn create_card(&self, list_id: &str, name: &str, desc: &str) -> Result<Card> {
        let response = self
            .client
            .post(format!("{}/cards", self.base_url))
            .query(&[
                ("key", self.key.as_str()),
                ("token", self.token.as_str()),
                ("idList", list_id),
                ("name", name),
                ("desc", desc),
            ])
            .send()
            .await
            .context("Failed to create Trello card")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            bail!("Trello API error (status {}): {}", status, error_text);
        }

        response
            .json()
            .await
            .context("Failed to parse Trello response")
    }

    /// Check that the credentials work.
    pub async fn health_check(&self) -> Result<bool> {
        let response = self
            .client
            .get(format!("{}/members/me", self.base_url))
            .query(&[("key", self.key.as_str()), ("token", self.token.as_str())])
            .send()
            .await
            .context("Failed to check Trello credentials")?;

        Ok(response.status().is_success())
    }
}

/// A Trello board.
#[derive(Debug, Clone, Deserialize)]
pub struct Board {
    /// Board identifier
    pub id: String,
    /// Board name
    pub name: String,
}

/// A list on a Trello board.
#[derive(Debug, Clone, Deserialize)]
pub struct BoardList {
    /// List identifier
    pub id: String,
    /// List name
    pub name: String,
}

/// A card in a Trello list.
#[derive(Debug, Clone, Deserialize)]
pub struct Card {
    /// Card identifier
    pub id: String,
    /// Card name
    pub name: String,
    /// Card description
    #[serde(default)]
    pub desc: String,
    /// Due date, if set
    #[serde(default)]
    pub due: Option<Time>,
}
