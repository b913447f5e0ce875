use async_trait::async_trait;
use roster_core::{AppConfig, RosterError, RosterResult};
use roster_domain::{CharacterPage, CharacterQuery, CharacterSource};
use std::time::Duration;

mod constants {
    pub const USER_AGENT: &str = concat!("roster/", env!("CARGO_PKG_VERSION"));
    pub const CHARACTER_PATH: &str = "character/";
}

/// [`CharacterSource`] backed by `GET {base_url}/character/?page=&name=`.
#[derive(Debug, Clone)]
pub struct HttpCharacterSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCharacterSource {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built (e.g. TLS backend
    /// initialization fails).
    pub fn new(base_url: &str, timeout: Duration) -> RosterResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(constants::USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| RosterError::Transport(e.to_string()))?;
        Ok(Self::with_client(client, base_url))
    }

    /// # Errors
    ///
    /// Same as [`HttpCharacterSource::new`].
    pub fn from_config(config: &AppConfig) -> RosterResult<Self> {
        Self::new(
            config.effective_base_url(),
            config.effective_request_timeout(),
        )
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self) -> String {
        format!("{}/{}", self.base_url, constants::CHARACTER_PATH)
    }
}

#[async_trait]
impl CharacterSource for HttpCharacterSource {
    async fn list(&self, query: &CharacterQuery) -> RosterResult<CharacterPage> {
        let endpoint = self.endpoint();
        tracing::debug!(
            "GET {} page={} name={:?}",
            endpoint,
            query.page,
            query.name
        );

        let response = self
            .client
            .get(&endpoint)
            .query(&query.query_pairs())
            .send()
            .await
            .map_err(|e| RosterError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RosterError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        response
            .json::<CharacterPage>()
            .await
            .map_err(|e| RosterError::Decode(e.to_string()))
    }
}
