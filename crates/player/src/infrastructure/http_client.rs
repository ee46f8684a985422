//! reqwest adapter for the ficha API

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder, StatusCode};

use rpgficha_domain::FichaId;
use rpgficha_shared::{ficha_collection_path, ficha_path, FichaPayload, FichaRecord};

use crate::config::ApiConfig;
use crate::ports::outbound::{ApiError, FichaApiPort};

/// HTTP client for `/rpgficha`
#[derive(Clone)]
pub struct HttpFichaApi {
    client: Client,
    config: ApiConfig,
}

impl HttpFichaApi {
    pub fn new(config: ApiConfig) -> Self {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(
                    error = %e,
                    timeout_secs = config.request_timeout().as_secs(),
                    "Could not build HTTP client with the configured timeout; using defaults"
                );
                Client::new()
            });

        Self { client, config }
    }

    /// Build from `RPGFICHA_API_BASE_URL` (and `.env`).
    pub fn from_env() -> Result<Self, ApiError> {
        Ok(Self::new(ApiConfig::from_env()?))
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn send(
        &self,
        request: RequestBuilder,
        verb: &'static str,
    ) -> Result<reqwest::Response, ApiError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!(error = %e, "Ficha request failed to reach the API");
            ApiError::Network(e.to_string())
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = if body.trim().is_empty() {
            format!("Falha ao {} ficha: {}", verb, status_text(status))
        } else {
            body
        };
        tracing::warn!(status = status.as_u16(), %message, "Ficha API returned an error");
        Err(ApiError::Http {
            status: status.as_u16(),
            message,
        })
    }

    /// Successful responses whose body is missing or not a record yield `None`.
    async fn optional_record(response: reqwest::Response) -> Option<FichaRecord> {
        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::debug!(error = %e, "Could not read ficha response body");
                return None;
            }
        };
        match serde_json::from_slice::<FichaRecord>(&bytes) {
            Ok(record) => Some(record),
            Err(e) => {
                if !bytes.is_empty() {
                    tracing::debug!(error = %e, "Ficha response body is not a record");
                }
                None
            }
        }
    }
}

#[async_trait]
impl FichaApiPort for HttpFichaApi {
    async fn create(&self, payload: &FichaPayload) -> Result<Option<FichaRecord>, ApiError> {
        let url = self.config.url_for(&ficha_collection_path());
        tracing::debug!(%url, "Creating ficha");

        let response = self.send(self.client.post(&url).json(payload), "criar").await?;
        Ok(Self::optional_record(response).await)
    }

    async fn update(
        &self,
        id: FichaId,
        payload: &FichaPayload,
    ) -> Result<Option<FichaRecord>, ApiError> {
        let url = self.config.url_for(&ficha_path(id));
        tracing::debug!(%url, "Updating ficha");

        let response = self.send(self.client.put(&url).json(payload), "atualizar").await?;
        Ok(Self::optional_record(response).await)
    }

    async fn fetch(&self, id: FichaId) -> Result<FichaRecord, ApiError> {
        let url = self.config.url_for(&ficha_path(id));
        tracing::debug!(%url, "Fetching ficha");

        let request = self.client.get(&url).header(ACCEPT, "application/json");
        let response = self.send(request, "carregar").await?;
        response
            .json::<FichaRecord>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_u16().to_string())
}
