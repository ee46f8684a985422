//! Ficha API Port - create, update and fetch character records

use async_trait::async_trait;
use thiserror::Error;

use rpgficha_domain::FichaId;
use rpgficha_shared::{FichaPayload, FichaRecord};

use crate::config::ConfigError;

/// Shown when a save fails without a server-provided explanation.
pub const GENERIC_SAVE_FAILURE: &str = "Não foi possível salvar a ficha.";

/// Errors that can occur when talking to the ficha API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Non-2xx response. `message` is the response body when it had one,
    /// otherwise a status-derived sentence.
    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text to put in front of the user after a failed save.
    pub fn user_message(&self) -> String {
        match self {
            Self::Config(e) => e.to_string(),
            Self::Http { message, .. } => message.clone(),
            Self::Network(_) | Self::Decode(_) => GENERIC_SAVE_FAILURE.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Port for the `/rpgficha` resource.
///
/// `create` and `update` resolve to `Ok(None)` when a successful response has
/// no usable JSON body; callers then fall back to what they sent.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FichaApiPort: Send + Sync {
    /// `POST /rpgficha`
    async fn create(&self, payload: &FichaPayload) -> Result<Option<FichaRecord>, ApiError>;

    /// `PUT /rpgficha/{id}` with the full payload
    async fn update(
        &self,
        id: FichaId,
        payload: &FichaPayload,
    ) -> Result<Option<FichaRecord>, ApiError>;

    /// `GET /rpgficha/{id}`
    async fn fetch(&self, id: FichaId) -> Result<FichaRecord, ApiError>;
}
