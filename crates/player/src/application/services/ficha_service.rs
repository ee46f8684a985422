//! Ficha Service - save and load character records

use std::sync::Arc;

use rpgficha_domain::FichaId;
use rpgficha_shared::{FichaPayload, FichaRecord};

use crate::ports::outbound::{ApiError, FichaApiPort};

/// Save/load use cases over a [`FichaApiPort`].
#[derive(Clone)]
pub struct FichaService {
    api: Arc<dyn FichaApiPort>,
}

impl FichaService {
    pub fn new(api: Arc<dyn FichaApiPort>) -> Self {
        Self { api }
    }

    pub fn api(&self) -> Arc<dyn FichaApiPort> {
        Arc::clone(&self.api)
    }

    /// Create the ficha when `id` is `None`, otherwise replace it.
    ///
    /// The returned record is the new source of truth: the server's body when it
    /// sent one, else the payload that was sent. A create without a body has no
    /// id; an update without one keeps `id`.
    pub async fn save(
        &self,
        id: Option<FichaId>,
        payload: FichaPayload,
    ) -> Result<FichaRecord, ApiError> {
        let returned = match id {
            None => self.api.create(&payload).await?,
            Some(id) => self.api.update(id, &payload).await?,
        };

        let record = match returned {
            Some(mut record) => {
                if record.id.is_none() {
                    record.id = id;
                }
                record
            }
            None => FichaRecord { id, payload },
        };

        match record.id {
            Some(saved) => {
                tracing::info!(ficha_id = %saved, created = id.is_none(), "Ficha saved")
            }
            None => {
                tracing::warn!("Ficha created without a usable server id; next save creates it again")
            }
        }
        Ok(record)
    }

    pub async fn load(&self, id: FichaId) -> Result<FichaRecord, ApiError> {
        self.api.fetch(id).await
    }

    /// Load for read-only display. Any failure reads as "no ficha".
    pub async fn load_for_view(&self, id: FichaId) -> Option<FichaRecord> {
        match self.api.fetch(id).await {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(ficha_id = %id, error = %e, "Failed to load ficha");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::MockFichaApiPort;

    fn payload(name: &str) -> FichaPayload {
        FichaPayload {
            character_name: name.into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn save_without_id_creates() {
        let id = FichaId::new();
        let mut api = MockFichaApiPort::new();
        api.expect_create()
            .withf(|p: &FichaPayload| p.character_name == "Thorin")
            .times(1)
            .returning(move |p| {
                Ok(Some(FichaRecord {
                    id: Some(id),
                    payload: p.clone(),
                }))
            });
        api.expect_update().never();

        let record = FichaService::new(Arc::new(api))
            .save(None, payload("Thorin"))
            .await
            .unwrap();

        assert_eq!(record.id, Some(id));
        assert_eq!(record.payload.character_name, "Thorin");
    }

    #[tokio::test]
    async fn create_without_body_falls_back_to_payload() {
        let mut api = MockFichaApiPort::new();
        api.expect_create().returning(|_| Ok(None));

        let record = FichaService::new(Arc::new(api))
            .save(None, payload("Thorin"))
            .await
            .unwrap();

        assert_eq!(record.id, None);
        assert_eq!(record.payload, payload("Thorin"));
    }

    #[tokio::test]
    async fn create_with_unusable_server_id_has_no_id() {
        let mut api = MockFichaApiPort::new();
        api.expect_create().times(1).returning(|_| {
            let body = r#"{"id": 42, "characterName": "Thorin"}"#;
            Ok(Some(serde_json::from_str(body).unwrap()))
        });

        let record = FichaService::new(Arc::new(api))
            .save(None, payload("Thorin"))
            .await
            .unwrap();

        assert_eq!(record.id, None);
        assert_eq!(record.payload.character_name, "Thorin");
    }

    #[tokio::test]
    async fn save_with_id_updates_and_keeps_it() {
        let id = FichaId::new();
        let mut api = MockFichaApiPort::new();
        api.expect_create().never();
        api.expect_update()
            .withf(move |sent_id, p| *sent_id == id && p.character_name == "Lia")
            .times(1)
            .returning(|_, _| Ok(None));

        let record = FichaService::new(Arc::new(api))
            .save(Some(id), payload("Lia"))
            .await
            .unwrap();

        assert_eq!(record.id, Some(id));
        assert_eq!(record.payload.character_name, "Lia");
    }

    #[tokio::test]
    async fn server_record_wins_over_payload() {
        let id = FichaId::new();
        let mut api = MockFichaApiPort::new();
        api.expect_update()
            .returning(|_, _| Ok(Some(FichaRecord::from_payload(payload("Lia (servidor)")))));

        let record = FichaService::new(Arc::new(api))
            .save(Some(id), payload("Lia"))
            .await
            .unwrap();

        assert_eq!(record.payload.character_name, "Lia (servidor)");
        assert_eq!(record.id, Some(id));
    }

    #[tokio::test]
    async fn save_errors_propagate() {
        let mut api = MockFichaApiPort::new();
        api.expect_create().returning(|_| {
            Err(ApiError::Http {
                status: 400,
                message: "Ficha inválida".into(),
            })
        });

        let err = FichaService::new(Arc::new(api))
            .save(None, payload("x"))
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), "Ficha inválida");
    }

    #[tokio::test]
    async fn view_load_swallows_errors() {
        let mut api = MockFichaApiPort::new();
        api.expect_fetch()
            .returning(|_| Err(ApiError::Network("timeout".into())));

        let loaded = FichaService::new(Arc::new(api))
            .load_for_view(FichaId::new())
            .await;
        assert!(loaded.is_none());
    }
}
