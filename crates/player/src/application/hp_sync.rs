//! Debounced HP sync.
//!
//! HP edits in view mode are persisted with a trailing-edge debounce: every
//! [`HpSync::schedule`] replaces the pending send, and only the value still
//! pending when the window elapses is written. Once a send has started it runs
//! to completion even if a newer value is scheduled or the owner goes away.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use rpgficha_domain::FichaId;
use rpgficha_shared::FichaPayload;

use crate::ports::outbound::FichaApiPort;

/// Quiet period between the last HP change and the update request.
pub const HP_SYNC_WINDOW: Duration = Duration::from_millis(250);

struct PendingSync {
    handle: JoinHandle<()>,
    /// Dropping this cancels the send if the window has not elapsed yet.
    cancel: Option<oneshot::Sender<()>>,
}

pub struct HpSync {
    api: Arc<dyn FichaApiPort>,
    window: Duration,
    pending: Option<PendingSync>,
}

impl HpSync {
    pub fn new(api: Arc<dyn FichaApiPort>) -> Self {
        Self::with_window(api, HP_SYNC_WINDOW)
    }

    pub fn with_window(api: Arc<dyn FichaApiPort>, window: Duration) -> Self {
        Self {
            api,
            window,
            pending: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Send `payload` as the full update for `id` after the window, unless
    /// another schedule or a cancel comes first. Must be called inside a tokio
    /// runtime.
    ///
    /// Sends never overlap: each task waits for the previous one before
    /// issuing its own request.
    pub fn schedule(&mut self, id: FichaId, payload: FichaPayload) {
        let previous = self.pending.take().map(|mut pending| {
            pending.cancel.take();
            pending.handle
        });

        let (cancel, cancelled) = oneshot::channel::<()>();
        let api = Arc::clone(&self.api);
        let window = self.window;
        let current_hp = payload.current_hp;

        let handle = tokio::spawn(async move {
            let superseded = tokio::select! {
                _ = tokio::time::sleep(window) => false,
                _ = cancelled => true,
            };

            if let Some(previous) = previous {
                if let Err(e) = previous.await {
                    tracing::warn!(error = %e, "Previous HP sync task did not complete");
                }
            }
            if superseded {
                tracing::debug!(ficha_id = %id, current_hp, "HP sync superseded");
                return;
            }

            match api.update(id, &payload).await {
                Ok(_) => tracing::debug!(ficha_id = %id, current_hp, "HP synced"),
                Err(e) => {
                    tracing::warn!(ficha_id = %id, current_hp, error = %e, "HP sync failed")
                }
            }
        });

        self.pending = Some(PendingSync {
            handle,
            cancel: Some(cancel),
        });
    }

    /// Drop the pending send, if its window has not elapsed. A send already in
    /// flight keeps running; [`HpSync::settle`] still waits for it.
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.as_mut() {
            // dropping the sender resolves the receiver in the task
            pending.cancel.take();
        }
    }

    /// Whether a value is waiting to be sent or being sent.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|pending| pending.cancel.is_some() && !pending.handle.is_finished())
    }

    /// Wait for the scheduled send (if any), and every send before it, to run
    /// to completion.
    pub async fn settle(&mut self) {
        if let Some(PendingSync { handle, cancel }) = self.pending.take() {
            if let Err(e) = handle.await {
                tracing::warn!(error = %e, "HP sync task did not complete");
            }
            drop(cancel);
        }
    }
}

impl Drop for HpSync {
    fn drop(&mut self) {
        self.cancel();
    }
}
