//! Sheet session: one open character sheet.
//!
//! Owns the form state, the edit/view mode, the last saved record, the save
//! status and the HP sync. All mutation goes through `&mut self`.

use std::time::Duration;

use rpgficha_domain::DerivedSheet;
use rpgficha_shared::FichaRecord;

use crate::application::hp_sync::HpSync;
use crate::application::services::FichaService;
use crate::ports::outbound::ApiError;
use crate::state::{FichaForm, FormAction, FormState, TabKey};

pub const SAVE_SUCCESS_MESSAGE: &str = "Ficha salva com sucesso!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SheetMode {
    #[default]
    Edit,
    View,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveStatus {
    pub is_saving: bool,
    pub message: Option<String>,
    pub error: Option<String>,
}

pub struct SheetSession {
    service: FichaService,
    state: FormState,
    mode: SheetMode,
    saved: Option<FichaRecord>,
    status: SaveStatus,
    hp_sync: HpSync,
}

impl SheetSession {
    /// Open `record` (or a blank sheet) in the given mode.
    pub fn new(service: FichaService, record: Option<FichaRecord>, mode: SheetMode) -> Self {
        let hp_sync = HpSync::new(service.api());
        Self {
            state: FormState::new(FichaForm::from_record(record.as_ref())),
            service,
            mode,
            saved: record,
            status: SaveStatus::default(),
            hp_sync,
        }
    }

    /// Blank sheet in edit mode.
    pub fn blank(service: FichaService) -> Self {
        Self::new(service, None, SheetMode::Edit)
    }

    #[must_use]
    pub fn with_hp_sync_window(mut self, window: Duration) -> Self {
        self.hp_sync = HpSync::with_window(self.service.api(), window);
        self
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn form(&self) -> &FichaForm {
        &self.state.form
    }

    pub fn mode(&self) -> SheetMode {
        self.mode
    }

    pub fn saved(&self) -> Option<&FichaRecord> {
        self.saved.as_ref()
    }

    pub fn status(&self) -> &SaveStatus {
        &self.status
    }

    pub fn dispatch(&mut self, action: FormAction) {
        self.state = std::mem::take(&mut self.state).apply(action);
    }

    /// What the sheet shows: the live form in edit mode, the saved record in
    /// view mode.
    pub fn derived_sheet(&self) -> Option<DerivedSheet> {
        match self.mode {
            SheetMode::Edit => Some(self.state.form.derived_sheet()),
            SheetMode::View => self.saved.as_ref().map(FichaRecord::derived_sheet),
        }
    }

    /// Persist the form. `section` is the tab whose local save triggered this.
    ///
    /// On failure the user-facing message is kept in [`SaveStatus::error`] and
    /// the form is left as it was.
    pub async fn save(&mut self, section: Option<TabKey>) -> Result<&FichaRecord, ApiError> {
        self.status = SaveStatus {
            is_saving: true,
            message: None,
            error: None,
        };
        self.dispatch(FormAction::MarkSaved(None));

        // the full save carries the current HP; an older HP send must not land after it
        self.hp_sync.cancel();
        self.hp_sync.settle().await;

        let id = self.saved.as_ref().and_then(|record| record.id);
        let result = self.service.save(id, self.state.form.to_payload()).await;
        self.status.is_saving = false;

        match result {
            Ok(record) => {
                self.mode = SheetMode::View;
                self.status.message = Some(SAVE_SUCCESS_MESSAGE.to_string());
                if section.is_some() {
                    self.dispatch(FormAction::MarkSaved(section));
                }
                let saved: &FichaRecord = self.saved.insert(record);
                Ok(saved)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Saving ficha failed");
                self.status.error = Some(e.user_message());
                Err(e)
            }
        }
    }

    /// Back to edit mode, with the form reloaded from the saved record.
    pub fn edit(&mut self) {
        self.hp_sync.cancel();
        self.mode = SheetMode::Edit;
        if let Some(saved) = self.saved.as_ref() {
            let form = FichaForm::from_record(Some(saved));
            self.dispatch(FormAction::Load(form));
        }
    }

    /// Change current HP from the view screen and schedule a debounced sync.
    ///
    /// Returns `false` (and does nothing) outside view mode, for a record the
    /// server never identified, or when the clamped value is unchanged.
    pub fn set_view_hp(&mut self, value: i32) -> bool {
        if self.mode != SheetMode::View {
            return false;
        }
        let Some(record) = self.saved.as_mut() else {
            return false;
        };
        let Some(id) = record.id else {
            return false;
        };

        let max = record.payload.max_hp;
        let next = if max > 0 {
            value.clamp(0, max)
        } else {
            value.max(0)
        };
        if next == record.payload.current_hp {
            return false;
        }

        record.payload.current_hp = next;
        self.hp_sync.schedule(id, record.payload.clone());
        true
    }

    pub fn has_pending_hp_sync(&self) -> bool {
        self.hp_sync.is_pending()
    }

    /// Wait for a scheduled HP sync to be sent.
    pub async fn flush_hp_sync(&mut self) {
        self.hp_sync.settle().await;
    }

    /// Cancel any pending HP sync. Also happens on drop.
    pub fn close(&mut self) {
        self.hp_sync.cancel();
    }
}
