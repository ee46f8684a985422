//! RPG ficha player client
//!
//! Layers follow the hexagonal split used across the workspace:
//!
//! - `ports`: the outbound API boundary (`FichaApiPort`) and its error type
//! - `infrastructure`: the reqwest adapter implementing that boundary
//! - `state`: the editable form and its pure reducer
//! - `application`: save/load use cases, the debounced HP sync, the sheet
//!   session and the dice tray
//! - `presentation`: plain-text rendering of a derived sheet

pub mod application;
pub mod config;
pub mod infrastructure;
pub mod ports;
pub mod presentation;
pub mod state;

pub use application::{
    DiceTray, FichaService, HpSync, SaveStatus, SheetMode, SheetSession, HP_SYNC_WINDOW,
    SAVE_SUCCESS_MESSAGE,
};
pub use config::{ApiConfig, ConfigError};
pub use infrastructure::HttpFichaApi;
pub use ports::outbound::{ApiError, FichaApiPort};
pub use state::{FichaForm, FormAction, FormState, TabKey};
