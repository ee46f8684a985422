//! Application layer - use cases over the ficha API port

pub mod dice_tray;
pub mod hp_sync;
pub mod services;
pub mod session;

pub use dice_tray::DiceTray;
pub use hp_sync::{HpSync, HP_SYNC_WINDOW};
pub use services::FichaService;
pub use session::{SaveStatus, SheetMode, SheetSession, SAVE_SUCCESS_MESSAGE};
