//! Outbound ports - Interfaces for external services
//!
//! Application services talk to the ficha API only through these traits, so
//! tests can swap in mocks and the reqwest adapter stays in `infrastructure`.

pub mod ficha_api_port;

pub use ficha_api_port::{ApiError, FichaApiPort, GENERIC_SAVE_FAILURE};

#[cfg(test)]
pub use ficha_api_port::MockFichaApiPort;
