//! Infrastructure - concrete adapters for the outbound ports

pub mod http_client;

pub use http_client::HttpFichaApi;
