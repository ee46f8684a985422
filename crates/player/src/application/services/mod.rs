//! Application services

pub mod ficha_service;

pub use ficha_service::FichaService;
