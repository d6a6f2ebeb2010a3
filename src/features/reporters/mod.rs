//! Reporter registration feature.
//!
//! Reporters are the identities that file incident reports. They are created
//! independently of submissions; a report's reporter reference is never
//! checked against this table at the application layer.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ReporterService;
