//! Incident reports feature.
//!
//! Covers the submission pipeline (draft validation, media decoding, one
//! transactional write) and the read/update/delete surface over the store.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/incidencias/` | Submit a report |
//! | GET | `/incidencias/` | List reports (optional `id_usuario` filter) |
//! | PATCH | `/incidencias/{id}/estado` | Update report status |
//! | DELETE | `/incidencias/{id}` | Delete a report |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{ReportService, SubmissionService};
