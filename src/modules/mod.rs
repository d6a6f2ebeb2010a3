//! Modules layer - Infrastructure components
//!
//! Contains adapters for everything outside the web layer, currently the
//! filesystem media store.

pub mod storage;
