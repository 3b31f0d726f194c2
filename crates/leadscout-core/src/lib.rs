//! # Leadscout Core
//!
//! The domain layer of the Leadscout backend.
//! Business entities, the ports that cache backends and upstream fetchers
//! implement, cache-key derivation, and the cached aggregation service.

pub mod cache_key;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::{FetchError, FetchResult};
