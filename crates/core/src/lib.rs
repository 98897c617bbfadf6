//! Carddex — core library for the card search client.
//!
//! This crate owns everything that does not touch the network or the UI:
//!
//! - [`types`] — Card and page-result wire types shared with the server
//! - [`params`] — Immutable search parameters and request-URL construction
//! - [`config`] — `carddex.toml` loading with key validation

pub mod config;
pub mod params;
pub mod types;

pub use config::ClientConfig;
pub use params::SearchParams;
pub use types::{Card, PageResult, Stat};
