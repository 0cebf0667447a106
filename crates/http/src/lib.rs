//! Folio HTTP module providing the typed REST client for the portfolio backend
//!
//! The client decorates every request with the bearer credential held by a
//! [`client::store::SessionStore`] and exposes one method per backend resource
//! operation (auth, projects, about, settings, upload).

pub mod types;

#[cfg(feature = "client")]
pub mod client;

#[cfg(feature = "client")]
pub use client::{ApiClient, ApiClientBuilder, error::ClientError};
