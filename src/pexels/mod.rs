//! Pexels video search integration module.
//!
//! Provides the client for searching stock videos and picking download links.

pub mod client;
pub mod models;

pub use client::PexelsClient;
pub use models::SearchRequest;
