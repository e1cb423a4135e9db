//! Bitnet API: Rust client SDK for the Bitnet browser automation service
//!
//! This library provides typed entities and an async HTTP client for managing
//! browser profiles and groups on a local Bitnet agent, plus an in-process
//! mock agent for tests.

pub mod error;
pub mod config;

pub mod client;
pub mod entity;
pub mod mock;
pub mod release;

// Re-exports
pub use client::BitnetClient;
pub use config::ClientConfig;
pub use error::{Error, Result};

/// Bitnet API library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
