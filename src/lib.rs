//! In-memory feature flag service.
//!
//! Flags are named booleans kept in a [`store::FlagStore`] and served over
//! HTTP with JSON bodies: `/get` reads a flag (unset flags read `false`),
//! `/set` writes one.

pub mod config;
pub mod error;
pub mod logging;
pub mod protocol;
pub mod server;
pub mod store;

pub use error::{Error, Result};
pub use server::{Server, SharedStore, router};
pub use store::{FlagStore, MemoryFlagStore};
