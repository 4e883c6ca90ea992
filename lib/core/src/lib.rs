//! Core types and utilities for the hotel admin dashboard.
//!
//! This crate provides the error handling foundation and the key-value
//! storage abstraction that the session layer persists into. The browser
//! `localStorage` adapter lives with the web client; [`MemoryStore`] backs
//! tests and native builds.

pub mod error;
pub mod memory;
pub mod storage;

pub use error::Result;
pub use memory::MemoryStore;
pub use storage::{KeyValueStore, StorageError};
