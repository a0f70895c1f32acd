//! Core types and trait definitions for the lost-and-found tracker.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! The storage and web crates depend on it; it depends on nothing of theirs.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod error;
pub mod item;
pub mod memory;
pub mod store;

pub use error::{Error, Result, ValidationError};
