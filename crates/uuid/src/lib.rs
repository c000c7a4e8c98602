//! Task identifiers and sharded-path utilities.
//!
//! Taskboard names every stored task with a *canonical* identifier: **32 lowercase hexadecimal
//! characters** (no hyphens). The identifier is assigned by the store when a task is created and
//! never changes afterwards.
//!
//! This module provides:
//! - A wrapper type ([`TaskId`]) that *guarantees* the canonical format once constructed.
//! - Sharding logic to derive a task's document directory from its identifier.
//!
//! ## Canonical form
//! - Length: 32
//! - Characters: `0-9` and `a-f` only
//! - Example: `0190f3a2c4d87b3e9a1f5c2b7d4e8f01`
//!
//! Identifiers are UUID version 7, so the leading characters encode the creation time in
//! milliseconds. Sorting identifiers lexicographically therefore sorts tasks by creation.
//!
//! ## Sharded directory layout
//! For a canonical identifier `u`, a document lives under:
//! `parent_dir/<u[28..30]>/<u[30..32]>/<u>/`
//!
//! The shard prefixes come from the random tail rather than the timestamp head, otherwise every
//! task created in the same few weeks would land in one shard.

mod service;

pub use service::TaskId;

/// Error type for identifier operations.
#[derive(Debug, thiserror::Error)]
pub enum UuidError {
    /// Invalid input provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for identifier operations.
pub type UuidResult<T> = Result<T, UuidError>;
