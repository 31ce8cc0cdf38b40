// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchedError {
    /// The dependency graph is not a DAG; no valid order exists.
    #[error("cycle detected in dependency graph involving task '{task}'")]
    CycleDetected { task: String },

    /// An index lookup was made for a vertex that was never registered.
    ///
    /// Public `Scheduler` methods register identifiers before use, so this
    /// signals a misuse of the index-level structures, not bad user input.
    #[error("vertex index {index} out of range ({len} vertices registered)")]
    OutOfRange { index: usize, len: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, SchedError>;
