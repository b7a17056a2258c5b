// Shared error taxonomy for the conversion and pair-search operations.
// Both kinds are terminal: every operation is a deterministic function of its
// input, so retrying without changing the input cannot succeed.

use thiserror::Error;

/// Failures surfaced by this library.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// No input was supplied on any channel (no text argument, no file,
    /// nothing piped on stdin).
    #[error("no input provided: pass text arguments, use --file, or pipe stdin")]
    NullInput,

    /// The scan finished without two elements summing to the target.
    #[error("no pair of elements sums to {target}")]
    NoPairFound {
        /// Target the exhausted scan was searching for.
        target: i64,
    },
}

/// Result alias used across the library.
pub type Result<T> = std::result::Result<T, Error>;
