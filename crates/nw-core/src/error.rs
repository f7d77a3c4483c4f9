//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap each other via `From`
//! impls.  `NwError` covers the checks that only need `nw-core` types.

use thiserror::Error;

/// The top-level error type for `nw-core`.
#[derive(Debug, Error)]
pub enum NwError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `nw-core`.
pub type NwResult<T> = Result<T, NwError>;
