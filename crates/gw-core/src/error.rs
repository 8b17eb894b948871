//! Framework error type.
//!
//! Sub-crates define their own error enums and either convert into `GwError`
//! or wrap it as one variant, whichever keeps error sites clean.

use thiserror::Error;

use crate::AgentId;

/// The top-level error type for `gw-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum GwError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),
}

/// Shorthand result type for all `gw-*` crates.
pub type GwResult<T> = Result<T, GwError>;
