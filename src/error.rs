//! Error types for kernel selection.

use crate::{Capability, Kernel};
use thiserror::Error;

/// Errors raised while choosing a kernel. Comparisons themselves never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No kernel goes by this name.
    #[error("unknown kernel {0:?}")]
    UnknownKernel(String),

    /// The kernel exists but this host lacks what it needs.
    #[error("kernel {kernel} requires {capability}, which this host does not provide")]
    Unavailable {
        /// Kernel that was requested.
        kernel: Kernel,
        /// Capability the host is missing.
        capability: Capability,
    },
}

/// Result type for kernel selection.
pub type Result<T> = std::result::Result<T, Error>;
