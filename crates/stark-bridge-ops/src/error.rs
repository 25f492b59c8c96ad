//! Error types for the operation bridge

use stark_bridge_primitives::SizeError;
use thiserror::Error;

/// Message carried by every argument-shape error
pub const INVALID_ARGUMENT_MESSAGE: &str = "Invalid field element provided.";

/// Message carried by every unexpected primitive failure
pub const UNKNOWN_FAILURE_MESSAGE: &str = "Unknown crypto-cpp exception.";

/// Broad class of a bridge error, as seen by a foreign caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller supplied malformed input
    IllegalArgument,
    /// Something failed inside the primitive
    Failure,
}

/// Errors surfaced by bridge operations
///
/// Display messages are fixed and never include primitive internals. The
/// structured size detail stays reachable through `source()`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    /// A field-element buffer or the permutation grid had the wrong size
    #[error("Invalid field element provided.")]
    InvalidInputSize(#[from] SizeError),

    /// The primitive failed or panicked
    #[error("Unknown crypto-cpp exception.")]
    UnknownPrimitiveFailure,
}

impl BridgeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInputSize(_) => ErrorKind::IllegalArgument,
            Self::UnknownPrimitiveFailure => ErrorKind::Failure,
        }
    }

    /// The offending size detail, if this is an argument error
    pub fn size_error(&self) -> Option<&SizeError> {
        match self {
            Self::InvalidInputSize(err) => Some(err),
            Self::UnknownPrimitiveFailure => None,
        }
    }

    /// Status code used at the C ABI boundary
    pub fn status_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::IllegalArgument => -1,
            ErrorKind::Failure => -2,
        }
    }
}
