//! Panic guard around primitive invocations

use std::panic::{self, AssertUnwindSafe};

use tracing::{trace, warn};

use crate::error::BridgeError;
use crate::primitive::PrimitiveFault;

/// Run a primitive call, mapping faults and panics to
/// [`BridgeError::UnknownPrimitiveFailure`]
///
/// Anything the closure mutates must be discarded by the caller when this
/// returns an error.
pub(crate) fn guarded<T, F>(operation: &'static str, call: F) -> Result<T, BridgeError>
where
    F: FnOnce() -> Result<T, PrimitiveFault>,
{
    match panic::catch_unwind(AssertUnwindSafe(call)) {
        Ok(Ok(value)) => {
            trace!(operation, "primitive call completed");
            Ok(value)
        }
        Ok(Err(fault)) => {
            warn!(operation, %fault, "primitive reported a fault");
            Err(BridgeError::UnknownPrimitiveFailure)
        }
        Err(_) => {
            warn!(operation, "primitive panicked");
            Err(BridgeError::UnknownPrimitiveFailure)
        }
    }
}
