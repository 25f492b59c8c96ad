//! Poseidon permutation entry point

use stark_bridge_primitives::PoseidonState;

use super::BRIDGE;
use crate::error::BridgeError;

/// Permute a 3x4 grid of limbs into a new grid of the same shape
pub fn hades<R: AsRef<[u64]>>(values: &[R]) -> Result<Vec<Vec<u64>>, BridgeError> {
    BRIDGE.hades(values)
}

pub fn permute(state: PoseidonState) -> Result<PoseidonState, BridgeError> {
    BRIDGE.hades_state(state)
}
