//! First-generation names

use stark_bridge_primitives::{WireElement, WireSignature};

use super::BRIDGE;
use crate::error::BridgeError;

pub fn pedersen(first: &[u8], second: &[u8]) -> Result<WireElement, BridgeError> {
    BRIDGE.pedersen(first, second)
}

pub fn sign(private_key: &[u8], message: &[u8], k: &[u8]) -> Result<WireSignature, BridgeError> {
    BRIDGE.sign(private_key, message, k)
}

/// `w` is the second signature component
pub fn verify(public_key: &[u8], hash: &[u8], r: &[u8], w: &[u8]) -> bool {
    BRIDGE.verify(public_key, hash, r, w)
}

#[allow(non_snake_case)]
pub fn getPublicKey(private_key: &[u8]) -> Result<WireElement, BridgeError> {
    BRIDGE.get_public_key(private_key)
}
