//! Second-generation names

use stark_bridge_primitives::{WireElement, WireSignature};

use super::BRIDGE;
use crate::error::BridgeError;

pub fn pedersen(first: &[u8], second: &[u8]) -> Result<WireElement, BridgeError> {
    BRIDGE.pedersen(first, second)
}

pub fn pedersen_on_elements<B: AsRef<[u8]>>(elements: &[B]) -> Result<WireElement, BridgeError> {
    BRIDGE.pedersen_on_elements(elements)
}

pub fn sign(private_key: &[u8], hash: &[u8], k: &[u8]) -> Result<WireSignature, BridgeError> {
    BRIDGE.sign(private_key, hash, k)
}

/// Sign with an RFC 6979 nonce
pub fn sign_deterministic(private_key: &[u8], hash: &[u8]) -> Result<WireSignature, BridgeError> {
    BRIDGE.sign_deterministic(private_key, hash, None)
}

/// `w` is the wire component, `s^-1` modulo the curve order
pub fn verify(public_key: &[u8], hash: &[u8], r: &[u8], w: &[u8]) -> bool {
    BRIDGE.verify(public_key, hash, r, w)
}

pub fn get_public_key(private_key: &[u8]) -> Result<WireElement, BridgeError> {
    BRIDGE.get_public_key(private_key)
}
