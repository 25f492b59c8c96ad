//! The STARK curve primitives consumed by the bridge
//!
//! The bridge treats Pedersen, ECDSA and the Poseidon permutation as opaque
//! functions over the primitive library's field type. [`CurvePrimitives`] is
//! the seam; [`StarkCurve`] is the production implementation on top of
//! `starknet-crypto`.

use stark_bridge_primitives::{FieldElement, CURVE_ORDER};
use starknet_crypto::Felt;
use starknet_types_core::felt::NonZeroFelt;
use thiserror::Error;

/// A failure reported by a primitive
///
/// The detail is for logs only and never reaches a caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{operation}: {detail}")]
pub struct PrimitiveFault {
    pub operation: &'static str,
    pub detail: String,
}

impl PrimitiveFault {
    pub fn new<S: Into<String>>(operation: &'static str, detail: S) -> Self {
        Self {
            operation,
            detail: detail.into(),
        }
    }
}

/// Cryptographic primitives over the STARK curve
///
/// Signatures use the native `(r, w)` form, where `w = s^-1 mod n`. Private
/// keys and nonces are already reduced modulo the curve order `n`.
pub trait CurvePrimitives {
    /// Pedersen hash of two field elements
    fn pedersen_hash(&self, a: &Felt, b: &Felt) -> Felt;

    /// ECDSA signature `(r, w)` of `message` with nonce `k`
    fn ecdsa_sign(
        &self,
        private_key: &Felt,
        message: &Felt,
        k: &Felt,
    ) -> Result<(Felt, Felt), PrimitiveFault>;

    /// ECDSA verification of `(r, w)` against a public key given as its
    /// x-coordinate
    fn ecdsa_verify(
        &self,
        public_key: &Felt,
        hash: &Felt,
        r: &Felt,
        w: &Felt,
    ) -> Result<bool, PrimitiveFault>;

    /// x-coordinate of `private_key * G`
    fn public_key(&self, private_key: &Felt) -> Result<Felt, PrimitiveFault>;

    /// Hades permutation, in place
    fn poseidon_permute(&self, state: &mut [Felt; 3]);

    /// RFC 6979 nonce for `message` under `private_key`
    fn generate_k(&self, message: &Felt, private_key: &Felt, seed: Option<&Felt>) -> Felt;
}

/// Production primitives from `starknet-crypto`
///
/// Degenerate scalars are rejected here, before the library would panic on
/// a point at infinity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StarkCurve;

impl CurvePrimitives for StarkCurve {
    fn pedersen_hash(&self, a: &Felt, b: &Felt) -> Felt {
        starknet_crypto::pedersen_hash(a, b)
    }

    fn ecdsa_sign(
        &self,
        private_key: &Felt,
        message: &Felt,
        k: &Felt,
    ) -> Result<(Felt, Felt), PrimitiveFault> {
        if *k == Felt::ZERO {
            return Err(PrimitiveFault::new("sign", "zero nonce"));
        }
        let sig = starknet_crypto::sign(private_key, message, k)
            .map_err(|e| PrimitiveFault::new("sign", e.to_string()))?;
        let w = invert_felt(&sig.s)
            .ok_or_else(|| PrimitiveFault::new("sign", "s has no inverse"))?;
        Ok((sig.r, w))
    }

    fn ecdsa_verify(
        &self,
        public_key: &Felt,
        hash: &Felt,
        r: &Felt,
        w: &Felt,
    ) -> Result<bool, PrimitiveFault> {
        if *w == Felt::ZERO || *w >= element_upper_bound() {
            return Ok(false);
        }
        let Some(s) = invert_felt(w) else {
            return Ok(false);
        };
        starknet_crypto::verify(public_key, hash, r, &s)
            .map_err(|e| PrimitiveFault::new("verify", e.to_string()))
    }

    fn public_key(&self, private_key: &Felt) -> Result<Felt, PrimitiveFault> {
        if *private_key == Felt::ZERO {
            return Err(PrimitiveFault::new("get_public_key", "zero private key"));
        }
        Ok(starknet_crypto::get_public_key(private_key))
    }

    fn poseidon_permute(&self, state: &mut [Felt; 3]) {
        starknet_crypto::poseidon_permute_comp(state);
    }

    fn generate_k(&self, message: &Felt, private_key: &Felt, seed: Option<&Felt>) -> Felt {
        starknet_crypto::rfc6979_generate_k(message, private_key, seed)
    }
}

/// Build the primitive field type from raw limbs
///
/// Values at or above the field prime are reduced here, by the primitive
/// library, never by the codec.
pub fn felt_from_element(elem: &FieldElement) -> Felt {
    Felt::from_bytes_le(&elem.encode())
}

/// Standard-form limbs of a primitive field value
pub fn element_from_felt(felt: &Felt) -> FieldElement {
    FieldElement::decode(&felt.to_bytes_le())
}

/// Inverse modulo the curve order
///
/// Maps a signature's `s` to the wire component `w` and back. `None` for
/// values with no inverse, zero included.
pub fn invert_mod_order(value: &FieldElement) -> Option<FieldElement> {
    invert_felt(&felt_from_element(value)).map(|inv| element_from_felt(&inv))
}

fn invert_felt(value: &Felt) -> Option<Felt> {
    let order = NonZeroFelt::from_felt_unchecked(felt_from_element(&CURVE_ORDER));
    value.mod_inverse(&order)
}

/// `2^251`, the exclusive bound on `w`
fn element_upper_bound() -> Felt {
    let mut be = [0u8; 32];
    be[0] = 0x08;
    Felt::from_bytes_be(&be)
}
