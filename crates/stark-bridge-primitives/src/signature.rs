//! ECDSA signature pairs
//!
//! On the wire a signature is `(r, w)`: `r`'s 32 bytes followed by `w`'s 32
//! bytes, 64 bytes total, with no length prefix. `w` is the inverse of the
//! usual `s` component modulo the curve order.

use serde::{Deserialize, Serialize};

use crate::field::{decode, encode, FieldElement, WireElement, ELEMENT_SIZE};
use crate::validate::{validate_length, SizeError};

/// Size of a signature on the wire
pub const SIGNATURE_SIZE: usize = 2 * ELEMENT_SIZE;

/// A signature in wire form
pub type WireSignature = [u8; SIGNATURE_SIZE];

/// An `(r, w)` signature pair as it crosses the boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub r: FieldElement,
    pub w: FieldElement,
}

impl Signature {
    pub fn new(r: FieldElement, w: FieldElement) -> Self {
        Self { r, w }
    }

    /// Concatenate the two wire elements, `r` first
    pub fn encode(&self) -> WireSignature {
        let mut out = [0u8; SIGNATURE_SIZE];
        out[..ELEMENT_SIZE].copy_from_slice(&encode(&self.r));
        out[ELEMENT_SIZE..].copy_from_slice(&encode(&self.w));
        out
    }

    pub fn decode(bytes: &WireSignature) -> Self {
        let mut r = [0u8; ELEMENT_SIZE];
        let mut w = [0u8; ELEMENT_SIZE];
        r.copy_from_slice(&bytes[..ELEMENT_SIZE]);
        w.copy_from_slice(&bytes[ELEMENT_SIZE..]);
        Self {
            r: decode(&r),
            w: decode(&w),
        }
    }

    /// Validate and decode an untyped 64-byte buffer
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SizeError> {
        validate_length("signature", bytes, SIGNATURE_SIZE)?;
        let wire: &WireSignature = bytes
            .try_into()
            .map_err(|_| SizeError::length("signature", SIGNATURE_SIZE, bytes.len()))?;
        Ok(Self::decode(wire))
    }

    /// Wire form of `r`
    pub fn r_bytes(&self) -> WireElement {
        encode(&self.r)
    }

    /// Wire form of `w`
    pub fn w_bytes(&self) -> WireElement {
        encode(&self.w)
    }
}
