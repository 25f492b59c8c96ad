//! The operation bridge
//!
//! Each operation follows the same pipeline:
//!
//! 1. Validate every field-element argument, in argument order
//! 2. Decode the limbs and hand them to the primitive library
//! 3. Invoke the primitive inside the panic guard
//! 4. Encode the result into a freshly allocated wire buffer
//!
//! Nothing is written to an output unless the whole operation succeeds.

use stark_bridge_primitives::{
    read_element, reduce_scalar, PoseidonState, Signature, WireElement, WireSignature,
};
use starknet_crypto::Felt;
use tracing::debug;

use crate::error::BridgeError;
use crate::guard::guarded;
use crate::primitive::{element_from_felt, felt_from_element, CurvePrimitives, StarkCurve};

/// Stateless bridge between wire buffers and a set of curve primitives
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OperationBridge<P = StarkCurve> {
    primitives: P,
}

impl OperationBridge<StarkCurve> {
    /// Bridge backed by `starknet-crypto`
    pub const fn new() -> Self {
        Self {
            primitives: StarkCurve,
        }
    }
}

impl<P: CurvePrimitives> OperationBridge<P> {
    /// Bridge over a custom primitive set
    pub fn with_primitives(primitives: P) -> Self {
        Self { primitives }
    }

    pub fn primitives(&self) -> &P {
        &self.primitives
    }

    /// Pedersen hash of two 32-byte elements
    pub fn pedersen(&self, first: &[u8], second: &[u8]) -> Result<WireElement, BridgeError> {
        let a = read_felt("first", first)?;
        let b = read_felt("second", second)?;
        let hash = self.pedersen_felts(&a, &b)?;
        Ok(wire_from_felt(&hash))
    }

    /// ECDSA signature over `message` with nonce `k`, as `r || w`
    ///
    /// The private key and `k` are scalars and are reduced modulo the curve
    /// order.
    pub fn sign(
        &self,
        private_key: &[u8],
        message: &[u8],
        k: &[u8],
    ) -> Result<WireSignature, BridgeError> {
        let private_key = read_scalar("private_key", private_key)?;
        let message = read_felt("message", message)?;
        let k = read_scalar("k", k)?;
        self.sign_felts(&private_key, &message, &k)
    }

    /// Sign with an RFC 6979 nonce derived from the key and message
    pub fn sign_deterministic(
        &self,
        private_key: &[u8],
        message: &[u8],
        seed: Option<&[u8]>,
    ) -> Result<WireSignature, BridgeError> {
        let private_key = read_scalar("private_key", private_key)?;
        let message = read_felt("message", message)?;
        let seed = seed.map(|s| read_felt("seed", s)).transpose()?;

        let k = guarded("generate_k", || {
            Ok(self
                .primitives
                .generate_k(&message, &private_key, seed.as_ref()))
        })?;
        self.sign_felts(&private_key, &message, &k)
    }

    /// Verify an `(r, w)` signature against a public key x-coordinate
    ///
    /// Never fails: malformed input, a rejected signature and a primitive
    /// fault all read as `false`.
    pub fn verify(&self, public_key: &[u8], hash: &[u8], r: &[u8], w: &[u8]) -> bool {
        match self.try_verify(public_key, hash, r, w) {
            Ok(valid) => valid,
            Err(err) => {
                debug!(error = ?err, "verification did not succeed");
                false
            }
        }
    }

    /// Verify a 64-byte `r || w` signature
    pub fn verify_signature(&self, public_key: &[u8], hash: &[u8], signature: &[u8]) -> bool {
        match Signature::from_slice(signature) {
            Ok(sig) => self.verify(public_key, hash, &sig.r_bytes(), &sig.w_bytes()),
            Err(err) => {
                debug!(%err, "rejected signature buffer");
                false
            }
        }
    }

    fn try_verify(
        &self,
        public_key: &[u8],
        hash: &[u8],
        r: &[u8],
        w: &[u8],
    ) -> Result<bool, BridgeError> {
        let public_key = read_felt("public_key", public_key)?;
        let hash = read_felt("hash", hash)?;
        let r = read_felt("r", r)?;
        let w = read_felt("w", w)?;
        guarded("verify", || {
            self.primitives.ecdsa_verify(&public_key, &hash, &r, &w)
        })
    }

    /// x-coordinate of the public key for `private_key`
    pub fn get_public_key(&self, private_key: &[u8]) -> Result<WireElement, BridgeError> {
        let private_key = read_scalar("private_key", private_key)?;
        let x = guarded("get_public_key", || self.primitives.public_key(&private_key))?;
        Ok(wire_from_felt(&x))
    }

    /// Poseidon permutation over a caller grid
    ///
    /// The grid must be 3 rows of 4 limbs; the result is a new grid of the
    /// same shape in the same row and column order.
    pub fn hades<R: AsRef<[u64]>>(&self, grid: &[R]) -> Result<Vec<Vec<u64>>, BridgeError> {
        let state = PoseidonState::from_grid(grid).map_err(|err| {
            debug!(%err, "rejected poseidon grid");
            BridgeError::from(err)
        })?;
        Ok(self.hades_state(state)?.to_grid())
    }

    /// Poseidon permutation over an already-shaped state
    pub fn hades_state(&self, state: PoseidonState) -> Result<PoseidonState, BridgeError> {
        let mut felts = state.elements().map(|e| felt_from_element(&e));
        self.permute(&mut felts)?;
        Ok(PoseidonState::from_elements(
            felts.map(|f| element_from_felt(&f)),
        ))
    }

    pub(crate) fn pedersen_felts(&self, a: &Felt, b: &Felt) -> Result<Felt, BridgeError> {
        guarded("pedersen", || Ok(self.primitives.pedersen_hash(a, b)))
    }

    pub(crate) fn permute(&self, state: &mut [Felt; 3]) -> Result<(), BridgeError> {
        guarded("hades", || {
            self.primitives.poseidon_permute(state);
            Ok(())
        })
    }

    fn sign_felts(
        &self,
        private_key: &Felt,
        message: &Felt,
        k: &Felt,
    ) -> Result<WireSignature, BridgeError> {
        let (r, w) = guarded("sign", || {
            self.primitives.ecdsa_sign(private_key, message, k)
        })?;
        Ok(Signature::new(element_from_felt(&r), element_from_felt(&w)).encode())
    }
}

/// Validate, decode and lift one field-element argument
pub(crate) fn read_felt(argument: &'static str, buffer: &[u8]) -> Result<Felt, BridgeError> {
    let elem = read_element(argument, buffer).map_err(|err| {
        debug!(%err, "rejected field element");
        BridgeError::from(err)
    })?;
    Ok(felt_from_element(&elem))
}

/// Validate and decode a scalar argument, reduced modulo the curve order
fn read_scalar(argument: &'static str, buffer: &[u8]) -> Result<Felt, BridgeError> {
    let elem = read_element(argument, buffer).map_err(|err| {
        debug!(%err, "rejected scalar");
        BridgeError::from(err)
    })?;
    Ok(felt_from_element(&reduce_scalar(&elem)))
}

fn wire_from_felt(felt: &Felt) -> WireElement {
    element_from_felt(felt).encode()
}
