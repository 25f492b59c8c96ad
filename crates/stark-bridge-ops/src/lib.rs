//! STARK Bridge Operations
//!
//! This crate exposes the STARK curve primitives over fixed-size wire
//! buffers. Each operation validates and decodes its arguments, invokes the
//! primitive behind a panic guard, and encodes the result.
//!
//! # Operations
//!
//! - `pedersen`: Pedersen hash of two elements
//! - `sign`: ECDSA signature `r || w` with an explicit nonce
//! - `verify`: ECDSA verification; always returns a boolean
//! - `get_public_key`: x-coordinate of the derived public key
//! - `hades`: Poseidon permutation over a 3x4 limb grid
//!
//! # Usage
//!
//! ```ignore
//! use stark_bridge_ops::OperationBridge;
//!
//! let bridge = OperationBridge::new();
//! let digest = bridge.pedersen(&[0u8; 32], &[0u8; 32])?;
//! let signature = bridge.sign(&private_key, &digest, &k)?;
//! assert!(bridge.verify(&public_key, &digest, &signature[..32], &signature[32..]));
//! ```
//!
//! The [`facade`] module exposes the same bridge under the naming of both
//! binding generations.

pub mod bridge;
pub mod chain;
pub mod error;
pub mod facade;
mod guard;
pub mod primitive;

pub use bridge::OperationBridge;
pub use error::{BridgeError, ErrorKind, INVALID_ARGUMENT_MESSAGE, UNKNOWN_FAILURE_MESSAGE};
pub use primitive::{
    element_from_felt, felt_from_element, invert_mod_order, CurvePrimitives, PrimitiveFault,
    StarkCurve,
};
pub use starknet_crypto::Felt;
