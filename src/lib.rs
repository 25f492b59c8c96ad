//! STARK Bridge - Bit-exact boundary for STARK curve primitives
//!
//! This crate lets foreign callers run Pedersen hashing, ECDSA and the
//! Poseidon permutation over the STARK curve through a fixed wire contract:
//! 32-byte field elements made of four little-endian 64-bit limbs,
//! least-significant limb first.
//!
//! # Overview
//!
//! Inputs are length-checked before decoding, the primitives run behind a
//! panic guard, and failures come back as a small typed taxonomy: an
//! argument error, an unknown primitive failure, or, for verification only,
//! a plain `false`.
//!
//! # Crates
//!
//! - `stark-bridge-primitives`: Limb codec, validation, signatures, Poseidon state
//! - `stark-bridge-ops`: Operation bridge, error translation, naming facades
//! - `stark-bridge-ffi`: C ABI entry points
//!
//! # Example
//!
//! ```no_run
//! use stark_bridge::ops::OperationBridge;
//!
//! let bridge = OperationBridge::new();
//! let digest = bridge.pedersen(&[0u8; 32], &[0u8; 32]).unwrap();
//! assert_eq!(digest.len(), 32);
//! ```

// Re-export sub-crates
pub use stark_bridge_ffi as ffi;
pub use stark_bridge_ops as ops;
pub use stark_bridge_primitives as primitives;
