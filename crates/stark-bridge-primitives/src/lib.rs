//! STARK Bridge Primitives
//!
//! Wire-level building blocks shared by every operation of the bridge:
//! - Limb codec between 32-byte wire buffers and four-limb field elements
//! - Length and shape validation run before anything is decoded
//! - Signature pairs and their 64-byte wire form
//! - Curve scalars reduced modulo the curve order
//! - The 3x4 Poseidon state grid and its row-major marshalling

pub mod field;
pub mod poseidon_state;
pub mod scalar;
pub mod signature;
pub mod validate;

pub use field::{
    decode, encode, FieldElement, HexError, Limbs, WireElement, ELEMENT_SIZE, LIMB_COUNT,
    LIMB_SIZE,
};
pub use poseidon_state::{PoseidonState, StateGrid, STATE_COLS, STATE_ROWS};
pub use scalar::{is_zero_scalar, reduce_scalar, CURVE_ORDER};
pub use signature::{Signature, WireSignature, SIGNATURE_SIZE};
pub use validate::{read_element, validate_grid_shape, validate_length, SizeError};
