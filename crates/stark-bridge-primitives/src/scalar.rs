//! Curve scalars: private keys and signing nonces
//!
//! Scalars arrive as raw 256-bit values in the same wire form as field
//! elements but live modulo the curve order `n`, not the field prime. A
//! scalar at or above `n` is reduced modulo `n` before it reaches the curve.

use crate::field::{FieldElement, Limbs, LIMB_COUNT};

/// Order of the STARK curve generator,
/// `0x0800000000000010ffffffffffffffffb781126dcae7b2321e66a241adc64d2f`
pub const CURVE_ORDER: FieldElement = FieldElement([
    0x1e66_a241_adc6_4d2f,
    0xb781_126d_cae7_b232,
    0xffff_ffff_ffff_ffff,
    0x0800_0000_0000_0010,
]);

/// `n << 4` still fits in 256 bits and `2^256 < 32 n`
const MAX_ORDER_SHIFT: u32 = 4;

/// Reduce a 256-bit scalar modulo the curve order
pub fn reduce_scalar(value: &FieldElement) -> FieldElement {
    let mut acc = value.0;
    for shift in (0..=MAX_ORDER_SHIFT).rev() {
        let multiple = shl(&CURVE_ORDER.0, shift);
        if ge(&acc, &multiple) {
            acc = sub(&acc, &multiple);
        }
    }
    FieldElement(acc)
}

/// Whether a scalar is zero modulo the curve order
pub fn is_zero_scalar(value: &FieldElement) -> bool {
    reduce_scalar(value) == FieldElement::ZERO
}

fn shl(value: &Limbs, shift: u32) -> Limbs {
    if shift == 0 {
        return *value;
    }
    let mut out = [0u64; LIMB_COUNT];
    for i in 0..LIMB_COUNT {
        out[i] = value[i] << shift;
        if i > 0 {
            out[i] |= value[i - 1] >> (64 - shift);
        }
    }
    out
}

fn ge(a: &Limbs, b: &Limbs) -> bool {
    for i in (0..LIMB_COUNT).rev() {
        if a[i] != b[i] {
            return a[i] > b[i];
        }
    }
    true
}

fn sub(a: &Limbs, b: &Limbs) -> Limbs {
    let mut out = [0u64; LIMB_COUNT];
    let mut borrow = false;
    for i in 0..LIMB_COUNT {
        let (d1, b1) = a[i].overflowing_sub(b[i]);
        let (d2, b2) = d1.overflowing_sub(u64::from(borrow));
        out[i] = d2;
        borrow = b1 || b2;
    }
    out
}
