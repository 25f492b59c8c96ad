//! Field elements as four 64-bit limbs and their 32-byte wire encoding
//!
//! A field element crosses the boundary as exactly 32 bytes: four `u64`
//! words, each little-endian, least-significant limb first. In memory the
//! limbs are plain native integers.
//!
//! The codec does not reduce values modulo the field prime. Any 256-bit value
//! decodes; reduction into the field happens when the primitive layer builds
//! its own field type from the raw value.

use thiserror::Error;

/// Number of 64-bit limbs in a field element
pub const LIMB_COUNT: usize = 4;

/// Size of one limb on the wire
pub const LIMB_SIZE: usize = 8;

/// Size of a field element on the wire
pub const ELEMENT_SIZE: usize = LIMB_COUNT * LIMB_SIZE;

/// Raw limb array, least-significant limb first
pub type Limbs = [u64; LIMB_COUNT];

/// A field element in wire form
pub type WireElement = [u8; ELEMENT_SIZE];

/// Errors from parsing the `0x...` text form of a field element
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HexError {
    /// No digits after the optional prefix
    #[error("empty hex string")]
    Empty,

    /// More than 64 significant hex digits
    #[error("hex value has {digits} digits, at most 64 fit in a field element")]
    TooLong { digits: usize },

    /// Non-hex character
    #[error("invalid hex: {0}")]
    InvalidDigit(#[from] hex::FromHexError),
}

/// A 256-bit value held as four native-endian limbs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FieldElement(pub Limbs);

impl FieldElement {
    /// The all-zero element
    pub const ZERO: Self = Self([0; LIMB_COUNT]);

    /// Create from raw limbs (least-significant first)
    pub const fn from_limbs(limbs: Limbs) -> Self {
        Self(limbs)
    }

    /// Create from a small integer
    pub const fn from_u64(value: u64) -> Self {
        Self([value, 0, 0, 0])
    }

    /// Borrow the raw limbs
    pub const fn limbs(&self) -> &Limbs {
        &self.0
    }

    /// Decode from wire form
    pub fn decode(bytes: &WireElement) -> Self {
        decode(bytes)
    }

    /// Encode to wire form
    pub fn encode(&self) -> WireElement {
        encode(self)
    }

    /// Parse the conventional big-endian text form (`0x` prefix optional)
    pub fn from_hex(s: &str) -> Result<Self, HexError> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if digits.is_empty() {
            return Err(HexError::Empty);
        }
        let significant = digits.trim_start_matches('0');
        if significant.len() > 2 * ELEMENT_SIZE {
            return Err(HexError::TooLong {
                digits: significant.len(),
            });
        }

        let padded = format!("{:0>64}", significant);
        let big_endian = hex::decode(padded)?;

        let mut wire = [0u8; ELEMENT_SIZE];
        for (dst, src) in wire.iter_mut().zip(big_endian.iter().rev()) {
            *dst = *src;
        }
        Ok(decode(&wire))
    }

    /// Render as `0x`-prefixed lowercase hex without leading zeros
    pub fn to_hex(&self) -> String {
        let mut big_endian = encode(self);
        big_endian.reverse();
        let digits = hex::encode(big_endian);
        let trimmed = digits.trim_start_matches('0');
        if trimmed.is_empty() {
            "0x0".to_string()
        } else {
            format!("0x{}", trimmed)
        }
    }
}

impl From<Limbs> for FieldElement {
    fn from(limbs: Limbs) -> Self {
        Self(limbs)
    }
}

impl From<FieldElement> for Limbs {
    fn from(elem: FieldElement) -> Self {
        elem.0
    }
}

impl std::fmt::Display for FieldElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl serde::Serialize for FieldElement {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for FieldElement {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Read four little-endian words from a 32-byte buffer
pub fn decode(bytes: &WireElement) -> FieldElement {
    let mut limbs = [0u64; LIMB_COUNT];
    for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(LIMB_SIZE)) {
        let mut word = [0u8; LIMB_SIZE];
        word.copy_from_slice(chunk);
        *limb = u64::from_le_bytes(word);
    }
    FieldElement(limbs)
}

/// Write each limb as a little-endian word into consecutive 8-byte slices
pub fn encode(elem: &FieldElement) -> WireElement {
    let mut out = [0u8; ELEMENT_SIZE];
    encode_into(elem, &mut out);
    out
}

/// Encode into an existing wire buffer
pub fn encode_into(elem: &FieldElement, out: &mut WireElement) {
    for (chunk, limb) in out.chunks_exact_mut(LIMB_SIZE).zip(elem.0.iter()) {
        chunk.copy_from_slice(&limb.to_le_bytes());
    }
}
