//! Fuzz target for the limb codec and argument validation
//!
//! This target ensures that:
//! 1. Decoding then encoding any 32 bytes is lossless
//! 2. Only 32-byte buffers pass validation
//! 3. Hex parsing never panics and round-trips what it accepts

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use stark_bridge_primitives::{read_element, FieldElement, PoseidonState, Signature, ELEMENT_SIZE};

#[derive(Debug, Arbitrary)]
enum FuzzInput {
    Wire([u8; 32]),
    Buffer(Vec<u8>),
    Hex(String),
    Grid(Vec<Vec<u64>>),
}

fuzz_target!(|input: FuzzInput| {
    match input {
        FuzzInput::Wire(bytes) => {
            assert_eq!(FieldElement::decode(&bytes).encode(), bytes);
        }
        FuzzInput::Buffer(buffer) => {
            let accepted = read_element("buffer", &buffer).is_ok();
            assert_eq!(accepted, buffer.len() == ELEMENT_SIZE);

            let signature = Signature::from_slice(&buffer);
            assert_eq!(signature.is_ok(), buffer.len() == 2 * ELEMENT_SIZE);
        }
        FuzzInput::Hex(text) => {
            if let Ok(elem) = FieldElement::from_hex(&text) {
                assert_eq!(FieldElement::from_hex(&elem.to_hex()).ok(), Some(elem));
            }
        }
        FuzzInput::Grid(grid) => {
            let shaped = grid.len() == 3 && grid.iter().all(|row| row.len() == 4);
            assert_eq!(PoseidonState::from_grid(&grid).is_ok(), shaped);
        }
    }
});
