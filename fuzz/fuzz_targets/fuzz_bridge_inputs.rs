//! Fuzz target for the operation bridge
//!
//! This target ensures every operation:
//! 1. Never panics on any input
//! 2. Rejects wrong-size arguments as argument errors
//! 3. Answers verification with a plain boolean

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use stark_bridge_ops::{BridgeError, ErrorKind, OperationBridge};
use stark_bridge_primitives::ELEMENT_SIZE;

#[derive(Debug, Arbitrary)]
enum FuzzInput {
    Pedersen { first: Vec<u8>, second: Vec<u8> },
    Sign { private_key: Vec<u8>, message: Vec<u8>, k: Vec<u8> },
    Verify { public_key: Vec<u8>, hash: Vec<u8>, r: Vec<u8>, w: Vec<u8> },
    PublicKey { private_key: Vec<u8> },
    Hades { grid: Vec<Vec<u64>> },
    PoseidonMany { elements: Vec<[u8; 32]> },
}

fn check_size_error<T>(result: Result<T, BridgeError>, inputs: &[&[u8]]) {
    if inputs.iter().any(|i| i.len() != ELEMENT_SIZE) {
        let err = result.err().expect("wrong-size input was accepted");
        assert_eq!(err.kind(), ErrorKind::IllegalArgument);
    }
}

fuzz_target!(|input: FuzzInput| {
    let bridge = OperationBridge::new();
    match input {
        FuzzInput::Pedersen { first, second } => {
            check_size_error(bridge.pedersen(&first, &second), &[first.as_slice(), second.as_slice()]);
        }
        FuzzInput::Sign { private_key, message, k } => {
            check_size_error(
                bridge.sign(&private_key, &message, &k),
                &[private_key.as_slice(), message.as_slice(), k.as_slice()],
            );
        }
        FuzzInput::Verify { public_key, hash, r, w } => {
            let valid = bridge.verify(&public_key, &hash, &r, &w);
            let sized = [&public_key, &hash, &r, &w].iter().all(|i| i.len() == ELEMENT_SIZE);
            assert!(sized || !valid);
        }
        FuzzInput::PublicKey { private_key } => {
            check_size_error(bridge.get_public_key(&private_key), &[private_key.as_slice()]);
        }
        FuzzInput::Hades { grid } => {
            // Limit input size to avoid OOM
            let grid: Vec<Vec<u64>> = grid.into_iter().take(8).collect();
            if let Ok(permuted) = bridge.hades(&grid) {
                assert_eq!(permuted.len(), 3);
            }
        }
        FuzzInput::PoseidonMany { elements } => {
            let elements: Vec<[u8; 32]> = elements.into_iter().take(64).collect();
            let first = bridge.poseidon_hash_many(&elements);
            let second = bridge.poseidon_hash_many(&elements);
            assert_eq!(first.ok(), second.ok());
        }
    }
});
