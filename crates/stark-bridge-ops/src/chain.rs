//! Hash chains built from the bridge's Pedersen and Poseidon operations
//!
//! - Pedersen over a list: `h(h(h(0, e1), e2), ..., n)`
//! - Poseidon sponge with rate 2 and capacity 1, padded with a single one

use stark_bridge_primitives::WireElement;
use starknet_crypto::Felt;

use crate::bridge::{read_felt, OperationBridge};
use crate::error::BridgeError;
use crate::primitive::{element_from_felt, CurvePrimitives};

impl<P: CurvePrimitives> OperationBridge<P> {
    /// Pedersen hash of a list of elements, length-terminated
    ///
    /// All elements are validated before any hashing starts.
    pub fn pedersen_on_elements<B: AsRef<[u8]>>(
        &self,
        elements: &[B],
    ) -> Result<WireElement, BridgeError> {
        let felts = read_all(elements)?;
        let acc = felts
            .iter()
            .try_fold(Felt::ZERO, |acc, e| self.pedersen_felts(&acc, e))?;
        let digest = self.pedersen_felts(&acc, &Felt::from(felts.len() as u64))?;
        Ok(element_from_felt(&digest).encode())
    }

    /// Poseidon hash of two elements
    pub fn poseidon_hash(&self, first: &[u8], second: &[u8]) -> Result<WireElement, BridgeError> {
        let mut state = [read_felt("first", first)?, read_felt("second", second)?, Felt::TWO];
        self.permute(&mut state)?;
        Ok(element_from_felt(&state[0]).encode())
    }

    /// Poseidon hash of a single element
    pub fn poseidon_hash_single(&self, value: &[u8]) -> Result<WireElement, BridgeError> {
        let mut state = [read_felt("value", value)?, Felt::ZERO, Felt::ONE];
        self.permute(&mut state)?;
        Ok(element_from_felt(&state[0]).encode())
    }

    /// Poseidon hash of any number of elements
    pub fn poseidon_hash_many<B: AsRef<[u8]>>(
        &self,
        elements: &[B],
    ) -> Result<WireElement, BridgeError> {
        let felts = read_all(elements)?;
        let mut state = [Felt::ZERO; 3];

        let mut pairs = felts.chunks_exact(2);
        for pair in pairs.by_ref() {
            state[0] += pair[0];
            state[1] += pair[1];
            self.permute(&mut state)?;
        }

        match pairs.remainder() {
            [last] => {
                state[0] += *last;
                state[1] += Felt::ONE;
            }
            _ => state[0] += Felt::ONE,
        }
        self.permute(&mut state)?;

        Ok(element_from_felt(&state[0]).encode())
    }
}

fn read_all<B: AsRef<[u8]>>(elements: &[B]) -> Result<Vec<Felt>, BridgeError> {
    elements
        .iter()
        .map(|e| read_felt("element", e.as_ref()))
        .collect()
}
