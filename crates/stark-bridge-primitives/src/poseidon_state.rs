//! Poseidon permutation state and its grid marshalling
//!
//! The Hades permutation runs over three field elements. Callers hand the
//! state over as a rows x columns grid of `u64`, one row per element and one
//! column per limb (least-significant first). The grid is copied row-major
//! into a fixed `[[u64; 4]; 3]` array and copied back into a freshly
//! allocated grid of the same shape after the permutation.

use crate::field::{FieldElement, LIMB_COUNT};
use crate::validate::{validate_grid_shape, SizeError};

/// Number of field elements in the state
pub const STATE_ROWS: usize = 3;

/// Limbs per field element
pub const STATE_COLS: usize = LIMB_COUNT;

/// Fixed-size state grid
pub type StateGrid = [[u64; STATE_COLS]; STATE_ROWS];

/// Native Poseidon state: three four-limb elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PoseidonState(pub StateGrid);

impl PoseidonState {
    /// Marshal a caller grid into the fixed state, row-major
    pub fn from_grid<R: AsRef<[u64]>>(grid: &[R]) -> Result<Self, SizeError> {
        validate_grid_shape(grid, STATE_ROWS, STATE_COLS)?;

        let mut state = [[0u64; STATE_COLS]; STATE_ROWS];
        for (dst, src) in state.iter_mut().zip(grid.iter()) {
            dst.copy_from_slice(src.as_ref());
        }
        Ok(Self(state))
    }

    /// Copy the state into a freshly allocated grid of the same shape
    pub fn to_grid(&self) -> Vec<Vec<u64>> {
        self.0.iter().map(|row| row.to_vec()).collect()
    }

    pub fn from_elements(elements: [FieldElement; STATE_ROWS]) -> Self {
        Self(elements.map(|e| e.0))
    }

    pub fn elements(&self) -> [FieldElement; STATE_ROWS] {
        self.0.map(FieldElement)
    }

    pub fn rows(&self) -> &StateGrid {
        &self.0
    }
}

impl From<StateGrid> for PoseidonState {
    fn from(grid: StateGrid) -> Self {
        Self(grid)
    }
}
