//! Input shape validation
//!
//! Every field-element argument is length-checked before it is decoded, and
//! the Poseidon grid is shape-checked before it is marshalled. Decoding a
//! buffer of the wrong length is never attempted.

use thiserror::Error;

use crate::field::{decode, FieldElement, WireElement, ELEMENT_SIZE};

/// A buffer or grid whose size does not match the fixed wire contract
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SizeError {
    /// Byte buffer of the wrong length
    #[error("argument `{argument}` must be {expected} bytes, got {actual}")]
    Length {
        argument: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Null buffer pointer handed over a foreign boundary
    #[error("argument `{argument}` is a null pointer")]
    NullBuffer { argument: &'static str },

    /// Grid with the wrong number of rows
    #[error("state grid must have {expected} rows, got {actual}")]
    GridRows { expected: usize, actual: usize },

    /// Grid row with the wrong number of columns
    #[error("state grid row {row} must have {expected} columns, got {actual}")]
    GridColumns {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

impl SizeError {
    /// Create a buffer length error
    pub fn length(argument: &'static str, expected: usize, actual: usize) -> Self {
        Self::Length {
            argument,
            expected,
            actual,
        }
    }
}

/// Check that `buffer` is exactly `expected` bytes long
pub fn validate_length(
    argument: &'static str,
    buffer: &[u8],
    expected: usize,
) -> Result<(), SizeError> {
    if buffer.len() != expected {
        return Err(SizeError::length(argument, expected, buffer.len()));
    }
    Ok(())
}

/// Validate a field-element argument and decode it
pub fn read_element(argument: &'static str, buffer: &[u8]) -> Result<FieldElement, SizeError> {
    validate_length(argument, buffer, ELEMENT_SIZE)?;
    let wire: &WireElement = buffer
        .try_into()
        .map_err(|_| SizeError::length(argument, ELEMENT_SIZE, buffer.len()))?;
    Ok(decode(wire))
}

/// Check that a grid has exactly `rows` rows of `cols` columns each
///
/// The counts are read from the supplied grid itself; the first offending
/// row is reported.
pub fn validate_grid_shape<R: AsRef<[u64]>>(
    grid: &[R],
    rows: usize,
    cols: usize,
) -> Result<(), SizeError> {
    if grid.len() != rows {
        return Err(SizeError::GridRows {
            expected: rows,
            actual: grid.len(),
        });
    }
    for (row, values) in grid.iter().enumerate() {
        let actual = values.as_ref().len();
        if actual != cols {
            return Err(SizeError::GridColumns {
                row,
                expected: cols,
                actual,
            });
        }
    }
    Ok(())
}
