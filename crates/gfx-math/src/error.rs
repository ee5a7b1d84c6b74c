// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Errors raised when a value type is built from a runtime-sized slice.
///
/// Arithmetic never produces this error; it only guards the `TryFrom<&[_]>`
/// conversions, where the slice length is not known until runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// The slice does not hold exactly as many scalars as the target type.
    #[error("expected {expected} components, got {actual}")]
    LengthMismatch {
        /// Component count of the target type.
        expected: usize,
        /// Length of the slice that was supplied.
        actual: usize,
    },
}

/// Copies `slice` into a fixed-size array, reporting a length mismatch.
pub(crate) fn read_array<T: Copy, const N: usize>(slice: &[T]) -> Result<[T; N], MathError> {
    <[T; N]>::try_from(slice).map_err(|_| MathError::LengthMismatch {
        expected: N,
        actual: slice.len(),
    })
}
