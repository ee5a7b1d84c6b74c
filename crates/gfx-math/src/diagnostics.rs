// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Debug events for inputs that silently degrade a result.
//!
//! The math itself never reports failure; these hooks only make the silent
//! paths observable. Without the `tracing` feature every hook is an empty
//! inline function.

/// An orthonormalization received a linearly dependent basis and returned it unchanged.
#[cfg(feature = "tracing")]
pub(crate) fn dependent_basis(dimension: usize) {
    tracing::debug!(
        dimension,
        "orthonormalize: linearly dependent basis returned unchanged"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn dependent_basis(_dimension: usize) {}

/// An inverse was requested for a matrix whose determinant is exactly zero.
#[cfg(feature = "tracing")]
pub(crate) fn singular_inverse(size: usize) {
    tracing::debug!(size, "inverse: determinant is zero, result is not finite");
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn singular_inverse(_size: usize) {}
