// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};

use crate::diagnostics;
use crate::scalar::Real;
use crate::Vec2;

/// Column-major 2×2 matrix, stored `m11, m21, m12, m22`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat2 {
    data: [Real; 4],
}

const _: () = assert!(core::mem::size_of::<Mat2>() == 4 * core::mem::size_of::<Real>());

impl Mat2 {
    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self::new([1.0, 0.0, 0.0, 1.0])
    }

    /// Builds a matrix from elements listed row by row.
    pub const fn from_elements(m11: Real, m12: Real, m21: Real, m22: Real) -> Self {
        Self::new([m11, m21, m12, m22])
    }

    /// `m11 * m22 - m12 * m21`.
    pub fn determinant(&self) -> Real {
        let [m11, m21, m12, m22] = self.data;
        m11 * m22 - m12 * m21
    }

    /// Matrix of signed minors.
    pub fn cofactor(&self) -> Self {
        let [m11, m21, m12, m22] = self.data;
        Self::new([m22, -m12, -m21, m11])
    }

    /// Adjugate divided by the determinant.
    ///
    /// A singular matrix divides by zero and yields non-finite elements.
    pub fn inverse(&self) -> Self {
        let det = self.determinant();
        if det == 0.0 {
            diagnostics::singular_inverse(2);
        }
        self.adjugate() / det
    }

    /// Diagonal scale matrix.
    pub const fn scaling(v: Vec2) -> Self {
        Self::new([v.x(), 0.0, 0.0, v.y()])
    }

    /// Multiplies the diagonal of `self` by `v`, leaving other elements untouched.
    pub fn scale(&self, v: Vec2) -> Self {
        let mut data = self.data;
        data[0] *= v.x();
        data[3] *= v.y();
        Self::new(data)
    }

    /// Counter-clockwise rotation by `angle` radians.
    pub fn rotation(angle: Real) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([c, s, -s, c])
    }
}

impl_square_matrix!(Mat2, Vec2, 2, 4, multiply_vec2);
