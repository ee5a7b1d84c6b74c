// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};

use crate::diagnostics;
use crate::scalar::Real;
use crate::Mat2;
#[cfg(feature = "int")]
use crate::{Int, Vec2i};

/// 2D vector stored as `(x, y)`.
///
/// Arithmetic operators act componentwise; `Vec2 * Real` scales. Use
/// [`Mat2::multiply_vec2`] (or `Mat2 * Vec2`) to transform by a matrix.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    data: [Real; 2],
}

const _: () = assert!(core::mem::size_of::<Vec2>() == 2 * core::mem::size_of::<Real>());

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// All components set to one.
    pub const ONE: Self = Self::new(1.0, 1.0);

    /// Unit vector along +X.
    pub const UNIT_X: Self = Self::new(1.0, 0.0);

    /// Unit vector along +Y.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: Real, y: Real) -> Self {
        Self { data: [x, y] }
    }

    /// Creates a vector with every component set to `value`.
    pub const fn splat(value: Real) -> Self {
        Self::new(value, value)
    }

    /// X component.
    pub const fn x(self) -> Real {
        self.data[0]
    }

    /// Y component.
    pub const fn y(self) -> Real {
        self.data[1]
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [Real; 2] {
        self.data
    }

    /// Perpendicular vector `(y, -x)` (clockwise quarter turn).
    pub fn tangent(self) -> Self {
        Self::new(self.y(), -self.x())
    }

    /// Rotates counter-clockwise by `angle` radians.
    pub fn rotate(self, angle: Real) -> Self {
        let (sn, cs) = angle.sin_cos();
        let (x, y) = (self.x(), self.y());
        Self::new(x * cs - y * sn, x * sn + y * cs)
    }

    /// Angle of the vector from +X, `atan2(y, x)`, in `(-π, π]`.
    pub fn angle(self) -> Real {
        self.y().atan2(self.x())
    }

    /// Quadratic Bezier point at `f`, evaluated with De Casteljau's algorithm.
    pub fn bezier3(p0: Self, p1: Self, p2: Self, f: Real) -> Self {
        let a = p0.lerp(p1, f);
        let b = p1.lerp(p2, f);
        a.lerp(b, f)
    }

    /// Cubic Bezier point at `f`, evaluated with De Casteljau's algorithm.
    pub fn bezier4(p0: Self, p1: Self, p2: Self, p3: Self, f: Real) -> Self {
        let a = p0.lerp(p1, f);
        let b = p1.lerp(p2, f);
        let c = p2.lerp(p3, f);
        let ab = a.lerp(b, f);
        let bc = b.lerp(c, f);
        ab.lerp(bc, f)
    }

    /// `true` when the 2×2 determinant `|v0 v1|` is non-zero.
    pub fn linear_independent(v0: Self, v1: Self) -> bool {
        v0.x() * v1.y() - v1.x() * v0.y() != 0.0
    }

    /// Gram-Schmidt orthonormalization of the basis `(v0, v1)`.
    ///
    /// `v0` keeps its direction; `v1` loses its component along `v0`. A
    /// linearly dependent basis is returned unchanged, so callers that care
    /// must check [`Vec2::linear_independent`] first.
    pub fn orthonormalize(v0: Self, v1: Self) -> (Self, Self) {
        if !Self::linear_independent(v0, v1) {
            diagnostics::dependent_basis(2);
            return (v0, v1);
        }
        let u1 = v1 - v1.project(v0);
        (v0.normalize(), u1.normalize())
    }

    /// `m * self`, treating `self` as a column vector.
    pub fn multiply_mat2(self, m: &Mat2) -> Self {
        m.multiply_vec2(self)
    }

    /// Truncates every component toward zero.
    #[cfg(feature = "int")]
    pub fn to_vec2i(self) -> Vec2i {
        Vec2i::new(self.x() as Int, self.y() as Int)
    }
}

#[cfg(feature = "int")]
impl From<Vec2i> for Vec2 {
    fn from(value: Vec2i) -> Self {
        let [x, y] = value.to_array();
        Self::new(x as Real, y as Real)
    }
}

impl_additive_ops!(Vec2);
impl_scalar_offset!(Vec2, Real);
impl_scalar_scaling!(Vec2, Real);
impl_componentwise_ops!(Vec2);
impl_array_conversions!(Vec2, Real, 2);
impl_component_bounds!(Vec2, Real);
impl_float_vector!(Vec2);
impl_tuple_display!(Vec2);
