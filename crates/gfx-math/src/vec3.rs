// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};

use crate::diagnostics;
use crate::scalar::Real;
use crate::Mat3;
#[cfg(feature = "int")]
use crate::{Int, Vec3i};

/// 3D vector stored as `(x, y, z)`.
///
/// * Components may encode points or directions depending on the caller;
///   [`crate::Mat4::transform_point`] and [`crate::Mat4::transform_direction`]
///   pick the homogeneous `w` accordingly.
/// * Operators act componentwise; `Vec3 * Real` scales.
/// * Nothing here guards against zero-length input: [`Vec3::normalize`] of
///   the zero vector is all-`NaN`.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    data: [Real; 3],
}

const _: () = assert!(core::mem::size_of::<Vec3>() == 3 * core::mem::size_of::<Real>());

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// All components set to one.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: Real, y: Real, z: Real) -> Self {
        Self { data: [x, y, z] }
    }

    /// Creates a vector with every component set to `value`.
    pub const fn splat(value: Real) -> Self {
        Self::new(value, value, value)
    }

    /// X component.
    pub const fn x(self) -> Real {
        self.data[0]
    }

    /// Y component.
    pub const fn y(self) -> Real {
        self.data[1]
    }

    /// Z component.
    pub const fn z(self) -> Real {
        self.data[2]
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [Real; 3] {
        self.data
    }

    /// Right-handed cross product.
    pub fn cross(self, other: Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Rotates about `axis` by `angle` radians (Rodrigues' rotation formula).
    ///
    /// `axis` is normalized internally and need not be unit length; a zero
    /// axis produces `NaN`. The caller's `axis` value is left untouched.
    pub fn rotate(self, axis: Self, angle: Real) -> Self {
        let (sn, cs) = angle.sin_cos();
        let k = 1.0 - cs;
        let [x, y, z] = self.data;
        let [rx, ry, rz] = axis.normalize().data;

        Self::new(
            x * (cs + rx * rx * k) + y * (rx * ry * k - rz * sn) + z * (rx * rz * k + ry * sn),
            x * (ry * rx * k + rz * sn) + y * (cs + ry * ry * k) + z * (ry * rz * k - rx * sn),
            x * (rz * rx * k - ry * sn) + y * (rz * ry * k + rx * sn) + z * (cs + rz * rz * k),
        )
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

    /// `true` when the scalar triple product `v0 · (v1 × v2)` is non-zero.
    pub fn linear_independent(v0: Self, v1: Self, v2: Self) -> bool {
        v0.dot(v1.cross(v2)) != 0.0
    }

    /// Classical Gram-Schmidt orthonormalization of `(v0, v1, v2)`.
    ///
    /// Each vector loses its components along the ones before it, then all
    /// three are normalized. A linearly dependent basis is returned
    /// unchanged; this is not reported to the caller.
    pub fn orthonormalize(v0: Self, v1: Self, v2: Self) -> (Self, Self, Self) {
        if !Self::linear_independent(v0, v1, v2) {
            diagnostics::dependent_basis(3);
            return (v0, v1, v2);
        }
        let u0 = v0;
        let u1 = v1 - v1.project(u0);
        let u2 = v2 - v2.project(u0) - v2.project(u1);
        (u0.normalize(), u1.normalize(), u2.normalize())
    }

    /// `m * self`, treating `self` as a column vector.
    pub fn multiply_mat3(self, m: &Mat3) -> Self {
        m.multiply_vec3(self)
    }

    /// Truncates every component toward zero.
    #[cfg(feature = "int")]
    pub fn to_vec3i(self) -> Vec3i {
        Vec3i::new(self.x() as Int, self.y() as Int, self.z() as Int)
    }
}

#[cfg(feature = "int")]
impl From<Vec3i> for Vec3 {
    fn from(value: Vec3i) -> Self {
        let [x, y, z] = value.to_array();
        Self::new(x as Real, y as Real, z as Real)
    }
}

impl_additive_ops!(Vec3);
impl_scalar_offset!(Vec3, Real);
impl_scalar_scaling!(Vec3, Real);
impl_componentwise_ops!(Vec3);
impl_array_conversions!(Vec3, Real, 3);
impl_component_bounds!(Vec3, Real);
impl_float_vector!(Vec3);
impl_tuple_display!(Vec3);
