// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};

use crate::scalar::Real;
use crate::{Mat4, Vec3};
#[cfg(feature = "int")]
use crate::{Int, Vec4i};

/// 4D vector stored as `(x, y, z, w)`; typically a homogeneous point or an RGBA colour.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec4 {
    data: [Real; 4],
}

const _: () = assert!(core::mem::size_of::<Vec4>() == 4 * core::mem::size_of::<Real>());

impl Vec4 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// All components set to one.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: Real, y: Real, z: Real, w: Real) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Creates a vector with every component set to `value`.
    pub const fn splat(value: Real) -> Self {
        Self::new(value, value, value, value)
    }

    /// Extends `v` with the given `w`.
    pub const fn from_vec3(v: Vec3, w: Real) -> Self {
        Self::new(v.x(), v.y(), v.z(), w)
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

    /// W component.
    pub const fn w(self) -> Real {
        self.data[3]
    }

    /// Drops `w`.
    pub const fn truncate(self) -> Vec3 {
        Vec3::new(self.x(), self.y(), self.z())
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [Real; 4] {
        self.data
    }

    /// `m * self`, treating `self` as a column vector.
    pub fn multiply_mat4(self, m: &Mat4) -> Self {
        m.multiply_vec4(self)
    }

    /// Truncates every component toward zero.
    #[cfg(feature = "int")]
    pub fn to_vec4i(self) -> Vec4i {
        Vec4i::new(
            self.x() as Int,
            self.y() as Int,
            self.z() as Int,
            self.w() as Int,
        )
    }
}

#[cfg(feature = "int")]
impl From<Vec4i> for Vec4 {
    fn from(value: Vec4i) -> Self {
        let [x, y, z, w] = value.to_array();
        Self::new(x as Real, y as Real, z as Real, w as Real)
    }
}

impl_additive_ops!(Vec4);
impl_scalar_offset!(Vec4, Real);
impl_scalar_scaling!(Vec4, Real);
impl_componentwise_ops!(Vec4);
impl_array_conversions!(Vec4, Real, 4);
impl_component_bounds!(Vec4, Real);
impl_float_vector!(Vec4);
impl_tuple_display!(Vec4);
