// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};

use crate::scalar::Int;

/// Methods that only make sense for integer components.
///
/// Division truncates toward zero and panics on a zero divisor, exactly as
/// native integer division does.
macro_rules! impl_int_vector {
    ($ty:ident) => {
        impl $ty {
            /// `true` when every component is zero.
            pub fn is_zero(self) -> bool {
                self.data.iter().all(|&c| c == 0)
            }

            /// Exact componentwise equality.
            pub fn is_equal(self, other: Self) -> bool {
                self == other
            }

            /// Per-component `1`, `-1` or `0`.
            pub fn sign(self) -> Self {
                self.map(Int::signum)
            }

            /// Truncates every component to a multiple of the matching `step` component.
            pub fn snap(self, step: Self) -> Self {
                Self {
                    data: core::array::from_fn(|i| (self.data[i] / step.data[i]) * step.data[i]),
                }
            }

            /// Truncates every component to a multiple of `step`.
            pub fn snap_scalar(self, step: Int) -> Self {
                self.map(|c| (c / step) * step)
            }
        }
    };
}

/// 2D integer vector stored as `(x, y)`.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2i {
    data: [Int; 2],
}

/// 3D integer vector stored as `(x, y, z)`.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3i {
    data: [Int; 3],
}

/// 4D integer vector stored as `(x, y, z, w)`.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec4i {
    data: [Int; 4],
}

impl Vec2i {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0, 0);
    /// All components set to one.
    pub const ONE: Self = Self::new(1, 1);

    /// Creates a vector from components.
    pub const fn new(x: Int, y: Int) -> Self {
        Self { data: [x, y] }
    }

    /// X component.
    pub const fn x(self) -> Int {
        self.data[0]
    }

    /// Y component.
    pub const fn y(self) -> Int {
        self.data[1]
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [Int; 2] {
        self.data
    }

    /// Perpendicular vector `(y, -x)`.
    pub fn tangent(self) -> Self {
        Self::new(self.y(), -self.x())
    }
}

impl Vec3i {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0, 0, 0);
    /// All components set to one.
    pub const ONE: Self = Self::new(1, 1, 1);

    /// Creates a vector from components.
    pub const fn new(x: Int, y: Int, z: Int) -> Self {
        Self { data: [x, y, z] }
    }

    /// X component.
    pub const fn x(self) -> Int {
        self.data[0]
    }

    /// Y component.
    pub const fn y(self) -> Int {
        self.data[1]
    }

    /// Z component.
    pub const fn z(self) -> Int {
        self.data[2]
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [Int; 3] {
        self.data
    }

    /// Right-handed cross product.
    pub fn cross(self, other: Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }
}

impl Vec4i {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);
    /// All components set to one.
    pub const ONE: Self = Self::new(1, 1, 1, 1);

    /// Creates a vector from components.
    pub const fn new(x: Int, y: Int, z: Int, w: Int) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// X component.
    pub const fn x(self) -> Int {
        self.data[0]
    }

    /// Y component.
    pub const fn y(self) -> Int {
        self.data[1]
    }

    /// Z component.
    pub const fn z(self) -> Int {
        self.data[2]
    }

    /// W component.
    pub const fn w(self) -> Int {
        self.data[3]
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [Int; 4] {
        self.data
    }
}

impl_additive_ops!(Vec2i);
impl_scalar_offset!(Vec2i, Int);
impl_scalar_scaling!(Vec2i, Int);
impl_componentwise_ops!(Vec2i);
impl_array_conversions!(Vec2i, Int, 2);
impl_component_bounds!(Vec2i, Int);
impl_int_vector!(Vec2i);
impl_tuple_display!(Vec2i);

impl_additive_ops!(Vec3i);
impl_scalar_offset!(Vec3i, Int);
impl_scalar_scaling!(Vec3i, Int);
impl_componentwise_ops!(Vec3i);
impl_array_conversions!(Vec3i, Int, 3);
impl_component_bounds!(Vec3i, Int);
impl_int_vector!(Vec3i);
impl_tuple_display!(Vec3i);

impl_additive_ops!(Vec4i);
impl_scalar_offset!(Vec4i, Int);
impl_scalar_scaling!(Vec4i, Int);
impl_componentwise_ops!(Vec4i);
impl_array_conversions!(Vec4i, Int, 4);
impl_component_bounds!(Vec4i, Int);
impl_int_vector!(Vec4i);
impl_tuple_display!(Vec4i);
