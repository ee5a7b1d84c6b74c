// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};

use crate::scalar::{Real, EPSILON};
use crate::{Mat3, Mat4, Vec3};

/// Above this cosine [`Quat::slerp`] falls back to a normalized lerp.
const SLERP_LINEAR_THRESHOLD: Real = 0.9995;

/// Quaternion stored as `(x, y, z, w)`, `w` being the real part.
///
/// * All angles are expressed in radians.
/// * Unit length is not enforced. Rotation helpers assume unit input and
///   [`Quat::normalize`] has no zero-length guard.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat {
    data: [Real; 4],
}

const _: () = assert!(core::mem::size_of::<Quat>() == 4 * core::mem::size_of::<Real>());

impl Default for Quat {
    fn default() -> Self {
        Self::identity()
    }
}

impl Quat {
    /// All four components zero. Not a rotation.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a quaternion from components.
    pub const fn new(x: Real, y: Real, z: Real, w: Real) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Returns the identity rotation `(0, 0, 0, 1)`.
    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Pure quaternion `(v.x, v.y, v.z, 0)`.
    pub const fn from_vec3(v: Vec3) -> Self {
        Self::new(v.x(), v.y(), v.z(), 0.0)
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

    /// W (real) component.
    pub const fn w(self) -> Real {
        self.data[3]
    }

    /// Vector part `(x, y, z)`.
    pub const fn xyz(self) -> Vec3 {
        Vec3::new(self.data[0], self.data[1], self.data[2])
    }

    /// Returns the quaternion as an array.
    pub const fn to_array(self) -> [Real; 4] {
        self.data
    }

    /// Constructs a rotation of `angle` radians about `axis`.
    ///
    /// `axis` must already be unit length; it is not normalized here.
    pub fn from_axis_angle(axis: Vec3, angle: Real) -> Self {
        let (sin_half, cos_half) = (angle * 0.5).sin_cos();
        let v = axis * sin_half;
        Self::new(v.x(), v.y(), v.z(), cos_half)
    }

    /// Extracts the rotation of the upper-left 3×3 block of `m`.
    ///
    /// Branches on the trace so the square root argument stays well away
    /// from zero. For a unit `q` with `w >= 0`,
    /// `Quat::from_mat4(&Mat4::rotation_quat(q))` reproduces `q`.
    pub fn from_mat4(m: &Mat4) -> Self {
        Self::from_rotation_block(|row, col| m.at(row, col))
    }

    /// Same as [`Quat::from_mat4`] for a 3×3 rotation matrix.
    pub fn from_mat3(m: &Mat3) -> Self {
        Self::from_rotation_block(|row, col| m.at(row, col))
    }

    fn from_rotation_block(at: impl Fn(usize, usize) -> Real) -> Self {
        let (m00, m11, m22) = (at(0, 0), at(1, 1), at(2, 2));
        let trace = m00 + m11 + m22;

        if trace > 0.0 {
            let s = (trace + 1.0).sqrt();
            let h = 0.5 / s;
            Self::new(
                (at(2, 1) - at(1, 2)) * h,
                (at(0, 2) - at(2, 0)) * h,
                (at(1, 0) - at(0, 1)) * h,
                0.5 * s,
            )
        } else if m00 >= m11 && m00 >= m22 {
            let s = (1.0 + m00 - m11 - m22).sqrt();
            let h = 0.5 / s;
            Self::new(
                0.5 * s,
                (at(0, 1) + at(1, 0)) * h,
                (at(0, 2) + at(2, 0)) * h,
                (at(2, 1) - at(1, 2)) * h,
            )
        } else if m11 > m22 {
            let s = (1.0 + m11 - m00 - m22).sqrt();
            let h = 0.5 / s;
            Self::new(
                (at(1, 0) + at(0, 1)) * h,
                0.5 * s,
                (at(2, 1) + at(1, 2)) * h,
                (at(0, 2) - at(2, 0)) * h,
            )
        } else {
            let s = (1.0 + m22 - m00 - m11).sqrt();
            let h = 0.5 / s;
            Self::new(
                (at(2, 0) + at(0, 2)) * h,
                (at(2, 1) + at(1, 2)) * h,
                0.5 * s,
                (at(1, 0) - at(0, 1)) * h,
            )
        }
    }

    /// `true` when every component is within [`EPSILON`] of zero.
    pub fn is_zero(self) -> bool {
        self.data.iter().all(|c| c.abs() < EPSILON)
    }

    /// `true` when every component is within [`EPSILON`] of `other`'s.
    pub fn is_equal(self, other: Self) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| (a - b).abs() < EPSILON)
    }

    /// Hamilton product `self * other`.
    ///
    /// Operand order matters: as a rotation the result applies `other`
    /// first, then `self`.
    ///
    /// # Examples
    /// ```
    /// use gfx_math::{scalar::consts::FRAC_PI_2, Quat, Vec3};
    /// let yaw = Quat::from_axis_angle(Vec3::UNIT_Y, FRAC_PI_2);
    /// let pitch = Quat::from_axis_angle(Vec3::UNIT_X, FRAC_PI_2);
    /// assert_ne!(yaw.multiply(&pitch), pitch.multiply(&yaw));
    /// ```
    pub fn multiply(&self, other: &Self) -> Self {
        let [ax, ay, az, aw] = self.data;
        let [bx, by, bz, bw] = other.data;

        Self::new(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by - ax * bz + ay * bw + az * bx,
            aw * bz + ax * by - ay * bx + az * bw,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }

    /// `self * other.inverse()`.
    pub fn divide(&self, other: &Self) -> Self {
        self.multiply(&other.inverse())
    }

    /// Negates the vector part.
    pub fn conjugate(self) -> Self {
        Self::new(-self.x(), -self.y(), -self.z(), self.w())
    }

    /// Multiplicative inverse, `conjugate / length_squared`.
    pub fn inverse(self) -> Self {
        self.conjugate() / self.length_squared()
    }

    /// Four-component dot product.
    pub fn dot(self, other: Self) -> Real {
        self.data
            .iter()
            .zip(other.data.iter())
            .fold(0.0, |acc, (a, b)| acc + a * b)
    }

    /// Euclidean norm.
    pub fn length(self) -> Real {
        self.length_squared().sqrt()
    }

    /// Squared Euclidean norm.
    pub fn length_squared(self) -> Real {
        self.dot(self)
    }

    /// Divides by [`Quat::length`]. The zero quaternion yields all-`NaN`.
    pub fn normalize(self) -> Self {
        self / self.length()
    }

    /// Raises a unit rotation to `exponent`, scaling its angle.
    ///
    /// Returns `self` unchanged when `|w| >= 1 - EPSILON`, where the rotation
    /// axis is numerically undefined.
    pub fn power(self, exponent: Real) -> Self {
        let w = self.w();
        if w.abs() >= 1.0 - EPSILON {
            return self;
        }
        let alpha = w.acos();
        let new_alpha = alpha * exponent;
        let scale = new_alpha.sin() / alpha.sin();
        let v = self.xyz() * scale;
        Self::new(v.x(), v.y(), v.z(), new_alpha.cos())
    }

    /// Componentwise linear interpolation. The result is not normalized.
    pub fn lerp(self, other: Self, f: Real) -> Self {
        Self {
            data: core::array::from_fn(|i| crate::scalar::lerp(self.data[i], other.data[i], f)),
        }
    }

    /// Spherical linear interpolation along the shorter arc.
    ///
    /// `other` is negated when the inputs lie in opposite hemispheres, so at
    /// `f == 1` the result may be `-other`. Nearly parallel inputs fall back
    /// to a normalized lerp.
    pub fn slerp(self, other: Self, f: Real) -> Self {
        let mut target = other;
        let mut cos_theta = self.dot(other);
        if cos_theta < 0.0 {
            target = -target;
            cos_theta = -cos_theta;
        }
        if cos_theta > SLERP_LINEAR_THRESHOLD {
            return self.lerp(target, f).normalize();
        }
        let theta = cos_theta.acos();
        let sin_theta = theta.sin();
        let w0 = ((1.0 - f) * theta).sin() / sin_theta;
        let w1 = (f * theta).sin() / sin_theta;
        self * w0 + target * w1
    }

    /// `acos(dot / (|self| |other|))`.
    pub fn angle(self, other: Self) -> Real {
        let cos = self.dot(other) / (self.length_squared() * other.length_squared()).sqrt();
        cos.clamp(-1.0, 1.0).acos()
    }

    /// Rotates `v` by this (unit) quaternion, `q v q*`.
    pub fn rotate_vec3(self, v: Vec3) -> Vec3 {
        let u = self.xyz();
        let t = u.cross(v) * 2.0;
        v + t * self.w() + u.cross(t)
    }

    /// Rotation matrix; see [`Mat3::rotation_quat`].
    pub fn to_mat3(self) -> Mat3 {
        Mat3::rotation_quat(self)
    }

    /// Rotation matrix; see [`Mat4::rotation_quat`].
    pub fn to_mat4(self) -> Mat4 {
        Mat4::rotation_quat(self)
    }
}

impl core::ops::Mul for Quat {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl core::ops::MulAssign for Quat {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl core::ops::Div for Quat {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        self.divide(&rhs)
    }
}

impl core::ops::Mul<Vec3> for Quat {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.rotate_vec3(rhs)
    }
}

impl_additive_ops!(Quat);
impl_scalar_scaling!(Quat, Real);
impl_array_conversions!(Quat, Real, 4);
impl_tuple_display!(Quat);
