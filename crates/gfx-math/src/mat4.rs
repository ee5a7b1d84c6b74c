// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};

use crate::diagnostics;
use crate::mat3::{axis_angle_block, quat_block};
use crate::scalar::Real;
use crate::{Mat3, Quat, Vec3, Vec4};

/// Column‑major 4×4 matrix.
///
/// - Stored in column‑major order to align with GPU uploads; translation
///   occupies elements 12–14.
/// - Projection builders are right-handed with the camera looking down −Z.
///
/// # Examples
/// ```
/// use gfx_math::{Mat4, Vec3};
/// let t = Mat4::translation(Vec3::new(5.0, -3.0, 2.0));
/// let p = Vec3::new(2.0, 4.0, -1.0);
/// assert_eq!(t.transform_point(&p).to_array(), [7.0, 1.0, 1.0]);
/// ```
///
/// # Precision
/// Repeated multiplies and transforms accumulate rounding; the inverse is
/// only as good as the determinant is far from zero.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat4 {
    data: [Real; 16],
}

const _: () = assert!(core::mem::size_of::<Mat4>() == 16 * core::mem::size_of::<Real>());

impl Mat4 {
    /// Returns the identity matrix.
    #[rustfmt::skip]
    pub const fn identity() -> Self {
        Self::new([
            1.0, 0.0, 0.0, 0.0, // col 0
            0.0, 1.0, 0.0, 0.0, // col 1
            0.0, 0.0, 1.0, 0.0, // col 2
            0.0, 0.0, 0.0, 1.0, // col 3
        ])
    }

    /// Embeds `m` in the upper-left block with `1` in the bottom-right corner.
    pub fn from_mat3(m: &Mat3) -> Self {
        let mut out = Self::identity();
        for col in 0..3 {
            for row in 0..3 {
                out.data[col * 4 + row] = m.at(row, col);
            }
        }
        out
    }

    /// Determinant, expanded over all 24 permutations.
    pub fn determinant(&self) -> Real {
        let [m11, m21, m31, m41, m12, m22, m32, m42, m13, m23, m33, m43, m14, m24, m34, m44] =
            self.data;

        m11 * m22 * m33 * m44 - m11 * m22 * m34 * m43 - m11 * m23 * m32 * m44
            + m11 * m23 * m34 * m42
            + m11 * m24 * m32 * m43
            - m11 * m24 * m33 * m42
            - m12 * m21 * m33 * m44
            + m12 * m21 * m34 * m43
            + m12 * m23 * m31 * m44
            - m12 * m23 * m34 * m41
            - m12 * m24 * m31 * m43
            + m12 * m24 * m33 * m41
            + m13 * m21 * m32 * m44
            - m13 * m21 * m34 * m42
            - m13 * m22 * m31 * m44
            + m13 * m22 * m34 * m41
            + m13 * m24 * m31 * m42
            - m13 * m24 * m32 * m41
            - m14 * m21 * m32 * m43
            + m14 * m21 * m33 * m42
            + m14 * m22 * m31 * m43
            - m14 * m22 * m33 * m41
            - m14 * m23 * m31 * m42
            + m14 * m23 * m32 * m41
    }

    /// Matrix of signed 3×3 minors.
    pub fn cofactor(&self) -> Self {
        Self {
            data: core::array::from_fn(|i| {
                let (row, col) = (i % 4, i / 4);
                let rows = others(row);
                let cols = others(col);
                #[rustfmt::skip]
                let minor = Mat3::from_elements(
                    self.at(rows[0], cols[0]), self.at(rows[0], cols[1]), self.at(rows[0], cols[2]),
                    self.at(rows[1], cols[0]), self.at(rows[1], cols[1]), self.at(rows[1], cols[2]),
                    self.at(rows[2], cols[0]), self.at(rows[2], cols[1]), self.at(rows[2], cols[2]),
                )
                .determinant();
                if (row + col) % 2 == 0 {
                    minor
                } else {
                    -minor
                }
            }),
        }
    }

    /// Inverse via the adjugate, sharing twelve 2×2 sub-determinants between
    /// the determinant and the adjugate entries.
    ///
    /// A singular matrix divides by zero and yields non-finite elements.
    pub fn inverse(&self) -> Self {
        let [m11, m21, m31, m41, m12, m22, m32, m42, m13, m23, m33, m43, m14, m24, m34, m44] =
            self.data;

        // 2×2 determinants of the top two rows...
        let s0 = m11 * m22 - m21 * m12;
        let s1 = m11 * m23 - m21 * m13;
        let s2 = m11 * m24 - m21 * m14;
        let s3 = m12 * m23 - m22 * m13;
        let s4 = m12 * m24 - m22 * m14;
        let s5 = m13 * m24 - m23 * m14;

        // ...and of the bottom two.
        let c5 = m33 * m44 - m43 * m34;
        let c4 = m32 * m44 - m42 * m34;
        let c3 = m32 * m43 - m42 * m33;
        let c2 = m31 * m44 - m41 * m34;
        let c1 = m31 * m43 - m41 * m33;
        let c0 = m31 * m42 - m41 * m32;

        let det = s0 * c5 - s1 * c4 + s2 * c3 + s3 * c2 - s4 * c1 + s5 * c0;
        if det == 0.0 {
            diagnostics::singular_inverse(4);
        }

        let adjugate = Self::new([
            m22 * c5 - m23 * c4 + m24 * c3,
            -m21 * c5 + m23 * c2 - m24 * c1,
            m21 * c4 - m22 * c2 + m24 * c0,
            -m21 * c3 + m22 * c1 - m23 * c0,
            -m12 * c5 + m13 * c4 - m14 * c3,
            m11 * c5 - m13 * c2 + m14 * c1,
            -m11 * c4 + m12 * c2 - m14 * c0,
            m11 * c3 - m12 * c1 + m13 * c0,
            m42 * s5 - m43 * s4 + m44 * s3,
            -m41 * s5 + m43 * s2 - m44 * s1,
            m41 * s4 - m42 * s2 + m44 * s0,
            -m41 * s3 + m42 * s1 - m43 * s0,
            -m32 * s5 + m33 * s4 - m34 * s3,
            m31 * s5 - m33 * s2 + m34 * s1,
            -m31 * s4 + m32 * s2 - m34 * s0,
            m31 * s3 - m32 * s1 + m33 * s0,
        ]);
        adjugate / det
    }

    /// Builds a translation matrix.
    pub const fn translation(v: Vec3) -> Self {
        Self::identity().with_translation(v)
    }

    /// Copy of `self` with the translation column replaced by `v`.
    pub const fn with_translation(&self, v: Vec3) -> Self {
        let mut data = self.data;
        data[12] = v.x();
        data[13] = v.y();
        data[14] = v.z();
        Self::new(data)
    }

    /// Copy of `self` with `v` added to the translation column.
    pub fn translate(&self, v: Vec3) -> Self {
        let mut data = self.data;
        data[12] += v.x();
        data[13] += v.y();
        data[14] += v.z();
        Self::new(data)
    }

    /// Builds a non-uniform scale matrix.
    #[rustfmt::skip]
    pub const fn scaling(v: Vec3) -> Self {
        Self::new([
            v.x(), 0.0,   0.0,   0.0,
            0.0,   v.y(), 0.0,   0.0,
            0.0,   0.0,   v.z(), 0.0,
            0.0,   0.0,   0.0,   1.0,
        ])
    }

    /// Multiplies the first three diagonal elements by `v`.
    pub fn scale(&self, v: Vec3) -> Self {
        let mut data = self.data;
        data[0] *= v.x();
        data[5] *= v.y();
        data[10] *= v.z();
        Self::new(data)
    }

    /// Builds a rotation matrix around the X axis by `angle` radians.
    #[rustfmt::skip]
    pub fn rotation_x(angle: Real) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            1.0, 0.0, 0.0, 0.0,
            0.0, c,   s,   0.0,
            0.0, -s,  c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Builds a rotation matrix around the Y axis by `angle` radians.
    #[rustfmt::skip]
    pub fn rotation_y(angle: Real) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            c,   0.0, -s,  0.0,
            0.0, 1.0, 0.0, 0.0,
            s,   0.0, c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Builds a rotation matrix around the Z axis by `angle` radians.
    #[rustfmt::skip]
    pub fn rotation_z(angle: Real) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            c,   s,   0.0, 0.0,
            -s,  c,   0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Rotation of `angle` radians about `axis`, which need not be unit length.
    pub fn rotation_axis(axis: Vec3, angle: Real) -> Self {
        Self::from_mat3(&Mat3::new(axis_angle_block(axis, angle)))
    }

    /// Rotation matrix of `q`. `q` is used as given, without normalizing.
    pub fn rotation_quat(q: Quat) -> Self {
        Self::from_mat3(&Mat3::new(quat_block(q)))
    }

    /// Right-handed view matrix looking from `eye` towards `target`.
    ///
    /// `up` only has to be non-parallel to the view direction.
    #[rustfmt::skip]
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let f = (target - eye).normalize();
        let s = f.cross(up).normalize();
        let u = s.cross(f);
        Self::new([
            s.x(),        u.x(),        -f.x(),      0.0, // col 0
            s.y(),        u.y(),        -f.y(),      0.0, // col 1
            s.z(),        u.z(),        -f.z(),      0.0, // col 2
            -s.dot(eye),  -u.dot(eye),  f.dot(eye),  1.0, // col 3
        ])
    }

    /// Orthographic projection mapping the box onto `[-1, 1]³`.
    pub fn ortho(left: Real, right: Real, bottom: Real, top: Real, near: Real, far: Real) -> Self {
        let mut data = [0.0; 16];
        data[0] = 2.0 / (right - left);
        data[5] = 2.0 / (top - bottom);
        data[10] = -2.0 / (far - near);
        data[12] = -(right + left) / (right - left);
        data[13] = -(top + bottom) / (top - bottom);
        data[14] = -(far + near) / (far - near);
        data[15] = 1.0;
        Self::new(data)
    }

    /// Perspective projection from a vertical field of view.
    ///
    /// View-space depth `-near..-far` maps to `0..1` after the divide.
    pub fn perspective(fov_y: Real, aspect: Real, near: Real, far: Real) -> Self {
        let c = 1.0 / (fov_y * 0.5).tan();
        let mut data = [0.0; 16];
        data[0] = c / aspect;
        data[5] = c;
        data[10] = far / (near - far);
        data[11] = -1.0;
        data[14] = -(far * near) / (far - near);
        Self::new(data)
    }

    /// Perspective projection from a field of view and viewport size.
    pub fn perspective_fov(fov: Real, width: Real, height: Real, near: Real, far: Real) -> Self {
        let (sin_half, cos_half) = (fov * 0.5).sin_cos();
        let h2 = cos_half / sin_half;
        let w2 = h2 * height / width;
        let mut data = [0.0; 16];
        data[0] = w2;
        data[5] = h2;
        data[10] = far / (near - far);
        data[11] = -1.0;
        data[14] = -(far * near) / (far - near);
        Self::new(data)
    }

    /// Perspective projection with the far plane at infinity.
    pub fn perspective_infinite(fov_y: Real, aspect: Real, near: Real) -> Self {
        let range = (fov_y * 0.5).tan() * near;
        let mut data = [0.0; 16];
        data[0] = near / (range * aspect);
        data[5] = near / range;
        data[10] = -1.0;
        data[11] = -1.0;
        data[14] = -2.0 * near;
        Self::new(data)
    }

    /// Transforms a point (assumes `w = 1`, no perspective divide).
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        self.multiply_vec4(Vec4::from_vec3(*point, 1.0)).truncate()
    }

    /// Transforms a direction vector (ignores translation, `w = 0`).
    pub fn transform_direction(&self, direction: &Vec3) -> Vec3 {
        self.multiply_vec4(Vec4::from_vec3(*direction, 0.0)).truncate()
    }
}

/// The three indices in `0..4` other than `skip`.
const fn others(skip: usize) -> [usize; 3] {
    match skip {
        0 => [1, 2, 3],
        1 => [0, 2, 3],
        2 => [0, 1, 3],
        _ => [0, 1, 2],
    }
}

impl_square_matrix!(Mat4, Vec4, 4, 16, multiply_vec4);
