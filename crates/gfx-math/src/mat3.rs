// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};

use crate::diagnostics;
use crate::scalar::Real;
use crate::{Quat, Vec3};

/// Column-major 3×3 matrix.
///
/// Storage order is `m11, m21, m31, m12, m22, m32, m13, m23, m33`; use
/// [`Mat3::from_elements`] to write a literal in reading order.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat3 {
    data: [Real; 9],
}

const _: () = assert!(core::mem::size_of::<Mat3>() == 9 * core::mem::size_of::<Real>());

impl Mat3 {
    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self::new([
            1.0, 0.0, 0.0, // col 0
            0.0, 1.0, 0.0, // col 1
            0.0, 0.0, 1.0, // col 2
        ])
    }

    /// Builds a matrix from elements listed row by row.
    #[rustfmt::skip]
    pub const fn from_elements(
        m11: Real, m12: Real, m13: Real,
        m21: Real, m22: Real, m23: Real,
        m31: Real, m32: Real, m33: Real,
    ) -> Self {
        Self::new([m11, m21, m31, m12, m22, m32, m13, m23, m33])
    }

    /// Determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> Real {
        let a = |r, c| self.at(r, c);
        a(0, 0) * (a(1, 1) * a(2, 2) - a(1, 2) * a(2, 1))
            - a(0, 1) * (a(1, 0) * a(2, 2) - a(1, 2) * a(2, 0))
            + a(0, 2) * (a(1, 0) * a(2, 1) - a(1, 1) * a(2, 0))
    }

    /// Determinant of the 2×2 block left after deleting `row` and `col`.
    fn minor(&self, row: usize, col: usize) -> Real {
        let rows = others(row);
        let cols = others(col);
        self.at(rows[0], cols[0]) * self.at(rows[1], cols[1])
            - self.at(rows[0], cols[1]) * self.at(rows[1], cols[0])
    }

    /// Matrix of signed 2×2 minors.
    pub fn cofactor(&self) -> Self {
        Self {
            data: core::array::from_fn(|i| {
                let (row, col) = (i % 3, i / 3);
                let minor = self.minor(row, col);
                if (row + col) % 2 == 0 {
                    minor
                } else {
                    -minor
                }
            }),
        }
    }

    /// Adjugate divided by the determinant.
    ///
    /// A singular matrix divides by zero and yields non-finite elements.
    pub fn inverse(&self) -> Self {
        let det = self.determinant();
        if det == 0.0 {
            diagnostics::singular_inverse(3);
        }
        self.adjugate() / det
    }

    /// Diagonal scale matrix.
    pub const fn scaling(v: Vec3) -> Self {
        Self::new([v.x(), 0.0, 0.0, 0.0, v.y(), 0.0, 0.0, 0.0, v.z()])
    }

    /// Multiplies the diagonal of `self` by `v`, leaving other elements untouched.
    pub fn scale(&self, v: Vec3) -> Self {
        let mut data = self.data;
        data[0] *= v.x();
        data[4] *= v.y();
        data[8] *= v.z();
        Self::new(data)
    }

    /// Rotation about +X by `angle` radians.
    #[rustfmt::skip]
    pub fn rotation_x(angle: Real) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_elements(
            1.0, 0.0, 0.0,
            0.0, c,   -s,
            0.0, s,   c,
        )
    }

    /// Rotation about +Y by `angle` radians.
    #[rustfmt::skip]
    pub fn rotation_y(angle: Real) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_elements(
            c,   0.0, s,
            0.0, 1.0, 0.0,
            -s,  0.0, c,
        )
    }

    /// Rotation about +Z by `angle` radians.
    #[rustfmt::skip]
    pub fn rotation_z(angle: Real) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_elements(
            c,   -s,  0.0,
            s,   c,   0.0,
            0.0, 0.0, 1.0,
        )
    }

    /// Rotation of `angle` radians about `axis`, which need not be unit length.
    ///
    /// A zero axis divides by zero and yields non-finite elements.
    pub fn rotation_axis(axis: Vec3, angle: Real) -> Self {
        Self { data: axis_angle_block(axis, angle) }
    }

    /// Rotation matrix of `q`. `q` is used as given, without normalizing.
    pub fn rotation_quat(q: Quat) -> Self {
        Self { data: quat_block(q) }
    }
}

/// The two indices in `0..3` other than `skip`.
const fn others(skip: usize) -> [usize; 2] {
    match skip {
        0 => [1, 2],
        1 => [0, 2],
        _ => [0, 1],
    }
}

/// Column-major 3×3 rotation block of Rodrigues' formula, normalizing `axis` in the arithmetic.
pub(crate) fn axis_angle_block(axis: Vec3, angle: Real) -> [Real; 9] {
    let (s, c) = angle.sin_cos();
    let [x, y, z] = axis.to_array();
    let (xx, yy, zz) = (x * x, y * y, z * z);
    let l = xx + yy + zz;
    let sl = l.sqrt();
    let k = 1.0 - c;
    [
        (xx + (yy + zz) * c) / l,
        (x * y * k + z * sl * s) / l,
        (x * z * k - y * sl * s) / l,
        (x * y * k - z * sl * s) / l,
        (yy + (xx + zz) * c) / l,
        (y * z * k + x * sl * s) / l,
        (x * z * k + y * sl * s) / l,
        (y * z * k - x * sl * s) / l,
        (zz + (xx + yy) * c) / l,
    ]
}

/// Column-major 3×3 rotation block of `q`.
pub(crate) fn quat_block(q: Quat) -> [Real; 9] {
    let [x, y, z, w] = q.to_array();
    let (xx, yy, zz) = (x * x, y * y, z * z);
    let (xy, xz, yz) = (x * y, x * z, y * z);
    let (wx, wy, wz) = (w * x, w * y, w * z);
    [
        1.0 - 2.0 * (yy + zz),
        2.0 * (xy + wz),
        2.0 * (xz - wy),
        2.0 * (xy - wz),
        1.0 - 2.0 * (xx + zz),
        2.0 * (yz + wx),
        2.0 * (xz + wy),
        2.0 * (yz - wx),
        1.0 - 2.0 * (xx + yy),
    ]
}

impl_square_matrix!(Mat3, Vec3, 3, 9, multiply_vec3);
