// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]

mod common;

use common::{approx_eq, assert_real, assert_slice, Tolerance};
use gfx_math::scalar::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4};
use gfx_math::{Mat2, Mat3, Mat4, MathError, Quat, Real, Vec2, Vec3, Vec4};

#[rustfmt::skip]
fn sample_mat4() -> Mat4 {
    Mat4::new([
        2.0, 0.5, -1.0, 0.0,
        1.0, 3.0, 0.25, 0.0,
        0.0, -2.0, 1.5, 0.0,
        4.0, 1.0, -3.0, 1.0,
    ])
}

/// Non-affine: the bottom row is `0.5, -1, 0.25, 2`.
#[rustfmt::skip]
fn projective_mat4() -> Mat4 {
    Mat4::new([
        2.0, 0.5, -1.0, 0.5,
        1.0, 3.0, 0.25, -1.0,
        0.0, -2.0, 1.5, 0.25,
        4.0, 1.0, -3.0, 2.0,
    ])
}

#[rustfmt::skip]
fn sample_mat3() -> Mat3 {
    Mat3::from_elements(
        3.0, 0.0, 2.0,
        2.0, 0.0, -2.0,
        0.0, 1.0, 1.0,
    )
}

fn assert_identity<const N: usize>(m: [Real; N], dim: usize, tol: &Tolerance, ctx: &str) {
    let expected: Vec<Real> = (0..N)
        .map(|i| if i % dim == i / dim { 1.0 } else { 0.0 })
        .collect();
    assert_slice(&m, &expected, tol, ctx);
}

#[test]
fn identity_is_neutral() {
    let m = sample_mat4();
    assert_eq!(Mat4::identity() * m, m);
    assert_eq!(m * Mat4::identity(), m);
    let m3 = sample_mat3();
    assert_eq!(Mat3::identity() * m3, m3);
    let m2 = Mat2::from_elements(1.0, 2.0, 3.0, 4.0);
    assert_eq!(Mat2::identity() * m2, m2);
    assert_eq!(Mat4::default(), Mat4::identity());
}

#[test]
fn zero_is_additive_identity() {
    let m = sample_mat4();
    assert_eq!(m + Mat4::ZERO, m);
    assert_eq!(Mat3::zero(), Mat3::ZERO);
    assert_eq!(m - m, Mat4::ZERO);
}

#[test]
fn elements_are_stored_column_major() {
    let m = Mat3::from_elements(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
    assert_eq!(m.to_array(), [1.0, 4.0, 7.0, 2.0, 5.0, 8.0, 3.0, 6.0, 9.0]);
    assert_eq!(m.at(0, 2), 3.0);
    assert_eq!(m.at(2, 0), 7.0);
    assert_eq!(
        Mat2::from_cols([Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)]),
        Mat2::from_elements(1.0, 3.0, 2.0, 4.0)
    );
    assert_eq!(m.transpose().at(0, 2), 7.0);
}

#[test]
fn mat2_determinant_cofactor_inverse() {
    let m = Mat2::from_elements(1.0, 2.0, 3.0, 4.0);
    assert_eq!(m.determinant(), -2.0);
    assert_eq!(m.cofactor(), Mat2::from_elements(4.0, -3.0, -2.0, 1.0));
    assert_eq!(m.adjugate(), Mat2::from_elements(4.0, -2.0, -3.0, 1.0));
    assert_eq!(m.inverse(), Mat2::from_elements(-2.0, 1.0, 1.5, -0.5));
}

#[test]
fn mat2_rotation_and_scaling() {
    approx_eq(
        (Mat2::rotation(FRAC_PI_2) * Vec2::UNIT_X).to_array(),
        [0.0, 1.0],
    );
    assert_eq!(Mat2::scaling(Vec2::new(2.0, 3.0)) * Vec2::ONE, Vec2::new(2.0, 3.0));
    let m = Mat2::from_elements(1.0, 2.0, 3.0, 4.0).scale(Vec2::new(10.0, 0.5));
    assert_eq!(m, Mat2::from_elements(10.0, 2.0, 3.0, 2.0));
}

#[test]
fn mat3_determinant_by_minors() {
    assert_eq!(sample_mat3().determinant(), 10.0);
    assert_eq!(Mat3::identity().determinant(), 1.0);
}

#[test]
fn mat3_inverse_is_a_real_inverse() {
    let m = sample_mat3();
    let inv = m.inverse();
    assert_ne!(inv, m);
    #[rustfmt::skip]
    let expected = Mat3::from_elements(
        0.2, 0.2, 0.0,
        -0.2, 0.3, 1.0,
        0.2, -0.3, 0.0,
    );
    approx_eq(inv.to_array(), expected.to_array());
    assert_identity((m * inv).to_array(), 3, &Tolerance::tight(), "m * inv");

    let diag = Mat3::scaling(Vec3::new(2.0, 4.0, 8.0));
    assert_eq!(diag.inverse(), Mat3::scaling(Vec3::new(0.5, 0.25, 0.125)));
}

#[test]
fn mat4_determinant_matches_cofactor_expansion() {
    let m = sample_mat4();
    let cof = m.cofactor();
    let along_first_row: Real = (0..4).map(|c| m.at(0, c) * cof.at(0, c)).sum();
    assert_real(m.determinant(), along_first_row, &Tolerance::tight(), "det");
    assert_real(
        Mat4::scaling(Vec3::new(2.0, 3.0, 4.0)).determinant(),
        24.0,
        &Tolerance::tight(),
        "det(scale)",
    );
}

#[test]
fn mat4_inverse_round_trips() {
    let m = sample_mat4();
    let tol = Tolerance::loose();
    assert_identity((m * m.inverse()).to_array(), 4, &tol, "m * inv");
    assert_identity((m.inverse() * m).to_array(), 4, &tol, "inv * m");
    // adjugate / det agrees with the expanded form
    assert_slice(
        &(m.adjugate() / m.determinant()).to_array(),
        &m.inverse().to_array(),
        &tol,
        "adjugate path",
    );
}

#[test]
#[rustfmt::skip]
fn mat4_inverse_with_projective_bottom_row() {
    let m = projective_mat4();
    let tol = Tolerance::loose();
    assert_real(m.determinant(), 61.0 / 8.0, &tol, "det");
    assert_slice(
        &m.inverse().to_array(),
        &[
            125.0 / 122.0, 1.0 / 61.0, 9.0 / 61.0, -65.0 / 244.0,   // col 0
            -80.0 / 61.0, 28.0 / 61.0, 8.0 / 61.0, 33.0 / 61.0,     // col 1
            -74.0 / 61.0, 32.0 / 61.0, 44.0 / 61.0, 29.0 / 61.0,    // col 2
            -196.0 / 61.0, 32.0 / 61.0, 44.0 / 61.0, 90.0 / 61.0,   // col 3
        ],
        &tol,
        "inverse",
    );
    assert_identity((m * m.inverse()).to_array(), 4, &tol, "m * inv");
    assert_identity((m.inverse() * m).to_array(), 4, &tol, "inv * m");
}

#[test]
fn perspective_inverse_round_trips() {
    let (near, far) = (1.0, 10.0);
    let p = Mat4::perspective(1.0, 1.5, near, far);
    let inv = p.inverse();
    let tol = Tolerance::loose();
    assert_identity((p * inv).to_array(), 4, &tol, "p * inv");
    assert_identity((inv * p).to_array(), 4, &tol, "inv * p");

    // depth block [[a, b], [-1, 0]] inverts to [[0, -1], [1/b, a/b]]
    let (a, b) = (p.at(2, 2), p.at(2, 3));
    let inv = inv.to_array();
    assert_real(inv[10], 0.0, &tol, "inv[10]");
    assert_real(inv[14], -1.0, &tol, "inv[14]");
    assert_real(inv[11], 1.0 / b, &tol, "inv[11]");
    assert_real(inv[15], a / b, &tol, "inv[15]");
}

#[test]
fn inverse_determinant_is_reciprocal() {
    let tol = Tolerance::loose();
    let m2 = Mat2::from_elements(3.0, 1.0, -2.0, 5.0);
    assert_real(m2.inverse().determinant(), 1.0 / m2.determinant(), &tol, "mat2");
    let m3 = sample_mat3();
    assert_real(m3.inverse().determinant(), 1.0 / m3.determinant(), &tol, "mat3");
    let m4 = sample_mat4();
    assert_real(m4.inverse().determinant(), 1.0 / m4.determinant(), &tol, "mat4");
    let p4 = projective_mat4();
    assert_real(p4.inverse().determinant(), 1.0 / p4.determinant(), &tol, "projective mat4");
}

#[test]
fn translation_inverse_negates_offset() {
    let t = Mat4::translation(Vec3::new(1.0, -2.0, 3.0));
    approx_eq(
        t.inverse().to_array(),
        Mat4::translation(Vec3::new(-1.0, 2.0, -3.0)).to_array(),
    );
}

#[test]
fn singular_inverse_is_not_finite() {
    assert!(Mat2::ZERO.inverse().to_array().iter().any(|c| !c.is_finite()));
    assert!(Mat3::ZERO.inverse().to_array().iter().any(|c| !c.is_finite()));
    let rank_deficient = Mat4::scaling(Vec3::new(1.0, 0.0, 1.0));
    assert_eq!(rank_deficient.determinant(), 0.0);
    assert!(rank_deficient
        .inverse()
        .to_array()
        .iter()
        .any(|c| !c.is_finite()));
}

#[test]
fn axis_rotations_match_rotation_axis() {
    for angle in [0.3, FRAC_PI_3, -2.0] {
        approx_eq(
            Mat4::rotation_x(angle).to_array(),
            Mat4::rotation_axis(Vec3::UNIT_X, angle).to_array(),
        );
        approx_eq(
            Mat4::rotation_y(angle).to_array(),
            Mat4::rotation_axis(Vec3::UNIT_Y, angle).to_array(),
        );
        approx_eq(
            Mat4::rotation_z(angle).to_array(),
            Mat4::rotation_axis(Vec3::UNIT_Z, angle).to_array(),
        );
        assert_eq!(Mat4::from_mat3(&Mat3::rotation_x(angle)), Mat4::rotation_x(angle));
        assert_eq!(Mat4::from_mat3(&Mat3::rotation_y(angle)), Mat4::rotation_y(angle));
        assert_eq!(Mat4::from_mat3(&Mat3::rotation_z(angle)), Mat4::rotation_z(angle));
    }
}

#[test]
fn rotation_axis_accepts_non_unit_axis() {
    let unit = Vec3::new(1.0, 2.0, -2.0) / 3.0;
    approx_eq(
        Mat3::rotation_axis(Vec3::new(1.0, 2.0, -2.0), 0.9).to_array(),
        Mat3::rotation_axis(unit, 0.9).to_array(),
    );
    approx_eq(
        Mat3::rotation_axis(unit, 0.9).to_array(),
        Mat3::rotation_quat(Quat::from_axis_angle(unit, 0.9)).to_array(),
    );
}

#[test]
fn axis_rotations_are_right_handed() {
    approx_eq((Mat4::rotation_z(FRAC_PI_2) * Vec4::new(1.0, 0.0, 0.0, 0.0)).to_array(), [0.0, 1.0, 0.0, 0.0]);
    approx_eq((Mat3::rotation_x(FRAC_PI_2) * Vec3::UNIT_Y).to_array(), [0.0, 0.0, 1.0]);
    approx_eq((Mat3::rotation_y(FRAC_PI_2) * Vec3::UNIT_Z).to_array(), [1.0, 0.0, 0.0]);
}

#[test]
fn scaling_builds_and_scale_accumulates() {
    let s = Mat4::scaling(Vec3::new(2.0, 3.0, 4.0));
    assert_eq!(s.transform_point(&Vec3::ONE), Vec3::new(2.0, 3.0, 4.0));
    let twice = s.scale(Vec3::new(0.5, 2.0, 1.0));
    assert_eq!(twice, Mat4::scaling(Vec3::new(1.0, 6.0, 4.0)));
    assert_eq!(
        Mat3::identity().scale(Vec3::new(2.0, 2.0, 2.0)),
        Mat3::scaling(Vec3::splat(2.0))
    );
}

#[test]
fn translation_helpers() {
    let v = Vec3::new(1.0, 2.0, 3.0);
    let t = Mat4::translation(v);
    assert_eq!(&t.to_array()[12..15], &[1.0, 2.0, 3.0]);
    assert_eq!(t.translate(v), Mat4::translation(v * 2.0));
    assert_eq!(t.with_translation(Vec3::ZERO), Mat4::identity());
    // points move, directions do not
    assert_eq!(t.transform_point(&Vec3::ZERO), v);
    assert_eq!(t.transform_direction(&Vec3::UNIT_X), Vec3::UNIT_X);
}

#[test]
fn operators_match_methods() {
    let a = Mat4::rotation_x(FRAC_PI_4);
    let b = Mat4::scaling(Vec3::new(2.0, 3.0, 4.0));
    let expected = a.multiply(&b);
    assert_eq!(a * b, expected);
    assert_eq!(a * &b, expected);
    assert_eq!(&a * &b, expected);
    let mut c = a;
    c *= b;
    assert_eq!(c, expected);
    let mut d = a;
    d *= &b;
    assert_eq!(d, expected);
    assert_eq!(b * 2.0, b.multiply_scalar(2.0));
    assert_eq!(-b, b * -1.0);
}

#[test]
fn lerp_is_elementwise() {
    let a = Mat2::identity();
    let b = Mat2::from_elements(3.0, 2.0, 2.0, 3.0);
    assert_eq!(a.lerp(&b, 0.0), a);
    assert_eq!(a.lerp(&b, 1.0), b);
    assert_eq!(a.lerp(&b, 0.5), Mat2::from_elements(2.0, 1.0, 1.0, 2.0));
}

#[test]
fn look_at_moves_eye_to_origin() {
    let eye = Vec3::new(0.0, 0.0, 5.0);
    let view = Mat4::look_at(eye, Vec3::ZERO, Vec3::UNIT_Y);
    approx_eq(view.transform_point(&eye).to_array(), [0.0, 0.0, 0.0]);
    approx_eq(view.transform_point(&Vec3::ZERO).to_array(), [0.0, 0.0, -5.0]);

    let eye = Vec3::new(3.0, 2.0, -4.0);
    let target = Vec3::new(-1.0, 0.5, 2.0);
    let view = Mat4::look_at(eye, target, Vec3::UNIT_Y);
    let forward = view.transform_point(&target);
    approx_eq(forward.to_array(), [0.0, 0.0, -eye.distance(target)]);
}

#[test]
fn ortho_maps_box_to_clip_cube() {
    let m = Mat4::ortho(-2.0, 6.0, -1.0, 3.0, 0.5, 10.0);
    approx_eq(
        m.transform_point(&Vec3::new(-2.0, -1.0, -0.5)).to_array(),
        [-1.0, -1.0, -1.0],
    );
    approx_eq(
        m.transform_point(&Vec3::new(6.0, 3.0, -10.0)).to_array(),
        [1.0, 1.0, 1.0],
    );
}

#[test]
fn perspective_with_square_aspect() {
    let m = Mat4::perspective(FRAC_PI_2, 1.0, 0.1, 100.0).to_array();
    assert_eq!(m[0], m[5]);
    assert_real(m[0], 1.0, &Tolerance::tight(), "m[0]");
    assert_eq!(m[11], -1.0);
    assert_eq!(m[15], 0.0);
}

#[test]
fn perspective_maps_near_and_far_to_unit_depth() {
    let (near, far) = (0.5, 50.0);
    let m = Mat4::perspective(1.0, 1.5, near, far);
    let tol = Tolerance::tight();
    for (depth, expected) in [(near, 0.0), (far, 1.0)] {
        let clip = m * Vec4::new(0.0, 0.0, -depth, 1.0);
        assert_real(clip.w(), depth, &tol, "w");
        assert_real(clip.z() / clip.w(), expected, &tol, "ndc z");
    }
}

#[test]
fn perspective_fov_and_infinite_coefficients() {
    let tol = Tolerance::tight();
    let m = Mat4::perspective_fov(FRAC_PI_2, 800.0, 600.0, 0.1, 100.0).to_array();
    assert_real(m[5], 1.0, &tol, "h2");
    assert_real(m[0], 0.75, &tol, "w2");
    assert_eq!(m[11], -1.0);

    let inf = Mat4::perspective_infinite(FRAC_PI_2, 2.0, 0.5).to_array();
    assert_real(inf[0], 0.5, &tol, "m0");
    assert_real(inf[5], 1.0, &tol, "m5");
    assert_eq!(inf[10], -1.0);
    assert_eq!(inf[11], -1.0);
    assert_eq!(inf[14], -1.0);
}

#[test]
fn slice_conversion_checks_length() {
    let data: Vec<Real> = (0..16).map(|i| i as Real).collect();
    let m = Mat4::try_from(data.as_slice()).map(Mat4::to_array);
    assert_eq!(m.map(|a| a[15]), Ok(15.0));
    assert_eq!(
        Mat3::try_from(data.as_slice()),
        Err(MathError::LengthMismatch {
            expected: 9,
            actual: 16
        })
    );
    assert_eq!(Mat2::from([1.0, 2.0, 3.0, 4.0])[3], 4.0);
}
