// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! gfx-math: column-major linear algebra primitives for real-time graphics.
//!
//! Vectors, quaternions and matrices are `Copy` value types backed by flat
//! scalar arrays, so every type can be uploaded to the GPU as-is (see
//! [`bytemuck::Pod`]). Operations are total: degenerate inputs surface as
//! IEEE-754 `NaN`/`Inf` instead of errors or panics.
//!
//! Conventions:
//! - Matrices are column-major and act on column vectors; `a * b` applies `b`
//!   first.
//! - Quaternions are `(x, y, z, w)` with `w` as the real part.
//! - Angles are radians.
//!
//! The scalar types are selected at build time: [`Real`] is `f32` unless the
//! `f64` feature is enabled, and [`Int`] is `i32` unless one of `int8`,
//! `int16` or `int64` is enabled.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::float_cmp,
    clippy::similar_names,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_lossless,
    clippy::too_many_arguments,
    clippy::redundant_pub_crate,
    clippy::use_self
)]

#[macro_use]
mod macros;

mod diagnostics;
mod error;
pub mod scalar;

mod mat2;
mod mat3;
mod mat4;
mod quat;
mod vec2;
mod vec3;
mod vec4;

/// Integer vectors (`Vec2i`, `Vec3i`, `Vec4i`).
#[cfg(feature = "int")]
mod ivec;

/// Easing curves over the unit interval.
#[cfg(feature = "easing")]
pub mod easing;

pub use error::MathError;
pub use mat2::Mat2;
pub use mat3::Mat3;
pub use mat4::Mat4;
pub use quat::Quat;
pub use scalar::{Int, Real, EPSILON};
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;

#[cfg(feature = "int")]
pub use ivec::{Vec2i, Vec3i, Vec4i};
