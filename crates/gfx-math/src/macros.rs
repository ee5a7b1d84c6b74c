// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Operator and conversion impls shared by the array-backed value types.
//!
//! Every type these macros touch is a `#[repr(C)]` struct with a single
//! `data: [$scalar; N]` field.

/// `+`, `-` and unary `-`, componentwise against the same type.
macro_rules! impl_additive_ops {
    ($ty:ident) => {
        impl core::ops::Add for $ty {
            type Output = Self;
            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self {
                    data: core::array::from_fn(|i| self.data[i] + rhs.data[i]),
                }
            }
        }

        impl core::ops::Sub for $ty {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self {
                    data: core::array::from_fn(|i| self.data[i] - rhs.data[i]),
                }
            }
        }

        impl core::ops::AddAssign for $ty {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl core::ops::SubAssign for $ty {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl core::ops::Neg for $ty {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                Self {
                    data: self.data.map(|c| -c),
                }
            }
        }
    };
}

/// `v + s` and `v - s`, broadcasting the scalar to every component.
macro_rules! impl_scalar_offset {
    ($ty:ident, $scalar:ty) => {
        impl core::ops::Add<$scalar> for $ty {
            type Output = Self;
            #[inline]
            fn add(self, rhs: $scalar) -> Self {
                Self {
                    data: self.data.map(|c| c + rhs),
                }
            }
        }

        impl core::ops::Sub<$scalar> for $ty {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: $scalar) -> Self {
                Self {
                    data: self.data.map(|c| c - rhs),
                }
            }
        }

        impl core::ops::AddAssign<$scalar> for $ty {
            #[inline]
            fn add_assign(&mut self, rhs: $scalar) {
                *self = *self + rhs;
            }
        }

        impl core::ops::SubAssign<$scalar> for $ty {
            #[inline]
            fn sub_assign(&mut self, rhs: $scalar) {
                *self = *self - rhs;
            }
        }
    };
}

/// `v * s`, `s * v` and `v / s`.
macro_rules! impl_scalar_scaling {
    ($ty:ident, $scalar:ty) => {
        impl core::ops::Mul<$scalar> for $ty {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: $scalar) -> Self {
                Self {
                    data: self.data.map(|c| c * rhs),
                }
            }
        }

        impl core::ops::Mul<$ty> for $scalar {
            type Output = $ty;
            #[inline]
            fn mul(self, rhs: $ty) -> $ty {
                rhs * self
            }
        }

        impl core::ops::Div<$scalar> for $ty {
            type Output = Self;
            #[inline]
            fn div(self, rhs: $scalar) -> Self {
                Self {
                    data: self.data.map(|c| c / rhs),
                }
            }
        }

        impl core::ops::MulAssign<$scalar> for $ty {
            #[inline]
            fn mul_assign(&mut self, rhs: $scalar) {
                *self = *self * rhs;
            }
        }

        impl core::ops::DivAssign<$scalar> for $ty {
            #[inline]
            fn div_assign(&mut self, rhs: $scalar) {
                *self = *self / rhs;
            }
        }
    };
}

/// Componentwise (Hadamard) `*` and `/` for vectors.
macro_rules! impl_componentwise_ops {
    ($ty:ident) => {
        impl core::ops::Mul for $ty {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: Self) -> Self {
                Self {
                    data: core::array::from_fn(|i| self.data[i] * rhs.data[i]),
                }
            }
        }

        impl core::ops::Div for $ty {
            type Output = Self;
            #[inline]
            fn div(self, rhs: Self) -> Self {
                Self {
                    data: core::array::from_fn(|i| self.data[i] / rhs.data[i]),
                }
            }
        }

        impl core::ops::MulAssign for $ty {
            #[inline]
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        impl core::ops::DivAssign for $ty {
            #[inline]
            fn div_assign(&mut self, rhs: Self) {
                *self = *self / rhs;
            }
        }
    };
}

/// Array conversions in both directions, slice conversion and indexing.
macro_rules! impl_array_conversions {
    ($ty:ident, $scalar:ty, $n:expr) => {
        impl From<[$scalar; $n]> for $ty {
            #[inline]
            fn from(data: [$scalar; $n]) -> Self {
                Self { data }
            }
        }

        impl From<$ty> for [$scalar; $n] {
            #[inline]
            fn from(value: $ty) -> Self {
                value.data
            }
        }

        impl TryFrom<&[$scalar]> for $ty {
            type Error = $crate::MathError;

            fn try_from(slice: &[$scalar]) -> Result<Self, Self::Error> {
                $crate::error::read_array(slice).map(|data| Self { data })
            }
        }

        impl core::ops::Index<usize> for $ty {
            type Output = $scalar;
            #[inline]
            fn index(&self, index: usize) -> &$scalar {
                &self.data[index]
            }
        }
    };
}

/// Componentwise `min`/`max`/`clamp`/`abs` and `map`, shared by integer and float vectors.
macro_rules! impl_component_bounds {
    ($ty:ident, $scalar:ty) => {
        impl $ty {
            /// Applies `f` to every component.
            #[inline]
            pub fn map(self, f: impl Fn($scalar) -> $scalar) -> Self {
                Self {
                    data: self.data.map(f),
                }
            }

            /// Componentwise minimum.
            #[inline]
            pub fn min(self, other: Self) -> Self {
                Self {
                    data: core::array::from_fn(|i| self.data[i].min(other.data[i])),
                }
            }

            /// Componentwise maximum.
            #[inline]
            pub fn max(self, other: Self) -> Self {
                Self {
                    data: core::array::from_fn(|i| self.data[i].max(other.data[i])),
                }
            }

            /// `self.min(upper).max(lower)`, in that order.
            ///
            /// This is two successive bound operations, not a single clamp:
            /// when `lower > upper` on some component the result is `lower`.
            #[inline]
            pub fn clamp(self, upper: Self, lower: Self) -> Self {
                self.min(upper).max(lower)
            }

            /// Componentwise absolute value.
            #[inline]
            pub fn abs(self) -> Self {
                self.map(<$scalar>::abs)
            }
        }
    };
}

/// `(a, b, c)` formatting; precision flags are forwarded to each component.
macro_rules! impl_tuple_display {
    ($ty:ident) => {
        impl core::fmt::Display for $ty {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str("(")?;
                for (i, c) in self.data.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    core::fmt::Display::fmt(c, f)?;
                }
                f.write_str(")")
            }
        }
    };
}

/// The metric and rounding catalogue common to `Vec2`, `Vec3` and `Vec4`.
macro_rules! impl_float_vector {
    ($ty:ident) => {
        impl $ty {
            /// `true` when every component is within [`crate::EPSILON`] of zero.
            pub fn is_zero(self) -> bool {
                self.data.iter().all(|c| c.abs() < $crate::EPSILON)
            }

            /// `true` when every component is within [`crate::EPSILON`] of `other`'s.
            pub fn is_equal(self, other: Self) -> bool {
                self.data
                    .iter()
                    .zip(other.data.iter())
                    .all(|(a, b)| (a - b).abs() < $crate::EPSILON)
            }

            /// Per-component `1`, `-1` or `0`.
            pub fn sign(self) -> Self {
                self.map($crate::scalar::sign)
            }

            /// Componentwise floor.
            pub fn floor(self) -> Self {
                self.map($crate::Real::floor)
            }

            /// Componentwise ceiling.
            pub fn ceil(self) -> Self {
                self.map($crate::Real::ceil)
            }

            /// Componentwise rounding, half away from zero.
            pub fn round(self) -> Self {
                self.map($crate::Real::round)
            }

            /// Rounds every component down to a multiple of the matching `step` component.
            pub fn snap(self, step: Self) -> Self {
                Self {
                    data: core::array::from_fn(|i| {
                        (self.data[i] / step.data[i]).floor() * step.data[i]
                    }),
                }
            }

            /// Rounds every component down to a multiple of `step`.
            pub fn snap_scalar(self, step: $crate::Real) -> Self {
                self.map(|c| (c / step).floor() * step)
            }

            /// Dot product.
            pub fn dot(self, other: Self) -> $crate::Real {
                self.data
                    .iter()
                    .zip(other.data.iter())
                    .fold(0.0, |acc, (a, b)| acc + a * b)
            }

            /// Euclidean length.
            pub fn length(self) -> $crate::Real {
                self.dot(self).sqrt()
            }

            /// Squared Euclidean length.
            pub fn length_squared(self) -> $crate::Real {
                self.dot(self)
            }

            /// Distance between two points.
            pub fn distance(self, other: Self) -> $crate::Real {
                (self - other).length()
            }

            /// Squared distance between two points.
            pub fn distance_squared(self, other: Self) -> $crate::Real {
                (self - other).length_squared()
            }

            /// Divides by [`Self::length`].
            ///
            /// There is no zero-length guard: the zero vector normalizes to
            /// all-`NaN` components (`0 / 0`).
            pub fn normalize(self) -> Self {
                self / self.length()
            }

            /// Component of `self` along `onto`: `onto * (dot(self, onto) / dot(onto, onto))`.
            pub fn project(self, onto: Self) -> Self {
                onto * (self.dot(onto) / onto.dot(onto))
            }

            /// Removes the component along `normal`: `self - normal * dot(self, normal)`.
            ///
            /// `normal` is expected to be unit length.
            pub fn slide(self, normal: Self) -> Self {
                self - normal * self.dot(normal)
            }

            /// Mirrors `self` about `normal`: `2 * dot(self, normal) * normal - self`.
            ///
            /// `normal` is expected to be unit length.
            pub fn reflect(self, normal: Self) -> Self {
                normal * (2.0 * self.dot(normal)) - self
            }

            /// Linear interpolation towards `other`, unclamped.
            ///
            /// `f` outside `[0, 1]` extrapolates. The endpoints are exact:
            /// `f == 0` returns `self` and `f == 1` returns `other`.
            pub fn lerp(self, other: Self, f: $crate::Real) -> Self {
                Self {
                    data: core::array::from_fn(|i| {
                        $crate::scalar::lerp(self.data[i], other.data[i], f)
                    }),
                }
            }
        }
    };
}

/// Layout-generic methods and operators of the column-major square matrices.
///
/// `$n` is the dimension, `$len` the element count (`$n * $n`) and `$mul_vec`
/// the name of the matrix-vector product method.
macro_rules! impl_square_matrix {
    ($ty:ident, $vec:ident, $n:expr, $len:expr, $mul_vec:ident) => {
        impl $ty {
            /// All elements zero.
            pub const ZERO: Self = Self { data: [0.0; $len] };

            /// Creates a matrix from column-major array data.
            pub const fn new(data: [$crate::Real; $len]) -> Self {
                Self { data }
            }

            /// Returns the zero matrix.
            pub const fn zero() -> Self {
                Self::ZERO
            }

            /// Builds a matrix from its columns.
            pub fn from_cols(cols: [$vec; $n]) -> Self {
                Self {
                    data: core::array::from_fn(|i| cols[i / $n][i % $n]),
                }
            }

            /// Returns the matrix as a column-major array.
            pub const fn to_array(self) -> [$crate::Real; $len] {
                self.data
            }

            /// Element at zero-based `row` and `col`.
            ///
            /// # Panics
            /// Panics when `col * N + row` is outside the storage.
            pub const fn at(&self, row: usize, col: usize) -> $crate::Real {
                self.data[col * $n + row]
            }

            /// Swaps rows and columns.
            pub fn transpose(&self) -> Self {
                Self {
                    data: core::array::from_fn(|i| self.at(i / $n, i % $n)),
                }
            }

            /// Transpose of [`Self::cofactor`].
            pub fn adjugate(&self) -> Self {
                self.cofactor().transpose()
            }

            /// Matrix product `self * rhs`; the result applies `rhs` first.
            pub fn multiply(&self, rhs: &Self) -> Self {
                let mut out = [0.0; $len];
                for row in 0..$n {
                    for col in 0..$n {
                        let mut sum = 0.0;
                        for k in 0..$n {
                            sum += self.at(row, k) * rhs.at(k, col);
                        }
                        out[col * $n + row] = sum;
                    }
                }
                Self::new(out)
            }

            /// Multiplies every element by `s`.
            pub fn multiply_scalar(&self, s: $crate::Real) -> Self {
                *self * s
            }

            /// `self * v` with `v` as a column vector.
            pub fn $mul_vec(&self, v: $vec) -> $vec {
                let data: [$crate::Real; $n] = core::array::from_fn(|row| {
                    (0..$n).fold(0.0, |acc, k| acc + self.at(row, k) * v[k])
                });
                <$vec>::from(data)
            }

            /// Elementwise linear interpolation. Rotations do not stay orthonormal.
            pub fn lerp(&self, other: &Self, f: $crate::Real) -> Self {
                Self {
                    data: core::array::from_fn(|i| {
                        $crate::scalar::lerp(self.data[i], other.data[i], f)
                    }),
                }
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                Self::identity()
            }
        }

        impl core::ops::Mul for $ty {
            type Output = Self;
            fn mul(self, rhs: Self) -> Self {
                self.multiply(&rhs)
            }
        }

        impl core::ops::Mul<&$ty> for $ty {
            type Output = Self;
            fn mul(self, rhs: &Self) -> Self {
                self.multiply(rhs)
            }
        }

        impl core::ops::Mul<&$ty> for &$ty {
            type Output = $ty;
            fn mul(self, rhs: &$ty) -> $ty {
                self.multiply(rhs)
            }
        }

        impl core::ops::MulAssign for $ty {
            fn mul_assign(&mut self, rhs: Self) {
                *self = self.multiply(&rhs);
            }
        }

        impl core::ops::MulAssign<&$ty> for $ty {
            fn mul_assign(&mut self, rhs: &Self) {
                *self = self.multiply(rhs);
            }
        }

        impl core::ops::Mul<$vec> for $ty {
            type Output = $vec;
            fn mul(self, rhs: $vec) -> $vec {
                self.$mul_vec(rhs)
            }
        }

        impl_additive_ops!($ty);
        impl_scalar_scaling!($ty, $crate::Real);
        impl_array_conversions!($ty, $crate::Real, $len);
    };
}
