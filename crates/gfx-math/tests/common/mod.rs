// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(dead_code)]

//! Approximate-equality helpers shared by the integration tests.
//!
//! Every assertion takes an explicit [`Tolerance`] so a test states how
//! close is close enough instead of relying on one global threshold.

use gfx_math::Real;
use serde::Deserialize;

/// Absolute/relative error budget for float comparisons.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Tolerance {
    #[serde(default = "Tolerance::default_absolute")]
    pub absolute: Real,
    #[serde(default = "Tolerance::default_relative")]
    pub relative: Real,
    /// Include the numeric difference and allowance in failure messages.
    #[serde(default = "Tolerance::default_report_difference")]
    pub report_difference: bool,
}

impl Tolerance {
    const fn default_absolute() -> Real {
        1e-5
    }

    const fn default_relative() -> Real {
        1e-5
    }

    const fn default_report_difference() -> bool {
        true
    }

    /// Tolerance for results of a handful of arithmetic operations.
    pub const fn tight() -> Self {
        Self {
            absolute: 1e-5,
            relative: 1e-5,
            report_difference: true,
        }
    }

    /// Tolerance for chained products and inverses.
    pub const fn loose() -> Self {
        Self {
            absolute: 1e-4,
            relative: 1e-4,
            report_difference: true,
        }
    }

    pub fn allowed_error(&self, reference: Real) -> Real {
        self.absolute.max(self.relative * reference.abs())
    }

    pub fn accepts(&self, actual: Real, expected: Real) -> bool {
        actual == expected || (actual - expected).abs() <= self.allowed_error(expected)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            absolute: Self::default_absolute(),
            relative: Self::default_relative(),
            report_difference: Self::default_report_difference(),
        }
    }
}

pub fn assert_real(actual: Real, expected: Real, tol: &Tolerance, ctx: &str) {
    if tol.accepts(actual, expected) {
        return;
    }
    if tol.report_difference {
        let diff = (actual - expected).abs();
        let allowed = tol.allowed_error(expected);
        panic!("{ctx}: expected {expected}, got {actual} (diff {diff} > {allowed})");
    }
    panic!("{ctx}: expected {expected}, got {actual}");
}

pub fn assert_slice(actual: &[Real], expected: &[Real], tol: &Tolerance, ctx: &str) {
    assert_eq!(actual.len(), expected.len(), "{ctx}: length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert_real(*a, *e, tol, &format!("{ctx}[{i}]"));
    }
}

/// Shorthand for [`assert_slice`] with [`Tolerance::tight`].
pub fn approx_eq<const N: usize>(actual: [Real; N], expected: [Real; N]) {
    assert_slice(&actual, &expected, &Tolerance::tight(), "approx_eq");
}
