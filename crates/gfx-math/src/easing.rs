// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Easing curves that reshape a progress value `f` in `[0, 1]`.
//!
//! Every family comes as `_in` (slow start), `_out` (slow finish) and
//! `_in_out` (slow at both ends, switching halves at `f = 0.5`). Inputs
//! outside `[0, 1]` are not clamped; the polynomials simply extrapolate.
//!
//! ```
//! use gfx_math::easing;
//! assert_eq!(easing::quadratic_in(0.5), 0.25);
//! assert_eq!(easing::exponential_out(1.0), 1.0);
//! ```

use crate::scalar::consts::{FRAC_PI_2, PI};
use crate::scalar::Real;

/// Angular frequency shared by the elastic family.
const ELASTIC_FREQUENCY: Real = 13.0 * FRAC_PI_2;

/// `f²`.
pub fn quadratic_in(f: Real) -> Real {
    f * f
}

/// `-f (f - 2)`.
pub fn quadratic_out(f: Real) -> Real {
    -(f * (f - 2.0))
}

/// Piecewise quadratic.
pub fn quadratic_in_out(f: Real) -> Real {
    if f < 0.5 {
        2.0 * f * f
    } else {
        -2.0 * f * f + 4.0 * f - 1.0
    }
}

/// `f³`.
pub fn cubic_in(f: Real) -> Real {
    f * f * f
}

/// `(f - 1)³ + 1`.
pub fn cubic_out(f: Real) -> Real {
    let a = f - 1.0;
    a * a * a + 1.0
}

/// Piecewise cubic.
pub fn cubic_in_out(f: Real) -> Real {
    if f < 0.5 {
        4.0 * f * f * f
    } else {
        let a = 2.0 * f - 2.0;
        0.5 * a * a * a + 1.0
    }
}

/// `f⁴`.
pub fn quartic_in(f: Real) -> Real {
    f * f * f * f
}

/// `1 - (f - 1)⁴`.
pub fn quartic_out(f: Real) -> Real {
    let a = f - 1.0;
    a * a * a * (1.0 - f) + 1.0
}

/// Piecewise quartic.
pub fn quartic_in_out(f: Real) -> Real {
    if f < 0.5 {
        8.0 * f * f * f * f
    } else {
        let a = f - 1.0;
        -8.0 * a * a * a * a + 1.0
    }
}

/// `f⁵`.
pub fn quintic_in(f: Real) -> Real {
    f * f * f * f * f
}

/// `(f - 1)⁵ + 1`.
pub fn quintic_out(f: Real) -> Real {
    let a = f - 1.0;
    a * a * a * a * a + 1.0
}

/// Piecewise quintic.
pub fn quintic_in_out(f: Real) -> Real {
    if f < 0.5 {
        16.0 * f * f * f * f * f
    } else {
        let a = 2.0 * f - 2.0;
        0.5 * a * a * a * a * a + 1.0
    }
}

/// Quarter sine wave, starting flat.
pub fn sine_in(f: Real) -> Real {
    ((f - 1.0) * FRAC_PI_2).sin() + 1.0
}

/// Quarter sine wave, ending flat.
pub fn sine_out(f: Real) -> Real {
    (f * FRAC_PI_2).sin()
}

/// Half cosine wave.
pub fn sine_in_out(f: Real) -> Real {
    0.5 * (1.0 - (f * PI).cos())
}

/// Quarter circle, starting flat.
pub fn circular_in(f: Real) -> Real {
    1.0 - (1.0 - f * f).sqrt()
}

/// Quarter circle, ending flat.
pub fn circular_out(f: Real) -> Real {
    ((2.0 - f) * f).sqrt()
}

/// Two quarter circles joined at the midpoint.
pub fn circular_in_out(f: Real) -> Real {
    if f < 0.5 {
        0.5 * (1.0 - (1.0 - 4.0 * (f * f)).sqrt())
    } else {
        0.5 * ((-(2.0 * f - 3.0) * (2.0 * f - 1.0)).sqrt() + 1.0)
    }
}

/// `2^(10 (f - 1))`, pinned to `0` at `f == 0`.
pub fn exponential_in(f: Real) -> Real {
    if f == 0.0 {
        f
    } else {
        Real::powf(2.0, 10.0 * (f - 1.0))
    }
}

/// `1 - 2^(-10 f)`, pinned to `1` at `f == 1`.
pub fn exponential_out(f: Real) -> Real {
    if f == 1.0 {
        f
    } else {
        1.0 - Real::powf(2.0, -10.0 * f)
    }
}

/// Piecewise exponential, exact at both endpoints.
pub fn exponential_in_out(f: Real) -> Real {
    if f == 0.0 || f == 1.0 {
        f
    } else if f < 0.5 {
        0.5 * Real::powf(2.0, 20.0 * f - 10.0)
    } else {
        -0.5 * Real::powf(2.0, -20.0 * f + 10.0) + 1.0
    }
}

/// Damped sine wave growing towards `f == 1`.
pub fn elastic_in(f: Real) -> Real {
    (ELASTIC_FREQUENCY * f).sin() * Real::powf(2.0, 10.0 * (f - 1.0))
}

/// Damped sine wave settling at `1`.
pub fn elastic_out(f: Real) -> Real {
    (-ELASTIC_FREQUENCY * (f + 1.0)).sin() * Real::powf(2.0, -10.0 * f) + 1.0
}

/// Piecewise elastic.
pub fn elastic_in_out(f: Real) -> Real {
    if f < 0.5 {
        0.5 * (ELASTIC_FREQUENCY * (2.0 * f)).sin() * Real::powf(2.0, 10.0 * (2.0 * f - 1.0))
    } else {
        0.5 * ((-ELASTIC_FREQUENCY * (2.0 * f)).sin()
            * Real::powf(2.0, -10.0 * (2.0 * f - 1.0))
            + 2.0)
    }
}

/// Overshoots backwards before heading to `1`.
pub fn back_in(f: Real) -> Real {
    f * f * f - f * (f * PI).sin()
}

/// Overshoots past `1` before settling.
pub fn back_out(f: Real) -> Real {
    let a = 1.0 - f;
    1.0 - (a * a * a - a * (a * PI).sin())
}

/// Piecewise back.
pub fn back_in_out(f: Real) -> Real {
    if f < 0.5 {
        let a = 2.0 * f;
        0.5 * (a * a * a - a * (a * PI).sin())
    } else {
        let a = 1.0 - (2.0 * f - 1.0);
        0.5 * (1.0 - (a * a * a - a * (a * PI).sin())) + 0.5
    }
}

/// Mirror image of [`bounce_out`]: `1 - bounce_out(1 - f)`.
pub fn bounce_in(f: Real) -> Real {
    1.0 - bounce_out(1.0 - f)
}

/// Four decaying parabolic bounces ending at `1`.
pub fn bounce_out(f: Real) -> Real {
    if f < 4.0 / 11.0 {
        (121.0 * f * f) / 16.0
    } else if f < 8.0 / 11.0 {
        (363.0 / 40.0 * f * f) - (99.0 / 10.0 * f) + 17.0 / 5.0
    } else if f < 9.0 / 10.0 {
        (4356.0 / 361.0 * f * f) - (35442.0 / 1805.0 * f) + 16061.0 / 1805.0
    } else {
        (54.0 / 5.0 * f * f) - (513.0 / 25.0 * f) + 268.0 / 25.0
    }
}

/// Piecewise bounce.
pub fn bounce_in_out(f: Real) -> Real {
    if f < 0.5 {
        0.5 * bounce_in(f * 2.0)
    } else {
        0.5 * bounce_out(f * 2.0 - 1.0) + 0.5
    }
}
