use std::f64::consts::LN_2;

use crate::core::data::complex::Complex;
use crate::core::data::iterate_state::Iterate;
use crate::core::fractals::formula::Formula;

/// Divergence threshold on `|z|`, shared by every formula.
pub const ESCAPE_RADIUS: f64 = 2.0;

/// Continuous escape index for a pixel whose modulus reached `magnitude` on step `iteration`.
#[must_use]
pub fn smooth_escape_index(iteration: u32, magnitude: f64) -> f64 {
    f64::from(iteration) + 1.0 - magnitude.ln().ln() / LN_2
}

/// Advances one pixel by step `iteration`.
///
/// Escaped pixels are left untouched. A pixel escapes on the first step whose
/// new iterate has a modulus strictly greater than [`ESCAPE_RADIUS`].
#[inline]
pub fn step_pixel(
    iteration: u32,
    formula: Formula,
    c: Complex,
    iterate: &mut Iterate,
    escape: &mut f64,
) {
    if !iterate.active {
        return;
    }

    let z = iterate.z;
    iterate.z = formula.next(z, iterate.z_prev, c);

    if formula.uses_previous() {
        iterate.z_prev = z;
    }

    let magnitude = iterate.z.magnitude();

    if magnitude > ESCAPE_RADIUS {
        *escape = smooth_escape_index(iteration, magnitude);
        iterate.active = false;
    }
}
