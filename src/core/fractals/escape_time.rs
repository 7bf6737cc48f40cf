use crate::core::data::complex::Complex;
use crate::core::fractals::fractal_kinds::FractalKinds;
use std::f64::consts::LN_2;

/// Squared escape radius. Any orbit whose modulus exceeds 2 is guaranteed to
/// diverge under z ← z² + c, so the test is |z|² > 4 (no square root needed).
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Computes the smoothed escape measure for one plane point.
///
/// Iterates z ← z² + c with the mode-dependent initialization until the
/// orbit leaves the escape radius or the cap is reached. A capped orbit
/// reports exactly `max_iterations`; an escaping orbit reports the
/// continuous measure `counter + 1 - nu`, which removes the visible banding
/// of raw integer counts.
///
/// The smoothing uses natural logarithms throughout, with `log_zn` derived
/// from the squared modulus as `ln(|z|²)/2`. Both `|z|` and `log_zn` are
/// strictly positive on the escape path since |z| > 2 there, so no guard is
/// needed.
#[must_use]
pub fn escape_time_measure(point: Complex, kind: FractalKinds, max_iterations: u32) -> f64 {
    let (mut z, c) = match kind {
        FractalKinds::Mandelbrot => (Complex::ZERO, point),
        FractalKinds::Julia { c } => (point, c),
    };

    let mut iteration: u32 = 0;

    while z.magnitude_squared() <= ESCAPE_RADIUS_SQUARED && iteration < max_iterations {
        z = z * z + c;
        iteration += 1;
    }

    if iteration >= max_iterations {
        return max_iterations as f64;
    }

    let log_zn = z.magnitude_squared().ln() / 2.0;
    let nu = (log_zn / LN_2).ln() / LN_2;

    iteration as f64 + 1.0 - nu
}
