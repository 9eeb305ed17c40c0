//! Math functions for no_std compatibility.
//!
//! In no_std mode, f64 doesn't have transcendental methods like sqrt, ln or exp.
//! This module provides them through libm, together with the normal CDF used
//! by the Edgeworth expansions.

/// Square root.
#[inline]
pub fn sqrt(x: f64) -> f64 {
    libm::sqrt(x)
}

/// Natural logarithm.
#[inline]
pub fn ln(x: f64) -> f64 {
    libm::log(x)
}

/// Exponential (e^x).
#[inline]
pub fn exp(x: f64) -> f64 {
    libm::exp(x)
}

/// `ln(1 + x)`, accurate for small `x`.
#[inline]
pub fn ln_1p(x: f64) -> f64 {
    libm::log1p(x)
}

/// Power (x^y).
#[inline]
pub fn pow(x: f64, y: f64) -> f64 {
    libm::pow(x, y)
}

/// Floor (round down).
#[inline]
pub fn floor(x: f64) -> f64 {
    libm::floor(x)
}

/// Ceiling (round up).
#[inline]
pub fn ceil(x: f64) -> f64 {
    libm::ceil(x)
}

/// Natural logarithm of the gamma function.
#[inline]
pub fn ln_gamma(x: f64) -> f64 {
    libm::lgamma(x)
}

/// Standard normal density.
#[inline]
pub fn normal_pdf(z: f64) -> f64 {
    exp(-z * z / 2.0) / sqrt(2.0 * core::f64::consts::PI)
}

/// Standard normal CDF, ACM Algorithm 209.
///
/// A fixed polynomial approximation (absolute error around 1e-10) rather than
/// libm's `erf`, so that every implementation evaluating the same `z` rounds
/// to the same bits. The margin searches compare this value against the
/// requested misrate, and a one-ulp disagreement can move a margin by one.
pub fn gauss_cdf(x: f64) -> f64 {
    let z = if x.abs() < 1e-9 {
        0.0
    } else {
        let mut y = x.abs() / 2.0;
        if y >= 3.0 {
            1.0
        } else if y < 1.0 {
            let w = y * y;
            ((((((((0.000_124_818_987 * w - 0.001_075_204_047) * w + 0.005_198_775_019) * w
                - 0.019_198_292_004)
                * w
                + 0.059_054_035_642)
                * w
                - 0.151_968_751_364)
                * w
                + 0.319_152_932_694)
                * w
                - 0.531_923_007_300)
                * w
                + 0.797_884_560_593)
                * y
                * 2.0
        } else {
            y -= 2.0;
            (((((((((((((-0.000_045_255_659 * y + 0.000_152_529_290) * y - 0.000_019_538_132)
                * y
                - 0.000_676_904_986)
                * y
                + 0.001_390_604_284)
                * y
                - 0.000_794_620_820)
                * y
                - 0.002_034_254_874)
                * y
                + 0.006_549_791_214)
                * y
                - 0.010_557_625_006)
                * y
                + 0.011_630_447_319)
                * y
                - 0.009_279_453_341)
                * y
                + 0.005_353_579_108)
                * y
                - 0.002_141_268_741)
                * y
                + 0.000_535_310_849)
                * y
                + 0.999_936_657_524
        }
    };

    if x > 0.0 {
        (z + 1.0) / 2.0
    } else {
        (1.0 - z) / 2.0
    }
}

/// `ln(e^a + e^b)` without overflow; `-inf` is the additive identity.
pub fn log_add_exp(a: f64, b: f64) -> f64 {
    if a == f64::NEG_INFINITY {
        return b;
    }
    if b == f64::NEG_INFINITY {
        return a;
    }
    let hi = a.max(b);
    hi + ln(exp(a - hi) + exp(b - hi))
}

/// `ln(e^a - e^b)` for `a >= b`; returns `-inf` when the difference vanishes.
pub fn log_sub_exp(a: f64, b: f64) -> f64 {
    if b == f64::NEG_INFINITY {
        return a;
    }
    let ratio = exp(b - a);
    if ratio >= 1.0 {
        return f64::NEG_INFINITY;
    }
    a + ln(1.0 - ratio)
}
