//! # Color Module
//!
//! This module provides the two color spaces used by gradient transitions:
//! gamma-encoded sRGB ([`Srgb`], channels in `0..=255`) and the perceptually
//! uniform Oklab space ([`Oklab`]).
//!
//! Colors are immutable values. Every conversion or interpolation produces a
//! new instance, and every constructor clamps its inputs into the valid range
//! of its space, so an out-of-range or non-finite component never reaches a
//! renderer.
//!
//! Interpolating in Oklab avoids the muddy, grayish midpoints that a straight
//! sRGB blend produces between hue-distant colors:
//!
//! ```
//! use fade_color::Srgb;
//!
//! let red = Srgb::rgb(255.0, 0.0, 0.0);
//! let blue = Srgb::rgb(0.0, 0.0, 255.0);
//! let mid = red.to_oklab().interpolate(&blue.to_oklab(), 0.5).to_srgb();
//!
//! assert_eq!(mid.to_string(), "rgba(140,83,162,1)");
//! ```

mod oklab;
pub use oklab::Oklab;
mod srgb;
pub use srgb::Srgb;

mod parse;

/// Errors that can occur when parsing hexadecimal color strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HexColorError {
    /// The provided string does not have 6 or 8 hexadecimal digits.
    #[error("expected 6 or 8 hexadecimal digits")]
    InvalidLength,
    /// A non-hexadecimal character was encountered at the provided index.
    #[error("invalid hexadecimal digit at byte index {0}")]
    InvalidDigit(usize),
}

// https://www.w3.org/TR/css-color-4/#color-conversion-code
fn srgb_to_linear(c: f64) -> f64 {
    if c >= 0.040_45 {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    }
}

fn linear_to_srgb(c: f64) -> f64 {
    if c >= 0.003_130_8 {
        1.055_f64.mul_add(c.powf(1.0 / 2.4), -0.055)
    } else {
        c * 12.92
    }
}

// https://bottosson.github.io/posts/oklab/
#[allow(clippy::many_single_char_names, clippy::suboptimal_flops)]
fn linear_srgb_to_oklab([red, green, blue]: [f64; 3]) -> [f64; 3] {
    let l = 0.412_221_470_8_f64.mul_add(red, 0.536_332_536_3 * green) + 0.051_445_992_9 * blue;
    let m = 0.211_903_498_2_f64.mul_add(red, 0.680_699_545_1 * green) + 0.107_396_956_6 * blue;
    let s = 0.088_302_461_9_f64.mul_add(red, 0.281_718_837_6 * green) + 0.629_978_700_5 * blue;

    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    [
        0.210_454_255_3_f64.mul_add(l_, 0.793_617_785 * m_) - 0.004_072_046_8 * s_,
        1.977_998_495_1_f64.mul_add(l_, (-2.428_592_205_f64).mul_add(m_, 0.450_593_709_9 * s_)),
        0.025_904_037_1_f64.mul_add(l_, 0.782_771_766_2 * m_) - 0.808_675_766 * s_,
    ]
}

#[allow(clippy::many_single_char_names, clippy::suboptimal_flops)]
fn oklab_to_linear_srgb([lightness, a, b]: [f64; 3]) -> [f64; 3] {
    let l_ = lightness + 0.396_337_777_4_f64.mul_add(a, 0.215_803_757_3 * b);
    let m_ = lightness - 0.105_561_345_8_f64.mul_add(a, 0.063_854_172_8 * b);
    let s_ = lightness - 0.089_484_177_5_f64.mul_add(a, 1.291_485_548 * b);

    let l = l_.powi(3);
    let m = m_.powi(3);
    let s = s_.powi(3);

    [
        4.076_741_662_1_f64.mul_add(l, (-3.307_711_591_3_f64).mul_add(m, 0.230_969_929_2 * s)),
        (-1.268_438_004_6_f64).mul_add(l, 2.609_757_401_1_f64.mul_add(m, -0.341_319_396_5 * s)),
        (-0.004_196_086_3_f64).mul_add(l, (-0.703_418_614_7_f64).mul_add(m, 1.707_614_701 * s)),
    ]
}

/// `from + (to - from) * progress`, with `progress` deliberately left unclamped.
fn lerp(from: f64, to: f64, progress: f64) -> f64 {
    (to - from).mul_add(progress, from)
}

fn lerp_channels<const N: usize>(from: [f64; N], to: [f64; N], progress: f64) -> [f64; N] {
    core::array::from_fn(|index| lerp(from[index], to[index], progress))
}

/// Clamps into `min..=max`, mapping NaN to `min`.
const fn clamp_channel(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

const fn clamp_unit(value: f64) -> f64 {
    clamp_channel(value, 0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;
    const EPSILON_WIDE: f64 = 1e-6;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn srgb_linear_roundtrip() {
        let samples = [0.0_f64, 0.001, 0.02, 0.040_45, 0.25, 0.5, 1.0];

        for value in samples {
            let linear = srgb_to_linear(value);
            let recon = linear_to_srgb(linear);
            assert!(
                approx_eq(value, recon, EPSILON_WIDE),
                "value {value} recon {recon}"
            );
        }
    }

    #[test]
    fn white_maps_to_unit_lightness() {
        let [lightness, a, b] = linear_srgb_to_oklab([1.0, 1.0, 1.0]);

        assert!(approx_eq(lightness, 1.0, EPSILON_WIDE));
        assert!(approx_eq(a, 0.0, EPSILON_WIDE));
        assert!(approx_eq(b, 0.0, EPSILON_WIDE));
    }

    #[test]
    fn oklab_matrices_are_mutually_inverse() {
        let samples = [[0.2, 0.4, 0.6], [1.0, 0.0, 0.0], [0.05, 0.9, 0.3]];

        for linear in samples {
            let back = oklab_to_linear_srgb(linear_srgb_to_oklab(linear));
            for (expected, actual) in linear.iter().zip(back) {
                assert!(approx_eq(*expected, actual, EPSILON_WIDE), "{linear:?} -> {back:?}");
            }
        }
    }

    #[test]
    fn lerp_does_not_clamp_progress() {
        assert!(approx_eq(lerp(10.0, 20.0, 0.25), 12.5, EPSILON));
        assert!(approx_eq(lerp(10.0, 20.0, 1.5), 25.0, EPSILON));
        assert!(approx_eq(lerp(10.0, 20.0, -1.0), 0.0, EPSILON));
    }

    #[test]
    fn clamp_channel_maps_nan_to_lower_bound() {
        assert!(approx_eq(clamp_channel(f64::NAN, -0.5, 0.5), -0.5, EPSILON));
        assert!(approx_eq(clamp_channel(f64::INFINITY, 0.0, 255.0), 255.0, EPSILON));
        assert!(approx_eq(clamp_channel(f64::NEG_INFINITY, 0.0, 255.0), 0.0, EPSILON));
        assert!(approx_eq(clamp_unit(0.3), 0.3, EPSILON));
    }

    #[test]
    fn try_hex_reports_errors() {
        assert!(matches!(
            Srgb::try_from_hex("#GGGGGG"),
            Err(HexColorError::InvalidDigit(1))
        ));

        assert!(matches!(
            Srgb::try_from_hex("#123"),
            Err(HexColorError::InvalidLength)
        ));
    }
}
