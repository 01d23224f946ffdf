use crate::{
    Srgb, clamp_channel, clamp_unit, lerp_channels, linear_to_srgb, oklab_to_linear_srgb,
};

/// Represents a color in the perceptually uniform Oklab color space.
///
/// Lightness is kept in the range 0.0 to 1.0 and the two opponent axes `a`
/// (green to red) and `b` (blue to yellow) in the range -0.5 to 0.5.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklab {
    lightness: f64,
    a: f64,
    b: f64,
    alpha: f64,
}

impl Oklab {
    /// Creates a new Oklab color, clamping every component into its range.
    #[must_use]
    pub const fn new(lightness: f64, a: f64, b: f64, alpha: f64) -> Self {
        Self {
            lightness: clamp_unit(lightness),
            a: clamp_channel(a, -0.5, 0.5),
            b: clamp_channel(b, -0.5, 0.5),
            alpha: clamp_unit(alpha),
        }
    }

    /// Perceptual lightness component (0.0 to 1.0).
    #[must_use]
    pub const fn lightness(&self) -> f64 {
        self.lightness
    }

    /// Green/red opponent axis (-0.5 to 0.5).
    #[must_use]
    pub const fn a(&self) -> f64 {
        self.a
    }

    /// Blue/yellow opponent axis (-0.5 to 0.5).
    #[must_use]
    pub const fn b(&self) -> f64 {
        self.b
    }

    /// Opacity (0.0 to 1.0).
    #[must_use]
    pub const fn alpha(&self) -> f64 {
        self.alpha
    }

    /// The three color components as `[lightness, a, b]`.
    #[must_use]
    pub const fn coords(&self) -> [f64; 3] {
        [self.lightness, self.a, self.b]
    }

    /// Linearly interpolates every component and alpha towards `other`.
    #[must_use]
    pub fn interpolate(&self, other: &Self, progress: f64) -> Self {
        let [lightness, a, b, alpha] = lerp_channels(
            [self.lightness, self.a, self.b, self.alpha],
            [other.lightness, other.a, other.b, other.alpha],
            progress,
        );
        Self::new(lightness, a, b, alpha)
    }

    /// Converts this color into sRGB, rounding each channel to the nearest
    /// integer. Alpha passes through.
    #[must_use]
    pub fn to_srgb(&self) -> Srgb {
        let [red, green, blue] = oklab_to_linear_srgb(self.coords())
            .map(|channel| clamp_channel(255.0 * linear_to_srgb(channel), 0.0, 255.0).round());
        Srgb::new(red, green, blue, self.alpha)
    }
}

impl From<Srgb> for Oklab {
    fn from(value: Srgb) -> Self {
        value.to_oklab()
    }
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
    fn construction_clamps_components() {
        let color = Oklab::new(1.2, -0.9, 0.7, 2.0);

        assert_eq!(color.coords(), [1.0, -0.5, 0.5]);
        assert!(approx_eq(color.alpha(), 1.0, EPSILON));
    }

    #[test]
    fn black_and_white_sit_on_the_lightness_axis() {
        let black = Srgb::BLACK.to_oklab();
        let white = Srgb::WHITE.to_oklab();

        assert!(approx_eq(black.lightness(), 0.0, EPSILON_WIDE));
        assert!(approx_eq(white.lightness(), 1.0, EPSILON_WIDE));
        assert!(approx_eq(white.a(), 0.0, EPSILON_WIDE));
        assert!(approx_eq(white.b(), 0.0, EPSILON_WIDE));
    }

    #[test]
    fn pure_red_matches_reference_coordinates() {
        let red = Srgb::rgb(255.0, 0.0, 0.0).to_oklab();

        assert!(approx_eq(red.lightness(), 0.627_955_36, EPSILON_WIDE));
        assert!(approx_eq(red.a(), 0.224_863_06, EPSILON_WIDE));
        assert!(approx_eq(red.b(), 0.125_846_30, EPSILON_WIDE));
    }

    #[test]
    fn to_srgb_rounds_to_whole_channels() {
        let color = Oklab::new(0.5, 0.03, -0.07, 0.8).to_srgb();

        for channel in color.coords() {
            assert!(approx_eq(channel, channel.round(), EPSILON));
        }
        assert!(approx_eq(color.alpha(), 0.8, EPSILON));
    }

    #[test]
    fn black_white_midpoint_is_pinned() {
        let mid = Srgb::BLACK
            .to_oklab()
            .interpolate(&Srgb::WHITE.to_oklab(), 0.5)
            .to_srgb();

        assert_eq!(mid.to_u8(), [99, 99, 99]);
    }

    #[test]
    fn interpolate_blends_alpha() {
        let from = Oklab::new(0.2, 0.1, -0.1, 0.0);
        let to = Oklab::new(0.6, -0.1, 0.1, 1.0);
        let mid = from.interpolate(&to, 0.5);

        assert!(approx_eq(mid.lightness(), 0.4, EPSILON));
        assert!(approx_eq(mid.a(), 0.0, EPSILON));
        assert!(approx_eq(mid.b(), 0.0, EPSILON));
        assert!(approx_eq(mid.alpha(), 0.5, EPSILON));
    }
}
