use core::{fmt, str::FromStr};

use crate::{
    HexColorError, Oklab, clamp_channel, clamp_unit, lerp_channels, linear_srgb_to_oklab,
    parse::parse_hex_color, srgb_to_linear,
};

/// Represents a color in the gamma-encoded sRGB color space.
///
/// Channels are stored as real numbers in the range 0.0 to 255.0 and alpha in
/// the range 0.0 to 1.0. Both ranges are enforced at construction time.
/// Channels are only rounded to integers when the color is written out as a
/// style string, so display-space blends keep their precision.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "SrgbParts", into = "SrgbParts")
)]
pub struct Srgb {
    red: f64,
    green: f64,
    blue: f64,
    alpha: f64,
}

impl Srgb {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255.0, 255.0, 255.0);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a new sRGB color, clamping each channel to `0.0..=255.0` and
    /// alpha to `0.0..=1.0`.
    ///
    /// # Arguments
    /// * `red` - Red component (0.0 to 255.0)
    /// * `green` - Green component (0.0 to 255.0)
    /// * `blue` - Blue component (0.0 to 255.0)
    /// * `alpha` - Opacity (0.0 = transparent, 1.0 = opaque)
    #[must_use]
    pub const fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red: clamp_channel(red, 0.0, 255.0),
            green: clamp_channel(green, 0.0, 255.0),
            blue: clamp_channel(blue, 0.0, 255.0),
            alpha: clamp_unit(alpha),
        }
    }

    /// Creates an opaque sRGB color.
    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    /// Creates an opaque sRGB color from 8-bit components.
    #[must_use]
    #[allow(clippy::cast_lossless)]
    pub const fn from_u8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(red as f64, green as f64, blue as f64)
    }

    /// Attempts to create a color from a hexadecimal string.
    ///
    /// Accepts `#RRGGBB`, `0xRRGGBB` and bare `RRGGBB`, optionally followed by
    /// an `AA` alpha byte.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not contain exactly six or eight
    /// hexadecimal digits or contains invalid characters.
    pub fn try_from_hex(hex: &str) -> Result<Self, HexColorError> {
        let ([red, green, blue], alpha) = parse_hex_color(hex)?;
        let alpha = alpha.map_or(1.0, |alpha| f64::from(alpha) / 255.0);
        Ok(Self::new(
            f64::from(red),
            f64::from(green),
            f64::from(blue),
            alpha,
        ))
    }

    /// Red channel (0.0 to 255.0).
    #[must_use]
    pub const fn red(&self) -> f64 {
        self.red
    }

    /// Green channel (0.0 to 255.0).
    #[must_use]
    pub const fn green(&self) -> f64 {
        self.green
    }

    /// Blue channel (0.0 to 255.0).
    #[must_use]
    pub const fn blue(&self) -> f64 {
        self.blue
    }

    /// Opacity (0.0 to 1.0).
    #[must_use]
    pub const fn alpha(&self) -> f64 {
        self.alpha
    }

    /// The three color channels as `[red, green, blue]`.
    #[must_use]
    pub const fn coords(&self) -> [f64; 3] {
        [self.red, self.green, self.blue]
    }

    /// The channels rounded to the nearest integer, as written to style strings.
    #[must_use]
    pub fn to_u8(&self) -> [u8; 3] {
        self.coords().map(channel_to_u8)
    }

    /// Linearly interpolates every channel and alpha towards `other`.
    ///
    /// `progress` is not clamped; the result is clamped by [`Srgb::new`].
    #[must_use]
    pub fn interpolate(&self, other: &Self, progress: f64) -> Self {
        let [red, green, blue, alpha] = lerp_channels(
            [self.red, self.green, self.blue, self.alpha],
            [other.red, other.green, other.blue, other.alpha],
            progress,
        );
        Self::new(red, green, blue, alpha)
    }

    /// Converts this color into the Oklab color space. Alpha passes through.
    #[must_use]
    pub fn to_oklab(&self) -> Oklab {
        let linear = self.coords().map(|channel| srgb_to_linear(channel / 255.0));
        let [lightness, a, b] = linear_srgb_to_oklab(linear);
        Oklab::new(lightness, a, b, self.alpha)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel_to_u8(channel: f64) -> u8 {
    // Channels are clamped to 0..=255 on construction.
    channel.round() as u8
}

impl Default for Srgb {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Srgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [red, green, blue] = self.to_u8();
        write!(f, "rgba({red},{green},{blue},{})", self.alpha)
    }
}

impl From<(u8, u8, u8)> for Srgb {
    fn from(value: (u8, u8, u8)) -> Self {
        Self::from_u8(value.0, value.1, value.2)
    }
}

impl From<[u8; 3]> for Srgb {
    fn from(value: [u8; 3]) -> Self {
        Self::from_u8(value[0], value[1], value[2])
    }
}

impl From<Oklab> for Srgb {
    fn from(value: Oklab) -> Self {
        value.to_srgb()
    }
}

impl FromStr for Srgb {
    type Err = HexColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_hex(s)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct SrgbParts {
    red: f64,
    green: f64,
    blue: f64,
    #[serde(default = "opaque")]
    alpha: f64,
}

#[cfg(feature = "serde")]
const fn opaque() -> f64 {
    1.0
}

#[cfg(feature = "serde")]
impl From<SrgbParts> for Srgb {
    fn from(parts: SrgbParts) -> Self {
        Self::new(parts.red, parts.green, parts.blue, parts.alpha)
    }
}

#[cfg(feature = "serde")]
impl From<Srgb> for SrgbParts {
    fn from(color: Srgb) -> Self {
        Self {
            red: color.red,
            green: color.green,
            blue: color.blue,
            alpha: color.alpha,
        }
    }
}
