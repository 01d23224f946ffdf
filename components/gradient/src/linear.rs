use core::fmt;

use fade_color::Srgb;

use crate::{ColorStop, GradientError};

/// A linear gradient: an angle in degrees and color stops sorted by position.
///
/// The stop order is established once in [`LinearGradient::new`] and never
/// changes afterwards. [`LinearGradient::interpolate`] and
/// [`LinearGradient::color`] always return new values.
///
/// # Example
///
/// ```
/// use fade_color::Srgb;
/// use fade_gradient::{ColorStop, LinearGradient};
///
/// let gradient = LinearGradient::new(
///     0.0,
///     vec![
///         ColorStop::new(Srgb::WHITE, 1.0),
///         ColorStop::new(Srgb::BLACK, 0.0),
///     ],
/// )?;
///
/// assert_eq!(gradient.stops()[0].color, Srgb::BLACK);
/// assert_eq!(gradient.color(0.5).to_u8(), [99, 99, 99]);
/// # Ok::<(), fade_gradient::GradientError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "GradientParts", into = "GradientParts")
)]
pub struct LinearGradient {
    angle: f64,
    // Never empty, sorted ascending by `point`.
    stops: Vec<ColorStop>,
}

impl LinearGradient {
    /// Creates a gradient, sorting the stops by position.
    ///
    /// The sort is stable: stops sharing a position keep their input order.
    ///
    /// # Errors
    ///
    /// Returns [`GradientError::Empty`] when `stops` yields nothing, and a
    /// `NonFinite*` error when the angle or a stop position is NaN or infinite.
    pub fn new(
        angle: f64,
        stops: impl IntoIterator<Item = ColorStop>,
    ) -> Result<Self, GradientError> {
        if !angle.is_finite() {
            return Err(GradientError::NonFiniteAngle);
        }

        let mut stops: Vec<ColorStop> = stops.into_iter().collect();
        if stops.is_empty() {
            return Err(GradientError::Empty);
        }
        if let Some(index) = stops.iter().position(|stop| !stop.point.is_finite()) {
            return Err(GradientError::NonFinitePoint { index });
        }

        stops.sort_by(|a, b| a.point.total_cmp(&b.point));
        Ok(Self { angle, stops })
    }

    /// The gradient angle in degrees.
    #[must_use]
    pub const fn angle(&self) -> f64 {
        self.angle
    }

    /// The color stops, sorted ascending by position.
    #[must_use]
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Number of color stops. Always at least one.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Samples the gradient color at `point`.
    ///
    /// Positions before the first stop or after the last one extend the
    /// nearest stop's color. A position exactly on a stop returns that stop's
    /// color unchanged; when several stops share the position, the first one
    /// wins. Anything in between is blended in Oklab.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn color(&self, point: f64) -> Srgb {
        let Some(index) = self.stops.iter().position(|stop| stop.point >= point) else {
            return self.stops[self.stops.len() - 1].color;
        };

        let right = &self.stops[index];
        if index == 0 || right.point == point {
            return right.color;
        }

        let left = &self.stops[index - 1];
        let fraction = inverse_lerp(left.point, right.point, point);
        left.color
            .to_oklab()
            .interpolate(&right.color.to_oklab(), fraction)
            .to_srgb()
    }

    /// Blends this gradient towards `other`.
    ///
    /// The result has one stop at every position found in either gradient.
    /// At each position both gradients are sampled and the two samples are
    /// blended in sRGB by `progress`. The angle is blended linearly.
    #[must_use]
    pub fn interpolate(&self, other: &Self, progress: f64) -> Self {
        let mut points: Vec<f64> = self
            .stops
            .iter()
            .chain(&other.stops)
            .map(|stop| stop.point)
            .collect();
        points.sort_by(f64::total_cmp);
        points.dedup();

        let stops = points
            .into_iter()
            .map(|point| {
                let color = self.color(point).interpolate(&other.color(point), progress);
                ColorStop::new(color, point)
            })
            .collect();

        let angle = lerp(self.angle, other.angle, progress);
        Self {
            angle: if angle.is_finite() { angle } else { self.angle },
            stops,
        }
    }
}

impl fmt::Display for LinearGradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "linear-gradient(in oklab {}deg", self.angle)?;
        for stop in &self.stops {
            write!(f, ",{} {}%", stop.color, stop.point * 100.0)?;
        }
        f.write_str(")")
    }
}

fn lerp(from: f64, to: f64, progress: f64) -> f64 {
    (to - from).mul_add(progress, from)
}

/// Position of `value` between `from` and `to`, or 0.0 when the span is empty.
fn inverse_lerp(from: f64, to: f64, value: f64) -> f64 {
    let fraction = (value - from) / (to - from);
    if fraction.is_finite() { fraction } else { 0.0 }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GradientParts {
    angle: f64,
    stops: Vec<ColorStop>,
}

#[cfg(feature = "serde")]
impl TryFrom<GradientParts> for LinearGradient {
    type Error = GradientError;

    fn try_from(parts: GradientParts) -> Result<Self, Self::Error> {
        Self::new(parts.angle, parts.stops)
    }
}

#[cfg(feature = "serde")]
impl From<LinearGradient> for GradientParts {
    fn from(gradient: LinearGradient) -> Self {
        Self {
            angle: gradient.angle,
            stops: gradient.stops,
        }
    }
}
