use fade_color::Srgb;

/// A color stop in a gradient.
///
/// This represents a color at a specific position along the gradient axis,
/// where 0.0 is the start and 1.0 the end.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorStop {
    /// Color at this position.
    pub color: Srgb,
    /// Position along the gradient (0.0 to 1.0).
    pub point: f64,
}

impl ColorStop {
    /// Creates a new color stop.
    #[must_use]
    pub fn new(color: impl Into<Srgb>, point: f64) -> Self {
        Self {
            color: color.into(),
            point,
        }
    }
}

impl<C: Into<Srgb>> From<(C, f64)> for ColorStop {
    fn from((color, point): (C, f64)) -> Self {
        Self::new(color, point)
    }
}
