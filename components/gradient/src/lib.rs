//! Linear gradients built from ordered color stops.
//!
//! A [`LinearGradient`] is an angle plus a list of [`ColorStop`]s kept sorted
//! by position. Sampling between two stops blends their colors in Oklab, and
//! two gradients blend stop-by-stop over the union of their stop positions so
//! that every stop of either side survives at its exact location.
//!
//! ```
//! use fade_color::Srgb;
//! use fade_gradient::{ColorStop, LinearGradient};
//!
//! let gradient = LinearGradient::new(
//!     90.0,
//!     vec![
//!         ColorStop::new(Srgb::BLACK, 0.0),
//!         ColorStop::new(Srgb::WHITE, 1.0),
//!     ],
//! )?;
//!
//! assert_eq!(
//!     gradient.to_string(),
//!     "linear-gradient(in oklab 90deg,rgba(0,0,0,1) 0%,rgba(255,255,255,1) 100%)"
//! );
//! # Ok::<(), fade_gradient::GradientError>(())
//! ```

mod linear;
pub use linear::LinearGradient;
mod stop;
pub use stop::ColorStop;

pub use fade_color::{Oklab, Srgb};

/// Reasons a gradient cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GradientError {
    /// A gradient needs at least one color stop.
    #[error("a gradient needs at least one color stop")]
    Empty,
    /// The angle is NaN or infinite.
    #[error("gradient angle must be finite")]
    NonFiniteAngle,
    /// A stop position is NaN or infinite.
    #[error("color stop {index} has a non-finite position")]
    NonFinitePoint {
        /// Index of the offending stop in the input order.
        index: usize,
    },
}
