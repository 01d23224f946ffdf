#![doc = include_str!("../README.md")]
#![allow(clippy::multiple_crate_versions)]

extern crate alloc;

pub mod animation;
pub mod element;

#[doc(inline)]
pub use animation::{Easing, TransitionOptions};
#[doc(inline)]
pub use element::{FrameScheduler, FrameStatus, FrameToken, GradientElement, RenderTarget};

pub use fade_color as color;
pub use fade_gradient as gradient;

pub use color::{Oklab, Srgb};
pub use gradient::{ColorStop, GradientError, LinearGradient};

pub mod prelude {
    //! A collection of commonly used types for easy importing.
    //!
    //! ```rust
    //! use fade::prelude::*;
    //!
    //! let stop = ColorStop::new(Srgb::WHITE, 0.5);
    //! assert_eq!(stop.point, 0.5);
    //! ```
    pub use super::{
        ColorStop, Easing, FrameScheduler, FrameStatus, FrameToken, GradientElement,
        LinearGradient, RenderTarget, Srgb, TransitionOptions,
    };
}
