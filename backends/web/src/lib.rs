#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Web/WASM backend for `fade`.
//!
//! This crate binds a [`fade::GradientElement`] to a DOM element: styles are
//! written to the element's `background` property and transition frames are
//! driven by `requestAnimationFrame`.
//!
//! ```ignore
//! let element = fade_web::mount("hero", sunrise)?;
//! element
//!     .borrow_mut()
//!     .transition(ocean, fade::TransitionOptions::new(600.0));
//! ```
//!
//! Everything here only does useful work inside a browser on the
//! `wasm32-unknown-unknown` target.

mod dom;
mod error;
mod frames;

pub use dom::StyleTarget;
pub use error::WebError;
pub use frames::{AnimationFrames, WebGradientElement, mount, mount_on};
