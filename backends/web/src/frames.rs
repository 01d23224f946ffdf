use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use fade::{FrameScheduler, FrameToken, GradientElement, LinearGradient};
use tracing::{error, warn};
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{HtmlElement, Window};

use crate::{dom::StyleTarget, error::WebError};

/// A gradient element rendered into the DOM.
pub type WebGradientElement = GradientElement<StyleTarget, AnimationFrames>;

/// Schedules transition frames with `window.requestAnimationFrame`.
///
/// Callbacks hold a weak reference to their element, so dropping the element
/// stops an animation at the next frame.
#[derive(Debug)]
pub struct AnimationFrames {
    window: Window,
    element: Weak<RefCell<WebGradientElement>>,
}

impl FrameScheduler for AnimationFrames {
    type Handle = Option<i32>;

    fn request_frame(&mut self, token: FrameToken) -> Self::Handle {
        let element = self.element.clone();
        let callback = Closure::once_into_js(move |timestamp: f64| {
            let Some(element) = element.upgrade() else {
                return;
            };
            match element.try_borrow_mut() {
                Ok(mut element) => {
                    element.frame(token, timestamp);
                }
                Err(_) => warn!("gradient element is borrowed; dropping animation frame"),
            };
        });

        match self
            .window
            .request_animation_frame(callback.unchecked_ref::<js_sys::Function>())
        {
            Ok(handle) => Some(handle),
            Err(err) => {
                error!(error = %WebError::from(err), "requestAnimationFrame failed");
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: Self::Handle) {
        let Some(handle) = handle else { return };
        if let Err(err) = self.window.cancel_animation_frame(handle) {
            warn!(error = %WebError::from(err), "cancelAnimationFrame failed");
        }
    }
}

/// Mounts a gradient element on the HTML element with id `element_id` and
/// renders `background` immediately.
///
/// # Errors
///
/// Returns an error if the DOM is unavailable or the element cannot be found.
pub fn mount(
    element_id: &str,
    background: LinearGradient,
) -> Result<Rc<RefCell<WebGradientElement>>, WebError> {
    let window = web_sys::window().ok_or(WebError::DomUnavailable)?;
    let target = StyleTarget::find(&window, element_id)?;
    Ok(attach(window, target, background))
}

/// Mounts a gradient element on an element that is already at hand.
///
/// # Errors
///
/// Returns an error if no browser window is available.
pub fn mount_on(
    element: HtmlElement,
    background: LinearGradient,
) -> Result<Rc<RefCell<WebGradientElement>>, WebError> {
    let window = web_sys::window().ok_or(WebError::DomUnavailable)?;
    Ok(attach(window, StyleTarget::new(element), background))
}

fn attach(
    window: Window,
    target: StyleTarget,
    background: LinearGradient,
) -> Rc<RefCell<WebGradientElement>> {
    Rc::new_cyclic(|weak| {
        let frames = AnimationFrames {
            window,
            element: weak.clone(),
        };
        RefCell::new(GradientElement::new(target, frames, background))
    })
}
