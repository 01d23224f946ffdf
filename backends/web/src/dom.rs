use fade::RenderTarget;
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, Window};

use crate::error::WebError;

/// Renders gradients into the inline `background` style of an HTML element.
#[derive(Debug, Clone)]
pub struct StyleTarget {
    element: HtmlElement,
}

impl StyleTarget {
    /// Wraps an element that is already at hand.
    #[must_use]
    pub const fn new(element: HtmlElement) -> Self {
        Self { element }
    }

    /// Looks up the element with the given id in the window's document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is unavailable or no HTML element
    /// carries `id`.
    pub fn find(window: &Window, id: &str) -> Result<Self, WebError> {
        let document = window.document().ok_or(WebError::DomUnavailable)?;
        let element = document
            .get_element_by_id(id)
            .ok_or_else(|| WebError::ElementNotFound(id.to_string()))?
            .dyn_into::<HtmlElement>()
            .map_err(|e| WebError::from(JsValue::from(e)))?;
        Ok(Self::new(element))
    }

    /// Returns the element styles are written to.
    #[must_use]
    pub const fn element(&self) -> &HtmlElement {
        &self.element
    }
}

impl RenderTarget for StyleTarget {
    fn set_background(&mut self, style: &str) {
        if let Err(err) = self.element.style().set_property("background", style) {
            warn!(error = %WebError::from(err), "failed to apply gradient background");
        }
    }
}
