use core::fmt;

/// Error type produced by the web backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebError {
    /// The DOM APIs are not accessible (e.g., when executed outside of a browser).
    DomUnavailable,
    /// No element with the requested id exists, or it is not an HTML element.
    ElementNotFound(String),
    /// Wrapper around JavaScript exceptions.
    Js(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DomUnavailable => write!(f, "DOM is not available"),
            Self::ElementNotFound(id) => write!(f, "Failed to find HTML element with id `{id}`"),
            Self::Js(msg) => write!(f, "JavaScript error: {msg}"),
        }
    }
}

impl std::error::Error for WebError {}

impl From<wasm_bindgen::JsValue> for WebError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        value
            .as_string()
            .map_or_else(|| Self::Js(format!("{value:?}")), Self::Js)
    }
}

impl From<WebError> for wasm_bindgen::JsValue {
    fn from(value: WebError) -> Self {
        Self::from(value.to_string())
    }
}
