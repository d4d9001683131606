use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Failures while wiring the particle effect into the page.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("no global `window` exists")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("canvas has no 2d rendering context")]
    NoContext,
    #[error("could not read viewport {0}")]
    Viewport(&'static str),
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for SurfaceError {
    fn from(value: JsValue) -> Self {
        // thrown `Error` objects carry their text in `message`
        let message = match value.dyn_ref::<js_sys::Error>() {
            Some(err) => String::from(err.message()),
            None => value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        };
        SurfaceError::Js(message)
    }
}

impl From<SurfaceError> for JsValue {
    fn from(err: SurfaceError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
