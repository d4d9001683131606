// Viewport size queries and the window resize binding.

use crate::error::SurfaceError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

pub fn viewport_size(window: &Window) -> Result<(u32, u32), SurfaceError> {
    let width = window
        .inner_width()?
        .as_f64()
        .ok_or(SurfaceError::Viewport("width"))?;
    let height = window
        .inner_height()?
        .as_f64()
        .ok_or(SurfaceError::Viewport("height"))?;
    Ok((width as u32, height as u32))
}

/// Calls back with the fresh viewport size on every `resize` event until dropped.
pub struct ResizeListener {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ResizeListener {
    pub fn bind<F>(window: &Window, mut on_resize: F) -> Result<ResizeListener, SurfaceError>
    where
        F: FnMut(u32, u32) + 'static,
    {
        let source = window.clone();
        let callback = Closure::wrap(Box::new(move || match viewport_size(&source) {
            Ok((width, height)) => on_resize(width, height),
            Err(err) => {
                warn!("ignoring resize: {}", err);
            }
        }) as Box<dyn FnMut()>);
        window.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())?;

        Ok(ResizeListener {
            window: window.clone(),
            callback,
        })
    }
}

impl Drop for ResizeListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.callback.as_ref().unchecked_ref());
    }
}
