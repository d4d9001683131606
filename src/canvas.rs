// Canvas backed drawing surface. The overlay canvas is fixed over the whole
// viewport, ignores pointer events and is inserted first in <body> so every
// other element paints on top of it.

use crate::color::Color;
use crate::error::SurfaceError;
use crate::surface::Surface;
use std::f64::consts::PI;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

const OVERLAY_STYLE: [(&str, &str); 7] = [
    ("position", "fixed"),
    ("top", "0"),
    ("left", "0"),
    ("width", "100%"),
    ("height", "100%"),
    ("pointer-events", "none"),
    ("z-index", "0"),
];

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn create_overlay(
        document: &Document,
        width: u32,
        height: u32,
    ) -> Result<CanvasSurface, SurfaceError> {
        let canvas = document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| SurfaceError::Js(String::from("created element is not a canvas")))?;

        let style = canvas.style();
        for (property, value) in OVERLAY_STYLE.iter() {
            style.set_property(property, value)?;
        }

        let body = document.body().ok_or(SurfaceError::NoBody)?;
        body.prepend_with_node_1(&canvas)?;

        CanvasSurface::from_canvas(canvas, width, height)
    }

    /// Wraps an existing canvas, sizing its pixel buffer to `width` x `height`.
    pub fn from_canvas(
        canvas: HtmlCanvasElement,
        width: u32,
        height: u32,
    ) -> Result<CanvasSurface, SurfaceError> {
        let context = canvas
            .get_context("2d")?
            .ok_or(SurfaceError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SurfaceError::NoContext)?;
        canvas.set_width(width);
        canvas.set_height(height);

        Ok(CanvasSurface { canvas, context })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Takes the canvas out of the document.
    pub fn detach(&self) {
        self.canvas.remove();
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&mut self) {
        let (width, height) = self.size();
        self.context
            .clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
        #[allow(deprecated)]
        self.context
            .set_fill_style(&JsValue::from_str(&color.to_css()));
        self.context.begin_path();
        // arc only rejects negative radii, which particles never have
        if self.context.arc(x, y, radius, 0.0, PI * 2.0).is_ok() {
            self.context.fill();
        }
    }
}
