//! Signature capture on a `<canvas>`.
//!
//! The canvas node is rendered by the induction page; this type binds to it
//! through `canvas_ref`, sizes the backing store for the device pixel ratio,
//! and draws pointer samples as they arrive through the page's messages.

use std::f64::consts::TAU;

use common::signature::{StrokeBuffer, StrokePoint, SurfaceSize};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, PointerEvent};
use yew::NodeRef;

use crate::error::ClientError;

const PNG_MIME: &str = "image/png";

pub struct SignatureCapture {
    pub canvas_ref: NodeRef,
    context: Option<CanvasRenderingContext2d>,
    surface: Option<SurfaceSize>,
    strokes: StrokeBuffer,
}

impl SignatureCapture {
    pub fn new() -> Self {
        Self {
            canvas_ref: NodeRef::default(),
            context: None,
            surface: None,
            strokes: StrokeBuffer::default(),
        }
    }

    /// Binds to the mounted canvas, sizing it to its on-screen width and the
    /// fixed surface height. Previously captured strokes are discarded.
    ///
    /// Must run again whenever the hosting dialog is reopened, because the
    /// canvas may have been resized while hidden.
    pub fn initialize(&mut self) -> Result<(), ClientError> {
        let canvas = self.canvas()?;
        let ratio = web_sys::window()
            .map(|window| window.device_pixel_ratio())
            .unwrap_or(1.0);
        canvas.style().set_property("width", "100%")?;
        let surface = SurfaceSize::fit(canvas.get_bounding_client_rect().width(), ratio);

        canvas.set_width(surface.pixel_width());
        canvas.set_height(surface.pixel_height());
        let style = canvas.style();
        style.set_property("width", &format!("{}px", surface.css_width))?;
        style.set_property("height", &format!("{}px", surface.css_height))?;

        let context = context_2d(&canvas)?;
        context.set_transform(surface.pixel_ratio, 0.0, 0.0, surface.pixel_ratio, 0.0, 0.0)?;
        context.set_line_cap("round");
        context.set_line_join("round");

        self.context = Some(context);
        self.surface = Some(surface);
        self.strokes.clear();
        self.paint_background();
        Ok(())
    }

    /// Erases every stroke.
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.paint_background();
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// The drawing as a PNG data URI. `None` while nothing has been drawn.
    pub fn export_png(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        self.canvas().ok()?.to_data_url_with_type(PNG_MIME).ok()
    }

    pub fn pen_down(&mut self, point: StrokePoint) {
        let Some(context) = &self.context else {
            return;
        };
        let radius = self.strokes.begin(point);
        context.begin_path();
        context.set_fill_style_str(self.strokes.options().pen_color);
        if context.arc(point.x, point.y, radius, 0.0, TAU).is_ok() {
            context.fill();
        }
    }

    pub fn pen_move(&mut self, point: StrokePoint) {
        let Some(context) = &self.context else {
            return;
        };
        if let Some(segment) = self.strokes.extend(point) {
            context.begin_path();
            context.set_stroke_style_str(self.strokes.options().pen_color);
            context.set_line_width(segment.width);
            context.move_to(segment.from.x, segment.from.y);
            context.line_to(segment.to.x, segment.to.y);
            context.stroke();
        }
    }

    pub fn pen_up(&mut self) {
        self.strokes.end();
    }

    fn canvas(&self) -> Result<HtmlCanvasElement, ClientError> {
        self.canvas_ref
            .cast::<HtmlCanvasElement>()
            .ok_or_else(|| ClientError::Dom("signature canvas is not mounted".to_string()))
    }

    fn paint_background(&self) {
        if let (Some(context), Some(surface)) = (&self.context, &self.surface) {
            context.set_fill_style_str(self.strokes.options().background_color);
            context.fill_rect(0.0, 0.0, surface.css_width, surface.css_height);
        }
    }
}

/// 2d drawing context of `canvas`.
pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, ClientError> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| ClientError::Dom("2d context unavailable".to_string()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| ClientError::Dom("unexpected canvas context type".to_string()))
}

/// Pointer position relative to the canvas the event targets.
pub fn pointer_point(event: &PointerEvent) -> Option<StrokePoint> {
    let canvas: HtmlCanvasElement = event.target()?.dyn_into().ok()?;
    let rect = canvas.get_bounding_client_rect();
    Some(StrokePoint {
        x: f64::from(event.client_x()) - rect.left(),
        y: f64::from(event.client_y()) - rect.top(),
        time_ms: js_sys::Date::now(),
    })
}

/// Keeps receiving moves after the pointer leaves the canvas mid-stroke.
pub fn capture_pointer(event: &PointerEvent) {
    if let Some(canvas) = event
        .target()
        .and_then(|target| target.dyn_into::<HtmlCanvasElement>().ok())
    {
        canvas.set_pointer_capture(event.pointer_id()).ok();
    }
}
