//! Freehand signature model: surface sizing and the stroke buffer.
//!
//! Pen width follows pointer speed the way ink does: fast strokes thin out
//! towards `min_width`, slow strokes widen towards `max_width`.

/// CSS height of the signing surface.
pub const SURFACE_HEIGHT: f64 = 200.0;

/// Pixel dimensions of the signing canvas for the current layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    pub css_width: f64,
    pub css_height: f64,
    /// Device pixel ratio, never below 1.
    pub pixel_ratio: f64,
}

impl SurfaceSize {
    /// Fits the surface to the element's on-screen width at the fixed
    /// height.
    pub fn fit(css_width: f64, device_pixel_ratio: f64) -> Self {
        let pixel_ratio = if device_pixel_ratio.is_finite() {
            device_pixel_ratio.max(1.0)
        } else {
            1.0
        };
        Self {
            css_width: css_width.max(0.0),
            css_height: SURFACE_HEIGHT,
            pixel_ratio,
        }
    }

    pub fn pixel_width(&self) -> u32 {
        (self.css_width * self.pixel_ratio).round() as u32
    }

    pub fn pixel_height(&self) -> u32 {
        (self.css_height * self.pixel_ratio).round() as u32
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PenOptions {
    pub min_width: f64,
    pub max_width: f64,
    /// Weight given to the newest velocity sample when smoothing.
    pub velocity_filter_weight: f64,
    pub pen_color: &'static str,
    pub background_color: &'static str,
}

impl Default for PenOptions {
    fn default() -> Self {
        Self {
            min_width: 2.0,
            max_width: 3.0,
            velocity_filter_weight: 0.7,
            pen_color: "rgb(0, 0, 0)",
            background_color: "rgb(255, 255, 255)",
        }
    }
}

/// Pointer sample in CSS pixels relative to the surface, with a timestamp
/// in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokePoint {
    pub x: f64,
    pub y: f64,
    pub time_ms: f64,
}

impl StrokePoint {
    fn distance_to(&self, other: &StrokePoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Line to draw for one new sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: StrokePoint,
    pub to: StrokePoint,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StrokeBuffer {
    options: PenOptions,
    strokes: Vec<Vec<StrokePoint>>,
    drawing: bool,
    last_velocity: f64,
    last_width: f64,
}

impl Default for StrokeBuffer {
    fn default() -> Self {
        Self::new(PenOptions::default())
    }
}

impl StrokeBuffer {
    pub fn new(options: PenOptions) -> Self {
        let last_width = (options.min_width + options.max_width) / 2.0;
        Self {
            options,
            strokes: Vec::new(),
            drawing: false,
            last_velocity: 0.0,
            last_width,
        }
    }

    pub fn options(&self) -> &PenOptions {
        &self.options
    }

    /// True until the first stroke after construction or [`clear`](Self::clear).
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Drops every stroke.
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.drawing = false;
        self.reset_pen();
    }

    /// Starts a stroke and returns the radius of the dot to draw at `point`.
    pub fn begin(&mut self, point: StrokePoint) -> f64 {
        self.reset_pen();
        self.strokes.push(vec![point]);
        self.drawing = true;
        self.last_width / 2.0
    }

    /// Adds a sample to the current stroke. Returns `None` when no stroke is
    /// in progress or the pointer has not moved.
    pub fn extend(&mut self, point: StrokePoint) -> Option<Segment> {
        if !self.drawing {
            return None;
        }
        let stroke = self.strokes.last_mut()?;
        let from = *stroke.last()?;
        let distance = from.distance_to(&point);
        if distance == 0.0 {
            return None;
        }
        stroke.push(point);

        let elapsed = (point.time_ms - from.time_ms).max(1.0);
        let weight = self.options.velocity_filter_weight;
        let velocity = weight * (distance / elapsed) + (1.0 - weight) * self.last_velocity;
        let new_width = (self.options.max_width / (velocity + 1.0)).max(self.options.min_width);
        let width = (self.last_width + new_width) / 2.0;

        self.last_velocity = velocity;
        self.last_width = new_width;
        Some(Segment {
            from,
            to: point,
            width,
        })
    }

    /// Ends the current stroke.
    pub fn end(&mut self) {
        self.drawing = false;
    }

    fn reset_pen(&mut self) {
        self.last_velocity = 0.0;
        self.last_width = (self.options.min_width + self.options.max_width) / 2.0;
    }
}
