// Thin seam over the 2d canvas context. The renderer only ever touches
// these primitives, so tests can swap in a recording implementation and
// the browser path stays a set of one-line forwards.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub trait DrawSurface {
    fn set_size(&mut self, width: u32, height: u32);
    fn clear(&mut self, width: f64, height: f64);
    fn set_stroke_style(&mut self, style: &str);
    fn set_line_width(&mut self, width: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn stroke(&mut self);
    fn set_fill_style(&mut self, style: &str);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64);
}

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    // Grabs the 2d context up front; without it the backdrop cannot run
    // at all, so the error aborts initialization.
    pub fn new(canvas: HtmlCanvasElement) -> Result<CanvasSurface, JsValue> {
        let context = canvas
            .get_context("2d")?
            .ok_or("canvas has no 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(CanvasSurface { canvas, context })
    }
}

impl DrawSurface for CanvasSurface {
    fn set_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    fn set_stroke_style(&mut self, style: &str) {
        #[allow(deprecated)]
        self.context.set_stroke_style(&JsValue::from_str(style));
    }

    fn set_line_width(&mut self, width: f64) {
        self.context.set_line_width(width);
    }

    fn begin_path(&mut self) {
        self.context.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.context.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.context.line_to(x, y);
    }

    fn stroke(&mut self) {
        self.context.stroke();
    }

    fn set_fill_style(&mut self, style: &str) {
        #[allow(deprecated)]
        self.context.set_fill_style(&JsValue::from_str(style));
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
        self.context.begin_path();
        let _ = self
            .context
            .arc(x, y, radius, 0.0, std::f64::consts::PI * 2.0);
        self.context.fill();
    }
}

// Records every primitive call so driver tests can assert on what a
// frame actually drew.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingSurface {
    pub size: Option<(u32, u32)>,
    pub clears: usize,
    pub strokes: usize,
    pub segments: Vec<([f64; 2], [f64; 2])>,
    pub circles: Vec<([f64; 2], f64)>,
    pub stroke_style: String,
    pub line_width: f64,
    pub fill_style: String,
    path_start: Option<[f64; 2]>,
}

#[cfg(test)]
impl DrawSurface for RecordingSurface {
    fn set_size(&mut self, width: u32, height: u32) {
        self.size = Some((width, height));
    }

    fn clear(&mut self, _width: f64, _height: f64) {
        self.clears += 1;
    }

    fn set_stroke_style(&mut self, style: &str) {
        self.stroke_style = style.to_owned();
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn begin_path(&mut self) {
        self.path_start = None;
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path_start = Some([x, y]);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        if let Some(start) = self.path_start {
            self.segments.push((start, [x, y]));
        }
    }

    fn stroke(&mut self) {
        self.strokes += 1;
    }

    fn set_fill_style(&mut self, style: &str) {
        self.fill_style = style.to_owned();
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
        self.circles.push(([x, y], radius));
    }
}
