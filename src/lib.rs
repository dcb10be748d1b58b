// Animated network backdrop: slow-drifting violet nodes joined by faint
// lines while they are near each other, covering the whole viewport.
// The simulation and draw passes live in `field` and `renderer`; this
// module is the browser glue that wires them to the canvas, the resize
// event, and requestAnimationFrame.

pub mod color;
pub mod field;
pub mod particle;
pub mod renderer;
pub mod surface;
mod utils;

use rand::rngs::ThreadRng;
use renderer::Renderer;
use std::cell::RefCell;
use std::rc::Rc;
use surface::CanvasSurface;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, Window};

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

// Finds the canvas, sizes it to the viewport, and starts the animation.
// The loop re-requests itself on every frame and runs for the lifetime
// of the page; both closures are intentionally leaked because nothing
// ever tears the backdrop down.
#[wasm_bindgen]
pub fn start(canvas_id: &str) -> Result<(), JsValue> {
    utils::set_panic_hook();

    let window = web_sys::window().ok_or("no global window")?;
    let document = window.document().ok_or("window has no document")?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("no canvas with id '{}'", canvas_id)))?
        .dyn_into::<HtmlCanvasElement>()?;

    let surface = CanvasSurface::new(canvas)?;
    let renderer = Rc::new(RefCell::new(Renderer::<CanvasSurface, ThreadRng>::new(
        surface,
        rand::thread_rng(),
    )));

    let (width, height) = viewport_size(&window)?;
    renderer.borrow_mut().on_resize(width, height);

    {
        let renderer = renderer.clone();
        let resize_window = window.clone();
        let on_resize = Closure::wrap(Box::new(move || {
            let (width, height) =
                viewport_size(&resize_window).expect("failed to read viewport size");
            renderer.borrow_mut().on_resize(width, height);
        }) as Box<dyn FnMut()>);
        window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
        on_resize.forget();
    }

    // The usual self-rescheduling requestAnimationFrame loop: the closure
    // holds a handle to itself so each frame can queue the next one.
    let frame = Rc::new(RefCell::new(None));
    let first_frame = frame.clone();
    let loop_window = window.clone();
    *first_frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        renderer.borrow_mut().render_frame();
        schedule_frame(
            &loop_window,
            frame.borrow().as_ref().expect("frame closure missing"),
        );
    }) as Box<dyn FnMut()>));
    schedule_frame(
        &window,
        first_frame
            .borrow()
            .as_ref()
            .expect("frame closure missing"),
    );
    Ok(())
}

fn viewport_size(window: &Window) -> Result<(u32, u32), JsValue> {
    let width = window
        .inner_width()?
        .as_f64()
        .ok_or("viewport width is not a number")?;
    let height = window
        .inner_height()?
        .as_f64()
        .ok_or("viewport height is not a number")?;
    Ok((width as u32, height as u32))
}

fn schedule_frame(window: &Window, callback: &Closure<dyn FnMut()>) {
    window
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .expect("failed to schedule animation frame");
}
