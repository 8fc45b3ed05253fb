use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use shared::{frames_elapsed, PageSettings, ParticleField};
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::{draw::draw_particles, report, request_animation_frame, window};

/// Stops a running particle animation.
pub struct AnimationHandle {
    running: Rc<Cell<bool>>,
}

impl AnimationHandle {
    /// The frame in flight still draws; nothing is scheduled after it.
    pub fn cancel(&self) {
        self.running.set(false);
        log::debug!("particle animation cancelled");
    }
}

fn viewport_size() -> Result<(u32, u32), JsValue> {
    let width = window()
        .inner_width()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("innerWidth is not a number"))?;
    let height = window()
        .inner_height()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("innerHeight is not a number"))?;

    Ok((width as u32, height as u32))
}

fn fit_to_viewport(canvas: &HtmlCanvasElement) -> Result<(f64, f64), JsValue> {
    let (width, height) = viewport_size()?;

    canvas.set_width(width);
    canvas.set_height(height);

    Ok((f64::from(width), f64::from(height)))
}

/// Sizes `canvas` to the viewport and redraws its particles on every animation frame until cancelled.
pub fn start_particles(
    canvas: HtmlCanvasElement,
    settings: &PageSettings,
) -> Result<AnimationHandle, JsValue> {
    let context = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()?;

    let (width, height) = fit_to_viewport(&canvas)?;
    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
    let field = Rc::new(RefCell::new(ParticleField::new(
        width, height, seed, settings,
    )));

    log::debug!(
        "particle field started with {} particles",
        field.borrow().particles().len()
    );

    {
        let field = field.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_: JsValue| {
            report(fit_to_viewport(&canvas).map(|(width, height)| {
                field.borrow_mut().resize(width, height);
            }));
        });
        window().add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    let running = Rc::new(Cell::new(true));

    let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();

    {
        let running = running.clone();
        let fill = settings.particle_fill.clone();
        let mut last_frame_at: Option<f64> = None;

        *g.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
            if !running.get() {
                return;
            }

            let dt = last_frame_at.map_or(1.0, |last| frames_elapsed(last, timestamp));
            last_frame_at = Some(timestamp);

            {
                let mut field = field.borrow_mut();

                field.advance(dt);
                report(draw_particles(&context, &field, &fill));
            }

            if let Some(closure) = f.borrow().as_ref() {
                report(request_animation_frame(closure).map(|_| ()));
            }
        }));
    }

    if let Some(closure) = g.borrow().as_ref() {
        request_animation_frame(closure)?;
    }

    Ok(AnimationHandle { running })
}
