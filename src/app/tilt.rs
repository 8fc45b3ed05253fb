use std::rc::Rc;

use shared::{Bounds, PageSettings, Tilt};
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{HtmlElement, MouseEvent};

use crate::{query_all, report};

/// Leans every `.tilt` and `.card` element toward the pointer while it hovers.
pub fn install_tilt(settings: &Rc<PageSettings>) -> Result<(), JsValue> {
    let elements = query_all(".tilt, .card")?
        .into_iter()
        .filter_map(|element| element.dyn_into::<HtmlElement>().ok());

    for element in elements {
        {
            let target = element.clone();
            let settings = settings.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = target.get_bounding_client_rect();
                let bounds = Bounds::new(rect.left(), rect.top(), rect.width(), rect.height());
                let pointer = (f64::from(event.client_x()), f64::from(event.client_y()));
                let tilt = Tilt::at(&bounds, pointer, &settings);

                report(target.style().set_property("transform", &tilt.transform()));
            });
            element
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        {
            let target = element.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_: MouseEvent| {
                report(target.style().remove_property("transform").map(|_| ()));
            });
            element.add_event_listener_with_callback(
                "mouseleave",
                closure.as_ref().unchecked_ref(),
            )?;
            closure.forget();
        }
    }

    Ok(())
}
