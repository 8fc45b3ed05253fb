use js_sys::Array;
use shared::{Observation, PageSettings, Visibility, REVEAL_MARKER};
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::{query_all, report};

/// Marks every `.reveal` element visible once enough of it has scrolled into view.
pub fn install_reveal(settings: &PageSettings) -> Result<(), JsValue> {
    let threshold = settings.reveal_threshold;

    let closure = Closure::<dyn FnMut(_, _)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            {
                let target = entry.target();
                let class_list = target.class_list();
                let current = Visibility::from_marker(class_list.contains(REVEAL_MARKER));
                let observation =
                    Observation::new(entry.is_intersecting(), entry.intersection_ratio());

                if current.observe(observation, threshold).is_visible() {
                    if !current.is_visible() {
                        report(class_list.add_1(REVEAL_MARKER));
                    }

                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));

    let observer =
        IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options)?;
    closure.forget();

    let elements = query_all(".reveal")?;

    for element in &elements {
        observer.observe(element);
    }

    log::debug!("observing {} reveal elements", elements.len());

    Ok(())
}
