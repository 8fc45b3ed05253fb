use std::{cell::RefCell, rc::Rc};

use shared::{PageSettings, RegistrationStore};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlCanvasElement};

use super::{
    install_event_prefill, install_inline_form, install_modal, install_reveal, install_theme,
    install_tilt, start_particles, AnimationHandle,
};
use crate::{document, element_by_id, registration_store, store::PageStorage};

thread_local! {
    static ANIMATION: RefCell<Option<AnimationHandle>> = const { RefCell::new(None) };
}

/// Every enhancement of the page.
pub struct App {
    settings: Rc<PageSettings>,
    store: Rc<RegistrationStore<Rc<PageStorage>>>,
}

impl App {
    pub fn new(settings: PageSettings) -> App {
        let store = registration_store(&settings);

        App {
            settings: Rc::new(settings),
            store: Rc::new(store),
        }
    }

    /// Wires every enhancement in page order. A missing element aborts whatever comes after it.
    pub fn install(&self) -> Result<(), JsValue> {
        stamp_year()?;

        let canvas = document()
            .get_element_by_id("particle-canvas")
            .and_then(|element| element.dyn_into::<HtmlCanvasElement>().ok());

        match canvas {
            Some(canvas) => {
                let handle = start_particles(canvas, &self.settings)?;
                ANIMATION.with(|animation| animation.replace(Some(handle)));
            }
            None => log::debug!("no #particle-canvas, background stays still"),
        }

        install_reveal(&self.settings)?;
        install_tilt(&self.settings)?;
        install_modal(self.store.clone())?;

        let inline_form = install_inline_form(self.store.clone())?;
        install_event_prefill(&inline_form)?;

        install_theme(&self.settings)?;

        log::info!("page enhancements installed");

        Ok(())
    }

    pub fn stop_particles() {
        ANIMATION.with(|animation| {
            if let Some(handle) = animation.borrow_mut().take() {
                handle.cancel();
            }
        });
    }
}

fn stamp_year() -> Result<(), JsValue> {
    let year = js_sys::Date::new_0().get_full_year();

    element_by_id::<Element>("year")?.set_text_content(Some(&year.to_string()));

    Ok(())
}
