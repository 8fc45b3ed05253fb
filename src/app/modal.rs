use std::{cell::RefCell, rc::Rc};

use shared::{ModalController, RegistrationStore, SubmitOutcome};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, HtmlInputElement};

use crate::{element_by_id, listen, query_all, query_selector, report, store::PageStorage};

struct ModalView {
    modal: HtmlElement,
    event: HtmlElement,
    name: HtmlInputElement,
    email: HtmlInputElement,
    message: HtmlElement,
}

impl ModalView {
    fn find() -> Result<ModalView, JsValue> {
        Ok(ModalView {
            modal: element_by_id("modal")?,
            event: element_by_id("modal-event")?,
            name: element_by_id("modal-name")?,
            email: element_by_id("modal-email")?,
            message: element_by_id("modal-msg")?,
        })
    }

    /// Picks up whatever the user typed since the last render.
    fn read(&self, modal: &mut ModalController) {
        modal.name = self.name.value();
        modal.email = self.email.value();
    }

    fn render(&self, modal: &ModalController) -> Result<(), JsValue> {
        self.modal
            .set_attribute("aria-hidden", if modal.is_open() { "false" } else { "true" })?;

        if modal.is_open() {
            self.event.set_text_content(Some(modal.event()));
            self.event.dataset().set("event", modal.event())?;
        }

        self.name.set_value(&modal.name);
        self.email.set_value(&modal.email);
        self.message.set_text_content(Some(&modal.message));

        Ok(())
    }
}

/// Shared state of every modal handler.
#[derive(Clone)]
struct ModalBinding {
    modal: Rc<RefCell<ModalController>>,
    view: Rc<ModalView>,
}

impl ModalBinding {
    /// Syncs fields from the page, applies `action` and renders the result.
    fn update<F>(&self, action: F)
    where
        F: FnOnce(&mut ModalController),
    {
        let mut modal = self.modal.borrow_mut();

        self.view.read(&mut modal);
        action(&mut *modal);
        report(self.view.render(&modal));
    }
}

/// Wires the registration dialog and every `[data-open]` control that opens it.
pub fn install_modal(store: Rc<RegistrationStore<Rc<PageStorage>>>) -> Result<(), JsValue> {
    let view = ModalView::find()?;
    let close_control = query_selector::<Element>(".modal-close")?;
    let submit_control = element_by_id::<Element>("modal-submit")?;

    let binding = ModalBinding {
        modal: Rc::new(RefCell::new(ModalController::new())),
        view: Rc::new(view),
    };

    for control in query_all("[data-open]")? {
        let binding = binding.clone();
        let requested = control.clone();

        listen(&control, "click", move |_| {
            let event = requested
                .dyn_ref::<HtmlElement>()
                .and_then(|element| element.dataset().get("open"))
                .unwrap_or_default();

            binding.update(|modal| modal.open(&event));
            report(binding.view.name.focus());
        })?;
    }

    {
        let binding = binding.clone();
        listen(&close_control, "click", move |_| {
            binding.update(ModalController::close);
        })?;
    }

    {
        let modal_element = binding.view.modal.clone();
        let scrim = JsValue::from(modal_element.clone());
        let binding = binding.clone();
        listen(&modal_element, "click", move |event| {
            let on_scrim = event
                .target()
                .map_or(false, |target| JsValue::from(target) == scrim);

            binding.update(|modal| {
                modal.click(on_scrim);
            });
        })?;
    }

    listen(&submit_control, "click", move |_| {
        binding.update(|modal| match modal.submit(&*store) {
            Ok(SubmitOutcome::Registered(registration)) => {
                log::info!("registered for {:?}", registration.event);
            }
            Ok(SubmitOutcome::Incomplete) => log::debug!("modal submitted incomplete"),
            Err(err) => log::error!("registration not stored: {err}"),
        });
    })?;

    Ok(())
}
