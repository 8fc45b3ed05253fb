use std::{cell::RefCell, rc::Rc};

use shared::{InlineForm, RegistrationStore, SubmitOutcome};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, HtmlInputElement};

use crate::{element_by_id, listen, query_all, report, store::PageStorage};

struct InlineFormView {
    name: HtmlInputElement,
    email: HtmlInputElement,
    event: HtmlInputElement,
    message: HtmlElement,
}

impl InlineFormView {
    fn find() -> Result<InlineFormView, JsValue> {
        Ok(InlineFormView {
            name: element_by_id("name")?,
            email: element_by_id("email")?,
            event: element_by_id("event")?,
            message: element_by_id("msg")?,
        })
    }

    fn read(&self, form: &mut InlineForm) {
        form.name = self.name.value();
        form.email = self.email.value();
        form.event = self.event.value();
    }

    fn render(&self, form: &InlineForm) {
        self.name.set_value(&form.name);
        self.email.set_value(&form.email);
        self.event.set_value(&form.event);
        self.message.set_text_content(Some(&form.message));
    }
}

/// The inline form, shared with the controls that pre-populate its event field.
#[derive(Clone)]
pub struct InlineFormBinding {
    form: Rc<RefCell<InlineForm>>,
    view: Rc<InlineFormView>,
}

impl InlineFormBinding {
    fn update<F>(&self, action: F)
    where
        F: FnOnce(&mut InlineForm),
    {
        let mut form = self.form.borrow_mut();

        self.view.read(&mut form);
        action(&mut *form);
        self.view.render(&form);
    }
}

/// Wires the submit and clear controls of the inline form.
pub fn install_inline_form(
    store: Rc<RegistrationStore<Rc<PageStorage>>>,
) -> Result<InlineFormBinding, JsValue> {
    let submit_control = element_by_id::<Element>("submitBtn")?;
    let clear_control = element_by_id::<Element>("closeBtn")?;

    let binding = InlineFormBinding {
        form: Rc::new(RefCell::new(InlineForm::new())),
        view: Rc::new(InlineFormView::find()?),
    };

    {
        let binding = binding.clone();
        listen(&submit_control, "click", move |_| {
            binding.update(|form| match form.submit(&*store) {
                Ok(SubmitOutcome::Registered(registration)) => {
                    log::info!("saved registration for {:?}", registration.event);
                }
                Ok(SubmitOutcome::Incomplete) => log::debug!("inline form submitted incomplete"),
                Err(err) => log::error!("registration not stored: {err}"),
            });
        })?;
    }

    {
        let binding = binding.clone();
        listen(&clear_control, "click", move |_| {
            binding.update(InlineForm::clear);
        })?;
    }

    Ok(binding)
}

/// Copies the event of any card's `[data-open]` control into the inline form when the pointer enters it.
pub fn install_event_prefill(binding: &InlineFormBinding) -> Result<(), JsValue> {
    for control in query_all(".card [data-open]")? {
        let binding = binding.clone();
        let requested = control.clone();

        listen(&control, "mouseenter", move |_| {
            let Some(event) = requested
                .dyn_ref::<HtmlElement>()
                .and_then(|element| element.dataset().get("open"))
            else {
                return;
            };

            binding.update(|form| form.prefill_event(&event));
        })?;
    }

    Ok(())
}
