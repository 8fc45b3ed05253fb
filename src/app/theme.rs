use std::{cell::RefCell, rc::Rc};

use shared::{PageSettings, ThemeController};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

use crate::{document, element_by_id, listen, report, store::PageStorage};

fn apply(
    theme: &ThemeController,
    toggle: &HtmlElement,
    background_variable: &str,
) -> Result<(), JsValue> {
    let root = document()
        .document_element()
        .ok_or("document has no root element")?
        .dyn_into::<HtmlElement>()?;

    root.style()
        .set_property(background_variable, theme.background())?;
    toggle.set_attribute("aria-pressed", theme.pressed())?;

    Ok(())
}

/// Restores the persisted theme and wires the toggle control.
pub fn install_theme(settings: &PageSettings) -> Result<(), JsValue> {
    let toggle = element_by_id::<HtmlElement>("themeToggle")?;
    let storage = PageStorage::shared();
    let key = settings.theme_key.clone();
    let background_variable = settings.background_variable.clone();

    let mut theme = ThemeController::new(settings);

    if theme.restore(&storage, &key) {
        apply(&theme, &toggle, &background_variable)?;
        log::debug!("dark theme restored");
    }

    let theme = Rc::new(RefCell::new(theme));
    let control = toggle.clone();

    listen(&control, "click", move |_| {
        let mut theme = theme.borrow_mut();

        match theme.toggle(&storage, &key) {
            Ok(dark) => log::info!("dark theme {}", if dark { "on" } else { "off" }),
            Err(err) => log::error!("theme not persisted: {err}"),
        }

        report(apply(&theme, &toggle, &background_variable));
    })?;

    Ok(())
}
