mod app;
mod draw;
mod store;

use std::{
    cell::Cell,
    pin::Pin,
    rc::Rc,
    task::{Context, Poll},
};

use app::App;
use futures::Future;
use itertools::Itertools;
use shared::{PageSettings, RegistrationStore};
use store::PageStorage;
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{Document, Element, Event, Storage, Window};

#[cfg(feature = "deploy")]
const LOG_LEVEL: log::Level = log::Level::Info;
#[cfg(not(feature = "deploy"))]
const LOG_LEVEL: log::Level = log::Level::Debug;

fn window() -> Window {
    web_sys::window().expect("no global `window` exists")
}

fn request_animation_frame(f: &Closure<dyn FnMut(f64)>) -> Result<i32, JsValue> {
    window().request_animation_frame(f.as_ref().unchecked_ref())
}

fn document() -> Document {
    window()
        .document()
        .expect("should have a document on window")
}

fn storage() -> Option<Storage> {
    window().local_storage().unwrap_or_default()
}

/// Looks up a required element by id.
fn element_by_id<T: JsCast>(id: &str) -> Result<T, JsValue> {
    document()
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("element #{id} has an unexpected type")))
}

/// Looks up the first element matching a required selector.
fn query_selector<T: JsCast>(selector: &str) -> Result<T, JsValue> {
    document()
        .query_selector(selector)?
        .ok_or_else(|| JsValue::from_str(&format!("missing element {selector}")))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("element {selector} has an unexpected type")))
}

fn query_all(selector: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = document().query_selector_all(selector)?;

    Ok((0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect_vec())
}

/// Keeps `handler` subscribed to `event` on `element` for the lifetime of the page.
fn listen<F>(element: &Element, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    element.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();

    Ok(())
}

/// Logs the error of a handler that has nowhere to return it.
fn report(result: Result<(), JsValue>) {
    if let Err(err) = result {
        log::error!("{err:?}");
    }
}

fn page_settings() -> PageSettings {
    let overrides = document()
        .body()
        .and_then(|body| body.dataset().get("enhance"));

    match overrides {
        Some(json) => PageSettings::from_json(&json).unwrap_or_else(|err| {
            log::warn!("ignoring malformed data-enhance settings: {err}");
            PageSettings::default()
        }),
        None => PageSettings::default(),
    }
}

fn registration_store(settings: &PageSettings) -> RegistrationStore<Rc<PageStorage>> {
    RegistrationStore::new(PageStorage::shared(), settings.registrations_key.clone())
}

#[wasm_bindgen(start)]
async fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(LOG_LEVEL);

    DocumentReady::new().await?;

    App::new(page_settings()).install()
}

/// Every stored registration, as an array of `{ name, email, event }` objects.
#[wasm_bindgen(js_name = storedRegistrations)]
pub fn stored_registrations() -> Result<JsValue, JsValue> {
    let registrations = registration_store(&page_settings())
        .load()
        .map_err(|err| JsValue::from_str(&err.to_string()))?;

    Ok(serde_wasm_bindgen::to_value(&registrations)?)
}

/// Stops the particle background after the frame in flight.
#[wasm_bindgen(js_name = stopParticles)]
pub fn stop_particles() {
    App::stop_particles();
}

/// Resolves once the document has been parsed.
pub struct DocumentReady {
    registered: bool,
    loaded: Rc<Cell<bool>>,
}

impl DocumentReady {
    pub fn new() -> Self {
        DocumentReady {
            registered: false,
            loaded: Rc::new(Cell::new(false)),
        }
    }
}

impl Future for DocumentReady {
    type Output = Result<(), JsValue>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if self.loaded.get() || document().ready_state() != "loading" {
            return Poll::Ready(Ok(()));
        }

        if !self.registered {
            self.registered = true;

            let waker = cx.waker().clone();
            let loaded = self.loaded.clone();
            let on_loaded_closure = Closure::wrap(Box::new(move || {
                loaded.set(true);
                waker.wake_by_ref();
            }) as Box<dyn FnMut()>);

            if let Err(err) = document().add_event_listener_with_callback(
                "DOMContentLoaded",
                on_loaded_closure.as_ref().unchecked_ref(),
            ) {
                return Poll::Ready(Err(err));
            }

            on_loaded_closure.forget();
        }

        Poll::Pending
    }
}
