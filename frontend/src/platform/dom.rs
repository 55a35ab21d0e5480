use log::{error, warn};
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, EventTarget, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlTextAreaElement, Window,
};

use crate::error::{PageError, Result};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(PageError::NoDocument)
}

pub fn document(window: &Window) -> Result<Document> {
    window.document().ok_or(PageError::NoDocument)
}

pub fn body(document: &Document) -> Result<HtmlElement> {
    document.body().ok_or_else(|| PageError::MissingElement {
        selector: "body".to_string(),
    })
}

/// Looks up an element the calling feature cannot work without.
pub fn required<T: JsCast>(document: &Document, selector: &str) -> Result<T> {
    let element = document
        .query_selector(selector)?
        .ok_or_else(|| PageError::MissingElement {
            selector: selector.to_string(),
        })?;
    element
        .dyn_into::<T>()
        .map_err(|_| PageError::UnexpectedElement {
            selector: selector.to_string(),
            expected: std::any::type_name::<T>(),
        })
}

/// Looks up an element whose absence is fine. Invalid selectors count as absent.
pub fn optional<T: JsCast>(document: &Document, selector: &str) -> Option<T> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<T>().ok())
}

/// Unwraps a required lookup, reporting the disabled feature when it failed.
pub fn report<T>(feature: &str, found: Result<T>) -> Option<T> {
    match found {
        Ok(value) => Some(value),
        Err(err) => {
            error!("{}; {} disabled", err, feature);
            None
        }
    }
}

pub fn create<T: JsCast>(document: &Document, tag: &str) -> Result<T> {
    document
        .create_element(tag)?
        .dyn_into::<T>()
        .map_err(|_| PageError::UnexpectedElement {
            selector: tag.to_string(),
            expected: std::any::type_name::<T>(),
        })
}

pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        warn!("could not set {} on element: {}", property, PageError::from(err));
    }
}

/// Attaches a listener that lives as long as the page.
pub fn listen<E>(target: &EventTarget, event: &str, handler: impl FnMut(E) + 'static) -> Result<()>
where
    E: FromWasmAbi + 'static,
{
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

/// Current value of the named input or textarea inside `form`.
pub fn field_value(form: &HtmlFormElement, name: &str) -> Option<String> {
    let element = form
        .query_selector(&format!("[name=\"{}\"]", name))
        .ok()
        .flatten()?;
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    element
        .dyn_ref::<HtmlTextAreaElement>()
        .map(|area| area.value())
}
