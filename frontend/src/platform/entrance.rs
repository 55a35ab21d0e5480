use std::cell::RefCell;
use std::rc::Rc;

use log::info;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{
    Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::config::BehaviorConfig;
use crate::error::Result;
use crate::model::reveal::RevealTracker;
use crate::platform::dom::{query_all, set_style};

const REVEAL_KEY: &str = "data-reveal-key";

/// Hides the content cards and fades each one in the first time it scrolls into view.
pub fn install(document: &Document, config: &BehaviorConfig) -> Result<IntersectionObserver> {
    let tracker = Rc::new(RefCell::new(RevealTracker::new()));

    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            let target = entry.target();
            let Some(key) = target
                .get_attribute(REVEAL_KEY)
                .and_then(|key| key.parse::<u32>().ok())
            else {
                continue;
            };

            if tracker.borrow_mut().mark_revealed(key, entry.is_intersecting()) {
                if let Some(element) = target.dyn_ref::<HtmlElement>() {
                    set_style(element, "opacity", "1");
                    set_style(element, "transform", "translateY(0)");
                }
                observer.unobserve(&target);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    options.set_root_margin(config.reveal_root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    let elements = query_all(document, config.reveal_selectors)?;
    for (key, element) in elements.iter().enumerate() {
        let Some(element) = element.dyn_ref::<HtmlElement>() else {
            continue;
        };
        element.set_attribute(REVEAL_KEY, &key.to_string())?;
        set_style(element, "opacity", "0");
        set_style(element, "transform", "translateY(30px)");
        set_style(element, "transition", "opacity 0.6s ease, transform 0.6s ease");
        observer.observe(element);
    }
    info!("watching {} elements for entrance", elements.len());

    Ok(observer)
}
