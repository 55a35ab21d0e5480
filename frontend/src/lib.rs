//! Interactive behavior for the blog's static landing page: sliding navbar,
//! mobile menu, smooth anchors, entrance animations, "load more" cards,
//! form toasts, scroll progress, hero typing effect and image fade-in.
use std::cell::RefCell;
use std::rc::Rc;

use log::info;
use web_sys::Event;

pub mod components;
pub mod config;
pub mod error;
pub mod model;
pub mod platform;

use config::BehaviorConfig;
use platform::PageController;

thread_local! {
    static PAGE: RefCell<Option<Rc<PageController>>> = RefCell::new(None);
}

/// Mounts the page behaviors now, or once the DOM has finished parsing.
pub fn run() -> error::Result<()> {
    let window = platform::dom::window()?;
    let document = platform::dom::document(&window)?;

    if still_parsing(&document.ready_state()) {
        info!("waiting for DOMContentLoaded");
        platform::dom::listen(&document, "DOMContentLoaded", |_: Event| {
            if let Err(err) = mount() {
                log::error!("page behaviors failed to mount: {}", err);
            }
        })
    } else {
        mount()
    }
}

/// `document.readyState` is `"loading"` until `DOMContentLoaded` has fired.
fn still_parsing(ready_state: &str) -> bool {
    ready_state == "loading"
}

fn mount() -> error::Result<()> {
    let controller = PageController::mount(BehaviorConfig::default())?;
    PAGE.with(|page| *page.borrow_mut() = Some(controller));
    Ok(())
}

/// Shows a toast on the mounted page. Does nothing before mount.
pub fn notify(message: &str, kind: model::toast::ToastKind) {
    PAGE.with(|page| {
        if let Some(controller) = page.borrow().as_ref() {
            PageController::notify(controller, message, kind);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::still_parsing;

    #[test]
    fn only_loading_waits_for_dom_content_loaded() {
        assert!(still_parsing("loading"));
        assert!(!still_parsing("interactive"));
        assert!(!still_parsing("complete"));
    }
}
