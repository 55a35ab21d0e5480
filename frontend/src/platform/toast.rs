use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::{Document, Element, HtmlElement};
use yew::AppHandle;

use crate::components::toast::{ToastContent, ToastProps};
use crate::error::Result;
use crate::model::toast::{Toast, ToastId};
use crate::platform::dom::{body, create, set_style};

const OFFSCREEN: &str = "translateX(100%)";
const ONSCREEN: &str = "translateX(0)";

/// The toast element currently on the page, with its pending timers.
///
/// Dropping it cancels the timers; `remove` also takes it off the page.
pub struct ActiveToast {
    pub id: ToastId,
    host: HtmlElement,
    app: Option<AppHandle<ToastContent>>,
    timers: Vec<Timeout>,
}

impl ActiveToast {
    pub fn render(document: &Document, toast: &Toast) -> Result<Self> {
        let host = create::<HtmlElement>(document, "div")?;
        host.set_class_name(&format!("notification {}", toast.kind.class_name()));
        host.style().set_css_text(&format!(
            "position: fixed; top: 100px; right: 20px; background: {}; color: white; \
             padding: 1rem 1.5rem; border-radius: 8px; \
             box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1); z-index: 10000; \
             transform: {}; transition: transform 0.3s ease; max-width: 300px;",
            toast.kind.background(),
            OFFSCREEN,
        ));
        body(document)?.append_child(&host)?;

        let root: Element = host.clone().into();
        let app = yew::Renderer::<ToastContent>::with_root_and_props(
            root,
            ToastProps {
                message: toast.message.clone(),
                kind: toast.kind,
            },
        )
        .render();

        Ok(Self {
            id: toast.id,
            host,
            app: Some(app),
            timers: Vec::new(),
        })
    }

    pub fn slide_in_after(&mut self, delay_ms: u32) {
        let host = self.host.clone();
        self.timers.push(Timeout::new(delay_ms, move || {
            set_style(&host, "transform", ONSCREEN);
        }));
    }

    pub fn slide_out(&self) {
        set_style(&self.host, "transform", OFFSCREEN);
    }

    pub fn schedule(&mut self, delay_ms: u32, callback: impl FnOnce() + 'static) {
        self.timers.push(Timeout::new(delay_ms, callback));
    }

    pub fn remove(mut self) {
        debug!("removing toast {}", self.id);
        if let Some(app) = self.app.take() {
            app.destroy();
        }
        self.host.remove();
    }
}
