use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlElement, HtmlInputElement, IntersectionObserver, KeyboardEvent,
    MouseEvent, Node, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};
use yew::AppHandle;

use crate::components::blog_card::BlogCardBody;
use crate::config::BehaviorConfig;
use crate::error::Result;
use crate::model::forms::{ContactForm, FormKind, NewsletterForm};
use crate::model::posts::additional_posts;
use crate::model::scroll::{parallax_transform, progress_width};
use crate::model::toast::ToastKind;
use crate::model::{update, Effect, KeyOrigin, Msg, PageState, ScrollMetrics};
use crate::platform::dom::{self, body, create, field_value, listen, query_all, report, set_style};
use crate::platform::elements::PageElements;
use crate::platform::toast::ActiveToast;
use crate::platform::typing::TypingEffect;
use crate::platform::{cards, entrance, images};

const NAV_SHOWN_TOP: &str = "0";
const NAV_HIDDEN_TOP: &str = "-100px";
const NAV_SOLID_BACKGROUND: &str = "rgba(10, 10, 10, 0.98)";
const NAV_TRANSLUCENT_BACKGROUND: &str = "rgba(10, 10, 10, 0.95)";
const PROGRESS_BAR_CSS: &str = "position: fixed; top: 0; left: 0; width: 0%; height: 3px; \
    background: linear-gradient(90deg, var(--accent-color), #a855f7); \
    z-index: 10001; transition: width 0.1s ease;";

/// Owns the page's element handles and state, and every behavior wired to them.
pub struct PageController {
    window: Window,
    document: Document,
    config: BehaviorConfig,
    elements: PageElements,
    state: RefCell<PageState>,
    progress_bar: RefCell<Option<HtmlElement>>,
    toast: RefCell<Option<ActiveToast>>,
    cards: RefCell<Vec<AppHandle<BlogCardBody>>>,
    typing: RefCell<Option<TypingEffect>>,
    observer: RefCell<Option<IntersectionObserver>>,
}

impl PageController {
    /// Looks up the page's elements and installs every behavior that has what it needs.
    pub fn mount(config: BehaviorConfig) -> Result<Rc<Self>> {
        let window = dom::window()?;
        let document = dom::document(&window)?;
        let elements = PageElements::locate(&document);
        let catalog = report("load more", additional_posts()).unwrap_or_default();

        let controller = Rc::new(Self {
            state: RefCell::new(PageState::new(config.clone(), catalog)),
            window,
            document,
            config,
            elements,
            progress_bar: RefCell::new(None),
            toast: RefCell::new(None),
            cards: RefCell::new(Vec::new()),
            typing: RefCell::new(None),
            observer: RefCell::new(None),
        });

        Self::install(&controller)?;
        info!("page behaviors mounted");
        Ok(controller)
    }

    /// Runs `msg` through the page state and applies the resulting effects.
    pub fn dispatch(this: &Rc<Self>, msg: Msg) {
        debug!("dispatch {:?}", msg);
        let effects = {
            let mut state = this.state.borrow_mut();
            let (next, effects) = update(std::mem::take(&mut *state), msg);
            *state = next;
            effects
        };
        for effect in effects {
            if let Err(err) = Self::apply(this, effect) {
                warn!("{}", err);
            }
        }
    }

    /// Shows a toast. A toast already on screen is replaced.
    pub fn notify(this: &Rc<Self>, message: impl Into<String>, kind: ToastKind) {
        Self::dispatch(
            this,
            Msg::Notify {
                message: message.into(),
                kind,
            },
        );
    }

    fn install(this: &Rc<Self>) -> Result<()> {
        Self::install_navigation(this)?;
        Self::install_anchors(this)?;
        Self::install_keyboard(this)?;
        Self::install_scroll(this)?;
        Self::install_load_more(this)?;
        Self::install_forms(this)?;

        match entrance::install(&this.document, &this.config) {
            Ok(observer) => *this.observer.borrow_mut() = Some(observer),
            Err(err) => warn!("{}; entrance animations disabled", err),
        }
        match images::install(&this.document) {
            Ok(count) => debug!("fading in {} images", count),
            Err(err) => warn!("{}; image fade-in disabled", err),
        }
        if let Some(title) = &this.elements.hero_title {
            let typing = TypingEffect::new(
                title.clone(),
                this.config.typing_start_delay_ms,
                this.config.typing_char_interval_ms,
            );
            typing.start();
            *this.typing.borrow_mut() = Some(typing);
        }
        Ok(())
    }

    fn install_navigation(this: &Rc<Self>) -> Result<()> {
        if this.elements.navbar.is_some() {
            let controller = this.clone();
            listen(&this.document, "mousemove", move |e: MouseEvent| {
                Self::dispatch(
                    &controller,
                    Msg::PointerMoved {
                        client_y: f64::from(e.client_y()),
                    },
                );
            })?;
        }

        if let Some(menu) = &this.elements.menu {
            let controller = this.clone();
            listen(&menu.hamburger, "click", move |_: MouseEvent| {
                Self::dispatch(&controller, Msg::HamburgerClicked);
            })?;

            for link in query_all(&this.document, ".nav-link")? {
                let controller = this.clone();
                listen(&link, "click", move |_: MouseEvent| {
                    Self::dispatch(&controller, Msg::NavLinkClicked);
                })?;
            }
        }
        Ok(())
    }

    fn install_anchors(this: &Rc<Self>) -> Result<()> {
        for anchor in query_all(&this.document, "a[href^=\"#\"]")? {
            let controller = this.clone();
            let link = anchor.clone();
            listen(&anchor, "click", move |e: MouseEvent| {
                e.prevent_default();
                let href = link.get_attribute("href").unwrap_or_default();
                // A bare `#` is not a valid selector; treat it like a missing target.
                let target_found = matches!(controller.document.query_selector(&href), Ok(Some(_)));
                Self::dispatch(&controller, Msg::AnchorClicked { href, target_found });
            })?;
        }
        Ok(())
    }

    fn install_keyboard(this: &Rc<Self>) -> Result<()> {
        let controller = this.clone();
        listen(&this.document, "keydown", move |e: KeyboardEvent| {
            let origin = controller.key_origin(&e);
            let key = e.key();
            if key == "Enter" && origin != KeyOrigin::Other {
                // Submit through our handler only, not the browser's implicit submission too.
                e.prevent_default();
            }
            Self::dispatch(&controller, Msg::KeyPressed { key, origin });
        })
    }

    fn install_scroll(this: &Rc<Self>) -> Result<()> {
        match create::<HtmlElement>(&this.document, "div") {
            Ok(bar) => {
                bar.set_class_name("scroll-progress");
                bar.style().set_css_text(PROGRESS_BAR_CSS);
                body(&this.document)?.append_child(&bar)?;
                *this.progress_bar.borrow_mut() = Some(bar);
            }
            Err(err) => warn!("{}; scroll progress disabled", err),
        }

        let controller = this.clone();
        listen(&this.window, "scroll", move |_: Event| {
            match controller.scroll_metrics() {
                Ok(metrics) => Self::dispatch(&controller, Msg::Scrolled(metrics)),
                Err(err) => warn!("{}", err),
            }
        })
    }

    fn install_load_more(this: &Rc<Self>) -> Result<()> {
        if this.state.borrow().catalog().is_empty() {
            warn!("no additional posts to load; load more disabled");
            return Ok(());
        }
        if let Some(load_more) = &this.elements.load_more {
            let controller = this.clone();
            listen(&load_more.button, "click", move |_: MouseEvent| {
                Self::dispatch(&controller, Msg::LoadMoreClicked);
            })?;
        }
        Ok(())
    }

    fn install_forms(this: &Rc<Self>) -> Result<()> {
        for kind in [FormKind::Contact, FormKind::Newsletter] {
            if let Some(form) = this.elements.form(kind) {
                let controller = this.clone();
                listen(form, "submit", move |e: Event| {
                    e.prevent_default();
                    Self::submit(&controller, kind);
                })?;
            }
        }
        Ok(())
    }

    fn submit(this: &Rc<Self>, kind: FormKind) {
        let Some(form) = this.elements.form(kind) else {
            return;
        };
        let read = |field: &str| {
            let value = field_value(form, field);
            if value.is_none() {
                warn!("{} has no field named `{}`", kind.selector(), field);
            }
            value
        };
        let msg = match kind {
            FormKind::Contact => Msg::ContactSubmitted(ContactForm::from_fields(read)),
            FormKind::Newsletter => Msg::NewsletterSubmitted(NewsletterForm::from_fields(read)),
        };
        Self::dispatch(this, msg);
    }

    fn key_origin(&self, e: &KeyboardEvent) -> KeyOrigin {
        let Some(input) = e
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        else {
            return KeyOrigin::Other;
        };
        let Ok(Some(enclosing)) = input.closest("form") else {
            return KeyOrigin::Other;
        };
        for kind in [FormKind::Contact, FormKind::Newsletter] {
            if let Some(form) = self.elements.form(kind) {
                let form: &Node = form.as_ref();
                if enclosing.is_same_node(Some(form)) {
                    return KeyOrigin::FormInput(kind);
                }
            }
        }
        KeyOrigin::Other
    }

    fn scroll_metrics(&self) -> Result<ScrollMetrics> {
        let document_height = body(&self.document)?.offset_height();
        Ok(ScrollMetrics {
            scroll_y: self.window.page_y_offset()?,
            document_height: f64::from(document_height),
            viewport_height: self.window.inner_height()?.as_f64().unwrap_or_default(),
        })
    }

    fn apply(this: &Rc<Self>, effect: Effect) -> Result<()> {
        match effect {
            Effect::SetNavbarVisible(visible) => {
                if let Some(navbar) = &this.elements.navbar {
                    let top = if visible { NAV_SHOWN_TOP } else { NAV_HIDDEN_TOP };
                    set_style(navbar, "top", top);
                }
            }
            Effect::SetNavbarSolid(solid) => {
                if let Some(navbar) = &this.elements.navbar {
                    let background = if solid {
                        NAV_SOLID_BACKGROUND
                    } else {
                        NAV_TRANSLUCENT_BACKGROUND
                    };
                    set_style(navbar, "background", background);
                }
            }
            Effect::SetMenuOpen(open) => {
                if let Some(menu) = &this.elements.menu {
                    menu.hamburger.class_list().toggle_with_force("active", open)?;
                    menu.menu.class_list().toggle_with_force("active", open)?;
                }
            }
            Effect::ScrollIntoView { selector } => {
                if let Some(target) = dom::optional::<Element>(&this.document, &selector) {
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    options.set_block(ScrollLogicalPosition::Start);
                    target.scroll_into_view_with_scroll_into_view_options(&options);
                }
            }
            Effect::InjectCards(injected) => {
                if let Some(load_more) = &this.elements.load_more {
                    let apps = cards::inject(
                        &this.document,
                        &load_more.grid,
                        injected,
                        this.config.card_enter_delay_ms,
                    )?;
                    this.cards.borrow_mut().extend(apps);
                }
            }
            Effect::HideLoadMore => {
                if let Some(load_more) = &this.elements.load_more {
                    set_style(&load_more.button, "display", "none");
                }
            }
            Effect::SubmitForm(kind) => Self::submit(this, kind),
            Effect::ResetForm(kind) => {
                if let Some(form) = this.elements.form(kind) {
                    form.reset();
                }
            }
            Effect::ShowToast(toast) => {
                let mut active = ActiveToast::render(&this.document, &toast)?;
                active.slide_in_after(this.config.toast_enter_delay_ms);
                let controller = this.clone();
                let id = toast.id;
                active.schedule(this.config.toast_visible_ms, move || {
                    Self::dispatch(&controller, Msg::ToastExpired { id });
                });
                if let Some(stale) = this.toast.borrow_mut().replace(active) {
                    stale.remove();
                }
            }
            Effect::DiscardToast(id) | Effect::RemoveToast(id) => {
                let active = this.toast.borrow_mut().take();
                match active {
                    Some(active) if active.id == id => active.remove(),
                    other => *this.toast.borrow_mut() = other,
                }
            }
            Effect::HideToast(id) => {
                let mut slot = this.toast.borrow_mut();
                if let Some(active) = slot.as_mut().filter(|active| active.id == id) {
                    active.slide_out();
                    let controller = this.clone();
                    active.schedule(this.config.toast_exit_ms, move || {
                        Self::dispatch(&controller, Msg::ToastExitFinished { id });
                    });
                }
            }
            Effect::SetProgress(percent) => {
                if let Some(bar) = this.progress_bar.borrow().as_ref() {
                    set_style(bar, "width", &progress_width(percent));
                }
            }
            Effect::SetParallax(offset) => {
                if let Some(hero) = &this.elements.hero_visual {
                    set_style(hero, "transform", &parallax_transform(offset));
                }
            }
        }
        Ok(())
    }
}
