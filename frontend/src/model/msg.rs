use crate::model::forms::{ContactForm, FormKind, NewsletterForm};
use crate::model::toast::{ToastId, ToastKind};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

/// Where a key press happened, as far as the page behaviors care.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOrigin {
    /// An `<input>` inside one of the handled forms.
    FormInput(FormKind),
    Other,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Pointer moved; `client_y` is relative to the viewport top.
    PointerMoved { client_y: f64 },
    Scrolled(ScrollMetrics),
    HamburgerClicked,
    NavLinkClicked,
    /// Same-page anchor clicked. `target_found` says whether `href` resolved to an element.
    AnchorClicked { href: String, target_found: bool },
    KeyPressed { key: String, origin: KeyOrigin },
    LoadMoreClicked,
    ContactSubmitted(ContactForm),
    NewsletterSubmitted(NewsletterForm),
    Notify { message: String, kind: ToastKind },
    /// The visible window of a toast ran out.
    ToastExpired { id: ToastId },
    /// The exit transition of a toast finished.
    ToastExitFinished { id: ToastId },
}
