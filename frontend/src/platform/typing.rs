use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::{Interval, Timeout};
use log::debug;
use web_sys::HtmlElement;

use crate::model::typing::TypingSequence;

struct TypingInner {
    element: HtmlElement,
    sequence: RefCell<TypingSequence>,
    start_delay_ms: u32,
    char_interval_ms: u32,
    delay: RefCell<Option<Timeout>>,
    ticker: RefCell<Option<Interval>>,
}

/// Types a heading's text back in one character per tick.
///
/// One interval drives the whole effect; `stop` cancels it and `start`
/// replays it from an empty heading.
pub struct TypingEffect {
    inner: Rc<TypingInner>,
}

impl TypingEffect {
    /// Captures the element's current text as the text to type.
    pub fn new(element: HtmlElement, start_delay_ms: u32, char_interval_ms: u32) -> Self {
        let text = element.text_content().unwrap_or_default();
        Self {
            inner: Rc::new(TypingInner {
                element,
                sequence: RefCell::new(TypingSequence::new(text)),
                start_delay_ms,
                char_interval_ms,
                delay: RefCell::new(None),
                ticker: RefCell::new(None),
            }),
        }
    }

    pub fn start(&self) {
        self.stop();
        self.inner.sequence.borrow_mut().restart();
        self.inner.element.set_text_content(Some(""));

        let weak = Rc::downgrade(&self.inner);
        let delay = Timeout::new(self.inner.start_delay_ms, move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            // The first character lands when the delay ends, not one tick later.
            if !type_next(&inner) {
                start_ticking(&inner);
            }
        });
        *self.inner.delay.borrow_mut() = Some(delay);
    }

    pub fn stop(&self) {
        let delay = self.inner.delay.borrow_mut().take();
        let ticker = self.inner.ticker.borrow_mut().take();
        drop((delay, ticker));
    }
}

fn start_ticking(inner: &Rc<TypingInner>) {
    let weak: Weak<TypingInner> = Rc::downgrade(inner);
    let ticker = Interval::new(inner.char_interval_ms, move || {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        if type_next(&inner) {
            let ticker = inner.ticker.borrow_mut().take();
            drop(ticker);
        }
    });
    *inner.ticker.borrow_mut() = Some(ticker);
}

/// Shows the next prefix. Returns true once the whole text is on screen.
fn type_next(inner: &TypingInner) -> bool {
    let (prefix, finished) = inner.sequence.borrow_mut().advance();
    if let Some(prefix) = prefix {
        inner.element.set_text_content(Some(&prefix));
    }
    if finished {
        debug!("typing effect finished");
    }
    finished
}
