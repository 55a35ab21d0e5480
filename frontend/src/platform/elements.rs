use web_sys::{Document, Element, HtmlElement, HtmlFormElement};

use crate::error::Result;
use crate::model::forms::FormKind;
use crate::platform::dom::{optional, report, required};

pub struct MenuHandles {
    pub hamburger: HtmlElement,
    pub menu: HtmlElement,
}

pub struct LoadMoreHandles {
    pub button: HtmlElement,
    pub grid: Element,
}

/// Every element the page behaviors hold on to, looked up once at mount.
///
/// A feature whose required elements are missing is reported and left out;
/// the others still install.
pub struct PageElements {
    pub navbar: Option<HtmlElement>,
    pub menu: Option<MenuHandles>,
    pub load_more: Option<LoadMoreHandles>,
    pub contact_form: Option<HtmlFormElement>,
    pub newsletter_form: Option<HtmlFormElement>,
    pub hero_title: Option<HtmlElement>,
    pub hero_visual: Option<HtmlElement>,
}

impl PageElements {
    pub fn locate(document: &Document) -> Self {
        Self {
            navbar: report("sliding navbar", locate_navbar(document)),
            menu: report("mobile menu", locate_menu(document)),
            load_more: report("load more", locate_load_more(document)),
            contact_form: report(
                "contact form",
                required(document, FormKind::Contact.selector()),
            ),
            newsletter_form: report(
                "newsletter form",
                required(document, FormKind::Newsletter.selector()),
            ),
            hero_title: report("typing effect", required(document, ".hero-title")),
            hero_visual: optional(document, ".hero-visual"),
        }
    }

    pub fn form(&self, kind: FormKind) -> Option<&HtmlFormElement> {
        match kind {
            FormKind::Contact => self.contact_form.as_ref(),
            FormKind::Newsletter => self.newsletter_form.as_ref(),
        }
    }
}

fn locate_navbar(document: &Document) -> Result<HtmlElement> {
    // Older markup only carries the class.
    required(document, "#navbar").or_else(|_| required(document, ".navbar"))
}

fn locate_menu(document: &Document) -> Result<MenuHandles> {
    Ok(MenuHandles {
        hamburger: required(document, ".hamburger")?,
        menu: required(document, ".nav-menu")?,
    })
}

fn locate_load_more(document: &Document) -> Result<LoadMoreHandles> {
    Ok(LoadMoreHandles {
        button: required(document, ".load-more-btn")?,
        grid: required(document, ".blog-grid")?,
    })
}
