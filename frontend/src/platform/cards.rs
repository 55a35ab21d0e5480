use gloo_timers::callback::Timeout;
use log::info;
use web_sys::{Document, Element, HtmlElement};
use yew::AppHandle;

use crate::components::blog_card::{BlogCardBody, BlogCardProps};
use crate::error::Result;
use crate::model::posts::InjectedCard;
use crate::platform::dom::{create, set_style};

/// Appends the cards to `grid`, hidden, and fades them in after `enter_delay_ms`.
pub fn inject(
    document: &Document,
    grid: &Element,
    cards: Vec<InjectedCard>,
    enter_delay_ms: u32,
) -> Result<Vec<AppHandle<BlogCardBody>>> {
    let mut articles = Vec::with_capacity(cards.len());
    let mut apps = Vec::with_capacity(cards.len());

    for card in cards {
        let article = create::<HtmlElement>(document, "article")?;
        article.set_class_name("blog-card");
        set_style(&article, "opacity", "0");
        set_style(&article, "transform", "translateY(30px)");
        grid.append_child(&article)?;

        let root: Element = article.clone().into();
        apps.push(
            yew::Renderer::<BlogCardBody>::with_root_and_props(
                root,
                BlogCardProps {
                    post: card.post,
                    comments_id: card.comments_id,
                },
            )
            .render(),
        );
        articles.push(article);
    }
    info!("injected {} blog cards", articles.len());

    // The transition has to start after the cards are attached or it collapses to nothing.
    Timeout::new(enter_delay_ms, move || {
        for article in &articles {
            set_style(article, "transition", "opacity 0.6s ease, transform 0.6s ease");
            set_style(article, "opacity", "1");
            set_style(article, "transform", "translateY(0)");
        }
    })
    .forget();

    Ok(apps)
}
