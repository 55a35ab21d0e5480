use yew::prelude::*;

use crate::model::posts::AdditionalPost;

#[derive(Properties, PartialEq)]
pub struct BlogCardProps {
    pub post: AdditionalPost,
    pub comments_id: String,
}

/// Inner markup of an injected `<article class="blog-card">`.
#[function_component(BlogCardBody)]
pub fn blog_card_body(props: &BlogCardProps) -> Html {
    let BlogCardProps { post, comments_id } = props;
    let comments_open = use_state(|| false);

    let toggle_comments = {
        let comments_open = comments_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            comments_open.set(!*comments_open);
        })
    };

    let comments_style = if *comments_open {
        "display: block;"
    } else {
        "display: none;"
    };

    html! {
        <>
            <div class="blog-card-image">
                <img src={post.image.clone()} alt={post.title.clone()} />
            </div>
            <div class="blog-card-content">
                <div class="blog-meta">
                    <span class="blog-category">{post.category.clone()}</span>
                    <span class="blog-date">{post.date.clone()}</span>
                </div>
                <h3 class="blog-title">{post.title.clone()}</h3>
                <p class="blog-excerpt">{post.excerpt.clone()}</p>
                <div class="blog-actions">
                    <a href="#" class="read-more">
                        {"Read More "}
                        <i class="fas fa-arrow-right"></i>
                    </a>
                    <button
                        class={classes!("comment-toggle", (*comments_open).then(|| "active"))}
                        data-comments={comments_id.clone()}
                        onclick={toggle_comments}
                    >
                        <i class="fas fa-comments"></i>
                        <span class="comment-count">{post.comment_count.to_string()}</span>
                        {" Comments"}
                    </button>
                </div>
                <div
                    id={format!("comments-{}", comments_id)}
                    class={classes!("comments-section", (*comments_open).then(|| "show"))}
                    style={comments_style}
                ></div>
            </div>
        </>
    }
}
