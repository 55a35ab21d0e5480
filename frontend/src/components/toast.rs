use yew::prelude::*;

use crate::model::toast::ToastKind;

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: String,
    pub kind: ToastKind,
}

#[function_component(ToastContent)]
pub fn toast_content(props: &ToastProps) -> Html {
    html! {
        <div class="notification-content" style="display: flex; align-items: center; gap: 0.5rem;">
            <i class={classes!("fas", props.kind.icon())}></i>
            <span>{props.message.clone()}</span>
        </div>
    }
}
