use log::debug;

use crate::model::forms::{contact_outcome, newsletter_outcome, FormKind, SubmitOutcome};
use crate::model::posts::InjectedCard;
use crate::model::scroll::{parallax_offset, scroll_percent};
use crate::model::toast::ToastKind;
use crate::model::{Effect, KeyOrigin, Msg, PageState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: PageState, msg: Msg) -> (PageState, Vec<Effect>) {
    let effects = match msg {
        Msg::PointerMoved { client_y } => {
            let visible = client_y <= state.config().nav_reveal_zone_px;
            if state.navbar_visible == Some(visible) {
                Vec::new()
            } else {
                state.navbar_visible = Some(visible);
                vec![Effect::SetNavbarVisible(visible)]
            }
        }
        Msg::Scrolled(metrics) => {
            let mut effects = Vec::with_capacity(3);
            let solid = metrics.scroll_y > state.config().nav_solid_after_px;
            if state.navbar_solid != Some(solid) {
                state.navbar_solid = Some(solid);
                effects.push(Effect::SetNavbarSolid(solid));
            }

            state.progress = scroll_percent(
                metrics.scroll_y,
                metrics.document_height,
                metrics.viewport_height,
            );
            effects.push(Effect::SetProgress(state.progress));
            effects.push(Effect::SetParallax(parallax_offset(
                metrics.scroll_y,
                state.config().parallax_rate,
            )));
            effects
        }
        Msg::HamburgerClicked => {
            state.menu_open = !state.menu_open;
            vec![Effect::SetMenuOpen(state.menu_open)]
        }
        Msg::NavLinkClicked => close_menu(&mut state),
        Msg::AnchorClicked { href, target_found } => {
            if target_found {
                vec![Effect::ScrollIntoView { selector: href }]
            } else {
                debug!("anchor {} has no target, ignoring", href);
                Vec::new()
            }
        }
        Msg::KeyPressed { key, origin } => match (key.as_str(), origin) {
            ("Escape", _) => close_menu(&mut state),
            ("Enter", KeyOrigin::FormInput(kind)) => vec![Effect::SubmitForm(kind)],
            _ => Vec::new(),
        },
        Msg::LoadMoreClicked => {
            // With nothing to inject the trigger stays visible.
            if state.posts_loaded || state.catalog().is_empty() {
                Vec::new()
            } else {
                state.posts_loaded = true;
                let catalog = state.catalog().to_vec();
                let cards = catalog
                    .into_iter()
                    .map(|post| InjectedCard {
                        comments_id: state.comment_ids.next_id(),
                        post,
                    })
                    .collect();
                vec![Effect::InjectCards(cards), Effect::HideLoadMore]
            }
        }
        Msg::ContactSubmitted(form) => {
            let outcome = contact_outcome(&form);
            submitted(&mut state, FormKind::Contact, outcome)
        }
        Msg::NewsletterSubmitted(form) => {
            let outcome = newsletter_outcome(&form);
            submitted(&mut state, FormKind::Newsletter, outcome)
        }
        Msg::Notify { message, kind } => notify(&mut state, message, kind),
        Msg::ToastExpired { id } => {
            if state.toasts.begin_exit(id) {
                vec![Effect::HideToast(id)]
            } else {
                Vec::new()
            }
        }
        Msg::ToastExitFinished { id } => match state.toasts.clear(id) {
            Some(_) => vec![Effect::RemoveToast(id)],
            None => Vec::new(),
        },
    };

    (state, effects)
}

fn close_menu(state: &mut PageState) -> Vec<Effect> {
    state.menu_open = false;
    vec![Effect::SetMenuOpen(false)]
}

fn submitted(state: &mut PageState, form: FormKind, outcome: SubmitOutcome) -> Vec<Effect> {
    let mut effects = notify(state, outcome.message.to_string(), outcome.kind);
    if outcome.reset {
        effects.push(Effect::ResetForm(form));
    }
    effects
}

fn notify(state: &mut PageState, message: String, kind: ToastKind) -> Vec<Effect> {
    let (toast, evicted) = state.toasts.offer(message, kind);
    let mut effects = Vec::with_capacity(2);
    if let Some(old) = evicted {
        effects.push(Effect::DiscardToast(old.id));
    }
    effects.push(Effect::ShowToast(toast));
    effects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ScrollMetrics;

    fn scrolled(scroll_y: f64) -> Msg {
        Msg::Scrolled(ScrollMetrics {
            scroll_y,
            document_height: 3000.0,
            viewport_height: 1000.0,
        })
    }

    #[test]
    fn navbar_writes_only_on_change() {
        let state = PageState::default();
        let (state, effects) = update(state, Msg::PointerMoved { client_y: 10.0 });
        assert_eq!(effects, vec![Effect::SetNavbarVisible(true)]);

        let (state, effects) = update(state, Msg::PointerMoved { client_y: 20.0 });
        assert!(effects.is_empty());

        let (_, effects) = update(state, Msg::PointerMoved { client_y: 400.0 });
        assert_eq!(effects, vec![Effect::SetNavbarVisible(false)]);
    }

    #[test]
    fn navbar_turns_solid_past_threshold() {
        let (state, effects) = update(PageState::default(), scrolled(100.0));
        assert_eq!(effects[0], Effect::SetNavbarSolid(false));

        let (state, effects) = update(state, scrolled(101.0));
        assert_eq!(effects[0], Effect::SetNavbarSolid(true));
        assert_eq!(state.navbar_solid(), Some(true));
    }

    #[test]
    fn scroll_reports_progress_and_parallax() {
        let (state, effects) = update(PageState::default(), scrolled(1000.0));
        assert_eq!(state.progress(), 50.0);
        assert!(effects.contains(&Effect::SetProgress(50.0)));
        assert!(effects.contains(&Effect::SetParallax(-500.0)));
    }

    #[test]
    fn escape_closes_even_when_closed() {
        let key = |k: &str| Msg::KeyPressed {
            key: k.to_string(),
            origin: KeyOrigin::Other,
        };
        let (state, effects) = update(PageState::default(), key("Escape"));
        assert!(!state.menu_open());
        assert_eq!(effects, vec![Effect::SetMenuOpen(false)]);

        let (state, _) = update(state, Msg::HamburgerClicked);
        let (state, effects) = update(state, key("Escape"));
        assert!(!state.menu_open());
        assert_eq!(effects, vec![Effect::SetMenuOpen(false)]);

        let (_, effects) = update(state, key("a"));
        assert!(effects.is_empty());
    }

    #[test]
    fn enter_in_form_input_submits_that_form() {
        let (_, effects) = update(
            PageState::default(),
            Msg::KeyPressed {
                key: "Enter".to_string(),
                origin: KeyOrigin::FormInput(FormKind::Newsletter),
            },
        );
        assert_eq!(effects, vec![Effect::SubmitForm(FormKind::Newsletter)]);

        let (_, effects) = update(
            PageState::default(),
            Msg::KeyPressed {
                key: "Enter".to_string(),
                origin: KeyOrigin::Other,
            },
        );
        assert!(effects.is_empty());
    }

    #[test]
    fn toast_timers_walk_through_exit() {
        let (state, effects) = update(
            PageState::default(),
            Msg::Notify {
                message: "hi".into(),
                kind: ToastKind::Success,
            },
        );
        let id = match &effects[0] {
            Effect::ShowToast(toast) => toast.id,
            other => panic!("unexpected effect {:?}", other),
        };

        let (state, effects) = update(state, Msg::ToastExpired { id });
        assert_eq!(effects, vec![Effect::HideToast(id)]);
        let (state, effects) = update(state, Msg::ToastExitFinished { id });
        assert_eq!(effects, vec![Effect::RemoveToast(id)]);
        assert!(state.toasts().current().is_none());
    }
}
