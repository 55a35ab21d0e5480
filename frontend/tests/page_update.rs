use page_behavior::config::BehaviorConfig;
use page_behavior::model::forms::{ContactForm, FormKind, NewsletterForm};
use page_behavior::model::posts::additional_posts;
use page_behavior::model::toast::{Toast, ToastKind};
use page_behavior::model::{update, Effect, KeyOrigin, Msg, PageState, ScrollMetrics};

fn page() -> PageState {
    PageState::new(BehaviorConfig::default(), additional_posts().unwrap())
}

fn shown_toasts(effects: &[Effect]) -> Vec<&Toast> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::ShowToast(toast) => Some(toast),
            _ => None,
        })
        .collect()
}

fn full_contact() -> ContactForm {
    ContactForm {
        name: "Grace".to_string(),
        email: "grace@example.com".to_string(),
        subject: "Compilers".to_string(),
        message: "Loved the typography post.".to_string(),
    }
}

#[test]
fn navbar_boundary_is_inclusive_at_fifty() {
    let (state, effects) = update(page(), Msg::PointerMoved { client_y: 50.0 });
    assert_eq!(effects, vec![Effect::SetNavbarVisible(true)]);
    assert_eq!(state.navbar_visible(), Some(true));

    let (state, effects) = update(state, Msg::PointerMoved { client_y: 51.0 });
    assert_eq!(effects, vec![Effect::SetNavbarVisible(false)]);
    assert_eq!(state.navbar_visible(), Some(false));
}

#[test]
fn hamburger_toggle_parity() {
    let mut state = page();
    let initial = state.menu_open();

    for clicks in 1..=6 {
        let (next, effects) = update(state, Msg::HamburgerClicked);
        state = next;
        let expect_flipped = clicks % 2 == 1;
        assert_eq!(state.menu_open(), initial ^ expect_flipped);
        assert_eq!(effects, vec![Effect::SetMenuOpen(state.menu_open())]);
    }
    assert_eq!(state.menu_open(), initial);
}

#[test]
fn nav_link_click_closes_menu() {
    let (state, _) = update(page(), Msg::HamburgerClicked);
    assert!(state.menu_open());

    let (state, effects) = update(state, Msg::NavLinkClicked);
    assert!(!state.menu_open());
    assert_eq!(effects, vec![Effect::SetMenuOpen(false)]);
}

#[test]
fn anchor_scrolls_once_only_when_target_exists() {
    let (state, effects) = update(
        page(),
        Msg::AnchorClicked {
            href: "#about".to_string(),
            target_found: true,
        },
    );
    let scrolls: Vec<_> = effects
        .iter()
        .filter(|effect| matches!(effect, Effect::ScrollIntoView { .. }))
        .collect();
    assert_eq!(
        scrolls,
        vec![&Effect::ScrollIntoView {
            selector: "#about".to_string()
        }]
    );

    let (_, effects) = update(
        state,
        Msg::AnchorClicked {
            href: "#nowhere".to_string(),
            target_found: false,
        },
    );
    assert!(effects.is_empty());
}

#[test]
fn contact_with_any_field_empty_shows_one_error_and_keeps_form() {
    let blankers: [fn(&mut ContactForm); 4] = [
        |form: &mut ContactForm| form.name.clear(),
        |form: &mut ContactForm| form.email.clear(),
        |form: &mut ContactForm| form.subject.clear(),
        |form: &mut ContactForm| form.message.clear(),
    ];

    for blank in blankers {
        let mut form = full_contact();
        blank(&mut form);

        let (_, effects) = update(page(), Msg::ContactSubmitted(form));
        let toasts = shown_toasts(&effects);
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind, ToastKind::Error);
        assert_eq!(toasts[0].message, "Please fill in all fields");
        assert!(!effects.contains(&Effect::ResetForm(FormKind::Contact)));
    }
}

#[test]
fn complete_contact_shows_one_success_and_resets() {
    let (_, effects) = update(page(), Msg::ContactSubmitted(full_contact()));
    let toasts = shown_toasts(&effects);
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].kind, ToastKind::Success);
    assert_eq!(
        effects.iter().filter(|e| **e == Effect::ResetForm(FormKind::Contact)).count(),
        1
    );
}

#[test]
fn newsletter_validation() {
    let (state, effects) = update(page(), Msg::NewsletterSubmitted(NewsletterForm::default()));
    assert_eq!(shown_toasts(&effects)[0].kind, ToastKind::Error);
    assert!(!effects.contains(&Effect::ResetForm(FormKind::Newsletter)));

    let form = NewsletterForm {
        email: "reader@example.com".to_string(),
    };
    let (_, effects) = update(state, Msg::NewsletterSubmitted(form));
    assert_eq!(
        shown_toasts(&effects)[0].message,
        "Successfully subscribed to newsletter!"
    );
    assert!(effects.contains(&Effect::ResetForm(FormKind::Newsletter)));
}

#[test]
fn load_more_injects_three_cards_once() {
    let (state, effects) = update(page(), Msg::LoadMoreClicked);
    assert_eq!(effects.len(), 2);
    let cards = match &effects[0] {
        Effect::InjectCards(cards) => cards,
        other => panic!("expected cards, got {:?}", other),
    };
    let titles: Vec<&str> = cards.iter().map(|card| card.post.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "The Art of Code Review",
            "Typography in Digital Design",
            "Time Management for Developers",
        ]
    );
    assert_eq!(effects[1], Effect::HideLoadMore);
    assert!(state.posts_loaded());

    let (_, effects) = update(state, Msg::LoadMoreClicked);
    assert!(effects.is_empty());
}

#[test]
fn load_more_with_empty_catalog_keeps_trigger() {
    let state = PageState::new(BehaviorConfig::default(), Vec::new());
    let (state, effects) = update(state, Msg::LoadMoreClicked);
    assert!(effects.is_empty());
    assert!(!state.posts_loaded());
}

#[test]
fn injected_cards_get_distinct_comment_ids() {
    let (_, effects) = update(page(), Msg::LoadMoreClicked);
    let Effect::InjectCards(cards) = &effects[0] else {
        panic!("expected cards first");
    };
    let ids: Vec<&str> = cards.iter().map(|card| card.comments_id.as_str()).collect();
    assert_eq!(ids, vec!["new-1", "new-2", "new-3"]);
}

#[test]
fn second_notification_replaces_the_first() {
    let (state, first) = update(
        page(),
        Msg::Notify {
            message: "first".to_string(),
            kind: ToastKind::Success,
        },
    );
    let first_id = shown_toasts(&first)[0].id;

    let (state, second) = update(
        state,
        Msg::Notify {
            message: "second".to_string(),
            kind: ToastKind::Error,
        },
    );
    assert_eq!(second[0], Effect::DiscardToast(first_id));
    let current = state.toasts().current().unwrap();
    assert_eq!(current.message, "second");
    assert_eq!(current.kind, ToastKind::Error);

    // The first toast's timers fire late and must leave the second alone.
    let (state, effects) = update(state, Msg::ToastExpired { id: first_id });
    assert!(effects.is_empty());
    let (state, effects) = update(state, Msg::ToastExitFinished { id: first_id });
    assert!(effects.is_empty());
    assert_eq!(state.toasts().current().unwrap().message, "second");
}

#[test]
fn progress_is_clamped() {
    let metrics = |scroll_y| {
        Msg::Scrolled(ScrollMetrics {
            scroll_y,
            document_height: 2000.0,
            viewport_height: 1000.0,
        })
    };

    let (state, effects) = update(page(), metrics(2500.0));
    assert_eq!(state.progress(), 100.0);
    assert!(effects.contains(&Effect::SetProgress(100.0)));

    let (state, effects) = update(state, metrics(-30.0));
    assert_eq!(state.progress(), 0.0);
    assert!(effects.contains(&Effect::SetProgress(0.0)));
}

#[test]
fn enter_in_contact_input_submits_contact() {
    let (state, effects) = update(
        page(),
        Msg::KeyPressed {
            key: "Enter".to_string(),
            origin: KeyOrigin::FormInput(FormKind::Contact),
        },
    );
    assert_eq!(effects, vec![Effect::SubmitForm(FormKind::Contact)]);
    assert!(state.toasts().current().is_none());
}
