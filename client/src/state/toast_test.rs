use super::*;

fn notice(title: &'static str) -> Notice {
    Notice { title, description: None, variant: ToastVariant::Default }
}

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(notice("a"));
    let b = state.push(notice("b"));
    assert!(b > a);
    assert_eq!(state.toasts.len(), 2);
}

#[test]
fn push_copies_notice_text() {
    let mut state = ToastState::default();
    state.push(Notice {
        title: "Failed to send message",
        description: Some("Something went wrong. Please try again later."),
        variant: ToastVariant::Destructive,
    });
    let toast = &state.toasts[0];
    assert_eq!(toast.title, "Failed to send message");
    assert_eq!(toast.description.as_deref(), Some("Something went wrong. Please try again later."));
    assert_eq!(toast.variant, ToastVariant::Destructive);
}

#[test]
fn push_evicts_oldest_beyond_limit() {
    let mut state = ToastState::default();
    let first = state.push(notice("1"));
    for title in ["2", "3", "4"] {
        state.push(notice(title));
    }
    assert_eq!(state.toasts.len(), TOAST_LIMIT);
    assert!(state.toasts.iter().all(|t| t.id != first));
    assert_eq!(state.toasts.last().map(|t| t.title.as_str()), Some("4"));
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let a = state.push(notice("a"));
    let b = state.push(notice("b"));
    state.dismiss(a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, b);
    state.dismiss(999);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn default_variant_is_default() {
    assert_eq!(ToastVariant::default(), ToastVariant::Default);
}
