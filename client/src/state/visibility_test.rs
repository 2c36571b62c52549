use super::*;

#[test]
fn latch_starts_hidden() {
    assert!(!VisibilityLatch::default().is_visible());
}

#[test]
fn latch_ignores_non_intersecting_reports() {
    let mut latch = VisibilityLatch::default();
    assert!(!latch.observe(false));
    assert!(!latch.observe(false));
    assert!(!latch.is_visible());
}

#[test]
fn latch_flips_once_on_first_intersection() {
    let mut latch = VisibilityLatch::default();
    assert!(!latch.observe(false));
    assert!(latch.observe(true));
    assert!(latch.is_visible());
    assert!(!latch.observe(true), "second intersection must not report a transition");
}

#[test]
fn latch_never_reverts_after_leaving_viewport() {
    let mut latch = VisibilityLatch::default();
    latch.observe(true);
    for report in [false, true, false, false] {
        latch.observe(report);
        assert!(latch.is_visible());
    }
}

#[test]
fn reveal_class_hides_until_visible() {
    assert_eq!(reveal_class(false, "animate-fade-in"), "opacity-0");
    assert_eq!(reveal_class(true, "animate-slide-in-left"), "animate-slide-in-left");
}

#[test]
fn stagger_style_steps_by_200ms() {
    assert_eq!(stagger_style(0), "animation-delay: 0ms");
    assert_eq!(stagger_style(3), "animation-delay: 600ms");
    assert_eq!(delay_style(800), "animation-delay: 800ms");
}
