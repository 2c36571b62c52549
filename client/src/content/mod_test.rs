use super::about::{HOBBIES, JOURNEY, STRENGTHS};
use super::blog::{BLOG_POSTS, format_display_date};
use super::profile::{CONTACT_INFO, NAV_ITEMS, PROFILE, QUICK_ACTIONS, QuickActionKind, SOCIAL_LINKS};
use super::projects::PROJECTS;
use super::skills::SKILL_CATEGORIES;
use super::timeline::{TIMELINE, TimelineKind};
use super::*;

// =============================================================
// Required fields
// =============================================================

#[test]
fn projects_have_required_fields() {
    assert_eq!(PROJECTS.len(), 4);
    for project in PROJECTS {
        assert!(!project.title.is_empty());
        assert!(!project.description.is_empty());
        assert!(!project.category.is_empty());
        assert!(!project.tech_stack.is_empty(), "{} has no tech stack", project.title);
        assert!(!project.features.is_empty(), "{} has no features", project.title);
        assert!(project.code_url.starts_with("https://"));
    }
}

#[test]
fn only_hosted_projects_have_demo_links() {
    let demos: Vec<_> = PROJECTS.iter().filter_map(|p| p.demo_url).collect();
    assert_eq!(demos, vec!["https://saivaraprasadmuvvala.github.io/rock-paper-scissors"]);
}

#[test]
fn skill_categories_alternate_accents() {
    assert_eq!(SKILL_CATEGORIES.len(), 4);
    for (i, category) in SKILL_CATEGORIES.iter().enumerate() {
        let expected = if i % 2 == 0 { Accent::Primary } else { Accent::Accent };
        assert_eq!(category.accent, expected, "{}", category.title);
        assert!(!category.skills.is_empty());
    }
}

#[test]
fn timeline_events_have_tags_and_dates() {
    for event in TIMELINE {
        assert!(!event.title.is_empty());
        assert!(!event.date.is_empty());
        assert!(!event.tags.is_empty());
    }
}

#[test]
fn about_content_is_populated() {
    assert_eq!(STRENGTHS.len(), 4);
    assert_eq!(HOBBIES.len(), 5);
    assert_eq!(JOURNEY.len(), 3);
    assert!(!PROFILE.name.is_empty());
}

// =============================================================
// Blog dates
// =============================================================

#[test]
fn blog_dates_render_short_month_format() {
    let rendered: Vec<String> = BLOG_POSTS.iter().map(|post| post.display_date()).collect();
    assert_eq!(rendered, vec!["Jan 15, 2024", "Jan 10, 2024", "Jan 5, 2024", "Dec 28, 2023"]);
}

#[test]
fn blog_posts_are_newest_first() {
    for pair in BLOG_POSTS.windows(2) {
        assert!(pair[0].published > pair[1].published);
    }
}

#[test]
fn format_display_date_drops_day_padding() {
    let date = time::macros::date!(2025 - 03 - 07);
    assert_eq!(format_display_date(date), "Mar 7, 2025");
}

// =============================================================
// Timeline badges
// =============================================================

#[test]
fn timeline_kind_labels_are_lowercase() {
    assert_eq!(TimelineKind::Education.label(), "education");
    assert_eq!(TimelineKind::Experience.label(), "experience");
    assert_eq!(TimelineKind::Milestone.label(), "milestone");
}

#[test]
fn timeline_kind_badges_differ() {
    assert!(TimelineKind::Education.badge_class().contains("blue"));
    assert!(TimelineKind::Experience.badge_class().contains("green"));
    assert!(TimelineKind::Milestone.badge_class().contains("purple"));
}

// =============================================================
// Links and icons
// =============================================================

#[test]
fn external_links_open_in_new_tab() {
    let email = CONTACT_INFO.iter().find(|l| l.label == "Email").unwrap();
    assert!(!email.opens_new_tab());
    let github = CONTACT_INFO.iter().find(|l| l.label == "GitHub").unwrap();
    assert!(github.opens_new_tab());
    let linkedin = SOCIAL_LINKS.iter().find(|l| l.icon == Icon::Linkedin).unwrap();
    assert!(linkedin.opens_new_tab());
}

#[test]
fn resume_action_is_a_download() {
    let resume = QUICK_ACTIONS
        .iter()
        .find(|a| a.kind == QuickActionKind::Download)
        .unwrap();
    assert_eq!(resume.href, PROFILE.resume_path);
    assert!(resume.href.ends_with(".pdf"));
}

#[test]
fn nav_items_are_anchors() {
    assert_eq!(NAV_ITEMS.first().map(|n| n.anchor), Some("#home"));
    assert!(NAV_ITEMS.iter().all(|n| n.anchor.starts_with('#')));
}

#[test]
fn icon_class_appends_size() {
    assert_eq!(Icon::Github.class(""), "icon icon-github");
    assert_eq!(Icon::ChevronUp.class("w-6 h-6"), "icon icon-chevron-up w-6 h-6");
}

#[test]
fn accent_classes_match_colour() {
    assert_eq!(Accent::Primary.text_class(), "text-primary");
    assert!(Accent::Accent.badge_class().starts_with("bg-accent/10"));
}
