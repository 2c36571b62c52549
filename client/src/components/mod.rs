//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Section components render the static content tables, each gating its
//! entrance animation on its own visibility latch. Page chrome (navigation,
//! back-to-top, cursor trail, toasts) reads and writes shared state from
//! Leptos context providers.

pub mod about_section;
pub mod back_to_top;
pub mod binary_cursor;
pub mod blog_section;
pub mod contact_section;
pub mod hero_section;
pub mod icon;
pub mod nav_bar;
pub mod projects_section;
pub mod section_header;
pub mod skills_section;
pub mod timeline_section;
pub mod toaster;
