//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The site is a single scrolling page; `home` composes every section in
//! order and `not_found` catches any other path.

pub mod home;
pub mod not_found;
