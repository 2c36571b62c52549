//! Local UI state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`contact`, `toast`, `visibility`, `ui`) so
//! section components depend on small focused models. Nothing here is
//! persisted; everything lives for one page visit.

pub mod contact;
pub mod toast;
pub mod ui;
pub mod visibility;
