//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (observers, timers, scrolling)
//! from section components. Each keeps its arithmetic in plain functions
//! so it can be tested without a DOM.

pub mod glyph;
pub mod particles;
pub mod reveal;
pub mod scroll;
pub mod typing;
