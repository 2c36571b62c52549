//! Networking modules for the contact relay.
//!
//! SYSTEM CONTEXT
//! ==============
//! `contact` posts contact-form submissions to the server relay and `types`
//! defines the wire schema shared with the server.

pub mod contact;
pub mod types;
