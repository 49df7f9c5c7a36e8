//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `contact` delivers the contact form to the intake endpoint. It is the only
//! outbound call the page makes.

pub mod contact;
