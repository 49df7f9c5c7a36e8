//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State types are plain data so their transitions can be unit tested without
//! a reactive runtime; pages wrap them in `RwSignal`s.

pub mod contact;
