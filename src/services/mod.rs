//! Service layer.
//!
//! DESIGN
//! ======
//! Services hold the intake rules and outbound integrations; routes only
//! translate between HTTP and these functions.

pub mod contact;
