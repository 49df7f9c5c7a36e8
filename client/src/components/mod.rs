//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! One module per landing page section. Sections render static data from
//! `content`; only `contact_form` owns reactive state.

pub mod about;
pub mod contact_form;
pub mod contacts;
pub mod hero;
pub mod portfolio;
pub mod services;
pub mod site_footer;
pub mod site_nav;
