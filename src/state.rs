//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! The site is stateless apart from the optional contact mailer.

use std::sync::Arc;

use crate::services::contact::ContactMailer;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    /// Contact delivery. `None` if mail env vars are not configured.
    pub mailer: Option<Arc<dyn ContactMailer>>,
}

impl AppState {
    #[must_use]
    pub fn new(mailer: Option<Arc<dyn ContactMailer>>) -> Self {
        Self { mailer }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
