//! Contact intake route: receives the landing page form and emails it.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::services::contact::{ContactPayload, ContactRequest, ContactRequestError, render_contact_email};
use crate::state::AppState;

pub const SUCCESS_MESSAGE: &str = "Заявка успешно отправлена";

#[derive(Debug, thiserror::Error)]
pub enum ContactRouteError {
    #[error("{0}")]
    Body(String),
    #[error(transparent)]
    Invalid(#[from] ContactRequestError),
    #[error("contact delivery not configured")]
    NotConfigured,
    #[error("email delivery failed")]
    Delivery,
}

pub(crate) fn contact_error_to_status(err: &ContactRouteError) -> StatusCode {
    match err {
        ContactRouteError::Body(_) | ContactRouteError::Invalid(_) => StatusCode::BAD_REQUEST,
        ContactRouteError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
        ContactRouteError::Delivery => StatusCode::BAD_GATEWAY,
    }
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

impl IntoResponse for ContactRouteError {
    fn into_response(self) -> Response {
        error_response(contact_error_to_status(&self), self.to_string())
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/contact`: validate the form and forward it to the owner's inbox.
pub async fn submit_contact(
    State(state): State<AppState>,
    body: Result<Json<ContactPayload>, JsonRejection>,
) -> Result<Json<serde_json::Value>, ContactRouteError> {
    let Json(payload) = body.map_err(|e| ContactRouteError::Body(e.body_text()))?;
    let request = ContactRequest::try_from(payload)?;

    let Some(mailer) = &state.mailer else {
        tracing::warn!("contact request dropped, delivery not configured");
        return Err(ContactRouteError::NotConfigured);
    };

    let email = render_contact_email(&request);
    if let Err(e) = mailer.deliver(&email).await {
        tracing::error!(error = %e, "contact email delivery failed");
        return Err(ContactRouteError::Delivery);
    }

    tracing::info!("contact request delivered");
    Ok(Json(json!({ "success": true, "message": SUCCESS_MESSAGE })))
}

/// `OPTIONS /api/contact`: bare preflight; CORS headers come from the router layer.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Any other method on `/api/contact`.
pub async fn method_not_allowed() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed".to_owned())
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
