mod auth;
mod projects;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use crate::config::Config;
use crate::errors::AppError;
use crate::services::StorageService;

pub use auth::{
    current_user, handle_guest, handle_login, handle_logout, handle_register, serve_current_user,
    USER_SESSION_KEY,
};
pub use projects::{
    create_project, generate_configuration, get_flow, get_project, get_rationale, get_templates,
    list_projects, preview_configuration, update_configuration,
};

/// State shared by every handler.
pub type AppState = (StorageService, Config);

// Helper function to turn a body rejection into a 400 with a readable message.
// Oversized bodies keep their 413.
pub(crate) fn json_body<T>(
    payload: Result<Json<T>, JsonRejection>,
    context: &str,
) -> Result<T, AppError> {
    payload.map(|Json(value)| value).map_err(|rejection| {
        tracing::warn!("{}: {}", context, rejection.body_text());
        let message = format!("{}: {}", context, rejection.body_text());
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(message)
        } else {
            AppError::Validation(message)
        }
    })
}
