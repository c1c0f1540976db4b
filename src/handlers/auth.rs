use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tower_sessions::Session;
use bcrypt::{hash, verify};
use uuid::Uuid;
use crate::errors::{AppError, AppResult, StoreError};
use crate::models::{LoginForm, PublicUser, RegisterForm, User};
use crate::services::StorageService;
use super::{json_body, AppState};

/// Session key holding the id of the logged-in user.
pub const USER_SESSION_KEY: &str = "user_session";

/// Resolves the user behind the current session.
pub async fn current_user(session: &Session, storage: &StorageService) -> AppResult<User> {
    let user_id = session
        .get::<u64>(USER_SESSION_KEY)
        .await?
        .ok_or_else(|| AppError::Auth("Not authenticated".into()))?;

    storage
        .get_user(user_id)
        .await
        .ok_or(AppError::Store(StoreError::UserNotFound(user_id)))
}

// A fresh session id on every login, so an id handed out earlier never
// becomes authenticated.
async fn log_in(session: &Session, user: &User) -> AppResult<()> {
    session.cycle_id().await?;
    session.insert(USER_SESSION_KEY, user.id).await?;
    tracing::info!("User {} logged in", user.username);
    Ok(())
}

// bcrypt is CPU-bound, keep it off the async workers
async fn hash_password(password: String, cost: u32) -> AppResult<String> {
    let hashed = tokio::task::spawn_blocking(move || hash(password.as_bytes(), cost)).await??;
    Ok(hashed)
}

async fn verify_password(password: String, password_hash: String) -> AppResult<bool> {
    let matches = tokio::task::spawn_blocking(move || verify(password, &password_hash)).await??;
    Ok(matches)
}

#[axum::debug_handler]
pub async fn handle_login(
    State((storage, _)): State<AppState>,
    session: Session,
    payload: Result<Json<LoginForm>, JsonRejection>,
) -> AppResult<Json<PublicUser>> {
    let login_form = json_body(payload, "Invalid login request")?;
    // Registration stores names trimmed
    let username = login_form.username.trim();
    tracing::info!("Login attempt for user: {}", username);

    let user = storage
        .get_user_by_name(username)
        .await
        .ok_or_else(|| {
            tracing::info!("User not found: {}", username);
            AppError::Auth("Username does not exist".into())
        })?;

    if !verify_password(login_form.password, user.password_hash.clone()).await? {
        tracing::info!("Invalid password for user: {}", username);
        return Err(AppError::Auth("Password is incorrect".into()));
    }

    log_in(&session, &user).await?;
    Ok(Json(PublicUser::from(&user)))
}

pub async fn handle_register(
    State((storage, config)): State<AppState>,
    session: Session,
    payload: Result<Json<RegisterForm>, JsonRejection>,
) -> AppResult<Response> {
    let register_form = json_body(payload, "Invalid registration request")?;
    register_form
        .validate(config.auth.min_password_length)
        .map_err(AppError::Validation)?;

    let username = register_form.username.trim();
    if storage.get_user_by_name(username).await.is_some() {
        return Err(StoreError::UsernameTaken(username.to_string()).into());
    }

    let password_hash = hash_password(register_form.password, config.auth.bcrypt_cost).await?;
    let user = storage.create_user(username, password_hash, false).await?;
    tracing::info!("Registered user {} with id {}", user.username, user.id);

    log_in(&session, &user).await?;
    Ok((StatusCode::CREATED, Json(PublicUser::from(&user))).into_response())
}

/// Creates a throwaway account and logs into it.
pub async fn handle_guest(
    State((storage, config)): State<AppState>,
    session: Session,
) -> AppResult<Json<PublicUser>> {
    if !config.auth.allow_guest {
        return Err(AppError::Forbidden("Guest access is disabled".into()));
    }

    let username = format!("guest-{}", Uuid::new_v4().simple());
    let password_hash = hash_password(Uuid::new_v4().to_string(), config.auth.bcrypt_cost).await?;
    let user = storage.create_user(&username, password_hash, true).await?;
    tracing::info!("Created guest user {}", user.username);

    log_in(&session, &user).await?;
    Ok(Json(PublicUser::from(&user)))
}

pub async fn handle_logout(session: Session) -> AppResult<StatusCode> {
    if let Some(user_id) = session.remove::<u64>(USER_SESSION_KEY).await? {
        tracing::info!("User {} logged out", user_id);
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn serve_current_user(
    State((storage, _)): State<AppState>,
    session: Session,
) -> AppResult<Json<PublicUser>> {
    let user = current_user(&session, &storage).await?;
    Ok(Json(PublicUser::from(&user)))
}
