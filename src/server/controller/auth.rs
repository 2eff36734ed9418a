use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{
            LoginDto, LoginResponseDto, PasswordResetDto, PasswordResetRequestDto, RegisterDto,
            RegisteredDto, UserDto, VerifyEmailDto,
        },
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, BearerToken},
            session::AuthSession,
        },
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

fn auth_service(state: &AppState) -> AuthService<'_> {
    AuthService::new(&state.db, &state.tokens, state.admin_email.as_deref())
}

/// Register a new account.
///
/// # Returns
/// - `201 Created` - Account created; an email verification token was issued
/// - `400 Bad Request` - Invalid input, or the username or email is taken
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = RegisteredDto),
        (status = 400, description = "Invalid input or duplicate username/email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = auth_service(&state)
        .register(&payload.username, &payload.email, payload.password)
        .await?;

    Ok((StatusCode::CREATED, Json(RegisteredDto { user_id: user.id })))
}

/// Log in with username or email and password.
///
/// Opens a server-side session, stores its token in the cookie session and returns a JWT
/// bound to the same session for clients that authenticate with a bearer header.
///
/// # Returns
/// - `200 OK` - The user and a signed JWT
/// - `401 Unauthorized` - Invalid username or password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = LoginResponseDto),
        (status = 401, description = "Invalid username or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let outcome = auth_service(&state)
        .login(&payload.username_or_email, payload.password)
        .await?;

    AuthSession::new(&session)
        .set_session_token(&outcome.session.token)
        .await?;

    Ok((
        StatusCode::OK,
        Json(LoginResponseDto {
            user: outcome.user.into_dto(),
            token: outcome.jwt,
        }),
    ))
}

/// Log out everywhere.
///
/// Deletes every server-side session of the current user and clears the cookie session.
/// Succeeds for anonymous callers too.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Logged out"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    session: Session,
    bearer: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .with_bearer(&state.tokens, &bearer)
        .current_user()
        .await?;

    if let Some(user) = user {
        auth_service(&state).logout(user.id).await?;
    }

    AuthSession::new(&session).clear().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the currently logged in user, or `null`.
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user or null", body = Option<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
    bearer: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .with_bearer(&state.tokens, &bearer)
        .current_user()
        .await?;

    Ok((StatusCode::OK, Json(user.map(|u| u.into_dto()))))
}

/// Confirm an email address with the token issued at registration.
#[utoipa::path(
    post,
    path = "/api/auth/verify-email",
    tag = AUTH_TAG,
    request_body = VerifyEmailDto,
    responses(
        (status = 204, description = "Email verified"),
        (status = 400, description = "Invalid or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn verify_email(
    State(state): State<AppState>,
    Json(payload): Json<VerifyEmailDto>,
) -> Result<impl IntoResponse, AppError> {
    auth_service(&state).verify_email(&payload.token).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Request a password reset token.
///
/// Always answers 204 so the endpoint cannot be used to discover registered emails.
#[utoipa::path(
    post,
    path = "/api/auth/password-reset/request",
    tag = AUTH_TAG,
    request_body = PasswordResetRequestDto,
    responses(
        (status = 204, description = "Request accepted"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn request_password_reset(
    State(state): State<AppState>,
    Json(payload): Json<PasswordResetRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    auth_service(&state)
        .request_password_reset(&payload.email)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Set a new password using a reset token. Signs the user out of every session.
#[utoipa::path(
    post,
    path = "/api/auth/password-reset",
    tag = AUTH_TAG,
    request_body = PasswordResetDto,
    responses(
        (status = 204, description = "Password changed"),
        (status = 400, description = "Invalid token or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_password(
    State(state): State<AppState>,
    Json(payload): Json<PasswordResetDto>,
) -> Result<impl IntoResponse, AppError> {
    auth_service(&state)
        .reset_password(&payload.token, payload.new_password)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
