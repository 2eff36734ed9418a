use crate::{
    client::{
        api::helper::{
            get, parse_empty_response, parse_optional_response, parse_response, post,
            send_request, serialize_json,
        },
        model::error::ApiError,
    },
    model::user::{
        LoginDto, LoginResponseDto, PasswordResetDto, PasswordResetRequestDto, RegisterDto,
        RegisteredDto, UserDto, VerifyEmailDto,
    },
};

/// Returns the logged-in user, or `None` for anonymous visitors.
pub async fn get_user() -> Result<Option<UserDto>, ApiError> {
    let response = send_request(get("/api/auth/user")).await?;
    parse_optional_response(response).await
}

pub async fn register(payload: RegisterDto) -> Result<RegisteredDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post("/api/auth/register").body(body)).await?;
    parse_response(response).await
}

/// Logs in; the server also sets the session cookie used by every later request.
pub async fn login(payload: LoginDto) -> Result<LoginResponseDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post("/api/auth/login").body(body)).await?;
    parse_response(response).await
}

pub async fn logout() -> Result<(), ApiError> {
    let response = send_request(post("/api/auth/logout")).await?;
    parse_empty_response(response).await
}

pub async fn verify_email(token: String) -> Result<(), ApiError> {
    let body = serialize_json(&VerifyEmailDto { token })?;
    let response = send_request(post("/api/auth/verify-email").body(body)).await?;
    parse_empty_response(response).await
}

pub async fn request_password_reset(email: String) -> Result<(), ApiError> {
    let body = serialize_json(&PasswordResetRequestDto { email })?;
    let response = send_request(post("/api/auth/password-reset/request").body(body)).await?;
    parse_empty_response(response).await
}

pub async fn reset_password(token: String, new_password: String) -> Result<(), ApiError> {
    let body = serialize_json(&PasswordResetDto {
        token,
        new_password,
    })?;
    let response = send_request(post("/api/auth/password-reset").body(body)).await?;
    parse_empty_response(response).await
}
