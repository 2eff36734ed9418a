use crate::{client::model::error::ApiError, model::api::ErrorDto};
use reqwasm::http::{Request, RequestCredentials, Response};
use serde::de::DeserializeOwned;

async fn error_from(response: Response, status: u64) -> ApiError {
    let message = if let Ok(error_dto) = response.json::<ErrorDto>().await {
        error_dto.error
    } else {
        response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string())
    };

    ApiError { status, message }
}

/// Parses a JSON success body, or the `{ "error": .. }` body of a failed request.
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status() as u64;

    if (200..300).contains(&status) {
        response.json::<T>().await.map_err(|e| ApiError {
            status: 500,
            message: format!("Failed to parse response: {}", e),
        })
    } else {
        Err(error_from(response, status).await)
    }
}

/// Same as [`parse_response`] for endpoints that answer 204 No Content.
pub async fn parse_empty_response(response: Response) -> Result<(), ApiError> {
    let status = response.status() as u64;

    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(error_from(response, status).await)
    }
}

/// Parses an endpoint that answers `null` when nothing matches, e.g. the current user.
pub async fn parse_optional_response<T: DeserializeOwned>(
    response: Response,
) -> Result<Option<T>, ApiError> {
    parse_response::<Option<T>>(response).await
}

pub fn get(url: &str) -> Request {
    Request::get(url).credentials(RequestCredentials::Include)
}

pub fn post(url: &str) -> Request {
    Request::post(url)
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/json")
}

/// POST without a content type so the browser sets the multipart boundary itself.
pub fn post_form(url: &str, form: web_sys::FormData) -> Request {
    Request::post(url)
        .credentials(RequestCredentials::Include)
        .body(form)
}

pub fn put(url: &str) -> Request {
    Request::put(url)
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/json")
}

pub fn delete(url: &str) -> Request {
    Request::delete(url).credentials(RequestCredentials::Include)
}

pub async fn send_request(request: Request) -> Result<Response, ApiError> {
    request.send().await.map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to send request: {}", e),
    })
}

pub fn serialize_json<T: serde::Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to serialize request: {}", e),
    })
}
