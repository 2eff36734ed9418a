use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        contact::{ContactDto, SubmitContactDto},
    },
    server::{
        error::AppError, model::contact::CreateContactParams, service::contact::ContactService,
        state::AppState,
    },
};

/// Tag for grouping contact endpoints in OpenAPI documentation
pub static CONTACT_TAG: &str = "contact";

/// Submit the contact form.
///
/// Public endpoint for general inquiries, upload problems, copyright reports and
/// feature requests.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = CONTACT_TAG,
    request_body = SubmitContactDto,
    responses(
        (status = 201, description = "Inquiry stored", body = ContactDto),
        (status = 400, description = "Invalid contact data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(payload): Json<SubmitContactDto>,
) -> Result<impl IntoResponse, AppError> {
    let contact = ContactService::new(&state.db)
        .submit(CreateContactParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(contact.into_dto())))
}
