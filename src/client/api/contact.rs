use crate::{
    client::{
        api::helper::{parse_response, post, send_request, serialize_json},
        model::error::ApiError,
    },
    model::contact::{ContactDto, SubmitContactDto},
};

pub async fn submit_contact(payload: SubmitContactDto) -> Result<ContactDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post("/api/contact").body(body)).await?;
    parse_response(response).await
}
