use crate::{
    client::{
        api::helper::{get, parse_response, put, send_request, serialize_json},
        model::error::ApiError,
    },
    model::{
        contact::ContactDto,
        livery::{LiveryDto, ReviewDecisionDto},
    },
};

pub async fn get_contacts() -> Result<Vec<ContactDto>, ApiError> {
    let response = send_request(get("/api/admin/contacts")).await?;
    parse_response(response).await
}

pub async fn get_pending_liveries() -> Result<Vec<LiveryDto>, ApiError> {
    let response = send_request(get("/api/admin/liveries/pending")).await?;
    parse_response(response).await
}

pub async fn review_livery(id: i32, decision: ReviewDecisionDto) -> Result<LiveryDto, ApiError> {
    let url = format!("/api/admin/liveries/{}/review", id);
    let body = serialize_json(&decision)?;
    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}
