use crate::{
    client::{
        api::helper::{
            delete, get, parse_empty_response, parse_response, post, put, send_request,
            serialize_json,
        },
        model::error::ApiError,
    },
    model::livery::{
        CreateLiveryDto, CreatedLiveryDto, DownloadDto, LiveryDto, LiveryFilterDto,
        UpdateLiveryDto,
    },
};

pub async fn get_liveries(filter: &LiveryFilterDto) -> Result<Vec<LiveryDto>, ApiError> {
    let query = filter.to_query_string();
    let url = if query.is_empty() {
        "/api/liveries".to_string()
    } else {
        format!("/api/liveries?{}", query)
    };

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn get_livery(id: i32) -> Result<LiveryDto, ApiError> {
    let url = format!("/api/liveries/{}", id);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn get_my_liveries() -> Result<Vec<LiveryDto>, ApiError> {
    let response = send_request(get("/api/user/liveries")).await?;
    parse_response(response).await
}

pub async fn create_livery(payload: CreateLiveryDto) -> Result<CreatedLiveryDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post("/api/liveries").body(body)).await?;
    parse_response(response).await
}

pub async fn update_livery(id: i32, payload: UpdateLiveryDto) -> Result<LiveryDto, ApiError> {
    let url = format!("/api/liveries/{}", id);
    let body = serialize_json(&payload)?;
    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

pub async fn delete_livery(id: i32) -> Result<(), ApiError> {
    let url = format!("/api/liveries/{}", id);
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}

/// Counts a download and returns where the archive can be fetched.
pub async fn download_livery(id: i32) -> Result<DownloadDto, ApiError> {
    let url = format!("/api/liveries/{}/download", id);
    let response = send_request(post(&url)).await?;
    parse_response(response).await
}
