use wasm_bindgen::JsCast;
use web_sys::{File, FormData, HtmlInputElement};

use crate::{
    client::{
        api::helper::{parse_response, post_form, send_request},
        model::error::ApiError,
    },
    model::upload::UploadedFileDto,
};

fn js_error(context: &str) -> ApiError {
    ApiError {
        status: 400,
        message: context.to_string(),
    }
}

/// Files currently selected in the `<input type="file">` with the given element ID.
pub fn selected_files(input_id: &str) -> Vec<File> {
    let Some(input) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(input_id))
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
    else {
        return Vec::new();
    };

    let Some(files) = input.files() else {
        return Vec::new();
    };

    (0..files.length()).filter_map(|i| files.get(i)).collect()
}

async fn upload(url: &str, file: &File) -> Result<UploadedFileDto, ApiError> {
    let form = FormData::new().map_err(|_| js_error("Failed to create upload form"))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| js_error("Failed to attach file to upload form"))?;

    let response = send_request(post_form(url, form)).await?;
    parse_response(response).await
}

pub async fn upload_screenshot(file: &File) -> Result<UploadedFileDto, ApiError> {
    upload("/api/upload-screenshot", file).await
}

pub async fn upload_livery_file(file: &File) -> Result<UploadedFileDto, ApiError> {
    upload("/api/upload-livery", file).await
}
