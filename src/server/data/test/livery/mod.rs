use crate::{
    model::livery::{LiveryStatus, Manufacturer, MsfsVersion},
    server::{
        data::livery::LiveryRepository,
        error::AppError,
        model::livery::{CreateLiveryParams, LiveryFilter, ReviewVerdict, UpdateLiveryParams},
    },
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_approved_filtered;
mod get_by_id;
mod get_pending;
mod increment_download_count;
mod set_review;
mod update;

fn create_params(user_id: i32) -> CreateLiveryParams {
    CreateLiveryParams {
        user_id,
        manufacturer: Manufacturer::Airbus,
        aircraft: "A350-900".to_string(),
        brand: "iniBuilds".to_string(),
        livery_name: "Lufthansa D-AIXA".to_string(),
        description: Some("Factory fresh".to_string()),
        msfs_version: Some(MsfsVersion::Msfs2024),
        install_method: None,
        screenshots: vec!["http://localhost:8080/files/screenshots/a.png".to_string()],
        file_url: "http://localhost:8080/files/liveries/a.zip".to_string(),
        file_key: "liveries/a.zip".to_string(),
        file_name: Some("a.zip".to_string()),
        file_size: Some(2048),
    }
}
