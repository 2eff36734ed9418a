use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum ContactType {
    General,
    UploadError,
    Copyright,
    FeatureRequest,
}

impl ContactType {
    pub const ALL: [ContactType; 4] = [
        ContactType::General,
        ContactType::UploadError,
        ContactType::Copyright,
        ContactType::FeatureRequest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::UploadError => "upload_error",
            Self::Copyright => "copyright",
            Self::FeatureRequest => "feature_request",
        }
    }

    /// Human readable label shown in the contact form.
    pub fn label(&self) -> &'static str {
        match self {
            Self::General => "General inquiry",
            Self::UploadError => "Upload problem",
            Self::Copyright => "Copyright / stolen work report",
            Self::FeatureRequest => "Feature request",
        }
    }
}

impl fmt::Display for ContactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "general" => Ok(Self::General),
            "upload_error" => Ok(Self::UploadError),
            "copyright" => Ok(Self::Copyright),
            "feature_request" => Ok(Self::FeatureRequest),
            other => Err(format!("unknown contact type '{}'", other)),
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct SubmitContactDto {
    #[serde(rename = "type")]
    pub contact_type: ContactType,
    pub title: String,
    pub content: String,
    pub email: String,
    pub related_livery_id: Option<i32>,
    pub related_livery_info: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ContactDto {
    pub id: i32,
    #[serde(rename = "type")]
    pub contact_type: ContactType,
    pub title: String,
    pub content: String,
    pub email: String,
    pub related_livery_id: Option<i32>,
    pub related_livery_info: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}
