use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[cfg(feature = "server")]
use utoipa::{IntoParams, ToSchema};

/// Maximum number of screenshots attached to a single livery.
pub const MAX_SCREENSHOTS: usize = 4;

/// Default page size for livery listings.
pub const DEFAULT_LIST_LIMIT: u64 = 20;

/// Largest page size a client may request.
pub const MAX_LIST_LIMIT: u64 = 100;

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, Hash)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub enum Manufacturer {
    Airbus,
    Boeing,
}

impl Manufacturer {
    pub const ALL: [Manufacturer; 2] = [Manufacturer::Airbus, Manufacturer::Boeing];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Airbus => "Airbus",
            Self::Boeing => "Boeing",
        }
    }
}

impl fmt::Display for Manufacturer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Manufacturer {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Airbus" => Ok(Self::Airbus),
            "Boeing" => Ok(Self::Boeing),
            other => Err(format!("unknown manufacturer '{}'", other)),
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub enum MsfsVersion {
    #[serde(rename = "2020")]
    Msfs2020,
    #[serde(rename = "2024")]
    Msfs2024,
    Both,
}

impl MsfsVersion {
    pub const ALL: [MsfsVersion; 3] = [
        MsfsVersion::Msfs2020,
        MsfsVersion::Msfs2024,
        MsfsVersion::Both,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Msfs2020 => "2020",
            Self::Msfs2024 => "2024",
            Self::Both => "Both",
        }
    }
}

impl fmt::Display for MsfsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MsfsVersion {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "2020" => Ok(Self::Msfs2020),
            "2024" => Ok(Self::Msfs2024),
            "Both" => Ok(Self::Both),
            other => Err(format!("unknown MSFS version '{}'", other)),
        }
    }
}

/// Moderation state of an uploaded livery.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum LiveryStatus {
    Pending,
    Approved,
    Rejected,
}

impl LiveryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for LiveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LiveryStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            other => Err(format!("unknown livery status '{}'", other)),
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UploaderDto {
    pub id: i32,
    pub username: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct LiveryDto {
    pub id: i32,
    pub user_id: i32,
    pub manufacturer: Manufacturer,
    pub aircraft: String,
    pub brand: String,
    pub livery_name: String,
    pub description: Option<String>,
    pub msfs_version: Option<MsfsVersion>,
    pub install_method: Option<String>,
    pub screenshots: Vec<String>,
    pub file_url: String,
    pub file_name: Option<String>,
    pub file_size: Option<i64>,
    pub download_count: i32,
    pub status: LiveryStatus,
    pub review_notes: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub reviewed_at: Option<DateTime<Utc>>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub updated_at: DateTime<Utc>,
    /// Absent when listing the caller's own uploads.
    pub uploader: Option<UploaderDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateLiveryDto {
    pub manufacturer: Manufacturer,
    pub aircraft: String,
    pub brand: String,
    pub livery_name: String,
    pub description: Option<String>,
    pub msfs_version: Option<MsfsVersion>,
    pub install_method: Option<String>,
    #[serde(default)]
    pub screenshots: Vec<String>,
    pub file_url: String,
    pub file_key: String,
    pub file_name: Option<String>,
    pub file_size: Option<i64>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreatedLiveryDto {
    pub id: i32,
}

/// Partial update of a livery. Fields left as `None` are unchanged.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpdateLiveryDto {
    pub livery_name: Option<String>,
    pub description: Option<String>,
    pub msfs_version: Option<MsfsVersion>,
    pub install_method: Option<String>,
    pub screenshots: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct DownloadDto {
    pub file_url: String,
    pub file_name: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ReviewDecisionDto {
    pub approved: bool,
    pub notes: String,
}

/// Query parameters accepted by the public livery listing.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(IntoParams))]
pub struct LiveryFilterDto {
    pub manufacturer: Option<Manufacturer>,
    pub aircraft: Option<String>,
    pub brand: Option<String>,
    pub search: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl LiveryFilterDto {
    /// Encodes the set filters as a URL query string (without the leading `?`).
    pub fn to_query_string(&self) -> String {
        let mut query = url::form_urlencoded::Serializer::new(String::new());

        if let Some(manufacturer) = self.manufacturer {
            query.append_pair("manufacturer", manufacturer.as_str());
        }
        for (key, value) in [
            ("aircraft", &self.aircraft),
            ("brand", &self.brand),
            ("search", &self.search),
        ] {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                query.append_pair(key, value);
            }
        }
        if let Some(limit) = self.limit {
            query.append_pair("limit", &limit.to_string());
        }
        if let Some(offset) = self.offset {
            query.append_pair("offset", &offset.to_string());
        }

        query.finish()
    }
}
