use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Location of a file accepted by one of the upload endpoints.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UploadedFileDto {
    /// Public URL the file can be downloaded from.
    pub url: String,
    /// Object storage key, passed back when creating a livery.
    pub key: String,
}
