use serde::Deserialize;
use utoipa::IntoParams;

/// Optional row limit for admin listings.
#[derive(Deserialize, IntoParams)]
pub struct LimitParam {
    /// Maximum number of rows to return (default: all).
    pub limit: Option<u64>,
}
