use std::str::FromStr;

use serde::de::DeserializeOwned;

use crate::server::error::{internal::InternalError, AppError};

/// Parses an enum stored as text in the database
///
/// # Arguments
/// - `field` - Name of the column the value came from, used in the error
/// - `value` - The stored text
///
/// # Returns
/// - `Ok(T)` - Successfully parsed value
/// - `Err(AppError::InternalErr(InvalidStoredValue))` - The value is not a
///   known variant
pub fn parse_stored<T: FromStr>(field: &'static str, value: &str) -> Result<T, AppError> {
    let result = value
        .parse::<T>()
        .map_err(|_| InternalError::InvalidStoredValue {
            field,
            value: value.to_string(),
        })?;

    Ok(result)
}

/// Decodes an optional JSON column, treating `NULL` as the type's default.
pub fn parse_stored_json<T: DeserializeOwned + Default>(
    field: &'static str,
    value: Option<&str>,
) -> Result<T, AppError> {
    let Some(value) = value else {
        return Ok(T::default());
    };

    let result = serde_json::from_str(value)
        .map_err(|source| InternalError::InvalidStoredJson { field, source })?;

    Ok(result)
}
