use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored enum column holds a value the application does not know.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to parse {field} from stored value '{value}'")]
    InvalidStoredValue {
        /// Column the value was read from
        field: &'static str,
        /// The stored value that failed to parse
        value: String,
    },

    /// A stored JSON column could not be decoded.
    #[error("Failed to decode stored JSON in {field}: {source}")]
    InvalidStoredJson {
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
