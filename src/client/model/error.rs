use std::fmt;

/// Failed API call: HTTP status plus the server's `error` message.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    pub status: u64,
    pub message: String,
}

impl ApiError {
    /// Message suitable for an inline form alert.
    ///
    /// Statuses produced before the request reaches a handler carry no useful body, so they
    /// get a fixed text instead.
    pub fn form_message(&self) -> String {
        match self.status {
            401 => "Your session has expired, please log in again".to_string(),
            413 => "File is too large (max 100 MB)".to_string(),
            _ => self.message.clone(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oversized_upload_gets_fixed_message() {
        let err = ApiError {
            status: 413,
            message: "length limit exceeded".to_string(),
        };

        assert_eq!(err.form_message(), "File is too large (max 100 MB)");
    }

    #[test]
    fn other_statuses_keep_server_message() {
        let err = ApiError {
            status: 400,
            message: "No file provided".to_string(),
        };

        assert_eq!(err.form_message(), "No file provided");
    }
}
