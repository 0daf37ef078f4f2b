use contracts::domain::common::envelope::FALLBACK_ERROR;

/// Toast text for transport failures
pub const NETWORK_ERROR_MESSAGE: &str = "Unable to connect to server. Please try again.";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server error {status}: {message}")]
    Server { status: u16, message: String },
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("failed to encode request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Text shown to the user in a toast.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => NETWORK_ERROR_MESSAGE.to_string(),
            ApiError::Server { message, .. } => message.clone(),
            ApiError::Decode(_) | ApiError::Encode(_) => FALLBACK_ERROR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message() {
        assert_eq!(
            ApiError::Network("TypeError: Failed to fetch".into()).user_message(),
            NETWORK_ERROR_MESSAGE
        );
        let server = ApiError::Server {
            status: 404,
            message: "Equipment not found".into(),
        };
        assert_eq!(server.user_message(), "Equipment not found");
        assert_eq!(
            ApiError::Decode("expected value".into()).user_message(),
            "API request failed"
        );
    }
}
