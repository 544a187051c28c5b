use reqwest::StatusCode;

/// Failures at the chat transport seam.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("missing API key: set the {env_var} environment variable")]
    MissingApiKey { env_var: String },

    #[error("failed to connect to API endpoint {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("API request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("failed to decode API response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl ChatError {
    /// Coarse category used in log records.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::MissingApiKey { .. } => "configuration",
            Self::Connect { .. } | Self::Status { .. } | Self::Decode(_) => "transport",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_message() {
        let err = ChatError::MissingApiKey {
            env_var: "API_KEY".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "missing API key: set the API_KEY environment variable"
        );
        assert_eq!(err.kind(), "configuration");
    }

    #[test]
    fn test_status_kind() {
        let err = ChatError::Status {
            status: StatusCode::UNAUTHORIZED,
            body: "bad key".to_string(),
        };
        assert_eq!(err.kind(), "transport");
        assert!(err.to_string().contains("401"));
    }
}
