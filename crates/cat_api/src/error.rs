use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection failed, or the body could not be read
    #[error("Network Error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP error! status: {0}")]
    Status(StatusCode),

    /// Body was not a JSON array
    #[error("Decode Error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FetchError::Status(code) => Some(*code),
            FetchError::Transport(e) => e.status(),
            FetchError::Decode(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_carries_code() {
        let err = FetchError::Status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(
            err.to_string(),
            "HTTP error! status: 500 Internal Server Error"
        );
    }

    #[test]
    fn test_decode_error_has_no_status() {
        let json_err = serde_json::from_str::<Vec<serde_json::Value>>("{")
            .unwrap_err();
        let err = FetchError::from(json_err);
        assert!(matches!(err, FetchError::Decode(_)));
        assert_eq!(err.status(), None);
    }
}
