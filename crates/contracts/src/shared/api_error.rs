use thiserror::Error;

/// Failure of a call to the content API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No bearer token in storage; the request was never sent
    #[error("not authenticated")]
    MissingToken,

    /// HTTP 401, or a request attempted after the session was rejected
    #[error("unauthorized")]
    Unauthorized,

    /// Any other non-success status; `body` is the raw response text
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("network error: {0}")]
    Network(String),

    /// Response did not match the expected shape
    #[error("malformed response: {0}")]
    Decode(String),

    /// Response was empty where a record was expected
    #[error("empty response")]
    Empty,
}

impl ApiError {
    /// Map a non-success HTTP status to an error.
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        if status == 401 {
            ApiError::Unauthorized
        } else {
            ApiError::Status {
                status,
                body: body.into(),
            }
        }
    }

    /// Errors that send the user back to the login route instead of showing
    /// a message.
    pub fn requires_login(&self) -> bool {
        matches!(self, ApiError::MissingToken | ApiError::Unauthorized)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

/// What the user was doing when a call failed; selects the generic message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Load,
    Save,
    Delete,
    Login,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_401_is_unauthorized() {
        assert_eq!(ApiError::from_status(401, "nope"), ApiError::Unauthorized);
        assert!(ApiError::from_status(401, "").requires_login());
    }

    #[test]
    fn test_other_status_keeps_body() {
        let err = ApiError::from_status(422, "title_en is required");
        assert!(!err.requires_login());
        assert_eq!(err.to_string(), "HTTP 422: title_en is required");
    }

    #[test]
    fn test_decode_from_serde() {
        let err: ApiError = serde_json::from_str::<Vec<i64>>("{").unwrap_err().into();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
