use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Body of every non-2xx response.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }

    /// Body for requests whose payload or parameters could not be parsed.
    pub fn invalid_request() -> Json<Self> {
        Json(Self::new("Invalid request format"))
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
