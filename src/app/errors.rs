use axum::http::StatusCode;

use super::models::api_error::ApiError;

#[derive(Debug)]
pub enum DefaultApiError {
    InternalServerError,
    UpstreamFetchFailed,
}

impl DefaultApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            // upstream failures are only told apart in the logs
            Self::InternalServerError | Self::UpstreamFetchFailed => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Internal Server Error".to_string(),
            },
        }
    }
}
