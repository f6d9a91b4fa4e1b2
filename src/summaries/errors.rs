use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum SummariesApiError {
    InvalidMonth,
}

impl SummariesApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::InvalidMonth => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Invalid month.".to_string(),
            },
        }
    }
}
