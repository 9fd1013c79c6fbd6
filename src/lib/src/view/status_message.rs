use crate::view;
use serde::{Deserialize, Serialize};

/// `{"success": false, "error": ...}`, the body of every failed request
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn error(msg: impl AsRef<str>) -> ErrorResponse {
        ErrorResponse {
            success: false,
            error: String::from(msg.as_ref()),
        }
    }

    pub fn file_not_found() -> ErrorResponse {
        ErrorResponse::error(view::http::MSG_FILE_NOT_FOUND)
    }

    pub fn resource_not_found() -> ErrorResponse {
        ErrorResponse::error(view::http::MSG_RESOURCE_NOT_FOUND)
    }

    pub fn bad_request() -> ErrorResponse {
        ErrorResponse::error(view::http::MSG_BAD_REQUEST)
    }

    pub fn internal_server_error() -> ErrorResponse {
        ErrorResponse::error(view::http::MSG_INTERNAL_SERVER_ERROR)
    }
}
