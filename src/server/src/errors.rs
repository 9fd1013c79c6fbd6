use actix_web::{error, http::StatusCode, HttpResponse};
use derive_more::{Display, Error};
use libformdrop::error::{FormdropError, StringError};
use libformdrop::view::ErrorResponse;
use std::io;

#[derive(Debug, Display, Error)]
pub enum FormdropHttpError {
    BadRequest(StringError),
    PayloadTooLarge(StringError),
    AppDataDoesNotExist,
    PathParamDoesNotExist(StringError),

    // Translate FormdropError to FormdropHttpError
    InternalFormdropError(FormdropError),
}

impl From<FormdropError> for FormdropHttpError {
    fn from(error: FormdropError) -> Self {
        FormdropHttpError::InternalFormdropError(error)
    }
}

impl From<io::Error> for FormdropHttpError {
    fn from(error: io::Error) -> Self {
        FormdropHttpError::InternalFormdropError(FormdropError::IO(error))
    }
}

impl error::ResponseError for FormdropHttpError {
    fn error_response(&self) -> HttpResponse {
        match self {
            FormdropHttpError::BadRequest(desc) => {
                HttpResponse::BadRequest().json(ErrorResponse::error(desc.to_string()))
            }
            FormdropHttpError::PayloadTooLarge(desc) => {
                log::debug!("{}", desc);
                HttpResponse::PayloadTooLarge().json(ErrorResponse::error(desc.to_string()))
            }
            FormdropHttpError::AppDataDoesNotExist => {
                log::error!("AppData does not exist");
                HttpResponse::InternalServerError().json(ErrorResponse::internal_server_error())
            }
            FormdropHttpError::PathParamDoesNotExist(param) => {
                log::error!(
                    "Param {} does not exist in resource path, make sure it matches in routes.rs",
                    param
                );
                HttpResponse::BadRequest().json(ErrorResponse::bad_request())
            }
            FormdropHttpError::InternalFormdropError(error) => {
                // Catch specific FormdropError's and return the appropriate response
                match error {
                    FormdropError::EntryNotFound(desc) => {
                        log::debug!("Entry not found: {}", desc);
                        HttpResponse::NotFound().json(ErrorResponse::file_not_found())
                    }
                    FormdropError::InvalidFilename(desc) => {
                        log::debug!("{}", desc);
                        HttpResponse::BadRequest().json(ErrorResponse::error(desc.to_string()))
                    }
                    FormdropError::PathOutsideDataDir(path) => {
                        log::warn!("Refusing to serve path outside of data dir: {}", path);
                        HttpResponse::BadRequest().json(ErrorResponse::bad_request())
                    }
                    FormdropError::InvalidEntry(desc) => {
                        log::debug!("Invalid entry: {}", desc);
                        HttpResponse::BadRequest().json(ErrorResponse::error(desc.to_string()))
                    }
                    FormdropError::JSON(err) => {
                        log::debug!("Invalid JSON body: {}", err);
                        HttpResponse::BadRequest()
                            .json(ErrorResponse::error(format!("Invalid JSON body: {err}")))
                    }
                    err => {
                        log::error!("Internal server error: {:?}", err);
                        HttpResponse::InternalServerError().json(ErrorResponse::error(err.to_string()))
                    }
                }
            }
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            FormdropHttpError::BadRequest(_) => StatusCode::BAD_REQUEST,
            FormdropHttpError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            FormdropHttpError::AppDataDoesNotExist => StatusCode::INTERNAL_SERVER_ERROR,
            FormdropHttpError::PathParamDoesNotExist(_) => StatusCode::BAD_REQUEST,
            FormdropHttpError::InternalFormdropError(error) => match error {
                FormdropError::EntryNotFound(_) => StatusCode::NOT_FOUND,
                FormdropError::InvalidFilename(_) => StatusCode::BAD_REQUEST,
                FormdropError::PathOutsideDataDir(_) => StatusCode::BAD_REQUEST,
                FormdropError::InvalidEntry(_) => StatusCode::BAD_REQUEST,
                FormdropError::JSON(_) => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}
