//! Maps domain errors onto Actix HTTP responses.
//!
//! The domain error type knows nothing about HTTP. This adapter owns the
//! translation: it picks the status code for each error code, serialises the
//! JSON envelope, echoes the trace identifier as a response header, and
//! replaces internal failure messages with a generic one before they reach a
//! client.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Result alias every handler returns.
pub type ApiResult<T> = Result<T, Error>;

/// Message served in place of internal failure details.
const REDACTED_MESSAGE: &str = "Internal server error";

fn http_status(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Produce the payload a client is allowed to see.
///
/// Internal errors keep only their trace identifier; the message and any
/// details stay on the server side of the wire.
fn client_error(error: &Error) -> Error {
    match error.code() {
        ErrorCode::InternalError => {
            let redacted = Error::internal(REDACTED_MESSAGE);
            match error.trace_id() {
                Some(id) => redacted.with_trace_id(id.to_owned()),
                None => redacted,
            }
        }
        _ => error.clone(),
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        http_status(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            response.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        response.json(client_error(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(source: actix_web::Error) -> Self {
        // Framework failures carry internals that must stay out of responses.
        error!(error = %source, "request failed inside the framework");
        Self::internal(REDACTED_MESSAGE)
    }
}
