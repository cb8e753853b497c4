//! Error envelope shared across the service.
//!
//! [`Error`] is the one failure type handlers return. It stays transport
//! neutral; the HTTP layer picks status codes and redacts internals when it
//! turns one into a response.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::trace_id::TraceId;

/// Machine-readable category for an [`Error`].
///
/// Serialised in `snake_case`; clients branch on these codes instead of
/// parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request payload failed validation.
    InvalidRequest,
    /// No entity matches the requested identifier.
    NotFound,
    /// The change clashes with existing state, such as a post naming an
    /// unknown author.
    Conflict,
    /// The backing store is temporarily unreachable.
    ServiceUnavailable,
    /// Unexpected failure with no client remedy.
    InternalError,
}

/// Rejections returned by the fallible constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorValidationError {
    /// The message was empty or whitespace-only.
    #[error("error message must not be empty")]
    EmptyMessage,
    /// The trace identifier was empty or whitespace-only.
    #[error("trace identifier must not be empty")]
    EmptyTraceId,
}

fn visible(text: String, empty: ErrorValidationError) -> Result<String, ErrorValidationError> {
    if text.trim().is_empty() {
        return Err(empty);
    }
    Ok(text)
}

/// Failure envelope carried from the domain out to clients.
///
/// ## Invariants
/// - `message` contains at least one non-whitespace character.
/// - `trace_id`, when present, contains at least one non-whitespace character.
///
/// # Examples
/// ```
/// use wiki_backend::domain::{Error, ErrorCode};
///
/// let err = Error::conflict("referenced user does not exist");
/// assert_eq!(err.code(), ErrorCode::Conflict);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "ErrorDto", into = "ErrorDto")]
pub struct Error {
    #[schema(example = "conflict")]
    code: ErrorCode,
    #[schema(example = "referenced user does not exist")]
    message: String,
    trace_id: Option<String>,
    details: Option<Value>,
}

impl Error {
    /// Build an error, panicking when the message fails validation.
    ///
    /// When a request scope is active its trace identifier is copied onto
    /// the error, so responses correlate with the logs.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        match Self::try_new(code, message) {
            Ok(value) => value,
            Err(err) => panic!("refusing to build an invalid error: {err}"),
        }
    }

    /// Validating constructor; rejects blank messages.
    ///
    /// Picks up the ambient trace identifier when a request scope is active.
    pub fn try_new(
        code: ErrorCode,
        message: impl Into<String>,
    ) -> Result<Self, ErrorValidationError> {
        Ok(Self {
            code,
            message: visible(message.into(), ErrorValidationError::EmptyMessage)?,
            trace_id: TraceId::current().map(|id| id.to_string()),
            details: None,
        })
    }

    /// Category of the failure.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable description of the failure.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Correlation identifier captured when the error was built inside a
    /// request scope.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Structured context, such as the offending field.
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Attach a trace identifier, panicking if validation fails.
    pub fn with_trace_id(self, id: impl Into<String>) -> Self {
        match self.try_with_trace_id(id) {
            Ok(value) => value,
            Err(err) => panic!("refusing to attach an invalid trace identifier: {err}"),
        }
    }

    /// Fallible variant of [`Error::with_trace_id`].
    pub fn try_with_trace_id(
        mut self,
        id: impl Into<String>,
    ) -> Result<Self, ErrorValidationError> {
        self.trace_id = Some(visible(id.into(), ErrorValidationError::EmptyTraceId)?);
        Ok(self)
    }

    /// Attach structured context for programmatic consumers.
    ///
    /// # Examples
    /// ```
    /// use serde_json::json;
    /// use wiki_backend::domain::Error;
    ///
    /// let err = Error::conflict("referenced user does not exist")
    ///     .with_details(json!({ "field": "user_id" }));
    /// assert!(err.details().is_some());
    /// ```
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Shorthand for [`Error::new`] with [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Shorthand for [`Error::new`] with [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Shorthand for [`Error::new`] with [`ErrorCode::Conflict`].
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Conflict, message)
    }

    /// Shorthand for [`Error::new`] with [`ErrorCode::ServiceUnavailable`].
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }

    /// Shorthand for [`Error::new`] with [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}

// Wire shape. Validation runs on the way in through `TryFrom`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
struct ErrorDto {
    code: ErrorCode,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl From<Error> for ErrorDto {
    fn from(value: Error) -> Self {
        let Error {
            code,
            message,
            trace_id,
            details,
        } = value;
        Self {
            code,
            message,
            trace_id,
            details,
        }
    }
}

impl TryFrom<ErrorDto> for Error {
    type Error = ErrorValidationError;

    fn try_from(value: ErrorDto) -> Result<Self, Self::Error> {
        let ErrorDto {
            code,
            message,
            trace_id,
            details,
        } = value;

        let mut error = Error::try_new(code, message)?;
        // Deserialised payloads carry their own correlation state; the
        // ambient trace identifier must not bleed into them.
        error.trace_id = trace_id
            .map(|id| visible(id, ErrorValidationError::EmptyTraceId))
            .transpose()?;
        error.details = details;
        Ok(error)
    }
}
