//! A ready-made [`DomainError`] for host applications

use http::StatusCode;

use crate::domain::DomainError;

/// General-purpose application error.
///
/// Hosts that do not need their own taxonomy can carry this through every
/// outcome. Each variant fills in a different subset of the
/// [`DomainError`] accessors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    /// Free-form failure with only a message.
    #[error("{0}")]
    Message(String),

    /// Failure tied to a protocol status.
    #[error("{status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Status {
        status: StatusCode,
        message: Option<String>,
    },

    /// Failure identified by an application code.
    #[error("[{code}] {message}")]
    Coded { code: i64, message: String },

    /// User input was rejected.
    #[error("validation failed: {0}")]
    Validation(String),
}

impl AppError {
    pub fn new(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }

    pub fn http(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: Some(message.into()),
        }
    }

    /// Status-only error, e.g. a bare `404` with no body.
    pub fn http_status(status: StatusCode) -> Self {
        Self::Status {
            status,
            message: None,
        }
    }

    pub fn coded(code: i64, message: impl Into<String>) -> Self {
        Self::Coded {
            code,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Attaches a numeric code, keeping the existing message.
    ///
    /// A `Status` error loses its status; use [`AppError::http`] instead
    /// when both are needed.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(self, code: i64) -> Self {
        let message = self.message().unwrap_or_default().to_owned();
        Self::Coded { code, message }
    }
}

impl DomainError for AppError {
    fn message(&self) -> Option<&str> {
        match self {
            Self::Message(message) | Self::Validation(message) => Some(message),
            Self::Status { message, .. } => message.as_deref(),
            Self::Coded { message, .. } => Some(message),
        }
    }

    fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Validation(_) => Some(StatusCode::UNPROCESSABLE_ENTITY),
            Self::Message(_) | Self::Coded { .. } => None,
        }
    }

    fn code(&self) -> Option<i64> {
        match self {
            Self::Coded { code, .. } => Some(*code),
            Self::Status { status, .. } => Some(i64::from(status.as_u16())),
            Self::Message(_) | Self::Validation(_) => None,
        }
    }
}

impl From<StatusCode> for AppError {
    fn from(status: StatusCode) -> Self {
        Self::http_status(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(AppError::new("boom"), Some("boom"), None, None)]
    #[case(
        AppError::http(StatusCode::NOT_FOUND, "missing"),
        Some("missing"),
        Some(StatusCode::NOT_FOUND),
        Some(404)
    )]
    #[case(AppError::http_status(StatusCode::BAD_GATEWAY), None, Some(StatusCode::BAD_GATEWAY), Some(502))]
    #[case(AppError::coded(7, "quota"), Some("quota"), None, Some(7))]
    #[case(
        AppError::validation("bad email"),
        Some("bad email"),
        Some(StatusCode::UNPROCESSABLE_ENTITY),
        None
    )]
    fn test_accessors(
        #[case] err: AppError,
        #[case] message: Option<&str>,
        #[case] status: Option<StatusCode>,
        #[case] code: Option<i64>,
    ) {
        assert_eq!(DomainError::message(&err), message);
        assert_eq!(DomainError::status(&err), status);
        assert_eq!(DomainError::code(&err), code);
    }

    #[test]
    fn test_display() {
        assert_eq!(AppError::new("boom").to_string(), "boom");
        assert_eq!(
            AppError::http(StatusCode::NOT_FOUND, "missing").to_string(),
            "404 Not Found: missing"
        );
        assert_eq!(
            AppError::http_status(StatusCode::NOT_FOUND).to_string(),
            "404 Not Found"
        );
        assert_eq!(AppError::coded(7, "quota").to_string(), "[7] quota");
        assert_eq!(
            AppError::validation("bad email").to_string(),
            "validation failed: bad email"
        );
    }

    #[test]
    fn test_with_code_keeps_message() {
        let err = AppError::new("timeout").with_code(408);
        assert_eq!(err, AppError::coded(408, "timeout"));
    }

    #[test]
    fn test_from_status() {
        let err: AppError = StatusCode::UNAUTHORIZED.into();
        assert_eq!(DomainError::status(&err), Some(StatusCode::UNAUTHORIZED));
        assert_eq!(DomainError::message(&err), None);
    }
}
