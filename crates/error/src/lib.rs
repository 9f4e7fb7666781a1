//! # flowkit-error
//!
//! The domain-error capability shared across FlowKit.
//!
//! Outcomes and validators never fix an error taxonomy. Instead they require
//! the error type to implement [`DomainError`], which exposes an optional
//! message, an optional protocol status and an optional numeric code.
//!
//! ```rust
//! use flowkit_error::{AppError, DomainError, StatusCode};
//!
//! let err = AppError::http(StatusCode::NOT_FOUND, "user not found");
//! assert_eq!(err.message(), Some("user not found"));
//! assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
//! ```
//!
//! Host applications with their own error enums opt in with a plain impl:
//!
//! ```rust
//! use flowkit_error::DomainError;
//!
//! #[derive(Debug)]
//! struct Offline;
//!
//! impl DomainError for Offline {
//!     fn message(&self) -> Option<&str> {
//!         Some("device is offline")
//!     }
//! }
//! ```

mod app;
mod domain;

pub use app::AppError;
pub use domain::DomainError;

/// Re-exported so hosts can name statuses without a direct `http` dependency.
pub use http::StatusCode;
