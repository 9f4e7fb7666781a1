//! The `DomainError` capability

use http::StatusCode;

/// Capability every error carried by an outcome must provide.
///
/// All accessors are optional and default to `None`, so the trait is purely
/// descriptive: it carries no behavior and imposes no hierarchy.
pub trait DomainError {
    /// Human-readable description, if any.
    fn message(&self) -> Option<&str> {
        None
    }

    /// Protocol status associated with the failure (e.g. the HTTP response
    /// status of the request that produced it).
    fn status(&self) -> Option<StatusCode> {
        None
    }

    /// Application-defined numeric code.
    fn code(&self) -> Option<i64> {
        None
    }
}

impl<E: DomainError + ?Sized> DomainError for &E {
    fn message(&self) -> Option<&str> {
        (**self).message()
    }

    fn status(&self) -> Option<StatusCode> {
        (**self).status()
    }

    fn code(&self) -> Option<i64> {
        (**self).code()
    }
}

impl<E: DomainError + ?Sized> DomainError for Box<E> {
    fn message(&self) -> Option<&str> {
        (**self).message()
    }

    fn status(&self) -> Option<StatusCode> {
        (**self).status()
    }

    fn code(&self) -> Option<i64> {
        (**self).code()
    }
}
