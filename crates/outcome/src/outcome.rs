//! The `Outcome` type and its synchronous combinators

use flowkit_error::DomainError;

// ============================================================================
// OUTCOME
// ============================================================================

/// Either a success carrying a value or a failure carrying a domain error.
///
/// An `Outcome` is exactly one of the two variants for its whole life. It is
/// never mutated: every combinator consumes it and returns a new one.
///
/// # Examples
///
/// ```rust
/// use flowkit_error::AppError;
/// use flowkit_outcome::Outcome;
///
/// let parsed: Outcome<u32, AppError> = Outcome::success(21);
/// let doubled = parsed.map(|n| n * 2);
/// assert_eq!(doubled.get_or_default(0), 42);
///
/// let failed: Outcome<u32, AppError> = Outcome::failure(AppError::new("offline"));
/// assert_eq!(failed.map(|n| n * 2).get_or_else(|| 7), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "this `Outcome` may be a `Failure`, which should be handled"]
pub enum Outcome<T, E> {
    /// The operation completed and produced a value.
    Success(T),
    /// The operation failed with a domain error.
    Failure(E),
}

impl<T, E: DomainError> Outcome<T, E> {
    /// Wraps a value as a success.
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wraps an error as a failure.
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    // ------------------------------------------------------------------------
    // Inspection
    // ------------------------------------------------------------------------

    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrows the value, or `None` on failure.
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Takes the value, discarding any error.
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrows the error, or `None` on success.
    pub const fn error(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Takes the error, discarding any value.
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Converts `&Outcome<T, E>` into `Outcome<&T, &E>`.
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    // ------------------------------------------------------------------------
    // Extraction
    // ------------------------------------------------------------------------

    /// Returns the value, or computes a fallback.
    ///
    /// `default` only runs on failure, so it may be expensive.
    pub fn get_or_else(self, default: impl FnOnce() -> T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default(),
        }
    }

    /// Returns the value, or the already-computed `default`.
    pub fn get_or_default(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Collapses both variants into one type. Exactly one closure runs.
    pub fn fold<R>(self, on_success: impl FnOnce(T) -> R, on_failure: impl FnOnce(E) -> R) -> R {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Converts into a standard `Result`, so `?` can be used at the boundary.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    // ------------------------------------------------------------------------
    // Transformation
    // ------------------------------------------------------------------------

    /// Transforms the value. A failure passes through with its error untouched.
    pub fn map<R>(self, f: impl FnOnce(T) -> R) -> Outcome<R, E> {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transforms the error. A success passes through unchanged.
    pub fn map_error<F: DomainError>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Chains a fallible step. `f` never runs once a failure has occurred.
    pub fn flat_map<R>(self, f: impl FnOnce(T) -> Outcome<R, E>) -> Outcome<R, E> {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Alias of [`Outcome::flat_map`].
    pub fn and_then<R>(self, f: impl FnOnce(T) -> Outcome<R, E>) -> Outcome<R, E> {
        self.flat_map(f)
    }

    // ------------------------------------------------------------------------
    // Recovery
    // ------------------------------------------------------------------------

    /// Turns any failure into a success. A success is returned as is and `f`
    /// is not called.
    pub fn recover(self, f: impl FnOnce(E) -> T) -> Self {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => Self::Success(f(error)),
        }
    }

    /// Like [`Outcome::recover`], but the recovery itself may fail.
    pub fn recover_with(self, f: impl FnOnce(E) -> Self) -> Self {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => f(error),
        }
    }

    // ------------------------------------------------------------------------
    // Side effects
    // ------------------------------------------------------------------------

    /// Runs `action` on the value and returns `self` unchanged.
    pub fn on_success(self, action: impl FnOnce(&T)) -> Self {
        if let Self::Success(value) = &self {
            action(value);
        }
        self
    }

    /// Runs `action` on the error and returns `self` unchanged.
    pub fn on_failure(self, action: impl FnOnce(&E)) -> Self {
        if let Self::Failure(error) = &self {
            action(error);
        }
        self
    }

    // ------------------------------------------------------------------------
    // Demotion
    // ------------------------------------------------------------------------

    /// Keeps a success only if `predicate` holds, otherwise fails with
    /// `on_false()`. Failures pass through and neither closure runs.
    pub fn filter(self, predicate: impl FnOnce(&T) -> bool, on_false: impl FnOnce() -> E) -> Self {
        match self {
            Self::Success(value) => {
                if predicate(&value) {
                    Self::Success(value)
                } else {
                    Self::Failure(on_false())
                }
            }
            Self::Failure(error) => Self::Failure(error),
        }
    }
}

impl<T, E: DomainError> Outcome<Option<T>, E> {
    /// Unwraps an optional payload, failing with `on_null()` when it is absent.
    pub fn where_not_null(self, on_null: impl FnOnce() -> E) -> Outcome<T, E> {
        match self {
            Self::Success(Some(value)) => Outcome::Success(value),
            Self::Success(None) => Outcome::Failure(on_null()),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }
}

// ============================================================================
// STD INTEROP
// ============================================================================

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
