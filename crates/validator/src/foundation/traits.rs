//! Core traits for the validation system

use flowkit_outcome::Outcome;

use crate::combinators::{And, Not, Or, WithMessage};
use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators must implement.
///
/// Generic over the input type so mismatched validators fail to compose at
/// compile time. Use `?Sized` inputs (`str`) for string validators.
///
/// # Examples
///
/// ```rust
/// use flowkit_validator::foundation::{Validate, ValidationError};
///
/// struct NoSpaces;
///
/// impl Validate for NoSpaces {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.contains(' ') {
///             Err(ValidationError::new("no_spaces", "Must not contain spaces"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NoSpaces.validate("abc").is_ok());
/// assert!(NoSpaces.validate("a b").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(ValidationError)` if validation fails
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Returns `true` when [`Validate::validate`] succeeds.
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for every `Validate` type.
///
/// # Examples
///
/// ```rust
/// use flowkit_validator::prelude::*;
///
/// let card_or_business = credit_card_number().or(business_registration_number());
/// assert!(card_or_business.validate("1234-5678-9012-3456").is_ok());
/// assert!(card_or_business.validate("123-45-67890").is_ok());
/// assert!(card_or_business.validate("12345").is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Both validators must pass. Short-circuits on the first failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// At least one validator must pass. Short-circuits on the first success.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }

    /// Inverts the validator.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }

    /// Replaces the error message, e.g. with a localized one.
    fn with_message(self, message: impl Into<String>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }

    /// Validates and returns the input as an [`Outcome`].
    ///
    /// ```rust
    /// use flowkit_validator::prelude::*;
    ///
    /// let number = business_registration_number()
    ///     .validated("123-45-67890")
    ///     .map(|n| n.replace('-', ""));
    /// assert_eq!(number, Outcome::success("1234567890".to_owned()));
    /// ```
    fn validated<'a>(&self, input: &'a Self::Input) -> Outcome<&'a Self::Input, ValidationError> {
        match self.validate(input) {
            Ok(()) => Outcome::Success(input),
            Err(error) => Outcome::Failure(error),
        }
    }
}

impl<T: Validate> ValidateExt for T {}

// ============================================================================
// TESTS
// ============================================================================
