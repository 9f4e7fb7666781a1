//! Prelude module for convenient imports.
//!
//! Provides a single `use flowkit_validator::prelude::*;` import that brings
//! in the traits, error type, validators and combinators, plus [`Outcome`]
//! for [`ValidateExt::validated`].
//!
//! # Examples
//!
//! ```rust
//! use flowkit_validator::prelude::*;
//!
//! let jumin = resident_registration_number()
//!     .validated("0501013123457")
//!     .map(str::len);
//! assert_eq!(jumin, Outcome::success(13));
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{Validate, ValidateExt, ValidationError};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

pub use crate::validators::{
    BusinessRegistrationNumber, CreditCardNumber, DriverLicenseNumber, Password, PasswordPolicy,
    PasswordRules, ResidentRegistrationNumber, business_registration_number, credit_card_number,
    driver_license_number, password, resident_registration_number,
};

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{And, Not, Or, WithMessage, and, not, or, with_message};

// ============================================================================
// CHECKS AND OUTCOME
// ============================================================================

pub use crate::checks::{FormChecks, FormValidator};
pub use flowkit_outcome::Outcome;
