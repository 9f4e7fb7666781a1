//! # flowkit-validator
//!
//! Composable validators for Korean-locale form fields.
//!
//! ## Quick Start
//!
//! ```rust
//! use flowkit_validator::prelude::*;
//!
//! assert!(resident_registration_number().validate("9001011234568").is_ok());
//! assert!(driver_license_number().validate("서울12가345678").is_ok());
//!
//! let pw = password(PasswordPolicy::LettersDigitsAndSpecials)
//!     .with_message("비밀번호는 8-20자의 영문, 숫자, 특수문자만 사용할 수 있습니다");
//! assert!(pw.validate("hunter2!").is_ok());
//! ```
//!
//! For plain yes/no answers use the functions in [`checks`]:
//!
//! ```rust
//! use flowkit_validator::checks;
//!
//! assert!(checks::is_valid_credit_card_number("1234-5678-9012-3456"));
//! assert!(!checks::is_valid_jumin("9001011234567"));
//! ```
//!
//! ## Creating Validators
//!
//! Use the [`validator!`] macro for zero-boilerplate validators,
//! or implement [`Validate`](foundation::Validate) manually for complex cases.
//!
//! ## Built-in Validators
//!
//! - **Formats**: [`CreditCardNumber`](validators::CreditCardNumber),
//!   [`DriverLicenseNumber`](validators::DriverLicenseNumber),
//!   [`BusinessRegistrationNumber`](validators::BusinessRegistrationNumber)
//! - **Checksummed**: [`ResidentRegistrationNumber`](validators::ResidentRegistrationNumber)
//! - **Policy**: [`Password`](validators::Password) with
//!   [`PasswordRules`](validators::PasswordRules)

// ValidationError is the error type of every validator; boxing it would add
// indirection to every call.
#![allow(clippy::result_large_err)]
// Nested combinators (And<Or<Not<...>, ...>, ...>) have long types.
#![allow(clippy::type_complexity)]

pub mod checks;
pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;
