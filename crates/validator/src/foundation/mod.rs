//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`]
//!
//! Validators are generic over their input type, so a `str` validator can
//! only be combined with other `str` validators:
//!
//! ```rust
//! use flowkit_validator::prelude::*;
//!
//! let id = credit_card_number().or(business_registration_number());
//! assert!(id.validate("123-45-67890").is_ok());
//! ```

pub mod error;
pub mod traits;

pub use error::ValidationError;
pub use traits::{Validate, ValidateExt};
