//! # flowkit-outcome
//!
//! An explicit success-or-failure type for application code that wants to
//! return errors as values and chain fallible steps without unwrapping.
//!
//! ## Quick Start
//!
//! ```rust
//! use flowkit_error::AppError;
//! use flowkit_outcome::prelude::*;
//!
//! fn parse_age(raw: &str) -> Outcome<u8, AppError> {
//!     raw.parse::<u8>()
//!         .map_err(|e| AppError::validation(e.to_string()))
//!         .into()
//! }
//!
//! let adult = parse_age("34")
//!     .filter(|age| *age >= 19, || AppError::validation("must be an adult"))
//!     .map(|age| format!("{age} years"));
//! assert_eq!(adult, Outcome::success("34 years".to_owned()));
//!
//! let minor = parse_age("12").filter(|age| *age >= 19, || AppError::validation("must be an adult"));
//! assert!(minor.is_failure());
//! ```
//!
//! ## Building blocks
//!
//! - [`Outcome`]: the two-variant type with its synchronous combinators
//! - [`OutcomeFutureExt`]: `map_async`, `flat_map_async`, `get_or_else_async`
//! - [`combine`] / [`first_success`]: aggregates over sequences of outcomes
//!
//! Errors must implement [`DomainError`](flowkit_error::DomainError).

mod aggregate;
mod future;
mod outcome;
pub mod prelude;

pub use aggregate::{combine, first_success};
pub use future::OutcomeFutureExt;
pub use outcome::Outcome;
