//! Prelude module for convenient imports.
//!
//! `use flowkit_outcome::prelude::*;` brings in the outcome type, its async
//! extension trait, the aggregate helpers and the error capability.

pub use crate::{Outcome, OutcomeFutureExt, combine, first_success};
pub use flowkit_error::DomainError;
