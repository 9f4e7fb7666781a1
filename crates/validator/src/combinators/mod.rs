//! Validator combinators
//!
//! Compose field validators with logical operators and override their
//! messages for display.
//!
//! | Combinator | Built with | Passes when |
//! |---|---|---|
//! | [`And`] | `a.and(b)` | both pass |
//! | [`Or`] | `a.or(b)` | either passes |
//! | [`Not`] | `a.not()` | `a` fails |
//! | [`WithMessage`] | `a.with_message(m)` | `a` passes |

pub mod and;
pub mod message;
pub mod not;
pub mod or;

pub use and::{And, and};
pub use message::{WithMessage, with_message};
pub use not::{Not, not};
pub use or::{Or, or};
