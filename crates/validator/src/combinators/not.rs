//! NOT combinator - logical negation of validators

use crate::foundation::{Validate, ValidationError};

/// Inverts a validator: succeeds when the inner validator fails and
/// vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<V> {
    pub(crate) inner: V,
}

impl<V> Not<V> {
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Not<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.inner.validate(input) {
            Ok(()) => Err(ValidationError::new(
                "not_failed",
                "Validation should have failed but passed",
            )),
            Err(_) => Ok(()),
        }
    }
}

/// Creates a `Not` combinator from a validator.
pub fn not<V>(validator: V) -> Not<V> {
    Not::new(validator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::credit_card_number;

    #[test]
    fn test_not_inverts_success() {
        let validator = Not::new(credit_card_number());
        let err = validator.validate("1234-5678-9012-3456").unwrap_err();
        assert_eq!(err.code, "not_failed");
    }

    #[test]
    fn test_not_inverts_failure() {
        let validator = not(credit_card_number());
        assert!(validator.validate("1234567890123456").is_ok());
    }

    #[test]
    fn test_double_negation() {
        let validator = credit_card_number().not().not();
        assert!(validator.validate("1234-5678-9012-3456").is_ok());
        assert!(validator.validate("1234").is_err());
    }

    #[test]
    fn test_inner() {
        let validator = credit_card_number().not();
        assert_eq!(*validator.inner(), credit_card_number());
        assert!(validator.into_inner().validate("1234-5678-9012-3456").is_ok());
    }
}
