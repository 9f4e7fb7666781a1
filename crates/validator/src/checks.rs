//! Boolean checks
//!
//! Yes/no wrappers over the validators for callers that only need a flag,
//! such as enabling a submit button. None of these panic.

use crate::foundation::Validate;
use crate::validators::{
    PasswordPolicy, business_registration_number, credit_card_number, driver_license_number,
    password, resident_registration_number,
};

/// `DDDD-DDDD-DDDD-DDDD`.
pub fn is_valid_credit_card_number(value: &str) -> bool {
    credit_card_number().is_valid(value)
}

/// Two Hangul syllables, two digits, one Hangul syllable, six digits.
pub fn is_valid_driver_license_number(value: &str) -> bool {
    driver_license_number().is_valid(value)
}

/// `DDD-DD-DDDDD`.
pub fn is_valid_business_registration_number(value: &str) -> bool {
    business_registration_number().is_valid(value)
}

/// 13 digits with a real birth date, a 1-4 century code and a matching
/// check digit.
pub fn is_valid_jumin(value: &str) -> bool {
    resident_registration_number().is_valid(value)
}

/// 8-20 characters, all allowed by `policy`.
pub fn is_valid_password(value: &str, policy: PasswordPolicy) -> bool {
    password(policy).is_valid(value)
}

/// Form-field checks as an injectable capability.
///
/// Every method has a default, so an implementor overrides only what it
/// needs to change.
///
/// ```rust
/// use flowkit_validator::checks::{FormChecks, FormValidator};
///
/// fn can_submit(form: &impl FormValidator, card: &str) -> bool {
///     form.is_valid_credit_card_number(card)
/// }
///
/// assert!(can_submit(&FormChecks, "1234-5678-9012-3456"));
/// ```
pub trait FormValidator {
    fn is_valid_credit_card_number(&self, value: &str) -> bool {
        is_valid_credit_card_number(value)
    }

    fn is_valid_driver_license_number(&self, value: &str) -> bool {
        is_valid_driver_license_number(value)
    }

    fn is_valid_business_registration_number(&self, value: &str) -> bool {
        is_valid_business_registration_number(value)
    }

    fn is_valid_jumin(&self, value: &str) -> bool {
        is_valid_jumin(value)
    }

    fn is_valid_password(&self, value: &str, policy: PasswordPolicy) -> bool {
        is_valid_password(value, policy)
    }
}

/// The standard [`FormValidator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FormChecks;

impl FormValidator for FormChecks {}

#[cfg(test)]
mod tests {
    use super::*;

    struct LenientCards;

    impl FormValidator for LenientCards {
        fn is_valid_credit_card_number(&self, value: &str) -> bool {
            value.chars().filter(char::is_ascii_digit).count() == 16
        }
    }

    #[test]
    fn test_free_functions() {
        assert!(is_valid_credit_card_number("1234-5678-9012-3456"));
        assert!(!is_valid_credit_card_number("1234567890123456"));
        assert!(is_valid_driver_license_number("서울12가345678"));
        assert!(is_valid_business_registration_number("123-45-67890"));
        assert!(is_valid_jumin("9001011234568"));
        assert!(!is_valid_jumin("9001011234567"));
        assert!(is_valid_password("abc12345", PasswordPolicy::LettersAndDigits));
        assert!(!is_valid_password("abc12345", PasswordPolicy::OnlyLetters));
    }

    #[test]
    fn test_form_checks_matches_free_functions() {
        let form = FormChecks;
        for input in ["1234-5678-9012-3456", "1234567890123456", "", "가"] {
            assert_eq!(
                form.is_valid_credit_card_number(input),
                is_valid_credit_card_number(input)
            );
            assert_eq!(form.is_valid_jumin(input), is_valid_jumin(input));
        }
    }

    #[test]
    fn test_override_one_check() {
        let form = LenientCards;
        assert!(form.is_valid_credit_card_number("1234567890123456"));
        assert!(form.is_valid_jumin("9001011234568"));
    }

    #[test]
    fn test_dyn_form_validator() {
        let forms: [&dyn FormValidator; 2] = [&FormChecks, &LenientCards];
        let accepted = forms
            .iter()
            .filter(|f| f.is_valid_credit_card_number("1234 5678 9012 3456"))
            .count();
        assert_eq!(accepted, 1);
    }
}
