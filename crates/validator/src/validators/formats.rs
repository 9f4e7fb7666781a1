//! Fixed-format identifier validators
//!
//! Card, driver-license and business-registration numbers as typed into
//! Korean forms. These check shape only; none of them verify a checksum.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::ValidationError;

static CREDIT_CARD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{4}-[0-9]{4}-[0-9]{4}$").unwrap());

// Hangul syllables block: U+AC00 ('가') ..= U+D7A3 ('힣').
static DRIVER_LICENSE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\x{AC00}-\x{D7A3}]{2}[0-9]{2}[\x{AC00}-\x{D7A3}][0-9]{6}$").unwrap()
});

static BUSINESS_REGISTRATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3}-[0-9]{2}-[0-9]{5}$").unwrap());

// ============================================================================
// CREDIT CARD
// ============================================================================

crate::validator! {
    /// Validates a card number written as `DDDD-DDDD-DDDD-DDDD`.
    ///
    /// No Luhn check is performed.
    pub CreditCardNumber for str;
    rule(input) { CREDIT_CARD_REGEX.is_match(input) }
    error(input) { ValidationError::invalid_format("DDDD-DDDD-DDDD-DDDD") }
    fn credit_card_number();
}

// ============================================================================
// DRIVER LICENSE
// ============================================================================

crate::validator! {
    /// Validates a Korean driver-license number: two Hangul syllables, two
    /// digits, one Hangul syllable, six digits (e.g. `서울12가345678`).
    pub DriverLicenseNumber for str;
    rule(input) { DRIVER_LICENSE_REGEX.is_match(input) }
    error(input) { ValidationError::invalid_format("HH DD H DDDDDD") }
    fn driver_license_number();
}

// ============================================================================
// BUSINESS REGISTRATION
// ============================================================================

crate::validator! {
    /// Validates a business-registration number written as `DDD-DD-DDDDD`.
    pub BusinessRegistrationNumber for str;
    rule(input) { BUSINESS_REGISTRATION_REGEX.is_match(input) }
    error(input) { ValidationError::invalid_format("DDD-DD-DDDDD") }
    fn business_registration_number();
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_credit_card() {
        let validator = credit_card_number();
        assert!(validator.validate("1234-5678-9012-3456").is_ok());
        assert!(validator.validate("1234567890123456").is_err());
        assert!(validator.validate("1234-5678-9012-345").is_err());
        assert!(validator.validate("1234-5678-9012-34567").is_err());
        assert!(validator.validate(" 1234-5678-9012-3456").is_err());
        assert!(validator.validate("1234-5678-9012-3456\n").is_err());
    }

    #[test]
    fn test_credit_card_rejects_non_ascii_digits() {
        // Arabic-Indic and fullwidth digits are Unicode digits but not ASCII.
        assert!(credit_card_number().validate("١٢٣٤-5678-9012-3456").is_err());
        assert!(credit_card_number().validate("１２３４-5678-9012-3456").is_err());
    }

    #[test]
    fn test_credit_card_error() {
        let err = credit_card_number().validate("nope").unwrap_err();
        assert_eq!(err.code, "invalid_format");
        assert_eq!(err.param("expected"), Some("DDDD-DDDD-DDDD-DDDD"));
    }

    #[test]
    fn test_driver_license() {
        let validator = driver_license_number();
        assert!(validator.validate("서울12가345678").is_ok());
        assert!(validator.validate("경기98허000001").is_ok());
        assert!(validator.validate("서12가345678").is_err());
        assert!(validator.validate("서울12가34567").is_err());
        assert!(validator.validate("서울1가2345678").is_err());
        assert!(validator.validate("ab12c345678").is_err());
        // Compatibility jamo are outside the syllables block.
        assert!(validator.validate("ㅅㅇ12ㄱ345678").is_err());
    }

    #[test]
    fn test_business_registration() {
        let validator = business_registration_number();
        assert!(validator.validate("123-45-67890").is_ok());
        assert!(validator.validate("1234567890").is_err());
        assert!(validator.validate("123-456-7890").is_err());
        assert!(validator.validate("12a-45-67890").is_err());
    }
}
