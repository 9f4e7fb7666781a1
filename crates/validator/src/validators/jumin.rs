//! Resident-registration number (주민등록번호) validator.
//!
//! A 13-digit number `YYMMDD-SNNNNNC` typed without the hyphen:
//!
//! - digits 0..6: birth date in century (`YYMMDD`)
//! - digit 6: sex/century code (`1`/`2` for 1900s, `3`/`4` for 2000s)
//! - digits 7..12: registration office and serial
//! - digit 12: check digit
//!
//! Codes `5`..`8` (foreign residents), `9` and `0` (1800s) are rejected.

use chrono::{Datelike, NaiveDate};

use crate::foundation::{Validate, ValidationError};

const LENGTH: usize = 13;
const WEIGHTS: [u32; LENGTH - 1] = [2, 3, 4, 5, 6, 7, 8, 9, 2, 3, 4, 5];

/// Validates a Korean resident-registration number.
///
/// Each failure carries its own code:
///
/// | Code | Cause |
/// |---|---|
/// | `invalid_format` | not exactly 13 ASCII digits |
/// | `invalid_century` | century code other than 1-4 |
/// | `invalid_birth_date` | `YYMMDD` is not a calendar date |
/// | `invalid_checksum` | check digit mismatch |
///
/// # Examples
///
/// ```rust
/// use flowkit_validator::prelude::*;
///
/// let jumin = resident_registration_number();
/// assert!(jumin.validate("9001011234568").is_ok());
///
/// let err = jumin.validate("9001011234567").unwrap_err();
/// assert_eq!(err.code, "invalid_checksum");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ResidentRegistrationNumber;

impl ResidentRegistrationNumber {
    /// Extracts the birth date encoded in a number, without checking the
    /// check digit.
    pub fn birth_date(input: &str) -> Option<NaiveDate> {
        let digits = parse_digits(input)?;
        birth_date(&digits).ok()
    }
}

impl Validate for ResidentRegistrationNumber {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let Some(digits) = parse_digits(input) else {
            tracing::trace!("jumin rejected: not 13 ascii digits");
            return Err(ValidationError::invalid_format("13 digits"));
        };

        birth_date(&digits)?;

        let expected = check_digit(&digits);
        let actual = digits[LENGTH - 1];
        if expected != actual {
            tracing::trace!("jumin rejected: check digit mismatch");
            return Err(ValidationError::new("invalid_checksum", "Check digit does not match")
                .with_param("expected", expected.to_string())
                .with_param("actual", actual.to_string()));
        }

        Ok(())
    }
}

/// Creates a [`ResidentRegistrationNumber`] validator.
#[must_use]
pub const fn resident_registration_number() -> ResidentRegistrationNumber {
    ResidentRegistrationNumber
}

fn parse_digits(input: &str) -> Option<[u8; LENGTH]> {
    let bytes = input.as_bytes();
    if bytes.len() != LENGTH || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }

    let mut digits = [0u8; LENGTH];
    for (slot, byte) in digits.iter_mut().zip(bytes) {
        *slot = byte - b'0';
    }
    Some(digits)
}

fn century(code: u8) -> Option<i32> {
    match code {
        1 | 2 => Some(1900),
        3 | 4 => Some(2000),
        _ => None,
    }
}

fn birth_date(digits: &[u8; LENGTH]) -> Result<NaiveDate, ValidationError> {
    let Some(century) = century(digits[6]) else {
        tracing::trace!("jumin rejected: unknown century code");
        return Err(
            ValidationError::new("invalid_century", "Unsupported century code")
                .with_param("code", digits[6].to_string()),
        );
    };

    let year = century + i32::from(digits[0] * 10 + digits[1]);
    let month = u32::from(digits[2] * 10 + digits[3]);
    let day = u32::from(digits[4] * 10 + digits[5]);

    NaiveDate::from_ymd_opt(year, month, day)
        .filter(|date| date.year() == year && date.month() == month && date.day() == day)
        .ok_or_else(|| {
            tracing::trace!("jumin rejected: not a calendar date");
            ValidationError::new("invalid_birth_date", "Birth date does not exist")
                .with_param("year", year.to_string())
                .with_param("month", month.to_string())
                .with_param("day", day.to_string())
        })
}

#[allow(clippy::cast_possible_truncation)] // result is 0..=9
fn check_digit(digits: &[u8; LENGTH]) -> u8 {
    let sum: u32 = digits
        .iter()
        .zip(WEIGHTS)
        .map(|(&d, w)| u32::from(d) * w)
        .sum();
    ((11 - sum % 11) % 10) as u8
}
