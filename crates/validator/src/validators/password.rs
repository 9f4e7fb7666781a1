//! Password validator with a character-set policy.
//!
//! A password is valid when its length in characters lies within the rule
//! bounds (8..=20 by default) and every character belongs to the set the
//! [`PasswordPolicy`] allows. Only ASCII letters and digits ever count as
//! letters and digits.

use serde::{Deserialize, Serialize};

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// POLICY
// ============================================================================

/// Which characters a password may contain.
///
/// Serialized with camelCase names (`"lettersAndDigits"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PasswordPolicy {
    /// ASCII letters only.
    OnlyLetters,
    /// ASCII letters and digits.
    #[default]
    LettersAndDigits,
    /// Lowercase ASCII letters and digits.
    LowercaseLettersAndDigits,
    /// Uppercase ASCII letters and digits.
    UppercaseLettersAndDigits,
    /// ASCII letters, digits and [`PasswordPolicy::SPECIAL_CHARS`].
    LettersDigitsAndSpecials,
}

impl PasswordPolicy {
    /// Punctuation accepted by [`PasswordPolicy::LettersDigitsAndSpecials`].
    pub const SPECIAL_CHARS: &'static str = "!@#$%^&*()_+|~=`{}[]:\";<>?,./";

    /// Every policy, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::OnlyLetters,
        Self::LettersAndDigits,
        Self::LowercaseLettersAndDigits,
        Self::UppercaseLettersAndDigits,
        Self::LettersDigitsAndSpecials,
    ];

    /// Returns `true` if `c` may appear in a password under this policy.
    pub fn allows(self, c: char) -> bool {
        match self {
            Self::OnlyLetters => c.is_ascii_alphabetic(),
            Self::LettersAndDigits => c.is_ascii_alphanumeric(),
            Self::LowercaseLettersAndDigits => c.is_ascii_lowercase() || c.is_ascii_digit(),
            Self::UppercaseLettersAndDigits => c.is_ascii_uppercase() || c.is_ascii_digit(),
            Self::LettersDigitsAndSpecials => {
                c.is_ascii_alphanumeric() || Self::SPECIAL_CHARS.contains(c)
            }
        }
    }

    /// The camelCase name used in configuration.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OnlyLetters => "onlyLetters",
            Self::LettersAndDigits => "lettersAndDigits",
            Self::LowercaseLettersAndDigits => "lowercaseLettersAndDigits",
            Self::UppercaseLettersAndDigits => "uppercaseLettersAndDigits",
            Self::LettersDigitsAndSpecials => "lettersDigitsAndSpecials",
        }
    }
}

// ============================================================================
// RULES
// ============================================================================

/// Error building [`PasswordRules`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    #[error("minLength ({min}) must not exceed maxLength ({max})")]
    InvertedBounds { min: usize, max: usize },
}

/// Length bounds and character policy for passwords.
///
/// Loadable from host configuration; every key is optional:
///
/// ```rust
/// use flowkit_validator::validators::{PasswordPolicy, PasswordRules};
///
/// let rules: PasswordRules =
///     serde_json::from_str(r#"{"policy": "lettersDigitsAndSpecials", "maxLength": 32}"#).unwrap();
/// assert_eq!(rules.policy, PasswordPolicy::LettersDigitsAndSpecials);
/// assert_eq!(rules.min_length, 8);
/// assert_eq!(rules.max_length, 32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRules", rename_all = "camelCase")]
pub struct PasswordRules {
    pub policy: PasswordPolicy,
    pub min_length: usize,
    pub max_length: usize,
}

impl PasswordRules {
    pub const DEFAULT_MIN_LENGTH: usize = 8;
    pub const DEFAULT_MAX_LENGTH: usize = 20;

    /// Builds rules, rejecting `min_length > max_length`.
    pub fn new(
        policy: PasswordPolicy,
        min_length: usize,
        max_length: usize,
    ) -> Result<Self, RulesError> {
        if min_length > max_length {
            return Err(RulesError::InvertedBounds {
                min: min_length,
                max: max_length,
            });
        }
        Ok(Self {
            policy,
            min_length,
            max_length,
        })
    }

    /// Default bounds with the given policy.
    pub const fn with_policy(policy: PasswordPolicy) -> Self {
        Self {
            policy,
            min_length: Self::DEFAULT_MIN_LENGTH,
            max_length: Self::DEFAULT_MAX_LENGTH,
        }
    }

    /// Checks `input` against the bounds first, then the policy.
    pub fn check(&self, input: &str) -> Result<(), ValidationError> {
        let length = input.chars().count();
        if !(self.min_length..=self.max_length).contains(&length) {
            tracing::trace!(
                length,
                min = self.min_length,
                max = self.max_length,
                "password rejected: length out of range"
            );
            return Err(ValidationError::length_out_of_range(
                self.min_length,
                self.max_length,
                length,
            ));
        }

        if let Some((position, _)) = input.char_indices().find(|&(_, c)| !self.policy.allows(c)) {
            tracing::trace!(
                position,
                policy = self.policy.as_str(),
                "password rejected: character not allowed"
            );
            return Err(ValidationError::new(
                "invalid_characters",
                "Contains characters the password policy does not allow",
            )
            .with_param("policy", self.policy.as_str())
            .with_param("position", position.to_string()));
        }

        Ok(())
    }
}

impl Default for PasswordRules {
    fn default() -> Self {
        Self::with_policy(PasswordPolicy::default())
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawRules {
    #[serde(default)]
    policy: PasswordPolicy,
    #[serde(default = "default_min_length")]
    min_length: usize,
    #[serde(default = "default_max_length")]
    max_length: usize,
}

const fn default_min_length() -> usize {
    PasswordRules::DEFAULT_MIN_LENGTH
}

const fn default_max_length() -> usize {
    PasswordRules::DEFAULT_MAX_LENGTH
}

impl TryFrom<RawRules> for PasswordRules {
    type Error = RulesError;

    fn try_from(raw: RawRules) -> Result<Self, Self::Error> {
        Self::new(raw.policy, raw.min_length, raw.max_length)
    }
}

// ============================================================================
// PASSWORD VALIDATOR
// ============================================================================

/// Validates a password against [`PasswordRules`].
///
/// # Examples
///
/// ```rust
/// use flowkit_validator::prelude::*;
///
/// assert!(password(PasswordPolicy::LettersAndDigits).validate("abc12345").is_ok());
/// assert!(password(PasswordPolicy::OnlyLetters).validate("abc12345").is_err());
///
/// let err = password(PasswordPolicy::LettersAndDigits).validate("abc1234").unwrap_err();
/// assert_eq!(err.code, "length_out_of_range");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Password {
    pub rules: PasswordRules,
}

impl Password {
    /// Default bounds with the given policy.
    #[must_use]
    pub const fn new(policy: PasswordPolicy) -> Self {
        Self::with_rules(PasswordRules::with_policy(policy))
    }

    /// Custom bounds and policy.
    #[must_use]
    pub const fn with_rules(rules: PasswordRules) -> Self {
        Self { rules }
    }
}

impl Validate for Password {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        self.rules.check(input)
    }
}

/// Creates a [`Password`] validator with default bounds.
#[must_use]
pub const fn password(policy: PasswordPolicy) -> Password {
    Password::new(policy)
}
