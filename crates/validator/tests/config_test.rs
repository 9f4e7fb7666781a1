//! Loading `PasswordRules` from host configuration.

use flowkit_validator::prelude::*;
use flowkit_validator::validators::RulesError;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn empty_object_uses_defaults() {
    let rules: PasswordRules = serde_json::from_str("{}").unwrap();
    assert_eq!(rules, PasswordRules::default());
}

#[test]
fn full_config() {
    let rules: PasswordRules = serde_json::from_str(
        r#"{"policy": "lettersDigitsAndSpecials", "minLength": 10, "maxLength": 32}"#,
    )
    .unwrap();

    assert_eq!(
        rules,
        PasswordRules::new(PasswordPolicy::LettersDigitsAndSpecials, 10, 32).unwrap()
    );
    let validator = Password::with_rules(rules);
    assert!(validator.validate("hunter2!").is_err());
    assert!(validator.validate("hunter2!hunter2!").is_ok());
}

#[rstest]
#[case("onlyLetters", PasswordPolicy::OnlyLetters)]
#[case("lettersAndDigits", PasswordPolicy::LettersAndDigits)]
#[case("lowercaseLettersAndDigits", PasswordPolicy::LowercaseLettersAndDigits)]
#[case("uppercaseLettersAndDigits", PasswordPolicy::UppercaseLettersAndDigits)]
#[case("lettersDigitsAndSpecials", PasswordPolicy::LettersDigitsAndSpecials)]
fn policy_names(#[case] name: &str, #[case] policy: PasswordPolicy) {
    let parsed: PasswordPolicy = serde_json::from_value(serde_json::json!(name)).unwrap();
    assert_eq!(parsed, policy);
    assert_eq!(policy.as_str(), name);
    assert_eq!(serde_json::to_value(policy).unwrap(), serde_json::json!(name));
}

#[test]
fn unknown_policy_is_rejected() {
    let err = serde_json::from_str::<PasswordRules>(r#"{"policy": "anything"}"#).unwrap_err();
    assert!(err.to_string().contains("unknown variant"), "{err}");
}

#[test]
fn unknown_key_is_rejected() {
    assert!(serde_json::from_str::<PasswordRules>(r#"{"minLen": 4}"#).is_err());
}

#[test]
fn inverted_bounds_are_rejected() {
    let err = serde_json::from_str::<PasswordRules>(r#"{"minLength": 12, "maxLength": 6}"#)
        .unwrap_err();
    let expected = RulesError::InvertedBounds { min: 12, max: 6 }.to_string();
    assert!(err.to_string().starts_with(&expected), "{err}");
}

#[test]
fn serializes_camel_case() {
    let json = serde_json::to_value(PasswordRules::default()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"policy": "lettersAndDigits", "minLength": 8, "maxLength": 20})
    );
}
