//! Built-in validators
//!
//! Field validators for Korean-locale forms.
//!
//! | Validator | Factory | Accepts |
//! |---|---|---|
//! | [`CreditCardNumber`] | [`credit_card_number`] | `DDDD-DDDD-DDDD-DDDD` |
//! | [`DriverLicenseNumber`] | [`driver_license_number`] | `서울12가345678` |
//! | [`BusinessRegistrationNumber`] | [`business_registration_number`] | `DDD-DD-DDDDD` |
//! | [`ResidentRegistrationNumber`] | [`resident_registration_number`] | 13 digits with valid date and check digit |
//! | [`Password`] | [`password`] | 8-20 characters allowed by a [`PasswordPolicy`] |

pub mod formats;
pub mod jumin;
pub mod password;

pub use formats::{
    BusinessRegistrationNumber, CreditCardNumber, DriverLicenseNumber,
    business_registration_number, credit_card_number, driver_license_number,
};
pub use jumin::{ResidentRegistrationNumber, resident_registration_number};
pub use password::{Password, PasswordPolicy, PasswordRules, RulesError, password};
