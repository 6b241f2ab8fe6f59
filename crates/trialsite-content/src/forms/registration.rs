use regex::Regex;
use serde::Serialize;
use std::{fmt, sync::OnceLock};
use thiserror::Error;

use crate::catalog::TherapeuticArea;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Organization,
    StudyInterest,
    Consent,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::FirstName => "First name",
            Field::LastName => "Last name",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::Organization => "Organization",
            Field::StudyInterest => "Study interest",
            Field::Consent => "Consent",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(Field),

    #[error("Email address {0:?} is not valid")]
    InvalidEmail(String),

    #[error("Phone number {0:?} must contain 7 to 15 digits")]
    InvalidPhone(String),

    #[error("Consent is required to register")]
    ConsentMissing,
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::Required(field) => *field,
            FieldError::InvalidEmail(_) => Field::Email,
            FieldError::InvalidPhone(_) => Field::Phone,
            FieldError::ConsentMissing => Field::Consent,
        }
    }
}

/// Registration form contents as currently entered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub organization: String,
    pub study_interest: Option<TherapeuticArea>,
    pub consent: bool,
}

/// A registration that passed validation, with whitespace trimmed and
/// optional fields normalized to `None` when blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidRegistration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub organization: Option<String>,
    pub study_interest: Option<TherapeuticArea>,
}

const PHONE_SEPARATORS: [char; 6] = [' ', '-', '(', ')', '+', '.'];
const PHONE_DIGITS: std::ops::RangeInclusive<usize> = 7..=15;

impl RegistrationForm {
    pub fn with_first_name(self, first_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            ..self
        }
    }

    pub fn with_last_name(self, last_name: impl Into<String>) -> Self {
        Self {
            last_name: last_name.into(),
            ..self
        }
    }

    pub fn with_email(self, email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..self
        }
    }

    pub fn with_phone(self, phone: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            ..self
        }
    }

    pub fn with_organization(self, organization: impl Into<String>) -> Self {
        Self {
            organization: organization.into(),
            ..self
        }
    }

    pub fn with_study_interest(self, study_interest: Option<TherapeuticArea>) -> Self {
        Self {
            study_interest,
            ..self
        }
    }

    pub fn with_consent(self, consent: bool) -> Self {
        Self { consent, ..self }
    }

    /// Checks every field and reports all failures at once.
    pub fn validate(&self) -> Result<ValidRegistration, Vec<FieldError>> {
        let mut errors = vec![];

        let first_name = self.first_name.trim();
        if first_name.is_empty() {
            errors.push(FieldError::Required(Field::FirstName));
        }

        let last_name = self.last_name.trim();
        if last_name.is_empty() {
            errors.push(FieldError::Required(Field::LastName));
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push(FieldError::Required(Field::Email));
        } else if !email_pattern().is_match(email) {
            errors.push(FieldError::InvalidEmail(email.to_string()));
        }

        let phone = self.phone.trim();
        if !phone.is_empty() && !is_valid_phone(phone) {
            errors.push(FieldError::InvalidPhone(phone.to_string()));
        }

        if !self.consent {
            errors.push(FieldError::ConsentMissing);
        }

        if !errors.is_empty() {
            log::debug!("registration rejected with {} errors", errors.len());
            return Err(errors);
        }

        let organization = self.organization.trim();
        Ok(ValidRegistration {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
            organization: (!organization.is_empty()).then(|| organization.to_string()),
            study_interest: self.study_interest,
        })
    }
}

fn is_valid_phone(phone: &str) -> bool {
    let only_allowed = phone
        .chars()
        .all(|c| c.is_ascii_digit() || PHONE_SEPARATORS.contains(&c));
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    only_allowed && PHONE_DIGITS.contains(&digits)
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("Invalid email regex"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn complete() -> RegistrationForm {
        RegistrationForm::default()
            .with_first_name("Ada")
            .with_last_name("Lovelace")
            .with_email("ada@example.org")
            .with_consent(true)
    }

    #[test]
    fn complete_form_validates() {
        let valid = complete()
            .with_organization("  Analytical Engines Ltd ")
            .with_study_interest(Some(TherapeuticArea::Neurology))
            .validate()
            .unwrap();
        assert_eq!(valid.first_name, "Ada");
        assert_eq!(valid.organization.as_deref(), Some("Analytical Engines Ltd"));
        assert_eq!(valid.phone, None);
        assert_eq!(valid.study_interest, Some(TherapeuticArea::Neurology));
    }

    #[test]
    fn empty_form_reports_every_failure() {
        let errors = RegistrationForm::default().validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                FieldError::Required(Field::FirstName),
                FieldError::Required(Field::LastName),
                FieldError::Required(Field::Email),
                FieldError::ConsentMissing,
            ]
        );
    }

    #[test]
    fn whitespace_only_name_is_missing() {
        let errors = complete().with_first_name("   ").validate().unwrap_err();
        assert_eq!(errors, vec![FieldError::Required(Field::FirstName)]);
    }

    #[test]
    fn malformed_email() {
        let errors = complete().with_email("ada@nowhere").validate().unwrap_err();
        assert_eq!(errors, vec![FieldError::InvalidEmail("ada@nowhere".into())]);
        assert_eq!(errors[0].field(), Field::Email);
    }

    #[test]
    fn phone_with_separators_is_accepted() {
        let valid = complete().with_phone("+1 (555) 010-9999").validate().unwrap();
        assert_eq!(valid.phone.as_deref(), Some("+1 (555) 010-9999"));
    }

    #[test]
    fn phone_rules() {
        assert!(complete().with_phone("12345").validate().is_err());
        assert!(complete().with_phone("555-CALL-NOW").validate().is_err());
        assert!(complete().with_phone("1234567890123456").validate().is_err());
        assert!(complete().with_phone("5550100").validate().is_ok());
    }

    #[test]
    fn error_messages_name_the_field() {
        assert_eq!(
            FieldError::Required(Field::LastName).to_string(),
            "Last name is required"
        );
        assert_eq!(
            FieldError::ConsentMissing.to_string(),
            "Consent is required to register"
        );
    }
}
