// ============================================================================
// CREDENTIAL FORM - field state and validation for the sign-in form
// ============================================================================

use std::fmt;

use thiserror::Error;

use crate::models::Credentials;
use crate::utils::constants::USERNAME_MAX_LEN;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Username,
    Password,
}

impl FieldName {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Username => "username",
            FieldName::Password => "password",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display text is what the form shows under the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(FieldName),

    #[error("max length {0}")]
    TooLong(usize),

    #[error("invalid format")]
    InvalidFormat,
}

type Rule = fn(FieldName, &str) -> Result<(), FieldError>;

fn required(field: FieldName, value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        Err(FieldError::Required(field))
    } else {
        Ok(())
    }
}

fn max_length(_: FieldName, value: &str) -> Result<(), FieldError> {
    if value.chars().count() > USERNAME_MAX_LEN {
        Err(FieldError::TooLong(USERNAME_MAX_LEN))
    } else {
        Ok(())
    }
}

/// Letters, digits and `_ . @ + -`
fn username_format(_: FieldName, value: &str) -> Result<(), FieldError> {
    let valid = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '@' | '+' | '-'));
    if valid {
        Ok(())
    } else {
        Err(FieldError::InvalidFormat)
    }
}

const USERNAME_RULES: &[Rule] = &[required, max_length, username_format];
const PASSWORD_RULES: &[Rule] = &[required];

fn rules_for(field: FieldName) -> &'static [Rule] {
    match field {
        FieldName::Username => USERNAME_RULES,
        FieldName::Password => PASSWORD_RULES,
    }
}

/// Runs the field's rules in order and stops at the first failure
pub fn validate_value(field: FieldName, value: &str) -> Result<(), FieldError> {
    rules_for(field)
        .iter()
        .try_for_each(|rule| rule(field, value))
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldState {
    pub value: String,
    pub error: Option<FieldError>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CredentialForm {
    username: FieldState,
    password: FieldState,
}

impl CredentialForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, name: FieldName) -> &FieldState {
        match name {
            FieldName::Username => &self.username,
            FieldName::Password => &self.password,
        }
    }

    fn field_mut(&mut self, name: FieldName) -> &mut FieldState {
        match name {
            FieldName::Username => &mut self.username,
            FieldName::Password => &mut self.password,
        }
    }

    /// Any edit clears that field's error right away
    pub fn edit(&mut self, name: FieldName, value: impl Into<String>) {
        let field = self.field_mut(name);
        field.value = value.into();
        field.error = None;
    }

    /// Recomputes every field's error; true when all pass
    pub fn validate(&mut self) -> bool {
        let mut valid = true;
        for name in [FieldName::Username, FieldName::Password] {
            let field = self.field_mut(name);
            field.error = validate_value(name, &field.value).err();
            valid &= field.error.is_none();
        }
        valid
    }

    /// Credentials to hand to the session store, or `None` with the errors
    /// populated when any field fails
    pub fn submit(&mut self) -> Option<Credentials> {
        if !self.validate() {
            log::info!("📝 [FORM] Sign-in blocked by field validation");
            return None;
        }
        Some(Credentials {
            username: self.username.value.clone(),
            password: self.password.value.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(username: &str, password: &str) -> CredentialForm {
        let mut form = CredentialForm::new();
        form.edit(FieldName::Username, username);
        form.edit(FieldName::Password, password);
        form
    }

    #[test]
    fn username_with_space_is_a_format_error() {
        let mut form = form("bad name!", "secret");
        assert_eq!(form.submit(), None);
        assert_eq!(form.field(FieldName::Username).error, Some(FieldError::InvalidFormat));
        assert_eq!(form.field(FieldName::Password).error, None);
    }

    #[test]
    fn empty_username_is_required_error_not_format() {
        let mut form = form("", "secret");
        assert_eq!(form.submit(), None);
        let error = form.field(FieldName::Username).error.unwrap();
        assert_eq!(error, FieldError::Required(FieldName::Username));
        assert_eq!(error.to_string(), "username is required");
    }

    #[test]
    fn overlong_username_stops_at_length_rule() {
        let long = "a".repeat(USERNAME_MAX_LEN + 1);
        assert_eq!(validate_value(FieldName::Username, &long), Err(FieldError::TooLong(150)));
        assert!(validate_value(FieldName::Username, &"a".repeat(USERNAME_MAX_LEN)).is_ok());

        // both rules fail; only the first one is reported
        let long_and_bad = "!".repeat(USERNAME_MAX_LEN + 1);
        assert_eq!(
            validate_value(FieldName::Username, &long_and_bad).unwrap_err().to_string(),
            "max length 150"
        );
    }

    #[test]
    fn username_accepts_django_charset() {
        for ok in ["admin", "jo.doe", "a_b", "me@example.com", "x+y", "dash-ed", "User42"] {
            assert!(validate_value(FieldName::Username, ok).is_ok(), "{}", ok);
        }
        for bad in ["tab\there", "semi;colon", "ñandú", " "] {
            assert_eq!(validate_value(FieldName::Username, bad), Err(FieldError::InvalidFormat), "{}", bad);
        }
    }

    #[test]
    fn password_only_needs_to_be_present() {
        assert!(validate_value(FieldName::Password, " ").is_ok());
        assert_eq!(
            validate_value(FieldName::Password, "").unwrap_err().to_string(),
            "password is required"
        );
    }

    #[test]
    fn every_field_is_validated_on_submit() {
        let mut form = form("", "");
        assert_eq!(form.submit(), None);
        assert!(form.field(FieldName::Username).error.is_some());
        assert!(form.field(FieldName::Password).error.is_some());
    }

    #[test]
    fn editing_clears_only_that_field() {
        let mut form = form("", "");
        form.validate();

        form.edit(FieldName::Username, "a b");
        assert_eq!(form.field(FieldName::Username).error, None);
        assert!(form.field(FieldName::Password).error.is_some());
    }

    #[test]
    fn valid_form_yields_credentials() {
        let mut form = form("admin", "hunter2");
        assert_eq!(
            form.submit(),
            Some(Credentials {
                username: "admin".to_string(),
                password: "hunter2".to_string(),
            })
        );
    }
}
