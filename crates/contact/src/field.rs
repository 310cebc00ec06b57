use strum::{Display, IntoStaticStr, VariantArray};
use validator::Validate;

use crate::validate::{check_email_field, check_required};

/// One of the four controls of the contact form.
///
/// `VARIANTS` lists them in validation order.
#[derive(Display, IntoStaticStr, VariantArray, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    #[strum(serialize = "firstName")]
    FirstName,
    #[strum(serialize = "lastName")]
    LastName,
    #[strum(serialize = "email")]
    Email,
    #[strum(serialize = "message")]
    Message,
}

impl Field {
    /// Value of the control's `name` attribute.
    pub fn name(&self) -> &'static str {
        (*self).into()
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::FirstName => "Your Name",
            Field::LastName => "Last Name",
            Field::Email => "Your Email",
            Field::Message => "Your Message",
        }
    }

    /// Key used by the validator for the matching `FormFields` member.
    pub(crate) fn key(&self) -> &'static str {
        match self {
            Field::FirstName => "first_name",
            Field::LastName => "last_name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

#[derive(Validate, Default, Clone, Debug, PartialEq, Eq)]
pub struct FormFields {
    #[validate(custom(function = "check_required", message = "First name is required"))]
    pub first_name: String,
    #[validate(custom(function = "check_required", message = "Last name is required"))]
    pub last_name: String,
    #[validate(custom(function = "check_email_field"))]
    pub email: String,
    #[validate(custom(function = "check_required", message = "Message is required"))]
    pub message: String,
}

impl FormFields {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        Field::VARIANTS.iter().all(|f| self.get(*f).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_names() {
        let names: Vec<_> = Field::VARIANTS.iter().map(Field::name).collect();
        assert_eq!(names, ["firstName", "lastName", "email", "message"]);
    }

    #[test]
    fn set_and_get_roundtrip_per_field() {
        let mut fields = FormFields::default();
        assert!(fields.is_empty());

        fields.set(Field::Email, "jane@doe.com");
        assert_eq!(fields.get(Field::Email), "jane@doe.com");
        assert_eq!(fields.get(Field::FirstName), "");
        assert!(!fields.is_empty());
    }
}
