use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use thiserror::Error;

pub const DEFAULT_SUBJECT: &str = "Contact from Portfolio";

/// Characters `encodeURIComponent` leaves alone.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Subject => "subject",
            FormField::Message => "message",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    #[error("missing required field: {0}")]
    MissingField(FormField),
}

/// Uncommitted values of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        }
    }

    /// Presence checks only; the subject is optional.
    pub fn validate(&self) -> Result<(), FormError> {
        let required = [
            (FormField::Name, &self.name),
            (FormField::Email, &self.email),
            (FormField::Message, &self.message),
        ];
        match required.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(FormError::MissingField(*field)),
            None => Ok(()),
        }
    }

    /// The `mailto:` URI that hands the message to the visitor's mail client.
    pub fn mailto(&self, recipient: &str) -> Result<String, FormError> {
        self.validate()?;
        let subject = if self.subject.trim().is_empty() {
            DEFAULT_SUBJECT
        } else {
            &self.subject
        };
        let body = format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            self.name, self.email, self.message
        );
        Ok(format!(
            "mailto:{recipient}?subject={}&body={}",
            encode_component(subject),
            encode_component(&body)
        ))
    }
}

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

pub fn mailto_link(email: &str) -> String {
    format!("mailto:{email}")
}

pub fn tel_link(phone: &str) -> String {
    let number = phone
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>();
    format!("tel:{number}")
}

/// `wa.me` only accepts the bare international number.
pub fn whatsapp_link(phone: &str) -> String {
    let digits = phone
        .chars()
        .filter(char::is_ascii_digit)
        .collect::<String>();
    format!("https://wa.me/{digits}")
}
