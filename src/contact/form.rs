use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::contact::submit::SubmitError;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

pub const SUBMIT_FAILED: &str = "Failed to submit form. Please try again later.";

/// Loose `local@domain.tld` check. Deliberately not RFC 5322.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    FullName,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::FullName,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FormField::FullName => "fullName",
            FormField::Email => "email",
            FormField::Subject => "subject",
            FormField::Message => "message",
        }
    }

    fn required_message(self) -> &'static str {
        match self {
            FormField::FullName => "Full Name is required",
            FormField::Email => "Email is required",
            FormField::Subject => "Subject is required",
            FormField::Message => "Message is required",
        }
    }
}

/// Raw field values as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub full_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormData {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::FullName => &self.full_name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::FullName => self.full_name = value,
            FormField::Email => self.email = value,
            FormField::Subject => self.subject = value,
            FormField::Message => self.message = value,
        }
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}

/// Per-field validation messages plus an optional form-level submission error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    fields: BTreeMap<FormField, String>,
    submit: Option<String>,
}

impl FormErrors {
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.fields.insert(field, message.into());
    }

    pub fn clear_field(&mut self, field: FormField) -> bool {
        self.fields.remove(&field).is_some()
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit.as_deref()
    }

    pub fn set_submit_error(&mut self, message: impl Into<String>) {
        self.submit = Some(message.into());
    }

    #[cfg(test)]
    pub fn fields(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.fields.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.submit.is_none()
    }
}

/// Validate every field at once, collecting one message per failing field.
pub fn validate(data: &FormData) -> Result<(), FormErrors> {
    let mut errors = FormErrors::default();

    for field in FormField::ALL {
        let value = data.get(field);
        if value.trim().is_empty() {
            errors.insert(field, field.required_message());
        } else if field == FormField::Email && !is_valid_email(value) {
            errors.insert(field, "Please enter a valid email address.");
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting { ticket: u32 },
}

/// Field values, errors and submission progress of the contact form.
///
/// The in-page form and the slide-in panel render the same `ContactForm`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub data: FormData,
    pub errors: FormErrors,
    pub status: SubmitStatus,
    last_ticket: u32,
}

impl ContactForm {
    /// Store a new value and drop any error recorded for that field.
    pub fn update_field(&mut self, field: FormField, value: String) {
        self.data.set(field, value);
        self.errors.clear_field(field);
    }

    /// Validate and, when everything passes, move into `Submitting`.
    ///
    /// Returns the ticket of the new submission. Nothing but the error map
    /// changes when validation fails, and a second attempt while one is in
    /// flight is ignored.
    pub fn begin_submit(&mut self) -> Option<u32> {
        if self.in_flight().is_some() {
            return None;
        }
        match validate(&self.data) {
            Ok(()) => {
                self.last_ticket += 1;
                self.errors = FormErrors::default();
                self.status = SubmitStatus::Submitting { ticket: self.last_ticket };
                Some(self.last_ticket)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// Apply the collaborator's answer. Returns `true` when the submission
    /// identified by `ticket` succeeded.
    pub fn finish_submit(&mut self, ticket: u32, result: Result<(), SubmitError>) -> bool {
        if self.in_flight() != Some(ticket) {
            return false;
        }
        self.status = SubmitStatus::Idle;
        match result {
            Ok(()) => {
                self.data = FormData::default();
                self.errors = FormErrors::default();
                true
            }
            Err(SubmitError::Validation(errors)) => {
                self.errors = errors;
                false
            }
            Err(SubmitError::Transport(_)) => {
                self.errors.set_submit_error(SUBMIT_FAILED);
                false
            }
        }
    }

    pub fn in_flight(&self) -> Option<u32> {
        match self.status {
            SubmitStatus::Submitting { ticket } => Some(ticket),
            SubmitStatus::Idle => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormData {
        FormData {
            full_name: "Dana Green".to_string(),
            email: "dana@example.com".to_string(),
            subject: "Office space".to_string(),
            message: "Looking for 200 sqm downtown.".to_string(),
        }
    }

    #[test]
    fn test_email_pattern() {
        assert!(!is_valid_email("a@b"));
        assert!(is_valid_email("a@b.com"));
        assert!(!is_valid_email("a"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("@b.com"));
        assert!(is_valid_email("first.last@sub.domain.org"));
    }

    #[test]
    fn test_each_blank_field_yields_exactly_its_error() {
        for field in FormField::ALL {
            let mut form = ContactForm {
                data: filled(),
                ..Default::default()
            };
            form.data.set(field, "   ".to_string());
            let before = form.data.clone();

            assert_eq!(form.begin_submit(), None);
            assert_eq!(form.data, before);
            assert_eq!(form.errors.fields().count(), 1);
            assert!(form.errors.get(field).is_some(), "missing error for {:?}", field);
            assert!(!form.is_submitting());
        }
    }

    #[test]
    fn test_blank_full_name_only_scenario() {
        let mut form = ContactForm::default();
        form.update_field(FormField::FullName, String::new());
        form.update_field(FormField::Email, "x@y.com".to_string());
        form.update_field(FormField::Subject, "Hi".to_string());
        form.update_field(FormField::Message, "Hello".to_string());

        assert_eq!(form.begin_submit(), None);
        assert_eq!(form.errors.get(FormField::FullName), Some("Full Name is required"));
        assert_eq!(form.errors.get(FormField::Email), None);
        assert_eq!(form.errors.get(FormField::Subject), None);
        assert_eq!(form.errors.get(FormField::Message), None);
        assert_eq!(form.status, SubmitStatus::Idle);
    }

    #[test]
    fn test_invalid_email_message() {
        let mut data = filled();
        data.email = "a@b".to_string();
        let errors = validate(&data).unwrap_err();
        assert_eq!(errors.get(FormField::Email), Some("Please enter a valid email address."));

        data.email = " ".to_string();
        let errors = validate(&data).unwrap_err();
        assert_eq!(errors.get(FormField::Email), Some("Email is required"));
    }

    #[test]
    fn test_editing_clears_only_that_fields_error() {
        let mut form = ContactForm::default();
        assert_eq!(form.begin_submit(), None);
        assert_eq!(form.errors.fields().count(), 4);

        form.update_field(FormField::Subject, "H".to_string());

        assert_eq!(form.errors.get(FormField::Subject), None);
        assert!(form.errors.get(FormField::FullName).is_some());
        assert!(form.errors.get(FormField::Email).is_some());
        assert!(form.errors.get(FormField::Message).is_some());
    }

    #[test]
    fn test_successful_submit_resets_form() {
        let mut form = ContactForm {
            data: filled(),
            ..Default::default()
        };
        let ticket = form.begin_submit().expect("valid form starts submitting");
        assert!(form.is_submitting());
        assert_eq!(form.data, filled());

        assert!(form.finish_submit(ticket, Ok(())));
        assert!(form.data.is_empty());
        assert!(form.errors.is_empty());
        assert_eq!(form.status, SubmitStatus::Idle);
    }

    #[test]
    fn test_second_submit_while_in_flight_is_ignored() {
        let mut form = ContactForm {
            data: filled(),
            ..Default::default()
        };
        let ticket = form.begin_submit();
        assert!(ticket.is_some());
        assert_eq!(form.begin_submit(), None);
        assert_eq!(form.in_flight(), ticket);
    }

    #[test]
    fn test_transport_failure_keeps_data_for_retry() {
        let mut form = ContactForm {
            data: filled(),
            ..Default::default()
        };
        let ticket = form.begin_submit().unwrap();

        let succeeded = form.finish_submit(ticket, Err(SubmitError::Transport("offline".to_string())));

        assert!(!succeeded);
        assert_eq!(form.data, filled());
        assert_eq!(form.errors.submit_error(), Some(SUBMIT_FAILED));
        assert_eq!(form.errors.fields().count(), 0);
        assert!(form.begin_submit().is_some());
    }

    #[test]
    fn test_rejected_fields_from_collaborator_are_shown() {
        let mut form = ContactForm {
            data: filled(),
            ..Default::default()
        };
        let ticket = form.begin_submit().unwrap();
        let mut rejected = FormErrors::default();
        rejected.insert(FormField::Email, "Address bounced");

        form.finish_submit(ticket, Err(SubmitError::Validation(rejected)));

        assert_eq!(form.errors.get(FormField::Email), Some("Address bounced"));
        assert_eq!(form.data, filled());
    }

    #[test]
    fn test_stale_result_is_ignored() {
        let mut form = ContactForm {
            data: filled(),
            ..Default::default()
        };
        let ticket = form.begin_submit().unwrap();
        assert!(!form.finish_submit(ticket + 1, Ok(())));
        assert!(form.is_submitting());
        assert_eq!(form.data, filled());
    }

    #[test]
    fn test_form_data_serializes_camel_case() {
        let json = serde_json::to_value(filled()).unwrap();
        assert_eq!(json["fullName"], "Dana Green");
        assert_eq!(json["email"], "dana@example.com");
        assert_eq!(json["subject"], "Office space");
        assert!(json.get("full_name").is_none());
    }
}
