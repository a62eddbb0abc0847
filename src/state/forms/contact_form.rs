//! Contact form state machine
//!
//! `ContactForm` owns the field values, per-field errors, the touched set and
//! the submission status. Every user-facing operation is a plain method that
//! transitions the state synchronously; the asynchronous parts of a submission
//! (the transport call and the auto-revert timer) live in
//! [`crate::submit::ContactController`], which feeds their results back in
//! through [`ContactForm::finish_submit`] and [`ContactForm::revert_status`].

use super::field::{FieldName, FormField};
use super::validation::{validate_field, ValidationError};
use crate::submit::SubmitError;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

/// Lifecycle stage of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmissionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// What gets handed to the transport on a valid submit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A submit that passed validation and moved the form to `Submitting`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartedSubmission {
    /// Monotonic number identifying this attempt
    pub cycle: u64,
    pub payload: ContactPayload,
}

/// Why a submit did not start
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("validation failed for {}", describe_fields(.fields))]
    ValidationFailed { fields: Vec<FieldName> },

    #[error("a submission is already in flight")]
    AlreadySubmitting,
}

fn describe_fields(fields: &[FieldName]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: FormField,
    pub email: FormField,
    pub message: FormField,
    errors: BTreeMap<FieldName, ValidationError>,
    touched: BTreeSet<FieldName>,
    status: SubmissionStatus,
    cycle: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: FormField::new(FieldName::Name),
            email: FormField::new(FieldName::Email),
            message: FormField::new(FieldName::Message),
            errors: BTreeMap::new(),
            touched: BTreeSet::new(),
            status: SubmissionStatus::Idle,
            cycle: 0,
        }
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        match name {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Message => &self.message,
        }
    }

    fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        match name {
            FieldName::Name => &mut self.name,
            FieldName::Email => &mut self.email,
            FieldName::Message => &mut self.message,
        }
    }

    pub fn value(&self, name: FieldName) -> &str {
        self.field(name).as_text()
    }

    /// Stored error for a field, whether or not it is shown yet
    pub fn error(&self, name: FieldName) -> Option<&ValidationError> {
        self.errors.get(&name)
    }

    /// Error the view should render: only once the field has been touched
    pub fn visible_error(&self, name: FieldName) -> Option<&ValidationError> {
        if self.is_touched(name) {
            self.error(name)
        } else {
            None
        }
    }

    pub fn is_touched(&self, name: FieldName) -> bool {
        self.touched.contains(&name)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Live character count shown under the message field
    pub fn message_char_count(&self) -> usize {
        self.message.char_count()
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        self.status != SubmissionStatus::Submitting
    }

    /// Set a field's value, revalidating it if the user already left it once
    pub fn update_field(&mut self, name: FieldName, value: impl Into<String>) {
        self.field_mut(name).value = value.into();
        if self.is_touched(name) {
            self.revalidate(name);
        }
    }

    /// Mark a field touched and validate it
    pub fn blur_field(&mut self, name: FieldName) {
        self.touched.insert(name);
        self.revalidate(name);
    }

    fn revalidate(&mut self, name: FieldName) {
        match validate_field(name, self.value(name)) {
            Ok(()) => {
                self.errors.remove(&name);
            }
            Err(err) => {
                self.errors.insert(name, err);
            }
        }
    }

    /// Validate everything and, if clean, move to `Submitting`.
    ///
    /// A call while already submitting changes nothing. A failing validation
    /// touches every field so all errors become visible, but leaves the
    /// status where it was.
    pub fn begin_submit(&mut self) -> Result<StartedSubmission, SubmitRejected> {
        if self.status == SubmissionStatus::Submitting {
            return Err(SubmitRejected::AlreadySubmitting);
        }

        self.errors.clear();
        for name in FieldName::ALL {
            self.touched.insert(name);
            if let Err(err) = validate_field(name, self.value(name)) {
                self.errors.insert(name, err);
            }
        }

        if self.has_errors() {
            return Err(SubmitRejected::ValidationFailed {
                fields: self.errors.keys().copied().collect(),
            });
        }

        self.cycle += 1;
        self.status = SubmissionStatus::Submitting;
        Ok(StartedSubmission {
            cycle: self.cycle,
            payload: ContactPayload {
                name: self.name.value.clone(),
                email: self.email.value.clone(),
                message: self.message.value.clone(),
            },
        })
    }

    /// Apply the transport's verdict for `cycle`.
    ///
    /// Returns false when the result belongs to a superseded attempt or the
    /// form is not submitting, in which case nothing changes.
    pub fn finish_submit(&mut self, cycle: u64, result: Result<(), SubmitError>) -> bool {
        if cycle != self.cycle || self.status != SubmissionStatus::Submitting {
            return false;
        }

        match result {
            Ok(()) => {
                self.status = SubmissionStatus::Success;
                for name in FieldName::ALL {
                    self.field_mut(name).clear();
                }
                self.touched.clear();
                self.errors.clear();
            }
            Err(_) => {
                self.status = SubmissionStatus::Error;
            }
        }
        true
    }

    /// Auto-revert from `Success` to `Idle`, unless a newer attempt started
    pub fn revert_status(&mut self, cycle: u64) -> bool {
        if cycle != self.cycle || self.status != SubmissionStatus::Success {
            return false;
        }
        self.status = SubmissionStatus::Idle;
        true
    }

    /// Close the failure banner; field contents stay for a retry
    pub fn dismiss_error(&mut self) -> bool {
        if self.status != SubmissionStatus::Error {
            return false;
        }
        self.status = SubmissionStatus::Idle;
        true
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const THIRTY_CHARS: &str = "This message has twenty chars.";

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.update_field(FieldName::Name, "Jo");
        form.update_field(FieldName::Email, "jo@x.com");
        form.update_field(FieldName::Message, THIRTY_CHARS);
        form
    }

    fn error_text(form: &ContactForm, name: FieldName) -> Option<String> {
        form.error(name).map(|e| e.to_string())
    }

    mod update_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_untouched_field_is_not_validated() {
            let mut form = ContactForm::new();
            form.update_field(FieldName::Name, "A");
            assert_eq!(form.value(FieldName::Name), "A");
            assert!(form.error(FieldName::Name).is_none());
        }

        #[test]
        fn test_touched_field_revalidates_on_change() {
            let mut form = ContactForm::new();
            form.blur_field(FieldName::Name);
            assert_eq!(
                error_text(&form, FieldName::Name).as_deref(),
                Some("Name is required")
            );

            form.update_field(FieldName::Name, "A");
            assert_eq!(
                error_text(&form, FieldName::Name).as_deref(),
                Some("Name must be at least 2 characters")
            );

            form.update_field(FieldName::Name, "Al");
            assert!(form.error(FieldName::Name).is_none());
        }

        #[test]
        fn test_character_count_tracks_message() {
            let mut form = ContactForm::new();
            form.update_field(FieldName::Message, "Hello World");
            assert_eq!(form.message_char_count(), 11);
        }

        #[test]
        fn test_edits_allowed_while_submitting() {
            let mut form = filled_form();
            form.begin_submit().unwrap();
            form.update_field(FieldName::Name, "Joe");
            assert_eq!(form.value(FieldName::Name), "Joe");
        }
    }

    mod blur_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_blur_marks_touched() {
            let mut form = ContactForm::new();
            assert!(!form.is_touched(FieldName::Email));
            form.blur_field(FieldName::Email);
            assert!(form.is_touched(FieldName::Email));
        }

        #[test]
        fn test_blur_matches_validation_table() {
            let cases = [
                (FieldName::Name, "A", Some("Name must be at least 2 characters")),
                (FieldName::Name, "Jo", None),
                (FieldName::Email, "foo", Some("Please enter a valid email address")),
                (FieldName::Email, "jo@x.com", None),
                (
                    FieldName::Message,
                    "nineteen characters",
                    Some("Message must be at least 20 characters"),
                ),
                (FieldName::Message, "twenty characters!!!", None),
            ];

            for (name, value, expected) in cases {
                let mut form = ContactForm::new();
                form.update_field(name, value);
                form.blur_field(name);
                assert_eq!(
                    error_text(&form, name).as_deref(),
                    expected,
                    "{name} = {value:?}"
                );
            }
        }

        #[test]
        fn test_visible_error_requires_touch() {
            let mut form = ContactForm::new();
            // Errors from a previous pass are hidden until the field is touched
            form.blur_field(FieldName::Name);
            assert!(form.visible_error(FieldName::Name).is_some());
            assert!(form.visible_error(FieldName::Email).is_none());
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_form_reports_all_required() {
            let mut form = ContactForm::new();
            let rejected = form.begin_submit().unwrap_err();

            assert_eq!(
                rejected,
                SubmitRejected::ValidationFailed {
                    fields: FieldName::ALL.to_vec()
                }
            );
            assert_eq!(form.status(), SubmissionStatus::Idle);
            assert_eq!(form.touched.iter().copied().collect::<Vec<_>>(), FieldName::ALL.to_vec());
            assert_eq!(
                error_text(&form, FieldName::Name).as_deref(),
                Some("Name is required")
            );
            assert_eq!(
                error_text(&form, FieldName::Email).as_deref(),
                Some("Email is required")
            );
            assert_eq!(
                error_text(&form, FieldName::Message).as_deref(),
                Some("Message is required")
            );
        }

        #[test]
        fn test_single_invalid_field_blocks_submit() {
            let mut form = filled_form();
            form.update_field(FieldName::Email, "nope");
            let rejected = form.begin_submit().unwrap_err();
            assert_eq!(
                rejected,
                SubmitRejected::ValidationFailed {
                    fields: vec![FieldName::Email]
                }
            );
            assert_eq!(form.status(), SubmissionStatus::Idle);
        }

        #[test]
        fn test_valid_submit_moves_to_submitting() {
            let mut form = filled_form();
            let started = form.begin_submit().unwrap();

            assert_eq!(form.status(), SubmissionStatus::Submitting);
            assert!(!form.can_submit());
            assert_eq!(started.cycle, 1);
            assert_eq!(
                started.payload,
                ContactPayload {
                    name: "Jo".to_string(),
                    email: "jo@x.com".to_string(),
                    message: THIRTY_CHARS.to_string(),
                }
            );
        }

        #[test]
        fn test_submit_while_submitting_is_noop() {
            let mut form = filled_form();
            form.begin_submit().unwrap();
            form.update_field(FieldName::Email, "broken");
            // Touched by the first submit, so the edit revalidated
            assert!(form.error(FieldName::Email).is_some());
            let errors = form.errors.clone();
            let touched = form.touched.clone();

            assert_eq!(form.begin_submit(), Err(SubmitRejected::AlreadySubmitting));
            assert_eq!(form.status(), SubmissionStatus::Submitting);
            assert_eq!(form.cycle(), 1);
            assert_eq!(form.errors, errors);
            assert_eq!(form.touched, touched);
            assert_eq!(form.email.value, "broken");
        }

        #[test]
        fn test_success_resets_form() {
            let mut form = filled_form();
            let started = form.begin_submit().unwrap();

            assert!(form.finish_submit(started.cycle, Ok(())));
            assert_eq!(form.status(), SubmissionStatus::Success);
            for name in FieldName::ALL {
                assert_eq!(form.value(name), "");
                assert!(!form.is_touched(name));
            }
            assert!(!form.has_errors());
        }

        #[test]
        fn test_failure_keeps_contents() {
            let mut form = filled_form();
            let started = form.begin_submit().unwrap();

            assert!(form.finish_submit(started.cycle, Err(SubmitError::Timeout)));
            assert_eq!(form.status(), SubmissionStatus::Error);
            assert_eq!(form.value(FieldName::Name), "Jo");
            assert!(form.can_submit());
        }

        #[test]
        fn test_stale_result_is_ignored() {
            let mut form = filled_form();
            form.begin_submit().unwrap();
            assert!(!form.finish_submit(99, Ok(())));
            assert_eq!(form.status(), SubmissionStatus::Submitting);
        }

        #[test]
        fn test_result_without_submission_is_ignored() {
            let mut form = ContactForm::new();
            assert!(!form.finish_submit(0, Ok(())));
            assert_eq!(form.status(), SubmissionStatus::Idle);
        }

        #[test]
        fn test_retry_after_error() {
            let mut form = filled_form();
            let first = form.begin_submit().unwrap();
            form.finish_submit(first.cycle, Err(SubmitError::Timeout));

            let second = form.begin_submit().unwrap();
            assert_eq!(second.cycle, 2);
            assert_eq!(form.status(), SubmissionStatus::Submitting);
        }

        #[test]
        fn test_invalid_submit_keeps_success_status() {
            let mut form = filled_form();
            let started = form.begin_submit().unwrap();
            form.finish_submit(started.cycle, Ok(()));

            assert!(form.begin_submit().is_err());
            assert_eq!(form.status(), SubmissionStatus::Success);
        }
    }

    mod status {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_revert_from_success() {
            let mut form = filled_form();
            let started = form.begin_submit().unwrap();
            form.finish_submit(started.cycle, Ok(()));

            assert!(form.revert_status(started.cycle));
            assert_eq!(form.status(), SubmissionStatus::Idle);
        }

        #[test]
        fn test_revert_from_superseded_cycle_is_ignored() {
            let mut form = filled_form();
            let first = form.begin_submit().unwrap();
            form.finish_submit(first.cycle, Ok(()));

            form.update_field(FieldName::Name, "Jo");
            form.update_field(FieldName::Email, "jo@x.com");
            form.update_field(FieldName::Message, THIRTY_CHARS);
            let second = form.begin_submit().unwrap();
            form.finish_submit(second.cycle, Ok(()));

            assert!(!form.revert_status(first.cycle));
            assert_eq!(form.status(), SubmissionStatus::Success);
            assert!(form.revert_status(second.cycle));
        }

        #[test]
        fn test_revert_only_applies_to_success() {
            let mut form = filled_form();
            let started = form.begin_submit().unwrap();
            assert!(!form.revert_status(started.cycle));
            assert_eq!(form.status(), SubmissionStatus::Submitting);
        }

        #[test]
        fn test_dismiss_error() {
            let mut form = filled_form();
            let started = form.begin_submit().unwrap();
            form.finish_submit(started.cycle, Err(SubmitError::Timeout));

            assert!(form.dismiss_error());
            assert_eq!(form.status(), SubmissionStatus::Idle);
            assert_eq!(form.value(FieldName::Email), "jo@x.com");
            assert!(!form.dismiss_error());
        }

        #[test]
        fn test_labels() {
            assert_eq!(SubmissionStatus::default(), SubmissionStatus::Idle);
            assert_eq!(SubmissionStatus::Submitting.label(), "submitting");
        }
    }

    #[test]
    fn test_end_to_end_happy_path() {
        let mut form = ContactForm::new();
        form.update_field(FieldName::Name, "Jo");
        form.update_field(FieldName::Email, "jo@x.com");
        form.update_field(FieldName::Message, THIRTY_CHARS);
        assert_eq!(THIRTY_CHARS.chars().count(), 30);
        for name in FieldName::ALL {
            form.blur_field(name);
        }
        assert!(!form.has_errors());

        let started = form.begin_submit().unwrap();
        assert_eq!(form.status(), SubmissionStatus::Submitting);
        form.finish_submit(started.cycle, Ok(()));
        assert_eq!(form.status(), SubmissionStatus::Success);
        assert!(FieldName::ALL.iter().all(|&n| form.value(n).is_empty()));
    }
}
