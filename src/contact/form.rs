//! Contact form state.
//!
//! Holds one `FieldState` per field plus the submission lifecycle and the
//! banner shown after a submission settles. All transitions are plain
//! methods so the form can be driven without a terminal.

use super::error::ContactError;
use super::model::{ContactFormData, SubmissionReceipt};
use super::sanitize::sanitize_input;
use super::validation::{validate_field, Field, ValidationResult};
use log::*;
use std::time::{Duration, Instant};

/// How long a success banner stays visible.
///
pub const BANNER_TIMEOUT: Duration = Duration::from_secs(5);

/// State of a single input.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub error: Option<String>,
    pub touched: bool,
}

/// Specifying the submission lifecycle.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FormStatus {
    Idle,
    Submitting,
}

/// Specifying banner kinds.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BannerKind {
    Success,
    Error,
}

/// Message shown after a submission settles.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
    pub shown_at: Instant,
}

/// Fixed-shape contact form.
///
#[derive(Debug, Clone)]
pub struct ContactForm {
    name: FieldState,
    email: FieldState,
    subject: FieldState,
    message: FieldState,
    focused: Field,
    status: FormStatus,
    banner: Option<Banner>,
}

impl Default for ContactForm {
    fn default() -> Self {
        ContactForm::new()
    }
}

impl ContactForm {
    /// Return an empty form focused on the first field.
    ///
    pub fn new() -> Self {
        ContactForm {
            name: FieldState::default(),
            email: FieldState::default(),
            subject: FieldState::default(),
            message: FieldState::default(),
            focused: Field::Name,
            status: FormStatus::Idle,
            banner: None,
        }
    }

    pub fn field(&self, field: Field) -> &FieldState {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut FieldState {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    pub fn focused(&self) -> Field {
        self.focused
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    /// Replace the value of a field with sanitised input, marking it touched
    /// and clearing its error.
    ///
    pub fn input(&mut self, field: Field, raw: &str) {
        let state = self.field_mut(field);
        state.value = sanitize_input(raw);
        state.touched = true;
        state.error = None;
    }

    /// Append a character to the focused field.
    ///
    pub fn push_char(&mut self, c: char) {
        let field = self.focused;
        let mut value = self.field(field).value.clone();
        value.push(c);
        self.input(field, &value);
    }

    /// Remove the last character of the focused field.
    ///
    pub fn pop_char(&mut self) {
        let field = self.focused;
        let mut value = self.field(field).value.clone();
        value.pop();
        self.input(field, &value);
    }

    /// Validate a field after it loses focus.
    ///
    pub fn blur(&mut self, field: Field) {
        let error = validate_field(field, &self.field(field).value);
        self.field_mut(field).error = error;
    }

    /// Move focus to the next field, validating the one being left.
    ///
    pub fn focus_next(&mut self) {
        self.blur(self.focused);
        self.focused = self.focused.next();
    }

    /// Move focus to the previous field, validating the one being left.
    ///
    pub fn focus_previous(&mut self) {
        self.blur(self.focused);
        self.focused = self.focused.previous();
    }

    /// Validate every field, showing errors even on untouched fields.
    ///
    pub fn validate_all(&mut self) -> ValidationResult {
        let mut result = ValidationResult::success();
        for field in Field::ALL {
            let error = validate_field(field, &self.field(field).value);
            let state = self.field_mut(field);
            if let Some(ref message) = error {
                state.touched = true;
                result.add_error(message.clone());
            }
            state.error = error;
        }
        result
    }

    /// Return the trimmed payload for the current values.
    ///
    pub fn to_data(&self) -> ContactFormData {
        let subject = self.subject.value.trim();
        ContactFormData {
            name: self.name.value.trim().to_string(),
            email: self.email.value.trim().to_string(),
            message: self.message.value.trim().to_string(),
            subject: if subject.is_empty() {
                None
            } else {
                Some(subject.to_string())
            },
        }
    }

    /// Start a submission. Returns the payload to send, or `None` if a
    /// submission is already in flight or the form is invalid.
    ///
    pub fn begin_submit(&mut self) -> Option<ContactFormData> {
        if self.is_submitting() {
            debug!("Ignoring submit while a submission is in flight.");
            return None;
        }
        let result = self.validate_all();
        if !result.is_valid {
            info!(
                "Contact form has {} invalid field(s); submission blocked.",
                result.errors.len()
            );
            return None;
        }
        self.banner = None;
        self.status = FormStatus::Submitting;
        Some(self.to_data())
    }

    /// Settle the in-flight submission.
    ///
    pub fn finish_submit(&mut self, result: Result<SubmissionReceipt, ContactError>) {
        self.finish_submit_at(result, Instant::now());
    }

    fn finish_submit_at(
        &mut self,
        result: Result<SubmissionReceipt, ContactError>,
        now: Instant,
    ) {
        self.status = FormStatus::Idle;
        match result {
            Ok(receipt) => {
                info!("Contact message sent (id {}).", receipt.id);
                self.reset();
                self.banner = Some(Banner {
                    kind: BannerKind::Success,
                    message: "Thanks for reaching out! I'll get back to you soon.".to_string(),
                    shown_at: now,
                });
            }
            Err(e) => {
                if let ContactError::ServerValidation { ref errors, .. } = e {
                    for (key, messages) in errors {
                        if let (Some(field), Some(message)) = (Field::from_key(key), messages.first()) {
                            let state = self.field_mut(field);
                            state.error = Some(message.clone());
                            state.touched = true;
                        }
                    }
                }
                self.banner = Some(Banner {
                    kind: BannerKind::Error,
                    message: e.user_message(),
                    shown_at: now,
                });
            }
        }
    }

    /// Drop a success banner once it has been visible long enough.
    ///
    pub fn tick(&mut self, now: Instant) {
        let expired = matches!(
            self.banner,
            Some(Banner { kind: BannerKind::Success, shown_at, .. })
                if now.duration_since(shown_at) >= BANNER_TIMEOUT
        );
        if expired {
            self.banner = None;
        }
    }

    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }

    /// Clear every field back to empty and untouched.
    ///
    pub fn reset(&mut self) {
        for field in Field::ALL {
            *self.field_mut(field) = FieldState::default();
        }
        self.focused = Field::Name;
    }
}
