//! Contact form pipeline.
//!
//! This module covers everything between a keystroke in the contact form and
//! the banner reporting the outcome:
//! - Field rules and validation
//! - Input sanitisation
//! - Fixed-shape form state and submission lifecycle
//! - HTTP submission with timeout and retry

mod client;
mod error;
mod form;
mod model;
mod retry;
mod sanitize;
mod validation;

pub use client::{ContactSubmitter, HttpSubmitter, REQUEST_TIMEOUT};
pub use error::ContactError;
pub use form::{Banner, BannerKind, ContactForm, FieldState, FormStatus, BANNER_TIMEOUT};
pub use model::{ApiResponse, ContactFormData, SubmissionReceipt};
pub use retry::{submit_with_retry, submit_with_retry_using, RetryPolicy};
pub use sanitize::sanitize_input;
pub use validation::{validate_contact_form, validate_field, Field, FieldRules, ValidationResult};
