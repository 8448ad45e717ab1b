//! Contact field rules and the validators built on them.
//!
//! Every field is checked in the same order: required, minimum length,
//! maximum length, then format. The first failing check produces the error.

use super::model::ContactFormData;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NAME_PATTERN: Regex = Regex::new(r"^[\p{L}\s'-]+$").unwrap();
    static ref EMAIL_PATTERN: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Specifying the fields of the contact form in display order.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

/// Format constraint applied after the length checks.
///
#[derive(Debug, Clone, Copy)]
enum Format {
    PersonName,
    Email,
}

/// Rule set for a single field.
///
#[derive(Debug, Clone, Copy)]
pub struct FieldRules {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    format: Option<Format>,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Return the key used for this field in API payloads and error maps.
    ///
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    /// Return the human-readable label.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    /// Look up a field by its payload key.
    ///
    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL.iter().copied().find(|field| field.key() == key)
    }

    pub fn rules(&self) -> FieldRules {
        match self {
            Field::Name => FieldRules {
                required: true,
                min_length: Some(2),
                max_length: Some(50),
                format: Some(Format::PersonName),
            },
            Field::Email => FieldRules {
                required: true,
                min_length: None,
                max_length: None,
                format: Some(Format::Email),
            },
            Field::Subject => FieldRules {
                required: false,
                min_length: Some(2),
                max_length: Some(100),
                format: None,
            },
            Field::Message => FieldRules {
                required: true,
                min_length: Some(10),
                max_length: Some(1000),
                format: None,
            },
        }
    }

    /// Return the field following this one, wrapping around.
    ///
    pub fn next(&self) -> Field {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Subject,
            Field::Subject => Field::Message,
            Field::Message => Field::Name,
        }
    }

    /// Return the field preceding this one, wrapping around.
    ///
    pub fn previous(&self) -> Field {
        match self {
            Field::Name => Field::Message,
            Field::Email => Field::Name,
            Field::Subject => Field::Email,
            Field::Message => Field::Subject,
        }
    }
}

fn format_error(field: Field, format: Format) -> String {
    match format {
        Format::PersonName => format!(
            "{} can only contain letters, spaces, hyphens, and apostrophes",
            field.label()
        ),
        Format::Email => "Please enter a valid email address".to_string(),
    }
}

/// Validate a single raw value for the given field. Returns the first
/// applicable error, or `None` if the value is acceptable.
///
pub fn validate_field(field: Field, value: &str) -> Option<String> {
    let rules = field.rules();
    let trimmed = value.trim();

    if trimmed.is_empty() {
        if rules.required {
            return Some(format!("{} is required", field.label()));
        }
        return None;
    }

    let length = trimmed.chars().count();
    if let Some(min) = rules.min_length {
        if length < min {
            return Some(format!(
                "{} must be at least {} characters",
                field.label(),
                min
            ));
        }
    }
    if let Some(max) = rules.max_length {
        if length > max {
            return Some(format!(
                "{} must be at most {} characters",
                field.label(),
                max
            ));
        }
    }

    let matches = match rules.format {
        Some(Format::PersonName) => NAME_PATTERN.is_match(trimmed),
        Some(Format::Email) => EMAIL_PATTERN.is_match(trimmed),
        None => true,
    };
    if !matches {
        // Format is always set when a match can fail.
        return rules.format.map(|format| format_error(field, format));
    }

    None
}

/// Outcome of validating a whole submission.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Return a passing result with no errors.
    ///
    pub fn success() -> Self {
        ValidationResult {
            is_valid: true,
            errors: vec![],
        }
    }

    pub fn add_error(&mut self, error: String) {
        self.is_valid = false;
        self.errors.push(error);
    }
}

/// Validate every field of the payload, collecting errors in field order.
///
pub fn validate_contact_form(data: &ContactFormData) -> ValidationResult {
    let subject = data.subject.as_deref().unwrap_or("");
    let values = [
        (Field::Name, data.name.as_str()),
        (Field::Email, data.email.as_str()),
        (Field::Subject, subject),
        (Field::Message, data.message.as_str()),
    ];

    let mut result = ValidationResult::success();
    for (field, value) in values {
        if let Some(error) = validate_field(field, value) {
            result.add_error(error);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::internet::en::SafeEmail;
    use fake::Fake;

    #[test]
    fn test_required_fields() {
        assert_eq!(
            validate_field(Field::Name, "   "),
            Some("Name is required".to_string())
        );
        assert_eq!(
            validate_field(Field::Email, ""),
            Some("Email is required".to_string())
        );
        assert_eq!(
            validate_field(Field::Message, "\n"),
            Some("Message is required".to_string())
        );
        assert_eq!(validate_field(Field::Subject, ""), None);
    }

    #[test]
    fn test_too_short_wins_over_format() {
        // "1" breaks the name pattern too, but length is checked first.
        assert_eq!(
            validate_field(Field::Name, "1"),
            Some("Name must be at least 2 characters".to_string())
        );
        for length in 1..10 {
            let value = "x".repeat(length);
            assert_eq!(
                validate_field(Field::Message, &value),
                Some("Message must be at least 10 characters".to_string())
            );
        }
        assert_eq!(
            validate_field(Field::Subject, "a"),
            Some("Subject must be at least 2 characters".to_string())
        );
    }

    #[test]
    fn test_too_long() {
        assert_eq!(
            validate_field(Field::Name, &"a".repeat(51)),
            Some("Name must be at most 50 characters".to_string())
        );
        assert_eq!(validate_field(Field::Name, &"a".repeat(50)), None);
        assert_eq!(
            validate_field(Field::Subject, &"s".repeat(101)),
            Some("Subject must be at most 100 characters".to_string())
        );
        assert_eq!(
            validate_field(Field::Message, &"m".repeat(1001)),
            Some("Message must be at most 1000 characters".to_string())
        );
    }

    #[test]
    fn test_lengths_are_measured_after_trim() {
        assert_eq!(
            validate_field(Field::Name, "  A  "),
            Some("Name must be at least 2 characters".to_string())
        );
        assert_eq!(validate_field(Field::Name, "  Al  "), None);
    }

    #[test]
    fn test_name_format() {
        assert_eq!(validate_field(Field::Name, "Mary-Jane O'Neil"), None);
        assert_eq!(validate_field(Field::Name, "José Núñez"), None);
        assert_eq!(
            validate_field(Field::Name, "R2D2"),
            Some("Name can only contain letters, spaces, hyphens, and apostrophes".to_string())
        );
    }

    #[test]
    fn test_email_format_rejects() {
        for email in [
            "bad",
            "no-at.example.com",
            "user@domain",
            "user@@domain.com",
            "user name@example.com",
            "@example.com",
            "user@.",
        ] {
            assert_eq!(
                validate_field(Field::Email, email),
                Some("Please enter a valid email address".to_string()),
                "{} should be rejected",
                email
            );
        }
    }

    #[test]
    fn test_email_format_accepts() {
        assert_eq!(validate_field(Field::Email, "jane@example.com"), None);
        assert_eq!(validate_field(Field::Email, "a.b+c@sub.example.co.uk"), None);
        for _ in 0..50 {
            let email: String = SafeEmail().fake();
            assert_eq!(validate_field(Field::Email, &email), None, "{}", email);
        }
    }

    #[test]
    fn test_invalid_form_reports_each_field() {
        let data = ContactFormData {
            name: "A".to_string(),
            email: "bad".to_string(),
            message: "hi".to_string(),
            subject: None,
        };
        let result = validate_contact_form(&data);
        assert!(!result.is_valid);
        assert_eq!(
            result.errors,
            vec![
                "Name must be at least 2 characters".to_string(),
                "Please enter a valid email address".to_string(),
                "Message must be at least 10 characters".to_string(),
            ]
        );
    }

    #[test]
    fn test_valid_form_without_subject() {
        let data = ContactFormData {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            message: "Hello, this is a long enough message.".to_string(),
            subject: None,
        };
        assert_eq!(validate_contact_form(&data), ValidationResult::success());
    }

    #[test]
    fn test_field_navigation_wraps() {
        assert_eq!(Field::Message.next(), Field::Name);
        assert_eq!(Field::Name.previous(), Field::Message);
        for field in Field::ALL {
            assert_eq!(field.next().previous(), field);
            assert_eq!(Field::from_key(field.key()), Some(field));
        }
        assert_eq!(Field::from_key("phone"), None);
    }
}
