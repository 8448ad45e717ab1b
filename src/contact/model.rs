use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Defines the payload sent to the contact endpoint.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

/// Defines the envelope returned by the backend for every request.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<HashMap<String, Vec<String>>>,
    #[serde(default)]
    pub timestamp: String,
}

/// Defines the data returned for an accepted contact message.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub id: String,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_omits_absent_subject() {
        let data = ContactFormData {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            message: "Hello, this is a long enough message.".to_string(),
            subject: None,
        };
        let value = serde_json::to_value(&data).unwrap();
        assert!(value.get("subject").is_none());
        assert_eq!(value["name"], "Jane Doe");
    }

    #[test]
    fn test_payload_includes_present_subject() {
        let data = ContactFormData {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            message: "Hello, this is a long enough message.".to_string(),
            subject: Some("Hiring".to_string()),
        };
        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value["subject"], "Hiring");
    }

    #[test]
    fn test_api_response_with_errors() {
        let body = json!({
            "success": false,
            "message": "Validation failed",
            "errors": { "email": ["Email is invalid"] },
            "timestamp": "2024-01-01T00:00:00Z"
        });
        let response: ApiResponse<SubmissionReceipt> = serde_json::from_value(body).unwrap();
        assert!(!response.success);
        assert!(response.data.is_none());
        let errors = response.errors.unwrap();
        assert_eq!(errors["email"], vec!["Email is invalid".to_string()]);
    }

    #[test]
    fn test_api_response_with_receipt() {
        let body = json!({
            "success": true,
            "message": "Message sent",
            "data": { "id": "msg_1", "timestamp": "2024-01-01T00:00:00Z" },
            "timestamp": "2024-01-01T00:00:00Z"
        });
        let response: ApiResponse<SubmissionReceipt> = serde_json::from_value(body).unwrap();
        assert!(response.success);
        assert_eq!(response.data.unwrap().id, "msg_1");
    }
}
