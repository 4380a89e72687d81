use serde::Deserialize;
use thiserror::Error;

/// Ошибки обращения к REST API и локальной проверки перед запросом
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Запрос не дошёл до сервера или ответ не был получен
    #[error("Network error: {0}")]
    Network(String),

    /// Сервер ответил кодом вне 2xx
    #[error("Server error {status}: {message}")]
    Status { status: u16, message: String },

    /// Сервер ответил 2xx, но сообщил о бизнес-ошибке
    #[error("{0}")]
    Business(String),

    /// Локальная проверка не пропустила запрос
    #[error("{0}")]
    Validation(String),

    /// Ответ не удалось разобрать
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Error body shapes the backend uses: `{ "message": ... }`, `{ "error": ... }`
/// or `{ "error": { "message": ... } }`.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

impl ApiError {
    /// Build a `Status` error from a non-2xx response body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = extract_message(body).unwrap_or_else(|| format!("Request failed with status {status}"));
        Self::Status { status, message }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Text shown to the user in a toast.
    ///
    /// `fallback` is the action-specific message ("Failed to send password")
    /// used when the failure carries nothing more useful than a transport error.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Network(_) => format!("{fallback}. No response from server, please try again."),
            Self::Status { message, .. } if !message.starts_with("Request failed") => message.clone(),
            Self::Status { .. } | Self::Decode(_) => fallback.to_string(),
            Self::Business(message) | Self::Validation(message) => message.clone(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Pull a human readable message out of an error body, if there is one.
pub fn extract_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    if let Some(message) = parsed.message.filter(|m| !m.trim().is_empty()) {
        return Some(message);
    }
    match parsed.error? {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s),
        serde_json::Value::Object(map) => map
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_message_shapes() {
        assert_eq!(extract_message(r#"{"message":"Invalid batch"}"#).as_deref(), Some("Invalid batch"));
        assert_eq!(extract_message(r#"{"error":"Student not found"}"#).as_deref(), Some("Student not found"));
        assert_eq!(
            extract_message(r#"{"error":{"message":"Zoom token expired"}}"#).as_deref(),
            Some("Zoom token expired")
        );
        assert_eq!(extract_message("<html>502</html>"), None);
        assert_eq!(extract_message(r#"{"message":""}"#), None);
    }

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = ApiError::from_status(400, r#"{"message":"Coupon code already exists"}"#);
        assert_eq!(err.user_message("Failed to create coupons"), "Coupon code already exists");

        let err = ApiError::from_status(500, "oops");
        assert_eq!(err.user_message("Failed to create coupons"), "Failed to create coupons");

        let err = ApiError::Network("TypeError: Failed to fetch".into());
        assert!(err.user_message("Failed to send password").starts_with("Failed to send password"));

        let err = ApiError::validation("Password is empty!");
        assert!(err.is_validation());
        assert_eq!(err.user_message("ignored"), "Password is empty!");
    }
}
