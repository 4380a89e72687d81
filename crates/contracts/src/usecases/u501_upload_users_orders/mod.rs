//! Bulk upload of user and order CSV files.

use serde::Deserialize;

use crate::shared::error::ApiError;
use crate::usecases::common::UseCaseMetadata;

pub struct UploadUsersOrders;

impl UseCaseMetadata for UploadUsersOrders {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "upload_users_orders"
    }

    fn display_name() -> &'static str {
        "Upload Data"
    }
}

/// Тип загружаемого файла, уходит в поле `type` формы
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    User,
    Order,
}

impl UploadKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadKind::User => "user",
            UploadKind::Order => "order",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            UploadKind::User => "User",
            UploadKind::Order => "Order",
        }
    }

    /// CSV header the backend expects for this kind
    pub fn required_columns(&self) -> &'static str {
        match self {
            UploadKind::User => "email, name, mobile_no, phone, city, state",
            UploadKind::Order => {
                "email, program_id, amount_received, total_amount, purchased_date (YYYY-MM-DD HH:mm:ss)"
            }
        }
    }

    /// Accept only `.csv` files (case-insensitive extension).
    pub fn validate_file_name(&self, file_name: &str) -> Result<(), ApiError> {
        if file_name.to_lowercase().ends_with(".csv") {
            Ok(())
        } else {
            Err(ApiError::validation(format!(
                "Please upload a valid CSV for {} data.",
                self.as_str()
            )))
        }
    }

    pub fn success_message(&self) -> String {
        format!("{} file uploaded successfully!", self.title())
    }
}

/// Ответ `POST /api/upload-users-orders`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl UploadResponse {
    /// A 2xx reply that still carries `error` is a failed upload.
    pub fn into_result(self, kind: UploadKind) -> Result<String, ApiError> {
        match self.error.filter(|e| !e.trim().is_empty()) {
            Some(error) => Err(ApiError::Business(format!("Upload failed: {error}"))),
            None => Ok(kind.success_message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_extension_check() {
        assert!(UploadKind::User.validate_file_name("users_jan.csv").is_ok());
        assert!(UploadKind::Order.validate_file_name("ORDERS.CSV").is_ok());

        let err = UploadKind::Order.validate_file_name("orders.xlsx").unwrap_err();
        assert_eq!(err.to_string(), "Please upload a valid CSV for order data.");
    }

    #[test]
    fn test_upload_response() {
        let ok: UploadResponse = serde_json::from_str(r#"{"message": "done"}"#).unwrap();
        assert_eq!(ok.into_result(UploadKind::User).unwrap(), "User file uploaded successfully!");

        let failed: UploadResponse = serde_json::from_str(r#"{"error": "bad header row"}"#).unwrap();
        assert_eq!(
            failed.into_result(UploadKind::Order),
            Err(ApiError::Business("Upload failed: bad header row".into()))
        );
        assert_eq!(UploadUsersOrders::full_name(), "u501_upload_users_orders");
    }
}
