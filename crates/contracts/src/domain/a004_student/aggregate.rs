use serde::{Deserialize, Serialize};

use crate::domain::common::lenient::{flexible_bool, opt_string_or_number, string_or_number};
use crate::domain::common::Record;
use crate::shared::error::ApiError;
use crate::shared::table_view::FilterSpec;

pub const YEAR_OPTIONS: &[&str] = &["2024 - 2025", "2025 - 2026", "2026 - 2027", "2027 - 2028"];

pub const DURATION_OPTIONS: &[&str] = &[
    "Two Months",
    "Three Months",
    "Four Months",
    "Five Months",
    "Six Months",
];

/// Server reply when a certificate for the student already exists
pub const ALREADY_GENERATED: &str = "Certificate already generated.";

fn default_year() -> String {
    YEAR_OPTIONS[0].to_string()
}

fn default_duration() -> String {
    DURATION_OPTIONS[0].to_string()
}

/// Студент, купивший курс
///
/// Поля `draft_password`, `student_id`, `academic_year`, `duration` редактируются
/// в строке таблицы и живут только на клиенте.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    #[serde(default, deserialize_with = "string_or_number")]
    pub user_uid: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub email: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub course_title: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub score: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub certificate_url: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub student_login_password: String,

    #[serde(default, skip_serializing)]
    pub draft_password: String,
    #[serde(default, skip_serializing)]
    pub student_id: String,
    #[serde(default = "default_year", skip_serializing)]
    pub academic_year: String,
    #[serde(default = "default_duration", skip_serializing)]
    pub duration: String,
}

impl Student {
    pub fn course_label(&self) -> &str {
        if self.course_title.trim().is_empty() {
            "-"
        } else {
            &self.course_title
        }
    }

    pub fn has_certificate(&self) -> bool {
        !self.certificate_url.trim().is_empty()
    }

    /// Password to mail: the edited draft, else the stored login password
    pub fn credentials_password(&self) -> Option<&str> {
        [self.draft_password.as_str(), self.student_login_password.as_str()]
            .into_iter()
            .find(|p| !p.trim().is_empty())
    }

    pub fn password_request(&self) -> Result<InsertPasswordRequest, ApiError> {
        let password = self
            .credentials_password()
            .ok_or_else(|| ApiError::validation("Password is empty!"))?;
        Ok(InsertPasswordRequest {
            email: self.email.clone(),
            student_login_password: password.to_string(),
        })
    }

    pub fn certificate_request(&self) -> Result<GenerateCertificateRequest, ApiError> {
        if self.student_id.trim().is_empty() {
            return Err(ApiError::validation(
                "Student ID is required before generating the certificate.",
            ));
        }
        Ok(GenerateCertificateRequest {
            name: self.name.clone(),
            course_title: self.course_title.clone(),
            academic_year: self.academic_year.clone(),
            duration: self.duration.clone(),
            student_id: self.student_id.trim().to_string(),
            user_uid: self.user_uid.clone(),
            email: self.email.clone(),
            score: self.score.clone(),
        })
    }

    pub fn send_certificate_request(&self) -> SendCertificateRequest {
        SendCertificateRequest {
            user_uid: self.user_uid.clone(),
        }
    }
}

impl Record for Student {
    fn record_key(&self) -> String {
        self.user_uid.clone()
    }

    fn field_value(&self, field: &str) -> Option<String> {
        let value: &str = match field {
            "user_uid" => &self.user_uid,
            "name" => &self.name,
            "email" => &self.email,
            "course_title" => self.course_label(),
            "score" => &self.score,
            "certificate_url" => &self.certificate_url,
            "student_id" => &self.student_id,
            "academic_year" => &self.academic_year,
            "duration" => &self.duration,
            _ => return None,
        };
        Some(value.to_string())
    }

    fn dataset_index() -> &'static str {
        "a004"
    }

    fn dataset_name() -> &'static str {
        "students"
    }

    fn list_name() -> &'static str {
        "Students"
    }
}

pub fn filter_specs() -> Vec<FilterSpec> {
    vec![
        FilterSpec::text("search", "Search by name or email", &["name", "email", "user_uid"]),
        FilterSpec::exact("course", "All Courses", "course_title"),
    ]
}

// ============================================================================
// Запросы и ответы
// ============================================================================

/// `POST /api/insertStudentPassword`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertPasswordRequest {
    pub email: String,
    pub student_login_password: String,
}

/// `POST /api/generateCertificate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateCertificateRequest {
    pub name: String,
    pub course_title: String,
    pub academic_year: String,
    pub duration: String,
    pub student_id: String,
    pub user_uid: String,
    pub email: String,
    pub score: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GenerateCertificateResponse {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub message: Option<String>,
}

impl GenerateCertificateResponse {
    pub fn already_generated(&self) -> bool {
        self.message.as_deref() == Some(ALREADY_GENERATED)
    }
}

/// `POST /api/send-certificate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendCertificateRequest {
    pub user_uid: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SendCertificateResponse {
    #[serde(default, deserialize_with = "flexible_bool")]
    pub success: bool,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub message: Option<String>,
}

impl SendCertificateResponse {
    /// A 2xx reply with `success: false` is a business failure.
    pub fn into_result(self) -> Result<(), ApiError> {
        if self.success {
            Ok(())
        } else {
            Err(ApiError::Business(
                self.message
                    .unwrap_or_else(|| "Failed to send certificate".to_string()),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student() -> Student {
        serde_json::from_str(
            r#"{"user_uid": "u-1", "name": "Anu", "email": "anu@example.com", "course_title": null, "student_login_password": ""}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_local_fields_default() {
        let s = student();
        assert_eq!(s.academic_year, "2024 - 2025");
        assert_eq!(s.duration, "Two Months");
        assert_eq!(s.course_label(), "-");
        assert!(!s.has_certificate());

        let json = serde_json::to_value(&s).unwrap();
        assert!(json.get("draft_password").is_none());
    }

    #[test]
    fn test_password_guard_and_fallback() {
        let mut s = student();
        let err = s.password_request().unwrap_err();
        assert_eq!(err, ApiError::validation("Password is empty!"));

        s.student_login_password = "stored#1".into();
        assert_eq!(s.password_request().unwrap().student_login_password, "stored#1");

        s.draft_password = "fresh@2".into();
        let req = s.password_request().unwrap();
        assert_eq!(req.student_login_password, "fresh@2");
        assert_eq!(req.email, "anu@example.com");
    }

    #[test]
    fn test_certificate_request_shape() {
        let mut s = student();
        assert!(s.certificate_request().unwrap_err().is_validation());

        s.student_id = " LL-0042 ".into();
        s.duration = "Six Months".into();
        let body = serde_json::to_value(s.certificate_request().unwrap()).unwrap();
        assert_eq!(body["studentId"], "LL-0042");
        assert_eq!(body["userUid"], "u-1");
        assert_eq!(body["academicYear"], "2024 - 2025");
        assert_eq!(body["duration"], "Six Months");
    }

    #[test]
    fn test_certificate_responses() {
        let r: GenerateCertificateResponse =
            serde_json::from_str(r#"{"message": "Certificate already generated.", "url": "https://cdn.example.com/c.pdf"}"#)
                .unwrap();
        assert!(r.already_generated());
        assert_eq!(r.url.as_deref(), Some("https://cdn.example.com/c.pdf"));

        let ok: SendCertificateResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(ok.into_result().is_ok());

        let failed: SendCertificateResponse =
            serde_json::from_str(r#"{"success": false, "message": "Certificate not generated yet"}"#).unwrap();
        assert_eq!(
            failed.into_result(),
            Err(ApiError::Business("Certificate not generated yet".into()))
        );
    }
}
