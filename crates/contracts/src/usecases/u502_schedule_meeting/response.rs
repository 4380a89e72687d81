use serde::{Deserialize, Serialize};

use crate::domain::common::lenient::{parse_amount, string_or_number};
use crate::shared::date_utils::format_readable;

/// Студент курса из `GET /api/studentInfoBycourse/:course_id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentByCourse {
    #[serde(rename = "user_table_id", default, deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(rename = "user_name", default, deserialize_with = "string_or_number")]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub email: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub amount_received: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub pending_amount: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub status: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub updated_at: String,
}

impl StudentByCourse {
    pub fn is_paid(&self) -> bool {
        self.status == "success"
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_paid() {
            "paid"
        } else {
            "pending"
        }
    }

    pub fn purchased_on(&self) -> String {
        format_readable(&self.updated_at)
    }

    pub fn pending(&self) -> f64 {
        parse_amount(&self.pending_amount)
    }
}

/// Ответ `POST /api/generate-zoom-link`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ZoomLink {
    #[serde(default, deserialize_with = "string_or_number")]
    pub zoom_link: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub meeting_id: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub password: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub start_url: String,
}

impl ZoomLink {
    pub fn is_generated(&self) -> bool {
        !self.zoom_link.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_by_course_renames() {
        let json = r#"[{"user_table_id": 31, "user_name": "Neha", "email": "neha@example.com",
                        "amount_received": 12000, "pending_amount": "3,000", "status": "success",
                        "updated_at": "2025-02-03 10:15:00"}]"#;
        let students: Vec<StudentByCourse> = serde_json::from_str(json).unwrap();
        let s = &students[0];
        assert_eq!(s.id, "31");
        assert_eq!(s.name, "Neha");
        assert_eq!(s.status_label(), "paid");
        assert_eq!(s.pending(), 3000.0);
        assert_eq!(s.purchased_on(), "3 February 2025, 10:15 AM");
    }

    #[test]
    fn test_zoom_link_numeric_id() {
        let link: ZoomLink = serde_json::from_str(
            r#"{"zoom_link": "https://zoom.us/j/8123", "meeting_id": 8123, "password": "x1", "start_url": "https://zoom.us/s/8123"}"#,
        )
        .unwrap();
        assert!(link.is_generated());
        assert_eq!(link.meeting_id, "8123");
        assert!(!ZoomLink::default().is_generated());
    }
}
