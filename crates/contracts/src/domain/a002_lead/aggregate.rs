use serde::{Deserialize, Serialize};

use crate::domain::common::lenient::{numeric_string, string_or_number};
use crate::domain::common::Record;
use crate::shared::table_view::FilterSpec;

/// Query text of leads captured by the site's "Ask me" button
pub const ASK_ME_QUERY: &str = "From Ask me button";

/// Статусы обработки лида
pub const LEAD_STATUSES: &[&str] = &["new", "contacted", "interested", "not interested", "enrolled"];

/// Заявка (лид) с сайта
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub email: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub phone: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub state: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub city: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub program: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub query: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub submitted_at: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub status: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub sales_person_comment: String,
}

impl Lead {
    pub fn is_ask_me(&self) -> bool {
        self.query == ASK_ME_QUERY
    }

    /// Body of `POST /api/updateEnquiry` with the row's current values
    pub fn to_update_dto(&self) -> UpdateLeadDto {
        UpdateLeadDto {
            id: self.id.clone(),
            status: self.status.clone(),
            sales_person_comment: self.sales_person_comment.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateLeadDto {
    #[serde(serialize_with = "numeric_string")]
    pub id: String,
    pub status: String,
    pub sales_person_comment: String,
}

impl Record for Lead {
    fn record_key(&self) -> String {
        self.id.clone()
    }

    fn field_value(&self, field: &str) -> Option<String> {
        let value = match field {
            "id" => &self.id,
            "name" => &self.name,
            "email" => &self.email,
            "phone" => &self.phone,
            "state" => &self.state,
            "city" => &self.city,
            "program" => &self.program,
            "query" => &self.query,
            "submitted_at" => &self.submitted_at,
            "status" => &self.status,
            "sales_person_comment" => &self.sales_person_comment,
            _ => return None,
        };
        Some(value.clone())
    }

    fn dataset_index() -> &'static str {
        "a002"
    }

    fn dataset_name() -> &'static str {
        "leads"
    }

    fn list_name() -> &'static str {
        "Leads"
    }
}

pub fn filter_specs() -> Vec<FilterSpec> {
    vec![
        FilterSpec::exact("program", "All Programs", "program"),
        FilterSpec::exact("city", "All Cities", "city"),
        FilterSpec::exact("state", "All States", "state"),
        FilterSpec::exact("status", "All Statuses", "status"),
        FilterSpec::date_range("submitted", "Submitted", "submitted_at"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_and_update_dto() {
        let json = r#"{"id": 12, "name": "Kiran", "query": "From Ask me button", "status": "new", "sales_person_comment": null}"#;
        let mut lead: Lead = serde_json::from_str(json).unwrap();
        assert!(lead.is_ask_me());
        assert_eq!(lead.sales_person_comment, "");

        lead.sales_person_comment = "Call after 6pm".into();
        let body = serde_json::to_value(lead.to_update_dto()).unwrap();
        assert_eq!(body["id"], 12);
        assert_eq!(body["sales_person_comment"], "Call after 6pm");
        assert_eq!(body["status"], "new");
    }
}
