use serde::{Deserialize, Serialize};

use crate::domain::common::lenient::string_or_number;
use crate::domain::common::Record;
use crate::shared::table_view::FilterSpec;

/// Зарегистрированный пользователь платформы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisteredUser {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub email: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub phone: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub mobile: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub state: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub city: String,
}

impl RegisteredUser {
    /// Phone, then mobile, then "-"
    pub fn display_phone(&self) -> &str {
        [self.phone.as_str(), self.mobile.as_str()]
            .into_iter()
            .find(|p| !p.trim().is_empty())
            .unwrap_or("-")
    }
}

impl Record for RegisteredUser {
    fn record_key(&self) -> String {
        self.id.clone()
    }

    fn field_value(&self, field: &str) -> Option<String> {
        let value = match field {
            "id" => &self.id,
            "name" => &self.name,
            "email" => &self.email,
            "phone" => &self.phone,
            "mobile" => &self.mobile,
            "state" => &self.state,
            "city" => &self.city,
            _ => return None,
        };
        Some(value.clone())
    }

    fn dataset_index() -> &'static str {
        "a001"
    }

    fn dataset_name() -> &'static str {
        "users"
    }

    fn list_name() -> &'static str {
        "Registered Users"
    }
}

pub fn filter_specs() -> Vec<FilterSpec> {
    vec![FilterSpec::text(
        "search",
        "Search by name, email or phone",
        &["name", "email", "phone", "mobile"],
    )]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_lenient_user() {
        let json = r#"[{"id": 7, "name": "Ravi", "email": "ravi@example.com", "phone": null, "mobile": 9876543210, "state": "MH"}]"#;
        let users: Vec<RegisteredUser> = serde_json::from_str(json).unwrap();
        let user = &users[0];
        assert_eq!(user.record_key(), "7");
        assert_eq!(user.city, "");
        assert_eq!(user.display_phone(), "9876543210");
        assert_eq!(user.field_value("unknown"), None);
    }

    #[test]
    fn test_search_hits_mobile() {
        let user = RegisteredUser {
            id: "1".into(),
            name: "Meera".into(),
            email: "meera@example.com".into(),
            phone: String::new(),
            mobile: "99001".into(),
            state: String::new(),
            city: String::new(),
        };
        let spec = &filter_specs()[0];
        assert!(spec.matches(&crate::shared::table_view::FilterValue::term("9900"), &user));
        assert_eq!(
            RegisteredUser { mobile: String::new(), ..user }.display_phone(),
            "-"
        );
    }
}
