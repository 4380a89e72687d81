use serde::{Deserialize, Serialize};

use crate::domain::common::lenient::string_or_number;
use crate::domain::common::Record;

/// Курс платформы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub title: String,
}

impl Record for Course {
    fn record_key(&self) -> String {
        self.id.clone()
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "id" => Some(self.id.clone()),
            "title" => Some(self.title.clone()),
            _ => None,
        }
    }

    fn dataset_index() -> &'static str {
        "a006"
    }

    fn dataset_name() -> &'static str {
        "courses"
    }

    fn list_name() -> &'static str {
        "Courses"
    }
}

/// Title of the course with this id, if listed
pub fn course_title<'a>(courses: &'a [Course], id: &str) -> Option<&'a str> {
    courses.iter().find(|c| c.id == id).map(|c| c.title.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_lookup() {
        let courses: Vec<Course> =
            serde_json::from_str(r#"[{"id": 1, "title": "Data Science"}, {"id": "2", "title": "UI/UX"}]"#).unwrap();
        assert_eq!(course_title(&courses, "1"), Some("Data Science"));
        assert_eq!(course_title(&courses, "2"), Some("UI/UX"));
        assert_eq!(course_title(&courses, "3"), None);
    }
}
