use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::common::lenient::{flexible_bool, opt_string_or_number, string_or_number};
use crate::domain::common::Record;
use crate::shared::date_utils::format_readable;
use crate::shared::table_view::FilterSpec;

/// Участник встречи
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub email: String,
}

/// Опубликованная встреча Zoom
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    #[serde(default, deserialize_with = "string_or_number")]
    pub meeting_title: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub course_name: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub batch_number: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub date_time: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub duration: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub zoomlink: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub host_link: String,
    #[serde(default, deserialize_with = "participants")]
    pub course_participants: Vec<Participant>,
    /// Start time reported by Zoom, filled in after the list loads
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub zoom_start_time: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub zoom_timezone: Option<String>,
}

/// Participants arrive as an array or as a string holding a JSON array.
/// Anything unreadable becomes an empty list.
fn participants<'de, D>(deserializer: D) -> Result<Vec<Participant>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(raw)) => serde_json::from_str(&raw).unwrap_or_default(),
        Some(list @ Value::Array(_)) => serde_json::from_value(list).unwrap_or_default(),
        _ => Vec::new(),
    })
}

impl Meeting {
    /// Zoom meeting id: last path segment of the join link, without query string
    pub fn meeting_id(&self) -> String {
        let path = self.zoomlink.split(|c: char| c == '?' || c == '#').next().unwrap_or_default();
        path.trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_string()
    }

    /// Date-time as shown in the table; also the text the date filter searches
    pub fn readable_date(&self) -> String {
        format_readable(&self.date_time)
    }

    /// Zoom's start time when known, otherwise the stored date-time.
    pub fn display_time(&self) -> String {
        match (&self.zoom_start_time, &self.zoom_timezone) {
            (Some(start), Some(zone)) => format!("{} ({})", format_readable(start), zone),
            (Some(start), None) => format_readable(start),
            _ => self.readable_date(),
        }
    }

    /// Copy Zoom's timing for this meeting, if the lookup returned one.
    pub fn apply_zoom_timing(&mut self, timings: &HashMap<String, ZoomTiming>) {
        if let Some(timing) = timings.get(&self.meeting_id()) {
            self.zoom_start_time = timing.start_time.clone();
            self.zoom_timezone = timing.timezone.clone();
        }
    }

    pub fn participant_count(&self) -> usize {
        self.course_participants.len()
    }
}

impl Record for Meeting {
    fn record_key(&self) -> String {
        self.meeting_id()
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "meeting_title" => Some(self.meeting_title.clone()),
            "course_name" => Some(self.course_name.clone()),
            "batch_number" => Some(self.batch_number.clone()),
            "date_time" => Some(self.date_time.clone()),
            "date_text" => Some(format!("{} {}", self.date_time, self.readable_date())),
            "zoomlink" => Some(self.zoomlink.clone()),
            "host_link" => Some(self.host_link.clone()),
            _ => None,
        }
    }

    fn dataset_index() -> &'static str {
        "a007"
    }

    fn dataset_name() -> &'static str {
        "meetings"
    }

    fn list_name() -> &'static str {
        "All Meetings"
    }
}

pub fn filter_specs() -> Vec<FilterSpec> {
    vec![
        FilterSpec::text("title", "Filter by title", &["meeting_title"]),
        FilterSpec::text("course", "Filter by course", &["course_name"]),
        FilterSpec::text("batch", "Filter by batch", &["batch_number"]),
        FilterSpec::text("date", "Filter by date", &["date_text"]),
    ]
}

/// `GET /api/all-meetings` wraps the list in `{ "data": [...] }`
#[derive(Debug, Clone, Deserialize)]
pub struct MeetingListResponse {
    #[serde(default)]
    pub data: Vec<Meeting>,
}

/// `POST /api/fetch-zoommeeting-by-meetingid`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoomLookupRequest {
    pub meeting_ids: Vec<String>,
}

impl ZoomLookupRequest {
    /// Distinct non-empty meeting ids of the list; `None` when there are none.
    pub fn for_meetings(meetings: &[Meeting]) -> Option<Self> {
        let mut meeting_ids: Vec<String> = Vec::new();
        for id in meetings.iter().map(Meeting::meeting_id) {
            if !id.is_empty() && !meeting_ids.contains(&id) {
                meeting_ids.push(id);
            }
        }
        (!meeting_ids.is_empty()).then_some(Self { meeting_ids })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ZoomTiming {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub start_time: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub timezone: Option<String>,
}

/// One entry of the lookup; failed lookups carry no data.
#[derive(Debug, Clone, Deserialize)]
pub struct ZoomLookupEntry {
    #[serde(default, deserialize_with = "flexible_bool")]
    pub success: bool,
    #[serde(default, deserialize_with = "string_or_number")]
    pub meeting_id: String,
    #[serde(default)]
    pub data: Option<ZoomTiming>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ZoomLookupResponse {
    #[serde(default)]
    pub meetings: Vec<ZoomLookupEntry>,
}

impl ZoomLookupResponse {
    /// Timings of the successful lookups, by meeting id.
    pub fn into_timings(self) -> HashMap<String, ZoomTiming> {
        self.meetings
            .into_iter()
            .filter(|entry| entry.success && !entry.meeting_id.is_empty())
            .filter_map(|entry| entry.data.map(|data| (entry.meeting_id, data)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table_view::FilterValue;

    #[test]
    fn test_participants_as_array_or_string() {
        let json = r#"{"data": [
            {"meeting_title": "Kickoff", "batch_number": 2, "zoomlink": "https://zoom.us/j/81234567890?pwd=abc",
             "course_participants": [{"id": 5, "name": "Asha", "email": "asha@example.com"}]},
            {"meeting_title": "Review", "zoomlink": "https://zoom.us/j/80000000001/",
             "course_participants": "[{\"name\": \"Ravi\"}]"},
            {"meeting_title": "Broken", "zoomlink": "", "course_participants": "not json"}
        ]}"#;
        let list: MeetingListResponse = serde_json::from_str(json).unwrap();
        let m = &list.data;

        assert_eq!(m[0].batch_number, "2");
        assert_eq!(m[0].record_key(), "81234567890");
        assert_eq!(m[0].course_participants[0].id.as_deref(), Some("5"));

        assert_eq!(m[1].record_key(), "80000000001");
        assert_eq!(m[1].course_participants[0].name, "Ravi");

        assert_eq!(m[2].participant_count(), 0);
        assert_eq!(m[2].record_key(), "");
    }

    #[test]
    fn test_date_filter_matches_readable_text() {
        let meeting: Meeting = serde_json::from_str(
            r#"{"meeting_title": "Kickoff", "date_time": "2025-03-05T18:30:00Z", "zoomlink": "https://zoom.us/j/1"}"#,
        )
        .unwrap();
        let date = &filter_specs()[3];
        assert!(date.matches(&FilterValue::term("march 2025"), &meeting));
        assert!(date.matches(&FilterValue::term("2025-03-05"), &meeting));
        assert!(!date.matches(&FilterValue::term("april"), &meeting));
    }

    #[test]
    fn test_zoom_lookup_request_ids() {
        let list: MeetingListResponse = serde_json::from_str(
            r#"{"data": [
                {"zoomlink": "https://zoom.us/j/81234567890?pwd=abc"},
                {"zoomlink": "https://zoom.us/j/81234567890"},
                {"zoomlink": ""},
                {"zoomlink": "https://zoom.us/j/80000000001"}
            ]}"#,
        )
        .unwrap();
        let request = ZoomLookupRequest::for_meetings(&list.data).unwrap();
        assert_eq!(request.meeting_ids, vec!["81234567890", "80000000001"]);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"meeting_ids": ["81234567890", "80000000001"]})
        );
        assert!(ZoomLookupRequest::for_meetings(&list.data[2..3]).is_none());
    }

    #[test]
    fn test_zoom_timing_merges_into_meetings() {
        let response: ZoomLookupResponse = serde_json::from_str(
            r#"{"meetings": [
                {"success": true, "meeting_id": 81234567890,
                 "data": {"start_time": "2025-03-05T13:00:00Z", "timezone": "Asia/Kolkata"}},
                {"success": false, "meeting_id": "80000000001", "data": null},
                {"success": 1, "meeting_id": "80000000002"}
            ]}"#,
        )
        .unwrap();
        let timings = response.into_timings();
        assert_eq!(timings.len(), 1);

        let mut meetings: Vec<Meeting> = serde_json::from_str(
            r#"[
                {"meeting_title": "Kickoff", "date_time": "2025-03-05T18:30:00", "zoomlink": "https://zoom.us/j/81234567890"},
                {"meeting_title": "Review", "date_time": "2025-03-06T10:00:00", "zoomlink": "https://zoom.us/j/80000000001"}
            ]"#,
        )
        .unwrap();
        let stored = meetings[0].display_time();
        meetings.iter_mut().for_each(|m| m.apply_zoom_timing(&timings));

        assert_eq!(meetings[0].zoom_start_time.as_deref(), Some("2025-03-05T13:00:00Z"));
        assert_eq!(meetings[0].zoom_timezone.as_deref(), Some("Asia/Kolkata"));
        assert!(meetings[0].display_time().ends_with("(Asia/Kolkata)"));
        assert_ne!(meetings[0].display_time(), stored);

        assert_eq!(meetings[1].zoom_start_time, None);
        assert_eq!(meetings[1].display_time(), meetings[1].readable_date());
    }

    #[test]
    fn test_empty_lookup_body_decodes() {
        let response: ZoomLookupResponse = serde_json::from_str("{}").unwrap();
        assert!(response.into_timings().is_empty());
    }
}
