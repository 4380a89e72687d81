use std::collections::BTreeSet;

use chrono::{Duration, NaiveDateTime, NaiveTime};

use super::request::{GenerateZoomLinkRequest, PublishMeetingRequest, PublishParticipant, ZoomMeetingDetails};
use super::response::{StudentByCourse, ZoomLink};
use super::TIME_ZONES;
use crate::shared::error::ApiError;

/// Форма планирования встречи
#[derive(Debug, Clone, PartialEq)]
pub struct MeetingDraft {
    pub course_id: Option<String>,
    pub batch: String,
    pub title: String,
    /// `<input type="datetime-local">` value, `YYYY-MM-DDTHH:MM`
    pub date_time: String,
    pub duration: String,
    pub time_zone: String,
    pub instructor_name: String,
    pub selected: BTreeSet<String>,
}

impl MeetingDraft {
    /// Empty form with the date-time preset to tomorrow 10:00.
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            course_id: None,
            batch: String::new(),
            title: String::new(),
            date_time: default_date_time(now),
            duration: String::new(),
            time_zone: TIME_ZONES[0].to_string(),
            instructor_name: String::new(),
            selected: BTreeSet::new(),
        }
    }

    /// Switching course drops the participant selection.
    pub fn select_course(&mut self, course_id: Option<String>) {
        if self.course_id != course_id {
            self.selected.clear();
        }
        self.course_id = course_id;
    }

    pub fn set_selected(&mut self, student_id: &str, selected: bool) {
        if selected {
            self.selected.insert(student_id.to_string());
        } else {
            self.selected.remove(student_id);
        }
    }

    pub fn select_all(&mut self, students: &[StudentByCourse], selected: bool) {
        self.selected.clear();
        if selected {
            self.selected.extend(students.iter().map(|s| s.id.clone()));
        }
    }

    pub fn is_selected(&self, student_id: &str) -> bool {
        self.selected.contains(student_id)
    }

    /// Checks before asking for a Zoom link, in the order the form reports them.
    pub fn validate_for_link(&self, now: NaiveDateTime) -> Result<(), ApiError> {
        if self.title.trim().is_empty() || self.date_time.trim().is_empty() {
            return Err(ApiError::validation("Please fill in meeting title and date/time"));
        }
        if self.batch.trim().is_empty() {
            return Err(ApiError::validation("Please select a batch"));
        }
        if self.selected.is_empty() {
            return Err(ApiError::validation("Please select at least one participant"));
        }
        match parse_local(&self.date_time) {
            Some(at) if at >= now => Ok(()),
            Some(_) => Err(ApiError::validation("Meeting time must be in the future")),
            None => Err(ApiError::validation("Please fill in meeting title and date/time")),
        }
    }

    pub fn link_request(
        &self,
        course_name: &str,
        students: &[StudentByCourse],
        now: NaiveDateTime,
    ) -> Result<GenerateZoomLinkRequest, ApiError> {
        self.validate_for_link(now)?;
        let emails: Vec<&str> = self.participants(students).map(|s| s.email.as_str()).collect();
        Ok(GenerateZoomLinkRequest {
            meeting_title: self.title.trim().to_string(),
            date_time: self.date_time.clone(),
            duration: self.duration.clone(),
            time_zone: self.time_zone.clone(),
            course_name: course_name.to_string(),
            batch_no: self.batch.clone(),
            instructor_name: self.instructor_name.clone(),
            course_participants_email: emails.join(","),
        })
    }

    pub fn publish_request(
        &self,
        course_name: &str,
        students: &[StudentByCourse],
        link: &ZoomLink,
    ) -> Result<PublishMeetingRequest, ApiError> {
        if self.batch.trim().is_empty() {
            return Err(ApiError::validation("Please select a batch"));
        }
        if !link.is_generated() {
            return Err(ApiError::validation("Please generate a Zoom link first"));
        }
        Ok(PublishMeetingRequest {
            course_name: course_name.to_string(),
            course_id: self.course_id.clone().unwrap_or_default(),
            batch_no: self.batch.clone(),
            course_participants: self
                .participants(students)
                .map(|s| PublishParticipant {
                    name: s.name.clone(),
                    email: s.email.clone(),
                })
                .collect(),
            meeting_title: self.title.trim().to_string(),
            date_time: self.date_time.clone(),
            duration: self.duration.clone(),
            time_zone: self.time_zone.clone(),
            instructor_name: self.instructor_name.clone(),
            zoom_meeting_details: ZoomMeetingDetails {
                join_url: link.zoom_link.clone(),
                meeting_id: link.meeting_id.clone(),
                password: link.password.clone(),
                start_url: link.start_url.clone(),
            },
        })
    }

    /// Selected students in list order
    fn participants<'a>(&'a self, students: &'a [StudentByCourse]) -> impl Iterator<Item = &'a StudentByCourse> + 'a {
        students.iter().filter(move |s| self.selected.contains(&s.id))
    }
}

/// Tomorrow at 10:00 as a `datetime-local` value
pub fn default_date_time(now: NaiveDateTime) -> String {
    let tomorrow = now.date() + Duration::days(1);
    let at = tomorrow.and_time(NaiveTime::from_hms_opt(10, 0, 0).unwrap_or(NaiveTime::MIN));
    at.format("%Y-%m-%dT%H:%M").to_string()
}

fn parse_local(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .ok()
        .or_else(|| crate::shared::date_utils::parse_timestamp(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 10)
            .unwrap()
            .and_hms_opt(15, 45, 0)
            .unwrap()
    }

    fn students() -> Vec<StudentByCourse> {
        ["1", "2", "3"]
            .iter()
            .map(|id| StudentByCourse {
                id: id.to_string(),
                name: format!("Student {id}"),
                email: format!("s{id}@example.com"),
                amount_received: String::new(),
                pending_amount: String::new(),
                status: "success".into(),
                updated_at: String::new(),
            })
            .collect()
    }

    #[test]
    fn test_new_draft_defaults() {
        let draft = MeetingDraft::new(now());
        assert_eq!(draft.date_time, "2025-03-11T10:00");
        assert_eq!(draft.time_zone, "India (GMT+5:30)");
    }

    #[test]
    fn test_validation_order() {
        let mut draft = MeetingDraft::new(now());
        let msg = |d: &MeetingDraft| d.validate_for_link(now()).unwrap_err().to_string();

        assert_eq!(msg(&draft), "Please fill in meeting title and date/time");
        draft.title = "Week 1 live".into();
        assert_eq!(msg(&draft), "Please select a batch");
        draft.batch = "2".into();
        assert_eq!(msg(&draft), "Please select at least one participant");
        draft.set_selected("1", true);
        draft.date_time = "2025-03-10T09:00".into();
        assert_eq!(msg(&draft), "Meeting time must be in the future");
        draft.date_time = "2025-03-12T09:00".into();
        assert!(draft.validate_for_link(now()).is_ok());
    }

    #[test]
    fn test_requests_carry_selected_participants() {
        let mut draft = MeetingDraft::new(now());
        draft.title = "Week 1 live".into();
        draft.batch = "1".into();
        draft.select_course(Some("7".into()));
        draft.select_all(&students(), true);
        draft.set_selected("2", false);

        let link_req = draft.link_request("Data Science", &students(), now()).unwrap();
        assert_eq!(link_req.course_participants_email, "s1@example.com,s3@example.com");

        assert!(draft
            .publish_request("Data Science", &students(), &ZoomLink::default())
            .unwrap_err()
            .is_validation());

        let link = ZoomLink {
            zoom_link: "https://zoom.us/j/99".into(),
            meeting_id: "99".into(),
            password: "pw".into(),
            start_url: "https://zoom.us/s/99".into(),
        };
        let publish = draft.publish_request("Data Science", &students(), &link).unwrap();
        assert_eq!(publish.course_id, "7");
        assert_eq!(publish.course_participants.len(), 2);
        assert_eq!(publish.zoom_meeting_details.meeting_id, "99");

        draft.select_course(Some("8".into()));
        assert!(draft.selected.is_empty());
    }
}
