use serde::{Deserialize, Serialize};

/// `POST /api/generate-zoom-link`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateZoomLinkRequest {
    pub meeting_title: String,
    pub date_time: String,
    pub duration: String,
    pub time_zone: String,
    pub course_name: String,
    pub batch_no: String,
    pub instructor_name: String,
    /// Comma separated
    pub course_participants_email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishParticipant {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoomMeetingDetails {
    pub join_url: String,
    pub meeting_id: String,
    pub password: String,
    pub start_url: String,
}

/// `POST /api/publish-meeting`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishMeetingRequest {
    pub course_name: String,
    pub course_id: String,
    pub batch_no: String,
    pub course_participants: Vec<PublishParticipant>,
    pub meeting_title: String,
    pub date_time: String,
    pub duration: String,
    pub time_zone: String,
    pub instructor_name: String,
    pub zoom_meeting_details: ZoomMeetingDetails,
}
