use contracts::domain::a006_course::aggregate::Course;
use contracts::shared::error::ApiError;
use contracts::usecases::u502_schedule_meeting::{
    GenerateZoomLinkRequest, PublishMeetingRequest, StudentByCourse, ZoomLink,
};

use crate::shared::http::{get_json, post_json};

pub async fn fetch_courses() -> Result<Vec<Course>, ApiError> {
    get_json("/api/getAllCourses").await
}

pub async fn fetch_students_by_course(course_id: &str) -> Result<Vec<StudentByCourse>, ApiError> {
    let path = format!(
        "/api/studentInfoBycourse/{}",
        urlencoding::encode(course_id)
    );
    get_json::<Option<Vec<StudentByCourse>>>(&path)
        .await
        .map(Option::unwrap_or_default)
}

pub async fn generate_zoom_link(request: &GenerateZoomLinkRequest) -> Result<ZoomLink, ApiError> {
    post_json::<_, Option<ZoomLink>>("/api/generate-zoom-link", request)
        .await
        .map(Option::unwrap_or_default)
}

pub async fn publish_meeting(request: &PublishMeetingRequest) -> Result<(), ApiError> {
    post_json::<_, serde_json::Value>("/api/publish-meeting", request)
        .await
        .map(|_| ())
}
