use contracts::domain::a007_meeting::aggregate::{
    Meeting, MeetingListResponse, ZoomLookupRequest, ZoomLookupResponse, ZoomTiming,
};
use contracts::shared::error::ApiError;
use std::collections::HashMap;

use crate::shared::http::{get_json, post_json};

pub async fn fetch_meetings() -> Result<Vec<Meeting>, ApiError> {
    get_json::<MeetingListResponse>("/api/all-meetings")
        .await
        .map(|response| response.data)
}

/// Zoom start time and time zone per meeting id
pub async fn fetch_zoom_timings(
    request: ZoomLookupRequest,
) -> Result<HashMap<String, ZoomTiming>, ApiError> {
    post_json::<_, Option<ZoomLookupResponse>>("/api/fetch-zoommeeting-by-meetingid", &request)
        .await
        .map(|response| response.unwrap_or_default().into_timings())
}
