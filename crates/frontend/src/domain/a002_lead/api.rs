use contracts::domain::a002_lead::aggregate::{Lead, UpdateLeadDto};
use contracts::shared::error::ApiError;

use crate::shared::http::{get_json, post_json};

pub async fn fetch_leads() -> Result<Vec<Lead>, ApiError> {
    get_json("/api/getAllEnquiry").await
}

/// Persist status and sales comment of one lead.
pub async fn update_lead(dto: &UpdateLeadDto) -> Result<(), ApiError> {
    post_json::<_, serde_json::Value>("/api/updateEnquiry", dto)
        .await
        .map(|_| ())
}
