use contracts::dashboards::d400_overview::dto::{count_items, OverviewMetric};
use contracts::shared::error::ApiError;

use crate::shared::http::get_json;

/// Size of the list behind one overview card
pub async fn fetch_metric(metric: OverviewMetric) -> Result<usize, ApiError> {
    let payload = get_json::<serde_json::Value>(metric.endpoint()).await?;
    Ok(count_items(&payload))
}
