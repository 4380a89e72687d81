use contracts::domain::a003_order::aggregate::Order;
use contracts::shared::error::ApiError;

use crate::shared::http::get_json;

pub async fn fetch_orders() -> Result<Vec<Order>, ApiError> {
    get_json("/api/orders").await
}
