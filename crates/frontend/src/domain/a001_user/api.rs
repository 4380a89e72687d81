use contracts::domain::a001_user::aggregate::RegisteredUser;
use contracts::shared::error::ApiError;

use crate::shared::http::get_json;

pub async fn fetch_users() -> Result<Vec<RegisteredUser>, ApiError> {
    get_json("/api/getAllUsers").await
}
