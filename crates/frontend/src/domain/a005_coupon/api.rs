use contracts::domain::a005_coupon::aggregate::{Coupon, CouponListResponse, ToggleCouponDto};
use contracts::domain::a005_coupon::generator::CouponSubmission;
use contracts::shared::error::ApiError;
use serde_json::Value;

use crate::shared::http::{get_json, patch_json, post_json};

pub async fn fetch_coupons() -> Result<Vec<Coupon>, ApiError> {
    get_json::<CouponListResponse>("/api/coupons/getCoupons")
        .await
        .map(CouponListResponse::into_coupons)
}

/// Create the batch; returns the number of coupons sent.
pub async fn save_coupons(submission: &CouponSubmission) -> Result<usize, ApiError> {
    match submission {
        CouponSubmission::Single(coupon) => {
            post_json::<_, Value>("/api/coupons/createCoupon", coupon).await?;
        }
        CouponSubmission::Bulk(batch) => {
            post_json::<_, Value>("/api/coupons/bulkCreateCoupons", batch).await?;
        }
    }
    Ok(submission.len())
}

pub async fn toggle_coupon(code: &str, body: &ToggleCouponDto) -> Result<(), ApiError> {
    let path = format!("/api/coupons/toggleStatus/{}", urlencoding::encode(code));
    patch_json::<_, Value>(&path, body).await.map(|_| ())
}
