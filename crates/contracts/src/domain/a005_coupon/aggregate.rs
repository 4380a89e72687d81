use serde::{Deserialize, Serialize};

use crate::domain::common::lenient::{flexible_bool, string_or_number};
use crate::domain::common::Record;
use crate::shared::table_view::FilterSpec;

fn default_active() -> bool {
    true
}

/// Купон на скидку
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    #[serde(default, deserialize_with = "string_or_number")]
    pub code: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub discount_value: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub uses_per_coupon: String,
    #[serde(default = "default_active", deserialize_with = "flexible_bool")]
    pub is_active: bool,
}

impl Coupon {
    pub fn status_label(&self) -> &'static str {
        if self.is_active {
            "Active"
        } else {
            "Inactive"
        }
    }

    /// Body of the toggle request: the state the coupon should switch to
    pub fn toggle_request(&self) -> ToggleCouponDto {
        ToggleCouponDto {
            is_active: !self.is_active,
        }
    }
}

impl Record for Coupon {
    fn record_key(&self) -> String {
        self.code.clone()
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "code" => Some(self.code.clone()),
            "discount_value" => Some(self.discount_value.clone()),
            "uses_per_coupon" => Some(self.uses_per_coupon.clone()),
            "status" => Some(self.status_label().to_string()),
            _ => None,
        }
    }

    fn dataset_index() -> &'static str {
        "a005"
    }

    fn dataset_name() -> &'static str {
        "coupons"
    }

    fn list_name() -> &'static str {
        "Coupons"
    }
}

pub fn filter_specs() -> Vec<FilterSpec> {
    vec![
        FilterSpec::text("search", "Search by code", &["code"]),
        FilterSpec::exact("status", "All Statuses", "status"),
    ]
}

/// `GET /api/coupons/getCoupons` answers either a bare list or `{ "data": [...] }`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CouponListResponse {
    Bare(Vec<Coupon>),
    Wrapped {
        #[serde(default)]
        data: Vec<Coupon>,
    },
}

impl CouponListResponse {
    pub fn into_coupons(self) -> Vec<Coupon> {
        match self {
            CouponListResponse::Bare(list) => list,
            CouponListResponse::Wrapped { data } => data,
        }
    }
}

/// `POST /api/coupons/createCoupon`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCouponDto {
    pub code: String,
    pub discount_value: String,
    pub uses_per_coupon: String,
    pub created_by: u32,
    pub is_active: bool,
}

/// `POST /api/coupons/bulkCreateCoupons`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkCreateCouponsDto {
    pub coupons: Vec<CreateCouponDto>,
}

/// `PATCH /api/coupons/toggleStatus/:code`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToggleCouponDto {
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_bare_or_wrapped() {
        let bare: CouponListResponse =
            serde_json::from_str(r#"[{"code": "learnleap1234", "discount_value": 500, "uses_per_coupon": "3"}]"#).unwrap();
        let coupons = bare.into_coupons();
        assert_eq!(coupons[0].discount_value, "500");
        assert!(coupons[0].is_active);

        let wrapped: CouponListResponse =
            serde_json::from_str(r#"{"data": [{"code": "learnleap9999", "is_active": 0}]}"#).unwrap();
        let coupons = wrapped.into_coupons();
        assert_eq!(coupons.len(), 1);
        assert_eq!(coupons[0].status_label(), "Inactive");
        assert!(coupons[0].toggle_request().is_active);

        let empty: CouponListResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(empty.into_coupons().is_empty());
    }
}
