//! Client-side batch of new coupon codes before they are saved.

use rand::Rng;

use super::aggregate::{BulkCreateCouponsDto, CreateCouponDto};
use crate::shared::error::ApiError;

pub const CODE_PREFIX: &str = "learnleap";

/// Four-digit suffixes 1000..=9999
pub const MAX_BATCH: usize = 9000;

/// Новый купон, ещё не сохранённый
#[derive(Debug, Clone, PartialEq)]
pub struct CouponDraft {
    pub code: String,
    pub discount_value: String,
    pub uses_per_coupon: String,
}

/// Значения по умолчанию для пакета купонов
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CouponDefaults {
    pub discount_value: String,
    pub uses_per_coupon: String,
}

impl CouponDefaults {
    /// Save new defaults and apply the non-blank ones to the current batch.
    pub fn save(
        &mut self,
        discount_value: &str,
        uses_per_coupon: &str,
        drafts: &mut [CouponDraft],
    ) -> Result<(), ApiError> {
        let amount = discount_value.trim();
        let limit = uses_per_coupon.trim();
        if amount.is_empty() && limit.is_empty() {
            return Err(ApiError::validation("Enter default amount or limit first!"));
        }
        self.discount_value = amount.to_string();
        self.uses_per_coupon = limit.to_string();
        for draft in drafts.iter_mut() {
            if !amount.is_empty() {
                draft.discount_value = amount.to_string();
            }
            if !limit.is_empty() {
                draft.uses_per_coupon = limit.to_string();
            }
        }
        Ok(())
    }
}

/// Generate `count` distinct `learnleap####` codes pre-filled with the defaults.
pub fn generate_batch<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    defaults: &CouponDefaults,
) -> Result<Vec<CouponDraft>, ApiError> {
    if count == 0 {
        return Err(ApiError::validation("Enter the number of coupons to generate"));
    }
    if count > MAX_BATCH {
        return Err(ApiError::validation(format!(
            "At most {MAX_BATCH} coupons can be generated at once"
        )));
    }
    let batch = rand::seq::index::sample(rng, MAX_BATCH, count)
        .into_iter()
        .map(|offset| CouponDraft {
            code: format!("{CODE_PREFIX}{}", 1000 + offset),
            discount_value: defaults.discount_value.clone(),
            uses_per_coupon: defaults.uses_per_coupon.clone(),
        })
        .collect();
    Ok(batch)
}

/// Что отправить на сервер: один купон или пакет
#[derive(Debug, Clone, PartialEq)]
pub enum CouponSubmission {
    Single(CreateCouponDto),
    Bulk(BulkCreateCouponsDto),
}

impl CouponSubmission {
    pub fn len(&self) -> usize {
        match self {
            CouponSubmission::Single(_) => 1,
            CouponSubmission::Bulk(bulk) => bulk.coupons.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Validate the batch and choose single or bulk create.
pub fn build_submission(drafts: &[CouponDraft]) -> Result<CouponSubmission, ApiError> {
    if drafts.is_empty() {
        return Err(ApiError::validation("Please generate coupons first!"));
    }
    if let Some(draft) = drafts
        .iter()
        .find(|d| d.discount_value.trim().is_empty() || d.uses_per_coupon.trim().is_empty())
    {
        return Err(ApiError::validation(format!(
            "Coupon {} needs a discount amount and a usage limit",
            draft.code
        )));
    }

    let mut coupons: Vec<CreateCouponDto> = drafts
        .iter()
        .map(|d| CreateCouponDto {
            code: d.code.clone(),
            discount_value: d.discount_value.trim().to_string(),
            uses_per_coupon: d.uses_per_coupon.trim().to_string(),
            created_by: 1,
            is_active: true,
        })
        .collect();

    if coupons.len() == 1 {
        Ok(CouponSubmission::Single(coupons.remove(0)))
    } else {
        Ok(CouponSubmission::Bulk(BulkCreateCouponsDto { coupons }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_codes_unique_and_well_formed() {
        let mut rng = StdRng::seed_from_u64(3);
        let batch = generate_batch(&mut rng, 500, &CouponDefaults::default()).unwrap();
        assert_eq!(batch.len(), 500);

        let codes: HashSet<&str> = batch.iter().map(|d| d.code.as_str()).collect();
        assert_eq!(codes.len(), 500);
        for code in codes {
            let digits = code.strip_prefix(CODE_PREFIX).unwrap();
            let n: u32 = digits.parse().unwrap();
            assert!((1000..=9999).contains(&n));
        }
    }

    #[test]
    fn test_batch_limits() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate_batch(&mut rng, 0, &CouponDefaults::default()).is_err());
        assert!(generate_batch(&mut rng, MAX_BATCH + 1, &CouponDefaults::default()).is_err());
        assert_eq!(generate_batch(&mut rng, MAX_BATCH, &CouponDefaults::default()).unwrap().len(), MAX_BATCH);
    }

    #[test]
    fn test_defaults_apply_now_and_later() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut defaults = CouponDefaults::default();
        let mut batch = generate_batch(&mut rng, 3, &defaults).unwrap();

        assert!(defaults.save("", " ", &mut batch).is_err());
        defaults.save("500", "", &mut batch).unwrap();
        assert!(batch.iter().all(|d| d.discount_value == "500" && d.uses_per_coupon.is_empty()));

        let later = generate_batch(&mut rng, 2, &defaults).unwrap();
        assert!(later.iter().all(|d| d.discount_value == "500"));
    }

    #[test]
    fn test_submission_single_or_bulk() {
        assert!(build_submission(&[]).is_err());

        let mut drafts = vec![CouponDraft {
            code: "learnleap1001".into(),
            discount_value: "250".into(),
            uses_per_coupon: "".into(),
        }];
        let err = build_submission(&drafts).unwrap_err();
        assert!(err.to_string().contains("learnleap1001"));

        drafts[0].uses_per_coupon = "5".into();
        match build_submission(&drafts).unwrap() {
            CouponSubmission::Single(dto) => {
                assert_eq!(dto.code, "learnleap1001");
                assert_eq!(dto.created_by, 1);
                assert!(dto.is_active);
            }
            other => panic!("expected single, got {other:?}"),
        }

        drafts.push(CouponDraft {
            code: "learnleap1002".into(),
            discount_value: "250".into(),
            uses_per_coupon: "5".into(),
        });
        let submission = build_submission(&drafts).unwrap();
        assert!(matches!(submission, CouponSubmission::Bulk(_)));
        assert_eq!(submission.len(), 2);
    }
}
