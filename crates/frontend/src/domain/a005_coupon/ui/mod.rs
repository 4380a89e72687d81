pub mod generator;
pub mod list;

use crate::domain::a005_coupon::api::fetch_coupons;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_USECASE};
use crate::shared::table_state::use_table_state;
use contracts::domain::a005_coupon::aggregate::{filter_specs, Coupon};
use contracts::shared::table_view::PagePolicy;
use generator::CouponGenerator;
use leptos::prelude::*;
use list::CouponList;

/// Coupon generation form above the table of existing coupons.
#[component]
#[allow(non_snake_case)]
pub fn CouponPage() -> impl IntoView {
    let table = use_table_state::<Coupon>(filter_specs(), PagePolicy::ResetToFirst);
    let reload = move || table.load(fetch_coupons());
    reload();

    view! {
        <PageFrame page_id="a005_coupon--usecase" category=PAGE_CAT_USECASE>
            <CouponGenerator on_saved=Callback::new(move |_| reload()) />
            <CouponList table=table on_refresh=Callback::new(move |_| reload()) />
        </PageFrame>
    }
}
