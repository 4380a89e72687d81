//! PageFrame - standard root wrapper for every page rendered inside a tab.
//!
//! Sets two metadata attributes on the root DOM element:
//!   - `id`                 - `"{entity}--{category}"`, e.g. `"a003_order--list"`
//!   - `data-page-category` - one of the PAGE_CAT_* constants

use leptos::prelude::*;

/// Table of records with filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Metric cards.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Form-driven operation (uploads, scheduling, coupon generation).
pub const PAGE_CAT_USECASE: &str = "usecase";

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        PAGE_CAT_USECASE => "page page--usecase",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
