use crate::domain::a005_coupon::api::toggle_coupon;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table_filters::{
    active_filter_count, ActiveFilterTags, SearchFilter, SelectFilter,
};
use crate::shared::components::table_status::TableStatusRow;
use crate::shared::icons::icon;
use crate::shared::table_state::TableState;
use contracts::domain::a005_coupon::aggregate::Coupon;
use contracts::shared::action::ActionKind;
use contracts::shared::error::ApiError;
use leptos::prelude::*;
use thaw::*;

const STATUS_OPTIONS: &[&str] = &["Active", "Inactive"];

/// Existing coupons with an activate / deactivate toggle per row.
#[component]
#[allow(non_snake_case)]
pub fn CouponList(table: TableState<Coupon>, on_refresh: Callback<()>) -> impl IntoView {
    let filters_expanded = RwSignal::new(false);

    view! {
        <PageHeader title="Existing Coupons" subtitle=table.count_label()>
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| on_refresh.run(())
                disabled=Signal::derive(move || table.is_loading())
            >
                {icon("refresh")}
                " Refresh"
            </Button>
        </PageHeader>

        <div class="page__content">
            <FilterPanel
                is_expanded=filters_expanded
                active_filters_count=active_filter_count(table)
                pagination_controls=view! { <PaginationControls table=table /> }.into_any()
                filter_tags=view! { <ActiveFilterTags table=table /> }.into_any()
            >
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <SearchFilter table=table name="search" />
                    <SelectFilter table=table name="status" options=STATUS_OPTIONS />
                </Flex>
            </FilterPanel>

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"#"</TableHeaderCell>
                            <TableHeaderCell>"Code"</TableHeaderCell>
                            <TableHeaderCell>"Discount"</TableHeaderCell>
                            <TableHeaderCell>"Uses per coupon"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                            <TableHeaderCell>"Action"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || table.page_keys()
                            key=|(serial, code)| format!("{}:{}", serial, code)
                            children=move |(serial, code)| view! {
                                <CouponRow table=table serial=serial row_key=code />
                            }
                        />
                        <TableStatusRow table=table colspan=6 />
                    </TableBody>
                </Table>
            </div>
        </div>
    }
}

#[component]
fn CouponRow(table: TableState<Coupon>, serial: usize, row_key: String) -> impl IntoView {
    let row_key = StoredValue::new(row_key);
    let read = move |f: fn(&Coupon) -> String| {
        row_key
            .with_value(|k| table.row(k, f))
            .unwrap_or_default()
    };
    let is_active = move || row_key.with_value(|k| table.row(k, |c| c.is_active)).unwrap_or(false);
    let busy = move || row_key.with_value(|k| table.is_busy(k, ActionKind::ToggleCoupon));

    let on_toggle = move |_| {
        let key = row_key.get_value();
        table.dispatch(
            &key,
            ActionKind::ToggleCoupon,
            |coupon: &Coupon| {
                let code = coupon.code.clone();
                let body = coupon.toggle_request();
                Ok(async move {
                    toggle_coupon(&code, &body).await?;
                    Ok::<_, ApiError>(body.is_active)
                })
            },
            |coupon: &mut Coupon, now_active: bool| {
                coupon.is_active = now_active;
                let state = if now_active { "activated" } else { "deactivated" };
                Ok(format!("Coupon {} {}", coupon.code, state))
            },
        );
    };

    view! {
        <TableRow>
            <TableCell>{serial}</TableCell>
            <TableCell>{move || read(|c| c.code.clone())}</TableCell>
            <TableCell>{move || read(|c| c.discount_value.clone())}</TableCell>
            <TableCell>{move || read(|c| c.uses_per_coupon.clone())}</TableCell>
            <TableCell>
                <span class=move || if is_active() { "badge badge--success" } else { "badge badge--error" }>
                    {move || read(|c| c.status_label().to_string())}
                </span>
            </TableCell>
            <TableCell>
                <button
                    class="button button--secondary button--small"
                    disabled=busy
                    on:click=on_toggle
                >
                    {move || {
                        if busy() {
                            ActionKind::ToggleCoupon.pending_label()
                        } else if is_active() {
                            "Deactivate"
                        } else {
                            "Activate"
                        }
                    }}
                </button>
            </TableCell>
        </TableRow>
    }
}
