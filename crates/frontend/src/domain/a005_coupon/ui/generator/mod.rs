use crate::domain::a005_coupon::api::save_coupons;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;
use contracts::domain::a005_coupon::generator::{
    build_submission, generate_batch, CouponDefaults, CouponDraft, MAX_BATCH,
};
use contracts::shared::action::{ActionState, Lifetime};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const SAVE_FAILED: &str = "Failed to create coupons";

#[component]
#[allow(non_snake_case)]
pub fn CouponGenerator(on_saved: Callback<()>) -> impl IntoView {
    let toasts = use_toasts();
    let count = RwSignal::new("1".to_string());
    let drafts = RwSignal::new(Vec::<CouponDraft>::new());
    let defaults = RwSignal::new(CouponDefaults::default());
    let default_amount = RwSignal::new(String::new());
    let default_limit = RwSignal::new(String::new());
    let save_state = RwSignal::new(ActionState::<usize>::Idle);

    let lifetime = Lifetime::new();
    let on_unmount = lifetime.clone();
    on_cleanup(move || on_unmount.cancel());
    let lifetime = StoredValue::new(lifetime);

    let generate = move |_| {
        let requested = count.get_untracked().trim().parse::<usize>().unwrap_or(0);
        let batch = defaults.with_untracked(|d| generate_batch(&mut rand::thread_rng(), requested, d));
        match batch {
            Ok(batch) => {
                log::info!("Generated {} coupon codes", batch.len());
                drafts.set(batch);
            }
            Err(err) => toasts.api_error(&err, "Failed to generate coupons"),
        }
    };

    let save_defaults = move |_| {
        let amount = default_amount.get_untracked();
        let limit = default_limit.get_untracked();
        let mut batch = drafts.get_untracked();
        let saved = defaults
            .try_update(|d| d.save(&amount, &limit, &mut batch))
            .unwrap_or(Ok(()));
        match saved {
            Ok(()) => {
                drafts.set(batch);
                toasts.success("Default values saved. They will apply to all new coupons too!");
            }
            Err(err) => toasts.api_error(&err, "Failed to save defaults"),
        }
    };

    let edit_draft = move |index: usize, patch: Box<dyn FnOnce(&mut CouponDraft)>| {
        drafts.update(|list| {
            if let Some(draft) = list.get_mut(index) {
                patch(draft);
            }
        });
    };

    let save = move |_| {
        let submission = match drafts.with_untracked(|list| build_submission(list)) {
            Ok(submission) => submission,
            Err(err) => {
                toasts.api_error(&err, SAVE_FAILED);
                return;
            }
        };
        if !save_state.try_update(|s| s.begin()).unwrap_or(false) {
            return;
        }
        let lifetime = lifetime.get_value();
        spawn_local(async move {
            let result = save_coupons(&submission).await;
            if !lifetime.is_active() {
                return;
            }
            save_state.update(|s| {
                s.finish(result.clone().map_err(|e| e.user_message(SAVE_FAILED)))
            });
            match result {
                Ok(created) => {
                    log::info!("Created {} coupons", created);
                    toasts.success("Coupons created successfully!");
                    drafts.set(Vec::new());
                    count.set("1".to_string());
                    default_amount.set(String::new());
                    default_limit.set(String::new());
                    on_saved.run(());
                }
                Err(err) => toasts.api_error(&err, SAVE_FAILED),
            }
        });
    };

    let saving = move || save_state.with(ActionState::is_pending);
    let draft_rows = move || (0..drafts.with(Vec::len)).collect::<Vec<_>>();
    let draft_field = move |index: usize, read: fn(&CouponDraft) -> String| {
        drafts.with(|list| list.get(index).map(read)).unwrap_or_default()
    };

    view! {
        <PageHeader title="Coupon Generator">
            <span class="text-muted">{format!("Up to {} codes per batch", MAX_BATCH)}</span>
        </PageHeader>

        <div class="page__content">
            <div class="form-card">
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <div class="form__group">
                        <label class="form__label">"Number of coupons"</label>
                        <input
                            type="number"
                            min="1"
                            class="form__input"
                            prop:value=move || count.get()
                            on:input=move |ev| count.set(event_target_value(&ev))
                        />
                    </div>
                    <Button appearance=ButtonAppearance::Primary on_click=generate>
                        {icon("tag")}
                        " Generate Coupons"
                    </Button>
                </Flex>

                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <div class="form__group">
                        <label class="form__label">"Default amount"</label>
                        <input
                            type="number"
                            class="form__input"
                            placeholder="Default Amount"
                            prop:value=move || default_amount.get()
                            on:input=move |ev| default_amount.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Default usage limit"</label>
                        <input
                            type="number"
                            class="form__input"
                            placeholder="Default Limit"
                            prop:value=move || default_limit.get()
                            on:input=move |ev| default_limit.set(event_target_value(&ev))
                        />
                    </div>
                    <Button appearance=ButtonAppearance::Secondary on_click=save_defaults>
                        "Set Default Values"
                    </Button>
                </Flex>
            </div>

            <Show when=move || drafts.with(|list| !list.is_empty())>
                <div class="table-wrapper">
                    <table class="table__data">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"#"</th>
                                <th class="table__header-cell">"Code"</th>
                                <th class="table__header-cell">"Discount"</th>
                                <th class="table__header-cell">"Uses per coupon"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=draft_rows
                                key=|index| *index
                                children=move |index| view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{index + 1}</td>
                                        <td class="table__cell">{move || draft_field(index, |d| d.code.clone())}</td>
                                        <td class="table__cell">
                                            <input
                                                type="number"
                                                class="form__input"
                                                prop:value=move || draft_field(index, |d| d.discount_value.clone())
                                                on:input=move |ev| {
                                                    let value = event_target_value(&ev);
                                                    edit_draft(index, Box::new(move |d| d.discount_value = value));
                                                }
                                            />
                                        </td>
                                        <td class="table__cell">
                                            <input
                                                type="number"
                                                class="form__input"
                                                prop:value=move || draft_field(index, |d| d.uses_per_coupon.clone())
                                                on:input=move |ev| {
                                                    let value = event_target_value(&ev);
                                                    edit_draft(index, Box::new(move |d| d.uses_per_coupon = value));
                                                }
                                            />
                                        </td>
                                    </tr>
                                }
                            />
                        </tbody>
                    </table>
                </div>

                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=save
                    disabled=Signal::derive(saving)
                >
                    {move || if saving() { "Saving..." } else { "Save All Coupons" }}
                </Button>
            </Show>
        </div>
    }
}
