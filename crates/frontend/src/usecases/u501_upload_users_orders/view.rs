use super::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_USECASE};
use crate::shared::toast::use_toasts;
use contracts::shared::action::{ActionState, Lifetime};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_upload_users_orders::{UploadKind, UploadUsersOrders};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use wasm_bindgen::JsCast;

#[component]
pub fn UploadView() -> impl IntoView {
    view! {
        <PageFrame page_id="u501_upload_users_orders--usecase" category=PAGE_CAT_USECASE>
            <PageHeader title=UploadUsersOrders::display_name()>
                {icon("upload")}
            </PageHeader>
            <div class="page__content">
                <UploadCard step=1 kind=UploadKind::User />
                <UploadCard step=2 kind=UploadKind::Order />
            </div>
        </PageFrame>
    }
}

/// File picker and upload button for one CSV kind.
#[component]
fn UploadCard(step: u8, kind: UploadKind) -> impl IntoView {
    let toasts = use_toasts();
    let file = StoredValue::new_local(None::<web_sys::File>);
    let file_name = RwSignal::new(None::<String>);
    let state = RwSignal::new(ActionState::<String>::Idle);
    // Bumped to clear the native input after an upload
    let input_generation = RwSignal::new(0u32);

    let lifetime = Lifetime::new();
    let on_unmount = lifetime.clone();
    on_cleanup(move || on_unmount.cancel());
    let lifetime = StoredValue::new(lifetime);

    let on_pick = move |ev: leptos::ev::Event| {
        let picked = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        let Some(picked) = picked else {
            file.set_value(None);
            file_name.set(None);
            return;
        };
        match kind.validate_file_name(&picked.name()) {
            Ok(()) => {
                file_name.set(Some(picked.name()));
                file.set_value(Some(picked));
            }
            Err(err) => {
                toasts.api_error(&err, "Invalid file");
                file.set_value(None);
                file_name.set(None);
                input_generation.update(|g| *g += 1);
            }
        }
    };

    let on_upload = move |_| {
        let Some(selected) = file.get_value() else {
            return;
        };
        if !state.try_update(|s| s.begin()).unwrap_or(false) {
            return;
        }
        let lifetime = lifetime.get_value();
        spawn_local(async move {
            let result = api::upload_csv(kind, &selected).await;
            if !lifetime.is_active() {
                return;
            }
            state.update(|s| s.finish(result.clone().map_err(|e| e.to_string())));
            match result {
                Ok(message) => {
                    log::info!("{} CSV uploaded: {}", kind.title(), selected.name());
                    toasts.success(message);
                    file.set_value(None);
                    file_name.set(None);
                    input_generation.update(|g| *g += 1);
                }
                Err(err) => toasts.api_error(&err, "An error occurred during upload"),
            }
        });
    };

    let uploading = move || state.with(ActionState::is_pending);

    view! {
        <div class="form-card">
            <h3 class="form-card__title">{format!("{}. {} Data Upload", step, kind.title())}</h3>
            <p class="text-muted">
                "Required Columns: "
                <strong>{kind.required_columns()}</strong>
            </p>
            <Flex gap=FlexGap::Small align=FlexAlign::Center>
                {move || {
                    input_generation.track();
                    view! {
                        <input type="file" accept=".csv" class="form__input" on:change=on_pick />
                    }
                }}
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_upload
                    disabled=Signal::derive(move || file_name.with(Option::is_none) || uploading())
                >
                    {icon("upload")}
                    {move || {
                        if uploading() {
                            "Uploading...".to_string()
                        } else {
                            format!(" Upload {} CSV", kind.title())
                        }
                    }}
                </Button>
            </Flex>
            {move || file_name.get().map(|name| view! {
                <span class="text-muted">{name}</span>
            })}
        </div>
    }
}
