use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::config::{load_config, provide_config};
use crate::shared::toast::{provide_toasts, ToastHost};
use crate::system::auth::context::AuthProvider;
use contracts::shared::config::DashboardConfig;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn App() -> impl IntoView {
    let config = RwSignal::new(None::<DashboardConfig>);

    spawn_local(async move {
        config.set(Some(load_config().await));
    });

    view! {
        <Show
            when=move || config.with(|c| c.is_some())
            fallback=|| view! { <div class="app-loading">"Loading..."</div> }
        >
            {move || config.get().map(|config| view! { <ConfiguredApp config=config /> })}
        </Show>
    }
}

/// Everything below runs with a resolved configuration in context.
#[component]
fn ConfiguredApp(config: DashboardConfig) -> impl IntoView {
    provide_context(AppGlobalContext::new());
    provide_toasts(config.toast.duration_ms);
    provide_config(config);

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
        <ToastHost />
    }
}
