use leptos::prelude::*;

use super::context::use_auth;
use crate::system::pages::login::LoginPage;

/// Renders its children only while a staff session exists,
/// the sign-in page otherwise
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|auth| auth.is_signed_in())
            fallback=|| view! { <LoginPage /> }
        >
            {children()}
        </Show>
    }
}
