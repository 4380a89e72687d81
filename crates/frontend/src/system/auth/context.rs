use chrono::Utc;
use contracts::system::auth::{AuthError, LoginRequest, SessionCoordinator, StaffSession};
use leptos::prelude::*;

use super::storage;
use crate::shared::config::use_config;

/// Auth context provider component
///
/// Builds the session coordinator from the configured staff accounts and
/// restores a session saved by a previous visit.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let config = use_config();
    let mut coordinator = SessionCoordinator::new(config.auth.accounts);

    match coordinator.restore(storage::load_session()) {
        Some(session) => log::info!("Session restored for {}", session.email),
        None => storage::clear_session(),
    }

    let (auth_state, set_auth_state) = signal(coordinator);
    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<SessionCoordinator>, WriteSignal<SessionCoordinator>) {
    let auth_state = use_context::<ReadSignal<SessionCoordinator>>()
        .expect("AuthProvider not found in component tree");
    let set_auth_state = use_context::<WriteSignal<SessionCoordinator>>()
        .expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Helper: Perform login
pub fn do_login(
    set_auth_state: WriteSignal<SessionCoordinator>,
    request: &LoginRequest,
) -> Result<StaffSession, AuthError> {
    let mut result = Err(AuthError::InvalidCredentials);
    set_auth_state.update(|auth| {
        result = auth.sign_in(request, Utc::now()).cloned();
    });

    match &result {
        Ok(session) => {
            storage::save_session(session);
            log::info!("Signed in as {}", session.email);
        }
        Err(e) => log::warn!("Sign-in refused: {}", e),
    }
    result
}

/// Helper: Perform logout
pub fn do_logout(set_auth_state: WriteSignal<SessionCoordinator>) {
    set_auth_state.update(|auth| {
        if let Some(session) = auth.sign_out() {
            log::info!("Signed out {}", session.email);
        }
    });
    storage::clear_session();
}
