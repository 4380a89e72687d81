//! Transient notifications (bottom-right, one at a time).

use contracts::shared::error::ApiError;
use contracts::shared::toast::{ToastKind, ToastSlot};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct Toasts {
    slot: RwSignal<ToastSlot>,
    duration_ms: u32,
}

impl Toasts {
    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message.into());
    }

    /// Error toast for a failed request; `fallback` names the action.
    pub fn api_error(&self, err: &ApiError, fallback: &str) {
        if !err.is_validation() {
            log::warn!("{}: {}", fallback, err);
        }
        self.error(err.user_message(fallback));
    }

    pub fn dismiss(&self, id: uuid::Uuid) {
        self.slot.try_update(|slot| slot.dismiss(id));
    }

    fn show(&self, kind: ToastKind, message: String) {
        let Some(id) = self.slot.try_update(|slot| slot.show(kind, message)) else {
            return;
        };
        // The timer only removes its own toast, never a successor
        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(this.duration_ms).await;
            this.dismiss(id);
        });
    }
}

pub fn provide_toasts(duration_ms: u32) {
    provide_context(Toasts {
        slot: RwSignal::new(ToastSlot::new()),
        duration_ms,
    });
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>().expect("Toasts not found in context")
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toast-host">
            {move || {
                toasts.slot.with(|slot| slot.current().cloned()).map(|toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=toast.kind.css_class()
                            role="status"
                            on:click=move |_| toasts.dismiss(id)
                        >
                            {toast.message}
                        </div>
                    }
                })
            }}
        </div>
    }
}
