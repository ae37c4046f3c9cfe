//! Transient notification stack rendered above all pages.

use leptos::prelude::*;

use crate::state::notify::{NotifyState, Toast, ToastKind};

/// Toast lifetime before auto-dismissal.
#[cfg(feature = "hydrate")]
const TOAST_MILLIS: u64 = 4000;

/// Renders the current toasts; each dismisses itself after a few seconds
/// or when clicked.
#[component]
pub fn ToastStack() -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();

    view! {
        <div class="toast-stack">
            <For
                each=move || notify.get().toasts
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;

                    #[cfg(feature = "hydrate")]
                    leptos::task::spawn_local(async move {
                        gloo_timers::future::sleep(std::time::Duration::from_millis(
                            TOAST_MILLIS,
                        ))
                        .await;
                        notify.update(|n| n.dismiss(id));
                    });

                    let class = match toast.kind {
                        ToastKind::Success => "toast toast--success",
                        ToastKind::Error => "toast toast--error",
                    };
                    view! {
                        <div class=class on:click=move |_| notify.update(|n| n.dismiss(id))>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
