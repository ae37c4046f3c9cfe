//! Credential login page for the agent/admin portal.
//!
//! The form validates locally first; only well-formed credentials reach
//! the session context. A rejected login keeps the fields populated so
//! the user can correct them.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::net::types::Credentials;
use crate::state::notify::NotifyState;
use crate::state::session::SessionState;
use crate::state::session_store::SessionStore;
use crate::validate::FieldErrors;
use crate::validate::auth::validate_login;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();
    let store = expect_context::<SessionStore>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());

    let loading = move || session.get().loading;

    let submit = Callback::new(move |()| {
        let credentials = Credentials {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };

        let result = validate_login(&credentials);
        if !result.is_empty() {
            errors.set(result);
            return;
        }
        errors.set(FieldErrors::default());

        #[cfg(feature = "hydrate")]
        {
            let store = store.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                // A rejected login already produced a toast; the fields
                // stay as typed.
                if let Ok(destination) =
                    crate::state::session::login(session, notify, store, credentials).await
                {
                    navigate(destination.path(), NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&credentials, &store, &notify);
        }
    });

    let error_for = move |field: &'static str| {
        move || {
            errors.with(|e| {
                e.get(field)
                    .map(|message| view! { <p class="form-error">{message.to_owned()}</p> })
            })
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <a href="/" class="login-card__logo">"CostaSuite"</a>
                <h1 class="login-card__title">"Iniciar Sesión"</h1>
                <p class="login-card__subtitle">
                    "Ingresa tus credenciales para acceder al portal"
                </p>

                <form on:submit=move |ev| {
                    ev.prevent_default();
                    submit.run(());
                }>
                    <label class="login-card__label">
                        "Email"
                        <input
                            type="email"
                            placeholder="tu@email.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                            disabled=loading
                        />
                    </label>
                    {error_for("email")}

                    <label class="login-card__label">
                        "Contraseña"
                        <input
                            type="password"
                            placeholder="••••••••"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            disabled=loading
                        />
                    </label>
                    {error_for("password")}

                    <button type="submit" class="btn btn--primary login-card__submit" disabled=loading>
                        {move || if loading() { "Iniciando sesión..." } else { "Iniciar Sesión" }}
                    </button>
                </form>

                <a href="/" class="login-card__back">"← Volver al inicio"</a>
            </div>

            <div class="login-demo">
                <h2>"Credenciales de Demo"</h2>
                <p>
                    <strong>"Admin: "</strong>
                    "admin@costasuite.com / admin123"
                </p>
                <p>
                    <strong>"Agente: "</strong>
                    "agent1@costasuite.com / agent123"
                </p>
            </div>
        </div>
    }
}
