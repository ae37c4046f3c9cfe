//! Public site navigation bar.
//!
//! Shows the marketing links always; the right side switches between a
//! sign-in button and dashboard/sign-out actions with the session.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::theme_switcher::ThemeSwitcher;
use crate::state::notify::NotifyState;
use crate::state::session::{self, SessionState};
use crate::state::session_store::SessionStore;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let menu_open = RwSignal::new(false);

    let on_logout = Callback::new(move |()| {
        let destination = session::logout(session, notify, &store);
        navigate(destination.path(), NavigateOptions::default());
    });

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <a href="/" class="navbar__logo">"CostaSuite"</a>

                <div class="navbar__links">
                    <a href="/" class="navbar__link">"Inicio"</a>
                    <a href="/propiedades" class="navbar__link">"Propiedades"</a>
                    <a href="/contacto" class="navbar__link">"Contacto"</a>
                </div>

                <div class="navbar__actions">
                    <ThemeSwitcher/>
                    <Show
                        when=move || session.get().is_authenticated()
                        fallback=|| {
                            view! {
                                <a href="/auth/login" class="btn btn--primary">
                                    "Iniciar Sesión"
                                </a>
                            }
                        }
                    >
                        <a href="/dashboard" class="btn btn--ghost">"Dashboard"</a>
                        <button class="btn btn--outline" on:click=move |_| on_logout.run(())>
                            "Cerrar Sesión"
                        </button>
                    </Show>
                </div>

                <button
                    class="navbar__menu-toggle"
                    aria-label="Abrir menú"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="navbar__mobile">
                    <a href="/" class="navbar__link">"Inicio"</a>
                    <a href="/propiedades" class="navbar__link">"Propiedades"</a>
                    <a href="/contacto" class="navbar__link">"Contacto"</a>
                    <Show
                        when=move || session.get().is_authenticated()
                        fallback=|| {
                            view! {
                                <a href="/auth/login" class="navbar__link">"Iniciar Sesión"</a>
                            }
                        }
                    >
                        <a href="/dashboard" class="navbar__link">"Dashboard"</a>
                        <button class="navbar__link" on:click=move |_| on_logout.run(())>
                            "Cerrar Sesión"
                        </button>
                    </Show>
                </div>
            </Show>
        </nav>
    }
}
