//! Dashboard navigation sidebar.
//!
//! Links depend on the signed-in role: admins manage the whole platform,
//! agents only their own listings.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::types::Role;
use crate::state::notify::NotifyState;
use crate::state::session::{self, SessionState};
use crate::state::session_store::SessionStore;

const ADMIN_LINKS: &[(&str, &str)] = &[
    ("/dashboard", "Dashboard"),
    ("/dashboard/propiedades", "Propiedades"),
    ("/dashboard/usuarios", "Usuarios"),
];

const AGENT_LINKS: &[(&str, &str)] = &[
    ("/dashboard", "Dashboard"),
    ("/dashboard/mis-propiedades", "Mis Propiedades"),
];

#[component]
pub fn DashboardSidebar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();
    let pathname = use_location().pathname;

    let links = move || {
        let is_admin = session
            .get()
            .user
            .is_some_and(|user| user.role == Role::Admin);
        if is_admin { ADMIN_LINKS.to_vec() } else { AGENT_LINKS.to_vec() }
    };

    let on_logout = move |_| {
        let destination = session::logout(session, notify, &store);
        navigate(destination.path(), NavigateOptions::default());
    };

    view! {
        <div class="sidebar">
            <a href="/" class="sidebar__logo">"CostaSuite"</a>

            <nav class="sidebar__nav">
                <For
                    each=links
                    key=|link| link.0
                    children=move |(href, label): (&'static str, &'static str)| {
                        let class = move || {
                            if pathname.get() == href {
                                "sidebar__link sidebar__link--active"
                            } else {
                                "sidebar__link"
                            }
                        };
                        view! {
                            <a href=href class=class>{label}</a>
                        }
                    }
                />
            </nav>

            <div class="sidebar__footer">
                {move || {
                    session.get().user.map(|user| {
                        view! {
                            <div class="sidebar__user">
                                <p class="sidebar__user-name">{user.name}</p>
                                <p class="sidebar__user-email">{user.email}</p>
                                <p class="sidebar__user-role">{user.role.label()}</p>
                            </div>
                        }
                    })
                }}
                <button class="btn btn--outline sidebar__logout" on:click=on_logout>
                    "Cerrar Sesión"
                </button>
            </div>
        </div>
    }
}
