//! Authenticated frame around every dashboard page: route guard, sidebar,
//! header, and the content area.

use leptos::prelude::*;

use crate::components::dashboard_header::DashboardHeader;
use crate::components::dashboard_sidebar::DashboardSidebar;
use crate::components::route_guard::RequireAuth;
use crate::net::types::Role;

#[component]
pub fn DashboardShell(
    /// Roles permitted on this page; empty admits any signed-in user.
    #[prop(optional)]
    allowed: &'static [Role],
    children: ChildrenFn,
) -> impl IntoView {
    let sidebar_open = RwSignal::new(false);
    let on_menu = Callback::new(move |()| sidebar_open.update(|open| *open = !*open));

    view! {
        <RequireAuth allowed=allowed>
            <div class="dashboard">
                <aside class=move || {
                    if sidebar_open.get() {
                        "dashboard__sidebar dashboard__sidebar--open"
                    } else {
                        "dashboard__sidebar"
                    }
                }>
                    <DashboardSidebar/>
                </aside>

                <Show when=move || sidebar_open.get()>
                    <div
                        class="dashboard__backdrop"
                        on:click=move |_| sidebar_open.set(false)
                    ></div>
                </Show>

                <div class="dashboard__main">
                    <DashboardHeader on_menu=on_menu/>
                    <main class="dashboard__content">{children()}</main>
                </div>
            </div>
        </RequireAuth>
    }
}
