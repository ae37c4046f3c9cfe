//! Top bar of the dashboard content area.

use leptos::prelude::*;

use crate::components::theme_switcher::ThemeSwitcher;

/// Sticky header with the mobile menu button and theme toggle.
#[component]
pub fn DashboardHeader(on_menu: Callback<()>) -> impl IntoView {
    view! {
        <header class="dashboard-header">
            <button
                class="dashboard-header__menu"
                aria-label="Abrir menú"
                on:click=move |_| on_menu.run(())
            >
                "☰"
            </button>
            <div class="dashboard-header__spacer"></div>
            <ThemeSwitcher/>
        </header>
    }
}
