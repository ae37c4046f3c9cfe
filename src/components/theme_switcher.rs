//! Dark mode toggle button.

use leptos::prelude::*;

use crate::util::dark_mode;

/// Reads the stored preference on mount, applies it, and toggles on click.
#[component]
pub fn ThemeSwitcher() -> impl IntoView {
    let dark = RwSignal::new(false);

    // Resolve the stored/system preference once the browser is available.
    Effect::new(move || {
        let enabled = dark_mode::read_preference();
        dark_mode::apply(enabled);
        dark.set(enabled);
    });

    let on_toggle = move |_| {
        let next = dark_mode::toggle(dark.get_untracked());
        dark.set(next);
    };

    view! {
        <button
            class="theme-switcher"
            title="Cambiar tema"
            aria-label="Cambiar tema"
            on:click=on_toggle
        >
            {move || if dark.get() { "☀" } else { "☾" }}
        </button>
    }
}
