//! Search filter panel for the public catalog.

use leptos::prelude::*;

use crate::net::types::{PropertyFilter, PropertyType};

/// Filter sidebar. Collects values locally and emits a `PropertyFilter`
/// when applied; clearing resets every field and emits the empty filter.
#[component]
pub fn PropertyFilters(on_filter: Callback<PropertyFilter>) -> impl IntoView {
    let search = RwSignal::new(String::new());
    let kind = RwSignal::new("all".to_owned());
    let min_price = RwSignal::new(String::new());
    let max_price = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let bedrooms = RwSignal::new(String::new());

    let build = move || PropertyFilter {
        search: non_empty(&search.get_untracked()),
        kind: match kind.get_untracked().as_str() {
            "sale" => Some(PropertyType::Sale),
            "rent" => Some(PropertyType::Rent),
            _ => None,
        },
        min_price: min_price.get_untracked().trim().parse().ok(),
        max_price: max_price.get_untracked().trim().parse().ok(),
        city: non_empty(&city.get_untracked()),
        bedrooms: bedrooms.get_untracked().trim().parse().ok(),
    };

    let apply = move |_| on_filter.run(build());

    let clear = move |_| {
        search.set(String::new());
        kind.set("all".to_owned());
        min_price.set(String::new());
        max_price.set(String::new());
        city.set(String::new());
        bedrooms.set(String::new());
        on_filter.run(PropertyFilter::default());
    };

    view! {
        <div class="filters">
            <h2 class="filters__title">"Filtros de Búsqueda"</h2>

            <label class="filters__field">
                "Buscar"
                <input
                    type="text"
                    placeholder="Palabra clave..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </label>

            <label class="filters__field">
                "Tipo"
                <select
                    prop:value=move || kind.get()
                    on:change=move |ev| kind.set(event_target_value(&ev))
                >
                    <option value="all">"Todos"</option>
                    <option value="sale">"Venta"</option>
                    <option value="rent">"Renta"</option>
                </select>
            </label>

            <div class="filters__row">
                <label class="filters__field">
                    "Precio Mín."
                    <input
                        type="number"
                        placeholder="0"
                        prop:value=move || min_price.get()
                        on:input=move |ev| min_price.set(event_target_value(&ev))
                    />
                </label>
                <label class="filters__field">
                    "Precio Máx."
                    <input
                        type="number"
                        placeholder="Sin límite"
                        prop:value=move || max_price.get()
                        on:input=move |ev| max_price.set(event_target_value(&ev))
                    />
                </label>
            </div>

            <label class="filters__field">
                "Ciudad"
                <input
                    type="text"
                    placeholder="Puerto Vallarta..."
                    prop:value=move || city.get()
                    on:input=move |ev| city.set(event_target_value(&ev))
                />
            </label>

            <label class="filters__field">
                "Habitaciones (mín.)"
                <input
                    type="number"
                    min="0"
                    prop:value=move || bedrooms.get()
                    on:input=move |ev| bedrooms.set(event_target_value(&ev))
                />
            </label>

            <div class="filters__actions">
                <button class="btn btn--primary" on:click=apply>"Aplicar"</button>
                <button class="btn" on:click=clear>"Limpiar"</button>
            </div>
        </div>
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}
