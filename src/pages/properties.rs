//! Public catalog: filter sidebar plus result grid.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::property_card::PropertyCard;
use crate::components::property_filters::PropertyFilters;
use crate::net::types::{Property, PropertyFilter};
use crate::state::notify::NotifyState;

#[component]
pub fn PropertiesPage() -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();
    let filter = RwSignal::new(PropertyFilter::default());

    // Refetches whenever the applied filter changes.
    let properties = LocalResource::new(move || {
        let filter = filter.get();
        async move {
            match crate::net::property::fetch_all(&filter).await {
                Ok(list) => list,
                Err(err) => {
                    leptos::logging::warn!("property list failed: {err}");
                    notify.update(|n| { n.error("Error al cargar propiedades"); });
                    Vec::new()
                }
            }
        }
    });

    let on_filter = Callback::new(move |values: PropertyFilter| filter.set(values));

    view! {
        <div class="page">
            <Navbar/>

            <main class="catalog">
                <header class="catalog__header">
                    <h1>"Propiedades Disponibles"</h1>
                    <p>"Explora nuestra selección de propiedades en zonas costeras"</p>
                </header>

                <div class="catalog__layout">
                    <aside class="catalog__filters">
                        <PropertyFilters on_filter=on_filter/>
                    </aside>

                    <div class="catalog__results">
                        <Suspense fallback=move || {
                            view! { <p class="catalog__loading">"Cargando propiedades..."</p> }
                        }>
                            {move || {
                                properties.get().map(|list| results_view(list))
                            }}
                        </Suspense>
                    </div>
                </div>
            </main>

            <Footer/>
        </div>
    }
}

fn results_view(list: Vec<Property>) -> impl IntoView {
    if list.is_empty() {
        view! {
            <p class="catalog__empty">
                "No se encontraron propiedades con esos filtros."
            </p>
        }
        .into_any()
    } else {
        let count = list.len();
        let count_text = if count == 1 {
            "1 propiedad encontrada".to_owned()
        } else {
            format!("{count} propiedades encontradas")
        };
        view! {
            <div>
                <p class="catalog__count">{count_text}</p>
                <div class="catalog__grid">
                    {list
                        .into_iter()
                        .map(|property| view! { <PropertyCard property=property/> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        }
        .into_any()
    }
}
