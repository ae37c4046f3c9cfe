//! Agent workspace: the signed-in user's own listings with create, edit,
//! and delete flows.

use leptos::prelude::*;

use crate::components::dashboard_shell::DashboardShell;
use crate::components::property_modal::PropertyModal;
use crate::net::types::{Property, PropertyForm, PropertyType};
use crate::state::notify::NotifyState;
use crate::util::format::price_label;

#[component]
pub fn MyPropertiesPage() -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();

    let properties = LocalResource::new(move || async move {
        match crate::net::property::fetch_mine().await {
            Ok(list) => list,
            Err(err) => {
                leptos::logging::warn!("my properties failed: {err}");
                notify.update(|n| { n.error("Error al cargar propiedades"); });
                Vec::new()
            }
        }
    });

    let modal_open = RwSignal::new(false);
    let selected = RwSignal::new(None::<Property>);

    let on_create = move |_| {
        selected.set(None);
        modal_open.set(true);
    };

    let on_cancel = Callback::new(move |()| modal_open.set(false));

    let on_save = Callback::new(move |form: PropertyForm| {
        #[cfg(feature = "hydrate")]
        {
            let editing = selected.get_untracked();
            let properties = properties.clone();
            leptos::task::spawn_local(async move {
                let result = match &editing {
                    Some(property) => crate::net::property::update(&property.id, &form).await,
                    None => crate::net::property::create(&form).await,
                };
                match result {
                    Ok(_) => {
                        let message = if editing.is_some() {
                            "Propiedad actualizada exitosamente"
                        } else {
                            "Propiedad creada exitosamente"
                        };
                        notify.update(|n| n.success(message));
                        modal_open.set(false);
                        selected.set(None);
                        properties.refetch();
                    }
                    Err(err) => {
                        notify.update(|n| {
                            n.error(err.user_message("Error al guardar la propiedad"))
                        });
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = form;
        }
    });

    let on_delete = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        {
            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message("¿Estás seguro de eliminar esta propiedad?").ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let properties = properties.clone();
            leptos::task::spawn_local(async move {
                match crate::net::property::delete(&id).await {
                    Ok(()) => {
                        notify.update(|n| n.success("Propiedad eliminada exitosamente"));
                        properties.refetch();
                    }
                    Err(err) => {
                        leptos::logging::warn!("delete failed: {err}");
                        notify.update(|n| n.error("Error al eliminar la propiedad"));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    view! {
        <DashboardShell>
            <div class="my-properties">
                <header class="my-properties__header">
                    <div>
                        <h1>"Mis Propiedades"</h1>
                        <p>"Administra tus propiedades publicadas"</p>
                    </div>
                    <button class="btn btn--primary" on:click=on_create>
                        "+ Nueva Propiedad"
                    </button>
                </header>

                <Suspense fallback=move || view! { <p>"Cargando propiedades..."</p> }>
                    {move || {
                        properties.get().map(|list| {
                            if list.is_empty() {
                                view! {
                                    <p class="my-properties__empty">
                                        "Aún no tienes propiedades publicadas."
                                    </p>
                                }
                                .into_any()
                            } else {
                                view! {
                                    <div class="my-properties__grid">
                                        {list
                                            .into_iter()
                                            .map(|property| {
                                                listing_card(property, selected, modal_open, on_delete)
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                .into_any()
                            }
                        })
                    }}
                </Suspense>

                <Show when=move || modal_open.get()>
                    {move || {
                        view! {
                            <PropertyModal
                                property=selected.get()
                                on_save=on_save
                                on_cancel=on_cancel
                            />
                        }
                    }}
                </Show>
            </div>
        </DashboardShell>
    }
}

fn listing_card(
    property: Property,
    selected: RwSignal<Option<Property>>,
    modal_open: RwSignal<bool>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let image = property
        .images
        .first()
        .cloned()
        .unwrap_or_else(|| "/placeholder-property.jpg".to_owned());
    let price = price_label(property.price, property.kind == PropertyType::Rent);
    let place = format!("{}, {}", property.location.city, property.location.state);
    let delete_id = property.id.clone();
    let edit_property = property.clone();

    view! {
        <div class="listing-card">
            <div class="listing-card__media">
                <img src=image alt=property.title.clone() loading="lazy"/>
                <span class="badge">{property.status.label()}</span>
            </div>
            <div class="listing-card__body">
                <h3>{property.title}</h3>
                <p class="listing-card__price">{price}</p>
                <p class="listing-card__place">{place}</p>
                <p class="listing-card__features">
                    {format!(
                        "{} rec. · {} baños · {} m²",
                        property.features.bedrooms,
                        property.features.bathrooms,
                        property.features.area
                    )}
                </p>
            </div>
            <div class="listing-card__actions">
                <button
                    class="btn"
                    on:click=move |_| {
                        selected.set(Some(edit_property.clone()));
                        modal_open.set(true);
                    }
                >
                    "Editar"
                </button>
                <button
                    class="btn btn--danger"
                    on:click=move |_| on_delete.run(delete_id.clone())
                >
                    "Eliminar"
                </button>
            </div>
        </div>
    }
}
