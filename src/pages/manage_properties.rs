//! Admin management of every listing on the platform: searchable table
//! with create, edit, and delete flows.

use leptos::prelude::*;

use crate::components::dashboard_shell::DashboardShell;
use crate::components::property_modal::PropertyModal;
use crate::net::types::{Property, PropertyFilter, PropertyForm, Role};
use crate::state::notify::NotifyState;
use crate::util::format::format_price;

/// Case-insensitive match on title or city.
fn matches_search(property: &Property, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    property.title.to_lowercase().contains(&term)
        || property.location.city.to_lowercase().contains(&term)
}

#[component]
pub fn ManagePropertiesPage() -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();

    let properties = LocalResource::new(move || async move {
        match crate::net::property::fetch_all(&PropertyFilter::default()).await {
            Ok(list) => list,
            Err(err) => {
                leptos::logging::warn!("property list failed: {err}");
                notify.update(|n| { n.error("Error al cargar propiedades"); });
                Vec::new()
            }
        }
    });

    let search = RwSignal::new(String::new());
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
        <DashboardShell allowed=&[Role::Admin]>
            <div class="manage">
                <header class="manage__header">
                    <div>
                        <h1>"Gestión de Propiedades"</h1>
                        <p>"Administra todas las propiedades de la plataforma"</p>
                    </div>
                    <button class="btn btn--primary" on:click=on_create>
                        "+ Nueva Propiedad"
                    </button>
                </header>

                <input
                    class="manage__search"
                    type="text"
                    placeholder="Buscar por título o ciudad..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />

                <Suspense fallback=move || view! { <p>"Cargando propiedades..."</p> }>
                    {move || {
                        properties.get().map(|list| {
                            let term = search.get();
                            let filtered: Vec<Property> = list
                                .into_iter()
                                .filter(|p| matches_search(p, term.trim()))
                                .collect();
                            table_view(filtered, selected, modal_open, on_delete)
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

fn table_view(
    list: Vec<Property>,
    selected: RwSignal<Option<Property>>,
    modal_open: RwSignal<bool>,
    on_delete: Callback<String>,
) -> impl IntoView {
    if list.is_empty() {
        return view! { <p class="manage__empty">"No se encontraron propiedades."</p> }
            .into_any();
    }

    view! {
        <table class="manage__table">
            <thead>
                <tr>
                    <th>"Título"</th>
                    <th>"Ciudad"</th>
                    <th>"Tipo"</th>
                    <th>"Estado"</th>
                    <th>"Precio"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {list
                    .into_iter()
                    .map(|property| {
                        let delete_id = property.id.clone();
                        let edit_property = property.clone();
                        view! {
                            <tr>
                                <td>{property.title}</td>
                                <td>{property.location.city}</td>
                                <td>{property.kind.label()}</td>
                                <td>{property.status.label()}</td>
                                <td>{format_price(property.price)}</td>
                                <td class="manage__actions">
                                    <button
                                        class="btn btn--sm"
                                        on:click=move |_| {
                                            selected.set(Some(edit_property.clone()));
                                            modal_open.set(true);
                                        }
                                    >
                                        "Editar"
                                    </button>
                                    <button
                                        class="btn btn--sm btn--danger"
                                        on:click=move |_| on_delete.run(delete_id.clone())
                                    >
                                        "Eliminar"
                                    </button>
                                </td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
    .into_any()
}
