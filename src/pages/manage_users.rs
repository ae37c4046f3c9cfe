//! Admin user directory: searchable list plus create, edit, and delete
//! flows against the users endpoint.

use leptos::prelude::*;

use crate::components::dashboard_shell::DashboardShell;
use crate::net::types::{CreateUserInput, ManagedUser, Role, UpdateUserInput};
use crate::net::user::UserQuery;
use crate::state::notify::NotifyState;

const PAGE_LIMIT: u32 = 50;

#[component]
pub fn ManageUsersPage() -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();

    let search = RwSignal::new(String::new());

    // Search is applied server-side; the resource refetches when it
    // changes.
    let users = LocalResource::new(move || {
        let term = search.get();
        async move {
            let query = UserQuery {
                page: Some(1),
                limit: Some(PAGE_LIMIT),
                search: if term.trim().is_empty() {
                    None
                } else {
                    Some(term.trim().to_owned())
                },
            };
            match crate::net::user::fetch_all(&query).await {
                Ok(page) => page.users,
                Err(err) => {
                    leptos::logging::warn!("user list failed: {err}");
                    notify.update(|n| { n.error("Error al cargar usuarios"); });
                    Vec::new()
                }
            }
        }
    });

    let dialog_open = RwSignal::new(false);
    let selected = RwSignal::new(None::<ManagedUser>);

    let on_create = move |_| {
        selected.set(None);
        dialog_open.set(true);
    };

    let on_cancel = Callback::new(move |()| dialog_open.set(false));

    let on_save = Callback::new(move |input: UserDialogInput| {
        #[cfg(feature = "hydrate")]
        {
            let editing = selected.get_untracked();
            let users = users.clone();
            leptos::task::spawn_local(async move {
                let result = match &editing {
                    Some(user) => {
                        let update = UpdateUserInput {
                            email: Some(input.email),
                            password: if input.password.is_empty() {
                                None
                            } else {
                                Some(input.password)
                            },
                            name: Some(input.name),
                            role: Some(input.role),
                        };
                        crate::net::user::update(&user.id, &update).await.map(|_| ())
                    }
                    None => {
                        let create = CreateUserInput {
                            email: input.email,
                            password: input.password,
                            name: input.name,
                            role: input.role,
                        };
                        crate::net::user::create(&create).await.map(|_| ())
                    }
                };
                match result {
                    Ok(()) => {
                        let message = if editing.is_some() {
                            "Usuario actualizado exitosamente"
                        } else {
                            "Usuario creado exitosamente"
                        };
                        notify.update(|n| n.success(message));
                        dialog_open.set(false);
                        selected.set(None);
                        users.refetch();
                    }
                    Err(err) => {
                        notify.update(|n| n.error(err.user_message("Error al guardar el usuario")));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = input;
        }
    });

    let on_delete = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        {
            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message("¿Estás seguro de eliminar este usuario?").ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let users = users.clone();
            leptos::task::spawn_local(async move {
                match crate::net::user::delete(&id).await {
                    Ok(_) => {
                        notify.update(|n| n.success("Usuario eliminado exitosamente"));
                        users.refetch();
                    }
                    Err(err) => {
                        leptos::logging::warn!("user delete failed: {err}");
                        notify.update(|n| n.error("Error al eliminar el usuario"));
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
                        <h1>"Gestión de Usuarios"</h1>
                        <p>"Administra los usuarios de la plataforma"</p>
                    </div>
                    <button class="btn btn--primary" on:click=on_create>
                        "+ Nuevo Usuario"
                    </button>
                </header>

                <input
                    class="manage__search"
                    type="text"
                    placeholder="Buscar por nombre o email..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />

                <Suspense fallback=move || view! { <p>"Cargando usuarios..."</p> }>
                    {move || {
                        users
                            .get()
                            .map(|list| users_table(list, selected, dialog_open, on_delete))
                    }}
                </Suspense>

                <Show when=move || dialog_open.get()>
                    {move || {
                        view! {
                            <UserDialog
                                user=selected.get()
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

fn users_table(
    list: Vec<ManagedUser>,
    selected: RwSignal<Option<ManagedUser>>,
    dialog_open: RwSignal<bool>,
    on_delete: Callback<String>,
) -> impl IntoView {
    if list.is_empty() {
        return view! { <p class="manage__empty">"No se encontraron usuarios."</p> }.into_any();
    }

    view! {
        <table class="manage__table">
            <thead>
                <tr>
                    <th>"Nombre"</th>
                    <th>"Email"</th>
                    <th>"Rol"</th>
                    <th>"Propiedades"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {list
                    .into_iter()
                    .map(|user| {
                        let delete_id = user.id.clone();
                        let edit_user = user.clone();
                        let listing_count =
                            user.count.as_ref().map_or(0, |count| count.properties);
                        view! {
                            <tr>
                                <td>{user.name}</td>
                                <td>{user.email}</td>
                                <td>{user.role.label()}</td>
                                <td>{listing_count}</td>
                                <td class="manage__actions">
                                    <button
                                        class="btn btn--sm"
                                        on:click=move |_| {
                                            selected.set(Some(edit_user.clone()));
                                            dialog_open.set(true);
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

/// Values collected by the dialog; the page decides between the create
/// and update payloads.
#[derive(Clone, Debug)]
struct UserDialogInput {
    name: String,
    email: String,
    password: String,
    role: Role,
}

/// Create/edit dialog for a directory user. When editing, an empty
/// password leaves the current one unchanged.
#[component]
fn UserDialog(
    #[prop(optional_no_strip)] user: Option<ManagedUser>,
    on_save: Callback<UserDialogInput>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_edit = user.is_some();

    let name = RwSignal::new(user.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let email = RwSignal::new(user.as_ref().map(|u| u.email.clone()).unwrap_or_default());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(
        match user.as_ref().map_or(Role::Agent, |u| u.role) {
            Role::Admin => "admin",
            Role::Agent => "agent",
        }
        .to_owned(),
    );
    let error = RwSignal::new(None::<&'static str>);

    let submit = Callback::new(move |()| {
        let input = UserDialogInput {
            name: name.get_untracked().trim().to_owned(),
            email: email.get_untracked().trim().to_owned(),
            password: password.get_untracked(),
            role: if role.get_untracked() == "admin" {
                Role::Admin
            } else {
                Role::Agent
            },
        };

        if input.name.is_empty() || input.email.is_empty() {
            error.set(Some("Nombre y email son requeridos"));
            return;
        }
        if !is_edit && input.password.len() < 6 {
            error.set(Some("La contraseña debe tener al menos 6 caracteres"));
            return;
        }
        error.set(None);
        on_save.run(input);
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{if is_edit { "Editar Usuario" } else { "Nuevo Usuario" }}</h2>

                <label class="dialog__label">
                    "Nombre"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>

                <label class="dialog__label">
                    "Email"
                    <input
                        class="dialog__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>

                <label class="dialog__label">
                    {if is_edit { "Contraseña (dejar vacía para no cambiarla)" } else { "Contraseña" }}
                    <input
                        class="dialog__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>

                <label class="dialog__label">
                    "Rol"
                    <select
                        prop:value=move || role.get()
                        on:change=move |ev| role.set(event_target_value(&ev))
                    >
                        <option value="agent">"Agente"</option>
                        <option value="admin">"Administrador"</option>
                    </select>
                </label>

                {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancelar"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        {if is_edit { "Guardar Cambios" } else { "Crear Usuario" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
