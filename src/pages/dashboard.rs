//! Dashboard home: portfolio stats and recent activity.
//!
//! Admins see platform-wide numbers, agents only their own listings.

use leptos::prelude::*;

use crate::components::dashboard_shell::DashboardShell;
use crate::net::types::{Property, PropertyFilter, PropertyStatus, Role};
use crate::state::notify::NotifyState;
use crate::state::session::SessionState;
use crate::util::format::format_price;

const RECENT_COUNT: usize = 5;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();

    // Reloads when the session resolves or changes role.
    let properties = LocalResource::new(move || {
        let role = session.get().user.map(|user| user.role);
        async move {
            let result = match role {
                Some(Role::Admin) => {
                    crate::net::property::fetch_all(&PropertyFilter::default()).await
                }
                Some(Role::Agent) => crate::net::property::fetch_mine().await,
                None => Ok(Vec::new()),
            };
            result.unwrap_or_else(|err| {
                leptos::logging::warn!("dashboard load failed: {err}");
                notify.update(|n| { n.error("Error al cargar propiedades"); });
                Vec::new()
            })
        }
    });

    let greeting = move || {
        session
            .get()
            .user
            .map(|user| format!("Bienvenido de vuelta, {}", user.name))
            .unwrap_or_default()
    };

    let scope_note = move || {
        let is_admin = session
            .get()
            .user
            .is_some_and(|user| user.role == Role::Admin);
        if is_admin { "En toda la plataforma" } else { "Tus propiedades" }
    };

    view! {
        <DashboardShell>
            <div class="dashboard-home">
                <header>
                    <h1>"Dashboard"</h1>
                    <p class="dashboard-home__greeting">{greeting}</p>
                </header>

                <Suspense fallback=move || view! { <p>"Cargando..."</p> }>
                    {move || {
                        properties.get().map(|list| {
                            let stats = Stats::from_properties(&list);
                            view! {
                                <div class="stats-grid">
                                    <StatCard
                                        title="Total Propiedades"
                                        value=stats.total
                                        note=scope_note()
                                    />
                                    <StatCard
                                        title="Disponibles"
                                        value=stats.available
                                        note="Listas para publicar"
                                    />
                                    <StatCard
                                        title="Vendidas"
                                        value=stats.sold
                                        note="Transacciones exitosas"
                                    />
                                    <StatCard
                                        title="Rentadas"
                                        value=stats.rented
                                        note="Con contratos activos"
                                    />
                                </div>

                                <section class="recent">
                                    <h2>"Actividad Reciente"</h2>
                                    {recent_view(list)}
                                </section>
                            }
                        })
                    }}
                </Suspense>
            </div>
        </DashboardShell>
    }
}

struct Stats {
    total: usize,
    available: usize,
    sold: usize,
    rented: usize,
}

impl Stats {
    fn from_properties(list: &[Property]) -> Self {
        let by_status =
            |status: PropertyStatus| list.iter().filter(|p| p.status == status).count();
        Self {
            total: list.len(),
            available: by_status(PropertyStatus::Available),
            sold: by_status(PropertyStatus::Sold),
            rented: by_status(PropertyStatus::Rented),
        }
    }
}

#[component]
fn StatCard(title: &'static str, value: usize, note: &'static str) -> impl IntoView {
    view! {
        <div class="stat-card">
            <p class="stat-card__title">{title}</p>
            <p class="stat-card__value">{value}</p>
            <p class="stat-card__note">{note}</p>
        </div>
    }
}

fn recent_view(list: Vec<Property>) -> impl IntoView {
    if list.is_empty() {
        view! { <p class="recent__empty">"No hay propiedades registradas"</p> }.into_any()
    } else {
        view! {
            <ul class="recent__list">
                {list
                    .into_iter()
                    .take(RECENT_COUNT)
                    .map(|property| {
                        let place = format!(
                            "{}, {}",
                            property.location.city, property.location.state
                        );
                        view! {
                            <li class="recent__item">
                                <div>
                                    <p class="recent__title">{property.title}</p>
                                    <p class="recent__place">{place}</p>
                                </div>
                                <div class="recent__right">
                                    <p class="recent__price">{format_price(property.price)}</p>
                                    <p class="recent__status">{property.status.label()}</p>
                                </div>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        }
        .into_any()
    }
}
