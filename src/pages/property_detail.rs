//! Detail page for one listing: gallery, facts, amenities, and the
//! listing agent's contact card.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::net::types::{Property, PropertyType};
use crate::state::notify::NotifyState;
use crate::util::format::price_label;

#[component]
pub fn PropertyDetailPage() -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();
    let params = use_params_map();

    let property = LocalResource::new(move || {
        let id = params.get().get("id").unwrap_or_default();
        async move {
            if id.is_empty() {
                return None;
            }
            match crate::net::property::fetch_by_id(&id).await {
                Ok(property) => Some(property),
                Err(err) => {
                    leptos::logging::warn!("property {id} failed: {err}");
                    notify.update(|n| { n.error("Error al cargar la propiedad"); });
                    None
                }
            }
        }
    });

    view! {
        <div class="page">
            <Navbar/>

            <main class="detail">
                <a href="/propiedades" class="detail__back">"← Volver a propiedades"</a>

                <Suspense fallback=move || {
                    view! { <p class="detail__loading">"Cargando propiedad..."</p> }
                }>
                    {move || {
                        property.get().map(|loaded| match loaded {
                            Some(property) => detail_view(property).into_any(),
                            None => {
                                view! {
                                    <p class="detail__missing">"Propiedad no encontrada."</p>
                                }
                                .into_any()
                            }
                        })
                    }}
                </Suspense>
            </main>

            <Footer/>
        </div>
    }
}

fn detail_view(property: Property) -> impl IntoView {
    let selected = RwSignal::new(0usize);
    let images = property.images.clone();
    let main_image = move || {
        images
            .get(selected.get())
            .cloned()
            .unwrap_or_else(|| "/placeholder-property.jpg".to_owned())
    };

    let price = price_label(property.price, property.kind == PropertyType::Rent);
    let place = format!(
        "{}, {}, {}, {}",
        property.location.address,
        property.location.city,
        property.location.state,
        property.location.country
    );
    let thumbs = property.images.clone();

    view! {
        <article class="detail__body">
            <div class="detail__gallery">
                <img class="detail__main-image" src=main_image alt=property.title.clone()/>
                <div class="detail__thumbs">
                    {thumbs
                        .into_iter()
                        .enumerate()
                        .map(|(index, url)| {
                            view! {
                                <button
                                    class=move || {
                                        if selected.get() == index {
                                            "detail__thumb detail__thumb--active"
                                        } else {
                                            "detail__thumb"
                                        }
                                    }
                                    on:click=move |_| selected.set(index)
                                >
                                    <img src=url alt=""/>
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>

            <div class="detail__summary">
                <div class="detail__badges">
                    <span class="badge">{property.kind.label()}</span>
                    <span class="badge">{property.status.label()}</span>
                </div>
                <h1 class="detail__title">{property.title}</h1>
                <p class="detail__price">{price}</p>
                <p class="detail__place">{place}</p>

                <div class="detail__facts">
                    <span>{format!("{} habitaciones", property.features.bedrooms)}</span>
                    <span>{format!("{} baños", property.features.bathrooms)}</span>
                    <span>{format!("{} m²", property.features.area)}</span>
                    {property
                        .features
                        .parking_spots
                        .map(|spots| view! { <span>{format!("{spots} estacionamientos")}</span> })}
                    {property
                        .features
                        .year_built
                        .map(|year| view! { <span>{format!("Construida en {year}")}</span> })}
                </div>

                <section class="detail__description">
                    <h2>"Descripción"</h2>
                    <p>{property.description}</p>
                </section>

                <section class="detail__amenities">
                    <h2>"Amenidades"</h2>
                    <ul>
                        {property
                            .amenities
                            .into_iter()
                            .map(|amenity| view! { <li>{amenity}</li> })
                            .collect::<Vec<_>>()}
                    </ul>
                </section>

                {property.owner.map(|owner| {
                    view! {
                        <section class="detail__agent">
                            <h2>"Contacta al agente"</h2>
                            <p class="detail__agent-name">{owner.name}</p>
                            <a class="detail__agent-email" href=format!("mailto:{}", owner.email)>
                                {owner.email.clone()}
                            </a>
                        </section>
                    }
                })}
            </div>
        </article>
    }
}
