//! Public landing page: hero, value props, and a featured-listings strip.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::property_card::PropertyCard;
use crate::net::types::{Property, PropertyFilter};

const FEATURED_COUNT: usize = 3;

#[component]
pub fn HomePage() -> impl IntoView {
    // Featured strip: newest available listings; failures degrade to an
    // empty strip without a toast on the landing page.
    let featured = LocalResource::new(|| async {
        crate::net::property::fetch_all(&PropertyFilter::default())
            .await
            .map(|list| list.into_iter().take(FEATURED_COUNT).collect::<Vec<Property>>())
            .unwrap_or_default()
    });

    view! {
        <div class="page">
            <Navbar/>

            <section class="hero">
                <div class="hero__inner">
                    <span class="hero__eyebrow">"Tu nueva vida junto al mar comienza aquí"</span>
                    <h1 class="hero__title">
                        "Encuentra tu " <span class="hero__accent">"Paraíso Costero"</span>
                    </h1>
                    <p class="hero__subtitle">
                        "Descubre propiedades exclusivas en las mejores zonas costeras de \
                         México. Vive el estilo de vida que siempre soñaste."
                    </p>
                    <div class="hero__actions">
                        <a href="/propiedades" class="btn btn--primary btn--lg">
                            "Ver Propiedades"
                        </a>
                        <a href="/contacto" class="btn btn--outline btn--lg">
                            "Contáctanos"
                        </a>
                    </div>
                </div>
            </section>

            <section class="features">
                <h2 class="features__title">"¿Por qué elegir CostaSuite?"</h2>
                <p class="features__subtitle">
                    "Somos tu aliado de confianza para encontrar la propiedad perfecta"
                </p>
                <div class="features__grid">
                    <div class="feature-card">
                        <h3>"Propiedades Exclusivas"</h3>
                        <p>"Selección curada de las mejores propiedades en zonas costeras."</p>
                    </div>
                    <div class="feature-card">
                        <h3>"Asesoría Confiable"</h3>
                        <p>"Agentes certificados que te acompañan en cada paso."</p>
                    </div>
                    <div class="feature-card">
                        <h3>"Proceso Transparente"</h3>
                        <p>"Información completa y precios claros, sin sorpresas."</p>
                    </div>
                </div>
            </section>

            <section class="featured">
                <h2 class="featured__title">"Propiedades Destacadas"</h2>
                <Suspense fallback=|| ()>
                    {move || {
                        featured.get().map(|list| {
                            view! {
                                <div class="featured__grid">
                                    {list
                                        .into_iter()
                                        .map(|property| view! { <PropertyCard property=property/> })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                        })
                    }}
                </Suspense>
                <a href="/propiedades" class="btn btn--ghost featured__more">
                    "Ver todas las propiedades"
                </a>
            </section>

            <Footer/>
        </div>
    }
}
