//! Card for a property in the public catalog grid.

use leptos::prelude::*;

use crate::net::types::{Property, PropertyStatus, PropertyType};
use crate::util::format::price_label;

/// Clickable card linking to the listing's detail page.
#[component]
pub fn PropertyCard(property: Property) -> impl IntoView {
    let href = format!("/propiedades/{}", property.id);
    let image = property
        .images
        .first()
        .cloned()
        .unwrap_or_else(|| "/placeholder-property.jpg".to_owned());
    let price = price_label(property.price, property.kind == PropertyType::Rent);
    let place = format!("{}, {}", property.location.city, property.location.state);
    let status_class = match property.status {
        PropertyStatus::Available => "badge badge--available",
        PropertyStatus::Sold => "badge badge--sold",
        PropertyStatus::Rented => "badge badge--rented",
    };

    view! {
        <a class="property-card" href=href>
            <div class="property-card__media">
                <img src=image alt=property.title.clone() loading="lazy"/>
                <div class="property-card__badges">
                    <span class="badge">{property.kind.label()}</span>
                    <span class=status_class>{property.status.label()}</span>
                </div>
            </div>

            <div class="property-card__body">
                <h3 class="property-card__title">{property.title}</h3>
                <p class="property-card__price">{price}</p>
                <p class="property-card__place">{place}</p>
                <p class="property-card__description">{property.description}</p>
            </div>

            <div class="property-card__features">
                <span>{format!("{} rec.", property.features.bedrooms)}</span>
                <span>{format!("{} baños", property.features.bathrooms)}</span>
                <span>{format!("{} m²", property.features.area)}</span>
            </div>
        </a>
    }
}
