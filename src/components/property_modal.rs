//! Create/edit dialog for a property listing.
//!
//! The modal owns the form state and validation; the parent page owns the
//! API call. Validation failures render next to their fields and never
//! leave this component.

use leptos::prelude::*;

use crate::net::types::{
    Coordinates, Features, Location, Property, PropertyForm, PropertyStatus, PropertyType,
};
use crate::validate::FieldErrors;
use crate::validate::property::validate_property;

/// Split a textarea with one image URL per line into the payload list.
fn parse_images(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Split a comma-separated amenity list into the payload list.
fn parse_amenities(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}

#[component]
pub fn PropertyModal(
    /// Listing being edited; `None` creates a new one.
    #[prop(optional_no_strip)]
    property: Option<Property>,
    on_save: Callback<PropertyForm>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_edit = property.is_some();
    let initial = property
        .as_ref()
        .map(PropertyForm::from_property)
        .unwrap_or_default();

    let title = RwSignal::new(initial.title.clone());
    let description = RwSignal::new(initial.description.clone());
    let kind = RwSignal::new(
        match initial.kind {
            PropertyType::Sale => "sale",
            PropertyType::Rent => "rent",
        }
        .to_owned(),
    );
    let status = RwSignal::new(
        match initial.status {
            PropertyStatus::Available => "available",
            PropertyStatus::Sold => "sold",
            PropertyStatus::Rented => "rented",
        }
        .to_owned(),
    );
    let price = RwSignal::new(number_field(initial.price));
    let address = RwSignal::new(initial.location.address.clone());
    let city = RwSignal::new(initial.location.city.clone());
    let state_name = RwSignal::new(initial.location.state.clone());
    let country = RwSignal::new(initial.location.country.clone());
    let postal_code = RwSignal::new(initial.location.postal_code.clone());
    let lat = RwSignal::new(initial.location.coordinates.lat.to_string());
    let lng = RwSignal::new(initial.location.coordinates.lng.to_string());
    let bedrooms = RwSignal::new(number_field(f64::from(initial.features.bedrooms)));
    let bathrooms = RwSignal::new(number_field(f64::from(initial.features.bathrooms)));
    let area = RwSignal::new(initial.features.area.to_string());
    let parking = RwSignal::new(
        initial
            .features
            .parking_spots
            .map(|v| v.to_string())
            .unwrap_or_default(),
    );
    let year_built = RwSignal::new(
        initial
            .features
            .year_built
            .map(|v| v.to_string())
            .unwrap_or_default(),
    );
    let images = RwSignal::new(initial.images.join("\n"));
    let amenities = RwSignal::new(initial.amenities.join(", "));

    let errors = RwSignal::new(FieldErrors::default());

    let build_form = move || PropertyForm {
        title: title.get_untracked().trim().to_owned(),
        description: description.get_untracked().trim().to_owned(),
        kind: if kind.get_untracked() == "rent" {
            PropertyType::Rent
        } else {
            PropertyType::Sale
        },
        status: match status.get_untracked().as_str() {
            "sold" => PropertyStatus::Sold,
            "rented" => PropertyStatus::Rented,
            _ => PropertyStatus::Available,
        },
        price: parse_number(&price.get_untracked()),
        location: Location {
            address: address.get_untracked().trim().to_owned(),
            city: city.get_untracked().trim().to_owned(),
            state: state_name.get_untracked().trim().to_owned(),
            country: country.get_untracked().trim().to_owned(),
            postal_code: postal_code.get_untracked().trim().to_owned(),
            coordinates: Coordinates {
                lat: parse_number(&lat.get_untracked()),
                lng: parse_number(&lng.get_untracked()),
            },
        },
        features: Features {
            bedrooms: parse_count(&bedrooms.get_untracked()),
            bathrooms: parse_count(&bathrooms.get_untracked()),
            area: parse_number(&area.get_untracked()),
            parking_spots: parking.get_untracked().trim().parse().ok(),
            year_built: year_built.get_untracked().trim().parse().ok(),
        },
        images: parse_images(&images.get_untracked()),
        amenities: parse_amenities(&amenities.get_untracked()),
    };

    let submit = Callback::new(move |()| {
        let form = build_form();
        let result = validate_property(&form);
        if result.is_empty() {
            errors.set(FieldErrors::default());
            on_save.run(form);
        } else {
            errors.set(result);
        }
    });

    let error_for = move |field: &'static str| {
        move || {
            errors.with(|e| {
                e.get(field)
                    .map(|message| view! { <p class="form-error">{message.to_owned()}</p> })
            })
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>{if is_edit { "Editar Propiedad" } else { "Nueva Propiedad" }}</h2>

                <label class="dialog__label">
                    "Título *"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                {error_for("title")}

                <label class="dialog__label">
                    "Descripción *"
                    <textarea
                        class="dialog__input"
                        rows="4"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                {error_for("description")}

                <div class="dialog__row">
                    <label class="dialog__label">
                        "Tipo *"
                        <select
                            prop:value=move || kind.get()
                            on:change=move |ev| kind.set(event_target_value(&ev))
                        >
                            <option value="sale">"Venta"</option>
                            <option value="rent">"Renta"</option>
                        </select>
                    </label>
                    <label class="dialog__label">
                        "Estado *"
                        <select
                            prop:value=move || status.get()
                            on:change=move |ev| status.set(event_target_value(&ev))
                        >
                            <option value="available">"Disponible"</option>
                            <option value="sold">"Vendida"</option>
                            <option value="rented">"Rentada"</option>
                        </select>
                    </label>
                    <label class="dialog__label">
                        "Precio *"
                        <input
                            class="dialog__input"
                            type="number"
                            min="0"
                            prop:value=move || price.get()
                            on:input=move |ev| price.set(event_target_value(&ev))
                        />
                    </label>
                </div>
                {error_for("price")}

                <label class="dialog__label">
                    "Dirección *"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || address.get()
                        on:input=move |ev| address.set(event_target_value(&ev))
                    />
                </label>
                {error_for("location.address")}

                <div class="dialog__row">
                    <label class="dialog__label">
                        "Ciudad *"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || city.get()
                            on:input=move |ev| city.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Estado *"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || state_name.get()
                            on:input=move |ev| state_name.set(event_target_value(&ev))
                        />
                    </label>
                </div>
                {error_for("location.city")}
                {error_for("location.state")}

                <div class="dialog__row">
                    <label class="dialog__label">
                        "País *"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || country.get()
                            on:input=move |ev| country.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Código Postal *"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || postal_code.get()
                            on:input=move |ev| postal_code.set(event_target_value(&ev))
                        />
                    </label>
                </div>
                {error_for("location.country")}
                {error_for("location.postalCode")}

                <div class="dialog__row">
                    <label class="dialog__label">
                        "Latitud"
                        <input
                            class="dialog__input"
                            type="number"
                            step="any"
                            prop:value=move || lat.get()
                            on:input=move |ev| lat.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Longitud"
                        <input
                            class="dialog__input"
                            type="number"
                            step="any"
                            prop:value=move || lng.get()
                            on:input=move |ev| lng.set(event_target_value(&ev))
                        />
                    </label>
                </div>
                {error_for("location.coordinates.lat")}
                {error_for("location.coordinates.lng")}

                <div class="dialog__row">
                    <label class="dialog__label">
                        "Habitaciones *"
                        <input
                            class="dialog__input"
                            type="number"
                            min="0"
                            prop:value=move || bedrooms.get()
                            on:input=move |ev| bedrooms.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Baños *"
                        <input
                            class="dialog__input"
                            type="number"
                            min="0"
                            prop:value=move || bathrooms.get()
                            on:input=move |ev| bathrooms.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Área (m²) *"
                        <input
                            class="dialog__input"
                            type="number"
                            min="0"
                            prop:value=move || area.get()
                            on:input=move |ev| area.set(event_target_value(&ev))
                        />
                    </label>
                </div>
                {error_for("features.bedrooms")}
                {error_for("features.bathrooms")}
                {error_for("features.area")}

                <div class="dialog__row">
                    <label class="dialog__label">
                        "Estacionamientos"
                        <input
                            class="dialog__input"
                            type="number"
                            min="0"
                            prop:value=move || parking.get()
                            on:input=move |ev| parking.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Año de construcción"
                        <input
                            class="dialog__input"
                            type="number"
                            prop:value=move || year_built.get()
                            on:input=move |ev| year_built.set(event_target_value(&ev))
                        />
                    </label>
                </div>
                {error_for("features.yearBuilt")}

                <label class="dialog__label">
                    "Imágenes (una URL por línea) *"
                    <textarea
                        class="dialog__input"
                        rows="3"
                        prop:value=move || images.get()
                        on:input=move |ev| images.set(event_target_value(&ev))
                    ></textarea>
                </label>
                {error_for("images")}

                <label class="dialog__label">
                    "Amenidades (separadas por coma) *"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="Alberca, Gimnasio, Seguridad"
                        prop:value=move || amenities.get()
                        on:input=move |ev| amenities.set(event_target_value(&ev))
                    />
                </label>
                {error_for("amenities")}

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancelar"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        {if is_edit { "Guardar Cambios" } else { "Crear Propiedad" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

fn number_field(value: f64) -> String {
    if value == 0.0 { String::new() } else { value.to_string() }
}

fn parse_number(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

fn parse_count(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}
