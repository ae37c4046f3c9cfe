use super::*;
use crate::net::types::{Coordinates, Features, Location, PropertyStatus, PropertyType};

fn valid_form() -> PropertyForm {
    PropertyForm {
        title: "Villa frente al mar".to_owned(),
        description: "Tres recámaras con vista directa a la bahía y alberca privada.".to_owned(),
        kind: PropertyType::Sale,
        status: PropertyStatus::Available,
        price: 4_500_000.0,
        location: Location {
            address: "Av. Costera 12".to_owned(),
            city: "Puerto Vallarta".to_owned(),
            state: "Jalisco".to_owned(),
            country: "México".to_owned(),
            postal_code: "48300".to_owned(),
            coordinates: Coordinates { lat: 20.6, lng: -105.2 },
        },
        features: Features {
            bedrooms: 3,
            bathrooms: 2,
            area: 220.5,
            parking_spots: Some(2),
            year_built: Some(2015),
        },
        images: vec!["https://img.example/p1.jpg".to_owned()],
        amenities: vec!["Alberca".to_owned()],
    }
}

// =============================================================
// Acceptance
// =============================================================

#[test]
fn valid_form_passes() {
    assert!(validate_property(&valid_form()).is_empty());
}

// =============================================================
// Text fields
// =============================================================

#[test]
fn short_title_is_rejected() {
    let mut form = valid_form();
    form.title = "Casa".to_owned();
    let errors = validate_property(&form);
    assert_eq!(errors.get("title"), Some("El título debe tener al menos 5 caracteres"));
}

#[test]
fn short_description_is_rejected() {
    let mut form = valid_form();
    form.description = "Muy corta".to_owned();
    assert_eq!(
        validate_property(&form).get("description"),
        Some("La descripción debe tener al menos 20 caracteres")
    );
}

#[test]
fn zero_price_is_rejected() {
    let mut form = valid_form();
    form.price = 0.0;
    assert_eq!(validate_property(&form).get("price"), Some("El precio debe ser mayor a 0"));
}

// =============================================================
// Location
// =============================================================

#[test]
fn missing_location_fields_use_nested_paths() {
    let mut form = valid_form();
    form.location.city = String::new();
    form.location.postal_code = "  ".to_owned();
    let errors = validate_property(&form);
    assert_eq!(errors.get("location.city"), Some("La ciudad es requerida"));
    assert_eq!(errors.get("location.postalCode"), Some("El código postal es requerido"));
}

#[test]
fn out_of_range_coordinates_are_rejected() {
    let mut form = valid_form();
    form.location.coordinates = Coordinates { lat: 91.0, lng: -181.0 };
    let errors = validate_property(&form);
    assert!(errors.get("location.coordinates.lat").is_some());
    assert!(errors.get("location.coordinates.lng").is_some());
}

// =============================================================
// Features
// =============================================================

#[test]
fn zero_bedrooms_and_bathrooms_are_rejected() {
    let mut form = valid_form();
    form.features.bedrooms = 0;
    form.features.bathrooms = 0;
    let errors = validate_property(&form);
    assert_eq!(errors.get("features.bedrooms"), Some("Debe tener al menos 1 habitación"));
    assert_eq!(errors.get("features.bathrooms"), Some("Debe tener al menos 1 baño"));
}

#[test]
fn ancient_year_built_is_rejected() {
    let mut form = valid_form();
    form.features.year_built = Some(1700);
    assert!(validate_property(&form).get("features.yearBuilt").is_some());
}

#[test]
fn absent_year_built_is_fine() {
    let mut form = valid_form();
    form.features.year_built = None;
    assert!(validate_property(&form).is_empty());
}

// =============================================================
// Images and amenities
// =============================================================

#[test]
fn empty_images_are_rejected() {
    let mut form = valid_form();
    form.images.clear();
    assert_eq!(
        validate_property(&form).get("images"),
        Some("Debe agregar al menos una imagen")
    );
}

#[test]
fn non_url_image_is_rejected() {
    let mut form = valid_form();
    form.images = vec!["no-es-url".to_owned()];
    assert_eq!(
        validate_property(&form).get("images"),
        Some("Las imágenes deben ser URLs válidas")
    );
}

#[test]
fn empty_amenities_are_rejected() {
    let mut form = valid_form();
    form.amenities.clear();
    assert_eq!(
        validate_property(&form).get("amenities"),
        Some("Debe agregar al menos una amenidad")
    );
}
