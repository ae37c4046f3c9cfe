#[cfg(test)]
#[path = "property_test.rs"]
mod property_test;

use crate::net::types::PropertyForm;
use crate::validate::FieldErrors;

const MIN_YEAR_BUILT: u16 = 1800;

/// Check a listing form before it goes to the API. Field paths mirror the
/// nested payload (`location.city`, `features.area`).
#[must_use]
pub fn validate_property(form: &PropertyForm) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if form.title.trim().chars().count() < 5 {
        errors.insert("title", "El título debe tener al menos 5 caracteres");
    }
    if form.description.trim().chars().count() < 20 {
        errors.insert("description", "La descripción debe tener al menos 20 caracteres");
    }
    if form.price < 1.0 {
        errors.insert("price", "El precio debe ser mayor a 0");
    }

    if form.location.address.trim().is_empty() {
        errors.insert("location.address", "La dirección es requerida");
    }
    if form.location.city.trim().is_empty() {
        errors.insert("location.city", "La ciudad es requerida");
    }
    if form.location.state.trim().is_empty() {
        errors.insert("location.state", "El estado es requerido");
    }
    if form.location.country.trim().is_empty() {
        errors.insert("location.country", "El país es requerido");
    }
    if form.location.postal_code.trim().is_empty() {
        errors.insert("location.postalCode", "El código postal es requerido");
    }
    if !(-90.0..=90.0).contains(&form.location.coordinates.lat) {
        errors.insert("location.coordinates.lat", "Latitud fuera de rango");
    }
    if !(-180.0..=180.0).contains(&form.location.coordinates.lng) {
        errors.insert("location.coordinates.lng", "Longitud fuera de rango");
    }

    if form.features.bedrooms < 1 {
        errors.insert("features.bedrooms", "Debe tener al menos 1 habitación");
    }
    if form.features.bathrooms < 1 {
        errors.insert("features.bathrooms", "Debe tener al menos 1 baño");
    }
    if form.features.area < 1.0 {
        errors.insert("features.area", "El área debe ser mayor a 0");
    }
    if let Some(year) = form.features.year_built {
        if !(MIN_YEAR_BUILT..=current_year()).contains(&year) {
            errors.insert("features.yearBuilt", "Año de construcción inválido");
        }
    }

    if form.images.is_empty() {
        errors.insert("images", "Debe agregar al menos una imagen");
    } else if !form.images.iter().all(|url| is_http_url(url)) {
        errors.insert("images", "Las imágenes deben ser URLs válidas");
    }
    if form.amenities.is_empty() {
        errors.insert("amenities", "Debe agregar al menos una amenidad");
    }

    errors
}

fn is_http_url(value: &str) -> bool {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));
    rest.is_some_and(|r| !r.is_empty() && !r.starts_with('/'))
}

/// Upper bound for `yearBuilt`. Outside a browser there is no wall clock
/// to consult, so native hosts accept anything plausible.
fn current_year() -> u16 {
    #[cfg(feature = "hydrate")]
    {
        let year = js_sys::Date::new_0().get_full_year();
        u16::try_from(year).unwrap_or(u16::MAX)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        2100
    }
}
