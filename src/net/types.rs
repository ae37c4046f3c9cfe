//! Wire types shared with the listings REST API.
//!
//! Field names follow the API's camelCase JSON. Property and user endpoints
//! wrap their payloads in a `{success, data}` envelope; the login endpoint
//! returns its body bare. Both shapes are modeled here so the service
//! modules stay thin.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// Authorization tag gating which views a user may render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Agent,
}

impl Role {
    /// Spanish display label used across the dashboard.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Administrador",
            Role::Agent => "Agente",
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Agent
    }
}

/// Authenticated user profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
}

/// Login response: an opaque bearer token plus the user it belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthTokens {
    pub token: String,
    pub user: User,
}

/// Credentials submitted to `POST /auth/login`.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Sale or rental listing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    #[default]
    Sale,
    Rent,
}

impl PropertyType {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PropertyType::Sale => "Venta",
            PropertyType::Rent => "Renta",
        }
    }
}

/// Listing lifecycle status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    #[default]
    Available,
    Sold,
    Rented,
}

impl PropertyStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PropertyStatus::Available => "Disponible",
            PropertyStatus::Sold => "Vendida",
            PropertyStatus::Rented => "Rentada",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
    pub coordinates: Coordinates,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Features {
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub area: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parking_spots: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_built: Option<u16>,
}

/// A coastal property listing as returned by the API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: PropertyType,
    pub status: PropertyStatus,
    pub price: f64,
    pub location: Location,
    pub features: Features,
    pub images: Vec<String>,
    pub amenities: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
    pub owner_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<User>,
}

/// Create/update payload for a listing: everything the agent edits,
/// without the server-owned fields.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyForm {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: PropertyType,
    pub status: PropertyStatus,
    pub price: f64,
    pub location: Location,
    pub features: Features,
    pub images: Vec<String>,
    pub amenities: Vec<String>,
}

impl PropertyForm {
    /// Pre-fill the form from an existing listing for editing.
    #[must_use]
    pub fn from_property(property: &Property) -> Self {
        Self {
            title: property.title.clone(),
            description: property.description.clone(),
            kind: property.kind,
            status: property.status,
            price: property.price,
            location: property.location.clone(),
            features: property.features.clone(),
            images: property.images.clone(),
            amenities: property.amenities.clone(),
        }
    }
}

/// Public catalog filters. All fields optional; unset fields are omitted
/// from the query string entirely.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropertyFilter {
    pub search: Option<String>,
    pub kind: Option<PropertyType>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub city: Option<String>,
    pub bedrooms: Option<u32>,
}

impl PropertyFilter {
    /// Convert to query pairs for the `/properties` endpoint.
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(kind) = self.kind {
            let value = match kind {
                PropertyType::Sale => "sale",
                PropertyType::Rent => "rent",
            };
            pairs.push(("type", value.to_owned()));
        }
        if let Some(min) = self.min_price {
            pairs.push(("minPrice", format_amount(min)));
        }
        if let Some(max) = self.max_price {
            pairs.push(("maxPrice", format_amount(max)));
        }
        if let Some(city) = &self.city {
            pairs.push(("city", city.clone()));
        }
        if let Some(bedrooms) = self.bedrooms {
            pairs.push(("bedrooms", bedrooms.to_string()));
        }
        pairs
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to_query_pairs().is_empty()
    }
}

/// Render a numeric query value without a trailing `.0` for whole amounts.
fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// Standard `{success, data}` envelope on property and user endpoints.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: T,
}

/// Payload of `GET /properties` and `GET /properties/my-properties`.
#[derive(Debug, Deserialize)]
pub struct PropertyListData {
    pub properties: Vec<Property>,
}

/// A user as seen by the admin directory, with audit fields and an
/// optional owned-listings count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default, rename = "_count", skip_serializing_if = "Option::is_none")]
    pub count: Option<ManagedUserCount>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedUserCount {
    pub properties: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u32,
    pub pages: u32,
}

/// Payload of `GET /users`.
#[derive(Debug, Deserialize)]
pub struct UsersPage {
    pub users: Vec<ManagedUser>,
    pub pagination: Pagination,
}

/// Payload for `POST /users`.
#[derive(Clone, Debug, Default, Serialize)]
pub struct CreateUserInput {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: Role,
}

/// Payload for `PUT /users/{id}`; unset fields are left untouched.
#[derive(Clone, Debug, Default, Serialize)]
pub struct UpdateUserInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}
