//! Property listing endpoints.
//!
//! All payloads arrive wrapped in the `{success, data}` envelope; the
//! functions here unwrap it so pages work with plain types.

use crate::net::error::ApiError;
use crate::net::types::{Property, PropertyFilter, PropertyForm};
#[cfg(feature = "hydrate")]
use crate::net::types::{ApiEnvelope, PropertyListData};

/// `GET /properties`, optionally filtered.
///
/// # Errors
///
/// Any `ApiError` from the request.
pub async fn fetch_all(filter: &PropertyFilter) -> Result<Vec<Property>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let envelope: ApiEnvelope<PropertyListData> =
            crate::net::api::get_json("/properties", &filter.to_query_pairs()).await?;
        Ok(envelope.data.properties)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = filter;
        Err(ApiError::Unavailable)
    }
}

/// `GET /properties/{id}`.
///
/// # Errors
///
/// Any `ApiError` from the request.
pub async fn fetch_by_id(id: &str) -> Result<Property, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let envelope: ApiEnvelope<Property> =
            crate::net::api::get_json(&format!("/properties/{id}"), &[]).await?;
        Ok(envelope.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// `GET /properties/my-properties`: the signed-in agent's own listings.
///
/// # Errors
///
/// Any `ApiError` from the request.
pub async fn fetch_mine() -> Result<Vec<Property>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let envelope: ApiEnvelope<PropertyListData> =
            crate::net::api::get_json("/properties/my-properties", &[]).await?;
        Ok(envelope.data.properties)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// `POST /properties`.
///
/// # Errors
///
/// Any `ApiError` from the request.
pub async fn create(form: &PropertyForm) -> Result<Property, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let envelope: ApiEnvelope<Property> =
            crate::net::api::post_json("/properties", form).await?;
        Ok(envelope.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = form;
        Err(ApiError::Unavailable)
    }
}

/// `PUT /properties/{id}`.
///
/// # Errors
///
/// Any `ApiError` from the request.
pub async fn update(id: &str, form: &PropertyForm) -> Result<Property, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let envelope: ApiEnvelope<Property> =
            crate::net::api::put_json(&format!("/properties/{id}"), form).await?;
        Ok(envelope.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, form);
        Err(ApiError::Unavailable)
    }
}

/// `DELETE /properties/{id}`.
///
/// # Errors
///
/// Any `ApiError` from the request.
pub async fn delete(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        crate::net::api::delete(&format!("/properties/{id}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}
