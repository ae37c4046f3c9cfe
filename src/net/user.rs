//! User directory endpoints. Admin-only screens call these.

use crate::net::error::ApiError;
use crate::net::types::{CreateUserInput, ManagedUser, UpdateUserInput, UsersPage};
#[cfg(feature = "hydrate")]
use crate::net::types::ApiEnvelope;

/// Query for `GET /users`.
#[derive(Clone, Debug, Default)]
pub struct UserQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
}

impl UserQuery {
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        pairs
    }
}

/// `GET /users`, paginated and optionally filtered by a search term.
///
/// # Errors
///
/// Any `ApiError` from the request.
pub async fn fetch_all(query: &UserQuery) -> Result<UsersPage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let envelope: ApiEnvelope<UsersPage> =
            crate::net::api::get_json("/users", &query.to_query_pairs()).await?;
        Ok(envelope.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err(ApiError::Unavailable)
    }
}

/// `POST /users`.
///
/// # Errors
///
/// Any `ApiError` from the request.
pub async fn create(input: &CreateUserInput) -> Result<ManagedUser, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let envelope: ApiEnvelope<ManagedUser> =
            crate::net::api::post_json("/users", input).await?;
        Ok(envelope.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input;
        Err(ApiError::Unavailable)
    }
}

/// `PUT /users/{id}`.
///
/// # Errors
///
/// Any `ApiError` from the request.
pub async fn update(id: &str, input: &UpdateUserInput) -> Result<ManagedUser, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let envelope: ApiEnvelope<ManagedUser> =
            crate::net::api::put_json(&format!("/users/{id}"), input).await?;
        Ok(envelope.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, input);
        Err(ApiError::Unavailable)
    }
}

/// `DELETE /users/{id}`. The server answers with a confirmation message.
///
/// # Errors
///
/// Any `ApiError` from the request.
pub async fn delete(id: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct DeleteData {
            message: String,
        }
        let envelope: ApiEnvelope<DeleteData> =
            crate::net::api::delete_json(&format!("/users/{id}")).await?;
        Ok(envelope.data.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}
