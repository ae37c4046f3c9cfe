//! REST API plumbing shared by the service modules.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the stored
//! bearer token attached to every request (the browser-tab session store is
//! the single token source). Server-side (SSR): the service modules stub
//! out with `ApiError::Unavailable` since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become `ApiError::Http` carrying the optional
//! `{message}` body field; transport failures become `ApiError::Network`.
//! Callers surface these as toasts and never let them reach the renderer.

#![allow(clippy::unused_async)]

#[cfg(feature = "hydrate")]
use serde::Serialize;
#[cfg(feature = "hydrate")]
use serde::de::DeserializeOwned;

#[cfg(feature = "hydrate")]
use crate::net::error::ApiError;
#[cfg(feature = "hydrate")]
use crate::state::session_store::SessionStore;

/// Path prefix of the listings API.
pub const API_BASE: &str = "/api";

#[cfg(feature = "hydrate")]
fn url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

#[cfg(feature = "hydrate")]
fn bearer() -> Option<String> {
    SessionStore::browser().token().map(|t| format!("Bearer {t}"))
}

#[cfg(feature = "hydrate")]
fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn parse<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(failure(resp).await);
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn failure(resp: gloo_net::http::Response) -> ApiError {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }
    let status = resp.status();
    let message = resp.json::<ErrorBody>().await.ok().and_then(|b| b.message);
    ApiError::Http { status, message }
}

#[cfg(feature = "hydrate")]
fn with_auth(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match bearer() {
        Some(value) => builder.header("Authorization", &value),
        None => builder,
    }
}

/// `GET {base}{path}?{query}`, parsed as JSON.
///
/// # Errors
///
/// `ApiError::Http` on non-2xx, `Network` on transport failure, `Decode`
/// on an unexpected body.
#[cfg(feature = "hydrate")]
pub async fn get_json<T: DeserializeOwned>(
    path: &str,
    query: &[(&'static str, String)],
) -> Result<T, ApiError> {
    let mut builder = with_auth(gloo_net::http::Request::get(&url(path)));
    if !query.is_empty() {
        builder = builder.query(query.iter().map(|(k, v)| (*k, v.as_str())));
    }
    let resp = builder.send().await.map_err(transport)?;
    parse(resp).await
}

/// `POST {base}{path}` with a JSON body, parsed as JSON.
///
/// # Errors
///
/// As [`get_json`].
#[cfg(feature = "hydrate")]
pub async fn post_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let resp = with_auth(gloo_net::http::Request::post(&url(path)))
        .json(body)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    parse(resp).await
}

/// `PUT {base}{path}` with a JSON body, parsed as JSON.
///
/// # Errors
///
/// As [`get_json`].
#[cfg(feature = "hydrate")]
pub async fn put_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let resp = with_auth(gloo_net::http::Request::put(&url(path)))
        .json(body)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    parse(resp).await
}

/// `DELETE {base}{path}`, response body parsed as JSON.
///
/// # Errors
///
/// As [`get_json`].
#[cfg(feature = "hydrate")]
pub async fn delete_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let resp = with_auth(gloo_net::http::Request::delete(&url(path)))
        .send()
        .await
        .map_err(transport)?;
    parse(resp).await
}

/// `DELETE {base}{path}`, response body ignored.
///
/// # Errors
///
/// `ApiError::Http` on non-2xx, `Network` on transport failure.
#[cfg(feature = "hydrate")]
pub async fn delete(path: &str) -> Result<(), ApiError> {
    let resp = with_auth(gloo_net::http::Request::delete(&url(path)))
        .send()
        .await
        .map_err(transport)?;
    if resp.ok() {
        Ok(())
    } else {
        Err(failure(resp).await)
    }
}
