// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Request},
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
};
use serde::de::DeserializeOwned;

use super::error::HttpError;

/// Schemes accepted in the `Authorization` header.
const TOKEN_SCHEMES: [&str; 2] = ["Token", "Bearer"];

#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

#[derive(Debug, Clone)]
pub struct MaybeAuthenticated(pub Option<AuthenticatedUser>);

fn app_state(parts: &Parts) -> Result<HttpState, HttpError> {
    parts.extensions.get::<HttpState>().cloned().ok_or_else(|| {
        HttpError::from_error(ApplicationError::infrastructure(
            "application state missing",
        ))
    })
}

/// `Ok(None)` when no header was sent at all.
pub(crate) fn bearer_token(headers: &HeaderMap) -> Result<Option<&str>, HttpError> {
    let Some(value) = headers.get(AUTHORIZATION) else {
        return Ok(None);
    };
    let value = value
        .to_str()
        .map_err(|_| HttpError::unauthorized("malformed Authorization header"))?;

    let (scheme, token) = value
        .split_once(' ')
        .ok_or_else(|| HttpError::unauthorized("malformed Authorization header"))?;
    if !TOKEN_SCHEMES
        .iter()
        .any(|accepted| accepted.eq_ignore_ascii_case(scheme))
    {
        return Err(HttpError::unauthorized("unsupported authorization scheme"));
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(HttpError::unauthorized("missing token"));
    }
    Ok(Some(token))
}

async fn authenticate(parts: &Parts) -> Result<Option<AuthenticatedUser>, HttpError> {
    let Some(token) = bearer_token(&parts.headers)? else {
        return Ok(None);
    };
    let state = app_state(parts)?;
    let user = state
        .services
        .authenticate(token)
        .await
        .map_err(HttpError::from_error)?;
    Ok(Some(user))
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        authenticate(parts)
            .await?
            .map(Self)
            .ok_or_else(|| HttpError::unauthorized("missing Authorization header"))
    }
}

impl<S> FromRequestParts<S> for MaybeAuthenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        authenticate(parts).await.map(Self)
    }
}

/// JSON body whose rejections use the API error envelope with status 422.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(HttpError::unprocessable(rejection.body_text())),
        }
    }
}
