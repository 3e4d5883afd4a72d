// src/presentation/http/controllers/profiles.rs
use super::payloads::ProfileResponse;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

#[utoipa::path(
    get,
    path = "/api/profiles/{username}",
    params(("username" = String, Path, description = "Profile owner")),
    responses(
        (status = 200, description = "Profile.", body = ProfileResponse),
        (status = 404, description = "Unknown user.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Profiles"
)]
pub async fn get_profile(
    Extension(state): Extension<HttpState>,
    viewer: MaybeAuthenticated,
    Path(username): Path<String>,
) -> HttpResult<Json<ProfileResponse>> {
    state
        .services
        .user_queries
        .get_profile(viewer.0.as_ref(), &username)
        .await
        .into_http()
        .map(|profile| Json(ProfileResponse { profile }))
}

#[utoipa::path(
    post,
    path = "/api/profiles/{username}/follow",
    params(("username" = String, Path, description = "User to follow")),
    responses(
        (status = 200, description = "Followed.", body = ProfileResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Cannot follow yourself.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown user.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("tokenAuth" = [])),
    tag = "Profiles"
)]
pub async fn follow(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(username): Path<String>,
) -> HttpResult<Json<ProfileResponse>> {
    state
        .services
        .user_commands
        .follow(&actor, &username)
        .await
        .into_http()
        .map(|profile| Json(ProfileResponse { profile }))
}

#[utoipa::path(
    delete,
    path = "/api/profiles/{username}/follow",
    params(("username" = String, Path, description = "User to unfollow")),
    responses(
        (status = 200, description = "Unfollowed.", body = ProfileResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown user.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("tokenAuth" = [])),
    tag = "Profiles"
)]
pub async fn unfollow(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(username): Path<String>,
) -> HttpResult<Json<ProfileResponse>> {
    state
        .services
        .user_commands
        .unfollow(&actor, &username)
        .await
        .into_http()
        .map(|profile| Json(ProfileResponse { profile }))
}
