// src/presentation/http/controllers/users.rs
use super::payloads::{LoginRequest, RegisterRequest, UpdateUserRequest, UserResponse};
use crate::application::commands::users::{
    LoginUserCommand, RegisterUserCommand, UpdateUserCommand,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, Authenticated};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered.", body = UserResponse),
        (status = 422, description = "Invalid input or duplicate user.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn register(
    Extension(state): Extension<HttpState>,
    ApiJson(payload): ApiJson<RegisterRequest>,
) -> HttpResult<(StatusCode, Json<UserResponse>)> {
    let command = RegisterUserCommand {
        username: payload.user.username,
        email: payload.user.email,
        password: payload.user.password,
    };

    let user = state
        .services
        .user_commands
        .register(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(UserResponse { user })))
}

#[utoipa::path(
    post,
    path = "/api/users/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in.", body = UserResponse),
        (status = 401, description = "Invalid credentials.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Invalid input.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> HttpResult<Json<UserResponse>> {
    let command = LoginUserCommand {
        email: payload.user.email,
        password: payload.user.password,
    };

    state
        .services
        .user_commands
        .login(command)
        .await
        .into_http()
        .map(|user| Json(UserResponse { user }))
}

#[utoipa::path(
    get,
    path = "/api/user",
    responses(
        (status = 200, description = "Current user.", body = UserResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("tokenAuth" = [])),
    tag = "Users"
)]
pub async fn current_user(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
) -> HttpResult<Json<UserResponse>> {
    state
        .services
        .user_queries
        .current_user(&actor)
        .await
        .into_http()
        .map(|user| Json(UserResponse { user }))
}

#[utoipa::path(
    put,
    path = "/api/user",
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated user.", body = UserResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Invalid or empty update.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("tokenAuth" = [])),
    tag = "Users"
)]
pub async fn update_user(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    ApiJson(payload): ApiJson<UpdateUserRequest>,
) -> HttpResult<Json<UserResponse>> {
    let body = payload.user;
    let command = UpdateUserCommand {
        email: body.email,
        username: body.username,
        password: body.password,
        bio: body.bio,
        image: body.image,
    };

    state
        .services
        .user_commands
        .update_user(&actor, command)
        .await
        .into_http()
        .map(|user| Json(UserResponse { user }))
}
