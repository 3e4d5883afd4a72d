// src/presentation/http/controllers/comments.rs
use super::payloads::{AddCommentRequest, CommentResponse, CommentsResponse};
use crate::application::{
    commands::articles::{AddCommentCommand, DeleteCommentCommand},
    queries::articles::ListCommentsQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};

#[utoipa::path(
    get,
    path = "/api/articles/{slug}/comments",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Comments, oldest first.", body = CommentsResponse),
        (status = 404, description = "Unknown article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    viewer: MaybeAuthenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<CommentsResponse>> {
    state
        .services
        .article_queries
        .list_comments(viewer.0.as_ref(), ListCommentsQuery { slug })
        .await
        .into_http()
        .map(|comments| Json(CommentsResponse { comments }))
}

#[utoipa::path(
    post,
    path = "/api/articles/{slug}/comments",
    params(("slug" = String, Path, description = "Article slug")),
    request_body = AddCommentRequest,
    responses(
        (status = 201, description = "Comment added.", body = CommentResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown article.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Blank body.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("tokenAuth" = [])),
    tag = "Comments"
)]
pub async fn add_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(slug): Path<String>,
    ApiJson(payload): ApiJson<AddCommentRequest>,
) -> HttpResult<(StatusCode, Json<CommentResponse>)> {
    let command = AddCommentCommand {
        slug,
        body: payload.comment.body,
    };

    let comment = state
        .services
        .article_commands
        .add_comment(&actor, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(CommentResponse { comment })))
}

#[utoipa::path(
    delete,
    path = "/api/articles/{slug}/comments/{id}",
    params(
        ("slug" = String, Path, description = "Article slug"),
        ("id" = i64, Path, description = "Comment identifier")
    ),
    responses(
        (status = 204, description = "Comment deleted."),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Not the comment author.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown article or comment.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("tokenAuth" = [])),
    tag = "Comments"
)]
pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path((slug, id)): Path<(String, i64)>,
) -> HttpResult<StatusCode> {
    state
        .services
        .article_commands
        .delete_comment(&actor, DeleteCommentCommand { slug, id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
