// src/presentation/http/controllers/articles.rs
use super::payloads::{
    ArticleResponse, CreateArticleRequest, FeedParams, ListArticlesParams, UpdateArticleRequest,
};
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::ArticleListDto,
    queries::articles::{FeedQuery, GetArticleBySlugQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};

#[utoipa::path(
    get,
    path = "/api/articles",
    params(ListArticlesParams),
    responses(
        (status = 200, description = "Articles, newest first.", body = ArticleListDto)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    viewer: MaybeAuthenticated,
    Query(params): Query<ListArticlesParams>,
) -> HttpResult<Json<ArticleListDto>> {
    let query = ListArticlesQuery {
        tag: params.tag,
        author: params.author,
        favorited: params.favorited,
        limit: params.limit,
        offset: params.offset,
    };

    state
        .services
        .article_queries
        .list_articles(viewer.0.as_ref(), query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/articles/feed",
    params(FeedParams),
    responses(
        (status = 200, description = "Articles by followed authors.", body = ArticleListDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("tokenAuth" = [])),
    tag = "Articles"
)]
pub async fn feed(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Query(params): Query<FeedParams>,
) -> HttpResult<Json<ArticleListDto>> {
    let query = FeedQuery {
        limit: params.limit,
        offset: params.offset,
    };

    state
        .services
        .article_queries
        .feed(&actor, query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/articles/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Article.", body = ArticleResponse),
        (status = 404, description = "Unknown article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    viewer: MaybeAuthenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleResponse>> {
    state
        .services
        .article_queries
        .get_article_by_slug(viewer.0.as_ref(), GetArticleBySlugQuery { slug })
        .await
        .into_http()
        .map(|article| Json(ArticleResponse { article }))
}

#[utoipa::path(
    post,
    path = "/api/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = ArticleResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Invalid input or no free slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("tokenAuth" = [])),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    ApiJson(payload): ApiJson<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleResponse>)> {
    let body = payload.article;
    let command = CreateArticleCommand {
        title: body.title,
        description: body.description,
        body: body.body,
        tag_list: body.tag_list,
    };

    let article = state
        .services
        .article_commands
        .create_article(&actor, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(ArticleResponse { article })))
}

#[utoipa::path(
    put,
    path = "/api/articles/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Article updated.", body = ArticleResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Not the author.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown article.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Invalid or empty update.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("tokenAuth" = [])),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(slug): Path<String>,
    ApiJson(payload): ApiJson<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleResponse>> {
    let body = payload.article;
    let command = UpdateArticleCommand {
        slug,
        title: body.title,
        description: body.description,
        body: body.body,
    };

    state
        .services
        .article_commands
        .update_article(&actor, command)
        .await
        .into_http()
        .map(|article| Json(ArticleResponse { article }))
}

#[utoipa::path(
    delete,
    path = "/api/articles/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 204, description = "Article deleted."),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Not the author.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("tokenAuth" = [])),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .article_commands
        .delete_article(&actor, DeleteArticleCommand { slug })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/articles/{slug}/favorite",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Article favorited.", body = ArticleResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("tokenAuth" = [])),
    tag = "Articles"
)]
pub async fn favorite_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleResponse>> {
    state
        .services
        .article_commands
        .favorite_article(&actor, &slug)
        .await
        .into_http()
        .map(|article| Json(ArticleResponse { article }))
}

#[utoipa::path(
    delete,
    path = "/api/articles/{slug}/favorite",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Favorite removed.", body = ArticleResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("tokenAuth" = [])),
    tag = "Articles"
)]
pub async fn unfavorite_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleResponse>> {
    state
        .services
        .article_commands
        .unfavorite_article(&actor, &slug)
        .await
        .into_http()
        .map(|article| Json(ArticleResponse { article }))
}
