// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{ApiKey, ApiKeyValue, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

const DEFAULT_SNAPSHOT_PATH: &str = "openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::users::register,
        crate::presentation::http::controllers::users::login,
        crate::presentation::http::controllers::users::current_user,
        crate::presentation::http::controllers::users::update_user,
        crate::presentation::http::controllers::profiles::get_profile,
        crate::presentation::http::controllers::profiles::follow,
        crate::presentation::http::controllers::profiles::unfollow,
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::feed,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::delete_article,
        crate::presentation::http::controllers::articles::favorite_article,
        crate::presentation::http::controllers::articles::unfavorite_article,
        crate::presentation::http::controllers::comments::list_comments,
        crate::presentation::http::controllers::comments::add_comment,
        crate::presentation::http::controllers::comments::delete_comment,
        crate::presentation::http::controllers::tags::list_tags,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::error::ErrorBody,
            crate::presentation::http::controllers::payloads::RegisterRequest,
            crate::presentation::http::controllers::payloads::NewUserBody,
            crate::presentation::http::controllers::payloads::LoginRequest,
            crate::presentation::http::controllers::payloads::LoginBody,
            crate::presentation::http::controllers::payloads::UpdateUserRequest,
            crate::presentation::http::controllers::payloads::UpdateUserBody,
            crate::presentation::http::controllers::payloads::UserResponse,
            crate::presentation::http::controllers::payloads::ProfileResponse,
            crate::presentation::http::controllers::payloads::CreateArticleRequest,
            crate::presentation::http::controllers::payloads::NewArticleBody,
            crate::presentation::http::controllers::payloads::UpdateArticleRequest,
            crate::presentation::http::controllers::payloads::UpdateArticleBody,
            crate::presentation::http::controllers::payloads::ArticleResponse,
            crate::presentation::http::controllers::payloads::AddCommentRequest,
            crate::presentation::http::controllers::payloads::NewCommentBody,
            crate::presentation::http::controllers::payloads::CommentResponse,
            crate::presentation::http::controllers::payloads::CommentsResponse,
            crate::presentation::http::controllers::payloads::TagsResponse,
            crate::application::dto::UserDto,
            crate::application::dto::ProfileDto,
            crate::application::dto::ArticleDto,
            crate::application::dto::ArticleListDto,
            crate::application::dto::CommentDto
        )
    ),
    tags(
        (name = "Users", description = "Registration, login and the current user"),
        (name = "Profiles", description = "Public profiles and follows"),
        (name = "Articles", description = "Articles, feed and favorites"),
        (name = "Comments", description = "Comments on articles"),
        (name = "Tags", description = "Tag listing"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Conduit API",
        description = "Blogging platform backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        components.add_security_scheme(
            "tokenAuth",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                "Authorization",
                "`Token <jwt>`; the `Bearer` scheme is accepted as well",
            ))),
        );
    }
}

/// `/openapi.json`, Swagger UI under `/docs` and Redoc under `/redoc`.
pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

/// Writes the document to `OPENAPI_SNAPSHOT_PATH` and returns the path used.
pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &ApiDoc::openapi())?;
    Ok(output_path)
}
