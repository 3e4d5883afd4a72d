use super::payloads::TagsResponse;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/api/tags",
    responses(
        (status = 200, description = "Tags in use, alphabetical.", body = TagsResponse)
    ),
    tag = "Tags"
)]
pub async fn list_tags(Extension(state): Extension<HttpState>) -> HttpResult<Json<TagsResponse>> {
    state
        .services
        .tag_queries
        .list_tags()
        .await
        .into_http()
        .map(|tags| Json(TagsResponse { tags }))
}
