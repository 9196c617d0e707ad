use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::search::{SearchHitDto, SearchKind, SearchQuery},
    server::{error::Error, model::app::AppState},
};

pub static SEARCH_TAG: &str = "search";

/// Search mirrored records of one kind by name
#[utoipa::path(
    get,
    path = "/api/_search/{kind}",
    tag = SEARCH_TAG,
    params(
        ("kind" = SearchKind, Path, description = "Record kind, e.g. `application` or `line-of-business`"),
        SearchQuery
    ),
    responses(
        (status = 200, description = "Matching records ordered by id", body = Vec<SearchHitDto>),
        (status = 400, description = "Unknown record kind")
    ),
)]
pub async fn search(
    State(state): State<AppState>,
    Path(kind): Path<SearchKind>,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, Error> {
    let hits = state.search.search(kind, &query.query).await;

    Ok((StatusCode::OK, Json(hits)))
}
