//! Repo routes - CRUD, filtering, and search over the bookmark collection

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::json;

use crate::error::{ServerError, ServerResult};
use crate::models::{
    CreateRepoRequest, Repo, RepoFilterParams, RepoListResponse, SearchResponse,
    UpdateRepoRequest,
};
use crate::store::Store;

/// GET /repos - List repos, optionally narrowed by language/tag/status
pub async fn list_repos(
    State(store): State<Store>,
    Query(params): Query<RepoFilterParams>,
) -> Json<RepoListResponse> {
    let mut repos = store.list();

    if let Some(language) = &params.language {
        let wanted = language.to_lowercase();
        repos.retain(|repo| {
            repo.language
                .as_deref()
                .is_some_and(|lang| lang.to_lowercase() == wanted)
        });
    }

    if let Some(tag) = &params.tag {
        let wanted = tag.to_lowercase();
        repos.retain(|repo| repo.tags.iter().any(|t| t.to_lowercase() == wanted));
    }

    if let Some(status) = &params.status {
        let wanted = status.to_lowercase();
        repos.retain(|repo| {
            repo.status
                .as_deref()
                .is_some_and(|s| s.to_lowercase() == wanted)
        });
    }

    Json(RepoListResponse {
        total: repos.len(),
        repos,
    })
}

/// GET /repos/:id - Get a single repo
pub async fn get_repo(
    State(store): State<Store>,
    Path(id): Path<u64>,
) -> ServerResult<Json<Repo>> {
    store
        .get(id)
        .map(Json)
        .ok_or_else(|| ServerError::NotFound(format!("Repo {} not found", id)))
}

/// POST /repos - Add a new repo
pub async fn create_repo(
    State(store): State<Store>,
    Json(req): Json<CreateRepoRequest>,
) -> ServerResult<Json<serde_json::Value>> {
    if req.url.is_none() {
        return Err(ServerError::BadRequest("url is required".into()));
    }

    let repo = store.add(req);

    Ok(Json(json!({
        "message": "Repository added successfully",
        "repo": repo
    })))
}

/// PUT /repos/:id - Partially update a repo's fields
pub async fn update_repo(
    State(store): State<Store>,
    Path(id): Path<u64>,
    Json(req): Json<UpdateRepoRequest>,
) -> ServerResult<Json<serde_json::Value>> {
    let repo = store.update(id, req)?;

    Ok(Json(json!({
        "message": "Repository updated successfully",
        "repo": repo
    })))
}

/// DELETE /repos/:id - Delete a repo
pub async fn delete_repo(
    State(store): State<Store>,
    Path(id): Path<u64>,
) -> ServerResult<Json<serde_json::Value>> {
    if !store.remove(id) {
        return Err(ServerError::NotFound(format!("Repo {} not found", id)));
    }

    Ok(Json(json!({
        "message": format!("Repository {} deleted successfully", id)
    })))
}

/// GET /repos/search/:query - Substring search across name/description/tags
pub async fn search_repos(
    State(store): State<Store>,
    Path(query): Path<String>,
) -> Json<SearchResponse> {
    let repos = store.search(&query);

    Json(SearchResponse {
        query,
        total: repos.len(),
        repos,
    })
}
