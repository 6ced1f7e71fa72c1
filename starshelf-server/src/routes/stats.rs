//! Stats route - aggregate counts over the collection

use std::collections::BTreeMap;

use axum::{extract::State, Json};

use crate::models::StatsResponse;
use crate::store::Store;

/// GET /stats - Counts by language and by status
pub async fn get_stats(State(store): State<Store>) -> Json<StatsResponse> {
    let repos = store.list();

    let mut by_language: BTreeMap<String, usize> = BTreeMap::new();
    let mut by_status: BTreeMap<String, usize> = BTreeMap::new();

    for repo in &repos {
        let language = repo.language.as_deref().unwrap_or("Unknown");
        *by_language.entry(language.to_string()).or_insert(0) += 1;

        let status = repo.status.as_deref().unwrap_or("unknown");
        *by_status.entry(status.to_string()).or_insert(0) += 1;
    }

    Json(StatsResponse {
        total_repos: repos.len(),
        by_language,
        by_status,
    })
}
