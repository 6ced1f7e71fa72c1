//! Request and response models for starshelf-server

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ============================================================================
// Repos
// ============================================================================

/// A tracked repository entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repo {
    pub id: u64,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

/// Create request; `url` presence is checked by the handler, not the
/// deserializer, so a missing field yields a 400 with a readable message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateRepoRequest {
    pub url: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub notes: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
}

/// Partial update; only supplied fields overwrite the stored record
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateRepoRequest {
    pub url: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub language: Option<String>,
    pub tags: Option<Vec<String>>,
    pub notes: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RepoListResponse {
    pub total: usize,
    pub repos: Vec<Repo>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub total: usize,
    pub repos: Vec<Repo>,
}

// ============================================================================
// Stats
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub total_repos: usize,
    pub by_language: BTreeMap<String, usize>,
    pub by_status: BTreeMap<String, usize>,
}

// ============================================================================
// Health Check
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub total_repos: usize,
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Filters for `GET /repos`; each supplied filter narrows the result
/// (logical AND), comparisons are case-insensitive
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepoFilterParams {
    pub language: Option<String>,
    pub tag: Option<String>,
    pub status: Option<String>,
}
