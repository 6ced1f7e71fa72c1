//! In-memory storage for starshelf
//!
//! Owns the record collection and the id counter. State lives for the
//! process lifetime only; a single mutex serializes every operation, so
//! handlers never observe a half-applied mutation.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::error::{ServerError, ServerResult};
use crate::models::{CreateRepoRequest, Repo, UpdateRepoRequest};

/// Thread-safe handle to the record collection
#[derive(Clone)]
pub struct Store {
    inner: Arc<Mutex<StoreInner>>,
}

struct StoreInner {
    // BTreeMap iterates in ascending id order, which is insertion order
    // because ids are assigned monotonically and never reused.
    repos: BTreeMap<u64, Repo>,
    next_id: u64,
}

impl Store {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(StoreInner {
                repos: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }

    /// All records, insertion order
    pub fn list(&self) -> Vec<Repo> {
        let inner = self.inner.lock().unwrap();
        inner.repos.values().cloned().collect()
    }

    /// Point lookup; `None` when the id is absent
    pub fn get(&self, id: u64) -> Option<Repo> {
        let inner = self.inner.lock().unwrap();
        inner.repos.get(&id).cloned()
    }

    /// Assign the next unused id and store the record.
    ///
    /// Performs no validation; presence of `url` is the caller's
    /// responsibility.
    pub fn add(&self, req: CreateRepoRequest) -> Repo {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_id;
        inner.next_id += 1;

        let repo = Repo {
            id,
            url: req.url.unwrap_or_default(),
            name: req.name,
            description: req.description,
            language: req.language,
            tags: req.tags,
            notes: req.notes,
            status: req.status,
            priority: req.priority,
        };

        inner.repos.insert(id, repo.clone());
        repo
    }

    /// Merge the supplied fields into an existing record, overwriting only
    /// the named ones, and return the updated record
    pub fn update(&self, id: u64, req: UpdateRepoRequest) -> ServerResult<Repo> {
        let mut inner = self.inner.lock().unwrap();
        let repo = inner
            .repos
            .get_mut(&id)
            .ok_or_else(|| ServerError::NotFound(format!("Repo {} not found", id)))?;

        if let Some(url) = req.url {
            repo.url = url;
        }
        if let Some(name) = req.name {
            repo.name = Some(name);
        }
        if let Some(description) = req.description {
            repo.description = Some(description);
        }
        if let Some(language) = req.language {
            repo.language = Some(language);
        }
        if let Some(tags) = req.tags {
            repo.tags = tags;
        }
        if let Some(notes) = req.notes {
            repo.notes = Some(notes);
        }
        if let Some(status) = req.status {
            repo.status = Some(status);
        }
        if let Some(priority) = req.priority {
            repo.priority = Some(priority);
        }

        Ok(repo.clone())
    }

    /// Remove the record if present; `false` means the caller reports
    /// not-found
    pub fn remove(&self, id: u64) -> bool {
        let mut inner = self.inner.lock().unwrap();
        inner.repos.remove(&id).is_some()
    }

    /// Records whose name, description, or any tag contains the query as a
    /// case-insensitive substring
    pub fn search(&self, query: &str) -> Vec<Repo> {
        let q = query.to_lowercase();
        let inner = self.inner.lock().unwrap();

        inner
            .repos
            .values()
            .filter(|repo| {
                repo.name
                    .as_deref()
                    .is_some_and(|name| name.to_lowercase().contains(&q))
                    || repo
                        .description
                        .as_deref()
                        .is_some_and(|desc| desc.to_lowercase().contains(&q))
                    || repo.tags.iter().any(|tag| tag.to_lowercase().contains(&q))
            })
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        let inner = self.inner.lock().unwrap();
        inner.repos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
