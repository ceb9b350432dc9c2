use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::content::todos::extract_todos;
use crate::content::validation::validate_profile;
use crate::content::ContentError;
use crate::models::profile::Profile;

/// A parsed, validated profile plus what was learned while loading it.
#[derive(Debug)]
pub struct LoadedProfile {
    pub profile: Profile,
    pub todos: Vec<String>,
    pub loaded_at: DateTime<Utc>,
    modified: Option<SystemTime>,
}

/// Read-through cache over the profile file.
///
/// Without hot reload the first successful load is served forever. With hot
/// reload every read compares the file's mtime against the cached copy and
/// reloads when the file is newer or its metadata can no longer be read.
pub struct ProfileStore {
    path: PathBuf,
    hot_reload: bool,
    cache: RwLock<Option<Arc<LoadedProfile>>>,
}

impl ProfileStore {
    pub fn new(path: impl Into<PathBuf>, hot_reload: bool) -> Self {
        Self {
            path: path.into(),
            hot_reload,
            cache: RwLock::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn get(&self) -> Result<Arc<LoadedProfile>, ContentError> {
        if let Some(cached) = self.cache.read().await.as_ref() {
            if !self.hot_reload || !self.is_stale(cached).await {
                return Ok(Arc::clone(cached));
            }
            debug!("Profile file changed on disk; reloading");
        }

        let mut cache = self.cache.write().await;
        // Another request may have reloaded while we waited for the lock.
        if let Some(cached) = cache.as_ref() {
            if !self.hot_reload || !self.is_stale(cached).await {
                return Ok(Arc::clone(cached));
            }
        }

        let loaded = Arc::new(self.load().await?);
        *cache = Some(Arc::clone(&loaded));
        Ok(loaded)
    }

    async fn is_stale(&self, cached: &LoadedProfile) -> bool {
        match self.modified().await {
            Ok(mtime) => cached.modified.map_or(true, |seen| mtime > seen),
            Err(_) => true,
        }
    }

    async fn modified(&self) -> std::io::Result<SystemTime> {
        tokio::fs::metadata(&self.path).await?.modified()
    }

    async fn load(&self) -> Result<LoadedProfile, ContentError> {
        let modified = self.modified().await.ok();
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| ContentError::Io {
                path: self.path.clone(),
                source,
            })?;

        let raw: serde_json::Value = serde_json::from_str(&text)?;
        let todos = extract_todos(&raw);
        let profile: Profile = serde_json::from_value(raw)?;
        validate_profile(&profile)?;

        info!(
            "Loaded profile '{}' from {}",
            profile.name,
            self.path.display()
        );
        if !todos.is_empty() {
            warn!("Profile still has {} TODO placeholder(s)", todos.len());
        }

        Ok(LoadedProfile {
            profile,
            todos,
            loaded_at: Utc::now(),
            modified,
        })
    }
}
