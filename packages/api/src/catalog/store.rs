use serde::Deserialize;
use tokio::sync::RwLock;

use crate::error::CatalogError;
use crate::models::{Creation, UserInfo};

/// On-disk seed shape: `{ "users": [...], "creations": [...] }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSeed {
    #[serde(default)]
    pub users: Vec<UserInfo>,
    #[serde(default)]
    pub creations: Vec<Creation>,
}

#[derive(Debug, Default)]
struct Inner {
    users: Vec<UserInfo>,
    creations: Vec<Creation>,
}

/// In-memory users and creations, in seed order.
#[derive(Debug, Default)]
pub struct Catalog {
    inner: RwLock<Inner>,
}

impl Catalog {
    pub fn from_seed(seed: CatalogSeed) -> Self {
        Self {
            inner: RwLock::new(Inner {
                users: seed.users,
                creations: seed.creations,
            }),
        }
    }

    /// Read and parse a JSON seed file.
    pub async fn load(path: &str) -> Result<Self, CatalogError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| CatalogError::SeedIo {
                path: path.to_string(),
                source,
            })?;
        let seed: CatalogSeed =
            serde_json::from_slice(&bytes).map_err(|source| CatalogError::SeedParse {
                path: path.to_string(),
                source,
            })?;
        Ok(Self::from_seed(seed))
    }

    pub async fn user_count(&self) -> usize {
        self.inner.read().await.users.len()
    }

    pub async fn user(&self, id: &str) -> Option<UserInfo> {
        self.inner
            .read()
            .await
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
    }

    pub async fn all_users(&self) -> Vec<UserInfo> {
        self.inner.read().await.users.clone()
    }

    /// Creations carrying the editorial `picked` flag.
    pub async fn picked_creations(&self) -> Vec<Creation> {
        self.inner
            .read()
            .await
            .creations
            .iter()
            .filter(|c| c.picked)
            .cloned()
            .collect()
    }

    pub async fn creations_for(&self, owner_id: &str) -> Vec<Creation> {
        self.inner
            .read()
            .await
            .creations
            .iter()
            .filter(|c| c.owner_id == owner_id)
            .cloned()
            .collect()
    }

    /// Clear the `picked` flag. Un-picking an already unpicked creation is a no-op.
    pub async fn unpick(&self, id: &str) -> Result<Creation, CatalogError> {
        let mut inner = self.inner.write().await;
        let creation = inner
            .creations
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| CatalogError::UnknownCreation(id.to_string()))?;
        creation.picked = false;
        Ok(creation.clone())
    }
}
