//! JSON metadata manifest.
//!
//! The manifest is whatever an external introspection step dumped:
//!
//! ```json
//! {
//!   "types": [
//!     {
//!       "name": "Projectile",
//!       "full_name": "Game.Source.Components.Projectile",
//!       "fields": [{ "name": "Speed", "type": "float", "visibility": "public" }],
//!       "properties": [{ "name": "Owner", "type": "Entity", "getter": "public", "setter": "private" }],
//!       "methods": [{ "name": "Hit", "visibility": "public", "parameters": [{ "name": "other", "type": "Collider2D" }] }]
//!     }
//!   ]
//! }
//! ```

use crate::error::{Error, Result};
use crate::model::TypeMeta;
use crate::provider::MetadataProvider;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
struct Manifest {
    #[serde(default)]
    types: Vec<TypeMeta>,
}

/// In-memory provider backed by a list of [`TypeMeta`].
#[derive(Debug, Default)]
pub struct ManifestProvider {
    types: Vec<TypeMeta>,
    by_name: HashMap<String, usize>,
}

impl ManifestProvider {
    /// Build a provider from already-parsed metadata.
    ///
    /// When two entries share a full name the first one wins.
    pub fn new(types: Vec<TypeMeta>) -> Self {
        let mut by_name = HashMap::new();
        for (idx, ty) in types.iter().enumerate() {
            by_name
                .entry(ty.full_name.as_str().to_string())
                .or_insert(idx);
        }
        Self { types, by_name }
    }

    pub fn from_json(json: &str, origin: &Path) -> Result<Self> {
        let manifest: Manifest = serde_json::from_str(json).map_err(|source| Error::Manifest {
            path: origin.to_path_buf(),
            source,
        })?;
        Ok(Self::new(manifest.types))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let provider = Self::from_json(&json, path)?;
        tracing::debug!(
            "loaded {} types from {}",
            provider.types.len(),
            path.display()
        );
        Ok(provider)
    }
}

impl MetadataProvider for ManifestProvider {
    fn types(&self) -> Vec<&TypeMeta> {
        self.types.iter().collect()
    }

    fn resolve(&self, full_name: &str) -> Option<&TypeMeta> {
        self.by_name.get(full_name).map(|&idx| &self.types[idx])
    }
}
