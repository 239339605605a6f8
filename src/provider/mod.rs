//! Metadata providers: where type structure comes from.
//!
//! The generator never inspects code itself. It asks a provider to resolve
//! fully-qualified names to [`TypeMeta`], which carries the fields, properties
//! and methods of the type.

pub mod manifest;

pub use manifest::ManifestProvider;

use crate::model::TypeMeta;

/// Source of structural type metadata.
pub trait MetadataProvider {
    /// Every type the provider knows about, in enumeration order.
    fn types(&self) -> Vec<&TypeMeta>;

    /// Resolve a fully-qualified name such as `Game.Source.Components.Collider2D`.
    fn resolve(&self, full_name: &str) -> Option<&TypeMeta>;

    /// Types whose full name sits under `namespace`.
    fn types_in_namespace(&self, namespace: &str) -> Vec<&TypeMeta> {
        let prefix = format!("{namespace}.");
        self.types()
            .into_iter()
            .filter(|t| t.full_name.as_str().starts_with(&prefix))
            .collect()
    }
}
