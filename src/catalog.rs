//! The catalog: every type documented in one run.

use crate::model::{DocumentedType, TypeId};
use std::collections::HashSet;

/// Deduplicated, name-ordered set of documented types.
///
/// Built once before any page is written and only read afterwards.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    entries: Vec<DocumentedType>,
}

impl Catalog {
    /// Keep the first entry of each type identity, then sort by display name.
    ///
    /// Display names are compared ordinally; equal names fall back to the full name.
    pub fn new(discovered: Vec<DocumentedType>) -> Self {
        let mut seen = HashSet::new();
        let mut entries: Vec<DocumentedType> = discovered
            .into_iter()
            .filter(|entry| seen.insert(entry.id.clone()))
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Self { entries }
    }

    pub fn find(&self, id: &TypeId) -> Option<&DocumentedType> {
        self.entries.iter().find(|entry| &entry.id == id)
    }

    pub fn contains(&self, id: &TypeId) -> bool {
        self.find(id).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DocumentedType> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a DocumentedType;
    type IntoIter = std::slice::Iter<'a, DocumentedType>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
