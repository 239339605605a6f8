//! Type discovery over the source tree.
//!
//! Every source file is assumed to define the type named after it, in the
//! namespace spelled by its directory:
//!
//! - `Source/Components/Projectile.cs` → `{namespace}.Components.Projectile`
//! - `Source/Engine.cs` → `{namespace}.Engine`
//!
//! Files whose name does not resolve through the metadata provider are skipped.

use crate::catalog::Catalog;
use crate::config::GeneratorConfig;
use crate::model::DocumentedType;
use crate::provider::MetadataProvider;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Walk `config.source_root`, skipping configured directories. Within a
/// directory, files come before subdirectories, each sorted by name.
fn walk(config: &GeneratorConfig) -> impl Iterator<Item = DirEntry> + '_ {
    WalkDir::new(&config.source_root)
        .min_depth(1)
        .sort_by(|a, b| {
            a.file_type()
                .is_dir()
                .cmp(&b.file_type().is_dir())
                .then_with(|| a.file_name().cmp(b.file_name()))
        })
        .into_iter()
        .filter_entry(move |e| e.depth() == 0 || !is_skipped(config, e))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                let at = e
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                tracing::warn!("failed to walk {}: {}", at, e);
                None
            }
        })
}

fn is_skipped(config: &GeneratorConfig, entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| config.should_skip_dir(name))
}

fn relative<'a>(config: &GeneratorConfig, path: &'a Path) -> &'a Path {
    path.strip_prefix(&config.source_root).unwrap_or(path)
}

/// Create one docs directory per non-skipped source directory.
///
/// Returns the number of directories mirrored. Failures are logged and the
/// walk carries on.
pub fn mirror_tree(config: &GeneratorConfig) -> usize {
    let mut mirrored = 0;
    for entry in walk(config).filter(|e| e.file_type().is_dir()) {
        let target = config.docs_root.join(relative(config, entry.path()));
        match fs::create_dir_all(&target) {
            Ok(()) => mirrored += 1,
            Err(e) => tracing::warn!("failed to create {}: {}", target.display(), e),
        }
    }
    mirrored
}

/// Type name of a source file: the part of the file name before the first
/// `.`, provided everything after it is exactly `extension`.
///
/// `Projectile.cs` → `Projectile`; `Player.Designer.cs` → none.
pub fn source_type_name<'a>(file_name: &'a str, extension: &str) -> Option<&'a str> {
    let (stem, ext) = file_name.split_once('.')?;
    (ext == extension && !stem.is_empty()).then_some(stem)
}

/// `namespace` + directory components + type name, joined with `.`.
pub fn qualified_name(namespace: &str, relative_dir: &Path, type_name: &str) -> String {
    let mut parts: Vec<String> = vec![namespace.to_string()];
    parts.extend(
        relative_dir
            .components()
            .map(|c| c.as_os_str().to_string_lossy().to_string()),
    );
    parts.push(type_name.to_string());
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join(".")
}

/// Resolve every source file to a type and build the catalog.
pub fn discover_types(config: &GeneratorConfig, provider: &dyn MetadataProvider) -> Catalog {
    let mut found = Vec::new();

    for entry in walk(config).filter(|e| e.file_type().is_file()) {
        let Some(file_name) = entry.file_name().to_str() else {
            continue;
        };
        let Some(type_name) = source_type_name(file_name, &config.layout.source_extension) else {
            continue;
        };

        let relative_dir = relative(config, entry.path())
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let full_name = qualified_name(&config.namespace, &relative_dir, type_name);

        let Some(meta) = provider.resolve(&full_name) else {
            tracing::debug!("{} does not resolve to a type, skipping", full_name);
            continue;
        };

        found.push(DocumentedType {
            id: meta.full_name.clone(),
            name: meta.name.clone(),
            source_path: entry.path().to_path_buf(),
            output_path: output_path(&relative_dir, type_name, &config.layout.doc_extension),
        });
    }

    let catalog = Catalog::new(found);
    tracing::debug!("catalog holds {} types", catalog.len());
    catalog
}

fn output_path(relative_dir: &Path, type_name: &str, extension: &str) -> PathBuf {
    relative_dir.join(format!("{type_name}.{extension}"))
}
