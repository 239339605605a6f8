//! One full generation run.
//!
//! A run discovers the catalog once, then handles each catalog entry in order:
//! read source → extract members → mine comments → link parameters → render →
//! write. Every entry is attempted exactly once. A failing entry is logged and
//! recorded in the [`RunReport`]; it never stops the entries after it.

use crate::catalog::Catalog;
use crate::config::GeneratorConfig;
use crate::discover;
use crate::error::{Error, Result};
use crate::extract::extract_members;
use crate::linker::Linker;
use crate::miner::mine_members;
use crate::model::{DocumentedType, TypeDoc, TypeId, TypeMeta};
use crate::provider::MetadataProvider;
use crate::render::{MarkdownRenderer, Renderer};
use crate::writer::write_document;
use std::fs;
use std::path::PathBuf;

/// An entry whose page could not be produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub type_id: TypeId,
    pub message: String,
}

/// Outcome of [`Generator::process`].
#[derive(Debug, Default)]
pub struct RunReport {
    /// Pages written, in catalog order.
    pub written: Vec<PathBuf>,
    pub failed: Vec<Failure>,
}

impl RunReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

pub struct Generator<'a> {
    config: &'a GeneratorConfig,
    provider: &'a dyn MetadataProvider,
    renderer: Box<dyn Renderer>,
    linker: Linker,
}

impl<'a> Generator<'a> {
    pub fn new(config: &'a GeneratorConfig, provider: &'a dyn MetadataProvider) -> Self {
        Self {
            config,
            provider,
            renderer: Box::new(
                MarkdownRenderer::new(&config.layout.code_language)
                    .with_extension(&config.layout.doc_extension),
            ),
            linker: Linker::new(config),
        }
    }

    pub fn with_renderer(mut self, renderer: Box<dyn Renderer>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Mirror the source tree into the docs root and build the catalog.
    pub fn discover(&self) -> Catalog {
        let mirrored = discover::mirror_tree(self.config);
        tracing::debug!("mirrored {} directories", mirrored);
        discover::discover_types(self.config, self.provider)
    }

    /// Discover, then write every page.
    pub fn run(&self) -> RunReport {
        let catalog = self.discover();
        self.process(&catalog)
    }

    /// Write one page per catalog entry.
    pub fn process(&self, catalog: &Catalog) -> RunReport {
        let mut report = RunReport::default();

        for entry in catalog {
            let target = self
                .config
                .docs_root
                .join(entry.output_path.with_extension(self.renderer.file_extension()));
            let outcome = self
                .document(entry, catalog)
                .and_then(|doc| write_document(&target, &self.renderer.render(&doc)));

            match outcome {
                Ok(()) => {
                    tracing::info!("wrote {}", target.display());
                    report.written.push(target);
                }
                Err(e) => {
                    tracing::error!("failed to document {}: {}", entry.id, e);
                    report.failed.push(Failure {
                        type_id: entry.id.clone(),
                        message: e.to_string(),
                    });
                }
            }
        }

        let missing = undocumented_types(self.provider, &self.config.namespace, catalog);
        if !missing.is_empty() {
            tracing::debug!(
                "{} types under {} have no source file: {}",
                missing.len(),
                self.config.namespace,
                missing
                    .iter()
                    .map(|t| t.full_name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }

        tracing::info!(
            "documented {} of {} types ({} failed)",
            report.written.len(),
            catalog.len(),
            report.failed.len()
        );
        report
    }

    /// Everything that goes on one page, before rendering.
    pub fn document(&self, entry: &DocumentedType, catalog: &Catalog) -> Result<TypeDoc> {
        let meta = self
            .provider
            .resolve(entry.id.as_str())
            .ok_or_else(|| Error::TypeNotFound {
                full_name: entry.id.to_string(),
            })?;
        // Invalid UTF-8 becomes U+FFFD.
        let bytes = fs::read(&entry.source_path).map_err(|e| Error::io(&entry.source_path, e))?;
        let source = String::from_utf8_lossy(&bytes);

        let mut members = extract_members(meta);
        mine_members(&source, &mut members, &self.config.comments);
        self.linker.link_members(&mut members, catalog);

        Ok(TypeDoc {
            name: entry.name.clone(),
            members,
        })
    }
}

/// Types the provider lists under `namespace` that have no page in `catalog`.
pub fn undocumented_types<'p>(
    provider: &'p dyn MetadataProvider,
    namespace: &str,
    catalog: &Catalog,
) -> Vec<&'p TypeMeta> {
    provider
        .types_in_namespace(namespace)
        .into_iter()
        .filter(|t| !catalog.contains(&t.full_name))
        .collect()
}
