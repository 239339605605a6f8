//! autodoc: markdown reference pages from type metadata and doc comments.
//!
//! Structure comes from a [`MetadataProvider`]; prose comes from the source
//! files themselves, mined with a line-proximity heuristic. The output is a
//! docs tree that mirrors the source tree, one page per type, with parameter
//! types linked to their own pages.
//!
//! ```no_run
//! use autodoc::{Generator, GeneratorConfig, ManifestProvider};
//! use std::path::Path;
//!
//! let config = GeneratorConfig::load(Path::new("autodoc.toml"))?;
//! let provider = ManifestProvider::load(Path::new("types.json"))?;
//! let report = Generator::new(&config, &provider).run();
//! println!("{} pages written", report.written.len());
//! # Ok::<(), autodoc::Error>(())
//! ```

pub mod catalog;
pub mod config;
pub mod discover;
pub mod error;
pub mod extract;
pub mod generator;
pub mod linker;
pub mod miner;
pub mod model;
pub mod provider;
pub mod render;
pub mod toc;
pub mod writer;

pub use catalog::Catalog;
pub use config::GeneratorConfig;
pub use error::{Error, Result};
pub use generator::{Generator, RunReport};
pub use provider::{ManifestProvider, MetadataProvider};
