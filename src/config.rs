//! Generator configuration, usually read from `autodoc.toml`.
//!
//! ```toml
//! source_root = "Source"
//! namespace = "Game.Source"
//! docs_root = "docs"
//! base_url = "https://example.github.io/Game/"
//! metadata = "types.json"
//!
//! [layout]
//! skip_dirs = ["obj", "bin", ".vs", ".git", "docs"]
//! ```

use crate::error::{Error, Result};
use crate::miner::CommentSyntax;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file name looked up by the CLI.
pub const CONFIG_FILE: &str = "autodoc.toml";

/// Directories that are never walked nor mirrored.
const DEFAULT_SKIP_DIRS: &[&str] = &["obj", "bin", ".vs", ".git", "docs"];

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    pub source_root: PathBuf,
    /// Root namespace prepended to relative directories when resolving types.
    pub namespace: String,
    pub docs_root: PathBuf,
    /// Where the generated pages are published; prefix of cross-reference links.
    pub base_url: String,
    /// Metadata manifest; only the CLI reads it.
    #[serde(default)]
    pub metadata: Option<PathBuf>,
    #[serde(default)]
    pub layout: Layout,
    #[serde(default)]
    pub comments: CommentSyntax,
}

/// File naming and tree-walking rules.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub source_extension: String,
    pub doc_extension: String,
    /// Extension of the hosted pages that links point at.
    pub page_extension: String,
    /// Info string of the fenced signature blocks.
    pub code_language: String,
    pub skip_dirs: Vec<String>,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            source_extension: "cs".to_string(),
            doc_extension: "md".to_string(),
            page_extension: "html".to_string(),
            code_language: "csharp".to_string(),
            skip_dirs: DEFAULT_SKIP_DIRS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl GeneratorConfig {
    pub fn new(
        source_root: impl Into<PathBuf>,
        namespace: impl Into<String>,
        docs_root: impl Into<PathBuf>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            source_root: source_root.into(),
            namespace: namespace.into(),
            docs_root: docs_root.into(),
            base_url: base_url.into(),
            metadata: None,
            layout: Layout::default(),
            comments: CommentSyntax::default(),
        }
    }

    /// Parse a config file. Relative paths inside it are taken relative to the
    /// file's own directory.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let mut config = Self::from_toml_str(&text, path)?;
        if let Some(base) = path.parent() {
            config.rebase(base);
        }
        Ok(config)
    }

    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|source| Error::ConfigParse {
            path: origin.to_path_buf(),
            source,
        })
    }

    fn rebase(&mut self, base: &Path) {
        let rebase = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        rebase(&mut self.source_root);
        rebase(&mut self.docs_root);
        if let Some(metadata) = self.metadata.as_mut() {
            rebase(metadata);
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.namespace.trim().is_empty() {
            return Err(Error::config("namespace must not be empty"));
        }
        let layout = &self.layout;
        for (key, value) in [
            ("layout.source_extension", &layout.source_extension),
            ("layout.doc_extension", &layout.doc_extension),
            ("layout.page_extension", &layout.page_extension),
        ] {
            if value.is_empty() || value.starts_with('.') {
                return Err(Error::config(format!(
                    "{key} must be a bare extension like \"md\", got {value:?}"
                )));
            }
        }
        if self.comments.summary_open.is_empty() || self.comments.summary_close.is_empty() {
            return Err(Error::config("summary markers must not be empty"));
        }
        Ok(())
    }

    /// Name of the docs directory itself, which is never documented.
    pub fn docs_dir_name(&self) -> Option<&str> {
        self.docs_root.file_name().and_then(|n| n.to_str())
    }

    /// Whether a source directory with this name is left out of the walk.
    pub fn should_skip_dir(&self, name: &str) -> bool {
        self.layout.skip_dirs.iter().any(|s| s == name) || self.docs_dir_name() == Some(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
source_root = "Source"
namespace = "Game.Source"
docs_root = "site"
base_url = "https://example.github.io/Game/"
"#;

    #[test]
    fn defaults_fill_optional_tables() {
        let config = GeneratorConfig::from_toml_str(MINIMAL, Path::new("autodoc.toml")).unwrap();
        assert_eq!(config.layout, Layout::default());
        assert_eq!(config.comments, CommentSyntax::default());
        assert!(config.metadata.is_none());
        config.validate().unwrap();
    }

    #[test]
    fn layout_overrides() {
        let text = format!(
            "{MINIMAL}\n\
             [layout]\nsource_extension = \"cpp\"\nskip_dirs = [\"build\"]\n\n\
             [comments]\nleader = \"//!\"\n"
        );
        let config = GeneratorConfig::from_toml_str(&text, Path::new("autodoc.toml")).unwrap();
        assert_eq!(config.layout.source_extension, "cpp");
        assert_eq!(config.layout.doc_extension, "md");
        assert_eq!(config.comments.leader, "//!");
        assert_eq!(config.comments.summary_open, "<summary>");
        assert!(config.should_skip_dir("build"));
        assert!(!config.should_skip_dir("obj"));
    }

    #[test]
    fn docs_dir_is_always_skipped() {
        let config = GeneratorConfig::from_toml_str(MINIMAL, Path::new("autodoc.toml")).unwrap();
        assert!(config.should_skip_dir("site"));
        assert!(config.should_skip_dir(".git"));
        assert!(!config.should_skip_dir("Components"));
    }

    #[test]
    fn load_rebases_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, format!("{MINIMAL}metadata = \"types.json\"\n")).unwrap();

        let config = GeneratorConfig::load(&path).unwrap();
        assert_eq!(config.source_root, dir.path().join("Source"));
        assert_eq!(config.docs_root, dir.path().join("site"));
        assert_eq!(config.metadata, Some(dir.path().join("types.json")));
    }

    #[test]
    fn missing_key_is_a_parse_error() {
        let err = GeneratorConfig::from_toml_str("namespace = \"X\"", Path::new("bad.toml"))
            .unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }

    #[test]
    fn validate_rejects_dotted_extension() {
        let mut config = GeneratorConfig::new("src", "Game", "docs", "https://x/");
        config.layout.doc_extension = ".md".to_string();
        assert!(config.validate().is_err());

        let config = GeneratorConfig::new("src", "  ", "docs", "https://x/");
        assert!(matches!(config.validate(), Err(Error::Config { .. })));
    }
}
