//! Cross-reference links from parameter types to their generated pages.

use crate::catalog::Catalog;
use crate::config::GeneratorConfig;
use crate::model::{MemberDoc, TypeRef};
use std::path::Path;

/// Builds published URLs for catalog entries.
#[derive(Debug, Clone)]
pub struct Linker {
    base_url: String,
    doc_extension: String,
    page_extension: String,
    docs_dir: Option<String>,
}

impl Linker {
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            doc_extension: config.layout.doc_extension.clone(),
            page_extension: config.layout.page_extension.clone(),
            docs_dir: config.docs_dir_name().map(str::to_string),
        }
    }

    /// Web path of a page: forward slashes, no docs-directory prefix, hosted
    /// extension. `docs\Components\Projectile.md` → `Components/Projectile.html`.
    pub fn web_path(&self, output_path: &Path) -> String {
        let mut path = output_path.to_string_lossy().replace('\\', "/");

        if let Some(docs) = self.docs_dir.as_deref() {
            let marker = format!("{docs}/");
            if let Some(at) = path.find(&marker) {
                if at == 0 || path[..at].ends_with('/') {
                    path = path[at + marker.len()..].to_string();
                }
            }
        }

        let mut path = path.trim_start_matches("./").trim_start_matches('/').to_string();

        let doc_suffix = format!(".{}", self.doc_extension);
        if let Some(stem) = path.strip_suffix(&doc_suffix) {
            path = format!("{stem}.{}", self.page_extension);
        }
        path
    }

    pub fn page_url(&self, output_path: &Path) -> String {
        format!("{}/{}", self.base_url, self.web_path(output_path))
    }

    /// Link to the page of `ty`, if that type is documented in this run.
    pub fn resolve(&self, ty: &TypeRef, catalog: &Catalog) -> Option<String> {
        catalog
            .find(&ty.full_name)
            .map(|entry| self.page_url(&entry.output_path))
    }

    /// Resolve links for every parameter of every member.
    pub fn link_members(&self, members: &mut [MemberDoc], catalog: &Catalog) {
        for param in members.iter_mut().flat_map(|m| m.params.iter_mut()) {
            param.link = self.resolve(&param.ty, catalog);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DocumentedType, MemberKind, ParamDoc, TypeId};
    use std::path::PathBuf;

    fn linker() -> Linker {
        Linker::new(&GeneratorConfig::new(
            "Source",
            "Game.Source",
            "/repo/docs",
            "https://example.github.io/Game/",
        ))
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![DocumentedType {
            id: TypeId::from("Game.Source.Components.Collider2D"),
            name: "Collider2D".to_string(),
            source_path: PathBuf::from("Source/Components/Collider2D.cs"),
            output_path: PathBuf::from("Components/Collider2D.md"),
        }])
    }

    #[test]
    fn web_path_variants() {
        let l = linker();
        assert_eq!(l.web_path(Path::new("Components/Collider2D.md")), "Components/Collider2D.html");
        assert_eq!(l.web_path(Path::new("docs\\Core\\Engine.md")), "Core/Engine.html");
        assert_eq!(l.web_path(Path::new("./Player.md")), "Player.html");
        assert_eq!(l.web_path(Path::new("mydocs/Player.md")), "mydocs/Player.html");
    }

    #[test]
    fn single_slash_between_base_and_path() {
        assert_eq!(
            linker().page_url(Path::new("Core/Engine.md")),
            "https://example.github.io/Game/Core/Engine.html"
        );
    }

    #[test]
    fn documented_type_gets_a_link() {
        let ty = TypeRef::new("Collider2D", "Game.Source.Components.Collider2D");
        assert_eq!(
            linker().resolve(&ty, &catalog()).as_deref(),
            Some("https://example.github.io/Game/Components/Collider2D.html")
        );
    }

    #[test]
    fn primitive_gets_none() {
        assert!(linker().resolve(&TypeRef::simple("int"), &catalog()).is_none());
        // Same display name, different identity.
        let other = TypeRef::new("Collider2D", "Physics.Collider2D");
        assert!(linker().resolve(&other, &catalog()).is_none());
    }

    #[test]
    fn links_every_param() {
        let mut members = vec![MemberDoc {
            kind: MemberKind::Method,
            title: "Hit".to_string(),
            signature: "public void Hit(Collider2D other, int damage)".to_string(),
            summary: String::new(),
            params: vec![
                ParamDoc::new(
                    "other",
                    TypeRef::new("Collider2D", "Game.Source.Components.Collider2D"),
                ),
                ParamDoc::new("damage", TypeRef::simple("int")),
            ],
        }];
        linker().link_members(&mut members, &catalog());
        assert!(members[0].params[0].link.is_some());
        assert!(members[0].params[1].link.is_none());
    }
}
