//! GitHub-flavored markdown renderer.

use crate::model::*;
use crate::render::Renderer;
use crate::toc;

pub struct MarkdownRenderer {
    /// Info string of the fenced signature blocks.
    pub code_language: String,
    pub extension: String,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new("csharp")
    }
}

impl Renderer for MarkdownRenderer {
    fn render(&self, doc: &TypeDoc) -> String {
        let mut lines: Vec<String> = vec![format!("# {}", doc.name), String::new()];

        if doc.members.is_empty() {
            lines.push("_No documented members._".to_string());
            lines.push(String::new());
            return lines.join("\n");
        }

        // Overloads share a heading anchor; list them once.
        lines.push("## Index\n".to_string());
        let mut indexed: Vec<&str> = Vec::new();
        for member in &doc.members {
            if !indexed.contains(&member.title.as_str()) {
                indexed.push(&member.title);
                lines.push(toc::render_toc_item(&member.title));
            }
        }
        lines.push(String::new());

        let mut current_kind = None;
        for member in &doc.members {
            if current_kind != Some(member.kind) {
                current_kind = Some(member.kind);
                lines.push(format!("## {}\n", member.kind.heading()));
            }
            lines.push(self.render_member(member));
        }

        lines.join("\n")
    }

    fn file_extension(&self) -> &str {
        &self.extension
    }
}

impl MarkdownRenderer {
    pub fn new(code_language: impl Into<String>) -> Self {
        Self {
            code_language: code_language.into(),
            extension: "md".to_string(),
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Heading, signature block, summary and parameter list of one member.
    fn render_member(&self, member: &MemberDoc) -> String {
        let mut lines: Vec<String> = Vec::new();

        lines.push(format!("### {}\n", member.title));
        lines.push(format!("```{}", self.code_language));
        lines.push(member.signature.clone());
        lines.push("```".to_string());
        lines.push(String::new());

        if !member.summary.is_empty() {
            lines.push(member.summary.clone());
            lines.push(String::new());
        }

        if !member.params.is_empty() {
            lines.push("#### Parameters\n".to_string());
            for param in &member.params {
                lines.push(format!("* {}", render_param(param)));
            }
            lines.push(String::new());
        }

        lines.join("\n")
    }
}

/// `* **other** ([`Collider2D`](https://…/Collider2D.html)): The collider hit.`
fn render_param(param: &ParamDoc) -> String {
    let ty = match param.link.as_deref() {
        Some(link) => format!("[`{}`]({})", param.ty.name, link),
        None => format!("`{}`", param.ty.name),
    };
    if param.description.is_empty() {
        format!("**{}** ({})", param.name, ty)
    } else {
        format!("**{}** ({}): {}", param.name, ty, param.description)
    }
}
