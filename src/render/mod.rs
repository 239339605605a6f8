//! Page rendering.

pub mod markdown;

pub use markdown::MarkdownRenderer;

use crate::model::TypeDoc;

/// Turns one type's documentation into page text.
pub trait Renderer {
    fn render(&self, doc: &TypeDoc) -> String;
    /// Extension of the written pages, without the dot.
    fn file_extension(&self) -> &str;
}
