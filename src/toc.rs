//! GitHub-flavored markdown anchors for the member index.

/// Index entry linking to a member heading on the same page.
pub fn render_toc_item(title: &str) -> String {
    format!("* [{}](#{})", title, github_slug(title))
}

/// GitHub heading anchor slug.
///
/// - lowercase
/// - drop everything that isn't alphanumeric, `_`, a space or a hyphen
/// - spaces become hyphens
pub fn github_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        if c.is_alphanumeric() || c == '_' || c == ' ' || c == '-' {
            slug.push(c);
        }
    }
    slug.replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_simple() {
        assert_eq!(github_slug("Take Damage"), "take-damage");
    }

    #[test]
    fn slug_keeps_underscores_and_strips_punctuation() {
        assert_eq!(github_slug("_velocity"), "_velocity");
        assert_eq!(github_slug("op_Addition"), "op_addition");
        assert_eq!(github_slug("<Clone>$"), "clone");
    }

    #[test]
    fn slug_keeps_hyphens_and_digits() {
        assert_eq!(github_slug("Collider2D"), "collider2d");
        assert_eq!(github_slug("pre-init"), "pre-init");
    }

    #[test]
    fn toc_item() {
        assert_eq!(render_toc_item("TakeDamage"), "* [TakeDamage](#takedamage)");
    }

    #[test]
    fn toc_item_for_private_field() {
        assert_eq!(render_toc_item("_velocity"), "* [_velocity](#_velocity)");
    }
}
