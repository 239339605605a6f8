//! Comment miner: recovers member descriptions from raw source lines.
//!
//! This is deliberately not a parser. A member's declaration is located by
//! matching its rendered signature against each line (whitespace and case
//! ignored), and the doc comment is recovered by scanning upward from there:
//!
//! ```text
//! /// <summary>                <- scan stops here
//! /// Adds two numbers.        <- collected
//! /// </summary>               <- summary block entered
//! /// <param name="a">First operand</param>
//! public int Add(int a, int b) <- anchor line
//! ```
//!
//! Two members with textually similar signatures (overloads in particular) can
//! anchor on the same line and end up sharing a description. Nothing tries to
//! disambiguate them.

use crate::model::MemberDoc;
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Markers of the documentation-comment convention being mined.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CommentSyntax {
    /// Comment leader stripped from collected lines.
    pub leader: String,
    pub summary_open: String,
    pub summary_close: String,
    /// Element name of parameter tags: `<param name="x">…</param>`.
    pub param_element: String,
}

impl Default for CommentSyntax {
    fn default() -> Self {
        Self {
            leader: "///".to_string(),
            summary_open: "<summary>".to_string(),
            summary_close: "</summary>".to_string(),
            param_element: "param".to_string(),
        }
    }
}

impl CommentSyntax {
    fn param_open(&self, name: &str) -> String {
        format!("<{} name=\"{}\">", self.param_element, name)
    }

    fn param_close(&self) -> String {
        format!("</{}>", self.param_element)
    }

    /// Drop surrounding whitespace and a leading comment leader.
    fn strip_leader<'a>(&self, text: &'a str) -> &'a str {
        let text = text.trim();
        text.strip_prefix(self.leader.as_str())
            .unwrap_or(text)
            .trim()
    }
}

/// Split source text into lines, dropping empty ones.
pub fn source_lines(text: &str) -> Vec<&str> {
    text.lines().filter(|line| !line.is_empty()).collect()
}

fn normalize(text: &str) -> String {
    RE_WHITESPACE.replace_all(&text.to_lowercase(), "").into_owned()
}

/// Index of the first line containing `signature`, ignoring whitespace and case.
pub fn find_anchor(lines: &[&str], signature: &str) -> Option<usize> {
    let needle = normalize(signature);
    if needle.is_empty() {
        return None;
    }
    lines.iter().position(|line| normalize(line).contains(&needle))
}

/// Summary block directly above `anchor`, or an empty string.
pub fn mine_summary(lines: &[&str], anchor: usize, syntax: &CommentSyntax) -> String {
    let open = syntax.summary_open.as_str();
    let close = syntax.summary_close.as_str();

    // Fragments in bottom-up order.
    let mut collected: Vec<&str> = Vec::new();
    let mut inside = false;

    for &line in lines[..anchor].iter().rev() {
        if !inside {
            if let Some(close_at) = line.find(close) {
                inside = true;
                let before = &line[..close_at];
                // `/// <summary>Text</summary>`
                if let Some(open_at) = before.find(open) {
                    collected.push(&before[open_at + open.len()..]);
                    break;
                }
                collected.push(before);
            } else if line.contains(open) {
                // An earlier member's block; this member has none.
                break;
            }
            continue;
        }

        if let Some(open_at) = line.find(open) {
            collected.push(&line[open_at + open.len()..]);
            break;
        }
        collected.push(line);
    }

    collected
        .iter()
        .rev()
        .map(|fragment| syntax.strip_leader(fragment))
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Description of parameter `name` above `anchor`, or an empty string.
///
/// The scan gives up at the nearest summary-open line, which bounds the
/// member's own comment block.
pub fn mine_param(lines: &[&str], anchor: usize, name: &str, syntax: &CommentSyntax) -> String {
    let tag = syntax.param_open(name);
    for &line in lines[..anchor].iter().rev() {
        if line.contains(syntax.summary_open.as_str()) {
            break;
        }
        if line.contains(&tag) {
            let text = line.replace(&tag, "").replace(&syntax.param_close(), "");
            return syntax.strip_leader(&text).to_string();
        }
    }
    String::new()
}

/// Fill the summary and parameter descriptions of `member` in place.
///
/// Returns `false` when the declaration line could not be found; the member is
/// left untouched in that case.
pub fn mine_member(lines: &[&str], member: &mut MemberDoc, syntax: &CommentSyntax) -> bool {
    let Some(anchor) = find_anchor(lines, &member.signature) else {
        return false;
    };

    member.summary = mine_summary(lines, anchor, syntax);
    for param in &mut member.params {
        param.description = mine_param(lines, anchor, &param.name, syntax);
    }
    true
}

/// Mine every member of a type from its source text.
pub fn mine_members(source: &str, members: &mut [MemberDoc], syntax: &CommentSyntax) {
    let lines = source_lines(source);
    for member in members.iter_mut() {
        if !mine_member(&lines, member, syntax) {
            tracing::debug!("no declaration found for `{}`", member.signature);
        }
    }
}
