//! Inline substitution rules
//!
//!     Each rule is a regex over the raw text plus an HTML replacement template. A match runs from
//!     the first opening delimiter to the next closing delimiter of the same kind; nesting is not
//!     tracked. Delimiters with no partner never match and stay in the text as literal characters.
//!
//!     Underscore forms carry a word-boundary guard: the delimiters must not touch a letter or digit
//!     on the outside, so identifiers such as `snake_case_name` are left alone.

use crate::rmd::token::InlineKind;
use once_cell::sync::Lazy;
use regex::Regex;

/// Where a match may sit relative to the surrounding text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Boundary {
    Any,
    /// The characters just outside the match must not be alphanumeric.
    NonWord,
}

/// A single pattern substitution.
#[derive(Debug)]
pub(crate) struct InlineRule {
    pub kind: InlineKind,
    pattern: Regex,
    replacement: &'static str,
    boundary: Boundary,
}

impl InlineRule {
    fn new(
        kind: InlineKind,
        pattern: &str,
        replacement: &'static str,
        boundary: Boundary,
    ) -> Self {
        Self {
            kind,
            pattern: Regex::new(pattern).unwrap(),
            replacement,
            boundary,
        }
    }

    /// Replace every non-overlapping match, scanning left to right.
    pub fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut copied = 0;
        let mut at = 0;

        while at <= text.len() {
            let Some(caps) = self.pattern.captures_at(text, at) else {
                break;
            };
            let Some(whole) = caps.get(0) else {
                break;
            };

            if !self.fits_boundary(text, whole.start(), whole.end()) {
                // Retry from the next character; the opening delimiter stays literal.
                at = next_char_boundary(text, whole.start());
                continue;
            }

            out.push_str(&text[copied..whole.start()]);
            caps.expand(self.replacement, &mut out);
            copied = whole.end();
            at = whole.end();
        }

        out.push_str(&text[copied..]);
        out
    }

    fn fits_boundary(&self, text: &str, start: usize, end: usize) -> bool {
        match self.boundary {
            Boundary::Any => true,
            Boundary::NonWord => {
                let before = text[..start].chars().next_back();
                let after = text[end..].chars().next();
                !is_word(before) && !is_word(after)
            }
        }
    }
}

fn is_word(ch: Option<char>) -> bool {
    ch.map(|c| c.is_alphanumeric()).unwrap_or(false)
}

fn next_char_boundary(text: &str, from: usize) -> usize {
    text[from..]
        .chars()
        .next()
        .map(|c| from + c.len_utf8())
        .unwrap_or(text.len() + 1)
}

/// All rules in application order. Several rules may share a kind.
pub(crate) static RULES: Lazy<Vec<InlineRule>> = Lazy::new(|| {
    vec![
        InlineRule::new(
            InlineKind::Strong,
            r"\*\*(.+?)\*\*",
            r#"<span style="font-weight: bold">${1}</span>"#,
            Boundary::Any,
        ),
        InlineRule::new(
            InlineKind::Strong,
            r"__(.+?)__",
            r#"<span style="font-weight: bold">${1}</span>"#,
            Boundary::NonWord,
        ),
        InlineRule::new(
            InlineKind::Emphasis,
            r"\*([^*]+?)\*",
            r#"<span style="font-style: italic">${1}</span>"#,
            Boundary::Any,
        ),
        InlineRule::new(
            InlineKind::Emphasis,
            r"_([^_]+?)_",
            r#"<span style="font-style: italic">${1}</span>"#,
            Boundary::NonWord,
        ),
        InlineRule::new(
            InlineKind::Superscript,
            r"\^([^\^]+?)\^",
            "<sup>${1}</sup>",
            Boundary::Any,
        ),
        InlineRule::new(
            InlineKind::Subscript,
            r"~([^~]+?)~",
            "<sub>${1}</sub>",
            Boundary::Any,
        ),
        InlineRule::new(
            InlineKind::Code,
            r"`([^`]+?)`",
            "<code>${1}</code>",
            Boundary::Any,
        ),
        InlineRule::new(
            InlineKind::Image,
            r"!\[([^\]]*)\]\(([^)]*)\)",
            r#"<img src="${2}" alt="${1}" />"#,
            Boundary::Any,
        ),
        InlineRule::new(
            InlineKind::Link,
            r"\[([^\]]*)\]\(([^)]*)\)",
            r#"<a href="${2}">${1}</a>"#,
            Boundary::Any,
        ),
        InlineRule::new(
            InlineKind::Math,
            r"\$([^$]+?)\$",
            r#"<span class="math inline">\(${1}\)</span>"#,
            Boundary::Any,
        ),
    ]
});
