//! Inline element kinds
//!
//!     Inline elements are span-based: they start and end at arbitrary positions inside the text of
//!     a block token. They are not emitted as tokens; the inline formatter rewrites each recognized
//!     span into an HTML fragment in place.
//!
//! Inline Kinds
//!
//!     In application order:
//!
//!         - Strong: **text** or __text__
//!         - Emphasis: *text* or _text_
//!         - Superscript: x^2^
//!         - Subscript: H~2~O
//!         - Code: `text`
//!         - Image: ![alt](src)
//!         - Link: [text](href)
//!         - Math: $formula$
//!
//!     The order matters. Strong runs before emphasis so that a double marker is never split by the
//!     single-marker rule, and images run before links since an image is a link with a leading `!`.

use serde::{Deserialize, Serialize};

/// The type of inline element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InlineKind {
    Strong,
    Emphasis,
    Superscript,
    Subscript,
    /// Inline code, kept literal apart from the surrounding tag.
    Code,
    Image,
    Link,
    /// `$...$`, only enabled by the CommonMark dialect.
    Math,
}

impl InlineKind {
    /// Every inline kind, in the order the formatter applies them.
    pub const ALL: [InlineKind; 8] = [
        InlineKind::Strong,
        InlineKind::Emphasis,
        InlineKind::Superscript,
        InlineKind::Subscript,
        InlineKind::Code,
        InlineKind::Image,
        InlineKind::Link,
        InlineKind::Math,
    ];
}

impl std::fmt::Display for InlineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InlineKind::Strong => write!(f, "strong"),
            InlineKind::Emphasis => write!(f, "emphasis"),
            InlineKind::Superscript => write!(f, "superscript"),
            InlineKind::Subscript => write!(f, "subscript"),
            InlineKind::Code => write!(f, "code"),
            InlineKind::Image => write!(f, "image"),
            InlineKind::Link => write!(f, "link"),
            InlineKind::Math => write!(f, "math"),
        }
    }
}
