use super::rules::RULES;
use crate::rmd::token::InlineKind;

/// Rewrites inline markup into HTML fragments.
///
/// Holds only the set of enabled kinds, so it is cheap to clone and safe to share between threads.
/// Enabled rules always run in the fixed order of [InlineKind::ALL], whatever order they were
/// given in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineFormatter {
    enabled: Vec<InlineKind>,
}

impl InlineFormatter {
    pub fn new(kinds: &[InlineKind]) -> Self {
        let mut enabled = kinds.to_vec();
        enabled.sort();
        enabled.dedup();
        Self { enabled }
    }

    /// A formatter that applies nothing.
    pub fn disabled() -> Self {
        Self {
            enabled: Vec::new(),
        }
    }

    pub fn enables(&self, kind: InlineKind) -> bool {
        self.enabled.binary_search(&kind).is_ok()
    }

    pub fn format(&self, text: &str) -> String {
        let mut out = text.to_string();
        if self.enabled.is_empty() {
            return out;
        }
        for rule in RULES.iter().filter(|rule| self.enables(rule.kind)) {
            out = rule.apply(&out);
        }
        out
    }
}

impl Default for InlineFormatter {
    fn default() -> Self {
        Self::new(&InlineKind::ALL)
    }
}

/// Format `text` with every inline rule enabled.
pub fn format_inline(text: &str) -> String {
    InlineFormatter::default().format(text)
}
