//! Inline formatting
//!
//!     A pure text-to-text pass that rewrites recognized inline markup inside a block token's text
//!     into HTML fragments. There is no cursor state: the same input always yields the same output,
//!     and the formatter can run on any thread.
//!
//!     Rules apply one after another over the whole string, in the order listed in
//!     [InlineKind](crate::rmd::token::InlineKind). Later rules see the HTML emitted by earlier
//!     ones, so the output is not meant to be fed back in.

mod formatter;
mod rules;

pub use formatter::{format_inline, InlineFormatter};
