//! Codex code-generation models.
//!
//! The Codex line targets the `/v1/completions` endpoint with code-heavy
//! training data.  OpenAI has folded code generation into the chat line, so
//! this family only ever shrinks relative to the others; its members stay in
//! the catalog so existing selectors keep resolving.

use std::fmt;

/// Exhaustive list of Codex models in this catalog snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeModel {
    /// Most capable Codex model, 8,001-token context.  Data up to Jun 2021.
    /// Deprecated: the service now routes code work to the chat line.
    CodeDavinci002,
    /// Fast Codex model, 2,048-token context.  Almost as capable as
    /// `code-davinci-002` on everyday completion at noticeably lower latency.
    /// Deprecated: the service now routes code work to the chat line.
    CodeCushman001,
}

impl CodeModel {
    /// Every member of the family, in declaration order.
    pub const ALL: &'static [Self] = &[Self::CodeDavinci002, Self::CodeCushman001];

    /// The identifier string the API expects for this member.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CodeDavinci002 => "code-davinci-002",
            Self::CodeCushman001 => "code-cushman-001",
        }
    }
}

impl fmt::Display for CodeModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
