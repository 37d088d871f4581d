//! Edit-endpoint models.
//!
//! Models for the `/v1/edits` endpoint, which rewrites an input text
//! according to an instruction instead of continuing it.

use std::fmt;

/// Exhaustive list of edit models in this catalog snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditModel {
    /// Davinci-class model tuned for natural-language edits.
    TextDavinciEdit001,
    /// Davinci-class model tuned for code edits.
    CodeDavinciEdit001,
}

impl EditModel {
    /// Every member of the family, in declaration order.
    pub const ALL: &'static [Self] = &[Self::TextDavinciEdit001, Self::CodeDavinciEdit001];

    /// The identifier string the API expects for this member.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TextDavinciEdit001 => "text-davinci-edit-001",
            Self::CodeDavinciEdit001 => "code-davinci-edit-001",
        }
    }
}

impl fmt::Display for EditModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
