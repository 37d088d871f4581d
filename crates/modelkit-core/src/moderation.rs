//! Content-moderation models.
//!
//! Models for the `/v1/moderations` endpoint.  Unlike the other families
//! these are rolling aliases rather than pinned snapshots; OpenAI upgrades
//! them in place and does not charge for their use.

use std::fmt;

/// Exhaustive list of moderation models in this catalog snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModerationModel {
    /// Tracks the newest moderation model with advance notice before
    /// behaviour changes.  Classifications stay stable for longer.
    Stable,
    /// Always the newest moderation model; accuracy may shift without
    /// notice as the service upgrades it.
    Latest,
}

impl ModerationModel {
    /// Every member of the family, in declaration order.
    pub const ALL: &'static [Self] = &[Self::Stable, Self::Latest];

    /// The identifier string the API expects for this member.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stable => "text-moderation-stable",
            Self::Latest => "text-moderation-latest",
        }
    }
}

impl fmt::Display for ModerationModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
