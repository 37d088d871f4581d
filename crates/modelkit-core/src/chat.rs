//! Chat-completion models — the `gpt-4` and `gpt-3.5-turbo` lines.
//!
//! Unsuffixed members (`Gpt4`, `Gpt35Turbo`, …) are *floating* aliases that
//! the service repoints to the newest snapshot; date-suffixed members pin a
//! specific snapshot and are the right choice when outputs must stay
//! reproducible across catalog updates.

use std::fmt;

/// Exhaustive list of chat models in this catalog snapshot.
///
/// Token limits, cutoffs and pricing below are descriptive guidance for
/// picking a model; nothing in this crate checks or enforces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChatModel {
    /// Most capable chat model, 8,192-token context.  Training data up to
    /// Sep 2021.  Strongest reasoning in the catalog, also the slowest and
    /// priciest of the 8K options ($0.03/$0.06 per 1K tokens).
    Gpt4,
    /// `gpt-4` snapshot from June 13, 2023, with function-calling support.
    /// Pin this for reproducible outputs on the 8K line.
    Gpt4_0613,
    /// `gpt-4` with a 32,768-token context at four times the 8K price.
    /// Reach for it only when a prompt genuinely cannot fit in 8K.
    Gpt4_32k,
    /// 32K context chat model, June 13, 2023 snapshot.
    Gpt4_32k0613,
    /// `gpt-4` snapshot from March 14, 2023.
    /// Deprecated: scheduled for retirement, use [`ChatModel::Gpt4_0613`].
    Gpt4_0314,
    /// 32K snapshot from March 14, 2023.
    /// Deprecated: scheduled for retirement, use [`ChatModel::Gpt4_32k0613`].
    Gpt4_32k0314,
    /// Fast, inexpensive workhorse for everyday chat, 4,096-token context.
    /// Training data up to Sep 2021; roughly a tenth of the `gpt-4` price.
    Gpt35Turbo,
    /// `gpt-3.5-turbo` with a 16,384-token context at twice the base price.
    Gpt35Turbo16k,
    /// `gpt-3.5-turbo` snapshot from June 13, 2023, with function calling.
    Gpt35Turbo0613,
    /// 16K snapshot from June 13, 2023.
    Gpt35Turbo16k0613,
    /// `gpt-3.5-turbo` snapshot from March 1, 2023.
    /// Deprecated: scheduled for retirement, use [`ChatModel::Gpt35Turbo0613`].
    Gpt35Turbo0301,
}

impl ChatModel {
    /// Every member of the family, in declaration order.
    pub const ALL: &'static [Self] = &[
        Self::Gpt4,
        Self::Gpt4_0613,
        Self::Gpt4_32k,
        Self::Gpt4_32k0613,
        Self::Gpt4_0314,
        Self::Gpt4_32k0314,
        Self::Gpt35Turbo,
        Self::Gpt35Turbo16k,
        Self::Gpt35Turbo0613,
        Self::Gpt35Turbo16k0613,
        Self::Gpt35Turbo0301,
    ];

    /// The identifier string the API expects for this member.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gpt4 => "gpt-4",
            Self::Gpt4_0613 => "gpt-4-0613",
            Self::Gpt4_32k => "gpt-4-32k",
            Self::Gpt4_32k0613 => "gpt-4-32k-0613",
            Self::Gpt4_0314 => "gpt-4-0314",
            Self::Gpt4_32k0314 => "gpt-4-32k-0314",
            Self::Gpt35Turbo => "gpt-3.5-turbo",
            Self::Gpt35Turbo16k => "gpt-3.5-turbo-16k",
            Self::Gpt35Turbo0613 => "gpt-3.5-turbo-0613",
            Self::Gpt35Turbo16k0613 => "gpt-3.5-turbo-16k-0613",
            Self::Gpt35Turbo0301 => "gpt-3.5-turbo-0301",
        }
    }
}

impl fmt::Display for ChatModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
