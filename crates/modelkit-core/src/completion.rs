//! GPT-3 text-completion models, base and instruct.
//!
//! The instruct line (`text-*-001`/`002`/`003`) follows instructions in the
//! prompt; the base line (`davinci`, `curie`, …) is raw next-token prediction
//! and the usual starting point for fine-tuning.  The whole family predates
//! the chat endpoint and is kept for code that still targets `/v1/completions`.

use std::fmt;

/// Exhaustive list of completion models in this catalog snapshot.
///
/// All members share a 2,049-token context except `text-davinci-003`/`002`
/// (4,097) and the 002-suffixed bases (16,384).  Capability and cost rise
/// from ada through babbage and curie to davinci; latency rises with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompletionModel {
    /// Most capable instruct model.  Training data up to Jun 2021.
    TextDavinci003,
    /// Predecessor of `text-davinci-003`, trained with supervised
    /// fine-tuning instead of RLHF.
    TextDavinci002,
    /// Capable yet faster and cheaper than davinci.  Data up to Oct 2019.
    TextCurie001,
    /// Straightforward tasks: classification, simple Q&A.  Very fast.
    TextBabbage001,
    /// Simplest instruct model, usually the fastest and lowest-cost option.
    TextAda001,
    /// Current davinci-class base model.  Data up to Sep 2021.
    Davinci002,
    /// Current babbage-class base model.  Data up to Sep 2021.
    Babbage002,
    /// Classic GPT-3 davinci base.
    /// Deprecated: use [`CompletionModel::Davinci002`].
    Davinci,
    /// Classic GPT-3 curie base.
    /// Deprecated: no direct replacement, see [`CompletionModel::Davinci002`].
    Curie,
    /// Classic GPT-3 babbage base.
    /// Deprecated: use [`CompletionModel::Babbage002`].
    Babbage,
    /// Classic GPT-3 ada base.
    /// Deprecated: no direct replacement, see [`CompletionModel::Babbage002`].
    Ada,
}

impl CompletionModel {
    /// Every member of the family, in declaration order.
    pub const ALL: &'static [Self] = &[
        Self::TextDavinci003,
        Self::TextDavinci002,
        Self::TextCurie001,
        Self::TextBabbage001,
        Self::TextAda001,
        Self::Davinci002,
        Self::Babbage002,
        Self::Davinci,
        Self::Curie,
        Self::Babbage,
        Self::Ada,
    ];

    /// The identifier string the API expects for this member.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TextDavinci003 => "text-davinci-003",
            Self::TextDavinci002 => "text-davinci-002",
            Self::TextCurie001 => "text-curie-001",
            Self::TextBabbage001 => "text-babbage-001",
            Self::TextAda001 => "text-ada-001",
            Self::Davinci002 => "davinci-002",
            Self::Babbage002 => "babbage-002",
            Self::Davinci => "davinci",
            Self::Curie => "curie",
            Self::Babbage => "babbage",
            Self::Ada => "ada",
        }
    }
}

impl fmt::Display for CompletionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
