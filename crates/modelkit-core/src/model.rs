//! The [`Model`] selector — the single entry point of the catalog.
//!
//! The enum hierarchy keeps the *public* API blissfully simple: pick a
//! capability family, pick a member, and let [`Model::id`] translate the
//! selector into the literal string the OpenAI API expects.  As a consequence
//! you never have to type identifiers such as `"gpt-4-32k-0613"` in your
//! application code—unless you *want* to, in which case [`Model::custom`]
//! passes any string through untouched.
//!
//! # Adding more models
//!
//! 1. **Family enum**
//!    Add the variant to the family (`ChatModel`, `EmbeddingModel`, …) and
//!    extend its `as_str` match and `ALL` table.
//! 2. **Compile-time safety**
//!    The compiler will tell you if you forgot an `as_str` arm; the family's
//!    membership test will tell you if you forgot the `ALL` entry.
//! 3. **Never rebind**
//!    Existing members keep their identifier forever, deprecated or not.
//!    Retired identifiers are rejected by the API server, not by this crate.
//!
//! # Example
//!
//! ```rust
//! use modelkit_core::model::Model;
//! use modelkit_core::chat::ChatModel;
//!
//! assert_eq!(Model::from(ChatModel::Gpt4).id(), "gpt-4");
//! assert_eq!(Model::custom("my-fine-tuned-model").id(), "my-fine-tuned-model");
//! ```

use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::chat::ChatModel;
use crate::code::CodeModel;
use crate::completion::CompletionModel;
use crate::edit::EditModel;
use crate::embedding::EmbeddingModel;
use crate::moderation::ModerationModel;

/// Universal selector for an OpenAI model.
///
/// * The six family variants cover every model the catalog knows about.
/// * `Custom` – Any identifier not (yet) covered by a family enum.  Use this
///   for fine-tunes, beta models or anything released after this catalog
///   snapshot; the string is forwarded verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    /// Chat-completion models (`gpt-4` / `gpt-3.5-turbo` lines).
    Chat(ChatModel),
    /// GPT-3 text-completion models, base and instruct.
    Completion(CompletionModel),
    /// Codex code-generation models.
    Code(CodeModel),
    /// Edit-endpoint models.
    Edit(EditModel),
    /// Embedding models.
    Embedding(EmbeddingModel),
    /// Content-moderation models.
    Moderation(ModerationModel),
    /// Caller-supplied identifier, passed through without validation.
    Custom(Cow<'static, str>),
}

impl Model {
    /// Builds the passthrough variant from any string-ish value.
    ///
    /// The string is *not* validated or normalised: whatever goes in here is
    /// exactly what [`Model::id`] hands back, empty strings included.  If the
    /// remote service does not know the identifier, that surfaces as an API
    /// error at request time, never here.
    pub fn custom(id: impl Into<Cow<'static, str>>) -> Self {
        Model::Custom(id.into())
    }

    /// Resolves the selector to the wire-format identifier string.
    ///
    /// Total over the whole union: every catalog member yields its documented
    /// non-empty literal, and `Custom` yields the caller's string unchanged.
    /// Borrowed for every catalog member; only an owned `Custom` clones.
    pub fn id(&self) -> Cow<'static, str> {
        match self {
            Model::Chat(model) => model.as_str().into(),
            Model::Completion(model) => model.as_str().into(),
            Model::Code(model) => model.as_str().into(),
            Model::Edit(model) => model.as_str().into(),
            Model::Embedding(model) => model.as_str().into(),
            Model::Moderation(model) => model.as_str().into(),
            Model::Custom(id) => id.clone(),
        }
    }

    /// Reverse lookup: maps an identifier string back onto the catalog.
    ///
    /// Families are scanned in declaration order (chat, completion, code,
    /// edit, embedding, moderation); an identifier appearing in two families
    /// resolves to the earlier one.  Anything the catalog does not know
    /// becomes [`Model::Custom`], so the lookup never fails.
    pub fn from_id(id: impl Into<Cow<'static, str>>) -> Self {
        let id = id.into();
        for &model in ChatModel::ALL {
            if model.as_str() == id {
                return model.into();
            }
        }
        for &model in CompletionModel::ALL {
            if model.as_str() == id {
                return model.into();
            }
        }
        for &model in CodeModel::ALL {
            if model.as_str() == id {
                return model.into();
            }
        }
        for &model in EditModel::ALL {
            if model.as_str() == id {
                return model.into();
            }
        }
        for &model in EmbeddingModel::ALL {
            if model.as_str() == id {
                return model.into();
            }
        }
        for &model in ModerationModel::ALL {
            if model.as_str() == id {
                return model.into();
            }
        }
        Model::Custom(id)
    }
}

/// The catalog's recommended general-purpose default (`gpt-3.5-turbo`).
impl Default for Model {
    fn default() -> Self {
        Model::Chat(ChatModel::Gpt35Turbo)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Model::Chat(model) => f.write_str(model.as_str()),
            Model::Completion(model) => f.write_str(model.as_str()),
            Model::Code(model) => f.write_str(model.as_str()),
            Model::Edit(model) => f.write_str(model.as_str()),
            Model::Embedding(model) => f.write_str(model.as_str()),
            Model::Moderation(model) => f.write_str(model.as_str()),
            Model::Custom(id) => f.write_str(id),
        }
    }
}

impl From<ChatModel> for Model {
    fn from(val: ChatModel) -> Self {
        Model::Chat(val)
    }
}

impl From<CompletionModel> for Model {
    fn from(val: CompletionModel) -> Self {
        Model::Completion(val)
    }
}

impl From<CodeModel> for Model {
    fn from(val: CodeModel) -> Self {
        Model::Code(val)
    }
}

impl From<EditModel> for Model {
    fn from(val: EditModel) -> Self {
        Model::Edit(val)
    }
}

impl From<EmbeddingModel> for Model {
    fn from(val: EmbeddingModel) -> Self {
        Model::Embedding(val)
    }
}

impl From<ModerationModel> for Model {
    fn from(val: ModerationModel) -> Self {
        Model::Moderation(val)
    }
}

impl From<&'static str> for Model {
    fn from(id: &'static str) -> Self {
        Model::from_id(id)
    }
}

impl From<String> for Model {
    fn from(id: String) -> Self {
        Model::from_id(id)
    }
}

impl FromStr for Model {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Model::from_id(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_identifiers_map_back_to_their_family() {
        assert_eq!(Model::from_id("gpt-4"), Model::Chat(ChatModel::Gpt4));
        assert_eq!(
            Model::from_id("text-embedding-ada-002"),
            Model::Embedding(EmbeddingModel::TextEmbeddingAda002)
        );
        assert_eq!(
            Model::from_id("code-cushman-001"),
            Model::Code(CodeModel::CodeCushman001)
        );
    }

    #[test]
    fn unknown_identifiers_fall_through_to_custom() {
        assert_eq!(
            Model::from_id("my-fine-tuned-model"),
            Model::Custom("my-fine-tuned-model".into())
        );
        assert_eq!(Model::from_id(""), Model::Custom("".into()));
    }

    #[test]
    fn from_str_is_infallible() {
        let model: Model = "davinci".parse().unwrap();
        assert_eq!(model, Model::Completion(CompletionModel::Davinci));
    }

    #[test]
    fn display_matches_id() {
        let samples = [
            Model::Chat(ChatModel::Gpt4_32k0613),
            Model::Moderation(ModerationModel::Stable),
            Model::custom("ft:gpt-3.5-turbo:acme::7p4lURel"),
        ];
        for model in samples {
            assert_eq!(model.to_string(), model.id());
        }
    }

    #[test]
    fn default_is_the_cheap_chat_model() {
        assert_eq!(Model::default().id(), "gpt-3.5-turbo");
    }
}
