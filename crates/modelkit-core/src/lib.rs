//! Core of the **modelkit** workspace: the OpenAI model catalog.
//!
//! One closed, string-backed enum per capability family, a [`model::Model`]
//! sum type tying them together with a `Custom` escape hatch, and a total
//! resolution from any selector to the wire-format identifier string.  The
//! catalog is pure reference data: no I/O, no state, no failure modes, safe
//! to share across threads without coordination.
//!
//! The catalog only ever grows.  Deprecated members stay so that downstream
//! code keeps compiling; whether the service still serves an identifier is
//! the transport layer's problem, not ours.

pub mod chat;
pub mod code;
pub mod completion;
pub mod edit;
pub mod embedding;
pub mod model;
pub mod moderation;

#[cfg(feature = "serde")]
mod serde_impl;

pub use chat::ChatModel;
pub use code::CodeModel;
pub use completion::CompletionModel;
pub use edit::EditModel;
pub use embedding::EmbeddingModel;
pub use model::Model;
pub use moderation::ModerationModel;
