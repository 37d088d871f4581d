//! # `modelkit` – The umbrella crate
//!
//! This crate is a *one-stop import* for the workspace's model catalog:
//!
//! | Crate               | What it provides                                                      |
//! |---------------------|-----------------------------------------------------------------------|
//! | **`modelkit-core`** | Family enums, the [`Model`] selector, resolution, parsing, serde      |
//!
//! The catalog maps a closed, typed set of OpenAI model selectors onto the
//! literal identifier strings the API expects, with one escape hatch
//! ([`Model::Custom`]) for models newer than this snapshot.  It is reference
//! data only: picking a model is type-checked here, *using* it is the job of
//! whatever HTTP client you pair this with.
//!
//! ## Design philosophy
//!
//! * **Closed where it can be, open where it must be** – Every known model is
//!   an enum member so typos are compile errors; `Custom` is the single place
//!   raw strings enter, so tomorrow's model works today.
//! * **Resolution never fails** – No validation, no error type.  A retired
//!   identifier is the API server's call to reject, not ours to predict.
//! * **Metadata is documentation** – Context windows, training cutoffs and
//!   pricing live in doc comments to guide the choice of member; nothing in
//!   the crate enforces them.
//!
//! ## Quick example
//!
//! ```rust
//! use modelkit::{ChatModel, EmbeddingModel, Model};
//!
//! // Pick from the catalog...
//! let chat = Model::from(ChatModel::Gpt4);
//! assert_eq!(chat.id(), "gpt-4");
//!
//! // ...or bring your own identifier.
//! let mine = Model::custom("my-fine-tuned-model");
//! assert_eq!(mine.id(), "my-fine-tuned-model");
//!
//! // Selectors serialize as the `model` field expects (feature `serde`, on
//! // by default).
//! let body = serde_json::json!({
//!     "model": Model::from(EmbeddingModel::TextEmbeddingAda002),
//!     "input": "hello world",
//! });
//! assert_eq!(body["model"], "text-embedding-ada-002");
//! ```
//!
//! ## Crate contents
//!
//! The `pub use` below simply forwards the public API of the core crate so
//! users depend on a single crate name.
#![doc(html_root_url = "https://docs.rs/modelkit/latest")]

pub use modelkit_core::*;
