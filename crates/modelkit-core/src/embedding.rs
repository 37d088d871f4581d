//! Embedding models.
//!
//! Models for the `/v1/embeddings` endpoint, mapping text to vectors for
//! search, clustering and classification.

use std::fmt;

/// Exhaustive list of embedding models in this catalog snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmbeddingModel {
    /// Second-generation embedding model, 1,536 dimensions, 8,191-token
    /// input.  Outperforms every first-generation model at a fraction of the
    /// price; the default choice for new projects.
    TextEmbeddingAda002,
    /// First-generation document-search embedding, 1,024 dimensions.
    /// Deprecated: use [`EmbeddingModel::TextEmbeddingAda002`].
    TextSearchAdaDoc001,
}

impl EmbeddingModel {
    /// Every member of the family, in declaration order.
    pub const ALL: &'static [Self] = &[Self::TextEmbeddingAda002, Self::TextSearchAdaDoc001];

    /// The identifier string the API expects for this member.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TextEmbeddingAda002 => "text-embedding-ada-002",
            Self::TextSearchAdaDoc001 => "text-search-ada-doc-001",
        }
    }
}

impl fmt::Display for EmbeddingModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
