//! Serde support for [`Model`], behind the `serde` feature.
//!
//! On the wire a model selector is nothing but its identifier string—the
//! shape of the `model` field in every OpenAI request body—so both impls go
//! through [`Model::id`] and [`Model::from_id`] rather than any structural
//! enum representation.  Unknown identifiers deserialize into
//! [`Model::Custom`], never into an error.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::model::Model;

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.id())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ModelVisitor;

        impl<'de> Visitor<'de> for ModelVisitor {
            type Value = Model;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a model identifier string")
            }

            fn visit_str<E>(self, value: &str) -> Result<Model, E>
            where
                E: de::Error,
            {
                Ok(Model::from_id(value.to_owned()))
            }

            fn visit_string<E>(self, value: String) -> Result<Model, E>
            where
                E: de::Error,
            {
                Ok(Model::from_id(value))
            }
        }

        deserializer.deserialize_str(ModelVisitor)
    }
}
