//! Wire-format helpers.

use serde::{Deserialize, Deserializer};

/// A list response as the backend sends it.
///
/// List endpoints answer either with a bare JSON array or with a paginated
/// envelope holding the items under `results`. Both collapse into a `Vec<T>`
/// at the client boundary so nothing downstream branches on the shape.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Bare(Vec<T>),
    Paginated {
        #[serde(default = "Vec::new")]
        results: Vec<T>,
    },
}

impl<T> ListEnvelope<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Bare(items) => items,
            Self::Paginated { results } => results,
        }
    }
}

impl<T> From<ListEnvelope<T>> for Vec<T> {
    fn from(envelope: ListEnvelope<T>) -> Self {
        envelope.into_vec()
    }
}

/// Deserializes a value that may arrive as a JSON number or a numeric string.
///
/// Weights and grades come back as strings from some serializers (`"10"`) and as
/// numbers from others.
pub fn deserialize_lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumOrString {
        Num(u32),
        Str(String),
    }

    match NumOrString::deserialize(deserializer)? {
        NumOrString::Num(n) => Ok(n),
        NumOrString::Str(s) if s.trim().is_empty() => Ok(0),
        NumOrString::Str(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}
