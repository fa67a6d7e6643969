//! Serde helpers for ids, which the remote service sends as JSON strings.
//!
//! Plain integers are accepted as well so that hand-written fixtures stay
//! readable.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Raw {
    Int(u64),
    Str(String),
}

impl Raw {
    fn into_u64<E: serde::de::Error>(self) -> Result<u64, E> {
        match self {
            Raw::Int(value) => Ok(value),
            Raw::Str(text) => text
                .parse()
                .map_err(|e| E::custom(format!("invalid snowflake {text:?}: {e}"))),
        }
    }
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Raw::deserialize(deserializer)?.into_u64()
}

pub(crate) mod option {
    use super::Raw;
    use serde::{Deserialize, Deserializer};

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<Raw>::deserialize(deserializer)?
            .map(Raw::into_u64)
            .transpose()
    }
}

pub(crate) mod list {
    use super::Raw;
    use serde::{Deserialize, Deserializer};

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<Raw>::deserialize(deserializer)?
            .into_iter()
            .map(Raw::into_u64)
            .collect()
    }
}

