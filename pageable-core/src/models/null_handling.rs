use pageable_api::{PageError, PageResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// Hint for where null values go in an ordered result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NullHandling {
    /// Leave it to the data store
    #[default]
    Native,
    NullsFirst,
    NullsLast,
}

impl NullHandling {
    /// Parse a null handling hint, ignoring case. The error carries the raw input.
    pub fn parse(value: &str) -> PageResult<Self> {
        match value.to_ascii_uppercase().as_str() {
            "NATIVE" => Ok(NullHandling::Native),
            "NULLS_FIRST" => Ok(NullHandling::NullsFirst),
            "NULLS_LAST" => Ok(NullHandling::NullsLast),
            _ => Err(PageError::InvalidNullHandling(value.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NullHandling::Native => "NATIVE",
            NullHandling::NullsFirst => "NULLS_FIRST",
            NullHandling::NullsLast => "NULLS_LAST",
        }
    }

    pub fn is_native(&self) -> bool {
        *self == NullHandling::Native
    }
}

impl std::fmt::Display for NullHandling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NullHandling {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NullHandling::parse(s)
    }
}

impl Serialize for NullHandling {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for NullHandling {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value_str = String::deserialize(deserializer)?;
        NullHandling::parse(&value_str).map_err(serde::de::Error::custom)
    }
}
