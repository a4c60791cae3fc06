use pageable_api::{PageError, PageResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// Sort direction of a single order clause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    /// Parse a direction, ignoring case. The error carries the raw input.
    pub fn parse(value: &str) -> PageResult<Self> {
        match value.to_ascii_uppercase().as_str() {
            "ASC" => Ok(Direction::Asc),
            "DESC" => Ok(Direction::Desc),
            _ => Err(PageError::InvalidDirection(value.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }

    pub fn is_ascending(&self) -> bool {
        *self == Direction::Asc
    }

    pub fn is_descending(&self) -> bool {
        *self == Direction::Desc
    }

    pub fn reverse(&self) -> Self {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Asc => write!(f, "ASC"),
            Direction::Desc => write!(f, "DESC"),
        }
    }
}

impl FromStr for Direction {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::parse(s)
    }
}

impl Serialize for Direction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Direction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value_str = String::deserialize(deserializer)?;
        Direction::parse(&value_str).map_err(serde::de::Error::custom)
    }
}
