use pageable_api::{PageError, PageResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

use super::direction::Direction;
use super::null_handling::NullHandling;

/// Token that switches on case-insensitive ordering in the textual form.
pub const IGNORE_CASE_TOKEN: &str = "ignore_case";

/// One sort clause: a property paired with a direction, a case flag and a
/// null handling hint.
///
/// The property is opaque here; nothing checks it against a schema.
/// Every mutator returns a new `Order`.
///
/// # Textual form
/// `property[,DIRECTION[,ignore_case[,NULL_HANDLING]]]`, e.g.
/// `"name,desc,ignore_case,nulls_last"`. Missing or empty slots take their
/// defaults and anything past the fourth slot is ignored.
///
/// # Example
/// ```
/// use pageable_core::models::{Direction, NullHandling, Order};
///
/// let order = Order::parse("name,desc,,nulls_first").unwrap();
/// assert_eq!(order.property(), "name");
/// assert_eq!(order.direction(), Direction::Desc);
/// assert!(!order.is_ignore_case());
/// assert_eq!(order.null_handling(), NullHandling::NullsFirst);
/// assert_eq!(order.encode(), "name,DESC,,NULLS_FIRST");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Order {
    property: String,
    direction: Direction,
    ignore_case: bool,
    null_handling: NullHandling,
}

impl Order {
    pub fn new(direction: Direction, property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            direction,
            ignore_case: false,
            null_handling: NullHandling::default(),
        }
    }

    /// Order by `property` using the default direction
    pub fn by(property: impl Into<String>) -> Self {
        Self::new(Direction::default(), property)
    }

    pub fn asc(property: impl Into<String>) -> Self {
        Self::new(Direction::Asc, property)
    }

    pub fn desc(property: impl Into<String>) -> Self {
        Self::new(Direction::Desc, property)
    }

    /// Parse the textual form of an order clause.
    ///
    /// Fails on an empty input or an empty property, and with the enumeration
    /// error when the direction or null handling slot is not recognized.
    pub fn parse(text: &str) -> PageResult<Self> {
        if text.is_empty() {
            return Err(PageError::OrderParse("cannot parse empty string".to_string()));
        }

        let mut parts = text.split(',');
        let property = parts.next().unwrap_or_default();
        let direction = match parts.next() {
            Some(value) if !value.is_empty() => Direction::parse(value)?,
            _ => Direction::default(),
        };
        let ignore_case = parts.next() == Some(IGNORE_CASE_TOKEN);
        let null_handling = match parts.next() {
            Some(value) if !value.is_empty() => NullHandling::parse(value)?,
            _ => NullHandling::default(),
        };

        if property.is_empty() {
            return Err(PageError::OrderParse(format!("empty property in {text:?}")));
        }

        Ok(Self {
            property: property.to_string(),
            direction,
            ignore_case,
            null_handling,
        })
    }

    /// Render the compact textual form.
    ///
    /// Trailing slots holding their default are omitted, but once a later slot
    /// is set every slot before it is written out.
    pub fn encode(&self) -> String {
        let null_handling_set = !self.null_handling.is_native();
        let ignore_case_set = self.ignore_case || null_handling_set;
        let direction_set = self.direction != Direction::Asc || ignore_case_set;

        let mut result = self.property.clone();
        if direction_set {
            result.push(',');
            result.push_str(self.direction.as_str());
        }
        if ignore_case_set {
            result.push(',');
            if self.ignore_case {
                result.push_str(IGNORE_CASE_TOKEN);
            }
        }
        if null_handling_set {
            result.push(',');
            result.push_str(self.null_handling.as_str());
        }
        result
    }

    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_ascending(&self) -> bool {
        self.direction.is_ascending()
    }

    pub fn is_descending(&self) -> bool {
        self.direction.is_descending()
    }

    pub fn is_ignore_case(&self) -> bool {
        self.ignore_case
    }

    pub fn null_handling(&self) -> NullHandling {
        self.null_handling
    }

    pub fn with_direction(&self, direction: Direction) -> Self {
        Self {
            direction,
            ..self.clone()
        }
    }

    pub fn reverse(&self) -> Self {
        self.with_direction(self.direction.reverse())
    }

    pub fn with_property(&self, property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            ..self.clone()
        }
    }

    pub fn ignore_case(&self) -> Self {
        Self {
            ignore_case: true,
            ..self.clone()
        }
    }

    pub fn with_null_handling(&self, null_handling: NullHandling) -> Self {
        Self {
            null_handling,
            ..self.clone()
        }
    }

    pub fn nulls_first(&self) -> Self {
        self.with_null_handling(NullHandling::NullsFirst)
    }

    pub fn nulls_last(&self) -> Self {
        self.with_null_handling(NullHandling::NullsLast)
    }

    pub fn nulls_native(&self) -> Self {
        self.with_null_handling(NullHandling::Native)
    }
}

/// Diagnostic form, e.g. `name: ASC, NULLS_LAST, ignoring case`
impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.property, self.direction)?;
        if !self.null_handling.is_native() {
            write!(f, ", {}", self.null_handling)?;
        }
        if self.ignore_case {
            write!(f, ", ignoring case")?;
        }
        Ok(())
    }
}

impl FromStr for Order {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Order::parse(s)
    }
}

impl Serialize for Order {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for Order {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value_str = String::deserialize(deserializer)?;
        Order::parse(&value_str).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_constructors() {
        let by = Order::by("name");
        assert_eq!(by.property(), "name");
        assert_eq!(by.direction(), Direction::Asc);
        assert!(!by.is_ignore_case());
        assert_eq!(by.null_handling(), NullHandling::Native);

        assert!(Order::asc("name").is_ascending());
        assert!(Order::desc("name").is_descending());
        assert_eq!(Order::new(Direction::Desc, "age"), Order::desc("age"));
    }

    #[rstest]
    #[case("id", Order::by("id"))]
    #[case("id,desc", Order::desc("id"))]
    #[case("id,DESC", Order::desc("id"))]
    #[case("id,asc,ignore_case", Order::asc("id").ignore_case())]
    #[case("id,asc,,nulls_first", Order::asc("id").nulls_first())]
    #[case("id,asc,true,nulls_first", Order::asc("id").nulls_first())]
    #[case("id,,ignore_case", Order::asc("id").ignore_case())]
    #[case("id,asc,ignore_case,nulls_last,foo", Order::asc("id").ignore_case().nulls_last())]
    fn test_parse(#[case] text: &str, #[case] expected: Order) {
        assert_eq!(Order::parse(text).unwrap(), expected);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(Order::parse(""), Err(PageError::OrderParse(_))));
    }

    #[test]
    fn test_parse_empty_property() {
        assert!(matches!(Order::parse(",desc"), Err(PageError::OrderParse(_))));
    }

    #[test]
    fn test_parse_invalid_slots() {
        assert!(matches!(
            Order::parse(",invalid"),
            Err(PageError::InvalidDirection(raw)) if raw == "invalid"
        ));
        assert!(matches!(
            Order::parse("id,asc,ignore_case,sometimes"),
            Err(PageError::InvalidNullHandling(raw)) if raw == "sometimes"
        ));
    }

    #[rstest]
    #[case(Order::by("name"), "name")]
    #[case(Order::desc("name"), "name,DESC")]
    #[case(Order::asc("name").ignore_case(), "name,ASC,ignore_case")]
    #[case(Order::asc("name").nulls_last(), "name,ASC,,NULLS_LAST")]
    #[case(Order::desc("name").ignore_case().nulls_first(), "name,DESC,ignore_case,NULLS_FIRST")]
    fn test_encode_is_minimal(#[case] order: Order, #[case] expected: &str) {
        assert_eq!(order.encode(), expected);
    }

    #[test]
    fn test_full_form_is_stable() {
        let canonical = "name,ASC,ignore_case,NULLS_FIRST";
        assert_eq!(Order::parse(canonical).unwrap().encode(), canonical);

        // Lower-case input is written back with upper-case enumeration slots,
        // the wire form consumers already receive, so it is not byte-identical.
        let lower = "name,asc,ignore_case,nulls_first";
        let encoded = Order::parse(lower).unwrap().encode();
        assert_eq!(encoded, "name,ASC,ignore_case,NULLS_FIRST");
        assert!(encoded.eq_ignore_ascii_case(lower));
        assert_eq!(Order::parse(&encoded).unwrap(), Order::parse(lower).unwrap());
    }

    #[test]
    fn test_property_only_is_stable() {
        assert_eq!(Order::parse("name").unwrap().encode(), "name");
    }

    #[test]
    fn test_mutators_leave_original_untouched() {
        let original = Order::asc("name");

        let reversed = original.reverse();
        assert_eq!(reversed.direction(), Direction::Desc);
        assert_eq!(reversed.property(), "name");

        let renamed = original.with_property("age");
        assert_eq!(renamed.property(), "age");
        assert_eq!(renamed.direction(), original.direction());

        let with_direction = original.with_direction(Direction::Desc);
        assert_eq!(with_direction, reversed);

        let nulls = original.nulls_first().nulls_last();
        assert_eq!(nulls.null_handling(), NullHandling::NullsLast);
        assert_eq!(nulls.nulls_native().null_handling(), NullHandling::Native);

        assert!(original.ignore_case().is_ignore_case());
        assert_eq!(original, Order::asc("name"));
    }

    #[test]
    fn test_display() {
        let order = Order::asc("name").ignore_case().nulls_last();
        assert_eq!(order.to_string(), "name: ASC, NULLS_LAST, ignoring case");
        assert_eq!(Order::desc("age").to_string(), "age: DESC");
    }

    #[test]
    fn test_json() {
        let order = Order::asc("name").ignore_case().nulls_last();
        let json = serde_json::to_string(&order).unwrap();
        assert_eq!(json, r#""name,ASC,ignore_case,NULLS_LAST""#);
        assert_eq!(serde_json::from_str::<Order>(&json).unwrap(), order);
        assert!(serde_json::from_str::<Order>(r#""""#).is_err());
    }
}
