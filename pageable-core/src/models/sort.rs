use pageable_api::PageResult;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::direction::Direction;
use super::order::Order;

/// Ordered list of sort clauses, primary key first.
///
/// An empty list means unsorted. Every combinator returns a
/// new `Sort`.
///
/// # Example
/// ```
/// use pageable_core::models::{Direction, Sort};
///
/// let sort = Sort::parse(["name,asc", "age,desc"]).unwrap();
/// assert!(sort.is_sorted());
/// assert_eq!(sort.order_for("age").unwrap().direction(), Direction::Desc);
/// assert_eq!(sort.encode(), vec!["name", "age,DESC"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Sort {
    orders: Vec<Order>,
}

impl Sort {
    pub fn unsorted() -> Self {
        Self::default()
    }

    /// Sort by every property in `properties` using the same direction.
    pub fn by<I, S>(direction: Direction, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        properties
            .into_iter()
            .map(|property| Order::new(direction, property))
            .collect()
    }

    pub fn by_orders(orders: impl IntoIterator<Item = Order>) -> Self {
        Self {
            orders: orders.into_iter().collect(),
        }
    }

    /// Parse zero or more textual order clauses.
    ///
    /// The first clause that fails aborts the whole parse; no partial sort is
    /// returned. No clauses at all yields an unsorted `Sort`.
    pub fn parse<I, S>(values: I) -> PageResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let orders = values
            .into_iter()
            .map(|value| Order::parse(value.as_ref()))
            .collect::<PageResult<Vec<_>>>()?;
        Ok(Self { orders })
    }

    /// One compact string per clause, in order. Each string may itself contain commas.
    pub fn encode(&self) -> Vec<String> {
        self.orders.iter().map(Order::encode).collect()
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Order> {
        self.orders.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn is_sorted(&self) -> bool {
        !self.is_empty()
    }

    pub fn is_unsorted(&self) -> bool {
        !self.is_sorted()
    }

    /// Clauses of `self` followed by the clauses of `other`.
    pub fn and(&self, other: &Sort) -> Self {
        self.orders.iter().chain(other.orders.iter()).cloned().collect()
    }

    /// Flip the direction of every clause, keeping their precedence.
    pub fn reverse(&self) -> Self {
        self.orders.iter().map(Order::reverse).collect()
    }

    pub fn ascending(&self) -> Self {
        self.with_direction(Direction::Asc)
    }

    pub fn descending(&self) -> Self {
        self.with_direction(Direction::Desc)
    }

    fn with_direction(&self, direction: Direction) -> Self {
        self.orders
            .iter()
            .map(|order| order.with_direction(direction))
            .collect()
    }

    /// First clause sorting by `property`
    pub fn order_for(&self, property: &str) -> Option<&Order> {
        self.orders.iter().find(|order| order.property() == property)
    }
}

impl FromIterator<Order> for Sort {
    fn from_iter<I: IntoIterator<Item = Order>>(iter: I) -> Self {
        Self::by_orders(iter)
    }
}

impl<'a> IntoIterator for &'a Sort {
    type Item = &'a Order;
    type IntoIter = std::slice::Iter<'a, Order>;

    fn into_iter(self) -> Self::IntoIter {
        self.orders.iter()
    }
}

impl IntoIterator for Sort {
    type Item = Order;
    type IntoIter = std::vec::IntoIter<Order>;

    fn into_iter(self) -> Self::IntoIter {
        self.orders.into_iter()
    }
}

impl std::fmt::Display for Sort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_unsorted() {
            return write!(f, "UNSORTED");
        }
        for (i, order) in self.orders.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{order}")?;
        }
        Ok(())
    }
}

impl Serialize for Sort {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.orders.iter())
    }
}

impl<'de> Deserialize<'de> for Sort {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let orders = Option::<Vec<Order>>::deserialize(deserializer)?;
        Ok(Self {
            orders: orders.unwrap_or_default(),
        })
    }
}
