//! Knapsack items and the problem instance they form.

use crate::error::GaError;
use std::fmt;

/// An item that may be placed in the knapsack.
///
/// Items are immutable once created.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    name: String,
    weight: f64,
    value: f64,
}

impl Item {
    /// Creates a new item.
    pub fn new(name: impl Into<String>, weight: f64, value: f64) -> Self {
        Self {
            name: name.into(),
            weight,
            value,
        }
    }

    /// Builds items from `(weight, value)` pairs, naming them `Item1..ItemN`.
    ///
    /// ```
    /// use knapsack_ga::knapsack::Item;
    ///
    /// let items = Item::from_table(&[(4.0, 30.0), (8.0, 10.0)]);
    /// assert_eq!(items[1].name(), "Item2");
    /// assert_eq!(items[1].weight(), 8.0);
    /// ```
    pub fn from_table(table: &[(f64, f64)]) -> Vec<Item> {
        table
            .iter()
            .enumerate()
            .map(|(i, &(weight, value))| Item::new(format!("Item{}", i + 1), weight, value))
            .collect()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (weight: {:.1}, value: {:.1})",
            self.name, self.weight, self.value
        )
    }
}

/// The item set and capacity shared by every candidate of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct KnapsackInstance {
    items: Vec<Item>,
    capacity: f64,
}

impl KnapsackInstance {
    /// Creates a validated instance.
    ///
    /// An empty item set is accepted: every candidate over it has
    /// zero genes and zero fitness.
    ///
    /// # Errors
    ///
    /// Returns [`GaError::InvalidCapacity`] for a negative or non-finite
    /// capacity and [`GaError::InvalidItem`] for an item whose weight or
    /// value is negative or non-finite.
    pub fn new(items: Vec<Item>, capacity: f64) -> Result<Self, GaError> {
        if !capacity.is_finite() || capacity < 0.0 {
            return Err(GaError::InvalidCapacity(capacity));
        }
        if let Some(bad) = items.iter().find(|item| {
            !item.weight.is_finite()
                || !item.value.is_finite()
                || item.weight < 0.0
                || item.value < 0.0
        }) {
            return Err(GaError::InvalidItem {
                name: bad.name.clone(),
            });
        }
        Ok(Self { items, capacity })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Number of items, which is also the chromosome length.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
