//! Filter predicate model

use serde::{Deserialize, Serialize};

/// Comparison operators for a single predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterOperator {
    /// Exact string equality, case-sensitive
    #[serde(rename = "equals")]
    Equals,

    /// Case-insensitive substring test
    #[serde(rename = "contains")]
    Contains,

    /// Numeric if both operands parse as numbers, else lexicographic
    #[serde(rename = "greaterThan")]
    GreaterThan,

    /// Numeric if both operands parse as numbers, else lexicographic
    #[serde(rename = "lessThan")]
    LessThan,
}

impl FilterOperator {
    /// Returns the operator name as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOperator::Equals => "equals",
            FilterOperator::Contains => "contains",
            FilterOperator::GreaterThan => "greaterThan",
            FilterOperator::LessThan => "lessThan",
        }
    }
}

/// A single filter condition over one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterPredicate {
    /// Field id the predicate applies to
    pub field: String,
    /// Comparison operator
    pub operator: FilterOperator,
    /// Comparison value, always carried as a string
    pub value: String,
}

impl FilterPredicate {
    /// Creates a new predicate
    pub fn new(field: impl Into<String>, operator: FilterOperator, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.into(),
        }
    }

    /// Creates an equality predicate
    pub fn equals(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, FilterOperator::Equals, value)
    }

    /// Creates a contains predicate
    pub fn contains(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, FilterOperator::Contains, value)
    }

    /// Creates a greater-than predicate
    pub fn greater_than(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, FilterOperator::GreaterThan, value)
    }

    /// Creates a less-than predicate
    pub fn less_than(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, FilterOperator::LessThan, value)
    }
}
