//! Directive AST structures
//!
//! Defines the filter, sort, and page directives held by
//! [`DirectiveState`](super::DirectiveState). All types derive serde so
//! an external preferences store can persist them; the engine itself
//! reads and writes nothing.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Condition filter operators.
///
/// `Unknown` absorbs operators deserialized from saved state that this
/// build does not recognize; it matches everything rather than hiding
/// every row behind a directive nobody can see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionOp {
    /// Exact string equality (case-sensitive)
    Equals,
    /// Exact string inequality (case-sensitive)
    NotEquals,
    /// Case-insensitive substring test
    Contains,
    /// Negated case-insensitive substring test
    NotContains,
    /// Case-insensitive prefix test
    StartsWith,
    /// Value is the empty string
    IsEmpty,
    /// Value is not the empty string
    IsNotEmpty,
    /// Unrecognized operator from saved state; matches everything
    #[serde(other)]
    Unknown,
}

impl ConditionOp {
    /// Returns the operator name as serialized
    pub fn op_name(&self) -> &'static str {
        match self {
            ConditionOp::Equals => "equals",
            ConditionOp::NotEquals => "not_equals",
            ConditionOp::Contains => "contains",
            ConditionOp::NotContains => "not_contains",
            ConditionOp::StartsWith => "starts_with",
            ConditionOp::IsEmpty => "is_empty",
            ConditionOp::IsNotEmpty => "is_not_empty",
            ConditionOp::Unknown => "unknown",
        }
    }

    /// Returns true if the operator compares against an operand
    pub fn takes_operand(&self) -> bool {
        !matches!(
            self,
            ConditionOp::IsEmpty | ConditionOp::IsNotEmpty | ConditionOp::Unknown
        )
    }
}

/// A filter attached to exactly one column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterDirective {
    /// Facet-style inclusion filter: the record's resolved value must be
    /// a member of the set. An empty set matches everything, so an
    /// accidentally cleared selection never hides all rows.
    Values {
        #[serde(default)]
        values: BTreeSet<String>,
    },
    /// Operator comparison against a single operand. The emptiness
    /// operators ignore the operand.
    Condition {
        op: ConditionOp,
        #[serde(default)]
        value: String,
    },
}

impl FilterDirective {
    /// Creates a value filter from any collection of values
    pub fn values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FilterDirective::Values {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a condition filter
    pub fn condition(op: ConditionOp, value: impl Into<String>) -> Self {
        FilterDirective::Condition {
            op,
            value: value.into(),
        }
    }

    /// Creates an operand-less condition filter (the emptiness checks)
    pub fn op(op: ConditionOp) -> Self {
        Self::condition(op, "")
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// The single global sort directive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// Column to sort by
    pub column: String,
    /// Sort direction
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Desc,
        }
    }
}

/// Page window, applied after filter and sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSpec {
    /// 1-based page number
    pub page: usize,
    /// Rows per page; zero disables the window
    pub per_page: usize,
}

impl PageSpec {
    pub fn new(page: usize, per_page: usize) -> Self {
        Self { page, per_page }
    }

    /// First page of the given size
    pub fn first(per_page: usize) -> Self {
        Self { page: 1, per_page }
    }

    /// Number of rows preceding this page
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1) * self.per_page
    }

    /// A zero-sized page windows nothing
    pub fn is_unbounded(&self) -> bool {
        self.per_page == 0
    }

    /// Same window size, rewound to the first page
    pub fn rewound(&self) -> Self {
        Self::first(self.per_page)
    }
}
