//! Reduction operations over projected integer values (ages).

use std::fmt;

/// Built-in reduction operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReduceOp {
    /// Count all values.
    Count,
    /// Sum all values.
    Sum,
    /// Minimum value.
    Min,
    /// Maximum value.
    Max,
    /// Arithmetic mean.
    Mean,
}

/// A reduction result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// Integral result (`Count`, `Sum`, `Min`, `Max`).
    Int64(i64),
    /// Fractional result (`Mean`).
    Float64(f64),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int64(v) => write!(f, "{v}"),
            Value::Float64(v) => write!(f, "{v}"),
        }
    }
}

/// Reduce `values` using a built-in [`ReduceOp`].
///
/// - `Count` and `Sum` always return `Some`, with `0` for empty input.
/// - `Min`, `Max` and `Mean` return `None` for empty input; there is nothing to aggregate.
pub fn reduce<I>(values: I, op: ReduceOp) -> Option<Value>
where
    I: IntoIterator<Item = u32>,
{
    let summary = AgeSummary::from_ages(values);
    match op {
        ReduceOp::Count => Some(Value::Int64(summary.count as i64)),
        ReduceOp::Sum => Some(Value::Int64(summary.total as i64)),
        ReduceOp::Min => summary.min.map(|v| Value::Int64(i64::from(v))),
        ReduceOp::Max => summary.max.map(|v| Value::Int64(i64::from(v))),
        ReduceOp::Mean => summary.mean().map(Value::Float64),
    }
}

/// Count, total, min and max of a set of ages, gathered in a single pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AgeSummary {
    pub count: usize,
    pub total: u64,
    pub min: Option<u32>,
    pub max: Option<u32>,
}

impl AgeSummary {
    /// Fold `ages` into a summary.
    pub fn from_ages<I>(ages: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        ages.into_iter().fold(Self::default(), Self::push)
    }

    /// Add one age to the summary.
    pub fn push(self, age: u32) -> Self {
        Self {
            count: self.count + 1,
            total: self.total + u64::from(age),
            min: Some(self.min.map_or(age, |m| m.min(age))),
            max: Some(self.max.map_or(age, |m| m.max(age))),
        }
    }

    /// Arithmetic mean, or `None` if no ages were seen.
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            return None;
        }
        Some(self.total as f64 / self.count as f64)
    }
}
