//! Input sequence and reduction result types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordered integers read for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputSequence(Vec<i64>);

impl InputSequence {
    pub fn new(values: Vec<i64>) -> Self {
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, i64> {
        self.0.iter()
    }
}

impl FromIterator<i64> for InputSequence {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a InputSequence {
    type Item = &'a i64;
    type IntoIter = std::slice::Iter<'a, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Space separated, no trailing space.
impl fmt::Display for InputSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut values = self.0.iter();
        if let Some(first) = values.next() {
            write!(f, "{first}")?;
            for value in values {
                write!(f, " {value}")?;
            }
        }
        Ok(())
    }
}

/// The single value produced by an invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "operation", content = "value", rename_all = "snake_case")]
pub enum Reduction {
    Sum(i128),
    Factorial(u128),
    #[serde(rename = "reverse")]
    Reversed(InputSequence),
}

impl Reduction {
    pub fn operation_name(&self) -> &'static str {
        match self {
            Self::Sum(_) => "sum",
            Self::Factorial(_) => "factorial",
            Self::Reversed(_) => "reverse",
        }
    }
}

impl fmt::Display for Reduction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sum(total) => write!(f, "{total}"),
            Self::Factorial(product) => write!(f, "{product}"),
            Self::Reversed(sequence) => write!(f, "{sequence}"),
        }
    }
}
