//! Labeled datasets.

use serde::{Deserialize, Serialize};

/// One labeled pair: the input substituted into a template and the text the
/// generated output is scored against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub input: String,
    pub expected: String,
}

impl Example {
    pub fn new(input: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            expected: expected.into(),
        }
    }
}

impl<I: Into<String>, E: Into<String>> From<(I, E)> for Example {
    fn from((input, expected): (I, E)) -> Self {
        Self::new(input, expected)
    }
}

/// Ordered sequence of examples. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    examples: Vec<Example>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(input, expected)` pairs.
    pub fn from_pairs<I, A, B>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<String>,
        B: Into<String>,
    {
        pairs.into_iter().map(Example::from).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Example> {
        self.examples.iter()
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }
}

impl From<Vec<Example>> for Dataset {
    fn from(examples: Vec<Example>) -> Self {
        Self { examples }
    }
}

impl FromIterator<Example> for Dataset {
    fn from_iter<T: IntoIterator<Item = Example>>(iter: T) -> Self {
        Self {
            examples: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Example;
    type IntoIter = std::slice::Iter<'a, Example>;

    fn into_iter(self) -> Self::IntoIter {
        self.examples.iter()
    }
}
