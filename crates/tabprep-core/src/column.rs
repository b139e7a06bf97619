use serde::{Deserialize, Serialize};

/// Static type of a column's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DType {
    Numeric,
    Categorical,
    /// Epoch-millisecond timestamps. Representable in a frame but not
    /// accepted by the preprocessors.
    Datetime,
}

/// A homogeneously typed column of values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Column {
    Numeric(Vec<f64>),
    Categorical(Vec<String>),
    Datetime(Vec<i64>),
}

impl Column {
    pub fn dtype(&self) -> DType {
        match self {
            Column::Numeric(_) => DType::Numeric,
            Column::Categorical(_) => DType::Categorical,
            Column::Datetime(_) => DType::Datetime,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Column::Numeric(v) => v.len(),
            Column::Categorical(v) => v.len(),
            Column::Datetime(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Numeric values, or `None` for non-numeric columns.
    pub fn as_numeric(&self) -> Option<&[f64]> {
        match self {
            Column::Numeric(v) => Some(v),
            _ => None,
        }
    }

    /// Categorical values, or `None` for non-categorical columns.
    pub fn as_categorical(&self) -> Option<&[String]> {
        match self {
            Column::Categorical(v) => Some(v),
            _ => None,
        }
    }

    /// Distinct values of a categorical column, lexicographically sorted.
    pub fn categories(&self) -> Option<Vec<String>> {
        let values = self.as_categorical()?;
        let mut unique: Vec<String> = values.to_vec();
        unique.sort();
        unique.dedup();
        Some(unique)
    }
}

impl From<Vec<f64>> for Column {
    fn from(v: Vec<f64>) -> Self {
        Column::Numeric(v)
    }
}

impl From<Vec<String>> for Column {
    fn from(v: Vec<String>) -> Self {
        Column::Categorical(v)
    }
}

impl From<Vec<&str>> for Column {
    fn from(v: Vec<&str>) -> Self {
        Column::Categorical(v.into_iter().map(str::to_string).collect())
    }
}
