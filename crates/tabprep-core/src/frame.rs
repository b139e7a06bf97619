use crate::error::{PrepError, PrepResult};
use crate::Column;
use serde::{Deserialize, Serialize};

/// An in-memory table: named columns in a fixed order, all of equal length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    columns: Vec<(String, Column)>,
}

impl Frame {
    pub fn new() -> Self {
        Frame {
            columns: Vec::new(),
        }
    }

    /// Build a frame from `(name, column)` pairs, validating lengths and
    /// name uniqueness.
    pub fn from_columns<I, S>(columns: I) -> PrepResult<Self>
    where
        I: IntoIterator<Item = (S, Column)>,
        S: Into<String>,
    {
        let mut frame = Frame::new();
        for (name, col) in columns {
            frame.push(name, col)?;
        }
        Ok(frame)
    }

    /// Append a column. Its length must match existing columns and its name
    /// must be unused.
    pub fn push<S: Into<String>>(&mut self, name: S, column: Column) -> PrepResult<()> {
        let name = name.into();
        if self.columns.iter().any(|(n, _)| *n == name) {
            return Err(PrepError::DuplicateColumn { column: name });
        }
        if let Some((_, first)) = self.columns.first() {
            if column.len() != first.len() {
                return Err(PrepError::LengthMismatch {
                    column: name,
                    expected: first.len(),
                    got: column.len(),
                });
            }
        }
        self.columns.push((name, column));
        Ok(())
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn num_rows(&self) -> usize {
        self.columns.first().map_or(0, |(_, c)| c.len())
    }

    pub fn is_empty(&self) -> bool {
        self.num_rows() == 0
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c)
    }

    /// Columns in frame order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.columns.iter().map(|(n, c)| (n.as_str(), c))
    }
}
