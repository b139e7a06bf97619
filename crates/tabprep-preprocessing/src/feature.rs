use crate::stats::NormStats;
use crate::transformer::Transformer;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tabprep_core::{Column, DType, Frame, PrepError, PrepResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct FeatureState {
    col_order: Vec<String>,
    num_cols: Vec<String>,
    cat_cols: Vec<String>,
    norm: HashMap<String, NormStats>,
    label_encode: HashMap<String, BTreeMap<String, usize>>,
}

/// Preprocessor for the feature table.
///
/// Numeric columns are z-scored. Categorical columns are label-encoded to
/// codes starting at 1 (0 is reserved for categories unseen at fit time) and
/// then z-scored with statistics computed over the encoded fit-time codes.
/// The transform-time frame must match the fit-time schema exactly: same
/// column names, order, and dtypes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeaturePreprocessor {
    state: Option<FeatureState>,
}

impl FeaturePreprocessor {
    pub fn new() -> Self {
        FeaturePreprocessor { state: None }
    }

    pub fn is_fitted(&self) -> bool {
        self.state.is_some()
    }

    /// Fit-time column order, once fitted.
    pub fn col_order(&self) -> Option<&[String]> {
        self.state.as_ref().map(|s| s.col_order.as_slice())
    }

    /// Names of the columns that were numeric at fit time.
    pub fn numeric_columns(&self) -> Option<&[String]> {
        self.state.as_ref().map(|s| s.num_cols.as_slice())
    }

    /// Names of the columns that were categorical at fit time.
    pub fn categorical_columns(&self) -> Option<&[String]> {
        self.state.as_ref().map(|s| s.cat_cols.as_slice())
    }

    /// The learned category -> code mapping for a categorical column.
    pub fn mapping(&self, column: &str) -> Option<&BTreeMap<String, usize>> {
        self.state.as_ref()?.label_encode.get(column)
    }

    /// The learned normalization statistic for a column.
    pub fn norm_stats(&self, column: &str) -> Option<NormStats> {
        self.state.as_ref()?.norm.get(column).copied()
    }

    fn fitted(&self) -> PrepResult<&FeatureState> {
        self.state.as_ref().ok_or(PrepError::NotFitted {
            transformer: "FeaturePreprocessor",
        })
    }

    fn encode(mapping: &BTreeMap<String, usize>, values: &[String]) -> Vec<f64> {
        // Unseen categories fall back to the reserved code 0.
        values
            .iter()
            .map(|v| mapping.get(v).map_or(0.0, |&code| code as f64))
            .collect()
    }
}

impl Transformer for FeaturePreprocessor {
    type Data = Frame;

    fn fit(&mut self, x: &Frame) -> PrepResult<()> {
        if x.num_columns() == 0 {
            return Err(PrepError::InvalidConfig {
                reason: "cannot fit on a frame with no columns".into(),
            });
        }

        let mut state = FeatureState {
            col_order: Vec::new(),
            num_cols: Vec::new(),
            cat_cols: Vec::new(),
            norm: HashMap::new(),
            label_encode: HashMap::new(),
        };

        for (name, col) in x.iter() {
            if col.is_empty() {
                return Err(PrepError::EmptyColumn {
                    column: name.into(),
                });
            }
            state.col_order.push(name.into());
            match col {
                Column::Numeric(values) => {
                    state.num_cols.push(name.into());
                    state.norm.insert(name.into(), NormStats::from_values(values));
                }
                Column::Categorical(values) => {
                    state.cat_cols.push(name.into());
                    // Mapping built from this column's own distinct values,
                    // codes starting at 1.
                    let mapping: BTreeMap<String, usize> = col
                        .categories()
                        .unwrap_or_default()
                        .into_iter()
                        .enumerate()
                        .map(|(i, category)| (category, i + 1))
                        .collect();
                    let codes: Vec<f64> = values
                        .iter()
                        .map(|v| mapping[v] as f64)
                        .collect();
                    state.norm.insert(name.into(), NormStats::from_values(&codes));
                    state.label_encode.insert(name.into(), mapping);
                }
                Column::Datetime(_) => {
                    return Err(PrepError::UnsupportedColumnType {
                        column: name.into(),
                        dtype: DType::Datetime,
                    });
                }
            }
        }

        self.state = Some(state);
        Ok(())
    }

    fn transform(&self, x: &Frame, norm: bool) -> PrepResult<Frame> {
        let state = self.fitted()?;

        let names = x.column_names();
        if names != state.col_order {
            return Err(PrepError::SchemaMismatch {
                reason: format!(
                    "expected columns {:?}, got {:?}",
                    state.col_order, names
                ),
            });
        }

        let mut out = Frame::new();
        for (name, col) in x.iter() {
            let stats = state.norm[name];
            let values = if let Some(mapping) = state.label_encode.get(name) {
                let raw = col.as_categorical().ok_or_else(|| PrepError::SchemaMismatch {
                    reason: format!(
                        "column '{}' was categorical at fit time, got {:?}",
                        name,
                        col.dtype()
                    ),
                })?;
                Self::encode(mapping, raw)
            } else {
                col.as_numeric()
                    .ok_or_else(|| PrepError::SchemaMismatch {
                        reason: format!(
                            "column '{}' was numeric at fit time, got {:?}",
                            name,
                            col.dtype()
                        ),
                    })?
                    .to_vec()
            };

            let values = if norm {
                values.into_iter().map(|v| stats.apply(v)).collect()
            } else {
                values
            };
            out.push(name, Column::Numeric(values))?;
        }
        Ok(out)
    }
}
