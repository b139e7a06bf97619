use crate::loss::Loss;
use crate::stats::NormStats;
use crate::transformer::Transformer;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tabprep_core::{Column, PrepError, PrepResult};

const TARGET: &str = "y";

#[derive(Debug, Clone, Serialize, Deserialize)]
enum TargetState {
    /// Regression: z-score statistics for the target.
    Norm(NormStats),
    /// Classification: category -> 0-based code, in lexicographic
    /// category order.
    Encode(BTreeMap<String, usize>),
}

/// Preprocessor for the prediction target.
///
/// `num_classes == 1` means regression: `fit` learns mean/std and `transform`
/// z-scores the target. `num_classes > 1` means classification: `fit` learns
/// a category -> code mapping and `transform` replaces each value with its
/// code. The matching loss is exposed through [`TargetPreprocessor::loss`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetPreprocessor {
    num_classes: usize,
    state: Option<TargetState>,
}

impl TargetPreprocessor {
    pub fn new(num_classes: usize) -> PrepResult<Self> {
        if num_classes == 0 {
            return Err(PrepError::InvalidConfig {
                reason: "num_classes must be >= 1".into(),
            });
        }
        Ok(TargetPreprocessor {
            num_classes,
            state: None,
        })
    }

    pub fn num_classes(&self) -> usize {
        self.num_classes
    }

    pub fn is_fitted(&self) -> bool {
        self.state.is_some()
    }

    /// The loss the training pipeline should use for this target.
    pub fn loss(&self) -> Loss {
        Loss::for_num_classes(self.num_classes)
    }

    /// The learned category -> code mapping, if fitted for classification.
    pub fn mapping(&self) -> Option<&BTreeMap<String, usize>> {
        match self.state.as_ref()? {
            TargetState::Encode(mapping) => Some(mapping),
            TargetState::Norm(_) => None,
        }
    }

    fn fitted(&self) -> PrepResult<&TargetState> {
        self.state.as_ref().ok_or(PrepError::NotFitted {
            transformer: "TargetPreprocessor",
        })
    }
}

impl Transformer for TargetPreprocessor {
    type Data = Column;

    fn fit(&mut self, y: &Column) -> PrepResult<()> {
        if y.is_empty() {
            return Err(PrepError::EmptyColumn {
                column: TARGET.into(),
            });
        }
        let state = if self.num_classes == 1 {
            let values = y.as_numeric().ok_or(PrepError::UnsupportedColumnType {
                column: TARGET.into(),
                dtype: y.dtype(),
            })?;
            TargetState::Norm(NormStats::from_values(values))
        } else {
            let categories = y.categories().ok_or(PrepError::UnsupportedColumnType {
                column: TARGET.into(),
                dtype: y.dtype(),
            })?;
            let mapping = categories
                .into_iter()
                .enumerate()
                .map(|(code, category)| (category, code))
                .collect();
            TargetState::Encode(mapping)
        };
        self.state = Some(state);
        Ok(())
    }

    fn transform(&self, y: &Column, norm: bool) -> PrepResult<Column> {
        match self.fitted()? {
            TargetState::Norm(stats) => {
                let values = y.as_numeric().ok_or(PrepError::UnsupportedColumnType {
                    column: TARGET.into(),
                    dtype: y.dtype(),
                })?;
                if !norm {
                    return Ok(y.clone());
                }
                Ok(Column::Numeric(
                    values.iter().map(|&v| stats.apply(v)).collect(),
                ))
            }
            TargetState::Encode(mapping) => {
                let values = y.as_categorical().ok_or(PrepError::UnsupportedColumnType {
                    column: TARGET.into(),
                    dtype: y.dtype(),
                })?;
                let codes = values
                    .iter()
                    .map(|v| {
                        mapping
                            .get(v)
                            .map(|&code| code as f64)
                            .ok_or_else(|| PrepError::UnknownCategory {
                                column: TARGET.into(),
                                value: v.clone(),
                            })
                    })
                    .collect::<PrepResult<Vec<f64>>>()?;
                Ok(Column::Numeric(codes))
            }
        }
    }
}
