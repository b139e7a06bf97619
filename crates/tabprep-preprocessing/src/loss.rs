use serde::{Deserialize, Serialize};
use std::fmt;

/// Loss function selected for the target, retrieved by the training pipeline.
///
/// The preprocessors only choose the loss; evaluating it is the trainer's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Loss {
    /// Mean squared error, for regression targets.
    MeanSquaredError,
    /// Focal loss, a class-imbalance-aware classification loss.
    Focal,
}

impl Loss {
    /// The loss appropriate for a target with `num_classes` classes
    /// (1 means regression).
    pub fn for_num_classes(num_classes: usize) -> Self {
        if num_classes == 1 {
            Loss::MeanSquaredError
        } else {
            Loss::Focal
        }
    }
}

impl fmt::Display for Loss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Loss::MeanSquaredError => write!(f, "mse"),
            Loss::Focal => write!(f, "focal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection() {
        assert_eq!(Loss::for_num_classes(1), Loss::MeanSquaredError);
        assert_eq!(Loss::for_num_classes(2), Loss::Focal);
        assert_eq!(Loss::for_num_classes(10), Loss::Focal);
    }
}
