//! # tabprep
//!
//! Tabular feature/target preprocessing for machine-learning pipelines.
//!
//! ## Modules
//!
//! - **core** — `Frame`/`Column` data model with numeric, categorical, and
//!   datetime columns, plus the shared error taxonomy
//! - **preprocessing** — two-phase fit/transform preprocessors:
//!   [`TargetPreprocessor`] (z-scoring for regression targets, label-encoding
//!   for classification targets, loss selection) and [`FeaturePreprocessor`]
//!   (per-column z-scoring, label-encoding of categorical columns with a
//!   reserved code for unseen categories)
//! - **io** — CSV reading/writing with numeric/categorical dtype inference
//!
//! Fitted statistics and mappings are serde-serializable so a caller can
//! persist them across process restarts.

/// Data model and errors.
pub use tabprep_core as core;

/// Fit/transform preprocessors.
pub use tabprep_preprocessing as preprocessing;

/// CSV frame I/O.
pub use tabprep_io as io;

pub use tabprep_core::{Column, DType, Frame, PrepError, PrepResult};
pub use tabprep_preprocessing::{
    FeaturePreprocessor, Loss, NormStats, TargetPreprocessor, Transformer,
};
