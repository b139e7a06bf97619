pub mod feature;
pub mod loss;
pub mod stats;
pub mod target;
pub mod transformer;

pub use feature::FeaturePreprocessor;
pub use loss::Loss;
pub use stats::NormStats;
pub use target::TargetPreprocessor;
pub use transformer::Transformer;
