pub mod column;
pub mod error;
pub mod frame;

pub use column::{Column, DType};
pub use error::{PrepError, PrepResult};
pub use frame::Frame;
