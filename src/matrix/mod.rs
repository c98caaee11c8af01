//! Matrix module: the dense matrix value type.

pub mod dense;
pub use dense::Matrix;
