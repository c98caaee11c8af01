//! densemat: a minimal dense-matrix value type.
//!
//! This crate provides [`Matrix<T>`], a dense 2-D grid of floating-point
//! elements backed by a flat row-major `Vec<T>`, together with arithmetic
//! operators (`+`, `-`, `*` and their compound forms) and stream-style
//! extraction/insertion over generic readers and writers.
//!
//! Two error policies coexist here, both deliberate:
//!
//! * element access with an out-of-bounds index returns a structured
//!   [`MatError`];
//! * arithmetic between incompatibly sized matrices does **not** return an
//!   error: it logs a diagnostic through the `log` facade and yields a
//!   degenerate result (the 0×0 matrix for binary operators, the untouched
//!   receiver for compound ones). Callers that need to detect the failure
//!   must inspect the result's dimensions.

pub mod error;
pub mod io;
pub mod matrix;
pub mod ops;

// Re-exports for convenience
pub use error::MatError;
pub use matrix::Matrix;
