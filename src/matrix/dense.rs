//! Owned dense-matrix storage.
//!
//! `Matrix<T>` keeps its elements in a flat row-major `Vec<T>`: the element
//! at logical position `(col, row)` lives at linear index `cols * row + col`.
//! Every accessor in the crate takes its indices in `(col, row)` order, and
//! every traversal (printing, extraction) walks rows as the outer dimension
//! and columns as the inner one.

use crate::error::MatError;
use num_traits::Float;

/// A dense `cols × rows` matrix with exclusively owned storage.
///
/// Invariant: `data.len() == cols * rows` at all times. Storage is never
/// shared or aliased between instances; `Clone` copies, assignment replaces
/// the whole state.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T> {
    pub(crate) cols: usize,
    pub(crate) rows: usize,
    pub(crate) data: Vec<T>,
}

impl<T: Float> Matrix<T> {
    /// The empty 0×0 matrix.
    pub fn new() -> Self {
        Self {
            cols: 0,
            rows: 0,
            data: Vec::new(),
        }
    }

    /// A `cols × rows` matrix with every element zero-initialized.
    pub fn with_dims(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            data: vec![T::zero(); cols * rows],
        }
    }

    /// The `n × n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::with_dims(n, n);
        for i in 0..n {
            m.data[n * i + i] = T::one();
        }
        m
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// True for the degenerate 0×0 matrix.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The elements in linear row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    fn check_bounds(&self, col: usize, row: usize) -> Result<(), MatError> {
        if col >= self.cols || row >= self.rows {
            return Err(MatError::OutOfBounds {
                col,
                row,
                cols: self.cols,
                rows: self.rows,
            });
        }
        Ok(())
    }

    /// Read the element at `(col, row)`.
    ///
    /// Fails with [`MatError::OutOfBounds`] when `col >= cols()` or
    /// `row >= rows()`.
    pub fn at(&self, col: usize, row: usize) -> Result<T, MatError> {
        self.check_bounds(col, row)?;
        Ok(self.data[self.cols * row + col])
    }

    /// Mutable reference to the element at `(col, row)`.
    ///
    /// Same bounds contract as [`at`](Self::at).
    pub fn at_mut(&mut self, col: usize, row: usize) -> Result<&mut T, MatError> {
        self.check_bounds(col, row)?;
        let pos = self.cols * row + col;
        Ok(&mut self.data[pos])
    }

    /// Store `value` at `(col, row)`.
    pub fn set(&mut self, col: usize, row: usize, value: T) -> Result<(), MatError> {
        *self.at_mut(col, row)? = value;
        Ok(())
    }
}

impl<T: Float> Default for Matrix<T> {
    fn default() -> Self {
        Self::new()
    }
}
