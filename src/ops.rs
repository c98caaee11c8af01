//! Arithmetic over `Matrix<T>`.
//!
//! Binary operators take references and produce owned results; compound
//! operators mutate the receiver in place. A dimension mismatch is not a
//! propagating error: the operator logs a diagnostic through `log::error!`
//! and yields a degenerate result: the 0×0 matrix for a binary operator,
//! the untouched receiver for a compound one. Callers relying on arithmetic
//! correctness must check the result's dimensions themselves.

use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use num_traits::Float;

use crate::matrix::Matrix;

impl<T: Float> Add for &Matrix<T> {
    type Output = Matrix<T>;

    /// Element-wise sum. Requires identical dimensions on both sides.
    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        if self.cols != rhs.cols || self.rows != rhs.rows {
            log::error!(
                "matrices {}x{} and {}x{} are not compatible for addition",
                self.cols, self.rows, rhs.cols, rhs.rows
            );
            return Matrix::new();
        }
        let mut out = Matrix::with_dims(self.cols, self.rows);
        for (o, (a, b)) in out.data.iter_mut().zip(self.data.iter().zip(&rhs.data)) {
            *o = *a + *b;
        }
        out
    }
}

impl<T: Float> Sub for &Matrix<T> {
    type Output = Matrix<T>;

    /// Element-wise difference. Requires identical dimensions on both sides.
    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        if self.cols != rhs.cols || self.rows != rhs.rows {
            log::error!(
                "matrices {}x{} and {}x{} are not compatible for subtraction",
                self.cols, self.rows, rhs.cols, rhs.rows
            );
            return Matrix::new();
        }
        let mut out = Matrix::with_dims(self.cols, self.rows);
        for (o, (a, b)) in out.data.iter_mut().zip(self.data.iter().zip(&rhs.data)) {
            *o = *a - *b;
        }
        out
    }
}

impl<T: Float> Mul for &Matrix<T> {
    type Output = Matrix<T>;

    /// Matrix product. Requires `self.cols() == rhs.rows()`; the result is
    /// `rhs.cols() × self.rows()`, each slot the dot product of a receiver
    /// row and an operand column accumulated onto the zero-initialized
    /// output.
    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        if self.cols != rhs.rows {
            log::error!(
                "matrices {}x{} and {}x{} are not compatible for multiplication",
                self.cols, self.rows, rhs.cols, rhs.rows
            );
            return Matrix::new();
        }
        let mut out = Matrix::with_dims(rhs.cols, self.rows);
        for pos in 0..out.data.len() {
            let row = pos / out.cols;
            let col = pos % out.cols;
            let mut acc = out.data[pos];
            for k in 0..self.cols {
                acc = acc + self.data[self.cols * row + k] * rhs.data[rhs.cols * k + col];
            }
            out.data[pos] = acc;
        }
        out
    }
}

impl<T: Float> AddAssign<&Matrix<T>> for Matrix<T> {
    /// In-place element-wise sum; on mismatch logs and leaves the receiver
    /// unmodified.
    fn add_assign(&mut self, rhs: &Matrix<T>) {
        if self.cols != rhs.cols || self.rows != rhs.rows {
            log::error!(
                "matrices {}x{} and {}x{} must have the same dimensions for addition",
                self.cols, self.rows, rhs.cols, rhs.rows
            );
            return;
        }
        for (a, b) in self.data.iter_mut().zip(&rhs.data) {
            *a = *a + *b;
        }
    }
}

impl<T: Float> SubAssign<&Matrix<T>> for Matrix<T> {
    /// In-place element-wise difference; on mismatch logs and leaves the
    /// receiver unmodified.
    fn sub_assign(&mut self, rhs: &Matrix<T>) {
        if self.cols != rhs.cols || self.rows != rhs.rows {
            log::error!(
                "matrices {}x{} and {}x{} must have the same dimensions for subtraction",
                self.cols, self.rows, rhs.cols, rhs.rows
            );
            return;
        }
        for (a, b) in self.data.iter_mut().zip(&rhs.data) {
            *a = *a - *b;
        }
    }
}

impl<T: Float> MulAssign<&Matrix<T>> for Matrix<T> {
    /// In-place matrix product; on mismatch logs and leaves the receiver
    /// unmodified.
    ///
    /// The product reads every receiver row while producing the output, so
    /// it cannot overwrite the receiver mid-computation: it is built into a
    /// temporary and swapped in wholesale, dimensions included.
    fn mul_assign(&mut self, rhs: &Matrix<T>) {
        if self.cols != rhs.rows {
            log::error!(
                "matrices {}x{} and {}x{} cannot be multiplied",
                self.cols, self.rows, rhs.cols, rhs.rows
            );
            return;
        }
        *self = &*self * rhs;
    }
}
