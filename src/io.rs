//! Stream-style extraction and insertion for `Matrix<T>`.
//!
//! The matrix type holds no process-global channel: extraction reads from
//! any [`BufRead`] and insertion writes to any [`Write`], with the concrete
//! stdin/stdout supplied by the caller. Traversal is row-major, matching the
//! accessor convention of [`crate::matrix::dense`].

use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use num_traits::Float;

use crate::error::MatError;
use crate::matrix::Matrix;

impl<T: Float + FromStr> Matrix<T> {
    /// Fill an already-dimensioned matrix from whitespace/newline-delimited
    /// numeric tokens, `rows * cols` of them, in row-major order.
    ///
    /// Input is not pre-validated; failure semantics are inherited from the
    /// reader and the parser. A malformed token or premature end of input
    /// aborts the read with an error, leaving the elements consumed so far
    /// written and the remainder untouched.
    pub fn read_from<R: BufRead>(&mut self, input: &mut R) -> Result<(), MatError> {
        let total = self.cols * self.rows;
        let mut filled = 0;
        let mut line = String::new();
        while filled < total {
            line.clear();
            if input.read_line(&mut line)? == 0 {
                return Err(MatError::Io(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    format!("input ended after {filled} of {total} elements"),
                )));
            }
            for token in line.split_whitespace() {
                if filled == total {
                    break;
                }
                let value = token.parse::<T>().map_err(|_| MatError::MalformedToken {
                    token: token.to_owned(),
                    index: filled,
                })?;
                self.data[filled] = value;
                filled += 1;
            }
        }
        Ok(())
    }
}

impl<T: Float + fmt::Display> Matrix<T> {
    /// Write the matrix as one space-separated, newline-terminated line per
    /// row.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for row in 0..self.rows {
            for col in 0..self.cols {
                write!(out, "{} ", self.data[self.cols * row + col])?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    /// Reference-style `print`: identical to [`write_to`](Self::write_to).
    pub fn print<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.write_to(out)
    }
}

impl<T: Float + fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                write!(f, "{} ", self.data[self.cols * row + col])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
