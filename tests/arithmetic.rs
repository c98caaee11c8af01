//! Tests for the arithmetic operators, binary and compound.
//!
//! Covers the algebraic properties on random data, the fixed diagonal
//! scenario, and the degenerate-result policy for incompatible dimensions
//! (0×0 from binary operators, untouched receiver from compound ones).

use approx::assert_abs_diff_eq;
use densemat::Matrix;
use rand::Rng;

fn random_matrix(cols: usize, rows: usize) -> Matrix<f64> {
    let mut rng = rand::thread_rng();
    let mut m = Matrix::with_dims(cols, rows);
    for row in 0..rows {
        for col in 0..cols {
            *m.at_mut(col, row).unwrap() = rng.r#gen::<f64>() * 2.0 - 1.0;
        }
    }
    m
}

fn assert_matrix_abs_diff_eq(a: &Matrix<f64>, b: &Matrix<f64>, eps: f64) {
    assert_eq!(a.cols(), b.cols());
    assert_eq!(a.rows(), b.rows());
    for (x, y) in a.as_slice().iter().zip(b.as_slice()) {
        assert_abs_diff_eq!(*x, *y, epsilon = eps);
    }
}

/// (A + B) - B recovers A element-wise within tolerance.
#[test]
fn add_then_subtract_recovers_operand() {
    let a = random_matrix(4, 3);
    let b = random_matrix(4, 3);
    let recovered = &(&a + &b) - &b;
    assert_matrix_abs_diff_eq(&recovered, &a, 1e-12);
}

#[test]
fn addition_commutes() {
    let a = random_matrix(5, 2);
    let b = random_matrix(5, 2);
    assert_eq!(&a + &b, &b + &a);
}

/// (A·B)·C and A·(B·C) agree within tolerance on conformable rectangles.
#[test]
fn multiplication_associates() {
    let a = random_matrix(3, 2); // 2 rows × 3 cols
    let b = random_matrix(4, 3); // 3 rows × 4 cols
    let c = random_matrix(2, 4); // 4 rows × 2 cols
    let left = &(&a * &b) * &c;
    let right = &a * &(&b * &c);
    assert_eq!(left.cols(), 2);
    assert_eq!(left.rows(), 2);
    assert_matrix_abs_diff_eq(&left, &right, 1e-12);
}

#[test]
fn multiplying_by_identity_is_a_no_op() {
    let a = random_matrix(4, 3);
    assert_matrix_abs_diff_eq(&(&a * &Matrix::identity(4)), &a, 0.0);
    assert_matrix_abs_diff_eq(&(&Matrix::identity(3) * &a), &a, 0.0);
}

/// The fixed scenario: A has 1.0 at (0,0) and (1,1), B has 5.0 there.
#[test]
fn diagonal_three_by_three_scenario() {
    let mut a: Matrix<f64> = Matrix::with_dims(3, 3);
    a.set(0, 0, 1.0).unwrap();
    a.set(1, 1, 1.0).unwrap();
    let mut b: Matrix<f64> = Matrix::with_dims(3, 3);
    b.set(0, 0, 5.0).unwrap();
    b.set(1, 1, 5.0).unwrap();

    let sum = &a + &b;
    let diff = &a - &b;
    let prod = &a * &b;
    for col in 0..3 {
        for row in 0..3 {
            let on_diag = col == row && col < 2;
            let expect = |v: f64| if on_diag { v } else { 0.0 };
            assert_eq!(sum.at(col, row).unwrap(), expect(6.0));
            assert_eq!(diff.at(col, row).unwrap(), expect(-4.0));
            assert_eq!(prod.at(col, row).unwrap(), expect(5.0));
        }
    }
}

#[test]
fn mismatched_addition_yields_the_empty_matrix() {
    let a: Matrix<f64> = Matrix::with_dims(2, 2);
    let b: Matrix<f64> = Matrix::with_dims(3, 3);
    let c = &a + &b;
    assert_eq!(c.cols(), 0);
    assert_eq!(c.rows(), 0);
    assert!((&a - &b).is_empty());
}

#[test]
fn nonconformable_multiplication_yields_the_empty_matrix() {
    // 3 cols on the left, 2 rows on the right
    let a: Matrix<f64> = Matrix::with_dims(3, 2);
    let b: Matrix<f64> = Matrix::with_dims(3, 2);
    let c = &a * &b;
    assert_eq!(c.cols(), 0);
    assert_eq!(c.rows(), 0);
}

#[test]
fn product_takes_cols_from_rhs_and_rows_from_lhs() {
    let a = random_matrix(3, 2);
    let b = random_matrix(4, 3);
    let c = &a * &b;
    assert_eq!(c.cols(), 4);
    assert_eq!(c.rows(), 2);
}

#[test]
fn compound_add_and_subtract_in_place() {
    let mut a = random_matrix(3, 3);
    let orig = a.clone();
    let b = random_matrix(3, 3);
    a += &b;
    a -= &b;
    assert_matrix_abs_diff_eq(&a, &orig, 1e-12);
}

/// Compound assignment with mismatched dimensions must leave the receiver
/// byte-for-byte unchanged.
#[test]
fn mismatched_compound_ops_leave_receiver_untouched() {
    let mut a = random_matrix(2, 2);
    let orig = a.clone();
    let b = random_matrix(3, 3);
    a += &b;
    assert_eq!(a, orig);
    a -= &b;
    assert_eq!(a, orig);
    let c = random_matrix(3, 4); // rows != a.cols
    a *= &c;
    assert_eq!(a, orig);
}

/// `*=` replaces the receiver's whole state, dimensions included.
#[test]
fn compound_multiply_replaces_dimensions() {
    let mut a = random_matrix(3, 2);
    let b = random_matrix(5, 3);
    let expected = &a * &b;
    a *= &b;
    assert_eq!(a.cols(), 5);
    assert_eq!(a.rows(), 2);
    assert_eq!(a, expected);
}

#[test]
fn compound_multiply_matches_binary_on_square_inputs() {
    let mut a = random_matrix(4, 4);
    let b = random_matrix(4, 4);
    let expected = &a * &b;
    a *= &b;
    assert_matrix_abs_diff_eq(&a, &expected, 0.0);
}
