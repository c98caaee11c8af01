//! Demonstration driver: exercises construction, printing, the binary and
//! compound arithmetic operators, and stream extraction from stdin.

use std::io::{self, Write};

use densemat::Matrix;

fn main() -> io::Result<()> {
    env_logger::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut a: Matrix<f64> = Matrix::with_dims(3, 3);
    *a.at_mut(0, 0).unwrap() = 1.0;
    *a.at_mut(1, 1).unwrap() = 1.0;
    writeln!(out, "\nMatrix A=")?;
    a.print(&mut out)?;

    let mut b: Matrix<f64> = Matrix::with_dims(3, 3);
    *b.at_mut(0, 0).unwrap() = 5.0;
    *b.at_mut(1, 1).unwrap() = 5.0;
    writeln!(out, "\nMatrix B=")?;
    b.print(&mut out)?;

    writeln!(out, "\nThe sum of A and B:")?;
    (&a + &b).print(&mut out)?;

    writeln!(out, "\nThe subtraction of B from A:")?;
    (&a - &b).print(&mut out)?;

    writeln!(out, "\nThe multiplication of A and B:")?;
    (&a * &b).print(&mut out)?;

    a += &b;
    writeln!(out, "\nAfter A+=B, A=")?;
    a.print(&mut out)?;

    a -= &b;
    writeln!(out, "\nAfter A-=B, A=")?;
    a.print(&mut out)?;

    a *= &b;
    writeln!(out, "\nAfter A*=B, A=")?;
    a.print(&mut out)?;

    let mut m: Matrix<f64> = Matrix::with_dims(2, 2);
    writeln!(
        out,
        "Enter elements for matrix of size {} by {}:",
        m.rows(),
        m.cols()
    )?;
    out.flush()?;
    let stdin = io::stdin();
    if let Err(e) = m.read_from(&mut stdin.lock()) {
        eprintln!("failed to read matrix: {e}");
        return Ok(());
    }

    writeln!(out, "\nMatrix_4:")?;
    write!(out, "{m}")?;
    Ok(())
}
