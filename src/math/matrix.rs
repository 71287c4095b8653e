use rand::Rng;
use std::fmt;
use std::ops::{Index, Mul};

use crate::error::{NetError, Result};
use crate::math::vector::Vector;

/// Dense matrix with row-major storage: element `(r, c)` lives at
/// `data[r * cols + c]`.
///
/// `data.len() == rows * cols` holds for every value reachable through the
/// public API.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Wraps `data` as a `rows × cols` matrix, row by row.
    pub fn from_data(rows: usize, cols: usize, data: Vec<f64>) -> Result<Matrix> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(NetError::DimensionMismatch {
                operation: "Matrix::from_data",
                left: (rows, cols),
                right: (data.len(), 1),
            });
        }
        Ok(Matrix { rows, cols, data })
    }

    /// Allocates a `rows × cols` matrix and fills it via [`Matrix::randomize`].
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);
        res.randomize(rng);
        res
    }

    /// Overwrites every element with an independent sample from `[0, 1)`.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for x in self.data.iter_mut() {
            *x = rng.gen::<f64>();
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The row-major backing storage.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.data
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize> {
        if row < self.rows && col < self.cols {
            Ok(row * self.cols + col)
        } else {
            Err(NetError::IndexOutOfRange {
                index: (row, col),
                shape: self.shape(),
            })
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        self.offset(row, col).map(|i| self.data[i])
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        let i = self.offset(row, col)?;
        self.data[i] = value;
        Ok(())
    }

    /// Standard dense product `self × rhs`.
    ///
    /// Requires `self.cols == rhs.rows`; the result is `self.rows × rhs.cols`.
    pub fn matmul(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.cols != rhs.rows {
            return Err(NetError::DimensionMismatch {
                operation: "matmul",
                left: self.shape(),
                right: rhs.shape(),
            });
        }

        let mut res = Matrix::zeros(self.rows, rhs.cols);

        for i in 0..res.rows {
            for j in 0..res.cols {
                let mut sum = 0.0;

                for k in 0..self.cols {
                    sum += self.data[i * self.cols + k] * rhs.data[k * rhs.cols + j];
                }

                res.data[i * res.cols + j] = sum;
            }
        }

        Ok(res)
    }

    /// Matrix-vector product, computed by promoting `rhs` to a single-column
    /// matrix and converting the single-column result back.
    pub fn mul_vector(&self, rhs: &Vector) -> Result<Vector> {
        if self.cols != rhs.rows() {
            return Err(NetError::DimensionMismatch {
                operation: "mul_vector",
                left: self.shape(),
                right: (rhs.rows(), 1),
            });
        }

        let column = Matrix::from(rhs.clone());
        Vector::try_from(self.matmul(&column)?)
    }
}

/// Single-column promotion.
impl From<Vector> for Matrix {
    fn from(v: Vector) -> Self {
        Matrix {
            rows: v.rows(),
            cols: 1,
            data: v.into_inner(),
        }
    }
}

/// Panicking element access, like slice indexing. Use [`Matrix::get`] for
/// the checked form.
impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        match self.offset(row, col) {
            Ok(i) => &self.data[i],
            Err(e) => panic!("{e}"),
        }
    }
}

impl Mul for &Matrix {
    type Output = Result<Matrix>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.matmul(rhs)
    }
}

impl Mul<&Vector> for &Matrix {
    type Output = Result<Vector>;

    fn mul(self, rhs: &Vector) -> Self::Output {
        self.mul_vector(rhs)
    }
}

impl PartialEq<Vector> for Matrix {
    fn eq(&self, other: &Vector) -> bool {
        self.cols == 1 && self.rows == other.rows() && self.data == other.as_slice()
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}r x {}c matrix", self.rows, self.cols)?;
        if self.cols == 0 {
            return Ok(());
        }
        for row in self.data.chunks(self.cols) {
            write!(f, "\t")?;
            for x in row {
                write!(f, "{x:.3} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
