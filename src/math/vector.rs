use rand::Rng;
use std::fmt;
use std::ops::{Add, Index};

use crate::activation::sigmoid::sigmoid;
use crate::error::{NetError, Result};
use crate::math::matrix::Matrix;

/// Fixed-length column of values. Compares equal to an `N × 1` [`Matrix`]
/// holding the same elements.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    rows: usize,
    values: Vec<f64>,
}

impl Vector {
    pub fn zeros(rows: usize) -> Vector {
        Vector {
            rows,
            values: vec![0.0; rows],
        }
    }

    pub fn from_data(rows: usize, data: Vec<f64>) -> Result<Vector> {
        if data.len() != rows {
            return Err(NetError::DimensionMismatch {
                operation: "Vector::from_data",
                left: (rows, 1),
                right: (data.len(), 1),
            });
        }
        Ok(Vector { rows, values: data })
    }

    pub fn random<R: Rng + ?Sized>(rows: usize, rng: &mut R) -> Vector {
        let mut res = Vector::zeros(rows);
        res.randomize(rng);
        res
    }

    /// Overwrites every element with an independent sample from `[0, 1)`.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for x in self.values.iter_mut() {
            *x = rng.gen::<f64>();
        }
    }

    /// Replaces every element `v` with `sigmoid(v)`.
    pub fn apply_sigmoid(&mut self) {
        for x in self.values.iter_mut() {
            *x = sigmoid(*x);
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.values
    }

    pub fn get(&self, index: usize) -> Result<f64> {
        self.values
            .get(index)
            .copied()
            .ok_or(NetError::IndexOutOfRange {
                index: (index, 0),
                shape: (self.rows, 1),
            })
    }

    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        let shape = (self.rows, 1);
        let slot = self
            .values
            .get_mut(index)
            .ok_or(NetError::IndexOutOfRange { index: (index, 0), shape })?;
        *slot = value;
        Ok(())
    }

    /// Element-wise sum. Both operands must have the same length.
    pub fn add(&self, rhs: &Vector) -> Result<Vector> {
        if self.rows != rhs.rows {
            return Err(NetError::DimensionMismatch {
                operation: "add",
                left: (self.rows, 1),
                right: (rhs.rows, 1),
            });
        }

        let values = self.values.iter()
            .zip(rhs.values.iter())
            .map(|(a, b)| a + b)
            .collect();
        Ok(Vector { rows: self.rows, values })
    }
}

/// Accepts only single-column matrices.
impl TryFrom<Matrix> for Vector {
    type Error = NetError;

    fn try_from(m: Matrix) -> Result<Vector> {
        if m.cols() != 1 {
            return Err(NetError::DimensionMismatch {
                operation: "Vector::try_from",
                left: m.shape(),
                right: (m.rows(), 1),
            });
        }
        let rows = m.rows();
        Vector::from_data(rows, m.into_inner())
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match self.values.get(index) {
            Some(x) => x,
            None => panic!(
                "{}",
                NetError::IndexOutOfRange { index: (index, 0), shape: (self.rows, 1) }
            ),
        }
    }
}

impl Add for &Vector {
    type Output = Result<Vector>;

    fn add(self, rhs: Self) -> Self::Output {
        Vector::add(self, rhs)
    }
}

impl PartialEq<Matrix> for Vector {
    fn eq(&self, other: &Matrix) -> bool {
        other == self
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}r vector", self.rows)?;
        for x in &self.values {
            writeln!(f, "\t{x:.3}")?;
        }
        Ok(())
    }
}
