use std::ops::{Index, IndexMut};

use crate::foundation::error::{BlockpyrError, BlockpyrResult};

/// Dense row-major matrix of `f64` values.
///
/// The buffer length always equals `rows * cols`. The empty 0x0 matrix is the
/// [`Default`] value and is what [`Matrix::take`] leaves behind.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Zero-filled `rows x cols` matrix.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, 0.0)
    }

    /// `rows x cols` matrix with every element set to `value`.
    pub fn filled(rows: usize, cols: usize, value: f64) -> Self {
        Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }

    /// Wrap a row-major buffer. The buffer length must equal `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> BlockpyrResult<Self> {
        let expected = rows
            .checked_mul(cols)
            .ok_or_else(|| BlockpyrError::validation("matrix size overflow"))?;
        if data.len() != expected {
            return Err(BlockpyrError::validation(format!(
                "matrix buffer has {} values, expected {rows}x{cols} = {expected}",
                data.len()
            )));
        }
        Ok(Self { rows, cols, data })
    }

    /// Build a matrix from nested rows. All rows must have the same length.
    pub fn from_rows(rows: &[&[f64]]) -> BlockpyrResult<Self> {
        let cols = rows.first().map_or(0, |r| r.len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            if row.len() != cols {
                return Err(BlockpyrError::validation(
                    "from_rows expects rows of equal length",
                ));
            }
            data.extend_from_slice(row);
        }
        Self::from_vec(rows.len(), cols, data)
    }

    /// `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::new(n, n);
        for i in 0..n {
            m[(i, i)] = 1.0;
        }
        m
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// `true` when the matrix holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Row-major element buffer.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Mutable row-major element buffer. The length is fixed, so the shape is preserved.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Consume into the row-major buffer.
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Move the contents out, leaving `self` as the empty 0x0 matrix.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Elementwise sum.
    pub fn add(&self, other: &Self) -> BlockpyrResult<Self> {
        self.zip_with("add", other, |a, b| a + b)
    }

    /// Elementwise difference `self - other`.
    pub fn subtract(&self, other: &Self) -> BlockpyrResult<Self> {
        self.zip_with("subtract", other, |a, b| a - b)
    }

    /// Elementwise (Hadamard) product.
    pub fn multiply_elementwise(&self, other: &Self) -> BlockpyrResult<Self> {
        self.zip_with("multiply_elementwise", other, |a, b| a * b)
    }

    /// Standard matrix product. Requires `self.cols == other.rows`.
    pub fn matmul(&self, other: &Self) -> BlockpyrResult<Self> {
        if self.cols != other.rows {
            return Err(BlockpyrError::dimension_mismatch(
                "matmul",
                self.shape(),
                other.shape(),
            ));
        }
        let mut out = Self::new(self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut acc = 0.0;
                for k in 0..self.cols {
                    acc += self[(i, k)] * other[(k, j)];
                }
                out[(i, j)] = acc;
            }
        }
        Ok(out)
    }

    /// Multiply every element by `scalar`.
    pub fn scale(&self, scalar: f64) -> Self {
        self.map(|v| v * scalar)
    }

    /// Elementwise division. Division by zero follows IEEE semantics.
    pub fn divide(&self, scalar: f64) -> Self {
        self.map(|v| v / scalar)
    }

    /// `cols x rows` transpose.
    pub fn transpose(&self) -> Self {
        let mut out = Self::new(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                out[(j, i)] = self[(i, j)];
            }
        }
        out
    }

    /// Determinant by cofactor expansion along the first row.
    ///
    /// Runs in O(n!) time and is meant for small matrices only. Non-square input fails with
    /// [`BlockpyrError::DimensionMismatch`]; the 0x0 matrix has determinant 1.
    pub fn determinant(&self) -> BlockpyrResult<f64> {
        if self.rows != self.cols {
            return Err(BlockpyrError::dimension_mismatch(
                "determinant",
                self.shape(),
                (self.cols, self.cols),
            ));
        }
        Ok(self.cofactor_det())
    }

    fn cofactor_det(&self) -> f64 {
        let n = self.rows;
        match n {
            0 => 1.0,
            1 => self.data[0],
            2 => self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)],
            _ => {
                let mut det = 0.0;
                for i in 0..n {
                    let minor = self.minor(0, i);
                    let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
                    det += self[(0, i)] * sign * minor.cofactor_det();
                }
                det
            }
        }
    }

    fn minor(&self, skip_row: usize, skip_col: usize) -> Self {
        let mut data = Vec::with_capacity((self.rows - 1) * (self.cols - 1));
        for r in (0..self.rows).filter(|&r| r != skip_row) {
            for c in (0..self.cols).filter(|&c| c != skip_col) {
                data.push(self[(r, c)]);
            }
        }
        Self {
            rows: self.rows - 1,
            cols: self.cols - 1,
            data,
        }
    }

    /// Apply `f` to every element.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    fn zip_with(
        &self,
        op: &'static str,
        other: &Self,
        f: impl Fn(f64, f64) -> f64,
    ) -> BlockpyrResult<Self> {
        if self.shape() != other.shape() {
            return Err(BlockpyrError::dimension_mismatch(
                op,
                self.shape(),
                other.shape(),
            ));
        }
        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        })
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.data[i * self.cols + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        &mut self.data[i * self.cols + j]
    }
}

impl Index<usize> for Matrix {
    type Output = f64;

    fn index(&self, k: usize) -> &f64 {
        &self.data[k]
    }
}

impl IndexMut<usize> for Matrix {
    fn index_mut(&mut self, k: usize) -> &mut f64 {
        &mut self.data[k]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/matrix.rs"]
mod tests;
