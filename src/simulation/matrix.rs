use crate::error::{SimError, SimResult};

/// Dense row-major matrix of f64.
///
/// `add` and `scale` always produce a new matrix; neither operand is touched.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Create a zero-filled matrix
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Wrap row-major data, checking that its length fits the shape
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> SimResult<Self> {
        if data.len() != rows * cols {
            return Err(SimError::InvalidDimensions(format!(
                "{} values cannot fill a {}x{} matrix",
                data.len(),
                rows,
                cols
            )));
        }
        Ok(Self { rows, cols, data })
    }

    /// Build from nested rows; every row must have the same length
    pub fn from_rows(rows: &[Vec<f64>]) -> SimResult<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().position(|row| row.len() != cols) {
            return Err(SimError::InvalidDimensions(format!(
                "row {} has {} columns, expected {}",
                bad,
                rows[bad].len(),
                cols
            )));
        }
        let data = rows.iter().flatten().copied().collect();
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.cols + col] = value;
    }

    /// One row as a slice
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    pub fn row_mut(&mut self, row: usize) -> &mut [f64] {
        let start = row * self.cols;
        &mut self.data[start..start + self.cols]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Element-wise sum. Fails without allocating if the shapes differ.
    pub fn add(&self, other: &Matrix) -> SimResult<Matrix> {
        if self.shape() != other.shape() {
            return Err(SimError::ShapeMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| a + b)
            .collect();
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    /// Multiply every element by `factor`
    pub fn scale(&self, factor: f64) -> Matrix {
        self.map(|value| value * factor)
    }

    /// Apply `f` element-wise
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Matrix {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&value| f(value)).collect(),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|value| value.is_finite())
    }

    /// Largest absolute entry (0 for an empty matrix)
    pub fn max_abs(&self) -> f64 {
        self.data.iter().fold(0.0f64, |acc, value| acc.max(value.abs()))
    }
}
