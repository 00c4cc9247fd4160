use rand::Rng;

use crate::error::{SimError, SimResult};
use crate::simulation::matrix::Matrix;

/// Displacement and velocity of every plate in an `m x n` lattice.
///
/// Packed as one `m x 2n` matrix: columns `[0, n)` hold displacement `z`,
/// columns `[n, 2n)` hold velocity `v` for the same row.
/// Rows `0` and `m - 1` are the clamped supports.
#[derive(Clone, Debug, PartialEq)]
pub struct LatticeState {
    packed: Matrix,
    cols: usize,
}

impl LatticeState {
    /// Create a lattice at rest (all displacements and velocities zero)
    pub fn new(rows: usize, cols: usize) -> SimResult<Self> {
        check_dimensions(rows, cols)?;
        Ok(Self {
            packed: Matrix::zeros(rows, 2 * cols),
            cols,
        })
    }

    /// Adopt a packed `m x 2n` matrix as-is.
    ///
    /// Boundary rows are not cleared here; the first derivative evaluation
    /// or step does that.
    pub fn from_matrix(packed: Matrix) -> SimResult<Self> {
        if packed.cols() % 2 != 0 {
            return Err(SimError::InvalidDimensions(format!(
                "packed lattice needs an even column count (displacement + velocity), got {}",
                packed.cols()
            )));
        }
        let cols = packed.cols() / 2;
        check_dimensions(packed.rows(), cols)?;
        Ok(Self { packed, cols })
    }

    /// Lattice at rest except for interior displacements drawn uniformly
    /// from `[-amplitude, amplitude]`
    pub fn perturbed<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        amplitude: f64,
        rng: &mut R,
    ) -> SimResult<Self> {
        let mut state = Self::new(rows, cols)?;
        if amplitude <= 0.0 || !amplitude.is_finite() {
            return Ok(state);
        }
        for i in 1..rows - 1 {
            for j in 0..cols {
                let z = rng.gen_range(-amplitude..=amplitude);
                state.set_plate(i, j, z, 0.0);
            }
        }
        Ok(state)
    }

    /// Number of plate rows (m)
    pub fn rows(&self) -> usize {
        self.packed.rows()
    }

    /// Number of plate columns (n)
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn plate_count(&self) -> usize {
        self.rows() * self.cols
    }

    /// True for the clamped first and last rows
    #[inline]
    pub fn is_boundary_row(&self, row: usize) -> bool {
        row == 0 || row + 1 == self.rows()
    }

    #[inline]
    pub fn displacement(&self, row: usize, col: usize) -> f64 {
        self.packed.get(row, col)
    }

    #[inline]
    pub fn velocity(&self, row: usize, col: usize) -> f64 {
        self.packed.get(row, col + self.cols)
    }

    pub fn set_plate(&mut self, row: usize, col: usize, z: f64, v: f64) {
        self.packed.set(row, col, z);
        self.packed.set(row, col + self.cols, v);
    }

    /// Zero state of the same shape
    pub fn at_rest(&self) -> LatticeState {
        Self {
            packed: Matrix::zeros(self.packed.rows(), self.packed.cols()),
            cols: self.cols,
        }
    }

    /// Row-major copy of every plate's displacement
    pub fn displacements(&self) -> Vec<f64> {
        (0..self.rows())
            .flat_map(|i| self.packed.row(i)[..self.cols].to_vec())
            .collect()
    }

    pub fn matrix(&self) -> &Matrix {
        &self.packed
    }

    pub fn into_matrix(self) -> Matrix {
        self.packed
    }

    /// Zero displacement and velocity on both supports
    pub fn clamp_boundaries(&mut self) {
        let last = self.rows() - 1;
        self.packed.row_mut(0).fill(0.0);
        self.packed.row_mut(last).fill(0.0);
    }

    /// `self + factor * rate`, the building block of every RK4 stage
    pub fn offset(&self, rate: &LatticeState, factor: f64) -> SimResult<LatticeState> {
        let packed = self.packed.add(&rate.packed.scale(factor))?;
        Ok(Self {
            packed,
            cols: self.cols,
        })
    }

    pub fn is_finite(&self) -> bool {
        self.packed.is_finite()
    }
}

pub(crate) fn check_dimensions(rows: usize, cols: usize) -> SimResult<()> {
    if rows < 3 {
        return Err(SimError::InvalidDimensions(format!(
            "lattice needs at least 3 rows (two clamped supports and one free row), got {}",
            rows
        )));
    }
    if cols < 1 {
        return Err(SimError::InvalidDimensions(
            "lattice needs at least 1 column".to_string(),
        ));
    }
    Ok(())
}
