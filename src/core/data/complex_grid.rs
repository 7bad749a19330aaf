use crate::core::data::complex::Complex;
use crate::core::data::grid_dims::GridDims;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ComplexGridError {
    BoundsMismatch {
        expected_cells: usize,
        actual_cells: usize,
    },
}

impl fmt::Display for ComplexGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                expected_cells,
                actual_cells,
            } => {
                write!(
                    f,
                    "grid cell count {} does not match buffer cell count {}",
                    expected_cells, actual_cells
                )
            }
        }
    }
}

impl Error for ComplexGridError {}

/// Frame-scoped working storage: a row-major matrix of complex values,
/// written by grid initialization, updated in place by the iteration
/// sweeps, and read by classification.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexGrid {
    dims: GridDims,
    cells: Vec<Complex>,
}

impl ComplexGrid {
    #[must_use]
    pub fn new(dims: GridDims) -> Self {
        Self {
            dims,
            cells: vec![Complex::ZERO; dims.cell_count()],
        }
    }

    pub fn from_cells(dims: GridDims, cells: Vec<Complex>) -> Result<Self, ComplexGridError> {
        if cells.len() != dims.cell_count() {
            return Err(ComplexGridError::BoundsMismatch {
                expected_cells: dims.cell_count(),
                actual_cells: cells.len(),
            });
        }

        Ok(Self { dims, cells })
    }

    #[must_use]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    #[must_use]
    pub fn cells(&self) -> &[Complex] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [Complex] {
        &mut self.cells
    }

    #[must_use]
    pub fn cell(&self, row: u32, col: u32) -> Option<Complex> {
        if row >= self.dims.height() || col >= self.dims.width() {
            return None;
        }

        let index = row as usize * self.dims.width() as usize + col as usize;
        Some(self.cells[index])
    }
}
