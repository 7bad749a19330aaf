use crate::core::actions::row_map::ports::compute_backend::{ComputeBackend, RowLayoutError};
use crate::core::data::complex::Complex;
use crate::core::data::complex_grid::ComplexGrid;
use crate::core::data::root_set::SymmetricCoefficients;

/// One Newton-Raphson update, `x - f(x)/f'(x)`, for the cubic in expanded
/// symmetric-coefficient form. A vanishing derivative yields non-finite
/// components; they are not trapped and flow through to classification.
#[must_use]
pub fn newton_step(x: Complex, coefficients: &SymmetricCoefficients) -> Complex {
    x - coefficients.value(x) / coefficients.slope(x)
}

/// One full sweep: applies `newton_step` to every cell in place. Each
/// cell's update reads only that cell's prior value, so cells need no
/// ordering among themselves.
pub fn newton_sweep<B: ComputeBackend>(
    backend: &B,
    grid: &mut ComplexGrid,
    coefficients: &SymmetricCoefficients,
) -> Result<(), RowLayoutError> {
    let row_len = grid.dims().width() as usize;

    backend.for_each_row(grid.cells_mut(), row_len, |_, row_cells| {
        for cell in row_cells.iter_mut() {
            *cell = newton_step(*cell, coefficients);
        }
    })
}

/// Exactly `sweeps` sweeps composed sequentially. Sweep `k + 1` must
/// observe every cell of sweep `k`; `for_each_row` returning only after a
/// sweep completes is the barrier that guarantees it. Zero sweeps leaves
/// the grid untouched.
pub fn newton_iterate<B: ComputeBackend>(
    backend: &B,
    grid: &mut ComplexGrid,
    coefficients: &SymmetricCoefficients,
    sweeps: u32,
) -> Result<(), RowLayoutError> {
    for _ in 0..sweeps {
        newton_sweep(backend, grid, coefficients)?;
    }

    Ok(())
}
