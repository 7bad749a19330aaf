use crate::core::actions::row_map::ports::compute_backend::{ComputeBackend, RowLayoutError};
use crate::core::data::complex_grid::ComplexGrid;
use crate::core::data::viewport::Viewport;
use crate::core::util::complex_plane_coords::pixel_to_complex_coords;

/// Fills every cell `(row, col)` with its plane coordinate under the
/// viewport transform. One data-parallel pass; cells are independent and
/// the previous grid contents are overwritten.
pub fn initialize_grid<B: ComputeBackend>(
    backend: &B,
    grid: &mut ComplexGrid,
    viewport: Viewport,
) -> Result<(), RowLayoutError> {
    let dims = grid.dims();
    let row_len = dims.width() as usize;

    backend.for_each_row(grid.cells_mut(), row_len, |row, row_cells| {
        for (col, cell) in row_cells.iter_mut().enumerate() {
            *cell = pixel_to_complex_coords(row as u32, col as u32, viewport, dims);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::row_map::serial_backend::SerialBackend;
    use crate::core::actions::row_map::threaded_backend::ThreadedBackend;
    use crate::core::data::complex::Complex;
    use crate::core::data::grid_dims::GridDims;

    fn small_scene() -> (Viewport, GridDims) {
        let viewport = Viewport::new(-2.0, 2.0, 4.0).unwrap();
        let dims = GridDims::new(4, 4).unwrap();
        (viewport, dims)
    }

    #[test]
    fn test_cells_hold_their_plane_coordinates() {
        let (viewport, dims) = small_scene();
        let mut grid = ComplexGrid::new(dims);

        initialize_grid(&SerialBackend, &mut grid, viewport).unwrap();

        // unit = 4/4 = 1, so cell (row, col) sits at (-2 + col, 2 - row).
        assert_eq!(
            grid.cell(0, 0).unwrap(),
            Complex {
                real: -2.0,
                imag: 2.0
            }
        );
        assert_eq!(
            grid.cell(3, 2).unwrap(),
            Complex {
                real: 0.0,
                imag: -1.0
            }
        );
    }

    #[test]
    fn test_overwrites_previous_contents() {
        let (viewport, dims) = small_scene();
        let stale = Complex {
            real: 99.0,
            imag: 99.0,
        };
        let mut grid = ComplexGrid::from_cells(dims, vec![stale; dims.cell_count()]).unwrap();

        initialize_grid(&SerialBackend, &mut grid, viewport).unwrap();

        assert!(grid.cells().iter().all(|cell| *cell != stale));
    }

    #[test]
    fn test_threaded_and_serial_agree() {
        let (viewport, dims) = small_scene();
        let mut serial_grid = ComplexGrid::new(dims);
        let mut threaded_grid = ComplexGrid::new(dims);

        initialize_grid(&SerialBackend, &mut serial_grid, viewport).unwrap();
        initialize_grid(&ThreadedBackend::new().unwrap(), &mut threaded_grid, viewport).unwrap();

        assert_eq!(serial_grid, threaded_grid);
    }
}
