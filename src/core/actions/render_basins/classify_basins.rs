use crate::core::actions::row_map::ports::compute_backend::{ComputeBackend, RowLayoutError};
use crate::core::data::complex::Complex;
use crate::core::data::complex_grid::ComplexGrid;
use crate::core::data::grid_dims::GridDims;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use crate::core::data::root_set::RootSet;
use std::error::Error;
use std::fmt;

pub const FILL_INTENSITY: u8 = 255;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ClassifyBasinsError {
    DimsMismatch { grid: GridDims, buffer: GridDims },
    RowLayout(RowLayoutError),
}

impl fmt::Display for ClassifyBasinsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimsMismatch { grid, buffer } => {
                write!(
                    f,
                    "grid is {}x{} but pixel buffer is {}x{}",
                    grid.width(),
                    grid.height(),
                    buffer.width(),
                    buffer.height()
                )
            }
            Self::RowLayout(err) => write!(f, "row layout error: {}", err),
        }
    }
}

impl Error for ClassifyBasinsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::DimsMismatch { .. } => None,
            Self::RowLayout(err) => Some(err),
        }
    }
}

impl From<RowLayoutError> for ClassifyBasinsError {
    fn from(err: RowLayoutError) -> Self {
        Self::RowLayout(err)
    }
}

/// Basin membership, one colour channel per root.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Basin {
    A,
    B,
    C,
}

impl Basin {
    #[must_use]
    pub fn channel(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
        }
    }
}

/// Nearest root by squared distance. Ties are broken in a fixed order:
/// `a` beats `b` and `c`, `b` beats `c`. Non-finite coordinates fail every
/// comparison and fall through to `c`.
#[must_use]
pub fn nearest_root(x: Complex, roots: RootSet) -> Basin {
    let distance_a = (x - roots.a).magnitude_squared();
    let distance_b = (x - roots.b).magnitude_squared();
    let distance_c = (x - roots.c).magnitude_squared();

    if distance_a <= distance_b && distance_a <= distance_c {
        Basin::A
    } else if distance_b <= distance_a && distance_b <= distance_c {
        Basin::B
    } else {
        Basin::C
    }
}

/// Writes a one-hot colour mask for every cell of the converged grid:
/// full intensity in the nearest root's channel, all other channels and
/// alpha left at zero. The buffer is cleared first; the write pass only
/// ever sets bits.
pub fn classify_basins<B: ComputeBackend>(
    backend: &B,
    grid: &ComplexGrid,
    roots: RootSet,
    out: &mut PixelBuffer,
) -> Result<(), ClassifyBasinsError> {
    if grid.dims() != out.dims() {
        return Err(ClassifyBasinsError::DimsMismatch {
            grid: grid.dims(),
            buffer: out.dims(),
        });
    }

    out.clear();

    let width = grid.dims().width() as usize;
    let cells = grid.cells();

    backend.for_each_row(out.data_mut(), width * BYTES_PER_PIXEL, |row, row_bytes| {
        let row_cells = &cells[row * width..(row + 1) * width];

        for (col, cell) in row_cells.iter().enumerate() {
            let channel = nearest_root(*cell, roots).channel();
            row_bytes[col * BYTES_PER_PIXEL + channel] = FILL_INTENSITY;
        }
    })?;

    Ok(())
}
