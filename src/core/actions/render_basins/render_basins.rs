use crate::core::actions::render_basins::classify_basins::{ClassifyBasinsError, classify_basins};
use crate::core::actions::render_basins::initialize_grid::initialize_grid;
use crate::core::actions::render_basins::newton_sweep::newton_iterate;
use crate::core::actions::row_map::ports::compute_backend::{ComputeBackend, RowLayoutError};
use crate::core::data::complex_grid::ComplexGrid;
use crate::core::data::grid_dims::GridDims;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::root_set::RootSet;
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RenderBasinsError {
    DimsMismatch { grid: GridDims, buffer: GridDims },
    RowLayout(RowLayoutError),
}

impl fmt::Display for RenderBasinsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimsMismatch { grid, buffer } => {
                write!(
                    f,
                    "working grid is {}x{} but pixel buffer is {}x{}",
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

impl Error for RenderBasinsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::DimsMismatch { .. } => None,
            Self::RowLayout(err) => Some(err),
        }
    }
}

impl From<RowLayoutError> for RenderBasinsError {
    fn from(err: RowLayoutError) -> Self {
        Self::RowLayout(err)
    }
}

impl From<ClassifyBasinsError> for RenderBasinsError {
    fn from(err: ClassifyBasinsError) -> Self {
        match err {
            ClassifyBasinsError::DimsMismatch { grid, buffer } => {
                Self::DimsMismatch { grid, buffer }
            }
            ClassifyBasinsError::RowLayout(err) => Self::RowLayout(err),
        }
    }
}

/// Sequences the pipeline against a chosen compute backend: derive the
/// symmetric coefficients once, initialize the working grid, run the
/// requested number of Newton sweeps, classify into the pixel buffer.
/// Every stage completes before the next begins, and `render` returns only
/// once the whole frame is done; there is no partial delivery and no
/// cancellation.
///
/// The renderer holds no per-frame state, so it can be invoked any number
/// of times with different parameters. Identical inputs produce
/// byte-identical buffers.
#[derive(Debug)]
pub struct BasinRenderer<B: ComputeBackend> {
    backend: B,
}

impl<B: ComputeBackend> BasinRenderer<B> {
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Renders one frame into freshly allocated storage.
    pub fn render(
        &self,
        roots: RootSet,
        viewport: Viewport,
        dims: GridDims,
        iterations: u32,
    ) -> Result<PixelBuffer, RenderBasinsError> {
        let mut grid = ComplexGrid::new(dims);
        let mut out = PixelBuffer::new(dims);

        self.render_into(roots, viewport, iterations, &mut grid, &mut out)?;

        Ok(out)
    }

    /// Renders one frame reusing caller-provided storage. The grid and the
    /// buffer are exclusively owned by this call for its duration and must
    /// share dimensions.
    pub fn render_into(
        &self,
        roots: RootSet,
        viewport: Viewport,
        iterations: u32,
        grid: &mut ComplexGrid,
        out: &mut PixelBuffer,
    ) -> Result<(), RenderBasinsError> {
        if grid.dims() != out.dims() {
            return Err(RenderBasinsError::DimsMismatch {
                grid: grid.dims(),
                buffer: out.dims(),
            });
        }

        let coefficients = roots.coefficients();

        initialize_grid(&self.backend, grid, viewport)?;
        newton_iterate(&self.backend, grid, &coefficients, iterations)?;
        classify_basins(&self.backend, grid, roots, out)?;

        Ok(())
    }
}
