mod controllers;
mod core;
mod storage;

pub use controllers::explorer::state::{DEFAULT_ITERATION_COUNT, ExplorerState, RootId};
pub use controllers::newton::newton_controller;
pub use storage::write_ppm::write_ppm;

pub use crate::core::actions::render_basins::classify_basins::{Basin, nearest_root};
pub use crate::core::actions::render_basins::render_basins::{BasinRenderer, RenderBasinsError};
pub use crate::core::actions::row_map::ports::compute_backend::ComputeBackend;
pub use crate::core::actions::row_map::select_backend::{SelectedBackend, select_backend};
pub use crate::core::actions::row_map::serial_backend::SerialBackend;
pub use crate::core::actions::row_map::threaded_backend::ThreadedBackend;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::complex_grid::ComplexGrid;
pub use crate::core::data::grid_dims::GridDims;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::root_set::{RootSet, SymmetricCoefficients};
pub use crate::core::data::viewport::Viewport;
pub use crate::core::util::complex_plane_coords::{
    complex_to_pixel_coords, pixel_to_complex_coords,
};
