use std::time::Instant;

use crate::controllers::explorer::state::ExplorerState;
use crate::core::actions::render_basins::render_basins::BasinRenderer;
use crate::core::actions::row_map::select_backend::select_backend;
use crate::core::data::grid_dims::GridDims;
use crate::storage::write_ppm::write_ppm;

/// Renders the default scene once and writes it to disk, standing in for
/// the live presentation collaborator.
pub fn newton_controller() -> Result<(), Box<dyn std::error::Error>> {
    let dims = GridDims::new(1024, 768)?;
    let filepath = "output/newton_basins.ppm";

    let state = ExplorerState::default();
    let renderer = BasinRenderer::new(select_backend());

    log::info!(
        "rendering newton basins at {}x{}, {} iterations",
        dims.width(),
        dims.height(),
        state.iteration_count()
    );

    let start = Instant::now();
    let buffer = renderer.render(
        state.roots(),
        state.viewport(),
        dims,
        state.iteration_count(),
    )?;
    log::info!("rendered in {:?}", start.elapsed());

    std::fs::create_dir_all("output")?;
    write_ppm(&buffer, filepath)?;
    log::info!("saved to {}", filepath);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newton_controller_returns_ok() {
        let result = newton_controller();

        assert!(result.is_ok());
    }
}
