pub mod classify_basins;
pub mod initialize_grid;
pub mod newton_sweep;
pub mod render_basins;
