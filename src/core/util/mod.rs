pub mod complex_plane_coords;
