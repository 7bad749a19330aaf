use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use std::io::Write;
use std::path::Path;

/// Serializes a rendered frame as binary PPM. The format carries RGB
/// only, so the unused fourth channel of each pixel is dropped.
pub fn write_ppm(buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let mut file = std::fs::File::create(filepath)?;

    // PPM header: P6 means binary RGB, then width height max_colour
    writeln!(file, "P6")?;
    writeln!(file, "{} {}", buffer.dims().width(), buffer.dims().height())?;
    writeln!(file, "255")?;

    let mut rgb = Vec::with_capacity(buffer.dims().cell_count() * 3);
    for pixel in buffer.data().chunks_exact(BYTES_PER_PIXEL) {
        rgb.extend_from_slice(&pixel[..3]);
    }
    file.write_all(&rgb)?;

    Ok(())
}
