use crate::core::data::complex::Complex;
use crate::core::data::grid_dims::GridDims;
use crate::core::data::viewport::Viewport;

/// Plane coordinate of the pixel at `(row, col)`: the real axis grows to
/// the right, the imaginary axis grows upward, so rows count down from
/// `top`. Pure and total; indices outside the grid extrapolate linearly.
#[must_use]
pub fn pixel_to_complex_coords(
    row: u32,
    col: u32,
    viewport: Viewport,
    dims: GridDims,
) -> Complex {
    let unit = viewport.pixel_step(dims);

    Complex {
        real: viewport.left() + unit * f64::from(col),
        imag: viewport.top() - unit * f64::from(row),
    }
}

/// Inverse map, used to place root markers: fractional pixel position of a
/// plane coordinate on a `dims`-sized canvas.
#[must_use]
pub fn complex_to_pixel_coords(value: Complex, viewport: Viewport, dims: GridDims) -> (f64, f64) {
    let x = (value.real - viewport.left()) / viewport.unit_width() * f64::from(dims.width());
    let y = (viewport.top() - value.imag) / viewport.unit_height(dims) * f64::from(dims.height());

    (x, y)
}
