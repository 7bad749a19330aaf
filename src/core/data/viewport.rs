use crate::core::data::grid_dims::GridDims;
use std::error::Error;
use std::fmt;

const ZOOM_FACTOR_PER_STEP: f64 = 0.95;
const ZOOM_RECENTER_FRACTION: f64 = 0.025;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidWidth { unit_width: f64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWidth { unit_width } => {
                write!(
                    f,
                    "viewport unit width must be positive and finite: {}",
                    unit_width
                )
            }
        }
    }
}

impl Error for ViewportError {}

/// The affine transform between grid indices and plane coordinates: the
/// plane coordinate of the top-left pixel plus the plane width spanned by
/// the grid. The plane height follows from the grid's aspect ratio.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    left: f64,
    top: f64,
    unit_width: f64,
}

impl Viewport {
    pub fn new(left: f64, top: f64, unit_width: f64) -> Result<Self, ViewportError> {
        if unit_width <= 0.0 || !unit_width.is_finite() {
            return Err(ViewportError::InvalidWidth { unit_width });
        }

        Ok(Self {
            left,
            top,
            unit_width,
        })
    }

    #[must_use]
    pub fn left(&self) -> f64 {
        self.left
    }

    #[must_use]
    pub fn top(&self) -> f64 {
        self.top
    }

    #[must_use]
    pub fn unit_width(&self) -> f64 {
        self.unit_width
    }

    #[must_use]
    pub fn unit_height(&self, dims: GridDims) -> f64 {
        self.unit_width * f64::from(dims.height()) / f64::from(dims.width())
    }

    /// Plane distance between two horizontally adjacent pixel centres.
    #[must_use]
    pub fn pixel_step(&self, dims: GridDims) -> f64 {
        self.unit_width / f64::from(dims.width())
    }

    /// Shifts the visible region by a pointer delta measured in pixels.
    /// Dragging right moves the viewport left, so the plane follows the
    /// pointer.
    pub fn pan_by_pixels(&mut self, dx: f64, dy: f64, dims: GridDims) {
        self.left -= dx * self.unit_width / f64::from(dims.width());
        self.top += dy * self.unit_height(dims) / f64::from(dims.height());
    }

    /// Applies `steps` wheel notches of zoom. Positive steps zoom in,
    /// scaling the spanned width by 0.95 per step and nudging the top-left
    /// corner inward so the view stays roughly centred.
    pub fn zoom(&mut self, steps: f64, dims: GridDims) {
        let unit_height = self.unit_height(dims);
        self.top -= unit_height * steps * ZOOM_RECENTER_FRACTION;
        self.left += self.unit_width * steps * ZOOM_RECENTER_FRACTION;
        self.unit_width *= ZOOM_FACTOR_PER_STEP.powf(steps);
    }
}
