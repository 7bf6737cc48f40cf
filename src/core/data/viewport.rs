use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidBounds {
        xmin: f64,
        xmax: f64,
        ymin: f64,
        ymax: f64,
    },
    InvalidScale {
        scale: f64,
    },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBounds {
                xmin,
                xmax,
                ymin,
                ymax,
            } => {
                write!(
                    f,
                    "viewport bounds must be finite with xmin < xmax and ymin < ymax: x [{}, {}], y [{}, {}]",
                    xmin, xmax, ymin, ymax
                )
            }
            Self::InvalidScale { scale } => {
                write!(f, "zoom scale must be finite and positive: {}", scale)
            }
        }
    }
}

impl Error for ViewportError {}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToPlaneError {
    ZeroResolution { width: u32, height: u32 },
    PixelOutsideGrid { px: u32, py: u32, width: u32, height: u32 },
}

impl fmt::Display for PixelToPlaneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroResolution { width, height } => {
                write!(f, "pixel grid must be positive: {}x{}", width, height)
            }
            Self::PixelOutsideGrid {
                px,
                py,
                width,
                height,
            } => {
                write!(
                    f,
                    "pixel (x: {}, y: {}) is outside the grid {}x{}",
                    px, py, width, height
                )
            }
        }
    }
}

impl Error for PixelToPlaneError {}

/// The rectangle of the complex plane currently mapped onto the pixel grid.
///
/// Bounds are replaced atomically by the zoom operations; no aspect-ratio
/// normalization is applied, so a non-square rectangle renders stretched.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    xmin: f64,
    xmax: f64,
    ymin: f64,
    ymax: f64,
}

impl Viewport {
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Result<Self, ViewportError> {
        let all_finite =
            xmin.is_finite() && xmax.is_finite() && ymin.is_finite() && ymax.is_finite();

        if !all_finite || xmin >= xmax || ymin >= ymax {
            return Err(ViewportError::InvalidBounds {
                xmin,
                xmax,
                ymin,
                ymax,
            });
        }

        Ok(Self {
            xmin,
            xmax,
            ymin,
            ymax,
        })
    }

    #[must_use]
    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    #[must_use]
    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    #[must_use]
    pub fn ymin(&self) -> f64 {
        self.ymin
    }

    #[must_use]
    pub fn ymax(&self) -> f64 {
        self.ymax
    }

    #[must_use]
    pub fn plane_width(&self) -> f64 {
        self.xmax - self.xmin
    }

    #[must_use]
    pub fn plane_height(&self) -> f64 {
        self.ymax - self.ymin
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex::new((self.xmin + self.xmax) / 2.0, (self.ymin + self.ymax) / 2.0)
    }

    /// Maps a pixel of a `width`x`height` grid to its plane coordinates.
    ///
    /// `x = xmin + (px/width)·(xmax-xmin)`, likewise for y. The pixel domain
    /// is half-open: `px ∈ [0, width)`, `py ∈ [0, height)`.
    pub fn pixel_to_plane(
        &self,
        px: u32,
        py: u32,
        width: u32,
        height: u32,
    ) -> Result<Complex, PixelToPlaneError> {
        if width == 0 || height == 0 {
            return Err(PixelToPlaneError::ZeroResolution { width, height });
        }

        if px >= width || py >= height {
            return Err(PixelToPlaneError::PixelOutsideGrid {
                px,
                py,
                width,
                height,
            });
        }

        let x = self.xmin + (px as f64 / width as f64) * self.plane_width();
        let y = self.ymin + (py as f64 / height as f64) * self.plane_height();

        Ok(Complex::new(x, y))
    }

    /// Recenters the viewport on `center` and scales both dimensions by
    /// `scale` (< 1 zooms in, > 1 zooms out).
    ///
    /// A non-finite center is the undefined-coordinate case (pointer outside
    /// the canvas) and leaves the bounds untouched; it is not an error.
    pub fn zoom_at(&mut self, center: Complex, scale: f64) -> Result<(), ViewportError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ViewportError::InvalidScale { scale });
        }

        if !center.is_finite() {
            return Ok(());
        }

        let half_width = self.plane_width() * scale / 2.0;
        let half_height = self.plane_height() * scale / 2.0;

        self.xmin = center.real - half_width;
        self.xmax = center.real + half_width;
        self.ymin = center.imag - half_height;
        self.ymax = center.imag + half_height;

        Ok(())
    }

    /// One step of continuous zoom: recenters on the viewport's own center
    /// and scales both dimensions by `factor` (< 1 for zoom-in animation).
    pub fn auto_zoom_step(&mut self, factor: f64) -> Result<(), ViewportError> {
        self.zoom_at(self.center(), factor)
    }
}
