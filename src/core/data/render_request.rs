use crate::core::data::viewport::Viewport;
use crate::core::fractals::fractal_kinds::FractalKinds;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RenderRequestError {
    ZeroResolution { width: u32, height: u32 },
    ZeroMaxIterations,
}

impl fmt::Display for RenderRequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroResolution { width, height } => {
                write!(f, "render resolution must be positive: {}x{}", width, height)
            }
            Self::ZeroMaxIterations => {
                write!(f, "iteration cap must be greater than zero")
            }
        }
    }
}

impl Error for RenderRequestError {}

/// Immutable snapshot consumed by one render call.
///
/// Carries the viewport bounds by value so that later zoom events cannot
/// mutate what an in-flight render reads.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderRequest {
    viewport: Viewport,
    width: u32,
    height: u32,
    max_iterations: u32,
    kind: FractalKinds,
}

impl RenderRequest {
    pub fn new(
        viewport: Viewport,
        width: u32,
        height: u32,
        max_iterations: u32,
        kind: FractalKinds,
    ) -> Result<Self, RenderRequestError> {
        if width == 0 || height == 0 {
            return Err(RenderRequestError::ZeroResolution { width, height });
        }

        if max_iterations == 0 {
            return Err(RenderRequestError::ZeroMaxIterations);
        }

        Ok(Self {
            viewport,
            width,
            height,
            max_iterations,
            kind,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn kind(&self) -> FractalKinds {
        self.kind
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
