use crate::core::data::complex::Complex;

/// Selects which quadratic escape-time family member to iterate.
///
/// Mandelbrot varies c per pixel with z starting at 0; Julia fixes c and
/// starts z at the pixel's own plane coordinate.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FractalKinds {
    Mandelbrot,
    Julia { c: Complex },
}

impl FractalKinds {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia { .. } => "Julia",
        }
    }
}

impl Default for FractalKinds {
    fn default() -> Self {
        // the classic exploration constant
        Self::Julia {
            c: Complex {
                real: -0.7,
                imag: 0.27015,
            },
        }
    }
}
