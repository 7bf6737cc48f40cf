use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::data::intensity_field::IntensityField;
use crate::core::data::render_request::RenderRequest;
use crate::core::data::viewport::PixelToPlaneError;
use crate::core::fractals::escape_time::escape_time_measure;
use std::error::Error;
use std::fmt;

/// Error type for cancel-aware field rendering.
///
/// Distinguishes cancellation from mapping failures so that callers can
/// treat a superseded render as control flow rather than an error.
#[derive(Debug, PartialEq)]
pub enum RenderFieldError {
    /// The render was cancelled before completion.
    Cancelled(Cancelled),
    /// A pixel could not be mapped to plane coordinates.
    Map(PixelToPlaneError),
}

impl fmt::Display for RenderFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::Map(err) => write!(f, "pixel mapping error: {}", err),
        }
    }
}

impl Error for RenderFieldError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::Map(err) => Some(err),
        }
    }
}

/// Renders the full intensity field for a request, single-threaded.
///
/// The operation is total: every pixel of the grid receives a value and no
/// partial field is ever returned. For cancel-aware rendering, use
/// [`render_field_cancelable`].
pub fn render_field(request: &RenderRequest) -> Result<IntensityField, PixelToPlaneError> {
    // Delegate to the cancel-aware implementation with NeverCancel
    render_field_cancelable_impl(request, &NeverCancel).map_err(|e| match e {
        RenderFieldError::Map(err) => err,
        RenderFieldError::Cancelled(_) => {
            // NeverCancel never cancels, so this branch is unreachable
            unreachable!("NeverCancel token should never signal cancellation")
        }
    })
}

/// Renders the full intensity field with cancellation support.
///
/// Like [`render_field`], but checks the token every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels and aborts with
/// [`RenderFieldError::Cancelled`] when it fires.
pub fn render_field_cancelable<C>(
    request: &RenderRequest,
    cancel: &C,
) -> Result<IntensityField, RenderFieldError>
where
    C: CancelToken,
{
    render_field_cancelable_impl(request, cancel)
}

pub(crate) fn render_field_cancelable_impl<C>(
    request: &RenderRequest,
    cancel: &C,
) -> Result<IntensityField, RenderFieldError>
where
    C: CancelToken,
{
    let width = request.width();
    let height = request.height();
    let viewport = request.viewport();

    let mut values: Vec<f64> = Vec::with_capacity(request.pixel_count());

    for py in 0..height {
        for px in 0..width {
            if values.len() % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
                return Err(RenderFieldError::Cancelled(Cancelled));
            }

            let point = viewport
                .pixel_to_plane(px, py, width, height)
                .map_err(RenderFieldError::Map)?;

            values.push(escape_time_measure(
                point,
                request.kind(),
                request.max_iterations(),
            ));
        }
    }

    let field = IntensityField::from_values(width, height, values)
        .expect("renderer fills exactly width × height values");

    Ok(field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::data::viewport::Viewport;
    use crate::core::fractals::fractal_kinds::FractalKinds;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn standard_request(width: u32, height: u32, max_iterations: u32) -> RenderRequest {
        let viewport = Viewport::new(-2.0, 2.0, -2.0, 2.0).unwrap();
        RenderRequest::new(viewport, width, height, max_iterations, FractalKinds::Mandelbrot)
            .unwrap()
    }

    #[test]
    fn test_field_has_request_dimensions() {
        let field = render_field(&standard_request(32, 17, 50)).unwrap();

        assert_eq!(field.width(), 32);
        assert_eq!(field.height(), 17);
        assert_eq!(field.values().len(), 32 * 17);
    }

    #[test]
    fn test_render_is_deterministic() {
        let request = standard_request(48, 48, 200);

        let first = render_field(&request).unwrap();
        let second = render_field(&request).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_pixel_mapped_to_origin_reports_the_cap() {
        // bounds (-2,2,-2,2) on a 4x4 grid put pixel (2,2) exactly on the
        // origin, which never escapes the Mandelbrot recurrence
        let field = render_field(&standard_request(4, 4, 300)).unwrap();

        assert_eq!(field.value_at(2, 2), Some(300.0));
    }

    #[test]
    fn test_interior_region_reports_the_cap_at_center() {
        // 101x101 grid over (-2,2)², cap 300; the center pixel lands near
        // the origin, deep inside the set
        let field = render_field(&standard_request(101, 101, 300)).unwrap();

        assert_eq!(field.value_at(50, 50), Some(300.0));
    }

    #[test]
    fn test_pixel_mapped_to_immediate_escape_is_smoothed() {
        // enlarge the viewport so pixel (7,7) of an 8x8 grid maps to (3,3),
        // which escapes within the first iteration
        let viewport = Viewport::new(-4.0, 4.0, -4.0, 4.0).unwrap();
        let request =
            RenderRequest::new(viewport, 8, 8, 300, FractalKinds::Mandelbrot).unwrap();

        let field = render_field(&request).unwrap();
        let measure = field.value_at(7, 7).unwrap();

        assert!(measure < 2.0, "measure was {}", measure);
        assert!(measure > 0.0, "measure was {}", measure);
    }

    #[test]
    fn test_all_values_in_documented_range() {
        let cap = 100;
        let field = render_field(&standard_request(64, 64, cap)).unwrap();

        for &value in field.values() {
            assert!(
                (0.0..=cap as f64 + 1.0).contains(&value),
                "value {} out of range",
                value
            );
        }
    }

    #[test]
    fn test_julia_render_uses_the_request_constant() {
        let viewport = Viewport::new(-2.0, 2.0, -2.0, 2.0).unwrap();
        let kind = FractalKinds::Julia {
            c: Complex::new(-0.7, 0.27015),
        };
        let request = RenderRequest::new(viewport, 16, 16, 80, kind).unwrap();

        let julia = render_field(&request).unwrap();
        let mandelbrot = render_field(&standard_request(16, 16, 80)).unwrap();

        assert_ne!(julia, mandelbrot);
    }

    #[test]
    fn test_cancelable_returns_cancelled_for_a_fired_token() {
        let cancelled = AtomicBool::new(true);
        let token = || cancelled.load(Ordering::Relaxed);

        let result = render_field_cancelable(&standard_request(16, 16, 50), &token);

        assert_eq!(result, Err(RenderFieldError::Cancelled(Cancelled)));
    }

    #[test]
    fn test_cancelable_with_never_cancel_matches_plain_render() {
        let request = standard_request(24, 24, 60);

        let plain = render_field(&request).unwrap();
        let cancelable = render_field_cancelable(&request, &NeverCancel).unwrap();

        assert_eq!(plain, cancelable);
    }
}
