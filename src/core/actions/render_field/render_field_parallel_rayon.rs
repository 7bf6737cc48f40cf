use rayon::prelude::*;

use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::actions::render_field::render_field::RenderFieldError;
use crate::core::data::intensity_field::IntensityField;
use crate::core::data::render_request::RenderRequest;
use crate::core::data::viewport::PixelToPlaneError;

/// Renders the intensity field with rows partitioned across rayon's
/// work-stealing pool.
///
/// Each row reads only the immutable request and produces its own slice of
/// the output, so no synchronization is needed beyond the final join.
/// For cancel-aware rendering, use
/// [`render_field_parallel_rayon_cancelable`].
pub fn render_field_parallel_rayon(
    request: &RenderRequest,
) -> Result<IntensityField, PixelToPlaneError> {
    // Delegate to the cancel-aware implementation with NeverCancel
    render_field_parallel_rayon_cancelable_impl(request, &NeverCancel).map_err(|e| match e {
        RenderFieldError::Map(err) => err,
        RenderFieldError::Cancelled(_) => {
            // NeverCancel never cancels, so this branch is unreachable
            unreachable!("NeverCancel token should never signal cancellation")
        }
    })
}

/// Row-parallel render with cancellation support.
///
/// Each worker checks the token at the start of its row and every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels within it, so a superseded
/// render stops after a bounded amount of extra work.
pub fn render_field_parallel_rayon_cancelable<C>(
    request: &RenderRequest,
    cancel: &C,
) -> Result<IntensityField, RenderFieldError>
where
    C: CancelToken,
{
    render_field_parallel_rayon_cancelable_impl(request, cancel)
}

pub(crate) fn render_field_parallel_rayon_cancelable_impl<C>(
    request: &RenderRequest,
    cancel: &C,
) -> Result<IntensityField, RenderFieldError>
where
    C: CancelToken,
{
    let width = request.width();
    let height = request.height();
    let viewport = request.viewport();
    let kind = request.kind();
    let max_iterations = request.max_iterations();

    let rows: Result<Vec<Vec<f64>>, RenderFieldError> = (0..height)
        .into_par_iter()
        .map(|py| {
            let mut row = Vec::with_capacity(width as usize);

            for px in 0..width {
                // Check cancellation at row start (px == 0) and every N pixels
                if px as usize % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
                    return Err(RenderFieldError::Cancelled(Cancelled));
                }

                let point = viewport
                    .pixel_to_plane(px, py, width, height)
                    .map_err(RenderFieldError::Map)?;

                row.push(crate::core::fractals::escape_time::escape_time_measure(
                    point,
                    kind,
                    max_iterations,
                ));
            }

            Ok(row)
        })
        .collect();

    // Flatten rows into row-major order
    let values: Vec<f64> = rows?.into_iter().flatten().collect();

    let field = IntensityField::from_values(width, height, values)
        .expect("row workers fill exactly width × height values");

    Ok(field)
}
