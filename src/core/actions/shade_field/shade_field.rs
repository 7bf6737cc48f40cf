use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::actions::shade_field::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::intensity_field::IntensityField;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ShadeFieldError {
    ColourMap(Box<dyn Error>),
    PixelBuffer(PixelBufferError),
}

/// Error type for cancel-aware shading.
#[derive(Debug)]
pub enum ShadeFieldCancelableError {
    /// The operation was cancelled before completion.
    Cancelled(Cancelled),
    /// A colour mapping error occurred.
    ColourMap(Box<dyn Error>),
    /// A pixel buffer construction error occurred.
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for ShadeFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for ShadeFieldError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourMap(err) => err.source(),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl fmt::Display for ShadeFieldCancelableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for ShadeFieldCancelableError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::ColourMap(err) => err.source(),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

/// Maps an intensity field to an RGB pixel buffer.
///
/// For cancel-aware shading, use [`shade_field_cancelable`].
pub fn shade_field<CMap: ColourMap>(
    field: &IntensityField,
    mapper: &CMap,
) -> Result<PixelBuffer, ShadeFieldError> {
    // Delegate to the cancel-aware implementation with NeverCancel
    shade_field_cancelable_impl(field, mapper, &NeverCancel).map_err(|e| match e {
        ShadeFieldCancelableError::ColourMap(err) => ShadeFieldError::ColourMap(err),
        ShadeFieldCancelableError::PixelBuffer(err) => ShadeFieldError::PixelBuffer(err),
        ShadeFieldCancelableError::Cancelled(_) => {
            // NeverCancel never cancels, so this branch is unreachable
            unreachable!("NeverCancel token should never signal cancellation")
        }
    })
}

/// Like [`shade_field`], but checks the token every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels.
pub fn shade_field_cancelable<CMap, C>(
    field: &IntensityField,
    mapper: &CMap,
    cancel: &C,
) -> Result<PixelBuffer, ShadeFieldCancelableError>
where
    CMap: ColourMap,
    C: CancelToken,
{
    shade_field_cancelable_impl(field, mapper, cancel)
}

pub(crate) fn shade_field_cancelable_impl<CMap, C>(
    field: &IntensityField,
    mapper: &CMap,
    cancel: &C,
) -> Result<PixelBuffer, ShadeFieldCancelableError>
where
    CMap: ColourMap,
    C: CancelToken,
{
    let mut buffer: PixelBufferData = Vec::with_capacity(field.values().len() * 3);

    for (i, &value) in field.values().iter().enumerate() {
        if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
            return Err(ShadeFieldCancelableError::Cancelled(Cancelled));
        }

        let Colour { r, g, b } = mapper
            .map(value)
            .map_err(ShadeFieldCancelableError::ColourMap)?;

        buffer.push(r);
        buffer.push(g);
        buffer.push(b);
    }

    PixelBuffer::from_data(field.width(), field.height(), buffer)
        .map_err(ShadeFieldCancelableError::PixelBuffer)
}
