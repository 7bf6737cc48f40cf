use crate::core::data::intensity_field::IntensityField;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::time::Duration;

#[derive(Debug)]
pub struct FrameData {
    pub generation: u64,
    pub intensity_field: IntensityField,
    pub pixel_buffer: PixelBuffer,
    pub render_duration: Duration,
}
