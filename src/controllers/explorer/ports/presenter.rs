use crate::controllers::explorer::data::frame_data::FrameData;
use crate::core::data::viewport::Viewport;

/// Receives completed frames together with the bounds they were rendered
/// over (for axis/extent labeling). How colours reach the screen is the
/// presenter's business.
pub trait FramePresenterPort {
    fn present(&mut self, frame: &FrameData, viewport: Viewport);
}
