use crate::controllers::explorer::data::frame_data::FrameData;
use crate::controllers::explorer::ports::presenter::FramePresenterPort;
use crate::core::data::viewport::Viewport;

/// Prints one line per completed frame; the display stand-in for the CLI.
pub struct ConsoleFramePresenter {}

impl FramePresenterPort for ConsoleFramePresenter {
    fn present(&mut self, frame: &FrameData, viewport: Viewport) {
        println!(
            "frame {} ({}x{}) rendered in {:?} over x [{:.6}, {:.6}] y [{:.6}, {:.6}]",
            frame.generation,
            frame.intensity_field.width(),
            frame.intensity_field.height(),
            frame.render_duration,
            viewport.xmin(),
            viewport.xmax(),
            viewport.ymin(),
            viewport.ymax(),
        );
    }
}

impl Default for ConsoleFramePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleFramePresenter {
    pub fn new() -> Self {
        Self {}
    }
}
