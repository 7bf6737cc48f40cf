use crate::core::data::complex::Complex;
use std::path::PathBuf;

/// Scale applied for one scroll-up (zoom-in) step.
pub const ZOOM_IN_SCALE: f64 = 0.8;
/// Scale applied for one scroll-down (zoom-out) step.
pub const ZOOM_OUT_SCALE: f64 = 1.25;

/// Events consumed by the explorer's driving loop.
///
/// Input-event translation (pointer/scroll to plane coordinates and scale)
/// happens outside the core; a pointer that could not be mapped arrives as
/// `pointer: None` and is dropped without touching the viewport.
#[derive(Debug, Clone, PartialEq)]
pub enum ExplorerEvent {
    ZoomRequested {
        pointer: Option<Complex>,
        scale: f64,
    },
    AutoZoomStep {
        factor: f64,
    },
    SaveRequested {
        path: PathBuf,
    },
}
