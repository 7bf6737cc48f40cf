pub mod controllers;
pub mod core;
pub mod presenters;
pub mod storage;

pub use controllers::explorer::{ExplorerConfig, ExplorerController, ExplorerError, ExplorerEvent};
pub use presenters::console::ConsoleFramePresenter;
pub use presenters::file::ppm::PpmFilePresenter;

pub use self::core::data::complex::Complex;
pub use self::core::data::intensity_field::IntensityField;
pub use self::core::data::render_request::RenderRequest;
pub use self::core::data::viewport::Viewport;
pub use self::core::fractals::fractal_kinds::FractalKinds;
