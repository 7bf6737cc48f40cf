use crate::controllers::explorer::config::ExplorerConfig;
use crate::controllers::explorer::data::frame_data::FrameData;
use crate::controllers::explorer::events::ExplorerEvent;
use crate::controllers::explorer::ports::file_presenter::FilePresenterPort;
use crate::controllers::explorer::ports::presenter::FramePresenterPort;
use crate::core::actions::render_field::render_field::RenderFieldError;
use crate::core::actions::render_field::render_field_parallel_rayon::render_field_parallel_rayon;
use crate::core::actions::shade_field::shade_field::{ShadeFieldError, shade_field};
use crate::core::colour_maps::intensity_colour_map::IntensityColourMap;
use crate::core::data::render_request::RenderRequestError;
use crate::core::data::viewport::{PixelToPlaneError, Viewport, ViewportError};
use std::error::Error;
use std::fmt;
use std::time::Instant;

#[derive(Debug)]
pub enum ExplorerError {
    Request(RenderRequestError),
    Render(RenderFieldError),
    Shade(ShadeFieldError),
    Viewport(ViewportError),
    NothingRendered,
    Io(std::io::Error),
}

impl fmt::Display for ExplorerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request(err) => write!(f, "invalid render request: {}", err),
            Self::Render(err) => write!(f, "render failed: {}", err),
            Self::Shade(err) => write!(f, "shading failed: {}", err),
            Self::Viewport(err) => write!(f, "viewport transform rejected: {}", err),
            Self::NothingRendered => write!(f, "no frame has been rendered yet"),
            Self::Io(err) => write!(f, "io error: {}", err),
        }
    }
}

impl Error for ExplorerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Request(err) => Some(err),
            Self::Render(err) => Some(err),
            Self::Shade(err) => Some(err),
            Self::Viewport(err) => Some(err),
            Self::NothingRendered => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<RenderRequestError> for ExplorerError {
    fn from(err: RenderRequestError) -> Self {
        Self::Request(err)
    }
}

impl From<PixelToPlaneError> for ExplorerError {
    fn from(err: PixelToPlaneError) -> Self {
        Self::Render(RenderFieldError::Map(err))
    }
}

impl From<ShadeFieldError> for ExplorerError {
    fn from(err: ShadeFieldError) -> Self {
        Self::Shade(err)
    }
}

impl From<ViewportError> for ExplorerError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

impl From<std::io::Error> for ExplorerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// The driving loop: sole owner of the mutable viewport.
///
/// Every render goes through an immutable [`RenderRequest`] snapshot, so the
/// engine never reads live viewport state; zoom events mutate the viewport
/// only through its own transform operations. Completed frames carry a
/// monotonically increasing generation that presenters can use to discard
/// stale output.
///
/// [`RenderRequest`]: crate::core::data::render_request::RenderRequest
pub struct ExplorerController<P, F>
where
    P: FramePresenterPort,
    F: FilePresenterPort,
{
    config: ExplorerConfig,
    viewport: Viewport,
    colour_map: Box<dyn IntensityColourMap>,
    generation: u64,
    last_frame: Option<FrameData>,
    presenter: P,
    file_sink: F,
}

impl<P, F> ExplorerController<P, F>
where
    P: FramePresenterPort,
    F: FilePresenterPort,
{
    pub fn new(config: ExplorerConfig, presenter: P, file_sink: F) -> Self {
        Self {
            viewport: config.initial_viewport,
            colour_map: config.build_colour_map(),
            config,
            generation: 0,
            last_frame: None,
            presenter,
            file_sink,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn last_frame(&self) -> Option<&FrameData> {
        self.last_frame.as_ref()
    }

    /// Renders the current viewport and presents the resulting frame.
    ///
    /// Returns the generation stamped onto the frame.
    pub fn render(&mut self) -> Result<u64, ExplorerError> {
        let request = self.config.build_render_request(self.viewport)?;

        let start = Instant::now();
        let intensity_field = render_field_parallel_rayon(&request)?;
        let render_duration = start.elapsed();

        let pixel_buffer = shade_field(&intensity_field, &self.colour_map)?;

        self.generation += 1;
        let frame = FrameData {
            generation: self.generation,
            intensity_field,
            pixel_buffer,
            render_duration,
        };

        self.presenter.present(&frame, self.viewport);
        self.last_frame = Some(frame);

        Ok(self.generation)
    }

    /// Applies one explorer event.
    ///
    /// Returns the generation of the frame the event produced, or `None` for
    /// events that do not re-render (dropped zooms, saves).
    pub fn handle_event(&mut self, event: ExplorerEvent) -> Result<Option<u64>, ExplorerError> {
        match event {
            ExplorerEvent::ZoomRequested { pointer, scale } => {
                // undefined pointer coordinates: expected with off-canvas
                // input, dropped without mutation or re-render
                let Some(pointer) = pointer.filter(|p| p.is_finite()) else {
                    return Ok(None);
                };

                self.viewport.zoom_at(pointer, scale)?;
                self.render().map(Some)
            }
            ExplorerEvent::AutoZoomStep { factor } => {
                self.viewport.auto_zoom_step(factor)?;
                self.render().map(Some)
            }
            ExplorerEvent::SaveRequested { path } => {
                let frame = self
                    .last_frame
                    .as_ref()
                    .ok_or(ExplorerError::NothingRendered)?;

                self.file_sink.present(&frame.pixel_buffer, &path)?;
                Ok(None)
            }
        }
    }
}
