use crate::core::colour_maps::factory::colour_map_factory;
use crate::core::colour_maps::intensity_colour_map::IntensityColourMap;
use crate::core::colour_maps::kinds::ColourMapKinds;
use crate::core::data::render_request::{RenderRequest, RenderRequestError};
use crate::core::data::viewport::Viewport;
use crate::core::fractals::fractal_kinds::FractalKinds;

const DEFAULT_WIDTH: u32 = 900;
const DEFAULT_HEIGHT: u32 = 900;
const DEFAULT_MAX_ITERATIONS: u32 = 300;

pub(crate) fn default_viewport() -> Viewport {
    Viewport::new(-2.0, 2.0, -2.0, 2.0).expect("default viewport bounds are valid")
}

/// Startup configuration for the explorer: resolution, iteration cap, mode,
/// initial view and colour scheme, threaded explicitly into every render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorerConfig {
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    pub kind: FractalKinds,
    pub colour_map_kind: ColourMapKinds,
    pub initial_viewport: Viewport,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            kind: FractalKinds::default(),
            colour_map_kind: ColourMapKinds::default(),
            initial_viewport: default_viewport(),
        }
    }
}

impl ExplorerConfig {
    pub(crate) fn build_render_request(
        &self,
        viewport: Viewport,
    ) -> Result<RenderRequest, RenderRequestError> {
        RenderRequest::new(viewport, self.width, self.height, self.max_iterations, self.kind)
    }

    #[must_use]
    pub(crate) fn build_colour_map(&self) -> Box<dyn IntensityColourMap> {
        colour_map_factory(self.colour_map_kind, self.max_iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;

    #[test]
    fn test_default_settings() {
        let config = ExplorerConfig::default();

        assert_eq!(config.width, 900);
        assert_eq!(config.height, 900);
        assert_eq!(config.max_iterations, 300);
        assert_eq!(
            config.kind,
            FractalKinds::Julia {
                c: Complex::new(-0.7, 0.27015)
            }
        );
        assert_eq!(config.initial_viewport, default_viewport());
    }

    #[test]
    fn test_build_render_request_snapshots_the_given_viewport() {
        let config = ExplorerConfig::default();
        let viewport = Viewport::new(-1.0, 1.0, -1.0, 1.0).unwrap();

        let request = config.build_render_request(viewport).unwrap();

        assert_eq!(request.viewport(), viewport);
        assert_eq!(request.width(), config.width);
        assert_eq!(request.max_iterations(), config.max_iterations);
    }

    #[test]
    fn test_build_render_request_rejects_a_zero_dimension() {
        let config = ExplorerConfig {
            width: 0,
            ..ExplorerConfig::default()
        };

        let request = config.build_render_request(default_viewport());

        assert!(request.is_err());
    }

    #[test]
    fn test_build_colour_map_uses_the_configured_kind() {
        let config = ExplorerConfig {
            colour_map_kind: ColourMapKinds::Greyscale,
            ..ExplorerConfig::default()
        };

        assert_eq!(config.build_colour_map().kind(), ColourMapKinds::Greyscale);
    }
}
