use crate::core::actions::shade_field::ports::colour_map::ColourMap;
use crate::core::colour_maps::errors::ColourMapError;
use crate::core::colour_maps::intensity_colour_map::IntensityColourMap;
use crate::core::colour_maps::kinds::ColourMapKinds;
use crate::core::data::colour::Colour;
use std::error::Error;

/// Black → red → orange → yellow → white ramp over the smoothed measure.
#[derive(Debug)]
pub struct FireGradientColourMap {
    max_iterations: u32,
}

impl ColourMap for FireGradientColourMap {
    fn map(&self, intensity: f64) -> Result<Colour, Box<dyn Error>> {
        let cap = self.max_iterations as f64;

        if !intensity.is_finite() || intensity < 0.0 || intensity > cap {
            return Err(Box::new(ColourMapError::IntensityOutOfRange {
                intensity,
                max_iterations: self.max_iterations,
            }));
        }

        if intensity == cap {
            return Ok(Colour::BLACK);
        }

        let t = intensity / cap;

        let (r, g, b) = if t < 0.25 {
            let local_t = t / 0.25;
            ((local_t * 255.0) as u8, 0, 0)
        } else if t < 0.5 {
            let local_t = (t - 0.25) / 0.25;
            (255, (local_t * 165.0) as u8, 0)
        } else if t < 0.75 {
            let local_t = (t - 0.5) / 0.25;
            (255, (165.0 + local_t * 90.0) as u8, 0)
        } else {
            let local_t = (t - 0.75) / 0.25;
            (255, 255, (local_t * 255.0) as u8)
        };

        Ok(Colour { r, g, b })
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl IntensityColourMap for FireGradientColourMap {
    fn kind(&self) -> ColourMapKinds {
        ColourMapKinds::FireGradient
    }
}

impl FireGradientColourMap {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
