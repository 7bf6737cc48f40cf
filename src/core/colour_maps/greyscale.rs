use crate::core::actions::shade_field::ports::colour_map::ColourMap;
use crate::core::colour_maps::errors::ColourMapError;
use crate::core::colour_maps::intensity_colour_map::IntensityColourMap;
use crate::core::colour_maps::kinds::ColourMapKinds;
use crate::core::data::colour::Colour;
use std::error::Error;

#[derive(Debug)]
pub struct GreyscaleColourMap {
    max_iterations: u32,
}

impl ColourMap for GreyscaleColourMap {
    fn map(&self, intensity: f64) -> Result<Colour, Box<dyn Error>> {
        let cap = self.max_iterations as f64;

        if !intensity.is_finite() || intensity < 0.0 || intensity > cap {
            return Err(Box::new(ColourMapError::IntensityOutOfRange {
                intensity,
                max_iterations: self.max_iterations,
            }));
        }

        if intensity == cap {
            // never diverged: inside the set
            return Ok(Colour::BLACK);
        }

        let t = intensity / cap;
        let level = (t * 255.0) as u8;

        Ok(Colour {
            r: level,
            g: level,
            b: level,
        })
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl IntensityColourMap for GreyscaleColourMap {
    fn kind(&self) -> ColourMapKinds {
        ColourMapKinds::Greyscale
    }
}

impl GreyscaleColourMap {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cap_intensity_is_black() {
        let mapper = GreyscaleColourMap::new(100);

        assert_eq!(mapper.map(100.0).unwrap(), Colour::BLACK);
    }

    #[test]
    fn test_zero_intensity_is_black_level() {
        let mapper = GreyscaleColourMap::new(100);

        assert_eq!(mapper.map(0.0).unwrap(), Colour { r: 0, g: 0, b: 0 });
    }

    #[test]
    fn test_midpoint_is_mid_grey() {
        let mapper = GreyscaleColourMap::new(100);
        let colour = mapper.map(50.0).unwrap();

        assert_eq!(colour, Colour { r: 127, g: 127, b: 127 });
    }

    #[test]
    fn test_fractional_intensities_produce_distinct_levels() {
        let mapper = GreyscaleColourMap::new(100);

        let low = mapper.map(10.0).unwrap();
        let high = mapper.map(12.0).unwrap();

        assert_ne!(low, high);
    }

    #[test]
    fn test_out_of_range_intensity_is_rejected() {
        let mapper = GreyscaleColourMap::new(100);

        assert!(mapper.map(100.5).is_err());
        assert!(mapper.map(-0.5).is_err());
        assert!(mapper.map(f64::NAN).is_err());
    }
}
