use crate::core::actions::shade_field::ports::colour_map::ColourMap;
use crate::core::colour_maps::kinds::ColourMapKinds;
use crate::core::data::colour::Colour;
use std::error::Error;

pub trait IntensityColourMap: ColourMap + Send + Sync {
    fn kind(&self) -> ColourMapKinds;
}

impl ColourMap for Box<dyn IntensityColourMap> {
    fn map(&self, intensity: f64) -> Result<Colour, Box<dyn Error>> {
        (**self).map(intensity)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}
