use crate::core::colour_maps::fire_gradient::FireGradientColourMap;
use crate::core::colour_maps::greyscale::GreyscaleColourMap;
use crate::core::colour_maps::intensity_colour_map::IntensityColourMap;
use crate::core::colour_maps::kinds::ColourMapKinds;

#[must_use]
pub fn colour_map_factory(
    kind: ColourMapKinds,
    max_iterations: u32,
) -> Box<dyn IntensityColourMap> {
    match kind {
        ColourMapKinds::FireGradient => Box::new(FireGradientColourMap::new(max_iterations)),
        ColourMapKinds::Greyscale => Box::new(GreyscaleColourMap::new(max_iterations)),
    }
}
