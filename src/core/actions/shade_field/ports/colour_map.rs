use crate::core::data::colour::Colour;
use std::error::Error;

/// Turns one smoothed escape measure into a colour.
///
/// Implementations receive the continuous measure produced by the engine,
/// never raw iteration integers.
pub trait ColourMap {
    fn map(&self, intensity: f64) -> Result<Colour, Box<dyn Error>>;

    fn display_name(&self) -> &str;
}
