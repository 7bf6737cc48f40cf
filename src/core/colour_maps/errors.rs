use std::{error::Error, fmt};

#[derive(Debug, PartialEq)]
pub enum ColourMapError {
    IntensityOutOfRange {
        intensity: f64,
        max_iterations: u32,
    },
}

impl fmt::Display for ColourMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IntensityOutOfRange {
                intensity,
                max_iterations,
            } => {
                write!(
                    f,
                    "intensity {} is outside [0, {}]",
                    intensity, max_iterations
                )
            }
        }
    }
}

impl Error for ColourMapError {}
