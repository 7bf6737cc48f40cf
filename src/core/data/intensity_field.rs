use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntensityFieldError {
    BoundsMismatch { expected: usize, actual: usize },
}

impl fmt::Display for IntensityFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch { expected, actual } => {
                write!(
                    f,
                    "field of {} values does not match the expected {}",
                    actual, expected
                )
            }
        }
    }
}

impl Error for IntensityFieldError {}

/// A height×width matrix of smoothed escape measures, row-major.
///
/// Escaped pixels hold the fractional smoothed measure; pixels that never
/// diverged hold exactly the iteration cap.
#[derive(Debug, Clone, PartialEq)]
pub struct IntensityField {
    width: u32,
    height: u32,
    values: Vec<f64>,
}

impl IntensityField {
    pub fn from_values(
        width: u32,
        height: u32,
        values: Vec<f64>,
    ) -> Result<Self, IntensityFieldError> {
        let expected = width as usize * height as usize;

        if values.len() != expected {
            return Err(IntensityFieldError::BoundsMismatch {
                expected,
                actual: values.len(),
            });
        }

        Ok(Self {
            width,
            height,
            values,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn value_at(&self, px: u32, py: u32) -> Option<f64> {
        if px >= self.width || py >= self.height {
            return None;
        }

        Some(self.values[py as usize * self.width as usize + px as usize])
    }

    #[must_use]
    pub fn row(&self, py: u32) -> Option<&[f64]> {
        if py >= self.height {
            return None;
        }

        let start = py as usize * self.width as usize;
        Some(&self.values[start..start + self.width as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_values_valid() {
        let values = vec![0.0, 1.5, 2.0, 3.25, 4.0, 5.75];
        let field = IntensityField::from_values(3, 2, values.clone()).unwrap();

        assert_eq!(field.width(), 3);
        assert_eq!(field.height(), 2);
        assert_eq!(field.values(), values.as_slice());
    }

    #[test]
    fn test_from_values_rejects_length_mismatch() {
        let too_short = IntensityField::from_values(3, 2, vec![0.0; 5]);
        let too_long = IntensityField::from_values(3, 2, vec![0.0; 7]);

        assert_eq!(
            too_short,
            Err(IntensityFieldError::BoundsMismatch {
                expected: 6,
                actual: 5
            })
        );
        assert_eq!(
            too_long,
            Err(IntensityFieldError::BoundsMismatch {
                expected: 6,
                actual: 7
            })
        );
    }

    #[test]
    fn test_value_at_is_row_major() {
        let field =
            IntensityField::from_values(3, 2, vec![0.0, 1.0, 2.0, 10.0, 11.0, 12.0]).unwrap();

        assert_eq!(field.value_at(0, 0), Some(0.0));
        assert_eq!(field.value_at(2, 0), Some(2.0));
        assert_eq!(field.value_at(0, 1), Some(10.0));
        assert_eq!(field.value_at(2, 1), Some(12.0));
    }

    #[test]
    fn test_value_at_outside_grid_is_none() {
        let field = IntensityField::from_values(2, 2, vec![0.0; 4]).unwrap();

        assert_eq!(field.value_at(2, 0), None);
        assert_eq!(field.value_at(0, 2), None);
    }

    #[test]
    fn test_row_slices() {
        let field =
            IntensityField::from_values(3, 2, vec![0.0, 1.0, 2.0, 10.0, 11.0, 12.0]).unwrap();

        assert_eq!(field.row(0), Some(&[0.0, 1.0, 2.0][..]));
        assert_eq!(field.row(1), Some(&[10.0, 11.0, 12.0][..]));
        assert_eq!(field.row(2), None);
    }
}
