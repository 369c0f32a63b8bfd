use thiserror::Error;

// Rounded so band edges land on whole meters (3 MHz is 100 m).
pub const SPEED_OF_LIGHT: f64 = 3.0e8;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum WavelengthError {
    #[error("frequency #{index} must be positive and finite, got {value} Hz")]
    InvalidFrequency { index: usize, value: f64 },
    #[error("wavelength must be positive and finite, got {0} m")]
    InvalidWavelength(f64),
}

fn is_valid(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

pub fn wavelength(frequency_hz: f64) -> Result<f64, WavelengthError> {
    if !is_valid(frequency_hz) {
        return Err(WavelengthError::InvalidFrequency {
            index: 0,
            value: frequency_hz,
        });
    }
    Ok(SPEED_OF_LIGHT / frequency_hz)
}

pub fn frequency(wavelength_m: f64) -> Result<f64, WavelengthError> {
    if !is_valid(wavelength_m) {
        return Err(WavelengthError::InvalidWavelength(wavelength_m));
    }
    Ok(SPEED_OF_LIGHT / wavelength_m)
}

pub fn compute_wavelengths(frequencies_hz: &[f64]) -> Result<Vec<f64>, WavelengthError> {
    frequencies_hz
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            if is_valid(value) {
                Ok(SPEED_OF_LIGHT / value)
            } else {
                Err(WavelengthError::InvalidFrequency { index, value })
            }
        })
        .collect()
}
