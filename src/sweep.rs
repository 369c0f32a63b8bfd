use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::band::Band;
use crate::wavelength::{compute_wavelengths, WavelengthError};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SweepError {
    #[error("{frequencies} frequencies but {wavelengths} wavelengths")]
    LengthMismatch { frequencies: usize, wavelengths: usize },
    #[error(transparent)]
    Wavelength(#[from] WavelengthError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SweepData")]
pub struct Sweep {
    title: String,
    frequencies_hz: Vec<f64>,
    wavelengths_m: Vec<f64>,
}

#[derive(Deserialize)]
struct SweepData {
    title: String,
    frequencies_hz: Vec<f64>,
    wavelengths_m: Vec<f64>,
}

impl TryFrom<SweepData> for Sweep {
    type Error = SweepError;

    fn try_from(data: SweepData) -> Result<Self, Self::Error> {
        Sweep::new(data.title, data.frequencies_hz, data.wavelengths_m)
    }
}

impl Sweep {
    pub fn new(
        title: impl Into<String>,
        frequencies_hz: Vec<f64>,
        wavelengths_m: Vec<f64>,
    ) -> Result<Self, SweepError> {
        if frequencies_hz.len() != wavelengths_m.len() {
            return Err(SweepError::LengthMismatch {
                frequencies: frequencies_hz.len(),
                wavelengths: wavelengths_m.len(),
            });
        }
        Ok(Sweep {
            title: title.into(),
            frequencies_hz,
            wavelengths_m,
        })
    }

    pub fn from_frequencies(title: impl Into<String>, frequencies_hz: Vec<f64>) -> Result<Self, SweepError> {
        let wavelengths_m = compute_wavelengths(&frequencies_hz)?;
        Self::new(title, frequencies_hz, wavelengths_m)
    }

    pub fn for_band(band: Band, title: impl Into<String>) -> Result<Self, SweepError> {
        Self::from_frequencies(title, band.frequencies())
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn frequencies_hz(&self) -> &[f64] {
        &self.frequencies_hz
    }

    pub fn wavelengths_m(&self) -> &[f64] {
        &self.wavelengths_m
    }

    pub fn len(&self) -> usize {
        self.frequencies_hz.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies_hz.is_empty()
    }

    pub fn points_mhz(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.frequencies_hz
            .iter()
            .zip(&self.wavelengths_m)
            .map(|(f, w)| (f / 1e6, *w))
    }
}
