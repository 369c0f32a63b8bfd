use serde::{Deserialize, Serialize};

pub const SAMPLE_COUNT: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Band {
    Hf,
    Vhf,
    Uhf,
}

impl Band {
    pub const ALL: [Band; 3] = [Band::Hf, Band::Vhf, Band::Uhf];

    pub const fn range_hz(self) -> (f64, f64) {
        match self {
            Band::Hf => (3e6, 30e6),
            Band::Vhf => (30e6, 300e6),
            Band::Uhf => (300e6, 3000e6),
        }
    }

    pub fn frequencies(self) -> Vec<f64> {
        self.frequencies_n(SAMPLE_COUNT)
    }

    pub fn frequencies_n(self, count: usize) -> Vec<f64> {
        let (low, high) = self.range_hz();
        linspace(low, high, count)
    }

    pub fn short_name(self) -> &'static str {
        match self {
            Band::Hf => "HF",
            Band::Vhf => "VHF",
            Band::Uhf => "UHF",
        }
    }
}

impl std::fmt::Display for Band {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (low, high) = self.range_hz();
        write!(
            f,
            "{} bands ({} MHz to {} MHz)",
            self.short_name(),
            low / 1e6,
            high / 1e6
        )
    }
}

impl std::str::FromStr for Band {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hf" => Ok(Band::Hf),
            "vhf" => Ok(Band::Vhf),
            "uhf" => Ok(Band::Uhf),
            other => Err(format!("unknown band: {other} (expected hf, vhf or uhf)")),
        }
    }
}

/// `count` evenly spaced values over `[start, stop]`.
///
/// The last value is `stop` exactly, not `start + step * (count - 1)`.
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            let mut out: Vec<f64> = (0..count - 1).map(|i| start + step * i as f64).collect();
            out.push(stop);
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_have_exact_edges() {
        for band in Band::ALL {
            let (low, high) = band.range_hz();
            let freqs = band.frequencies();
            assert_eq!(freqs.len(), SAMPLE_COUNT);
            assert_eq!(freqs[0], low);
            assert_eq!(freqs[SAMPLE_COUNT - 1], high);
            assert!(freqs.windows(2).all(|w| w[0] <= w[1]), "{band:?} not sorted");
        }
    }

    #[test]
    fn hf_range() {
        let freqs = Band::Hf.frequencies();
        assert_eq!(freqs[0], 3_000_000.0);
        assert_eq!(freqs[99], 30_000_000.0);
    }

    #[test]
    fn linspace_spacing() {
        assert_eq!(linspace(0.0, 10.0, 6), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(linspace(5.0, 9.0, 1), vec![5.0]);
        assert!(linspace(5.0, 9.0, 0).is_empty());
    }

    #[test]
    fn parse_band_names() {
        assert_eq!("HF".parse::<Band>(), Ok(Band::Hf));
        assert_eq!(" vhf ".parse::<Band>(), Ok(Band::Vhf));
        assert_eq!("uhf".parse::<Band>(), Ok(Band::Uhf));
        assert!("shf".parse::<Band>().is_err());
    }

    #[test]
    fn display_matches_menu_text() {
        assert_eq!(Band::Hf.to_string(), "HF bands (3 MHz to 30 MHz)");
        assert_eq!(Band::Uhf.to_string(), "UHF bands (300 MHz to 3000 MHz)");
    }
}
