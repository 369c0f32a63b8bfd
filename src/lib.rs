pub mod band;
pub mod chart;
pub mod menu;
pub mod plot;
pub mod render;
pub mod sweep;
pub mod wavelength;
