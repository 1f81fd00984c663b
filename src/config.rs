use crate::types::CompassConvention;

#[derive(Debug, Clone, Copy)]
pub struct Margin {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}
impl Margin {
    pub fn uniform(px: u32) -> Self {
        Self {
            top: px,
            bottom: px,
            left: px,
            right: px,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DiagramConfig {
    pub latitude_deg: f64,
    pub width: u32,
    pub height: u32,
    pub margin: Margin,
    pub azimuth_domain: (f64, f64),
    pub altitude_domain: (f64, f64),
    pub step_azimuth_deg: u32,
    pub step_altitude_deg: u32,
    pub compass: CompassConvention,
    pub legend_row_height: u32,
}
impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            latitude_deg: 46.5,
            width: 1000,
            height: 620,
            margin: Margin::uniform(100),
            azimuth_domain: (30.0, 330.0),
            altitude_domain: (0.0, 90.0),
            step_azimuth_deg: 15,
            step_altitude_deg: 10,
            compass: CompassConvention::Standard,
            legend_row_height: 22,
        }
    }
}
