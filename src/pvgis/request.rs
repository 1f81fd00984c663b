use serde::{Serialize, Serializer};

use crate::types::Obstacle;

/// Parsed PV system parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PvParams {
    pub peak_power: f64,
    pub system_loss: f64,
    pub tilt: f64,
    pub azimuth: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Horizon {
    /// The service computes terrain shading itself.
    Automatic,
    /// One height per obstacle, in degrees.
    User(Vec<f64>),
}

impl Horizon {
    pub fn from_obstacles(obstacles: &[Obstacle]) -> Self {
        Self::User(obstacles.iter().map(Obstacle::peak_height).collect())
    }

    fn use_flag(&self) -> u8 {
        match self {
            Self::Automatic => 0,
            Self::User(_) => 1,
        }
    }

    fn heights_csv(&self) -> String {
        match self {
            Self::User(heights) if !heights.is_empty() => heights
                .iter()
                .map(|h| h.to_string())
                .collect::<Vec<_>>()
                .join(","),
            _ => "0".to_string(),
        }
    }
}

// Integral values go out without a fractional part ("45", not "45.0"),
// the way the web form has always sent them.
fn js_number<S: Serializer>(v: &f64, s: S) -> Result<S::Ok, S::Error> {
    if v.fract() == 0.0 && v.abs() < 9.0e15 {
        s.serialize_i64(*v as i64)
    } else {
        s.serialize_f64(*v)
    }
}

/// Body of the estimation POST. Field order is part of the wire format.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateRequest {
    #[serde(serialize_with = "js_number")]
    pub lat: f64,
    #[serde(serialize_with = "js_number")]
    pub lon: f64,
    #[serde(serialize_with = "js_number")]
    pub peakpower: f64,
    #[serde(serialize_with = "js_number")]
    pub loss: f64,
    #[serde(serialize_with = "js_number")]
    pub angle: f64,
    #[serde(serialize_with = "js_number")]
    pub aspect: f64,
    pub outputformat: &'static str,
    pub usehorizon: u8,
    pub userhorizon: String,
}

impl EstimateRequest {
    pub fn new(lat: f64, lon: f64, params: &PvParams, horizon: &Horizon) -> Self {
        Self {
            lat,
            lon,
            peakpower: params.peak_power,
            loss: params.system_loss,
            angle: params.tilt,
            aspect: params.azimuth,
            outputformat: "json",
            usehorizon: horizon.use_flag(),
            userhorizon: horizon.heights_csv(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
