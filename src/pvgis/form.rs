use thiserror::Error;

use crate::pvgis::request::{EstimateRequest, Horizon, PvParams};
use crate::pvgis::{AZIMUTH_RANGE_MSG, MISSING_FIELDS_MSG};
use crate::types::{parse_opt, Obstacle};

/// Values as typed in the estimate form.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateForm {
    pub latitude: f64,
    pub longitude: f64,
    pub peak_power: String,
    pub system_loss: String,
    pub tilt: String,
    pub azimuth: String,
    pub automatic_horizon: bool,
}

impl Default for EstimateForm {
    fn default() -> Self {
        Self {
            latitude: 0.0,
            longitude: 0.0,
            peak_power: String::new(),
            system_loss: "14".into(),
            tilt: "35".into(),
            azimuth: "0".into(),
            automatic_horizon: true,
        }
    }
}

/// Fields that block submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", MISSING_FIELDS_MSG)]
pub struct FormErrors {
    pub peak_power: bool,
    pub system_loss: bool,
    pub azimuth: bool,
    pub tilt: bool,
}

impl FormErrors {
    /// Names of the flagged fields, in form order.
    pub fn fields(&self) -> Vec<&'static str> {
        [
            (self.peak_power, "peakpower"),
            (self.system_loss, "loss"),
            (self.tilt, "angle"),
            (self.azimuth, "aspect"),
        ]
        .into_iter()
        .filter_map(|(flagged, name)| flagged.then_some(name))
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AzimuthInput {
    pub value: String,
    pub warning: Option<&'static str>,
}

/// Keeps the panel azimuth within [-180, 180] while the user types.
///
/// A lone "-" and the empty string pass through so a negative value can still
/// be entered; anything unparsable or non-finite becomes 0.
pub fn normalize_azimuth(raw: &str) -> AzimuthInput {
    if raw.is_empty() || raw == "-" {
        return AzimuthInput {
            value: raw.to_string(),
            warning: None,
        };
    }
    let value = raw.trim().parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0);
    let warning = (!(-180.0..=180.0).contains(&value)).then_some(AZIMUTH_RANGE_MSG);
    AzimuthInput {
        value: value.clamp(-180.0, 180.0).to_string(),
        warning,
    }
}

fn required(value: &str) -> Option<f64> {
    parse_opt(value)
}

impl EstimateForm {
    /// Stores the normalized azimuth and returns the range warning, if any.
    pub fn set_azimuth(&mut self, raw: &str) -> Option<&'static str> {
        let input = normalize_azimuth(raw);
        self.azimuth = input.value;
        input.warning
    }

    pub fn validate(&self) -> Result<PvParams, FormErrors> {
        let peak_power = required(&self.peak_power);
        let system_loss = required(&self.system_loss);
        let tilt = required(&self.tilt);
        let azimuth = required(&self.azimuth);

        match (peak_power, system_loss, tilt, azimuth) {
            (Some(peak_power), Some(system_loss), Some(tilt), Some(azimuth)) => Ok(PvParams {
                peak_power,
                system_loss,
                tilt,
                azimuth,
            }),
            _ => Err(FormErrors {
                peak_power: peak_power.is_none(),
                system_loss: system_loss.is_none(),
                azimuth: azimuth.is_none(),
                tilt: tilt.is_none(),
            }),
        }
    }

    pub fn to_request(&self, obstacles: &[Obstacle]) -> Result<EstimateRequest, FormErrors> {
        let params = self.validate()?;
        let horizon = if self.automatic_horizon {
            Horizon::Automatic
        } else {
            Horizon::from_obstacles(obstacles)
        };
        Ok(EstimateRequest::new(
            self.latitude,
            self.longitude,
            &params,
            &horizon,
        ))
    }
}
