use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::pvgis::EstimateError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MonthlyFixed {
    pub month: u32,
    #[serde(rename = "E_d", default)]
    pub e_d: Option<f64>,
    #[serde(rename = "E_m")]
    pub e_m: f64,
    #[serde(rename = "H(i)_d", default)]
    pub h_i_d: Option<f64>,
    #[serde(rename = "H(i)_m")]
    pub h_i_m: f64,
    #[serde(rename = "SD_m")]
    pub sd_m: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TotalsFixed {
    #[serde(rename = "E_y")]
    pub e_y: f64,
    #[serde(rename = "H(i)_y")]
    pub h_i_y: f64,
    #[serde(rename = "SD_y")]
    pub sd_y: f64,
    pub l_aoi: f64,
    #[serde(deserialize_with = "number_or_text")]
    pub l_spec: String,
    pub l_tg: f64,
    pub l_total: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Monthly {
    pub fixed: Vec<MonthlyFixed>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Totals {
    pub fixed: TotalsFixed,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Outputs {
    pub monthly: Monthly,
    pub totals: Totals,
}

/// The service answer as it comes off the wire.
#[derive(Debug, Clone, Deserialize)]
struct RawResponse {
    #[serde(default)]
    inputs: Value,
    #[serde(default)]
    outputs: Option<Outputs>,
    #[serde(default)]
    error: Option<Value>,
}

/// A successful estimate: monthly and yearly figures for the fixed mount.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimationResult {
    pub inputs: Value,
    pub outputs: Outputs,
}

// The spectral loss comes back either as a number or as text.
fn number_or_text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    match Value::deserialize(d)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected number or string, got {other}"))),
    }
}

impl EstimationResult {
    pub fn from_json(body: &str) -> Result<Self, EstimateError> {
        let raw: RawResponse = serde_json::from_str(body)?;
        match raw.error {
            Some(err) if !err.is_null() => {
                return Err(EstimateError::Unresolved {
                    detail: err.to_string(),
                });
            }
            _ => {}
        }
        let outputs = raw.outputs.ok_or(EstimateError::MissingOutputs)?;
        Ok(Self {
            inputs: raw.inputs,
            outputs,
        })
    }
}
