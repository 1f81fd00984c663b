//! Boundary with the photovoltaic estimation service.

pub mod client;
pub mod form;
pub mod request;
pub mod response;

use thiserror::Error;

pub use client::{Estimator, HttpEstimator, InFlight};
pub use form::{EstimateForm, FormErrors};
pub use request::EstimateRequest;
pub use response::EstimationResult;

pub const MISSING_FIELDS_MSG: &str = "Veuillez remplir les champs manquants.";
pub const AZIMUTH_RANGE_MSG: &str = "L'azimut doit être compris entre -180° et 180°.";
pub const UNRESOLVED_ADDRESS_MSG: &str =
    "Veuillez sélectionner votre adresse sur la carte ou entrer sa latitude et longitude exacte.";

#[derive(Debug, Error)]
pub enum EstimateError {
    #[error(transparent)]
    Invalid(#[from] FormErrors),
    #[error("HTTP error! status: {0}")]
    Status(reqwest::StatusCode),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("malformed JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("{}", UNRESOLVED_ADDRESS_MSG)]
    Unresolved { detail: String },
    #[error("response carries no monthly or yearly figures")]
    MissingOutputs,
    #[error("an estimation request is already in flight")]
    Busy,
}
