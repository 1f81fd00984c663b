//! Single source of truth for one estimate: where, what system, which obstacles.

use crate::config::DiagramConfig;
use crate::diagram::Diagram;
use crate::pvgis::{EstimateError, EstimateForm, EstimateRequest, EstimationResult, Estimator, InFlight};
use crate::report::Report;
use crate::types::Obstacle;

pub struct Session {
    pub form: EstimateForm,
    pub obstacles: Vec<Obstacle>,
    pub diagram_cfg: DiagramConfig,
    in_flight: InFlight,
}

impl Session {
    pub fn new(form: EstimateForm, obstacles: Vec<Obstacle>, diagram_cfg: DiagramConfig) -> Self {
        Self {
            form,
            obstacles,
            diagram_cfg,
            in_flight: InFlight::default(),
        }
    }

    pub fn set_position(&mut self, latitude: f64, longitude: f64) {
        self.form.latitude = latitude;
        self.form.longitude = longitude;
    }

    /// Redraws from scratch for the current latitude and obstacles.
    pub fn diagram(&self, css_path: Option<String>) -> Diagram {
        let cfg = DiagramConfig {
            latitude_deg: self.form.latitude,
            ..self.diagram_cfg.clone()
        };
        Diagram::new(&self.obstacles, cfg, css_path)
    }

    pub fn request(&self) -> Result<EstimateRequest, EstimateError> {
        Ok(self.form.to_request(&self.obstacles)?)
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.in_flight.is_pending()
    }

    /// Report for a result of this session, tagged with the horizon it was run with.
    pub fn report(&self, result: &EstimationResult) -> Report {
        Report::from(result).with_horizon(self.form.automatic_horizon)
    }

    /// Sends the estimate; refuses to start while a previous one is pending.
    pub async fn submit<E: Estimator>(&self, estimator: &E) -> Result<EstimationResult, EstimateError> {
        let _guard = self.in_flight.try_acquire().ok_or(EstimateError::Busy)?;
        let request = self.request()?;
        estimator.estimate(&request).await
    }
}
