use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};

use reqwest::header::CONTENT_TYPE;
use tracing::{debug, info, warn};

use crate::pvgis::{EstimateError, EstimateRequest, EstimationResult};

/// Anything that can turn a request into an estimate.
pub trait Estimator {
    fn estimate(
        &self,
        request: &EstimateRequest,
    ) -> impl Future<Output = Result<EstimationResult, EstimateError>> + Send;
}

pub struct HttpEstimator {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpEstimator {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl Estimator for HttpEstimator {
    async fn estimate(&self, request: &EstimateRequest) -> Result<EstimationResult, EstimateError> {
        info!(
            endpoint = %self.endpoint,
            lat = request.lat,
            lon = request.lon,
            usehorizon = request.usehorizon,
            "submitting estimation request"
        );
        let body = request.to_json()?;
        debug!(%body, "estimation request body");
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .inspect_err(|e| warn!("estimation request failed: {e}"))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "estimation service answered with an error status");
            return Err(EstimateError::Status(status));
        }

        let body = response.text().await?;
        debug!(bytes = body.len(), "estimation response received");
        EstimationResult::from_json(&body)
            .inspect_err(|e| warn!("estimation response rejected: {e}"))
    }
}

/// Marks a request as pending so a second submission is refused.
#[derive(Debug, Default)]
pub struct InFlight(AtomicBool);

pub struct InFlightGuard<'a>(&'a AtomicBool);

impl InFlight {
    pub fn try_acquire(&self) -> Option<InFlightGuard<'_>> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightGuard(&self.0))
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_acquire_is_refused_until_release() {
        let flag = InFlight::default();
        let guard = flag.try_acquire();
        assert!(guard.is_some());
        assert!(flag.is_pending());
        assert!(flag.try_acquire().is_none());
        drop(guard);
        assert!(!flag.is_pending());
        assert!(flag.try_acquire().is_some());
    }
}
