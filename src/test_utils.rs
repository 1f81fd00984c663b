use crate::config::DiagramConfig;
use crate::context::DiagramContext;
use crate::types::Obstacle;

// Check that the error between a and b is close enough
pub fn approx(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

pub fn make_context(patch: impl FnOnce(&mut DiagramConfig)) -> DiagramContext {
    make_context_with(&[], patch)
}

pub fn make_context_with(
    obstacles: &[Obstacle],
    patch: impl FnOnce(&mut DiagramConfig),
) -> DiagramContext {
    let mut cfg = DiagramConfig::default();
    cfg.latitude_deg = 45.0;
    patch(&mut cfg);
    DiagramContext::new(obstacles, cfg)
}
