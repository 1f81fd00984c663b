use crate::silhouette::{build_silhouettes, connectors, Connector, Silhouette};
use crate::solar::{reference_curves, SunCurve};
use crate::types::{LegendEntry, Obstacle};
use crate::layers::LegendLayer;
use crate::{config::DiagramConfig, layout::DiagramLayout};

pub const OBSTACLE_FILL: &str = "lightgray";
pub const OBSTACLE_LEGEND: &str = "L'ombrage de l'obstacle renseigné";

/// Everything drawn on the diagram, derived from latitude and obstacles.
pub struct Scene {
    pub curves: Vec<SunCurve>,
    pub silhouettes: Vec<Silhouette>,
    pub connectors: Vec<Connector>,
    pub legend: Vec<LegendEntry>,
}

impl Scene {
    pub fn build(latitude_deg: f64, obstacles: &[Obstacle]) -> Self {
        let curves = reference_curves(latitude_deg);
        let silhouettes = build_silhouettes(obstacles);
        let connectors = connectors(&silhouettes);

        let mut legend: Vec<LegendEntry> = curves
            .iter()
            .map(|c| LegendEntry {
                label: c.date.label.to_string(),
                color: c.date.color.to_string(),
            })
            .collect();
        legend.push(LegendEntry {
            label: OBSTACLE_LEGEND.to_string(),
            color: OBSTACLE_FILL.to_string(),
        });

        Self {
            curves,
            silhouettes,
            connectors,
            legend,
        }
    }
}

pub struct DiagramContext {
    pub scene: Scene,
    pub cfg: DiagramConfig,
    pub layout: DiagramLayout,
}

impl DiagramContext {
    pub fn new(obstacles: &[Obstacle], mut cfg: DiagramConfig) -> Self {
        let scene = Scene::build(cfg.latitude_deg, obstacles);
        let layout = DiagramLayout::from(&cfg);

        // Legend rows stack down from the top edge; the last one keeps half a
        // row clear of the plot. Growing the image by the same amount keeps
        // the plot size, so the rows never need repacking.
        let rows = LegendLayer::new().rows_needed(&scene.legend, layout.plot_x, layout.right());
        let row_h = cfg.legend_row_height;
        let needed = rows * row_h + row_h / 2;
        if needed > cfg.margin.top {
            let extra = needed - cfg.margin.top;
            cfg.margin.top += extra;
            cfg.height += extra;
        }

        let layout = DiagramLayout::from(&cfg);
        Self { scene, cfg, layout }
    }
}
