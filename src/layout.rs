use crate::config::DiagramConfig;
use crate::geometry::LinearScale;
use crate::types::{HorizonPoint, Point};

#[derive(Debug, Clone, Copy)]
pub struct DiagramLayout {
    pub plot_x: f64,
    pub plot_y: f64,
    pub plot_w: f64,
    pub plot_h: f64,
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
}

impl DiagramLayout {
    pub fn to_pixels(&self, p: HorizonPoint) -> Point {
        Point {
            x: self.x_scale.apply(p.azimuth),
            y: self.y_scale.apply(p.height),
        }
    }

    pub fn bottom(&self) -> f64 {
        self.plot_y + self.plot_h
    }

    pub fn right(&self) -> f64 {
        self.plot_x + self.plot_w
    }
}

impl From<&DiagramConfig> for DiagramLayout {
    fn from(cfg: &DiagramConfig) -> Self {
        let plot_x = cfg.margin.left as f64;
        let plot_y = cfg.margin.top as f64;
        let plot_w = cfg.width.saturating_sub(cfg.margin.left + cfg.margin.right) as f64;
        let plot_h = cfg.height.saturating_sub(cfg.margin.top + cfg.margin.bottom) as f64;

        // SVG y grows downwards, so altitude maps from the bottom edge up.
        let x_scale = LinearScale::new(cfg.azimuth_domain, (plot_x, plot_x + plot_w));
        let y_scale = LinearScale::new(cfg.altitude_domain, (plot_y + plot_h, plot_y));

        Self {
            plot_x,
            plot_y,
            plot_w,
            plot_h,
            x_scale,
            y_scale,
        }
    }
}
