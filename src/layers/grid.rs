use svg::node::element::Group;

use crate::context::DiagramContext;
use crate::layers::{group_with_class, line, Layer};
use crate::types::Point;

pub struct GridLayer;
impl GridLayer {
    pub fn new() -> Self {
        Self
    }
}

impl Layer for GridLayer {
    fn render(&self, context: &DiagramContext) -> Group {
        let mut g = group_with_class("grid");
        let l = &context.layout;

        // Azimuth meridians
        for az in l.x_scale.ticks(context.cfg.step_azimuth_deg) {
            let x = l.x_scale.apply(az as f64);
            g = g.add(line(
                "gridline azimuth",
                Point { x, y: l.plot_y },
                Point { x, y: l.bottom() },
            ));
        }

        // Altitude parallels
        for alt in l.y_scale.ticks(context.cfg.step_altitude_deg) {
            let y = l.y_scale.apply(alt as f64);
            g = g.add(line(
                "gridline altitude",
                Point { x: l.plot_x, y },
                Point { x: l.right(), y },
            ));
        }

        g
    }
}
