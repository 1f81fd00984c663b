use svg::node::element::{Group, Polygon};

use crate::context::{DiagramContext, OBSTACLE_FILL};
use crate::geometry::polygon_points;
use crate::layers::{group_with_class, line, Layer};
use crate::types::Point;

pub struct ObstaclesLayer {
    fill_opacity: f64,
}
impl ObstaclesLayer {
    pub fn new() -> Self {
        Self { fill_opacity: 0.5 }
    }
}

impl Layer for ObstaclesLayer {
    fn render(&self, context: &DiagramContext) -> Group {
        let mut g = group_with_class("obstacles");
        let l = &context.layout;

        for (i, s) in context.scene.silhouettes.iter().enumerate() {
            let pts: Vec<Point> = s.points.iter().map(|&p| l.to_pixels(p)).collect();

            let mut og = Group::new()
                .set("class", "obstacle")
                .set("id", format!("obstacle-{}", i + 1));
            og = og.add(
                Polygon::new()
                    .set("class", "silhouette")
                    .set("points", polygon_points(&pts))
                    .set("fill", OBSTACLE_FILL)
                    .set("fill-opacity", self.fill_opacity),
            );
            for w in pts.windows(2) {
                og = og.add(line("outline", w[0], w[1]).set("stroke", OBSTACLE_FILL));
            }
            g = g.add(og);
        }

        for c in &context.scene.connectors {
            g = g.add(
                line("connector", l.to_pixels(c.from), l.to_pixels(c.to))
                    .set("stroke", OBSTACLE_FILL),
            );
        }

        g
    }
}
