use svg::node::element::{Group, Path};

use crate::context::DiagramContext;
use crate::geometry::basis_curve_data;
use crate::layers::{group_with_class, text, Layer};
use crate::solar::JUNE_SOLSTICE;
use crate::types::Point;

pub struct SunPathsLayer {
    hour_label_offset: f64,
}
impl SunPathsLayer {
    pub fn new() -> Self {
        Self {
            hour_label_offset: 10.0,
        }
    }
}

impl Layer for SunPathsLayer {
    fn render(&self, context: &DiagramContext) -> Group {
        let mut g = group_with_class("sun-paths");
        let l = &context.layout;

        for (i, curve) in context.scene.curves.iter().enumerate() {
            let pts: Vec<Point> = curve
                .samples
                .iter()
                .map(|s| l.to_pixels(s.above_ground()))
                .collect();

            if let Some(d) = basis_curve_data(&pts) {
                g = g.add(
                    Path::new()
                        .set("class", "sun-path")
                        .set("fill", "none")
                        .set("stroke", curve.date.color)
                        .set("data-date", curve.date.label)
                        .set("d", d),
                );
            }

            if i == JUNE_SOLSTICE {
                for (s, p) in curve.samples.iter().zip(&pts) {
                    g = g.add(text(
                        "hour-label",
                        p.x,
                        p.y - self.hour_label_offset,
                        "middle",
                        &format!("{}h", s.solar_hour),
                    ));
                }
            }
        }

        g
    }
}
