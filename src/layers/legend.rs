use svg::node::element::Group;

use crate::context::DiagramContext;
use crate::layers::{group_with_class, line, text, Layer};
use crate::types::{LegendEntry, Point};

// Legend rows sit above the plot, wrapping when the width runs out. The
// context grows the top margin so every row clears the plot.
pub struct LegendLayer {
    swatch_len: f64,
    char_width: f64,
    gap: f64,
}
impl LegendLayer {
    pub fn new() -> Self {
        Self {
            swatch_len: 20.0,
            char_width: 7.0,
            gap: 24.0,
        }
    }

    fn entry_width(&self, label: &str) -> f64 {
        self.swatch_len + 6.0 + label.chars().count() as f64 * self.char_width + self.gap
    }

    fn pack(&self, entries: &[LegendEntry], start_x: f64, max_x: f64, row_h: f64) -> Vec<Point> {
        let mut y = row_h;
        let mut x = start_x;
        let mut out = Vec::with_capacity(entries.len());
        for e in entries {
            let w = self.entry_width(&e.label);
            if x > start_x && x + w > max_x {
                x = start_x;
                y += row_h;
            }
            out.push(Point { x, y });
            x += w;
        }
        out
    }

    /// Rows the entries take between `start_x` and `max_x`.
    pub fn rows_needed(&self, entries: &[LegendEntry], start_x: f64, max_x: f64) -> u32 {
        self.pack(entries, start_x, max_x, 1.0)
            .last()
            .map_or(0, |p| p.y as u32)
    }

    /// Left end of each entry's swatch, on the row's baseline.
    pub fn positions(&self, context: &DiagramContext) -> Vec<Point> {
        let l = &context.layout;
        let row_h = context.cfg.legend_row_height as f64;
        self.pack(&context.scene.legend, l.plot_x, l.right(), row_h)
    }
}

impl Layer for LegendLayer {
    fn render(&self, context: &DiagramContext) -> Group {
        let mut g = group_with_class("legend");
        for (e, p) in context.scene.legend.iter().zip(self.positions(context)) {
            let end = Point {
                x: p.x + self.swatch_len,
                y: p.y,
            };
            g = g.add(
                line("legend-swatch", p, end)
                    .set("stroke", e.color.as_str())
                    .set("stroke-width", 3),
            );
            g = g.add(
                text("legend-label", end.x + 6.0, p.y + 4.0, "start", &e.label)
                    .set("fill", e.color.as_str()),
            );
        }
        g
    }
}
