use std::path::Path;

use svg::node::element::{Group, Rectangle, Style};
use svg::Document;

use crate::geometry::LinearScale;
use crate::layers::{group_with_class, line, text};
use crate::types::Point;

const REPORT_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/styles/diagram.css"));

/// One bar per month, labelled underneath, value on top.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub bars: Vec<(String, f64)>,
    pub width: u32,
    pub height: u32,
    pub margin: u32,
}

impl BarChart {
    pub fn new(title: impl Into<String>, bars: Vec<(String, f64)>) -> Self {
        Self {
            title: title.into(),
            bars,
            width: 720,
            height: 360,
            margin: 48,
        }
    }

    fn value_scale(&self) -> LinearScale {
        let lo = self.bars.iter().map(|(_, v)| *v).fold(0.0, f64::min);
        let hi = self.bars.iter().map(|(_, v)| *v).fold(0.0, f64::max);
        let m = self.margin as f64;
        LinearScale::new((lo, hi), (self.height as f64 - m, m))
    }

    fn bars_group(&self) -> Group {
        let m = self.margin as f64;
        let plot_w = self.width as f64 - 2.0 * m;
        let slot = plot_w / self.bars.len().max(1) as f64;
        let y = self.value_scale();
        let base = y.apply(0.0);

        let mut g = group_with_class("report-bars");
        g = g.add(line(
            "tick",
            Point { x: m, y: base },
            Point {
                x: m + plot_w,
                y: base,
            },
        ));
        for (i, (label, value)) in self.bars.iter().enumerate() {
            let x = m + slot * i as f64;
            let top = y.apply(*value);
            let rect = Rectangle::new()
                .set("class", "report-bar")
                .set("x", x + slot * 0.15)
                .set("y", top.min(base))
                .set("width", slot * 0.7)
                .set("height", (base - top).abs());
            g = g.add(rect);

            let cx = x + slot / 2.0;
            g = g.add(text("tick-label", cx, self.height as f64 - m + 16.0, "middle", label));
            g = g.add(text(
                "tick-label",
                cx,
                top.min(base) - 4.0,
                "middle",
                &format!("{value:.1}"),
            ));
        }
        g
    }

    pub fn draw_document(&self) -> Document {
        Document::new()
            .set("xmlns", "http://www.w3.org/2000/svg")
            .set("width", self.width)
            .set("height", self.height)
            .set("viewBox", (0, 0, self.width, self.height))
            .add(Style::new(REPORT_CSS))
            .add(text(
                "report-title",
                self.width as f64 / 2.0,
                self.margin as f64 / 2.0,
                "middle",
                &self.title,
            ))
            .add(self.bars_group())
    }

    #[cfg(test)]
    pub fn to_svg_string(&self) -> String {
        self.draw_document().to_string()
    }

    pub fn to_file(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        svg::save(path, &self.draw_document())
    }
}
