use crate::config::DiagramConfig;
use crate::context::DiagramContext;
use crate::layers::{FrameLayer, GridLayer, Layer, LegendLayer, ObstaclesLayer, SunPathsLayer};
use crate::types::Obstacle;
use std::fs;
use std::path::Path;
use svg::node::element::{ClipPath, Definitions, Group, Rectangle, Style};
use svg::Document;

// Load the default css for embedding
const DEFAULT_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/styles/diagram.css"));

pub struct Diagram {
    pub context: DiagramContext,
    css_path: Option<String>,
}

impl Diagram {
    pub fn new(obstacles: &[Obstacle], cfg: DiagramConfig, css_path: Option<String>) -> Self {
        Self {
            context: DiagramContext::new(obstacles, cfg),
            css_path,
        }
    }

    fn load_css_text(&self) -> String {
        if let Some(path) = &self.css_path {
            match fs::read_to_string(path) {
                Ok(text) => return text,
                Err(e) => tracing::warn!("ignoring stylesheet {path}: {e}"),
            }
        }
        // Embedded fallback
        DEFAULT_CSS.to_owned()
    }

    /// Builds a fresh document from the current scene; nothing is reused between calls.
    pub fn draw_document(&self) -> Document {
        let w = self.context.cfg.width;
        let h = self.context.cfg.height;
        let l = &self.context.layout;

        // Layer stack, back to front
        let clipped_layers: Vec<Box<dyn Layer>> = vec![
            Box::new(GridLayer::new()),
            Box::new(ObstaclesLayer::new()),
            Box::new(SunPathsLayer::new()),
        ];
        let unclipped_layers: Vec<Box<dyn Layer>> =
            vec![Box::new(FrameLayer::new()), Box::new(LegendLayer::new())];

        let mut doc = Document::new()
            .set("xmlns", "http://www.w3.org/2000/svg")
            .set("width", w)
            .set("height", h)
            .set("viewBox", (0, 0, w, h))
            .set("class", "sun-diagram");

        let css = self.load_css_text();
        if !css.is_empty() {
            doc = doc.add(Style::new(css));
        }

        let clip_rect = Rectangle::new()
            .set("x", l.plot_x)
            .set("y", l.plot_y)
            .set("width", l.plot_w)
            .set("height", l.plot_h);
        let clip = ClipPath::new().set("id", "clip-plot").add(clip_rect);
        let defs = Definitions::new().add(clip);
        doc = doc.add(defs);

        // Clipped layers that stay inside the plot area
        let mut clipped = Group::new().set("clip-path", "url(#clip-plot)");
        for layer in clipped_layers {
            clipped = clipped.add(layer.render(&self.context));
        }
        doc = doc.add(clipped);

        // Axes and legend around the plot
        for layer in unclipped_layers {
            doc = doc.add(layer.render(&self.context));
        }

        doc
    }

    #[cfg(test)]
    pub fn to_svg_string(&self) -> String {
        self.draw_document().to_string()
    }

    pub fn to_file(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let doc = self.draw_document();
        svg::save(path, &doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PointInput;

    fn sample_obstacles() -> Vec<Obstacle> {
        vec![
            Obstacle::new(vec![PointInput::new(100.0, 20.0)]),
            Obstacle::new(vec![PointInput::new(240.0, 15.0), PointInput::new(260.0, 8.0)]),
        ]
    }

    #[test]
    fn redraw_of_the_same_state_is_identical() {
        let cfg = DiagramConfig {
            latitude_deg: 45.0,
            ..DiagramConfig::default()
        };
        let d = Diagram::new(&sample_obstacles(), cfg, None);
        assert_eq!(d.to_svg_string(), d.to_svg_string());
    }

    #[test]
    fn document_contains_every_layer_once() {
        let d = Diagram::new(&sample_obstacles(), DiagramConfig::default(), None);
        let out = d.to_svg_string();
        for class in ["class=\"grid\"", "class=\"obstacles\"", "class=\"sun-paths\"", "class=\"frame\"", "class=\"legend\""] {
            assert_eq!(out.matches(class).count(), 1, "{class}");
        }
        assert!(out.contains("url(#clip-plot)"));
        assert!(out.contains("<style"));
    }

    #[test]
    fn changing_obstacles_changes_the_drawing_only_where_needed() {
        let cfg = DiagramConfig::default();
        let empty = Diagram::new(&[], cfg.clone(), None).to_svg_string();
        let with = Diagram::new(&sample_obstacles(), cfg, None).to_svg_string();
        assert!(!empty.contains("silhouette"));
        assert_eq!(with.matches("class=\"silhouette\"").count(), 2);
    }

    #[test]
    fn missing_css_override_falls_back_to_embedded() {
        let d = Diagram::new(
            &[],
            DiagramConfig::default(),
            Some("/definitely/not/here.css".into()),
        );
        assert_eq!(d.load_css_text(), DEFAULT_CSS);
    }
}
