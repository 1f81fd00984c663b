use svg::node::element::{Group, Rectangle};

use crate::context::DiagramContext;
use crate::layers::{group_with_class, line, text, Layer};
use crate::types::{CompassConvention, Point};

pub const AZIMUTH_AXIS_TITLE: &str = "Axe des azimuts (en degrés)";
pub const ALTITUDE_AXIS_TITLE: &str = "Axe des hauteurs (en degrés)";

pub fn azimuth_tick_label(compass: CompassConvention, azimuth_deg: u32) -> String {
    compass
        .label(azimuth_deg)
        .map(str::to_string)
        .unwrap_or_else(|| azimuth_deg.to_string())
}

pub struct FrameLayer {
    tick_len: f64,
    label_gap: f64,
}
impl FrameLayer {
    pub fn new() -> Self {
        Self {
            tick_len: 6.0,
            label_gap: 20.0,
        }
    }
}

impl Layer for FrameLayer {
    fn render(&self, context: &DiagramContext) -> Group {
        let mut g = group_with_class("frame");
        let l = &context.layout;
        let (left, bottom) = (l.plot_x, l.bottom());

        // Border rectangle
        g = g.add(
            Rectangle::new()
                .set("x", l.plot_x)
                .set("y", l.plot_y)
                .set("width", l.plot_w)
                .set("height", l.plot_h)
                .set("fill", "none")
                .set("class", "border"),
        );

        // Azimuth ticks (bottom)
        for az in l.x_scale.ticks(context.cfg.step_azimuth_deg) {
            let x = l.x_scale.apply(az as f64);
            g = g.add(line(
                "tick",
                Point { x, y: bottom },
                Point {
                    x,
                    y: bottom + self.tick_len,
                },
            ));
            let label = azimuth_tick_label(context.cfg.compass, az);
            let class = if context.cfg.compass.label(az).is_some() {
                "tick-label compass"
            } else {
                "tick-label"
            };
            g = g.add(text(class, x, bottom + self.label_gap, "middle", &label));
        }

        // Altitude ticks (left)
        for alt in l.y_scale.ticks(context.cfg.step_altitude_deg) {
            let y = l.y_scale.apply(alt as f64);
            g = g.add(line(
                "tick",
                Point { x: left, y },
                Point {
                    x: left - self.tick_len,
                    y,
                },
            ));
            g = g.add(text(
                "tick-label",
                left - self.tick_len - 4.0,
                y + 4.0,
                "end",
                &alt.to_string(),
            ));
        }

        // Axis titles
        let w = context.cfg.width as f64;
        let h = context.cfg.height as f64;
        g = g.add(text(
            "axis-title",
            w / 2.0,
            bottom + 2.5 * self.label_gap,
            "middle",
            AZIMUTH_AXIS_TITLE,
        ));
        g = g.add(
            text("axis-title", -h / 2.0, left / 2.5, "middle", ALTITUDE_AXIS_TITLE)
                .set("transform", "rotate(-90)"),
        );

        g
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::make_context;

    #[test]
    fn compass_labels_replace_cardinal_ticks() {
        let std = CompassConvention::Standard;
        assert_eq!(azimuth_tick_label(std, 90), "EST");
        assert_eq!(azimuth_tick_label(std, 180), "SUD");
        assert_eq!(azimuth_tick_label(std, 270), "OUEST");
        assert_eq!(azimuth_tick_label(std, 285), "285");
        assert_eq!(azimuth_tick_label(std, 30), "30");
        assert_eq!(
            azimuth_tick_label(CompassConvention::Legacy, 285),
            "OUEST"
        );
    }

    #[test]
    fn frame_carries_titles_and_compass_ticks() {
        let out = FrameLayer::new().render(&make_context(|_| {})).to_string();
        assert!(out.contains(AZIMUTH_AXIS_TITLE));
        assert!(out.contains(ALTITUDE_AXIS_TITLE));
        assert_eq!(out.matches("tick-label compass").count(), 3);
        assert!(out.contains("OUEST"));
    }

    #[test]
    fn legacy_frame_keeps_three_compass_ticks() {
        let out = FrameLayer::new()
            .render(&make_context(|cfg| cfg.compass = CompassConvention::Legacy))
            .to_string();
        assert_eq!(out.matches("tick-label compass").count(), 3);
        assert!(out.contains("OUEST"));
    }
}
