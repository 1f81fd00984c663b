use phf::phf_map;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A horizon point as typed by the user; either coordinate may still be blank.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointInput {
    pub azimuth: Option<f64>,
    pub height: Option<f64>,
}

impl PointInput {
    #[cfg(test)]
    pub fn new(azimuth: f64, height: f64) -> Self {
        Self {
            azimuth: Some(azimuth),
            height: Some(height),
        }
    }

    /// Blanks and non-finite values become 0; the height is kept within [0, 90].
    pub fn resolve(&self) -> HorizonPoint {
        let finite = |v: Option<f64>| v.filter(|v| v.is_finite()).unwrap_or(0.0);
        HorizonPoint {
            azimuth: finite(self.azimuth),
            height: finite(self.height).clamp(0.0, 90.0),
        }
    }
}

/// A point on the azimuth/altitude plane, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizonPoint {
    pub azimuth: f64,
    pub height: f64,
}

impl HorizonPoint {
    pub fn new(azimuth: f64, height: f64) -> Self {
        Self { azimuth, height }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Obstacle {
    pub points: Vec<PointInput>,
}

impl Obstacle {
    pub fn new(points: Vec<PointInput>) -> Self {
        Self { points }
    }

    pub fn resolved(&self) -> Vec<HorizonPoint> {
        self.points.iter().map(PointInput::resolve).collect()
    }

    /// Highest resolved point, used when the horizon is sent as one height per obstacle.
    pub fn peak_height(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.resolve().height)
            .fold(0.0, f64::max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPathSample {
    pub solar_hour: u32,
    pub azimuth: f64,
    pub altitude: f64,
}

impl SunPathSample {
    /// Sun below the horizon is drawn on the ground line so the curve stays continuous.
    pub fn above_ground(&self) -> HorizonPoint {
        HorizonPoint {
            azimuth: self.azimuth,
            height: self.altitude.max(0.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceDate {
    pub day_of_year: u32,
    pub label: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompassConvention {
    Standard,
    Legacy,
}

static STANDARD_COMPASS: phf::Map<u32, &'static str> = phf_map! {
    90u32 => "EST",
    180u32 => "SUD",
    270u32 => "OUEST",
};

// Older diagrams put the west label on the 285° tick.
static LEGACY_COMPASS: phf::Map<u32, &'static str> = phf_map! {
    90u32 => "EST",
    180u32 => "SUD",
    285u32 => "OUEST",
};

impl CompassConvention {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "standard" => Some(Self::Standard),
            "legacy" => Some(Self::Legacy),
            _ => None,
        }
    }

    pub fn label(&self, azimuth_deg: u32) -> Option<&'static str> {
        let map = match self {
            Self::Standard => &STANDARD_COMPASS,
            Self::Legacy => &LEGACY_COMPASS,
        };
        map.get(&azimuth_deg).copied()
    }
}

/// Blank, unparsable or non-finite input reads as missing.
pub fn parse_opt(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::approx;

    #[test]
    fn blank_point_resolves_to_zero() {
        let p = PointInput::default().resolve();
        assert_eq!(p, HorizonPoint::new(0.0, 0.0));

        let p = PointInput {
            azimuth: Some(120.0),
            height: None,
        }
        .resolve();
        assert_eq!(p, HorizonPoint::new(120.0, 0.0));
    }

    #[test]
    fn resolve_keeps_height_on_the_sky_dome() {
        assert!(approx(PointInput::new(90.0, -5.0).resolve().height, 0.0, 1e-12));
        assert!(approx(PointInput::new(90.0, 120.0).resolve().height, 90.0, 1e-12));
        assert!(approx(PointInput::new(90.0, 12.5).resolve().height, 12.5, 1e-12));
    }

    #[test]
    fn peak_height_uses_resolved_points() {
        let o = Obstacle::new(vec![
            PointInput::new(100.0, 10.0),
            PointInput {
                azimuth: Some(110.0),
                height: None,
            },
            PointInput::new(120.0, 25.0),
        ]);
        assert!(approx(o.peak_height(), 25.0, 1e-12));
        assert!(approx(Obstacle::default().peak_height(), 0.0, 1e-12));
    }

    #[test]
    fn sample_below_horizon_is_drawn_at_ground_level() {
        let s = SunPathSample {
            solar_hour: 4,
            azimuth: 60.0,
            altitude: -12.0,
        };
        assert_eq!(s.above_ground(), HorizonPoint::new(60.0, 0.0));
    }

    #[test]
    fn compass_conventions_differ_only_on_west() {
        let std = CompassConvention::Standard;
        let legacy = CompassConvention::Legacy;
        assert_eq!(std.label(90), Some("EST"));
        assert_eq!(std.label(180), Some("SUD"));
        assert_eq!(std.label(270), Some("OUEST"));
        assert_eq!(std.label(285), None);
        assert_eq!(legacy.label(285), Some("OUEST"));
        assert_eq!(legacy.label(270), None);
        assert_eq!(std.label(45), None);
    }

    #[test]
    fn compass_from_str_handles_unknown() {
        assert_eq!(
            CompassConvention::from_str("standard"),
            Some(CompassConvention::Standard)
        );
        assert_eq!(
            CompassConvention::from_str("legacy"),
            Some(CompassConvention::Legacy)
        );
        assert_eq!(CompassConvention::from_str("Standard"), None);
        assert_eq!(CompassConvention::from_str(""), None);
    }

    #[test]
    fn blank_or_garbled_input_is_missing() {
        assert_eq!(parse_opt("  "), None);
        assert_eq!(parse_opt("x"), None);
        assert_eq!(parse_opt(" 12.5 "), Some(12.5));
    }

    #[test]
    fn nan_and_infinity_are_not_numbers() {
        assert_eq!(parse_opt("NaN"), None);
        assert_eq!(parse_opt("inf"), None);
        assert_eq!(parse_opt("-infinity"), None);
        assert_eq!(parse_opt("1e400"), None);
    }

    #[test]
    fn non_finite_point_resolves_to_ground() {
        let p = PointInput {
            azimuth: Some(f64::INFINITY),
            height: Some(f64::NAN),
        }
        .resolve();
        assert_eq!(p, HorizonPoint::new(0.0, 0.0));
    }
}
