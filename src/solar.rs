//! Sun position on the azimuth/altitude plane for a handful of reference days.

use crate::types::{ReferenceDate, SunPathSample};

/// Reference days drawn on the diagram, winter solstice first.
pub const REFERENCE_DATES: [ReferenceDate; 7] = [
    ReferenceDate {
        day_of_year: 355,
        label: "21/12",
        color: "#EE82EE",
    },
    ReferenceDate {
        day_of_year: 20,
        label: "20/01",
        color: "#FF8C69",
    },
    ReferenceDate {
        day_of_year: 50,
        label: "18/02",
        color: "#8B4513",
    },
    ReferenceDate {
        day_of_year: 80,
        label: "21/03",
        color: "#008000",
    },
    ReferenceDate {
        day_of_year: 110,
        label: "17/04",
        color: "#87CEEB",
    },
    ReferenceDate {
        day_of_year: 140,
        label: "21/05",
        color: "#FF0000",
    },
    ReferenceDate {
        day_of_year: 170,
        label: "21/06",
        color: "#4B0082",
    },
];

/// Index into `REFERENCE_DATES` of the curve that carries hour labels.
pub const JUNE_SOLSTICE: usize = 6;

pub const FIRST_SOLAR_HOUR: u32 = 4;
pub const LAST_SOLAR_HOUR: u32 = 22;
pub const SOLAR_HOUR_STEP: usize = 2;

pub const MIN_AZIMUTH_DEG: f64 = 30.0;
pub const MAX_AZIMUTH_DEG: f64 = 330.0;

/// Solar declination in degrees (Cooper's approximation).
pub fn declination_deg(day_of_year: u32) -> f64 {
    let angle = 360.0 * (day_of_year as f64 - 81.0) / 365.0;
    23.45 * angle.to_radians().sin()
}

/// Angular distance from solar noon, 15° per hour.
pub fn hour_angle_deg(solar_hour: f64) -> f64 {
    15.0 * (solar_hour - 12.0)
}

pub fn altitude_deg(latitude_deg: f64, declination_deg: f64, solar_hour: f64) -> f64 {
    let lat = latitude_deg.to_radians();
    let dec = declination_deg.to_radians();
    let h = hour_angle_deg(solar_hour).to_radians();
    let sin_alt = lat.sin() * dec.sin() + lat.cos() * dec.cos() * h.cos();
    sin_alt.clamp(-1.0, 1.0).asin().to_degrees()
}

/// Azimuth measured from north, south at solar noon.
pub fn azimuth_deg(solar_hour: f64) -> f64 {
    hour_angle_deg(solar_hour) + 180.0
}

pub fn in_azimuth_domain(azimuth: f64) -> bool {
    (MIN_AZIMUTH_DEG..=MAX_AZIMUTH_DEG).contains(&azimuth)
}

/// Sun positions for one day, restricted to the diagram's azimuth domain.
pub fn sun_path(latitude_deg: f64, day_of_year: u32) -> Vec<SunPathSample> {
    let decl = declination_deg(day_of_year);
    (FIRST_SOLAR_HOUR..=LAST_SOLAR_HOUR)
        .step_by(SOLAR_HOUR_STEP)
        .filter_map(|hour| {
            let h = hour as f64;
            let azimuth = azimuth_deg(h);
            in_azimuth_domain(azimuth).then(|| SunPathSample {
                solar_hour: hour,
                azimuth,
                altitude: altitude_deg(latitude_deg, decl, h),
            })
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct SunCurve {
    pub date: ReferenceDate,
    pub samples: Vec<SunPathSample>,
}

pub fn reference_curves(latitude_deg: f64) -> Vec<SunCurve> {
    REFERENCE_DATES
        .iter()
        .map(|&date| SunCurve {
            date,
            samples: sun_path(latitude_deg, date.day_of_year),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::approx;

    #[test]
    fn declination_is_zero_at_day_81_and_extreme_at_solstices() {
        assert!(approx(declination_deg(81), 0.0, 1e-12));
        // 81 + 365/4 ≈ 172 → near +23.45
        assert!(declination_deg(172) > 23.4);
        assert!(declination_deg(355) < -23.4);
        // Equinox reference day sits within half a degree of zero
        assert!(declination_deg(80).abs() < 0.5);
    }

    #[test]
    fn declination_is_periodic_over_a_year() {
        for day in [1, 45, 81, 200, 300] {
            assert!(approx(declination_deg(day), declination_deg(day + 365), 1e-9));
        }
    }

    #[test]
    fn hour_angle_and_azimuth_center_on_noon() {
        assert!(approx(hour_angle_deg(12.0), 0.0, 1e-12));
        assert!(approx(hour_angle_deg(4.0), -120.0, 1e-12));
        assert!(approx(azimuth_deg(12.0), 180.0, 1e-12));
        assert!(approx(azimuth_deg(22.0), 330.0, 1e-12));
    }

    #[test]
    fn altitude_is_symmetric_around_solar_noon() {
        let decl = declination_deg(140);
        for h in [4.0, 6.0, 8.0, 10.0] {
            let am = altitude_deg(45.0, decl, h);
            let pm = altitude_deg(45.0, decl, 24.0 - h);
            assert!(approx(am, pm, 1e-9), "h={h}: {am} vs {pm}");
            let (az_am, az_pm) = (azimuth_deg(h), azimuth_deg(24.0 - h));
            assert!(approx(az_am - 180.0, -(az_pm - 180.0), 1e-12));
        }
    }

    #[test]
    fn noon_altitude_matches_colatitude_plus_declination() {
        let decl = declination_deg(170);
        let alt = altitude_deg(45.0, decl, 12.0);
        assert!(approx(alt, 90.0 - 45.0 + decl, 1e-9));
    }

    #[test]
    fn sun_path_keeps_samples_in_domain() {
        let samples = sun_path(45.0, 170);
        // hours 4..=22 step 2 give azimuths 60..=330, all inside the domain
        assert_eq!(samples.len(), 10);
        assert_eq!(samples[0].solar_hour, 4);
        assert_eq!(samples[9].solar_hour, 22);
        assert!(samples.iter().all(|s| in_azimuth_domain(s.azimuth)));
    }

    #[test]
    fn winter_morning_sun_is_below_horizon() {
        let samples = sun_path(45.0, 355);
        let early = samples.iter().find(|s| s.solar_hour == 6).unwrap();
        assert!(early.altitude < 0.0);
        assert!(approx(early.above_ground().height, 0.0, 1e-12));
    }

    #[test]
    fn reference_curves_cover_every_date() {
        let curves = reference_curves(46.5);
        assert_eq!(curves.len(), REFERENCE_DATES.len());
        assert_eq!(curves[JUNE_SOLSTICE].date.label, "21/06");
        let colors: std::collections::HashSet<_> = curves.iter().map(|c| c.date.color).collect();
        assert_eq!(colors.len(), curves.len());
    }
}
