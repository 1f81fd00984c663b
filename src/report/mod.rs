//! Monthly and yearly figures of an estimate, ready for print and export.

pub mod bars;

use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;

use crate::pvgis::response::TotalsFixed;
use crate::pvgis::EstimationResult;

pub use bars::BarChart;

pub const MONTH_NAMES: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
        .unwrap_or("?")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Production,
    Irradiation,
    Variability,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Production, Metric::Irradiation, Metric::Variability];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Production => "Production (kWh)",
            Self::Irradiation => "Irradiation (kWh/m²)",
            Self::Variability => "Variabilité (kWh)",
        }
    }

    pub fn file_stem(&self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Irradiation => "irradiation",
            Self::Variability => "variability",
        }
    }

    pub fn value(&self, row: &MonthRow) -> f64 {
        match self {
            Self::Production => row.production,
            Self::Irradiation => row.irradiation,
            Self::Variability => row.variability,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthRow {
    #[serde(rename = "mois")]
    pub month: &'static str,
    #[serde(rename = "production_kwh")]
    pub production: f64,
    #[serde(rename = "irradiation_kwh_m2")]
    pub irradiation: f64,
    #[serde(rename = "variabilite_kwh")]
    pub variability: f64,
    #[serde(rename = "production_jour_kwh")]
    pub daily_production: Option<f64>,
    #[serde(rename = "irradiation_jour_kwh_m2")]
    pub daily_irradiation: Option<f64>,
}

pub const COMPUTED_HORIZON: &str = "Calculé";
pub const USER_HORIZON: &str = "Obstacles renseignés";

/// What the estimate was run with, as echoed back by the service.
#[derive(Debug, Clone, PartialEq)]
pub struct ProvidedInputs {
    pub location: Option<(f64, f64)>,
    pub peak_power: Option<f64>,
    pub system_loss: Option<f64>,
    pub automatic_horizon: bool,
}

impl ProvidedInputs {
    fn from_service(inputs: &Value) -> Self {
        let field = |path: &str| inputs.pointer(path).and_then(Value::as_f64);
        Self {
            location: field("/location/latitude").zip(field("/location/longitude")),
            peak_power: field("/pv_module/peak_power"),
            system_loss: field("/pv_module/system_loss"),
            automatic_horizon: true,
        }
    }

    pub fn horizon_label(&self) -> &'static str {
        if self.automatic_horizon {
            COMPUTED_HORIZON
        } else {
            USER_HORIZON
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub inputs: ProvidedInputs,
    pub rows: Vec<MonthRow>,
    pub totals: TotalsFixed,
}

impl From<&EstimationResult> for Report {
    fn from(result: &EstimationResult) -> Self {
        let rows = result
            .outputs
            .monthly
            .fixed
            .iter()
            .map(|m| MonthRow {
                month: month_name(m.month),
                production: m.e_m,
                irradiation: m.h_i_m,
                variability: m.sd_m,
                daily_production: m.e_d,
                daily_irradiation: m.h_i_d,
            })
            .collect();
        Self {
            inputs: ProvidedInputs::from_service(&result.inputs),
            rows,
            totals: result.outputs.totals.fixed.clone(),
        }
    }
}

impl Report {
    /// The service does not echo the horizon source, so the caller states it.
    pub fn with_horizon(mut self, automatic: bool) -> Self {
        self.inputs.automatic_horizon = automatic;
        self
    }

    pub fn chart(&self, metric: Metric) -> BarChart {
        BarChart::new(
            metric.title(),
            self.rows.iter().map(|r| (r.month.to_string(), metric.value(r))).collect(),
        )
    }

    pub fn write_csv<W: std::io::Write>(&self, out: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(out);
        for row in &self.rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Writes `monthly.csv` and one bar chart per metric into `dir`.
    pub fn export(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

        let csv_path = dir.join("monthly.csv");
        let file = fs::File::create(&csv_path)
            .with_context(|| format!("writing {}", csv_path.display()))?;
        self.write_csv(file)?;

        for metric in Metric::ALL {
            let path = dir.join(format!("{}.svg", metric.file_stem()));
            self.chart(metric)
                .to_file(&path)
                .with_context(|| format!("writing {}", path.display()))?;
        }
        Ok(())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let i = &self.inputs;
        writeln!(f, "Entrées fournies")?;
        if let Some((lat, lon)) = i.location {
            writeln!(f, "  Latitude: {lat}")?;
            writeln!(f, "  Longitude: {lon}")?;
        }
        writeln!(f, "  Horizon: {}", i.horizon_label())?;
        if let Some(p) = i.peak_power {
            writeln!(f, "  PV installée: {p} kWc")?;
        }
        if let Some(l) = i.system_loss {
            writeln!(f, "  Pertes du système: {l} %")?;
        }
        writeln!(f)?;

        let t = &self.totals;
        writeln!(f, "Production annuelle PV: {} kWh", t.e_y)?;
        writeln!(f, "Irradiation annuelle: {} kWh/m²", t.h_i_y)?;
        writeln!(f, "Variation interannuelle: {} kWh", t.sd_y)?;
        writeln!(f, "Pertes angle d'incidence: {} %", t.l_aoi)?;
        writeln!(f, "Pertes spectrales: {} %", t.l_spec)?;
        writeln!(f, "Pertes température et irradiance: {} %", t.l_tg)?;
        writeln!(f, "Pertes totales: {} %", t.l_total)?;
        writeln!(f)?;
        writeln!(
            f,
            "{:<10} {:>16} {:>22} {:>18}",
            "Mois", "Production (kWh)", "Irradiation (kWh/m²)", "Variabilité (kWh)"
        )?;
        for r in &self.rows {
            writeln!(
                f,
                "{:<10} {:>16.2} {:>22.2} {:>18.2}",
                r.month, r.production, r.irradiation, r.variability
            )?;
        }
        Ok(())
    }
}
