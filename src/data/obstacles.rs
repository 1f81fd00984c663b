use csv::{Reader, ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;
use thiserror::Error;

use crate::types::{parse_opt, Obstacle, PointInput};

#[derive(Debug, Error)]
pub enum ObstacleError {
    #[error("reading obstacles: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: {field} '{value}' is not a number")]
    NotANumber {
        line: u64,
        field: &'static str,
        value: String,
    },
}

// One CSV row per obstacle point; rows sharing an `obstacle` id form one obstacle.
#[derive(Debug, Deserialize)]
struct ObstacleRow {
    obstacle: String,
    #[serde(default)]
    azimuth: String,
    #[serde(default)]
    height: String,
}

fn parse_cell(value: &str, field: &'static str, line: u64) -> Result<Option<f64>, ObstacleError> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    parse_opt(value).map(Some).ok_or_else(|| ObstacleError::NotANumber {
        line,
        field,
        value: value.to_string(),
    })
}

fn parse_obstacles_from_reader<R: std::io::Read>(
    mut rdr: Reader<R>,
) -> Result<Vec<Obstacle>, ObstacleError> {
    let mut ids: Vec<String> = Vec::new();
    let mut out: Vec<Obstacle> = Vec::new();
    let headers = rdr.headers()?.clone();
    let mut record = StringRecord::new();
    while rdr.read_record(&mut record)? {
        let row: ObstacleRow = record.deserialize(Some(&headers))?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let point = PointInput {
            azimuth: parse_cell(&row.azimuth, "azimuth", line)?,
            height: parse_cell(&row.height, "height", line)?,
        };
        match ids.iter().position(|id| *id == row.obstacle) {
            Some(i) => out[i].points.push(point),
            None => {
                ids.push(row.obstacle);
                out.push(Obstacle::new(vec![point]));
            }
        }
    }
    Ok(out)
}

pub fn load_obstacles(path: &str) -> Result<Vec<Obstacle>, ObstacleError> {
    let rdr = ReaderBuilder::new().trim(Trim::All).from_path(path)?;
    parse_obstacles_from_reader(rdr)
}
