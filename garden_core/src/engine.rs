//! Calculation dispatch.
//!
//! A [`Calculation`] names one calculator together with its input, which lets
//! callers hold requests of any kind in one place, read them from JSON, and
//! route each to the right formula.

use crate::types::*;
use crate::{area, harvest, seeds, soil, spacing, watering, Error, Result};
use serde::{Deserialize, Serialize};
use std::io::BufRead;

/// A request for one calculator
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculator", rename_all = "snake_case")]
pub enum Calculation {
    Spacing(SpacingInput),
    Seeds(SeedInput),
    Soil(SoilInput),
    Watering(WaterInput),
    Area(AreaInput),
    Harvest(HarvestInput),
}

/// The result produced by one calculator
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculator", rename_all = "snake_case")]
pub enum Outcome {
    Spacing(SpacingResult),
    Seeds(SeedResult),
    Soil(SoilResult),
    Watering(WaterResult),
    Area(AreaResult),
    Harvest(HarvestResult),
}

impl Calculation {
    /// Calculator name as used on the wire
    pub fn name(&self) -> &'static str {
        match self {
            Calculation::Spacing(_) => "spacing",
            Calculation::Seeds(_) => "seeds",
            Calculation::Soil(_) => "soil",
            Calculation::Watering(_) => "watering",
            Calculation::Area(_) => "area",
            Calculation::Harvest(_) => "harvest",
        }
    }

    /// Run the calculator; `None` when its required fields are blank
    pub fn compute(&self) -> Option<Outcome> {
        match self {
            Calculation::Spacing(input) => spacing::compute(input).map(Outcome::Spacing),
            Calculation::Seeds(input) => seeds::compute(input).map(Outcome::Seeds),
            Calculation::Soil(input) => soil::compute(input).map(Outcome::Soil),
            Calculation::Watering(input) => watering::compute(input).map(Outcome::Watering),
            Calculation::Area(input) => area::compute(input).map(Outcome::Area),
            Calculation::Harvest(input) => harvest::compute(input).map(Outcome::Harvest),
        }
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        match self {
            Calculation::Spacing(input) => input.missing_fields(),
            Calculation::Seeds(input) => input.missing_fields(),
            Calculation::Soil(input) => input.missing_fields(),
            Calculation::Watering(input) => input.missing_fields(),
            Calculation::Area(input) => input.missing_fields(),
            Calculation::Harvest(input) => input.missing_fields(),
        }
    }

    /// Run the calculator, turning a blank required field into an error
    pub fn compute_required(&self) -> Result<Outcome> {
        self.compute().ok_or_else(|| Error::MissingInput {
            calculator: self.name(),
            fields: self.missing_fields().join(", "),
        })
    }
}

/// One answered line of a batch
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BatchRecord {
    /// 1-based line number in the batch input
    pub line: usize,
    pub outcome: Option<Outcome>,
}

/// Answer every calculation in a JSON Lines stream
///
/// Blank lines are skipped. A line that does not parse aborts the batch.
pub fn run_batch<R: BufRead>(reader: R) -> Result<Vec<BatchRecord>> {
    let mut records = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_num = idx + 1;

        if line.trim().is_empty() {
            continue;
        }

        let calculation: Calculation = serde_json::from_str(&line).map_err(|e| {
            tracing::warn!("Malformed calculation at line {}: {}", line_num, e);
            Error::Other(format!("Line {}: {}", line_num, e))
        })?;

        let outcome = calculation.compute();
        if outcome.is_none() {
            tracing::info!(
                "Line {}: {} missing {}",
                line_num,
                calculation.name(),
                calculation.missing_fields().join(", ")
            );
        }

        records.push(BatchRecord {
            line: line_num,
            outcome,
        });
    }

    tracing::info!("Answered {} calculations", records.len());
    Ok(records)
}
