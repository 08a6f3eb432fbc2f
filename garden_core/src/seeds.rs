//! Seed quantity, inflated for seeds that fail to germinate.

use crate::types::{SeedInput, SeedResult};

/// Germination rate (percent) assumed when the field is left blank
pub const DEFAULT_GERMINATION_RATE: f64 = 85.0;

impl SeedInput {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.area_sq_ft.is_none() {
            missing.push("area_sq_ft");
        }
        if self.seeds_per_sq_ft.is_none() {
            missing.push("seeds_per_sq_ft");
        }
        missing
    }
}

/// Seeds to sow so that the expected survivors cover the area
///
/// `plant_type` is carried for the caller but does not change the formula.
pub fn compute(input: &SeedInput) -> Option<SeedResult> {
    let (Some(area), Some(density)) = (input.area_sq_ft, input.seeds_per_sq_ft) else {
        tracing::debug!("Seeds: missing {:?}", input.missing_fields());
        return None;
    };

    let germination_rate_percent = input
        .germination_rate_percent
        .unwrap_or(DEFAULT_GERMINATION_RATE);

    let total_seeds = (area * density).ceil();
    let seeds_needed = (total_seeds / (germination_rate_percent / 100.0)).ceil();
    let extra_seeds = seeds_needed - total_seeds;

    tracing::debug!(
        "Seeds ({}): {} base, {} at {}% germination",
        input.plant_type,
        total_seeds,
        seeds_needed,
        germination_rate_percent
    );

    Some(SeedResult {
        total_seeds: total_seeds as i64,
        seeds_needed: seeds_needed as i64,
        extra_seeds,
        germination_rate_percent,
    })
}
