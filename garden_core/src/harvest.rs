//! Harvest yield estimates from the per-plant yield table.

use crate::tables::{weeks_of_harvest, yield_per_plant, FALLBACK_YIELD_LBS};
use crate::types::{HarvestInput, HarvestResult};

impl HarvestInput {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        if self.plants.is_none() {
            vec!["plants"]
        } else {
            Vec::new()
        }
    }
}

/// Total and weekly yield over the crop's picking season
///
/// A variety that does not belong to the crop falls back to
/// [`FALLBACK_YIELD_LBS`] per plant.
pub fn compute(input: &HarvestInput) -> Option<HarvestResult> {
    let Some(plants) = input.plants else {
        tracing::debug!("Harvest: missing plant count");
        return None;
    };

    let yield_per_plant_lbs = yield_per_plant(input.crop, input.variety).unwrap_or_else(|| {
        tracing::debug!(
            "No yield for {} {}, assuming {} lb per plant",
            input.variety,
            input.crop,
            FALLBACK_YIELD_LBS
        );
        FALLBACK_YIELD_LBS
    });

    let weeks = weeks_of_harvest(input.crop);
    let total_yield_lbs = plants * yield_per_plant_lbs;
    let weekly_yield_lbs = total_yield_lbs / weeks as f64;

    tracing::debug!(
        "Harvest: {} {} x {} -> {:.1} lbs over {} weeks",
        plants,
        input.variety,
        input.crop,
        total_yield_lbs,
        weeks
    );

    Some(HarvestResult {
        total_yield_lbs,
        weekly_yield_lbs,
        weeks_of_harvest: weeks,
        yield_per_plant_lbs,
    })
}
