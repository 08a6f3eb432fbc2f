//! Built-in lookup tables for watering and harvest estimates.
//!
//! The water tables are exhaustive matches over their enums. The yield table
//! is a map built once on first use and shared for the life of the process.

use crate::types::{Crop, PlantType, Season, SoilType, Variety};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Yield assumed for a crop/variety pair missing from the table
pub const FALLBACK_YIELD_LBS: f64 = 1.0;

/// Varieties per crop with average pounds harvested per plant
const YIELDS: &[(Crop, &[(Variety, f64)])] = &[
    (
        Crop::Tomatoes,
        &[
            (Variety::Standard, 10.0),
            (Variety::Cherry, 5.0),
            (Variety::Beefsteak, 15.0),
        ],
    ),
    (
        Crop::Peppers,
        &[
            (Variety::Standard, 2.0),
            (Variety::Hot, 1.0),
            (Variety::Bell, 3.0),
        ],
    ),
    (
        Crop::Lettuce,
        &[
            (Variety::Standard, 1.0),
            (Variety::Romaine, 1.5),
            (Variety::Butterhead, 0.8),
        ],
    ),
    (
        Crop::Beans,
        &[
            (Variety::Standard, 0.5),
            (Variety::Pole, 1.0),
            (Variety::Bush, 0.3),
        ],
    ),
    (
        Crop::Carrots,
        &[
            (Variety::Standard, 0.3),
            (Variety::Baby, 0.2),
            (Variety::Large, 0.5),
        ],
    ),
    (
        Crop::Cucumbers,
        &[
            (Variety::Standard, 5.0),
            (Variety::Pickling, 3.0),
            (Variety::Slicing, 7.0),
        ],
    ),
];

/// Cached yield map keyed by (crop, variety)
static YIELD_TABLE: Lazy<HashMap<(Crop, Variety), f64>> = Lazy::new(|| {
    YIELDS
        .iter()
        .flat_map(|(crop, varieties)| {
            varieties
                .iter()
                .map(move |(variety, lbs)| ((*crop, *variety), *lbs))
        })
        .collect()
});

/// Inches of water per week a planting needs in a given season
pub fn base_inches_per_week(plant_type: PlantType, season: Season) -> f64 {
    use PlantType::*;
    use Season::*;

    match (plant_type, season) {
        (Vegetables, Spring) => 1.0,
        (Vegetables, Summer) => 1.5,
        (Vegetables, Fall) => 0.8,
        (Vegetables, Winter) => 0.5,
        (Flowers, Spring) => 0.8,
        (Flowers, Summer) => 1.2,
        (Flowers, Fall) => 0.6,
        (Flowers, Winter) => 0.3,
        (Herbs, Spring) => 0.6,
        (Herbs, Summer) => 1.0,
        (Herbs, Fall) => 0.5,
        (Herbs, Winter) => 0.2,
        (Lawn, Spring) => 1.2,
        (Lawn, Summer) => 1.8,
        (Lawn, Fall) => 1.0,
        (Lawn, Winter) => 0.4,
    }
}

/// Scale factor on water depth for how fast the soil drains
pub fn soil_multiplier(soil_type: SoilType) -> f64 {
    match soil_type {
        SoilType::Sand => 1.3,
        SoilType::Loam => 1.0,
        SoilType::Clay => 0.8,
    }
}

/// Pounds per plant, or `None` when the variety does not belong to the crop
pub fn yield_per_plant(crop: Crop, variety: Variety) -> Option<f64> {
    YIELD_TABLE.get(&(crop, variety)).copied()
}

/// Varieties offered for a crop, `Standard` first
pub fn varieties_for(crop: Crop) -> Vec<Variety> {
    YIELDS
        .iter()
        .find(|(c, _)| *c == crop)
        .map(|(_, varieties)| varieties.iter().map(|(v, _)| *v).collect())
        .unwrap_or_default()
}

/// Length of the picking season in weeks
pub fn weeks_of_harvest(crop: Crop) -> i64 {
    match crop {
        Crop::Lettuce => 8,
        Crop::Beans => 10,
        _ => 12,
    }
}

/// Validate the yield table for consistency and completeness
///
/// Returns a list of validation errors, or empty Vec if valid.
pub fn validate_yield_table() -> Vec<String> {
    let mut errors = Vec::new();

    for crop in Crop::ALL {
        let varieties = varieties_for(*crop);

        if varieties.first() != Some(&Variety::Standard) {
            errors.push(format!("Crop '{}' does not list 'standard' first", crop));
        }
        if varieties.len() != 3 {
            errors.push(format!(
                "Crop '{}' has {} varieties, expected 3",
                crop,
                varieties.len()
            ));
        }

        for variety in varieties {
            match yield_per_plant(*crop, variety) {
                Some(lbs) if lbs > 0.0 => {}
                Some(lbs) => errors.push(format!(
                    "Crop '{}' variety '{}' has non-positive yield {}",
                    crop, variety, lbs
                )),
                None => errors.push(format!(
                    "Crop '{}' variety '{}' missing from yield table",
                    crop, variety
                )),
            }
        }
    }

    if YIELD_TABLE.len() != YIELDS.iter().map(|(_, v)| v.len()).sum::<usize>() {
        errors.push("Yield table has duplicate crop/variety pairs".to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yield_table_validates() {
        let errors = validate_yield_table();
        assert!(
            errors.is_empty(),
            "Yield table has validation errors: {:?}",
            errors
        );
    }

    #[test]
    fn test_every_crop_has_varieties() {
        for crop in Crop::ALL {
            assert_eq!(varieties_for(*crop).len(), 3, "crop {}", crop);
        }
    }

    #[test]
    fn test_known_yields() {
        assert_eq!(yield_per_plant(Crop::Tomatoes, Variety::Cherry), Some(5.0));
        assert_eq!(yield_per_plant(Crop::Lettuce, Variety::Romaine), Some(1.5));
        assert_eq!(yield_per_plant(Crop::Cucumbers, Variety::Slicing), Some(7.0));
    }

    #[test]
    fn test_mismatched_variety_is_missing() {
        assert_eq!(yield_per_plant(Crop::Tomatoes, Variety::Pole), None);
        assert_eq!(yield_per_plant(Crop::Carrots, Variety::Bell), None);
    }

    #[test]
    fn test_varieties_for_peppers() {
        assert_eq!(
            varieties_for(Crop::Peppers),
            vec![Variety::Standard, Variety::Hot, Variety::Bell]
        );
    }

    #[test]
    fn test_water_tables() {
        assert_eq!(base_inches_per_week(PlantType::Lawn, Season::Summer), 1.8);
        assert_eq!(base_inches_per_week(PlantType::Herbs, Season::Winter), 0.2);
        assert_eq!(soil_multiplier(SoilType::Sand), 1.3);
        assert_eq!(soil_multiplier(SoilType::Clay), 0.8);
    }

    #[test]
    fn test_weeks_of_harvest() {
        assert_eq!(weeks_of_harvest(Crop::Lettuce), 8);
        assert_eq!(weeks_of_harvest(Crop::Beans), 10);
        assert_eq!(weeks_of_harvest(Crop::Tomatoes), 12);
        assert_eq!(weeks_of_harvest(Crop::Cucumbers), 12);
    }
}
