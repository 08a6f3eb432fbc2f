//! Weekly watering schedule.

use crate::tables::{base_inches_per_week, soil_multiplier};
use crate::types::{WaterInput, WaterResult};

/// Gallons that cover one square foot to a depth of one inch
pub const GALLONS_PER_SQ_FT_INCH: f64 = 0.623;

/// Assumed sprinkler delivery rate
pub const GALLONS_PER_MINUTE: f64 = 2.0;

impl WaterInput {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        if self.area_sq_ft.is_none() {
            vec!["area_sq_ft"]
        } else {
            Vec::new()
        }
    }
}

/// Water depth, volume, and sprinkler run time for one week
pub fn compute(input: &WaterInput) -> Option<WaterResult> {
    let Some(area) = input.area_sq_ft else {
        tracing::debug!("Watering: missing area");
        return None;
    };

    let inches_per_week =
        base_inches_per_week(input.plant_type, input.season) * soil_multiplier(input.soil_type);
    let gallons_per_week = area * inches_per_week * GALLONS_PER_SQ_FT_INCH;
    let minutes_per_week = (gallons_per_week / GALLONS_PER_MINUTE).ceil() as i64;
    let daily_minutes = (minutes_per_week as f64 / 7.0).ceil() as i64;

    tracing::debug!(
        "Watering {} in {} on {}: {:.2} in/week, {:.1} gal, {} min",
        input.plant_type,
        input.season,
        input.soil_type,
        inches_per_week,
        gallons_per_week,
        minutes_per_week
    );

    Some(WaterResult {
        inches_per_week,
        gallons_per_week,
        minutes_per_week,
        daily_minutes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PlantType, Season, SoilType};

    fn input(area: f64, plant_type: PlantType, season: Season, soil_type: SoilType) -> WaterInput {
        WaterInput {
            area_sq_ft: Some(area),
            plant_type,
            season,
            soil_type,
        }
    }

    #[test]
    fn test_summer_vegetables_on_loam() {
        let result = compute(&input(
            100.0,
            PlantType::Vegetables,
            Season::Summer,
            SoilType::Loam,
        ))
        .unwrap();
        assert_eq!(result.inches_per_week, 1.5);
        assert!((result.gallons_per_week - 93.45).abs() < 1e-9);
        assert_eq!(result.minutes_per_week, 47);
        assert_eq!(result.daily_minutes, 7);
    }

    #[test]
    fn test_sand_needs_more_water() {
        let sand = compute(&input(100.0, PlantType::Lawn, Season::Spring, SoilType::Sand)).unwrap();
        let clay = compute(&input(100.0, PlantType::Lawn, Season::Spring, SoilType::Clay)).unwrap();
        assert!((sand.inches_per_week - 1.56).abs() < 1e-9);
        assert!((clay.inches_per_week - 0.96).abs() < 1e-9);
        assert!(sand.gallons_per_week > clay.gallons_per_week);
    }

    #[test]
    fn test_daily_minutes_is_weekly_over_seven() {
        for plant_type in PlantType::ALL {
            for season in Season::ALL {
                for soil_type in SoilType::ALL {
                    for area in [1.0, 37.5, 100.0, 2400.0] {
                        let result =
                            compute(&input(area, *plant_type, *season, *soil_type)).unwrap();
                        let expected = (result.minutes_per_week as f64 / 7.0).ceil() as i64;
                        assert_eq!(result.daily_minutes, expected);
                        assert!(result.minutes_per_week >= 1);
                    }
                }
            }
        }
    }

    #[test]
    fn test_missing_area() {
        let blank = WaterInput::default();
        assert!(compute(&blank).is_none());
        assert_eq!(blank.missing_fields(), vec!["area_sq_ft"]);
    }
}
