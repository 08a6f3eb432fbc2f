//! Core domain types for the garden calculators.
//!
//! This module defines:
//! - Enumerated options (plant types, seasons, soils, shapes, crops)
//! - Input records, where blank fields are `None`
//! - Result records, always fully populated

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declares a closed set of options with its wire name, parser, and default.
macro_rules! option_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($kind:literal) default $default:ident {
            $( $variant:ident => $text:literal $(| $alias:literal)* ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $text $(, alias = $alias)*)]
                $variant,
            )+
        }

        impl $name {
            /// Every option, in the order they are offered to the user
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($text $(| $alias)* => Ok($name::$variant),)+
                    _ => Err(Error::UnknownOption {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

// ============================================================================
// Options
// ============================================================================

option_enum! {
    /// Plant category on the seed calculator (does not change the formula)
    SeedPlantType("seed plant type") default Vegetables {
        Vegetables => "vegetables",
        Flowers => "flowers",
        Herbs => "herbs",
        Grass => "grass",
    }
}

option_enum! {
    /// Plant category for watering needs
    PlantType("plant type") default Vegetables {
        Vegetables => "vegetables",
        Flowers => "flowers",
        Herbs => "herbs",
        Lawn => "lawn",
    }
}

option_enum! {
    Season("season") default Spring {
        Spring => "spring",
        Summer => "summer",
        Fall => "fall" | "autumn",
        Winter => "winter",
    }
}

option_enum! {
    /// Soil texture, which scales how much water a bed needs
    SoilType("soil type") default Loam {
        Sand => "sand" | "sandy",
        Loam => "loam",
        Clay => "clay",
    }
}

option_enum! {
    /// Shape of a raised bed being filled with soil
    BedShape("bed shape") default Rectangle {
        Rectangle => "rectangle",
        Circle => "circle",
    }
}

option_enum! {
    /// Shape of a garden plot being measured
    AreaShape("area shape") default Rectangle {
        Rectangle => "rectangle",
        Circle => "circle",
        Triangle => "triangle",
    }
}

option_enum! {
    Crop("crop") default Tomatoes {
        Tomatoes => "tomatoes",
        Peppers => "peppers",
        Lettuce => "lettuce",
        Beans => "beans",
        Carrots => "carrots",
        Cucumbers => "cucumbers",
    }
}

option_enum! {
    /// Crop variety. Only some varieties belong to each crop; see
    /// [`crate::tables::varieties_for`].
    Variety("variety") default Standard {
        Standard => "standard",
        Cherry => "cherry",
        Beefsteak => "beefsteak",
        Hot => "hot",
        Bell => "bell",
        Romaine => "romaine",
        Butterhead => "butterhead",
        Pole => "pole",
        Bush => "bush",
        Baby => "baby",
        Large => "large",
        Pickling => "pickling",
        Slicing => "slicing",
    }
}

// ============================================================================
// Plant Spacing
// ============================================================================

/// Bed dimensions in feet and plant spacing in inches
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SpacingInput {
    #[serde(default)]
    pub length: Option<f64>,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub plant_spacing_inches: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpacingResult {
    pub total_plants: i64,
    pub area_sq_ft: f64,
    /// Rounded to 2 decimal places
    pub plants_per_sq_ft: f64,
    pub plants_per_row: i64,
    pub number_of_rows: i64,
    /// Rounded to 2 decimal places
    pub spacing_ft: f64,
}

// ============================================================================
// Seed Quantity
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedInput {
    #[serde(default)]
    pub area_sq_ft: Option<f64>,
    #[serde(default)]
    pub seeds_per_sq_ft: Option<f64>,
    /// Blank means [`crate::seeds::DEFAULT_GERMINATION_RATE`]
    #[serde(default)]
    pub germination_rate_percent: Option<f64>,
    #[serde(default)]
    pub plant_type: SeedPlantType,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeedResult {
    pub total_seeds: i64,
    pub seeds_needed: i64,
    pub extra_seeds: f64,
    pub germination_rate_percent: f64,
}

// ============================================================================
// Soil Volume
// ============================================================================

/// Bed dimensions. For circular beds `length` is the diameter.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SoilInput {
    #[serde(default)]
    pub length: Option<f64>,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub depth_inches: Option<f64>,
    #[serde(default)]
    pub shape: BedShape,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SoilResult {
    pub cubic_feet: f64,
    pub cubic_yards: f64,
    pub bags: i64,
}

// ============================================================================
// Watering
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WaterInput {
    #[serde(default)]
    pub area_sq_ft: Option<f64>,
    #[serde(default)]
    pub plant_type: PlantType,
    #[serde(default)]
    pub season: Season,
    #[serde(default)]
    pub soil_type: SoilType,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WaterResult {
    pub inches_per_week: f64,
    pub gallons_per_week: f64,
    pub minutes_per_week: i64,
    pub daily_minutes: i64,
}

// ============================================================================
// Garden Area
// ============================================================================

/// Plot dimensions in feet. Triangles use `length` as base and `width` as
/// height; circles use `radius`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AreaInput {
    #[serde(default)]
    pub shape: AreaShape,
    #[serde(default)]
    pub length: Option<f64>,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub radius: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AreaResult {
    pub square_feet: f64,
    pub acres: f64,
    pub perimeter: f64,
}

// ============================================================================
// Harvest
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HarvestInput {
    #[serde(default)]
    pub crop: Crop,
    #[serde(default)]
    pub variety: Variety,
    #[serde(default)]
    pub plants: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HarvestResult {
    pub total_yield_lbs: f64,
    pub weekly_yield_lbs: f64,
    pub weeks_of_harvest: i64,
    pub yield_per_plant_lbs: f64,
}

/// Round to a fixed number of decimal places
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Summer".parse::<Season>().unwrap(), Season::Summer);
        assert_eq!(" CLAY ".parse::<SoilType>().unwrap(), SoilType::Clay);
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("sandy".parse::<SoilType>().unwrap(), SoilType::Sand);
        assert_eq!("autumn".parse::<Season>().unwrap(), Season::Fall);
    }

    #[test]
    fn test_parse_unknown_option() {
        let err = "monsoon".parse::<Season>().unwrap_err();
        assert!(matches!(
            err,
            Error::UnknownOption { kind: "season", .. }
        ));
    }

    #[test]
    fn test_defaults_match_form_defaults() {
        assert_eq!(PlantType::default(), PlantType::Vegetables);
        assert_eq!(Season::default(), Season::Spring);
        assert_eq!(SoilType::default(), SoilType::Loam);
        assert_eq!(Crop::default(), Crop::Tomatoes);
        assert_eq!(Variety::default(), Variety::Standard);
        assert_eq!(AreaShape::default(), AreaShape::Rectangle);
    }

    #[test]
    fn test_display_matches_wire_name() {
        for crop in Crop::ALL {
            let json = serde_json::to_string(crop).unwrap();
            assert_eq!(json, format!("\"{}\"", crop));
        }
    }

    #[test]
    fn test_input_deserializes_with_defaults() {
        let input: WaterInput = serde_json::from_str(r#"{"area_sq_ft": 50}"#).unwrap();
        assert_eq!(input.area_sq_ft, Some(50.0));
        assert_eq!(input.plant_type, PlantType::Vegetables);
        assert_eq!(input.season, Season::Spring);
        assert_eq!(input.soil_type, SoilType::Loam);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.694444, 2), 0.69);
        assert_eq!(round_to(1.0, 2), 1.0);
    }
}
