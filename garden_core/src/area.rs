//! Garden area and perimeter for simple plot shapes.
//!
//! Triangles take `length` as the base and `width` as the height. Their
//! perimeter needs all three sides, so it is always reported as zero.
//! Blank dimensions for the chosen shape give a zero area, never `None`.

use crate::types::{AreaInput, AreaResult, AreaShape};
use std::f64::consts::PI;

pub const SQ_FT_PER_ACRE: f64 = 43_560.0;

impl AreaInput {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        match self.shape {
            AreaShape::Rectangle | AreaShape::Triangle => {
                if self.length.is_none() {
                    missing.push("length");
                }
                if self.width.is_none() {
                    missing.push("width");
                }
            }
            AreaShape::Circle => {
                if self.radius.is_none() {
                    missing.push("radius");
                }
            }
        }
        missing
    }
}

pub fn compute(input: &AreaInput) -> Option<AreaResult> {
    let (square_feet, perimeter) = match (input.shape, input.length, input.width, input.radius) {
        (AreaShape::Rectangle, Some(length), Some(width), _) => {
            (length * width, 2.0 * (length + width))
        }
        (AreaShape::Circle, _, _, Some(radius)) => (PI * radius * radius, 2.0 * PI * radius),
        (AreaShape::Triangle, Some(base), Some(height), _) => (0.5 * base * height, 0.0),
        _ => {
            tracing::debug!(
                "Area: {} missing {:?}, area is zero",
                input.shape,
                input.missing_fields()
            );
            (0.0, 0.0)
        }
    };

    let acres = square_feet / SQ_FT_PER_ACRE;

    tracing::debug!(
        "Area: {} {:.2} sq ft, {:.4} acres, {:.2} ft perimeter",
        input.shape,
        square_feet,
        acres,
        perimeter
    );

    Some(AreaResult {
        square_feet,
        acres,
        perimeter,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(shape: AreaShape, length: f64, width: f64, radius: f64) -> AreaInput {
        AreaInput {
            shape,
            length: Some(length),
            width: Some(width),
            radius: Some(radius),
        }
    }

    #[test]
    fn test_circle() {
        let result = compute(&AreaInput {
            shape: AreaShape::Circle,
            length: None,
            width: None,
            radius: Some(5.0),
        })
        .unwrap();
        assert!((result.square_feet - 78.5398).abs() < 1e-4);
        assert!((result.acres - 0.0018).abs() < 5e-5);
        assert!((result.perimeter - 31.4159).abs() < 1e-4);
    }

    #[test]
    fn test_rectangle() {
        let result = compute(&shape(AreaShape::Rectangle, 20.0, 10.0, 99.0)).unwrap();
        assert_eq!(result.square_feet, 200.0);
        assert_eq!(result.perimeter, 60.0);
    }

    #[test]
    fn test_triangle_has_no_perimeter() {
        let result = compute(&shape(AreaShape::Triangle, 12.0, 5.0, 99.0)).unwrap();
        assert_eq!(result.square_feet, 30.0);
        assert_eq!(result.perimeter, 0.0);
    }

    #[test]
    fn test_acres_is_square_feet_over_43560() {
        for kind in AreaShape::ALL {
            for size in [1.0, 3.3, 208.71, 1000.0] {
                let result = compute(&shape(*kind, size, size * 2.0, size)).unwrap();
                assert_eq!(result.acres, result.square_feet / 43_560.0);
            }
        }
    }

    #[test]
    fn test_one_acre() {
        let result = compute(&shape(AreaShape::Rectangle, 43_560.0, 1.0, 0.0)).unwrap();
        assert_eq!(result.acres, 1.0);
    }

    #[test]
    fn test_blank_dimensions_give_zero() {
        let input = AreaInput {
            shape: AreaShape::Circle,
            length: Some(10.0),
            width: Some(10.0),
            radius: None,
        };
        let result = compute(&input).unwrap();
        assert_eq!(result.square_feet, 0.0);
        assert_eq!(result.acres, 0.0);
        assert_eq!(result.perimeter, 0.0);
        assert_eq!(input.missing_fields(), vec!["radius"]);

        let blank = AreaInput::default();
        assert_eq!(compute(&blank).unwrap().square_feet, 0.0);
        assert_eq!(blank.missing_fields(), vec!["length", "width"]);
    }
}
