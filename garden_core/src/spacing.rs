//! Plant spacing: how many plants fit in a rectangular bed.

use crate::types::{round_to, SpacingInput, SpacingResult};

impl SpacingInput {
    /// Required fields that are still blank
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.length.is_none() {
            missing.push("length");
        }
        if self.width.is_none() {
            missing.push("width");
        }
        if self.plant_spacing_inches.is_none() {
            missing.push("plant_spacing_inches");
        }
        missing
    }
}

/// Lay plants out on a square grid at the given spacing
///
/// Returns `None` unless length, width, and spacing are all supplied. Spacing
/// is expected to be positive; zero spacing yields saturated counts.
pub fn compute(input: &SpacingInput) -> Option<SpacingResult> {
    let (Some(length), Some(width), Some(spacing_inches)) =
        (input.length, input.width, input.plant_spacing_inches)
    else {
        tracing::debug!("Spacing: missing {:?}", input.missing_fields());
        return None;
    };

    let area_sq_ft = length * width;
    let spacing_ft = spacing_inches / 12.0;
    let plants_per_sq_ft = 1.0 / (spacing_ft * spacing_ft);
    let total_plants = (area_sq_ft * plants_per_sq_ft).floor() as i64;
    let plants_per_row = (width / spacing_ft).floor() as i64;
    let number_of_rows = (length / spacing_ft).floor() as i64;

    tracing::debug!(
        "Spacing: {} sq ft at {:.2} ft -> {} plants ({} rows x {})",
        area_sq_ft,
        spacing_ft,
        total_plants,
        number_of_rows,
        plants_per_row
    );

    Some(SpacingResult {
        total_plants,
        area_sq_ft,
        plants_per_sq_ft: round_to(plants_per_sq_ft, 2),
        plants_per_row,
        number_of_rows,
        spacing_ft: round_to(spacing_ft, 2),
    })
}
