// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Nearest color search over a [`PaletteTable`].
//!
//! The 256-color palette can't represent all 16M RGB colors, so any requested color is
//! mapped to the palette entry with the smallest Euclidean distance to it. The search
//! is a linear scan in the table's insertion order, and the first entry found with the
//! smallest distance wins. For a 256 entry table there is no need for a spatial index.
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/Color_difference#Euclidean>
//! - <https://www.ditig.com/256-colors-cheat-sheet>

use super::{ColorError, ColorSpec, RgbColor};
use crate::{AnsiValue, PaletteTable};

/// Euclidean distance between two colors, treating each channel as an axis.
#[must_use]
pub fn euclidean_distance(lhs: RgbColor, rhs: RgbColor) -> f64 {
    f64::from(distance_squared(lhs, rhs)).sqrt()
}

/// Square of [`euclidean_distance`]. Monotonic with it, so comparing these gives the
/// same ordering without the `sqrt`. Max value is `3 * 255^2`, which fits in a `u32`.
#[must_use]
pub fn distance_squared(lhs: RgbColor, rhs: RgbColor) -> u32 {
    let channel = |a: u8, b: u8| {
        let diff = u32::from(a.abs_diff(b));
        diff * diff
    };
    channel(lhs.red, rhs.red) + channel(lhs.green, rhs.green) + channel(lhs.blue, rhs.blue)
}

/// Returns the code of the entry in `table` closest to `color`.
///
/// Entries are scanned in table order, and a later entry only replaces the current
/// best if it is strictly closer, so ties go to the first one seen. An empty table
/// returns code `0`.
#[must_use]
pub fn nearest_palette_code(color: RgbColor, table: &PaletteTable) -> AnsiValue {
    let mut closest_code = AnsiValue::new(0);
    let mut min_distance = u32::MAX;

    for (entry_rgb, entry_code) in table.iter() {
        let distance = distance_squared(entry_rgb, color);
        if distance < min_distance {
            min_distance = distance;
            closest_code = entry_code;
            if distance == 0 {
                break;
            }
        }
    }

    tracing::trace!(%color, code = closest_code.index, "resolved nearest palette code");
    closest_code
}

/// Validates `spec` and then finds its nearest palette code.
///
/// # Errors
///
/// Any format or range error from [`ColorSpec::try_resolve_rgb`]. No fallback color
/// is substituted.
pub fn try_resolve_palette_code(
    spec: &ColorSpec,
    table: &PaletteTable,
) -> Result<AnsiValue, ColorError> {
    let rgb = spec.try_resolve_rgb()?;
    Ok(nearest_palette_code(rgb, table))
}
