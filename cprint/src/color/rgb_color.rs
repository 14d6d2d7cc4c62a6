// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGB (8 bits per channel) color representation, and validation of raw integer
//! triples into it.

use std::fmt::{Display, Formatter, Result};

use super::ColorError;

/// A color with each channel in `0..=255`. Values of this type are always valid, so
/// anything that comes from raw integers has to go through [`validate_rgb`] first.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug)]
pub struct RgbColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl RgbColor {
    #[must_use]
    pub const fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }

    /// Canonical `#RRGGBB` form, upper case digits.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

/// `0xRRGGBB` packed form, which is how the palette constants are stored.
impl From<u32> for RgbColor {
    fn from(value: u32) -> Self {
        let [_, red, green, blue] = value.to_be_bytes();
        Self { red, green, blue }
    }
}

impl TryFrom<(i32, i32, i32)> for RgbColor {
    type Error = ColorError;

    fn try_from((red, green, blue): (i32, i32, i32)) -> std::result::Result<Self, Self::Error> {
        validate_rgb(red, green, blue)
    }
}

impl Display for RgbColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "({}, {}, {})", self.red, self.green, self.blue)
    }
}

/// Checks that every component is in `0..=255` and returns the [`RgbColor`].
///
/// # Errors
///
/// Returns [`ColorError::ComponentOutOfRange`] naming the first channel (in red,
/// green, blue order) that is out of range. Nothing is clamped.
pub fn validate_rgb(red: i32, green: i32, blue: i32) -> std::result::Result<RgbColor, ColorError> {
    let channel = |channel: &'static str, value: i32| {
        u8::try_from(value).map_err(|_| ColorError::ComponentOutOfRange { channel, value })
    };
    Ok(RgbColor {
        red: channel("red", red)?,
        green: channel("green", green)?,
        blue: channel("blue", blue)?,
    })
}
