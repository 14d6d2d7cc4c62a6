// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::str::FromStr;

use super::{ColorError, RgbColor, hex_to_rgb, validate_rgb};

/// A color as the user typed it. Both forms have to be converted into a canonical
/// [`RgbColor`] (using [`ColorSpec::try_resolve_rgb`]) before anything else looks at
/// them.
///
/// # Example usage:
///
/// ```rust
/// use cprint256::{ColorSpec, RgbColor};
///
/// let from_hex = ColorSpec::from("#33DD44");
/// let from_triple = ColorSpec::from((51, 221, 68));
/// assert_eq!(from_hex.try_resolve_rgb(), from_triple.try_resolve_rgb());
///
/// let parsed: ColorSpec = "51, 221, 68".parse().unwrap();
/// assert_eq!(parsed.try_resolve_rgb(), Ok(RgbColor::from_u8(51, 221, 68)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorSpec {
    /// `#RRGGBB` or `RRGGBB`, validated lazily.
    Hex(String),
    /// Raw integer components, validated lazily.
    Rgb(i32, i32, i32),
}

impl ColorSpec {
    /// # Errors
    ///
    /// - Format errors from [`hex_to_rgb`] for [`ColorSpec::Hex`].
    /// - Range errors from [`validate_rgb`] for [`ColorSpec::Rgb`].
    pub fn try_resolve_rgb(&self) -> Result<RgbColor, ColorError> {
        match self {
            ColorSpec::Hex(hex) => hex_to_rgb(hex),
            ColorSpec::Rgb(red, green, blue) => validate_rgb(*red, *green, *blue),
        }
    }
}

impl From<&str> for ColorSpec {
    fn from(hex: &str) -> Self { ColorSpec::Hex(hex.to_string()) }
}

impl From<String> for ColorSpec {
    fn from(hex: String) -> Self { ColorSpec::Hex(hex) }
}

impl From<(i32, i32, i32)> for ColorSpec {
    fn from((red, green, blue): (i32, i32, i32)) -> Self { ColorSpec::Rgb(red, green, blue) }
}

impl From<RgbColor> for ColorSpec {
    fn from(color: RgbColor) -> Self {
        ColorSpec::Rgb(color.red.into(), color.green.into(), color.blue.into())
    }
}

/// Parses either `r,g,b` (whitespace around components is allowed) or a hex string.
/// Only the shape is checked here. Ranges and hex digits are checked by
/// [`ColorSpec::try_resolve_rgb`].
impl FromStr for ColorSpec {
    type Err = ColorError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        if !input.contains(',') {
            return Ok(ColorSpec::Hex(input.to_string()));
        }

        let invalid = || ColorError::InvalidRgbTriple {
            input: input.to_string(),
        };
        let components = input
            .split(',')
            .map(|it| it.trim().parse::<i32>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>, _>>()?;

        match components.as_slice() {
            [red, green, blue] => Ok(ColorSpec::Rgb(*red, *green, *blue)),
            _ => Err(invalid()),
        }
    }
}
