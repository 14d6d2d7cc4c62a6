// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module contains a parser that turns a hex color string into a [`RgbColor`].
//! The hex color string can be in the following formats: `#RRGGBB` or `RRGGBB`, eg:
//! `#FF0000` or `ff0000` for red.

use nom::{IResult,
          Parser,
          bytes::complete::take_while_m_n,
          combinator::{all_consuming, map_res}};

use super::{ColorError, RgbColor};

const HEX_DIGIT_COUNT: usize = 6;

/// Converts a hex color string into a [`RgbColor`].
///
/// A single leading `#` is optional. The remaining characters must be exactly 6 hex
/// digits (either case).
///
/// # Errors
///
/// - [`ColorError::InvalidHexLength`] if there aren't exactly 6 characters after the
///   optional `#`.
/// - [`ColorError::InvalidHexDigit`] if any 2 character group isn't a hex number.
pub fn hex_to_rgb(input: &str) -> Result<RgbColor, ColorError> {
    let digits = input.strip_prefix('#').unwrap_or(input);

    let len = digits.chars().count();
    if len != HEX_DIGIT_COUNT {
        return Err(ColorError::InvalidHexLength {
            input: input.to_string(),
            len,
        });
    }

    match parse_hex_digits(digits) {
        Ok((_, color)) => Ok(color),
        Err(_) => Err(ColorError::InvalidHexDigit {
            input: input.to_string(),
        }),
    }
}

/// Parse function that generates an [`RgbColor`] from exactly 3 hex digit pairs, with
/// no `#` prefix and nothing left over.
pub fn parse_hex_digits(input: &str) -> IResult<&str, RgbColor> {
    let (input, (red, green, blue)) =
        all_consuming((parse_hex_seg, parse_hex_seg, parse_hex_seg)).parse(input)?;
    Ok((input, RgbColor { red, green, blue }))
}

/// Parses one 2 character hex segment into a byte.
fn parse_hex_seg(input: &str) -> IResult<&str, u8> {
    map_res(
        take_while_m_n(2, 2, |it: char| it.is_ascii_hexdigit()),
        |it: &str| u8::from_str_radix(it, 16),
    )
    .parse(input)
}
