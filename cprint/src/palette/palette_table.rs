// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The table that nearest color search runs against.
//!
//! A [`PaletteTable`] is keyed by [`RgbColor`] and remembers insertion order. When an
//! RGB value is inserted a second time, the entry keeps its first position and takes
//! the later code. The xterm palette has a few such duplicates, eg: code 0 and code 16
//! are both black, so the built-in table maps black to 16.
//!
//! Tables are built once, explicitly, and never mutated afterwards:
//! - [`PaletteTable::xterm_256`] / [`global_palette`] for the built-in palette.
//! - [`PaletteTable::try_from_json_str`] / [`PaletteTable::try_load_from_file`] for a
//!   persisted resource.

use std::{path::Path, sync::LazyLock};

use ordermap::OrderMap;

use super::{AnsiValue, PaletteLoadError, ansi_constants::ANSI_COLOR_PALETTE};
use crate::RgbColor;

/// Number of entries a complete 256-color palette resource has before duplicate RGB
/// values are merged.
pub const PALETTE_SIZE: usize = 256;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaletteTable {
    entries: OrderMap<RgbColor, AnsiValue>,
}

static XTERM_PALETTE: LazyLock<PaletteTable> = LazyLock::new(PaletteTable::xterm_256);

/// The built-in xterm palette, built on first use and shared by all threads.
#[must_use]
pub fn global_palette() -> &'static PaletteTable { &XTERM_PALETTE }

impl PaletteTable {
    /// Builds the table from [`ANSI_COLOR_PALETTE`], inserting codes 0 to 255 in order.
    #[must_use]
    pub fn xterm_256() -> Self {
        let it = Self::from_entries((0..=u8::MAX).map(|index| {
            let code = AnsiValue::new(index);
            (code.as_rgb(), code)
        }));
        tracing::debug!(
            entries = it.len(),
            codes = ANSI_COLOR_PALETTE.len(),
            "built xterm palette table"
        );
        it
    }

    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = (RgbColor, AnsiValue)>) -> Self {
        let mut map = OrderMap::with_capacity(PALETTE_SIZE);
        for (rgb, code) in entries {
            map.insert(rgb, code);
        }
        Self { entries: map }
    }

    /// Parses a JSON object whose keys are `"r,g,b"` strings and values are palette
    /// codes, eg: `{"0,0,0": 16, "255,0,0": 196}`. Document order is kept, since it
    /// decides which entry wins a tie during nearest color search.
    ///
    /// # Errors
    ///
    /// - [`PaletteLoadError::Json`] if the input is not such an object.
    /// - [`PaletteLoadError::InvalidKey`] or [`PaletteLoadError::InvalidCode`] for an
    ///   entry with a malformed key or a code outside 0-255.
    /// - [`PaletteLoadError::Empty`] if there are no entries.
    pub fn try_from_json_str(json: &str) -> Result<Self, PaletteLoadError> {
        let raw: OrderMap<String, i64> =
            serde_json::from_str(json).map_err(PaletteLoadError::Json)?;

        if raw.is_empty() {
            return Err(PaletteLoadError::Empty);
        }

        let mut entries = Vec::with_capacity(raw.len());
        for (key, code) in raw {
            let rgb = parse_rgb_key(&key)?;
            let Ok(index) = u8::try_from(code) else {
                return Err(PaletteLoadError::InvalidCode { key, code });
            };
            entries.push((rgb, AnsiValue::new(index)));
        }

        // Repeated keys collapse while parsing, so a complete resource has as many
        // distinct colors as the built-in table.
        let it = Self::from_entries(entries);
        let expected = global_palette().len();
        if it.len() != expected {
            tracing::warn!(
                entries = it.len(),
                expected,
                "palette resource does not have the usual number of distinct colors"
            );
        }
        tracing::debug!(entries = it.len(), "loaded palette table");
        Ok(it)
    }

    /// Reads the file at `path` and parses it with [`Self::try_from_json_str`].
    ///
    /// # Errors
    ///
    /// [`PaletteLoadError::Io`] if the file can't be read, otherwise the same errors as
    /// [`Self::try_from_json_str`].
    pub fn try_load_from_file(path: impl AsRef<Path>) -> Result<Self, PaletteLoadError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| PaletteLoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::try_from_json_str(&json)
    }

    #[must_use]
    pub fn len(&self) -> usize { self.entries.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (RgbColor, AnsiValue)> {
        self.entries.iter().map(|(rgb, code)| (*rgb, *code))
    }

    /// Exact lookup, no nearest color search.
    #[must_use]
    pub fn code_of(&self, rgb: RgbColor) -> Option<AnsiValue> {
        self.entries.get(&rgb).copied()
    }
}

/// `"r,g,b"` with each value in 0-255. Whitespace around values is ignored.
fn parse_rgb_key(key: &str) -> Result<RgbColor, PaletteLoadError> {
    let invalid = || PaletteLoadError::InvalidKey {
        key: key.to_string(),
    };
    let mut values = key.split(',').map(|it| it.trim().parse::<u8>());
    match (values.next(), values.next(), values.next(), values.next()) {
        (Some(Ok(red)), Some(Ok(green)), Some(Ok(blue)), None) => {
            Ok(RgbColor { red, green, blue })
        }
        _ => Err(invalid()),
    }
}
