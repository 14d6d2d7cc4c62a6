// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # cprint256
//!
//! Print text to the terminal in any RGB or hex color, bold or not, using the ANSI 256
//! (8-bit) color palette. Since the palette can't represent arbitrary RGB values, each
//! requested color is mapped to the closest palette entry by Euclidean distance.
//!
//! The pieces, bottom up:
//! 1. [`PaletteTable`] - the 256 palette codes and their canonical RGB values. The
//!    built-in xterm table is available via [`global_palette`]; a table can also be
//!    loaded explicitly from a JSON resource with [`PaletteTable::try_load_from_file`].
//! 2. Color resolution - [`hex_to_rgb`], [`validate_rgb`], [`nearest_palette_code`].
//!    User input comes in as a [`ColorSpec`] (hex string or integer triple), and is
//!    always validated into an [`RgbColor`] before any search runs.
//! 3. Style composition - a [`StyleRequest`] resolves into a [`ResolvedStyle`], which
//!    [`compose`] (or [`StyledText`]) wraps around the text as [`SgrCode`]s followed by
//!    a single reset.
//! 4. Output - [`cprint`] and [`cprint_to`] write a composed line to a stream.
//!
//! # Example usage:
//!
//! ```rust
//! use cprint256::{CprintOptions, StyleRequest, compose, cprint_to, global_palette};
//!
//! // Compose a string.
//! let request = StyleRequest::default().fg("#33DD44").bg("#EE4488").bold(true);
//! let it = compose(&["Green text", "bold pink background"], " ", &request, global_palette())
//!     .unwrap();
//! assert_eq!(it, "\x1b[1;38;5;77m\x1b[48;5;204mGreen text bold pink background\x1b[0m");
//!
//! // Unstyled calls are passed through untouched.
//! let it = compose(&["plain"], " ", &StyleRequest::default(), global_palette()).unwrap();
//! assert_eq!(it, "plain");
//!
//! // Write a line to any `std::io::Write`.
//! let mut buf = Vec::new();
//! cprint_to(
//!     &mut buf,
//!     &["hello"],
//!     &StyleRequest::default().bold(true),
//!     &CprintOptions::default(),
//!     global_palette(),
//! )
//! .unwrap();
//! assert_eq!(buf, b"\x1b[1mhello\x1b[0m\n");
//! ```
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>
//! - <https://www.ditig.com/256-colors-cheat-sheet>

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod color;
pub mod log;
pub mod output;
pub mod palette;
pub mod style;

// Re-export.
pub use color::*;
pub use log::*;
pub use output::*;
pub use palette::*;
pub use style::*;
