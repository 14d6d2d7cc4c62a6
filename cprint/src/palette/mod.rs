// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The ANSI 256-color palette: codes, their canonical RGB values, and the
//! [`PaletteTable`] used for nearest color search.

// Attach.
mod ansi_constants;
mod ansi_value;
mod palette_error;
mod palette_table;

// Re-export.
pub use ansi_constants::*;
pub use ansi_value::*;
pub use palette_error::*;
pub use palette_table::*;
