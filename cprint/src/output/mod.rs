// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
mod cprint_impl;

// Re-export.
pub use cprint_impl::*;
