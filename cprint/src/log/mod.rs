// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod tracing_config;
pub mod tracing_init;

#[cfg(test)]
pub mod log_writer_mock;

// Re-export.
pub use tracing_config::*;
pub use tracing_init::*;
