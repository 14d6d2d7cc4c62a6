// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

/// Configure the tracing logging to suit your needs. Logs are always written to
/// `stderr`, since `stdout` carries the styled output.
///
/// You can use [`crate::init_tracing()`] to initialize the tracing system with this
/// configuration.
///
/// Fields:
/// - `scope`: [`TracingScope`] - global for apps, thread local for tests.
/// - `level`: [`tracing::Level`] - The log level to use for tracing.
#[derive(Debug, Clone, Copy)]
pub struct TracingConfig {
    pub scope: TracingScope,
    pub level: tracing::Level,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracingScope {
    Global,
    ThreadLocal,
}

impl TracingConfig {
    /// Global `DEBUG` logging to `stderr`.
    #[must_use]
    pub fn new_stderr() -> Self {
        Self {
            scope: TracingScope::Global,
            level: tracing::Level::DEBUG,
        }
    }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { LevelFilter::from_level(self.level) }
}
