// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # [`init_tracing`]
//!
//! This is a convenience method to setup Tokio [`tracing_subscriber`] with `stderr` as
//! the output destination. The library itself only emits events; nothing is
//! printed unless the binary (or a test) calls [`init_tracing`].

use tracing::dispatcher;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer,
                         layer::SubscriberExt,
                         registry::LookupSpan,
                         util::SubscriberInitExt};

use super::{TracingConfig, TracingScope};

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer. Note that
/// [`tracing_subscriber::fmt::format::Pretty`] and
/// [`tracing_subscriber::fmt::format::Compact`] are mutually exclusive.
#[macro_export]
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .without_time()
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
            .with_ansi(true)
    };
}

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Simply initialize the tracing system with the provided [`TracingConfig`]. This will
/// set either (depending on its [`TracingScope`]):
/// 1. Global default subscriber, which once set, can't be unset or changed.
///    - This is great for apps.
/// 2. Thread local subscriber, which is thread local, and you can assign different ones
///    to different threads.
///    - This is great for tests.
///
/// # Return
/// 1. If you set the [`TracingScope`] to [`TracingScope::ThreadLocal`], then this
///    function will return a [`dispatcher::DefaultGuard`]. You should drop this guard
///    when you're done with the tracing system.
/// 2. If you set the [`TracingScope`] to [`TracingScope::Global`], then this function
///    will return [`None`].
///
/// # Errors
///
/// If the global default subscriber has already been set.
pub fn init_tracing(
    tracing_config: TracingConfig,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let layers = create_layers(tracing_config);
    match tracing_config.scope {
        TracingScope::Global => {
            tracing_subscriber::registry()
                .with(layers)
                .try_init()
                .map_err(|err| miette::miette!("Could not set global subscriber: {err}"))?;
            Ok(None)
        }
        TracingScope::ThreadLocal => {
            Ok(Some(tracing_subscriber::registry().with(layers).set_default()))
        }
    }
}

/// Returns the layers. This does not initialize the tracing system.
#[must_use]
pub fn create_layers(
    tracing_config: TracingConfig,
) -> Vec<Box<DynLayer<tracing_subscriber::Registry>>> {
    let level_filter = tracing_config.get_level_filter();
    vec![
        Box::new(level_filter),
        create_display_layer(level_filter),
    ]
}

/// This erases the concrete type of the layer, and returns a boxed layer that writes to
/// `stderr`.
///
/// More info in the docs
/// [here](https://docs.rs/tracing-subscriber/latest/tracing_subscriber/layer/index.html#runtime-configuration-with-layers).
pub fn create_display_layer<S>(level_filter: LevelFilter) -> Box<DynLayer<S>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    Box::new(
        create_fmt!()
            .with_writer(std::io::stderr)
            .with_filter(level_filter),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PaletteTable, RgbColor, global_palette, log::log_writer_mock::LogWriterMock,
                nearest_palette_code};

    #[test]
    fn test_thread_local_init() {
        let config = TracingConfig {
            scope: TracingScope::ThreadLocal,
            level: tracing::Level::TRACE,
        };
        let guard = init_tracing(config).unwrap();
        assert!(guard.is_some());
        drop(guard);
    }

    #[test]
    fn test_level_filter() {
        let config = TracingConfig::new_stderr();
        assert_eq!(config.get_level_filter(), LevelFilter::DEBUG);
        assert_eq!(create_layers(config).len(), 2);
    }

    #[test]
    fn test_palette_build_emits_debug_event() {
        let (mock, guard) = LogWriterMock::install();
        let table = PaletteTable::xterm_256();
        drop(guard);

        let it = mock.get_copy_of_buffer_as_string();
        assert!(it.contains("DEBUG"));
        assert!(it.contains("built xterm palette table"));
        assert!(it.contains(&format!("entries={}", table.len())));
    }

    #[test]
    fn test_nearest_search_emits_trace_event() {
        let table = global_palette();
        let (mock, guard) = LogWriterMock::install();
        let code = nearest_palette_code(RgbColor::from_u8(255, 128, 0), table);
        drop(guard);

        let it = mock.get_copy_of_buffer_as_string();
        assert!(it.contains("TRACE"));
        assert!(it.contains("resolved nearest palette code"));
        assert!(it.contains(&format!("code={}", code.index)));
    }
}
