// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io::{Result, Write},
          sync::{Arc, Mutex}};

use tracing::{dispatcher::DefaultGuard, subscriber::set_default};
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt};

use crate::create_fmt;

/// Captures formatted log lines in memory. You can safely clone this struct, since it
/// only contains an `Arc<Mutex<Vec<u8>>>`; clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct LogWriterMock {
    pub buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogWriterMock {
    /// Installs a thread local subscriber that logs every level into a new mock, using
    /// the same `fmt` layer as [`crate::init_tracing`] minus the ANSI styling. Drop the
    /// guard to uninstall it.
    pub fn install() -> (Self, DefaultGuard) {
        let mock = Self::default();
        let layer = create_fmt!()
            .with_ansi(false)
            .with_writer(Mutex::new(mock.clone()))
            .with_filter(LevelFilter::TRACE);
        let guard = set_default(tracing_subscriber::registry().with(layer));
        (mock, guard)
    }

    pub fn get_copy_of_buffer_as_string(&self) -> String {
        let buffer_data = self.buffer.lock().unwrap();
        String::from_utf8(buffer_data.clone()).unwrap()
    }
}

impl Write for LogWriterMock {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<()> { Ok(()) }
}
