//! Tracing output for the hydrated client.
//!
//! Formats events with `tracing_subscriber::fmt` and hands each finished
//! line to the matching `console` method, so warnings from the session
//! layer show up in the browser's developer tools. Native builds write the
//! same lines to stderr.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Browser console method an event of a given level is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMethod {
    Error,
    Warn,
    Info,
    Log,
    Debug,
}

impl ConsoleMethod {
    /// Maps a tracing level to a console method.
    pub fn for_level(level: Level) -> Self {
        match level {
            Level::ERROR => Self::Error,
            Level::WARN => Self::Warn,
            Level::INFO => Self::Info,
            Level::DEBUG => Self::Log,
            Level::TRACE => Self::Debug,
        }
    }

    #[cfg(feature = "hydrate")]
    fn emit(self, line: &str) {
        use wasm_bindgen::JsValue;
        use web_sys::console;

        let value = JsValue::from_str(line);
        match self {
            Self::Error => console::error_1(&value),
            Self::Warn => console::warn_1(&value),
            Self::Info => console::info_1(&value),
            Self::Log => console::log_1(&value),
            Self::Debug => console::debug_1(&value),
        }
    }

    #[cfg(not(feature = "hydrate"))]
    fn emit(self, line: &str) {
        eprintln!("{line}");
    }
}

/// Creates one [`ConsoleWriter`] per event.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::Log)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::for_level(*meta.level()))
    }
}

/// Buffers one formatted event and emits it when dropped.
#[derive(Debug)]
pub struct ConsoleWriter {
    method: ConsoleMethod,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(method: ConsoleMethod) -> Self {
        Self {
            method,
            buf: Vec::new(),
        }
    }

    /// The buffered line without its trailing newline.
    fn line(&self) -> String {
        String::from_utf8_lossy(&self.buf).trim_end().to_string()
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = self.line();
        if !line.is_empty() {
            self.method.emit(&line);
        }
    }
}

/// Installs the console subscriber at `INFO`. A second call is a no-op.
pub fn init_console_tracing() {
    let installed = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .without_time()
                .with_writer(ConsoleMakeWriter),
        )
        .with(LevelFilter::INFO)
        .try_init();

    if installed.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn levels_map_to_console_methods() {
        assert_eq!(ConsoleMethod::for_level(Level::ERROR), ConsoleMethod::Error);
        assert_eq!(ConsoleMethod::for_level(Level::WARN), ConsoleMethod::Warn);
        assert_eq!(ConsoleMethod::for_level(Level::INFO), ConsoleMethod::Info);
        assert_eq!(ConsoleMethod::for_level(Level::DEBUG), ConsoleMethod::Log);
        assert_eq!(ConsoleMethod::for_level(Level::TRACE), ConsoleMethod::Debug);
    }

    #[test]
    fn writer_collects_a_whole_event() {
        let mut writer = ConsoleWriter::new(ConsoleMethod::Warn);
        write!(writer, " WARN hotel_admin_session: ").expect("write");
        writeln!(writer, "Failed to persist session").expect("write");

        assert_eq!(
            writer.line(),
            " WARN hotel_admin_session: Failed to persist session"
        );
    }

    #[test]
    fn init_twice_does_not_panic() {
        init_console_tracing();
        init_console_tracing();
        tracing::warn!("console subscriber installed");
    }
}
