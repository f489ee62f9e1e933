//! Browser console output for the `fmt` subscriber.
//!
//! Each event is formatted into a [`ConsoleWriter`] and emitted as one
//! console call when the writer is dropped. The console method follows the
//! event level so devtools filtering works.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMethod {
    Error,
    Warn,
    Info,
    Debug,
}

impl ConsoleMethod {
    pub fn for_level(level: &Level) -> Self {
        match *level {
            Level::ERROR => ConsoleMethod::Error,
            Level::WARN => ConsoleMethod::Warn,
            Level::INFO => ConsoleMethod::Info,
            Level::DEBUG | Level::TRACE => ConsoleMethod::Debug,
        }
    }
}

/// Buffers one formatted event.
#[derive(Debug)]
pub struct ConsoleWriter {
    method: ConsoleMethod,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    pub fn new(method: ConsoleMethod) -> Self {
        Self {
            method,
            buf: Vec::new(),
        }
    }

    pub fn method(&self) -> ConsoleMethod {
        self.method
    }

    /// Drain the buffered line without its trailing newline.
    pub fn take_line(&mut self) -> Option<String> {
        let line = String::from_utf8_lossy(&self.buf).trim_end().to_string();
        self.buf.clear();
        (!line.is_empty()).then_some(line)
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        use wasm_bindgen::JsValue;
        use web_sys::console;

        let Some(line) = self.take_line() else {
            return;
        };
        let line = JsValue::from_str(&line);
        match self.method {
            ConsoleMethod::Error => console::error_1(&line),
            ConsoleMethod::Warn => console::warn_1(&line),
            ConsoleMethod::Info => console::info_1(&line),
            ConsoleMethod::Debug => console::debug_1(&line),
        }
    }
}

/// [`MakeWriter`] handing out one [`ConsoleWriter`] per event.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::Info)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::for_level(meta.level()))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn levels_map_to_console_methods() {
        assert_eq!(ConsoleMethod::for_level(&Level::ERROR), ConsoleMethod::Error);
        assert_eq!(ConsoleMethod::for_level(&Level::WARN), ConsoleMethod::Warn);
        assert_eq!(ConsoleMethod::for_level(&Level::INFO), ConsoleMethod::Info);
        assert_eq!(ConsoleMethod::for_level(&Level::TRACE), ConsoleMethod::Debug);
    }

    #[test]
    fn writes_are_joined_into_one_line() {
        let mut writer = ConsoleMakeWriter.make_writer();
        write!(writer, " INFO landing dispatch").unwrap();
        writeln!(writer, " route=/").unwrap();

        assert_eq!(writer.method(), ConsoleMethod::Info);
        assert_eq!(
            writer.take_line().as_deref(),
            Some(" INFO landing dispatch route=/")
        );
        assert_eq!(writer.take_line(), None);
    }

    #[test]
    fn events_reach_the_console_writer() {
        use std::sync::{Arc, Mutex};

        // Same layer setup as the browser build, with the lines captured.
        #[derive(Clone, Default)]
        struct Capture(Arc<Mutex<Vec<(ConsoleMethod, String)>>>);

        struct CaptureWriter(ConsoleWriter, Capture);

        impl io::Write for CaptureWriter {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.write(buf)
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        impl Drop for CaptureWriter {
            fn drop(&mut self) {
                if let Some(line) = self.0.take_line() {
                    self.1.0.lock().unwrap().push((self.0.method(), line));
                }
            }
        }

        impl<'a> MakeWriter<'a> for Capture {
            type Writer = CaptureWriter;
            fn make_writer(&'a self) -> CaptureWriter {
                CaptureWriter(ConsoleMakeWriter.make_writer(), self.clone())
            }
            fn make_writer_for(&'a self, meta: &Metadata<'_>) -> CaptureWriter {
                CaptureWriter(ConsoleMakeWriter.make_writer_for(meta), self.clone())
            }
        }

        let capture = Capture::default();
        let subscriber = tracing_subscriber::fmt()
            .without_time()
            .with_ansi(false)
            .with_target(false)
            .with_writer(capture.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(status = 500, "registration rejected by server");
            tracing::info!("registration succeeded");
        });

        let lines = capture.0.lock().unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].0, ConsoleMethod::Warn);
        assert!(lines[0].1.contains("registration rejected by server"));
        assert!(lines[0].1.contains("status=500"));
        assert_eq!(lines[1].0, ConsoleMethod::Info);
    }
}
