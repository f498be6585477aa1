//! Tracing setup. In the browser every formatted event is forwarded to
//! `console.log`; native builds write to stderr. Timestamps are omitted because
//! `wasm32-unknown-unknown` has no system clock.

use anyhow::Result;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

/// Parses a level name such as `debug`, falling back to `info`.
#[must_use]
pub fn level_filter(level: &str) -> LevelFilter {
    // `LevelFilter` parses an empty string as ERROR.
    match level.trim() {
        "" => LevelFilter::INFO,
        level => level.parse().unwrap_or(LevelFilter::INFO),
    }
}

/// Installs the global subscriber.
///
/// # Errors
/// Fails if a global subscriber was already set.
pub fn init(level: &str) -> Result<()> {
    let fmt_layer = fmt::layer()
        .without_time()
        .with_ansi(false)
        .with_target(false)
        .with_writer(writer());

    // RUST_LOG= (native only)
    let env_filter = EnvFilter::builder()
        .with_default_directive(level_filter(level).into())
        .from_env_lossy();

    let subscriber = Registry::default().with(fmt_layer).with(env_filter);

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn writer() -> console::MakeConsoleWriter {
    console::MakeConsoleWriter
}

#[cfg(not(target_arch = "wasm32"))]
fn writer() -> fn() -> std::io::Stderr {
    std::io::stderr
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Copy, Default)]
    pub(super) struct MakeConsoleWriter;

    /// Buffers one event and logs it as a single console line.
    pub(super) struct ConsoleWriter {
        buffer: Vec<u8>,
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            if !self.buffer.is_empty() {
                let line = String::from_utf8_lossy(&self.buffer);
                web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(line.trim_end()));
                self.buffer.clear();
            }
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            let _ = io::Write::flush(self);
        }
    }

    impl<'a> MakeWriter<'a> for MakeConsoleWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter { buffer: Vec::new() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_filter_parses_known_levels() {
        assert_eq!(level_filter("debug"), LevelFilter::DEBUG);
        assert_eq!(level_filter(" WARN "), LevelFilter::WARN);
        assert_eq!(level_filter("off"), LevelFilter::OFF);
    }

    #[test]
    fn level_filter_falls_back_to_info() {
        assert_eq!(level_filter(""), LevelFilter::INFO);
        assert_eq!(level_filter("   "), LevelFilter::INFO);
        assert_eq!(level_filter("chatty"), LevelFilter::INFO);
    }

    #[test]
    fn init_twice_reports_error() {
        // Another test may have installed a subscriber first; either way the
        // second call must fail instead of panicking.
        let _ = init("info");
        assert!(init("debug").is_err());
    }
}
