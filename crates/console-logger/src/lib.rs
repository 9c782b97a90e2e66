//! Console Logger
//!
//! `log` backend for browser apps. Records go to the matching `console.*`
//! method on wasm32 (stderr elsewhere) and the most recent lines are kept in
//! a circular buffer so they can be inspected after the fact.

use std::collections::VecDeque;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of lines retained in memory
pub const DEFAULT_CAPACITY: usize = 200;

/// Fixed-capacity FIFO; pushing onto a full buffer evicts the oldest entry.
#[derive(Debug)]
pub struct RingBuffer<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T: Clone> RingBuffer<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, entry: T) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Oldest first
    pub fn snapshot(&self) -> Vec<T> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Format a record the way it is written to the console
pub fn format_line(level: Level, target: &str, message: &str) -> String {
    format!("[{}][{}] {}", level, target, message)
}

pub struct ConsoleLogger {
    level: LevelFilter,
    buffer: Mutex<RingBuffer<String>>,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            buffer: Mutex::new(RingBuffer::new(capacity)),
        }
    }

    /// Lines currently held in the buffer, oldest first
    pub fn recent(&self) -> Vec<String> {
        match self.buffer.lock() {
            Ok(buffer) => buffer.snapshot(),
            Err(poisoned) => poisoned.into_inner().snapshot(),
        }
    }

    fn record_line(&self, line: &str) {
        let mut buffer = match self.buffer.lock() {
            Ok(buffer) => buffer,
            Err(poisoned) => poisoned.into_inner(),
        };
        buffer.push(line.to_string());
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record.level(), record.target(), &record.args().to_string());
        emit(record.level(), &line);
        self.record_line(&line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug => web_sys::console::log_1(&value),
        Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

static LOGGER: std::sync::OnceLock<ConsoleLogger> = std::sync::OnceLock::new();

/// Install the global logger. Calling it a second time returns the
/// `SetLoggerError` from the `log` crate and leaves the first logger in place.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(level, DEFAULT_CAPACITY));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Buffered lines from the global logger (empty before `init`)
pub fn recent() -> Vec<String> {
    LOGGER.get().map(ConsoleLogger::recent).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_buffer_evicts_oldest() {
        let mut buffer = RingBuffer::new(3);
        for i in 0..5 {
            buffer.push(i);
        }
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.snapshot(), vec![2, 3, 4]);
    }

    #[test]
    fn test_ring_buffer_zero_capacity() {
        let mut buffer = RingBuffer::new(0);
        buffer.push("dropped");
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_format_line() {
        assert_eq!(
            format_line(Level::Warn, "invite::dom", "element #gallery not found"),
            "[WARN][invite::dom] element #gallery not found"
        );
    }

    #[test]
    fn test_logger_filters_and_buffers() {
        let logger = ConsoleLogger::new(LevelFilter::Info, 2);
        logger.log(
            &Record::builder()
                .level(Level::Debug)
                .target("t")
                .args(format_args!("hidden"))
                .build(),
        );
        assert!(logger.recent().is_empty());

        for msg in ["one", "two", "three"] {
            logger.log(
                &Record::builder()
                    .level(Level::Info)
                    .target("t")
                    .args(format_args!("{}", msg))
                    .build(),
            );
        }
        assert_eq!(logger.recent(), vec!["[INFO][t] two", "[INFO][t] three"]);
    }
}
