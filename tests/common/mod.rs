//! Shared test utilities: a terminal session that records every call.

#![allow(dead_code)]

use crossterm::event::KeyCode;
use greeter::session::{KeyPress, TerminalSession};
use parking_lot::Mutex;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// One operation observed on the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Begin,
    Write(String),
    Refresh,
    ReadKey,
    End,
}

/// Operations that can be made to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Begin,
    Write,
    Refresh,
    ReadKey,
    End,
}

pub type CallLog = Arc<Mutex<Vec<Call>>>;

/// A session that logs calls instead of touching a terminal.
pub struct RecordingSession {
    calls: CallLog,
    fail_on: Option<Op>,
    panic_on_read: bool,
    key: KeyCode,
}

impl RecordingSession {
    pub fn new() -> (Self, CallLog) {
        let calls = CallLog::default();
        let session = Self {
            calls: Arc::clone(&calls),
            fail_on: None,
            panic_on_read: false,
            key: KeyCode::Char('x'),
        };
        (session, calls)
    }

    pub fn failing_on(op: Op) -> (Self, CallLog) {
        let (mut session, calls) = Self::new();
        session.fail_on = Some(op);
        (session, calls)
    }

    pub fn panicking_on_read() -> (Self, CallLog) {
        let (mut session, calls) = Self::new();
        session.panic_on_read = true;
        (session, calls)
    }

    pub fn with_key(mut self, key: KeyCode) -> Self {
        self.key = key;
        self
    }

    fn record(&self, call: Call, op: Op) -> io::Result<()> {
        self.calls.lock().push(call);
        if self.fail_on == Some(op) {
            return Err(io::Error::other(format!("{:?} failed", op)));
        }
        Ok(())
    }
}

impl TerminalSession for RecordingSession {
    fn begin(&mut self) -> io::Result<()> {
        self.record(Call::Begin, Op::Begin)
    }

    fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.record(Call::Write(text.to_string()), Op::Write)
    }

    fn refresh(&mut self) -> io::Result<()> {
        self.record(Call::Refresh, Op::Refresh)
    }

    fn read_key(&mut self) -> io::Result<KeyPress> {
        self.record(Call::ReadKey, Op::ReadKey)?;
        if self.panic_on_read {
            panic!("input device vanished");
        }
        Ok(KeyPress(self.key))
    }

    fn end(&mut self) -> io::Result<()> {
        self.record(Call::End, Op::End)
    }
}

/// Concatenation of everything written, in order.
pub fn written_text(calls: &[Call]) -> String {
    calls
        .iter()
        .filter_map(|call| match call {
            Call::Write(text) => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

pub fn count(calls: &[Call], wanted: &Call) -> usize {
    calls.iter().filter(|call| *call == wanted).count()
}

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
