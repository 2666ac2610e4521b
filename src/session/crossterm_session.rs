use crossterm::cursor::{MoveTo, Show};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::style::Print;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use std::io::{self, Stdout, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;

use crate::session::{KeyPress, TerminalSession};

static RESTORE_ON_PANIC: AtomicBool = AtomicBool::new(false);
static PANIC_HOOK: Once = Once::new();

/// [`TerminalSession`] backed by crossterm.
///
/// Output is held in memory until [`refresh`](TerminalSession::refresh),
/// however much is written. Raw mode turns off the terminal's newline
/// translation, so `'\n'` is written as `"\r\n"` to keep the cursor at the
/// start of the next line.
pub struct CrosstermSession<W: Write> {
    out: W,
    pending: Vec<u8>,
}

impl CrosstermSession<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> CrosstermSession<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            pending: Vec::new(),
        }
    }

    /// The underlying writer, holding only what has been flushed so far.
    pub fn sink(&self) -> &W {
        &self.out
    }
}

impl<W: Write> TerminalSession for CrosstermSession<W> {
    fn begin(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        if let Err(err) = execute!(
            self.out,
            EnterAlternateScreen,
            Clear(ClearType::All),
            MoveTo(0, 0)
        ) {
            let _ = execute!(self.out, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            return Err(err);
        }
        arm_panic_restore();
        Ok(())
    }

    fn write_str(&mut self, text: &str) -> io::Result<()> {
        let mut lines = text.split('\n');
        if let Some(first) = lines.next() {
            queue!(self.pending, Print(first))?;
        }
        for line in lines {
            queue!(self.pending, Print("\r\n"), Print(line))?;
        }
        Ok(())
    }

    fn refresh(&mut self) -> io::Result<()> {
        self.out.write_all(&self.pending)?;
        self.pending.clear();
        self.out.flush()
    }

    fn read_key(&mut self) -> io::Result<KeyPress> {
        loop {
            if let Some(key) = key_press(event::read()?) {
                return Ok(key);
            }
        }
    }

    fn end(&mut self) -> io::Result<()> {
        RESTORE_ON_PANIC.store(false, Ordering::SeqCst);
        let screen = execute!(self.out, LeaveAlternateScreen, Show);
        let mode = disable_raw_mode();
        screen.and(mode)
    }
}

/// Only key presses count; releases, repeats, resizes, focus and mouse
/// events are skipped.
fn key_press(event: Event) -> Option<KeyPress> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(KeyPress(key.code)),
        _ => None,
    }
}

/// Restore the terminal if the process panics while a session is active, so
/// the panic message lands on the normal screen in cooked mode.
fn arm_panic_restore() {
    PANIC_HOOK.call_once(|| {
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            if RESTORE_ON_PANIC.swap(false, Ordering::SeqCst) {
                let _ = disable_raw_mode();
                let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
            }
            default_hook(info);
        }));
    });
    RESTORE_ON_PANIC.store(true, Ordering::SeqCst);
}
