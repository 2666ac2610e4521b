//! Terminal session abstraction used by the greeter.
//!
//! The greeter only needs five operations from a terminal library: begin a
//! session, write text, refresh the display, read one key, and end the
//! session. [`TerminalSession`] captures exactly those so the concrete
//! library is an adapter ([`CrosstermSession`]) and the greeting logic can be
//! driven by a recording session in tests.

mod crossterm_session;
mod guard;

pub use crossterm_session::CrosstermSession;
pub use guard::SessionGuard;

use crossterm::event::KeyCode;
use std::io;

/// A key received from the session. The greeter never inspects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress(pub KeyCode);

pub trait TerminalSession {
    /// Take over the terminal. Must be called before any other operation.
    fn begin(&mut self) -> io::Result<()>;

    /// Queue text for display. Nothing is guaranteed visible before
    /// [`refresh`](TerminalSession::refresh).
    fn write_str(&mut self, text: &str) -> io::Result<()>;

    /// Push queued output to the display.
    fn refresh(&mut self) -> io::Result<()>;

    /// Block until a single key is pressed.
    fn read_key(&mut self) -> io::Result<KeyPress>;

    /// Give the terminal back in the mode it was found.
    fn end(&mut self) -> io::Result<()>;
}

impl<T: TerminalSession + ?Sized> TerminalSession for &mut T {
    fn begin(&mut self) -> io::Result<()> {
        (**self).begin()
    }

    fn write_str(&mut self, text: &str) -> io::Result<()> {
        (**self).write_str(text)
    }

    fn refresh(&mut self) -> io::Result<()> {
        (**self).refresh()
    }

    fn read_key(&mut self) -> io::Result<KeyPress> {
        (**self).read_key()
    }

    fn end(&mut self) -> io::Result<()> {
        (**self).end()
    }
}
