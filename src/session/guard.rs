use tracing::{debug, warn};

use crate::error::GreeterError;
use crate::session::{KeyPress, TerminalSession};

/// An active terminal session.
///
/// Created by [`SessionGuard::begin`]; the session is ended exactly once,
/// either explicitly by [`SessionGuard::finish`] or when the guard is dropped
/// on an error or panic path.
pub struct SessionGuard<S: TerminalSession> {
    session: S,
    active: bool,
}

impl<S: TerminalSession> SessionGuard<S> {
    pub fn begin(mut session: S) -> Result<Self, GreeterError> {
        session.begin().map_err(GreeterError::SessionStart)?;
        debug!("terminal session started");
        Ok(Self {
            session,
            active: true,
        })
    }

    pub fn write_str(&mut self, text: &str) -> Result<(), GreeterError> {
        self.session.write_str(text).map_err(GreeterError::Write)
    }

    pub fn refresh(&mut self) -> Result<(), GreeterError> {
        self.session.refresh().map_err(GreeterError::Refresh)
    }

    pub fn read_key(&mut self) -> Result<KeyPress, GreeterError> {
        self.session.read_key().map_err(GreeterError::Input)
    }

    /// End the session and report whether teardown succeeded.
    pub fn finish(mut self) -> Result<(), GreeterError> {
        self.active = false;
        self.session.end().map_err(GreeterError::SessionEnd)?;
        debug!("terminal session ended");
        Ok(())
    }
}

impl<S: TerminalSession> Drop for SessionGuard<S> {
    fn drop(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        match self.session.end() {
            Ok(()) => debug!("terminal session ended on early exit"),
            Err(err) => warn!(error = %err, "failed to end terminal session"),
        }
    }
}
