//! The greeting sequence: begin, write, refresh, wait for a key, end.

use tracing::{debug, info};

use crate::error::GreeterError;
use crate::name::NameProvider;
use crate::session::{KeyPress, SessionGuard, TerminalSession};

pub const GREETING_PREFIX: &str = "Hello there, ";
pub const GREETING_SUFFIX: &str = "!\n\n";
pub const EXIT_PROMPT: &str = "press any key to exit...";

/// The text fragments written to the session, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting<'a> {
    name: &'a str,
}

impl<'a> Greeting<'a> {
    pub fn for_name(name: &'a str) -> Self {
        Self { name }
    }

    pub fn fragments(&self) -> [&'a str; 4] {
        [GREETING_PREFIX, self.name, GREETING_SUFFIX, EXIT_PROMPT]
    }

    pub fn text(&self) -> String {
        self.fragments().concat()
    }
}

/// Greet on `session` and wait for one key press.
///
/// The session is always ended before returning, whether the sequence
/// succeeded or a collaborator failed part way. The returned key is never
/// used to decide anything.
pub fn run<S, N>(session: S, names: &N) -> Result<KeyPress, GreeterError>
where
    S: TerminalSession,
    N: NameProvider + ?Sized,
{
    let mut guard = SessionGuard::begin(session)?;

    let name = names.name();
    let greeting = Greeting::for_name(&name);
    for fragment in greeting.fragments() {
        guard.write_str(fragment)?;
    }
    guard.refresh()?;
    info!(name = %name, "greeting shown");

    let key = guard.read_key()?;
    debug!(?key, "key received");

    guard.finish()?;
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragments_follow_write_order() {
        let greeting = Greeting::for_name("Ada");
        assert_eq!(
            greeting.fragments(),
            ["Hello there, ", "Ada", "!\n\n", "press any key to exit..."]
        );
    }

    #[test]
    fn text_concatenates_fragments() {
        assert_eq!(
            Greeting::for_name("world").text(),
            "Hello there, world!\n\npress any key to exit..."
        );
    }

    #[test]
    fn empty_name_still_yields_four_fragments() {
        let greeting = Greeting::for_name("");
        assert_eq!(greeting.fragments()[1], "");
        assert_eq!(greeting.text(), "Hello there, !\n\npress any key to exit...");
    }
}
