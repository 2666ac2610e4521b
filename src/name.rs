//! Sources for the name shown in the greeting.

use std::borrow::Cow;

/// Name baked into the binary at build time.
///
/// Set `GREETER_NAME` while compiling to change it; defaults to `"world"`.
pub const COMPILED_NAME: &str = match option_env!("GREETER_NAME") {
    Some(name) => name,
    None => "world",
};

/// Supplies the text inserted into the greeting.
pub trait NameProvider {
    fn name(&self) -> Cow<'_, str>;
}

/// The name compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompiledName;

impl NameProvider for CompiledName {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(COMPILED_NAME)
    }
}

/// A name chosen at runtime, e.g. from the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedName(pub String);

impl NameProvider for FixedName {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.0)
    }
}

impl<F> NameProvider for F
where
    F: Fn() -> String,
{
    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(self())
    }
}
