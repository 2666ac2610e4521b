use serde::Deserialize;

use crate::name::{CompiledName, FixedName, NameProvider};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub greeting: GreetingConfig,
}

/// Greeting settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GreetingConfig {
    /// Overrides the name compiled into the binary.
    pub name: Option<String>,
}

impl Config {
    /// The name source selected by this configuration.
    pub fn name_provider(&self) -> Box<dyn NameProvider> {
        match &self.greeting.name {
            Some(name) => Box::new(FixedName(name.clone())),
            None => Box::new(CompiledName),
        }
    }
}
