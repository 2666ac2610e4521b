pub mod cli;
pub mod config;
pub mod error;
pub mod greeter;
pub mod logging;
pub mod name;
pub mod session;

pub use error::GreeterError;
pub use greeter::{run, Greeting};
