// A tiny error type so we don't rely on anyhow/thiserror.
// Every variant states *where* things went wrong.
use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    WindowInit(String),   // Creating the window failed
    WindowUpdate(String), // Pushing the frame to the window failed
    UnknownRake(String),  // A rake name that is not in the registry
    EmptyRakeSet,         // Registry built with no profiles at all
    EmptyRake(String),    // A profile with no teeth
}

impl Display for Error {
    // This decides how the error is printed to your console.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::WindowInit(s) => write!(f, "Window init error: {s}"),
            Error::WindowUpdate(s) => write!(f, "Window update error: {s}"),
            Error::UnknownRake(name) => write!(f, "Unknown rake profile: {name:?}"),
            Error::EmptyRakeSet => write!(f, "Rake registry needs at least one profile"),
            Error::EmptyRake(name) => write!(f, "Rake profile {name:?} has no teeth"),
        }
    }
}

impl std::error::Error for Error {}
