//! Error types shared by the shell components.
//!
//! Every error here is recoverable. None of them stops the read-dispatch
//! loop except a failed receive on the transport, which is the only way
//! [`Shell::run`](crate::shell::Shell::run) returns.

use core::fmt;

/// Errors returned when registering a command.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RegistryError {
    /// The trigger is not an ASCII letter or digit.
    InvalidTrigger,
    /// The registry already holds its maximum number of entries.
    TableFull,
}

/// Errors returned when dispatching a completed line.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DispatchError {
    /// No entry matches the trigger character of the line.
    CommandNotFound,
}

/// Errors reported by a [`Transport`](crate::transport::Transport).
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TransportError {
    /// Sending bytes failed.
    WriteError,
    /// Receiving bytes failed.
    ReadError,
    /// The other end went away and no more bytes will arrive.
    Closed,
}

/// Errors returned when loading a [`ShellConfig`](crate::config::ShellConfig).
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ConfigError {
    /// The JSON document could not be parsed into a configuration.
    Parse,
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::InvalidTrigger => f.write_str("trigger must be alphanumeric"),
            RegistryError::TableFull => f.write_str("command table is full"),
        }
    }
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::CommandNotFound => f.write_str("no such command"),
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::WriteError => f.write_str("transport write failed"),
            TransportError::ReadError => f.write_str("transport read failed"),
            TransportError::Closed => f.write_str("transport closed"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse => f.write_str("invalid shell configuration"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RegistryError {}
#[cfg(feature = "std")]
impl std::error::Error for DispatchError {}
#[cfg(feature = "std")]
impl std::error::Error for TransportError {}
#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "defmt")]
impl defmt::Format for RegistryError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            RegistryError::InvalidTrigger => defmt::write!(f, "InvalidTrigger"),
            RegistryError::TableFull => defmt::write!(f, "TableFull"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DispatchError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            DispatchError::CommandNotFound => defmt::write!(f, "CommandNotFound"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TransportError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            TransportError::WriteError => defmt::write!(f, "WriteError"),
            TransportError::ReadError => defmt::write!(f, "ReadError"),
            TransportError::Closed => defmt::write!(f, "Closed"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            ConfigError::Parse => defmt::write!(f, "Parse"),
        }
    }
}
