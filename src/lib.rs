//! # minishell - character-driven command shell for embedded systems
//!
//! A tiny interactive shell meant to sit on a UART or similar byte stream.
//! Characters are read one at a time, edited into a line with minimal
//! editing support (backspace only), and the completed line is dispatched
//! to a command selected by its first character.
//!
//! ## Features
//!
//! - **Zero-allocation**: the command table, the line buffer and the output
//!   scratch buffer are all fixed-capacity
//! - **Single-character triggers**: `a`, `h`, `7`, ... select commands
//! - **Built-in help**: `h` lists every registered command
//! - **Transport agnostic**: anything implementing [`transport::Transport`]
//! - **Configurable**: echo and input filtering, loadable from JSON
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │  Transport  │───▶│ Line Editor │───▶│ Dispatcher  │───▶│  Registry   │
//! │ (receive 1) │    │ (per byte)  │    │ (tokenize)  │    │ (find)      │
//! └─────────────┘    └─────────────┘    └─────────────┘    └─────────────┘
//!        ▲                                                        │
//!        └──────────────────── handler output ◀───────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use minishell::shell::{Session, Shell};
//! # use minishell::error::TransportError;
//! # use minishell::transport::Transport;
//! # struct Uart;
//! # impl Transport for Uart {
//! #     fn transmit(&mut self, _data: &[u8]) -> Result<(), TransportError> { Ok(()) }
//! #     fn receive(&mut self, _buf: &mut [u8]) -> Result<(), TransportError> { Err(TransportError::Closed) }
//! # }
//!
//! fn led(session: &mut Session<'_>, argc: usize, argv: &[&str]) -> i32 {
//!     match (argc, argv.get(1)) {
//!         (2, Some(&"on")) | (2, Some(&"off")) => {
//!             let _ = session.print(format_args!("led {}\r\n", argv[1]));
//!             0
//!         }
//!         _ => -1,
//!     }
//! }
//!
//! let mut shell: Shell<Uart> = Shell::new(Uart);
//! shell.register('l', &led, "Switch the LED: l on|off").unwrap();
//!
//! // Blocks on the transport and only returns once it stops delivering bytes.
//! let _ = shell.run();
//! ```
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support, including
//!   [`transport::IoTransport`] for `std::io` readers and writers
//! - `defmt`: Enable defmt logging support for embedded debugging

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

/// Error types for registration, dispatch, transport and configuration.
pub mod error;

/// Byte transport the shell reads from and writes to.
pub mod transport;

/// Runtime configuration.
pub mod config;

/// Fixed-capacity command table.
pub mod registry;

/// Per-character line editing.
pub mod editor;

/// Formatted output through the scratch buffer.
pub mod console;

/// Line tokenizer and command dispatcher.
pub mod dispatch;

/// Shell session, handler interface and built-in help.
pub mod shell;

pub use config::{InputFilter, ShellConfig};
pub use error::{ConfigError, DispatchError, RegistryError, TransportError};
pub use shell::{Handler, Session, Shell};
pub use transport::Transport;
