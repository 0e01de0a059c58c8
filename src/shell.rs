//! Command shell session.
//!
//! [`Shell`] ties the pieces together: it reads characters from a
//! [`Transport`], edits them into a line with the [`LineEditor`], and hands
//! completed lines to the dispatcher, which runs the matching command from
//! the [`Registry`].
//!
//! # Line protocol
//!
//! ```text
//! > add 3 4\r          prompt, typed line, carriage return
//! \r\n                 newline echoed on completion
//! :add 3 4\r\n         submitted line echoed back
//! ...                  handler output
//! > x\r
//! \r\n:x\r\nx: no such command\r\n
//! ```
//!
//! # Example
//!
//! ```rust
//! use minishell::error::TransportError;
//! use minishell::shell::{Session, Shell};
//! use minishell::transport::Transport;
//!
//! struct Uart;
//!
//! impl Transport for Uart {
//!     fn transmit(&mut self, _data: &[u8]) -> Result<(), TransportError> {
//!         Ok(())
//!     }
//!
//!     fn receive(&mut self, _buf: &mut [u8]) -> Result<(), TransportError> {
//!         Err(TransportError::Closed)
//!     }
//! }
//!
//! fn add(session: &mut Session<'_>, argc: usize, argv: &[&str]) -> i32 {
//!     if argc != 3 {
//!         return -1;
//!     }
//!     let a: i32 = argv[1].parse().unwrap_or(0);
//!     let b: i32 = argv[2].parse().unwrap_or(0);
//!     let _ = session.print(format_args!("{}\r\n", a + b));
//!     0
//! }
//!
//! let mut shell: Shell<Uart> = Shell::new(Uart);
//! shell.register('a', &add, "Add two numbers").unwrap();
//!
//! for &byte in b"add 3 4\r" {
//!     if let Some(result) = shell.feed(byte) {
//!         assert_eq!(result, Ok(0));
//!     }
//! }
//! ```

use core::convert::Infallible;
use core::fmt;

use crate::config::{InputFilter, ShellConfig};
use crate::console::{Console, PrintBuffer};
use crate::dispatch::{self, DispatchResult};
use crate::editor::{CMD_BUFFER_SIZE, Edit, LineEditor};
use crate::error::{RegistryError, TransportError};
use crate::registry::{CommandEntry, REGISTRY_CAPACITY, Registry};
use crate::transport::Transport;

/// Prompt sent before each line.
pub const PROMPT: &[u8] = b"> ";
/// Sequence echoed for a backspace: move back, overwrite with a space, move back.
pub const ERASE_SEQUENCE: &[u8] = b"\x08 \x08";
/// Newline sequence echoed when a line completes.
pub const NEWLINE: &[u8] = b"\r\n";
/// Trigger of the built-in help command.
pub const HELP_TRIGGER: char = 'h';

/// A command implementation.
///
/// `argv[0]` is the first token of the line, starting with the trigger
/// character, and `argc == argv.len()`. The return value is handed back to
/// whoever fed the line to the shell; the shell itself does not act on it.
///
/// Plain functions and closures with the matching signature implement this
/// trait, so `&my_fn` can be registered directly.
pub trait Handler {
    /// Run the command.
    fn call(&self, session: &mut Session<'_>, argc: usize, argv: &[&str]) -> i32;
}

impl<F> Handler for F
where
    F: Fn(&mut Session<'_>, usize, &[&str]) -> i32,
{
    fn call(&self, session: &mut Session<'_>, argc: usize, argv: &[&str]) -> i32 {
        self(session, argc, argv)
    }
}

/// What a handler gets to work with while it runs: the command table
/// and the shell's output.
#[derive(Debug)]
pub struct Session<'a> {
    commands: &'a [CommandEntry],
    console: Console<'a>,
}

impl<'a> Session<'a> {
    /// Build a session over a command table and a console.
    pub fn new(commands: &'a [CommandEntry], console: Console<'a>) -> Self {
        Self { commands, console }
    }

    /// Registered commands in registration order.
    pub fn commands(&self) -> core::slice::Iter<'a, CommandEntry> {
        self.commands.iter()
    }

    /// Format and transmit a message.
    pub fn print(&mut self, args: fmt::Arguments<'_>) -> Result<(), TransportError> {
        self.console.print(args)
    }

    /// Transmit raw bytes.
    pub fn write_bytes(&mut self, data: &[u8]) -> Result<(), TransportError> {
        self.console.write_bytes(data)
    }
}

/// Built-in command listing every registered command as
/// `"<trigger>: <description>\r\n"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Help;

impl Handler for Help {
    fn call(&self, session: &mut Session<'_>, _argc: usize, _argv: &[&str]) -> i32 {
        for entry in session.commands() {
            if let Err(_err) =
                session.print(format_args!("{}: {}\r\n", entry.trigger, entry.description))
            {
                #[cfg(feature = "defmt")]
                defmt::warn!("help output failed: {}", _err);
                return -1;
            }
        }
        0
    }
}

/// An interactive shell reading from and writing to one transport.
///
/// `COMMANDS` bounds the command table (built-in help included) and
/// `LINE` is the command buffer size; lines keep at most `LINE - 1`
/// characters.
#[derive(Debug)]
pub struct Shell<T, const COMMANDS: usize = REGISTRY_CAPACITY, const LINE: usize = CMD_BUFFER_SIZE>
where
    T: Transport,
{
    registry: Registry<COMMANDS>,
    editor: LineEditor<LINE>,
    scratch: PrintBuffer,
    config: ShellConfig,
    transport: T,
}

impl<T, const COMMANDS: usize, const LINE: usize> Shell<T, COMMANDS, LINE>
where
    T: Transport,
{
    /// Create a shell with the default configuration.
    ///
    /// The help command is registered under [`HELP_TRIGGER`] and takes the
    /// first slot of the command table.
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, ShellConfig::default())
    }

    /// Create a shell with an explicit configuration.
    pub fn with_config(transport: T, config: ShellConfig) -> Self {
        let mut shell = Self {
            registry: Registry::new(),
            editor: LineEditor::new(),
            scratch: PrintBuffer::new(),
            config,
            transport,
        };
        if let Err(_err) = shell.registry.register(HELP_TRIGGER, &Help, "Help") {
            #[cfg(feature = "defmt")]
            defmt::warn!("help command not registered: {}", _err);
        }
        shell
    }

    /// Add a command.
    ///
    /// Commands are looked up in registration order, so registering a
    /// trigger that is already taken succeeds but the new entry is never
    /// reached.
    ///
    /// # Arguments
    ///
    /// * `trigger` - Character that selects the command (ASCII letter or digit)
    /// * `handler` - Invoked with the tokens of every line starting with `trigger`
    /// * `description` - One-line text listed by the help command
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Command registered
    /// * [`RegistryError::InvalidTrigger`] - `trigger` is not an ASCII letter or digit
    /// * [`RegistryError::TableFull`] - The command table already holds `COMMANDS` entries
    ///
    /// # Examples
    ///
    /// ```rust
    /// use minishell::error::{RegistryError, TransportError};
    /// use minishell::shell::{Session, Shell};
    /// use minishell::transport::Transport;
    ///
    /// struct Null;
    ///
    /// impl Transport for Null {
    ///     fn transmit(&mut self, _data: &[u8]) -> Result<(), TransportError> {
    ///         Ok(())
    ///     }
    ///
    ///     fn receive(&mut self, _buf: &mut [u8]) -> Result<(), TransportError> {
    ///         Err(TransportError::Closed)
    ///     }
    /// }
    ///
    /// fn reboot(_session: &mut Session<'_>, _argc: usize, _argv: &[&str]) -> i32 {
    ///     0
    /// }
    ///
    /// let mut shell: Shell<Null> = Shell::new(Null);
    /// assert_eq!(shell.register('r', &reboot, "Reboot"), Ok(()));
    /// assert_eq!(
    ///     shell.register('?', &reboot, "Reboot"),
    ///     Err(RegistryError::InvalidTrigger)
    /// );
    /// ```
    pub fn register(
        &mut self,
        trigger: char,
        handler: &'static dyn Handler,
        description: &'static str,
    ) -> Result<(), RegistryError> {
        let result = self.registry.register(trigger, handler, description);
        if let Err(_err) = result {
            #[cfg(feature = "defmt")]
            defmt::warn!("cannot register {=char}: {}", trigger, _err);
        }
        result
    }

    /// The command table.
    pub fn registry(&self) -> &Registry<COMMANDS> {
        &self.registry
    }

    /// Current configuration.
    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Enable or disable echo of typed characters.
    pub fn set_echo(&mut self, enabled: bool) {
        self.config.echo = enabled;
    }

    /// Enable or disable the `":<line>\r\n"` echo of submitted lines.
    pub fn set_line_echo(&mut self, enabled: bool) {
        self.config.echo_line = enabled;
    }

    /// Choose which characters are accepted as line content.
    pub fn set_input_filter(&mut self, filter: InputFilter) {
        self.config.input_filter = filter;
    }

    /// The line typed so far.
    pub fn line(&self) -> &str {
        self.editor.line()
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The underlying transport, mutably.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Consume the shell and return its transport.
    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Process one already received character.
    ///
    /// Accepted characters are echoed, a backspace erases the last one and
    /// echoes [`ERASE_SEQUENCE`], and anything filtered out or arriving on
    /// a full line is dropped silently. A carriage return echoes
    /// [`NEWLINE`] and `":<line>\r\n"`, then dispatches the line.
    ///
    /// # Arguments
    ///
    /// * `byte` - Character received from the transport
    ///
    /// # Returns
    ///
    /// * `None` - The line is still being typed
    /// * `Some(result)` - A carriage return completed the line and `result`
    ///   is what dispatching it returned
    ///
    /// # Examples
    ///
    /// ```rust
    /// use minishell::error::{DispatchError, TransportError};
    /// use minishell::shell::Shell;
    /// use minishell::transport::Transport;
    ///
    /// struct Null;
    ///
    /// impl Transport for Null {
    ///     fn transmit(&mut self, _data: &[u8]) -> Result<(), TransportError> {
    ///         Ok(())
    ///     }
    ///
    ///     fn receive(&mut self, _buf: &mut [u8]) -> Result<(), TransportError> {
    ///         Err(TransportError::Closed)
    ///     }
    /// }
    ///
    /// let mut shell: Shell<Null> = Shell::new(Null);
    /// assert_eq!(shell.feed(b'x'), None);
    /// assert_eq!(shell.line(), "x");
    /// assert_eq!(shell.feed(b'\r'), Some(Err(DispatchError::CommandNotFound)));
    /// ```
    pub fn feed(&mut self, byte: u8) -> Option<DispatchResult> {
        match self.editor.feed(byte, self.config.input_filter) {
            Edit::Appended(c) => {
                if self.config.echo {
                    self.send(&[c]);
                }
                None
            }
            Edit::Erased => {
                if self.config.echo {
                    self.send(ERASE_SEQUENCE);
                }
                None
            }
            Edit::Ignored => None,
            Edit::Dropped => {
                #[cfg(feature = "defmt")]
                defmt::trace!("dropped input byte {=u8:#x}", byte);
                None
            }
            Edit::Completed => {
                if self.config.echo {
                    self.send(NEWLINE);
                }
                let line = self.editor.take_line();
                if self.config.echo_line {
                    if let Err(_err) = self.console().print(format_args!(":{}\r\n", line)) {
                        #[cfg(feature = "defmt")]
                        defmt::warn!("line echo failed: {}", _err);
                    }
                }
                Some(self.dispatch(&line))
            }
        }
    }

    /// Receive exactly one character and process it.
    ///
    /// Blocks inside [`Transport::receive`] until the character arrives.
    ///
    /// # Returns
    ///
    /// * `Ok(None)` - The character was consumed, the line is not complete
    /// * `Ok(Some(result))` - The character completed a line, see [`Shell::feed`]
    /// * `Err(err)` - The transport failed to receive; nothing was consumed
    pub fn poll(&mut self) -> Result<Option<DispatchResult>, TransportError> {
        let mut byte = [0u8; 1];
        self.transport.receive(&mut byte)?;
        Ok(self.feed(byte[0]))
    }

    /// Send the prompt.
    pub fn prompt(&mut self) {
        self.send(PROMPT);
    }

    /// Prompt, then read characters until a line has been dispatched.
    ///
    /// # Returns
    ///
    /// * `Ok(result)` - A line was completed and dispatched with `result`
    /// * `Err(err)` - The transport failed to receive before the line was
    ///   complete; the partial line is kept for the next call
    pub fn read_line(&mut self) -> Result<DispatchResult, TransportError> {
        self.prompt();
        loop {
            if let Some(result) = self.poll()? {
                return Ok(result);
            }
        }
    }

    /// Read and dispatch lines forever.
    ///
    /// Each iteration sends [`PROMPT`] and reads one line. Handler status
    /// codes and unknown commands do not stop the loop, and neither do
    /// transmit failures.
    ///
    /// # Returns
    ///
    /// Only returns when the transport fails to receive, e.g. because it
    /// was closed, with that error.
    pub fn run(&mut self) -> Result<Infallible, TransportError> {
        loop {
            let _result = self.read_line()?;
            #[cfg(feature = "defmt")]
            defmt::debug!("line dispatched: {}", _result);
        }
    }

    /// Dispatch a complete line as if it had been typed.
    ///
    /// Nothing is echoed; only the handler output (or the unknown command
    /// message) is transmitted.
    ///
    /// # Arguments
    ///
    /// * `line` - Line to run, trigger character first
    ///
    /// # Returns
    ///
    /// * `Ok(status)` - Return value of the matching handler
    /// * [`DispatchError::CommandNotFound`](crate::error::DispatchError::CommandNotFound) -
    ///   No command is registered under the first character of `line`
    pub fn dispatch(&mut self, line: &str) -> DispatchResult {
        let console = Console::new(&mut self.transport, &mut self.scratch);
        dispatch::dispatch(line, self.registry.entries(), console)
    }

    fn console(&mut self) -> Console<'_> {
        Console::new(&mut self.transport, &mut self.scratch)
    }

    fn send(&mut self, data: &[u8]) {
        if let Err(_err) = self.transport.transmit(data) {
            #[cfg(feature = "defmt")]
            defmt::warn!("transmit failed: {}", _err);
        }
    }
}
