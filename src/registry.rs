//! Fixed-capacity command table.
//!
//! Commands are selected by a single trigger character. The table is
//! append-only: entries are never removed or reordered, and lookup is a
//! linear scan from the first entry. Registering the same trigger twice is
//! allowed, but only the first registration is ever reachable.

use core::fmt;

use heapless::Vec;

use crate::error::RegistryError;
use crate::shell::Handler;

/// Default maximum number of registered commands, built-in help included.
pub const REGISTRY_CAPACITY: usize = 64;

/// A registered command.
#[derive(Clone, Copy)]
pub struct CommandEntry {
    /// Character that selects this command. Always an ASCII letter or digit.
    pub trigger: char,
    /// Invoked when a line starts with `trigger`.
    pub handler: &'static dyn Handler,
    /// One-line text shown by the help command.
    pub description: &'static str,
}

impl fmt::Debug for CommandEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandEntry")
            .field("trigger", &self.trigger)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Whether `c` can be used as a command trigger.
pub fn is_valid_trigger(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// First entry in `entries` whose trigger is `trigger`.
pub fn lookup(entries: &[CommandEntry], trigger: char) -> Option<CommandEntry> {
    entries.iter().find(|entry| entry.trigger == trigger).copied()
}

/// Ordered command table holding at most `N` entries.
#[derive(Debug)]
pub struct Registry<const N: usize = REGISTRY_CAPACITY> {
    entries: Vec<CommandEntry, N>,
}

impl<const N: usize> Default for Registry<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Registry<N> {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Append a command to the table.
    ///
    /// The trigger is validated before the capacity is checked.
    ///
    /// # Arguments
    ///
    /// * `trigger` - Character that selects the command
    /// * `handler` - Command implementation
    /// * `description` - One-line help text
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Entry appended
    /// * [`RegistryError::InvalidTrigger`] - `trigger` is not an ASCII letter or digit
    /// * [`RegistryError::TableFull`] - `N` commands are already registered
    pub fn register(
        &mut self,
        trigger: char,
        handler: &'static dyn Handler,
        description: &'static str,
    ) -> Result<(), RegistryError> {
        if !is_valid_trigger(trigger) {
            return Err(RegistryError::InvalidTrigger);
        }

        self.entries
            .push(CommandEntry {
                trigger,
                handler,
                description,
            })
            .map_err(|_| RegistryError::TableFull)
    }

    /// Find the first command registered under `trigger`.
    ///
    /// # Arguments
    ///
    /// * `trigger` - Character to look up; matching is case sensitive
    ///
    /// # Returns
    ///
    /// The earliest entry with that trigger, or `None` if there is none.
    /// Later registrations under the same trigger are never returned.
    pub fn find(&self, trigger: char) -> Option<CommandEntry> {
        lookup(&self.entries, trigger)
    }

    /// Iterate over the commands in registration order.
    pub fn iter(&self) -> core::slice::Iter<'_, CommandEntry> {
        self.entries.iter()
    }

    /// All commands in registration order.
    pub fn entries(&self) -> &[CommandEntry] {
        &self.entries
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no command is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the next registration would fail with `TableFull`.
    pub fn is_full(&self) -> bool {
        self.entries.is_full()
    }

    /// Maximum number of commands this registry can hold.
    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<'r, const N: usize> IntoIterator for &'r Registry<N> {
    type Item = &'r CommandEntry;
    type IntoIter = core::slice::Iter<'r, CommandEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
