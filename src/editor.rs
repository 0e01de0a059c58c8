//! Line editing state machine.
//!
//! The editor consumes one received byte at a time and tells the caller
//! what happened, so the caller can echo accordingly. It supports a single
//! editing operation: backspace removes the last accepted character.
//!
//! Characters that fail the [`InputFilter`] or arrive while the buffer is
//! full are dropped without any feedback. That truncation is the shell's
//! backpressure policy, not an error.

use heapless::String;

use crate::config::InputFilter;

/// Default size of the command buffer.
///
/// One slot is reserved for the line terminator, so a line holds at most
/// `CMD_BUFFER_SIZE - 1` characters.
pub const CMD_BUFFER_SIZE: usize = 40;

/// ASCII backspace character (0x08).
pub const ASCII_BACKSPACE: u8 = 0x08;
/// ASCII carriage return character (0x0D). The only line terminator.
pub const ASCII_CR: u8 = 0x0D;

/// Outcome of feeding one byte to the [`LineEditor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    /// The byte was stored at the end of the line.
    Appended(u8),
    /// The last character of the line was removed.
    Erased,
    /// Carriage return: the line is complete.
    Completed,
    /// Backspace on an empty line.
    Ignored,
    /// The byte was filtered out or the buffer is full.
    Dropped,
}

/// Fixed-capacity line buffer driven one byte at a time.
#[derive(Debug, Default)]
pub struct LineEditor<const N: usize = CMD_BUFFER_SIZE> {
    line: String<N>,
}

impl<const N: usize> LineEditor<N> {
    /// Longest line the editor keeps.
    pub const MAX_LINE_LEN: usize = N.saturating_sub(1);

    /// Create an editor with an empty line.
    pub const fn new() -> Self {
        Self { line: String::new() }
    }

    /// Process a single received byte.
    ///
    /// # Arguments
    ///
    /// * `byte` - Received character
    /// * `filter` - Decides which characters other than CR and backspace
    ///   are accepted
    ///
    /// # Returns
    ///
    /// What happened to the line, so the caller can echo accordingly:
    ///
    /// * [`Edit::Completed`] - `byte` was a carriage return
    /// * [`Edit::Erased`] / [`Edit::Ignored`] - Backspace on a non-empty / empty line
    /// * [`Edit::Appended`] - `byte` passed the filter and fit in the line
    /// * [`Edit::Dropped`] - `byte` was filtered out or the line is full
    ///
    /// # Examples
    ///
    /// ```rust
    /// use minishell::config::InputFilter;
    /// use minishell::editor::{Edit, LineEditor};
    ///
    /// let mut editor: LineEditor = LineEditor::new();
    /// let filter = InputFilter::AlphanumericSpace;
    ///
    /// assert_eq!(editor.feed(b'a', filter), Edit::Appended(b'a'));
    /// assert_eq!(editor.feed(b'-', filter), Edit::Dropped);
    /// assert_eq!(editor.feed(0x08, filter), Edit::Erased);
    /// assert_eq!(editor.feed(0x08, filter), Edit::Ignored);
    /// assert_eq!(editor.feed(b'\r', filter), Edit::Completed);
    /// ```
    pub fn feed(&mut self, byte: u8, filter: InputFilter) -> Edit {
        match byte {
            ASCII_CR => Edit::Completed,
            ASCII_BACKSPACE => {
                if self.line.pop().is_some() {
                    Edit::Erased
                } else {
                    Edit::Ignored
                }
            }
            _ => {
                if self.line.len() >= Self::MAX_LINE_LEN || !filter.accepts(byte) {
                    return Edit::Dropped;
                }
                match self.line.push(char::from(byte)) {
                    Ok(()) => Edit::Appended(byte),
                    Err(()) => Edit::Dropped,
                }
            }
        }
    }

    /// Hand over the current line and start a new, empty one.
    pub fn take_line(&mut self) -> String<N> {
        core::mem::take(&mut self.line)
    }

    /// The line typed so far.
    pub fn line(&self) -> &str {
        &self.line
    }

    /// Number of characters typed so far.
    pub fn len(&self) -> usize {
        self.line.len()
    }

    /// Whether nothing has been typed on the current line.
    pub fn is_empty(&self) -> bool {
        self.line.is_empty()
    }

    /// Discard the current line.
    pub fn clear(&mut self) {
        self.line.clear();
    }
}
