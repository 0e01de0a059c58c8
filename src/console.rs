//! Formatted output through a small scratch buffer.
//!
//! Messages are rendered into a fixed [`PRINT_BUFFER_SIZE`] byte buffer
//! and transmitted from there. A message that does not fit is sent in
//! several chunks, so long help descriptions are never cut short.

use core::fmt::{self, Write as _};

use heapless::String;

use crate::error::TransportError;
use crate::transport::Transport;

/// Size of the scratch buffer used to format output.
pub const PRINT_BUFFER_SIZE: usize = 40;

/// Scratch buffer type owned by the shell and lent to each [`Console`].
pub type PrintBuffer = String<PRINT_BUFFER_SIZE>;

/// Output side of a shell session.
pub struct Console<'a> {
    transport: &'a mut dyn Transport,
    scratch: &'a mut PrintBuffer,
}

impl fmt::Debug for Console<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console")
            .field("scratch", &self.scratch)
            .finish_non_exhaustive()
    }
}

impl<'a> Console<'a> {
    /// Borrow a transport and a scratch buffer for output.
    pub fn new(transport: &'a mut dyn Transport, scratch: &'a mut PrintBuffer) -> Self {
        Self { transport, scratch }
    }

    /// Send raw bytes without formatting.
    pub fn write_bytes(&mut self, data: &[u8]) -> Result<(), TransportError> {
        self.transport.transmit(data)
    }

    /// Format `args` and send the result.
    pub fn print(&mut self, args: fmt::Arguments<'_>) -> Result<(), TransportError> {
        self.scratch.clear();
        let mut chunks = Chunks {
            console: &mut *self,
            error: None,
        };
        // Only a failing Display impl can error without a transport error.
        let _ = chunks.write_fmt(args);
        if let Some(err) = chunks.error {
            return Err(err);
        }
        self.flush()
    }

    fn flush(&mut self) -> Result<(), TransportError> {
        if self.scratch.is_empty() {
            return Ok(());
        }
        let result = self.transport.transmit(self.scratch.as_bytes());
        self.scratch.clear();
        result
    }
}

/// `fmt::Write` adapter that transmits the scratch buffer whenever it fills.
struct Chunks<'c, 'a> {
    console: &'c mut Console<'a>,
    error: Option<TransportError>,
}

impl fmt::Write for Chunks<'_, '_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if self.console.scratch.push(c).is_ok() {
                continue;
            }
            if let Err(err) = self.console.flush() {
                self.error = Some(err);
                return Err(fmt::Error);
            }
            self.console.scratch.push(c).map_err(|_| fmt::Error)?;
        }
        Ok(())
    }
}
