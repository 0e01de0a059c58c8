//! Byte transport consumed by the shell.
//!
//! The shell never talks to hardware directly. It sends and receives raw
//! bytes through a [`Transport`], usually a UART driver on a device or a
//! pipe/socket on a host.
//!
//! Both calls are blocking. `receive` must fill the whole buffer or fail;
//! the shell only ever asks for one byte at a time, so partial reads never
//! come up.
//!
//! ```rust
//! use minishell::error::TransportError;
//! use minishell::transport::Transport;
//!
//! struct Loopback {
//!     pending: Option<u8>,
//! }
//!
//! impl Transport for Loopback {
//!     fn transmit(&mut self, data: &[u8]) -> Result<(), TransportError> {
//!         self.pending = data.last().copied();
//!         Ok(())
//!     }
//!
//!     fn receive(&mut self, buf: &mut [u8]) -> Result<(), TransportError> {
//!         let byte = self.pending.take().ok_or(TransportError::Closed)?;
//!         buf.fill(byte);
//!         Ok(())
//!     }
//! }
//! ```

use crate::error::TransportError;

/// Blocking send/receive of raw bytes.
pub trait Transport {
    /// Send every byte of `data`.
    fn transmit(&mut self, data: &[u8]) -> Result<(), TransportError>;

    /// Block until `buf` has been completely filled.
    fn receive(&mut self, buf: &mut [u8]) -> Result<(), TransportError>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn transmit(&mut self, data: &[u8]) -> Result<(), TransportError> {
        (**self).transmit(data)
    }

    fn receive(&mut self, buf: &mut [u8]) -> Result<(), TransportError> {
        (**self).receive(buf)
    }
}

/// Adapts a `std::io` reader/writer pair, e.g. stdin/stdout or a socket.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct IoTransport<R, W> {
    reader: R,
    writer: W,
}

#[cfg(feature = "std")]
impl<R, W> IoTransport<R, W>
where
    R: std::io::Read,
    W: std::io::Write,
{
    /// Wrap a reader and a writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Give back the wrapped reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

#[cfg(feature = "std")]
impl<R, W> Transport for IoTransport<R, W>
where
    R: std::io::Read,
    W: std::io::Write,
{
    fn transmit(&mut self, data: &[u8]) -> Result<(), TransportError> {
        self.writer
            .write_all(data)
            .and_then(|_| self.writer.flush())
            .map_err(|_| TransportError::WriteError)
    }

    fn receive(&mut self, buf: &mut [u8]) -> Result<(), TransportError> {
        self.reader.read_exact(buf).map_err(|e| {
            if e.kind() == std::io::ErrorKind::UnexpectedEof {
                TransportError::Closed
            } else {
                TransportError::ReadError
            }
        })
    }
}
