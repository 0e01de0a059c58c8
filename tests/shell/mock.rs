//! Scripted transport and argument capture shared by the shell tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use minishell::error::{DispatchError, TransportError};
use minishell::shell::{Session, Shell};
use minishell::transport::Transport;

/// Transport fed from a fixed script that records everything transmitted.
#[derive(Debug, Default)]
pub struct MockTransport {
    input: VecDeque<u8>,
    output: Vec<u8>,
    pub fail_writes: bool,
}

impl MockTransport {
    pub fn new(input: &[u8]) -> Self {
        Self {
            input: input.iter().copied().collect(),
            ..Self::default()
        }
    }

    /// Everything transmitted so far, as text.
    pub fn output(&self) -> &str {
        std::str::from_utf8(&self.output).expect("shell output is ASCII")
    }

    pub fn take_output(&mut self) -> String {
        let out = self.output().to_string();
        self.output.clear();
        out
    }

    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

impl Transport for MockTransport {
    fn transmit(&mut self, data: &[u8]) -> Result<(), TransportError> {
        if self.fail_writes {
            return Err(TransportError::WriteError);
        }
        self.output.extend_from_slice(data);
        Ok(())
    }

    fn receive(&mut self, buf: &mut [u8]) -> Result<(), TransportError> {
        if self.input.len() < buf.len() {
            return Err(TransportError::Closed);
        }
        for slot in buf.iter_mut() {
            *slot = self.input.pop_front().ok_or(TransportError::Closed)?;
        }
        Ok(())
    }
}

pub type TestShell = Shell<MockTransport>;

pub fn shell_with_input(input: &[u8]) -> TestShell {
    Shell::new(MockTransport::new(input))
}

/// Feed every byte and collect the dispatch results of completed lines.
pub fn feed_all(shell: &mut TestShell, bytes: &[u8]) -> Vec<Result<i32, DispatchError>> {
    bytes.iter().filter_map(|&byte| shell.feed(byte)).collect()
}

thread_local! {
    static CAPTURED: RefCell<Vec<Captured>> = const { RefCell::new(Vec::new()) };
}

/// Arguments one handler invocation received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captured {
    pub argc: usize,
    pub argv: Vec<String>,
}

/// Handler recording its arguments; returns `argc` as its status.
pub fn capture(_session: &mut Session<'_>, argc: usize, argv: &[&str]) -> i32 {
    CAPTURED.with(|calls| {
        calls.borrow_mut().push(Captured {
            argc,
            argv: argv.iter().map(|s| s.to_string()).collect(),
        })
    });
    argc as i32
}

/// Handler printing its arguments as `[a][b]...\r\n`.
pub fn print_args(session: &mut Session<'_>, _argc: usize, argv: &[&str]) -> i32 {
    for arg in argv {
        if session.print(format_args!("[{}]", arg)).is_err() {
            return -1;
        }
    }
    match session.write_bytes(b"\r\n") {
        Ok(()) => 0,
        Err(_) => -1,
    }
}

pub fn noop(_session: &mut Session<'_>, _argc: usize, _argv: &[&str]) -> i32 {
    0
}

/// Take every invocation recorded on this thread.
pub fn captured() -> Vec<Captured> {
    CAPTURED.with(|calls| calls.borrow_mut().drain(..).collect())
}
