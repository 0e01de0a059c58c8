//! Tokenizer and dispatcher for completed lines.
//!
//! A line looks like `<trigger>[ <token>]*`. The first character selects
//! the command; the whole line is then split on single spaces:
//!
//! ```text
//! "add 3 4"   -> ["add", "3", "4"]
//! "a  b"      -> ["a", "", "b"]      consecutive spaces give empty tokens
//! "a b "      -> ["a", "b", ""]      a trailing space gives a final empty token
//! ```
//!
//! At most [`ARGC_MAX`] tokens are produced. Once the bound is reached the
//! rest of the line, spaces included, stays in the last token.

use heapless::Vec;

use crate::config::ASCII_SPACE;
use crate::console::Console;
use crate::error::DispatchError;
use crate::registry::{CommandEntry, lookup};
use crate::shell::Session;

/// Maximum number of tokens passed to a handler, the command token included.
pub const ARGC_MAX: usize = 8;

/// Trigger looked up for an empty line. No command can be registered under it.
pub const ASCII_NUL: char = '\0';

/// Tokens of a line, borrowed from the line itself.
pub type Argv<'a> = Vec<&'a str, ARGC_MAX>;

/// Result of dispatching a line: the handler's return value, or why no
/// handler ran.
pub type DispatchResult = Result<i32, DispatchError>;

/// Split `line` into at most [`ARGC_MAX`] space-delimited tokens.
///
/// Spaces are never collapsed. Token 0 always starts at the trigger.
///
/// # Arguments
///
/// * `line` - Completed line, trigger character first
///
/// # Returns
///
/// The tokens, borrowed from `line`. There is always at least one token;
/// an empty line yields a single empty token.
///
/// # Examples
///
/// ```rust
/// use minishell::dispatch::tokenize;
///
/// assert_eq!(tokenize("add 3 4").as_slice(), ["add", "3", "4"]);
/// assert_eq!(tokenize("a  b ").as_slice(), ["a", "", "b", ""]);
/// assert_eq!(tokenize("a 1 2 3 4 5 6 7 8").last(), Some(&"7 8"));
/// ```
pub fn tokenize(line: &str) -> Argv<'_> {
    let mut argv = Argv::new();
    let mut start = 0;

    for (i, byte) in line.bytes().enumerate() {
        if argv.len() + 1 >= ARGC_MAX {
            break;
        }
        if byte == ASCII_SPACE {
            // len + 1 < ARGC_MAX, so there is room for this token and the last one
            let _ = argv.push(&line[start..i]);
            start = i + 1;
        }
    }
    let _ = argv.push(&line[start..]);

    argv
}

/// Run the command selected by the first character of `line`.
///
/// When no command matches, `"<trigger>: no such command\r\n"` is sent
/// through `console`. An empty line looks up [`ASCII_NUL`], which never
/// matches, so it is reported as `"\0: no such command\r\n"`.
///
/// # Arguments
///
/// * `line` - Completed line, trigger character first
/// * `commands` - Command table, searched from the first entry
/// * `console` - Output handed to the handler
///
/// # Returns
///
/// * `Ok(status)` - The matching handler ran and returned `status`
/// * [`DispatchError::CommandNotFound`] - No entry matches the trigger
pub fn dispatch<'a>(
    line: &str,
    commands: &'a [CommandEntry],
    mut console: Console<'a>,
) -> DispatchResult {
    let trigger = line.chars().next().unwrap_or(ASCII_NUL);

    let Some(entry) = lookup(commands, trigger) else {
        #[cfg(feature = "defmt")]
        defmt::debug!("no command for trigger {=char}", trigger);
        if let Err(_err) = console.print(format_args!("{}: no such command\r\n", trigger)) {
            #[cfg(feature = "defmt")]
            defmt::warn!("failed to report unknown command: {}", _err);
        }
        return Err(DispatchError::CommandNotFound);
    };

    let argv = tokenize(line);
    let mut session = Session::new(commands, console);
    Ok(entry.handler.call(&mut session, argv.len(), &argv))
}
