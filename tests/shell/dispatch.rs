use minishell::Session;
use minishell::dispatch::{ARGC_MAX, tokenize};
use minishell::error::DispatchError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::mock::*;

fn fails(_session: &mut Session<'_>, _argc: usize, _argv: &[&str]) -> i32 {
    -7
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_trigger_reports_no_such_command() {
        let mut shell = shell_with_input(b"");
        shell.register('a', &capture, "Add").unwrap();

        let results = feed_all(&mut shell, b"x\r");

        assert_eq!(results, [Err(DispatchError::CommandNotFound)]);
        assert!(captured().is_empty());
        assert_eq!(shell.transport().output(), "x\r\n:x\r\nx: no such command\r\n");
    }

    #[test]
    fn test_unknown_trigger_with_arguments() {
        let mut shell = shell_with_input(b"");

        assert_eq!(shell.dispatch("zap 1 2"), Err(DispatchError::CommandNotFound));
        assert_eq!(shell.transport().output(), "z: no such command\r\n");
    }

    #[test]
    fn test_lookup_uses_only_the_first_character() {
        let mut shell = shell_with_input(b"");
        shell.register('s', &capture, "Status").unwrap();

        assert_eq!(shell.dispatch("status"), Ok(1));
        assert_eq!(shell.dispatch("s"), Ok(1));
        assert_eq!(shell.dispatch("S"), Err(DispatchError::CommandNotFound));

        let calls = captured();
        assert_eq!(calls[0].argv, ["status"]);
        assert_eq!(calls[1].argv, ["s"]);
    }

    #[test]
    fn test_handler_status_is_returned() {
        let mut shell = shell_with_input(b"");
        shell.register('f', &fails, "Always fails").unwrap();

        assert_eq!(shell.dispatch("f"), Ok(-7));
        assert_eq!(feed_all(&mut shell, b"f\r"), [Ok(-7)]);
    }

    #[test]
    fn test_empty_line_reports_nul_trigger() {
        let mut shell = shell_with_input(b"");
        shell.register('a', &capture, "Add").unwrap();

        assert_eq!(shell.dispatch(""), Err(DispatchError::CommandNotFound));
        assert_eq!(shell.transport_mut().take_output(), "\0: no such command\r\n");

        assert_eq!(feed_all(&mut shell, b"\r"), [Err(DispatchError::CommandNotFound)]);
        assert_eq!(shell.transport().output(), "\r\n:\r\n\0: no such command\r\n");
        assert!(captured().is_empty());
    }

    #[test]
    fn test_erased_line_reports_nul_trigger() {
        let mut shell = shell_with_input(b"");
        shell.register('a', &capture, "Add").unwrap();

        assert_eq!(feed_all(&mut shell, b"a\x08\r"), [Err(DispatchError::CommandNotFound)]);
        assert!(shell.transport().output().ends_with(":\r\n\0: no such command\r\n"));
        assert!(captured().is_empty());
    }

    #[test]
    fn test_leading_space_is_never_a_trigger() {
        let mut shell = shell_with_input(b"");
        shell.register('a', &capture, "Add").unwrap();

        assert_eq!(feed_all(&mut shell, b" a\r"), [Err(DispatchError::CommandNotFound)]);
        assert_eq!(shell.transport().output(), " a\r\n: a\r\n : no such command\r\n");
        assert!(captured().is_empty());
    }

    #[test]
    fn test_consecutive_and_trailing_spaces_are_kept() {
        let mut shell = shell_with_input(b"");
        shell.register('p', &print_args, "Print").unwrap();

        feed_all(&mut shell, b"p  a b \r");

        assert!(shell.transport().output().ends_with("[p][][a][b][]\r\n"));
    }

    #[test]
    fn test_tokens_beyond_the_bound_stay_in_the_last_argument() {
        let mut shell = shell_with_input(b"");
        shell.register('a', &capture, "Many").unwrap();

        assert_eq!(shell.dispatch("a 1 2 3 4 5 6 7 8 9"), Ok(ARGC_MAX as i32));

        let calls = captured();
        assert_eq!(calls[0].argc, ARGC_MAX);
        assert_eq!(calls[0].argv, ["a", "1", "2", "3", "4", "5", "6", "7 8 9"]);
    }

    #[test]
    fn test_random_lines_split_back_into_their_tokens() {
        const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
        let mut rng = StdRng::seed_from_u64(0x5e11);

        for _ in 0..500 {
            let count = rng.gen_range(1..=ARGC_MAX);
            let tokens: Vec<String> = (0..count)
                .map(|i| {
                    // Token 0 carries the trigger, so it is never empty.
                    let len = if i == 0 {
                        rng.gen_range(1..4)
                    } else {
                        rng.gen_range(0..4)
                    };
                    (0..len)
                        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
                        .collect::<String>()
                })
                .collect();
            let line = tokens.join(" ");

            let argv = tokenize(&line);
            assert_eq!(argv.len(), count, "line {line:?}");
            assert_eq!(argv.as_slice(), tokens.as_slice(), "line {line:?}");

            let mut shell = shell_with_input(b"");
            let trigger = line.chars().next().unwrap();
            // 'h' is already taken by help and would shadow the capture handler.
            if trigger == 'h' {
                continue;
            }
            shell.register(trigger, &capture, "Random").unwrap();
            let mut typed = line.clone().into_bytes();
            typed.push(b'\r');
            assert_eq!(feed_all(&mut shell, &typed), [Ok(count as i32)]);
            assert_eq!(captured()[0].argv, tokens);
        }
    }
}
