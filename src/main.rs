// std imports
use std::collections::VecDeque;
use std::io::{Read, Write, stdin, stdout};
use std::path::PathBuf;
use std::process::exit;
// library imports
use indoc::indoc;
use thiserror::Error;
use tracing_subscriber::EnvFilter;
// our imports
use prs::arith;
use prs::repl::{ShouldStop, repl};

const USAGE: &str = indoc! {r"
    USAGE:
        prs <file>
        prs -
        prs repl

    Calling `prs <file>` evaluates every non-blank line of the file as an arithmetic
    expression and prints the results. Calling `prs -` is the same as calling with a named
    file, but reads the contents from stdin instead of a file. Calling `prs repl` starts a
    Read-Eval-Print loop; enter `q` to leave it.

    Set RUST_LOG (for example RUST_LOG=prs=trace) to see what the parsers are doing.
"};

#[derive(Debug, Error)]
enum Error {
    #[error("{0}")]
    Parse(#[from] prs::Error),
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq)]
struct MainConfig {
    command: Command,
    executable_name: String,
    help_flag: bool,
}

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Stdin,
    File(PathBuf),
    Repl,
    Error(Vec<String>),
}

impl MainConfig {
    pub fn new(mut args: VecDeque<String>) -> Self {
        let executable_name = args.pop_front().unwrap_or_else(|| "prs".to_string());
        let mut help_flag = false;
        args.retain(|arg| {
            let is_help_flag = arg == "--help" || arg == "-h";
            help_flag |= is_help_flag;
            !is_help_flag
        });
        let command = match &args.iter().map(|x| x.as_str()).collect::<Vec<_>>()[..] {
            ["-"] => Command::Stdin,
            ["repl"] => Command::Repl,
            [file] => Command::File(file.into()),
            _ => Command::Error(args.into()),
        };
        Self {
            command,
            executable_name,
            help_flag,
        }
    }
}

fn run_line(line: &str) -> Result<i64> {
    Ok(arith::eval(line)?)
}

/// Evaluate every non-blank line. Returns whether all of them succeeded.
fn run_text(text: &str) -> bool {
    let mut all_ok = true;
    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match run_line(line) {
            Ok(value) => println!("{value}"),
            Err(err) => {
                eprintln!("Error on line {}: {err}", index + 1);
                all_ok = false;
            }
        }
    }
    all_ok
}

fn repl_step(line: &str, evaluated: &mut usize, output: &mut impl Write) -> Result<ShouldStop> {
    if line.trim() == "q" {
        return Ok(true);
    }
    if line.trim().is_empty() {
        return Ok(false);
    }
    if let Some(value) = log_error(run_line(line)) {
        writeln!(output, "{value}")?;
        *evaluated += 1;
    }
    Ok(false)
}

fn log_error<T, E: std::fmt::Display>(res: Result<T, E>) -> Option<T> {
    match res {
        Ok(value) => Some(value),
        Err(err) => {
            eprintln!("Error: {err}");
            None
        }
    }
}

fn handle_error<T, E: std::fmt::Display>(res: Result<T, E>) -> T {
    match res {
        Ok(value) => value,
        Err(err) => {
            eprintln!("Error: {err}");
            exit(1);
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = MainConfig::new(std::env::args().collect());
    tracing::debug!(?config, "starting");

    if config.help_flag {
        println!("{USAGE}");
        exit(0);
    }

    let all_ok = match config.command {
        Command::Stdin => {
            let mut text = String::new();
            handle_error(stdin().read_to_string(&mut text).map_err(Error::from));
            run_text(&text)
        }
        Command::File(path_buf) => {
            let text = std::fs::read_to_string(&path_buf).unwrap_or_else(|err| {
                let path = path_buf.display();
                eprintln!("Error: could not read the file '{path}'.");
                eprintln!("IO Error: {err}");
                exit(1);
            });
            run_text(&text)
        }
        Command::Repl => {
            let evaluated = handle_error(repl(&mut stdin().lock(), &mut stdout(), 0, repl_step));
            tracing::debug!(evaluated, "repl finished");
            true
        }
        Command::Error(items) => {
            let items = items.join("\n");
            eprintln!("Error: {} could not understand the command", config.executable_name);
            eprintln!("Alien arguments: {items}");
            eprintln!("{USAGE}");
            exit(1);
        }
    };

    if !all_ok {
        exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(args: &[&str]) -> MainConfig {
        MainConfig::new(args.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn commands() {
        assert_eq!(config(&["prs", "-"]).command, Command::Stdin);
        assert_eq!(config(&["prs", "repl"]).command, Command::Repl);
        assert_eq!(config(&["prs", "sums.txt"]).command, Command::File("sums.txt".into()));
        assert_eq!(
            config(&["prs", "a", "b"]).command,
            Command::Error(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn help_flag_anywhere() {
        let c = config(&["prs", "--help", "repl"]);
        assert!(c.help_flag);
        assert_eq!(c.command, Command::Repl);
        assert!(config(&["prs", "repl", "-h"]).help_flag);
        assert!(!config(&["prs", "repl"]).help_flag);
    }

    #[test]
    fn repl_step_evaluates_lines() {
        let mut evaluated = 0;
        let mut output = Vec::new();
        assert!(!repl_step("1 + 2", &mut evaluated, &mut output).unwrap());
        assert!(!repl_step("1 +", &mut evaluated, &mut output).unwrap());
        assert!(repl_step("q", &mut evaluated, &mut output).unwrap());
        assert_eq!(evaluated, 1);
        assert_eq!(String::from_utf8(output).unwrap(), "3\n");
    }
}
