//! Interactive session over the same subcommands as the CLI.
//!
//! One [`Container`] lives for the whole session, so a `--memory-storage`
//! store keeps its collections between commands.

use anyhow::Result;
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::cli::Commands;
use crate::connector::api::{Container, Router};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "qdrant", no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: Commands,
}

/// What the shell should do with one input line.
#[derive(Debug, PartialEq)]
pub enum ShellInput {
    Empty,
    Quit,
    Command(Commands),
    Invalid(String),
}

pub fn parse_line(line: &str) -> ShellInput {
    let line = line.trim();
    if line.is_empty() {
        return ShellInput::Empty;
    }
    if matches!(line, "quit" | "exit" | ".quit" | ".exit") {
        return ShellInput::Quit;
    }

    let args = match split_args(line) {
        Ok(args) => args,
        Err(e) => return ShellInput::Invalid(e),
    };

    match ShellLine::try_parse_from(args) {
        Ok(parsed) => ShellInput::Command(parsed.command),
        Err(e) => ShellInput::Invalid(e.to_string()),
    }
}

/// POSIX shell word splitting, so quoted paths with spaces survive.
fn split_args(line: &str) -> Result<Vec<String>, String> {
    shlex::split(line).ok_or_else(|| "Unbalanced quotes or trailing backslash".to_string())
}

pub async fn run(container: &Container) -> Result<()> {
    println!("qdrant-admin v{} shell", VERSION);
    println!("Target: {}", container.target());
    println!("Type 'help' for commands, 'quit' to exit\n");

    let router = Router::new(container);
    let mut rl = DefaultEditor::new()?;

    loop {
        match rl.readline("qdrant> ") {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());

                match parse_line(&line) {
                    ShellInput::Empty => continue,
                    ShellInput::Quit => break,
                    ShellInput::Invalid(message) => println!("{}", message.trim_end()),
                    ShellInput::Command(Commands::Shell) => {
                        println!("Already in a shell session");
                    }
                    ShellInput::Command(command) => match router.route(command).await {
                        Ok(output) => println!("{}\n", output),
                        Err(e) => println!("Error: {:#}\n", e),
                    },
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("Use 'quit' to exit");
            }
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::IdStrategyArg;
    use std::path::PathBuf;

    #[test]
    fn test_split_args_handles_quotes() {
        let args = split_args(r#"index docs "my files/report 2024.pdf""#).unwrap();
        assert_eq!(args, vec!["index", "docs", "my files/report 2024.pdf"]);
    }

    #[test]
    fn test_split_args_keeps_empty_quoted_word() {
        let args = split_args(r#"create """#).unwrap();
        assert_eq!(args, vec!["create", ""]);
    }

    #[test]
    fn test_split_args_handles_escapes() {
        let args = split_args(r#"index docs my\ report.pdf "say \"hi\".pdf""#).unwrap();
        assert_eq!(args, vec!["index", "docs", "my report.pdf", r#"say "hi".pdf"#]);
    }

    #[test]
    fn test_split_args_rejects_open_quote() {
        assert!(split_args("create 'docs").is_err());
    }

    #[test]
    fn test_parse_line_builds_index_command() {
        let input = parse_line("index docs ./a.pdf --ids uuid");
        assert_eq!(
            input,
            ShellInput::Command(Commands::Index {
                collection: "docs".to_string(),
                pdf: PathBuf::from("./a.pdf"),
                ids: IdStrategyArg::Uuid,
            })
        );
    }

    #[test]
    fn test_parse_line_quit_and_empty() {
        assert_eq!(parse_line("   "), ShellInput::Empty);
        assert_eq!(parse_line("exit"), ShellInput::Quit);
    }

    #[test]
    fn test_parse_line_accepts_alias() {
        assert_eq!(
            parse_line("test-connection"),
            ShellInput::Command(Commands::Check)
        );
    }

    #[test]
    fn test_parse_line_unknown_command_is_invalid() {
        assert!(matches!(parse_line("frobnicate"), ShellInput::Invalid(_)));
    }
}
