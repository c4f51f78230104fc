//! Interactive converter REPL
//!
//! Each line is one trigger against a single [`Converter`]:
//! `dec|hex|bin|ascii <text>` converts, `clear` resets, `copy` and
//! `literal` print the clipboard text, `show` prints the panes.

use anyhow::{Context, Result};
use byte_codec::{Converter, Outcome, Trigger};
use colored::*;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Editor, Helper};

use crate::config::PaneSelection;
use crate::output;

const COMMANDS: [&str; 10] = [
    "dec", "hex", "bin", "ascii", "clear", "copy", "literal", "show", "help", "quit",
];

/// A parsed REPL line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Converter trigger with the text after the command word
    Trigger(Trigger, String),
    Show,
    Help,
    Quit,
    Unknown(String),
}

/// Parse one non-empty line
///
/// The text after the command word is kept verbatim apart from the single
/// separating whitespace, so ASCII input keeps its inner spacing.
pub fn parse_command(line: &str) -> ReplCommand {
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

    match word.to_lowercase().as_str() {
        "show" => return ReplCommand::Show,
        "help" | "?" => return ReplCommand::Help,
        "quit" | "exit" | "q" => return ReplCommand::Quit,
        _ => {},
    }

    match Trigger::from_str(word) {
        Some(trigger) => ReplCommand::Trigger(trigger, rest.to_string()),
        None => ReplCommand::Unknown(word.to_string()),
    }
}

// ============================================================================
// Tab Completion Helper
// ============================================================================

/// REPL helper providing Tab completion for command words
struct ByteconvHelper;

impl Helper for ByteconvHelper {}

impl Hinter for ByteconvHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &rustyline::Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for ByteconvHelper {}

impl Validator for ByteconvHelper {}

impl Completer for ByteconvHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        // Only the command word is completed
        if line.contains(' ') {
            return Ok((pos, vec![]));
        }

        Ok(complete_command(line))
    }
}

fn complete_command(prefix: &str) -> (usize, Vec<Pair>) {
    let prefix_lower = prefix.to_lowercase();

    let matches: Vec<Pair> = COMMANDS
        .iter()
        .filter(|cmd| cmd.starts_with(&prefix_lower))
        .map(|cmd| Pair {
            display: (*cmd).to_string(),
            replacement: (*cmd).to_string(),
        })
        .collect();

    (0, matches)
}

// ============================================================================
// REPL Loop
// ============================================================================

/// Interactive REPL loop
pub fn run_repl(panes: &PaneSelection) -> Result<()> {
    let config = rustyline::Config::builder()
        .completion_type(rustyline::CompletionType::List)
        .build();
    let mut rl = Editor::with_config(config).context("Failed to initialize readline")?;
    rl.set_helper(Some(ByteconvHelper));

    println!("{}", "byteconv interactive converter".bright_cyan().bold());
    println!(
        "Type '{}' for commands, {} for completion\n",
        "help".bright_yellow(),
        "Tab".bright_cyan()
    );

    let mut converter = Converter::new();

    loop {
        match rl.readline("byteconv> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                // Add to history (ignore errors)
                let _ = rl.add_history_entry(line);

                let (message, keep_going) = execute(&mut converter, parse_command(line), panes);
                if !message.is_empty() {
                    println!("{}", message);
                }
                if !keep_going {
                    break;
                }
            },
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C - ignore and continue
                println!("^C");
                continue;
            },
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{} {}", "Readline error:".red(), e);
                break;
            },
        }
    }

    println!("Bye!");
    Ok(())
}

/// Run one command against the converter
///
/// Returns the text to print and whether the loop continues.
pub fn execute(
    converter: &mut Converter,
    command: ReplCommand,
    panes: &PaneSelection,
) -> (String, bool) {
    match command {
        ReplCommand::Trigger(trigger, text) => (describe(converter, trigger, &text), true),
        ReplCommand::Show => (output::conversion_text(converter.rendered(), panes), true),
        ReplCommand::Help => (help_text(), true),
        ReplCommand::Quit => (String::new(), false),
        ReplCommand::Unknown(word) => (
            format!(
                "Unknown command '{}'. Type '{}' for available commands.",
                word.red(),
                "help".bright_yellow()
            ),
            true,
        ),
    }
}

fn describe(converter: &mut Converter, trigger: Trigger, text: &str) -> String {
    match converter.dispatch(trigger, text) {
        Outcome::Converted { .. } => output::fields_text(converter.rendered()),
        Outcome::Rejected(e) => format!(
            "{} {}",
            format!("[{}]", e.encoding().short_name()).red().bold(),
            e
        ),
        Outcome::Cleared => "Cleared".green().to_string(),
        Outcome::Copied(Some(text)) => text,
        Outcome::Copied(None) => "(nothing to copy)".dimmed().to_string(),
    }
}

fn help_text() -> String {
    let rows = [
        ("dec <text>", "Convert decimal bytes, e.g. dec 72 105"),
        ("hex <text>", "Convert hex bytes, e.g. hex 0x48 69"),
        ("bin <text>", "Convert binary bytes, e.g. bin 0b1 10"),
        ("ascii <text>", "Convert text, one byte per character"),
        ("clear", "Reset every field and pane"),
        ("copy", "Print the DEC/HEX/BIN/ASCII report"),
        ("literal", "Print the C array literal"),
        ("show", "Print fields and inspection panes"),
        ("help", "Show this help"),
        ("quit", "Exit"),
    ];

    let mut out = format!("{}\n", "Commands:".bright_cyan().bold());
    for (cmd, desc) in rows {
        out.push_str(&format!("  {:<14} {}\n", cmd, desc));
    }
    out.trim_end().to_string()
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use byte_codec::Encoding;

    #[test]
    fn test_parse_command() {
        let test_cases = [
            (
                "hex 0x48 69",
                ReplCommand::Trigger(Trigger::Convert(Encoding::Hexadecimal), "0x48 69".into()),
            ),
            (
                "ascii  two  spaces",
                ReplCommand::Trigger(Trigger::Convert(Encoding::Ascii), " two  spaces".into()),
            ),
            (
                "DEC",
                ReplCommand::Trigger(Trigger::Convert(Encoding::Decimal), String::new()),
            ),
            ("clear", ReplCommand::Trigger(Trigger::Clear, String::new())),
            ("copy", ReplCommand::Trigger(Trigger::CopyAll, String::new())),
            (
                "literal",
                ReplCommand::Trigger(Trigger::CopyLiteral, String::new()),
            ),
            ("show", ReplCommand::Show),
            ("?", ReplCommand::Help),
            ("exit", ReplCommand::Quit),
            ("paste 1", ReplCommand::Unknown("paste".into())),
        ];

        for (line, expected) in test_cases {
            assert_eq!(parse_command(line), expected, "Failed for line: {}", line);
        }
    }

    #[test]
    fn test_execute_session() {
        colored::control::set_override(false);
        let panes = PaneSelection::default();
        let mut converter = Converter::new();

        let (out, keep_going) = execute(&mut converter, parse_command("dec 0 255 16"), &panes);
        assert!(keep_going);
        assert!(out.contains("HEX:   00 FF 10"));
        assert!(out.contains("CRC-8 (dec): 167"));

        let (out, _) = execute(&mut converter, parse_command("bin 2"), &panes);
        assert!(out.starts_with("[bin] invalid binary input"));
        assert_eq!(converter.bytes(), &[0, 255, 16]);

        let (out, _) = execute(&mut converter, parse_command("literal"), &panes);
        assert_eq!(out, "uint8_t data[] = { 0x00, 0xFF, 0x10 };");

        let (out, _) = execute(&mut converter, parse_command("clear"), &panes);
        assert_eq!(out, "Cleared");
        assert!(converter.bytes().is_empty());

        let (_, keep_going) = execute(&mut converter, parse_command("quit"), &panes);
        assert!(!keep_going);
    }

    #[test]
    fn test_show_lists_panes() {
        colored::control::set_override(false);
        let mut converter = Converter::new();
        converter.convert(Encoding::Decimal, "1 2 3 4").unwrap();

        let (out, _) = execute(&mut converter, ReplCommand::Show, &PaneSelection::default());
        assert!(out.contains("[0/1] LE:513 BE:258"));
        assert!(out.contains("Byte 0: 00000001  (7..0)"));
    }

    #[test]
    fn test_complete_command() {
        let (start, matches) = complete_command("c");
        assert_eq!(start, 0);
        let names: Vec<&str> = matches.iter().map(|p| p.replacement.as_str()).collect();
        assert_eq!(names, vec!["clear", "copy"]);

        let (_, matches) = complete_command("");
        assert_eq!(matches.len(), COMMANDS.len());
    }
}
