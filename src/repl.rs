use crate::command::{Jukebox, OPERATIONS};
use anyhow::Result;
use rustyline::{
    completion::Completer, error::ReadlineError, highlight::Highlighter, history::FileHistory,
    validate::Validator, CompletionType, Config, Editor, Helper,
};

/// Interactive session: same grammar and outputs as script mode, plus
/// keyword completion and history. `exit` or Ctrl-D leaves the loop.
pub fn run_repl(jukebox: &mut Jukebox, prompt: &str) -> Result<()> {
    let config = Config::builder()
        .completion_type(CompletionType::List)
        .build();
    let mut rl = Editor::<OperationsHelper, FileHistory>::with_config(config)?;
    rl.set_helper(Some(OperationsHelper::new()));

    loop {
        match rl.readline(prompt) {
            Ok(line) => {
                if line.trim().eq_ignore_ascii_case("exit") {
                    break;
                }
                let _ = rl.add_history_entry(&line);
                println!("{}", jukebox.execute_line(&line));
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

#[derive(rustyline_derive::Hinter)]
pub struct OperationsHelper {
    operations: Vec<String>,
}

impl OperationsHelper {
    fn new() -> Self {
        OperationsHelper {
            operations: OPERATIONS.iter().map(|op| op.to_string()).collect(),
        }
    }
}

impl Completer for OperationsHelper {
    type Candidate = String;

    // Only the leading keyword completes; arguments are ids and titles the
    // helper knows nothing about.
    fn complete(
        &self,
        line: &str,
        _pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        if line.contains(' ') {
            return Ok((0, Vec::with_capacity(0)));
        }
        let matches = self
            .operations
            .iter()
            .filter(|operation| operation.starts_with(line))
            .map(|operation| operation.to_string())
            .collect::<Vec<_>>();

        Ok((0, matches))
    }
}

impl Highlighter for OperationsHelper {}
impl Validator for OperationsHelper {}
impl Helper for OperationsHelper {}
