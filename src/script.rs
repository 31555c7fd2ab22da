use crate::command::Jukebox;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Runs every line of a command script through the dispatcher, writing one
/// output block per line to the sink. Lines are processed in file order; a
/// failing command only affects its own output. The sink can be anything
/// writable, the runner knows nothing of its destination.
pub fn run_script<W: Write>(
    jukebox: &mut Jukebox,
    path: &Path,
    out: &mut W,
    echo_commands: bool,
) -> Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read command script {}", path.display()))?;

    let mut commands_count = 0;
    for line in text.lines() {
        if echo_commands {
            writeln!(out, ">> {}", line)?;
        }
        writeln!(out, "{}", jukebox.execute_line(line))?;
        commands_count += 1;
    }
    info!(
        "Executed {} commands from {}",
        commands_count,
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_lines(lines: &str, echo_commands: bool) -> String {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        std::fs::write(&path, lines).unwrap();

        let mut jukebox = Jukebox::new();
        let mut out = Vec::new();
        run_script(&mut jukebox, &path, &mut out, echo_commands).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn each_line_produces_one_output_block() {
        let output = run_lines("CREATE-USER Kiran\nCREATE-USER Viraj\n", false);

        assert_eq!(output, "1 Kiran\n2 Viraj\n");
    }

    #[test]
    fn invalid_lines_do_not_stop_the_run() {
        let output = run_lines("DANCE\n\nCREATE-USER Kiran\n", false);

        assert_eq!(output, "Invalid Operation\nInvalid Operation\n1 Kiran\n");
    }

    #[test]
    fn echo_mode_prefixes_each_command() {
        let output = run_lines("CREATE-USER Kiran\n", true);

        assert_eq!(output, ">> CREATE-USER Kiran\n1 Kiran\n");
    }

    #[test]
    fn missing_script_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut jukebox = Jukebox::new();
        let mut out = Vec::new();

        assert!(run_script(&mut jukebox, &dir.path().join("nope.txt"), &mut out, false).is_err());
    }
}
