use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Command, Stdio};

pub const DIFF: &str = "diff";
const DIFF_ARGS: &[&str] = &["-u", "--color=always"];

fn run_viewer(tool: &str, base_args: &[&str], files: &[&Path]) -> Result<i32> {
    let mut cmd = Command::new(tool);
    cmd.args(base_args);
    cmd.args(files);

    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::inherit());
    cmd.stderr(Stdio::piped());

    let process = cmd
        .spawn()
        .with_context(|| format!("Failed to spawn '{}'", tool))?;

    let output = process
        .wait_with_output()
        .with_context(|| format!("'{}' failed to run", tool))?;

    output
        .status
        .code()
        .with_context(|| format!("'{}' was terminated by a signal", tool))
}

/// Prints a unified diff of `original` against `stripped` to stdout.
///
/// `diff` exits with 1 when the files differ, which is the expected case
/// here; only 2 and above are failures.
pub fn show_unified_diff(original: &Path, stripped: &Path) -> Result<()> {
    let status = run_viewer(DIFF, DIFF_ARGS, &[original, stripped])?;
    if status > 1 {
        anyhow::bail!(
            "'{}' exited with status {} comparing {} and {}",
            DIFF,
            status,
            original.display(),
            stripped.display()
        );
    }
    Ok(())
}
