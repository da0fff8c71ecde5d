use crate::command_runner::DIFF;
use anyhow::Result;
use std::process::Command;

pub struct ToolInfo {
    pub name: &'static str,
    pub check_command: &'static [&'static str],
    pub install_hint: &'static str,
    pub purpose: &'static str,
}

const TOOLS: &[ToolInfo] = &[ToolInfo {
    name: DIFF,
    check_command: &[DIFF, "--version"],
    install_hint: "Install GNU diffutils (e.g., 'sudo apt install diffutils', 'brew install diffutils')",
    purpose: "reviewing changes before replacing a file",
}];

fn check_tool_command(command_parts: &[&str]) -> bool {
    if command_parts.is_empty() {
        return false;
    }
    Command::new(command_parts[0])
        .args(&command_parts[1..])
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .is_ok_and(|status| status.success())
}

fn check_single_tool(tool: &ToolInfo) -> (bool, String) {
    let found = check_tool_command(tool.check_command);
    let message = if found {
        format!("{} ({}): OK", tool.name, tool.purpose)
    } else {
        format!("{} ({}): Not found. {}", tool.name, tool.purpose, tool.install_hint)
    };
    (found, message)
}

pub fn check_dependencies() -> Result<()> {
    println!("Checking dependencies:");
    let mut all_ok = true;

    for tool in TOOLS {
        let (found, message) = check_single_tool(tool);
        println!("  {}", message);
        if !found {
            all_ok = false;
        }
    }

    if !all_ok {
        anyhow::bail!("One or more required tools are missing.");
    }
    println!("All checked dependencies seem satisfied.");
    Ok(())
}
