use decomment_core::{
    CliArgs, Command as CoreCommand, CoreError, LANGUAGES, ProcessOutcome, check_dependencies,
    process_file,
};
mod interaction;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use console::style;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn print_completions_cli(shell: clap_complete::Shell) {
    let mut cmd = CliArgs::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
}

fn init_logging(verbose: bool) {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) if verbose => EnvFilter::new("debug"),
        Err(_) => EnvFilter::new("warn"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn marker_or_dash(marker: &str) -> &str {
    if marker.is_empty() { "-" } else { marker }
}

fn print_languages() {
    println!(
        "{:<10} {:<6} {:<8} {:<6} extensions",
        "language", "line", "start", "end"
    );
    for grammar in LANGUAGES {
        println!(
            "{:<10} {:<6} {:<8} {:<6} {}",
            style(grammar.name).cyan(),
            marker_or_dash(grammar.single_line),
            marker_or_dash(grammar.block_start),
            marker_or_dash(grammar.block_end),
            style(grammar.extensions.join(" ")).dim()
        );
    }
}

fn main() -> Result<ExitCode> {
    let cli: CliArgs = CliArgs::parse();

    if let Some(command_enum_val) = cli.command {
        match command_enum_val {
            CoreCommand::Completion(args) => {
                print_completions_cli(args.shell);
                return Ok(ExitCode::SUCCESS);
            }
        }
    }

    let main_app_args = cli.main_opts;
    init_logging(main_app_args.verbose);

    if main_app_args.list_languages {
        print_languages();
        return Ok(ExitCode::SUCCESS);
    }

    if main_app_args.check_dependencies {
        match check_dependencies() {
            Ok(_) => return Ok(ExitCode::SUCCESS),
            Err(e) => {
                eprintln!("{}", style(format!("Dependency Check Error: {}", e)).red());
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    let Some(path) = main_app_args.path.as_deref() else {
        CliArgs::command().print_help()?;
        return Ok(ExitCode::FAILURE);
    };

    let options = main_app_args.strip_options();
    tracing::debug!(path = %path.display(), ?options, "processing file");
    let mut confirmer = interaction::PromptConfirmer;

    match process_file(path, &options, &mut confirmer) {
        Ok(ProcessOutcome::NoComments) => {
            println!("No comments found in {}.", style(path.display()).dim());
        }
        Ok(ProcessOutcome::Replaced { path }) => {
            println!(
                "{} File successfully replaced: {}",
                style("✓").green(),
                path.display()
            );
        }
        Ok(ProcessOutcome::Kept { path }) => {
            println!("Original left untouched: {}", style(path.display()).dim());
        }
        Err(e @ CoreError::UnsupportedFileType { .. }) => {
            eprintln!("{}", style(e).red());
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => {
            eprintln!("{}", style(format!("Error: {}", e)).red());
            return Ok(ExitCode::FAILURE);
        }
    }

    Ok(ExitCode::SUCCESS)
}
