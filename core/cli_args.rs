use crate::processor::StripOptions;
use crate::source::DEFAULT_OUTPUT_SUFFIX;
use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[clap(
    version = "0.1.0",
    about = "Strip comments from a single source file (main arguments)",
    long_about = "These are the main arguments for stripping a file."
)]
pub struct DecommentArgs {
    #[clap(
        help = "Path to the source file to strip",
        required_unless_present_any = ["list_languages", "check_dependencies"]
    )]
    pub path: Option<PathBuf>,

    #[clap(short, long, help = "Replace the original without asking")]
    pub yes: bool,

    #[clap(long, help = "Do not show a diff before asking")]
    pub no_diff: bool,

    #[clap(
        long,
        value_name = "SUFFIX",
        default_value = DEFAULT_OUTPUT_SUFFIX,
        value_parser = NonEmptyStringValueParser::new(),
        help = "Suffix inserted before the extension of the stripped copy"
    )]
    pub suffix: String,

    #[clap(short, long, help = "Log debug information to stderr")]
    pub verbose: bool,

    #[clap(long, help = "List supported languages and their comment markers")]
    pub list_languages: bool,

    #[clap(long, help = "Check if required external tools are installed")]
    pub check_dependencies: bool,
}

impl DecommentArgs {
    pub fn strip_options(&self) -> StripOptions {
        StripOptions {
            suffix: self.suffix.clone(),
            show_diff: !self.no_diff,
            assume_yes: self.yes,
        }
    }
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    #[clap(about = "Generate shell completion scripts")]
    Completion(CompletionArgs),
}

#[derive(Debug, Parser, Clone)]
pub struct CompletionArgs {
    #[clap(value_parser = clap::value_parser!(clap_complete::Shell))]
    pub shell: clap_complete::Shell,
}

#[derive(Debug, Parser, Clone)]
#[clap(
    name = "decomment",
    version = "0.1.0",
    about = "Strip comments from a source file",
    long_about = "Removes comments from one source file, shows a diff of the result,\nand asks before replacing the original.",
    propagate_version = true,
    args_conflicts_with_subcommands = true,
    subcommand_negates_reqs = true
)]
pub struct CliArgs {
    #[clap(subcommand)]
    pub command: Option<Command>,

    #[clap(flatten)]
    pub main_opts: DecommentArgs,
}
