//! Shell completion generation for the assembled command tree

use std::io;

use clap::{value_parser, Arg, Command};
use clap_complete::{generate, Shell};

use crate::cli::command::CommandSpec;
use crate::cli::error::CliError;

/// The completion subcommand. Generates against the root command it is
/// dispatched from, so completions always reflect the tree as composed.
pub fn command() -> CommandSpec {
    let cmd = Command::new("completion")
        .about("Generate shell completions")
        .arg(
            Arg::new("shell")
                .required(true)
                .value_parser(value_parser!(Shell))
                .help("Shell type"),
        );

    CommandSpec::new(cmd, |root, matches, _sinks| {
        let shell = matches
            .get_one::<Shell>("shell")
            .copied()
            .ok_or_else(|| CliError::Usage("shell argument required".into()))?;

        let bin_name = root.get_name().to_string();
        generate(shell, root, bin_name, &mut io::stdout());
        Ok(())
    })
}
