//! Subcommand contract: a named clap command paired with its runner

use clap::{ArgMatches, Command};

use crate::cli::error::CliResult;
use crate::cli::output::OutputSinks;

/// Executes a subcommand. Receives the root command (for introspection,
/// e.g. completion generation), the subcommand's parsed matches, and the
/// injected output sinks.
pub type CommandRunner =
    Box<dyn FnOnce(&mut Command, &ArgMatches, &OutputSinks) -> CliResult<()>>;

/// A subcommand attachable to the root command tree.
pub struct CommandSpec {
    pub cmd: Command,
    pub run: CommandRunner,
}

impl CommandSpec {
    pub fn new(
        cmd: Command,
        run: impl FnOnce(&mut Command, &ArgMatches, &OutputSinks) -> CliResult<()> + 'static,
    ) -> Self {
        Self {
            cmd,
            run: Box::new(run),
        }
    }

    pub fn name(&self) -> &str {
        self.cmd.get_name()
    }
}
