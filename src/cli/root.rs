//! Root command tree: assembly, registration, and execution
//!
//! Construction never fails the process; argument parsing is deferred to
//! [`RootCmd::execute`].

use std::collections::HashMap;

use clap::error::ErrorKind;
use clap::{ArgMatches, Command};
use tracing::debug;

use crate::cli::command::{CommandRunner, CommandSpec};
use crate::cli::completion;
use crate::cli::error::{CliError, CliResult};
use crate::cli::output::OutputSinks;

pub const BIN_NAME: &str = "confgen";

/// The command-tree handle: owns the clap tree, the runner for each
/// registered subcommand, the raw argument vector, and the output sinks.
pub struct RootCmd {
    cmd: Command,
    runners: HashMap<String, CommandRunner>,
    args: Vec<String>,
    sinks: OutputSinks,
}

impl RootCmd {
    /// Bare root command with no subcommands registered yet. `args` is the
    /// argument vector excluding the program name.
    pub fn new(args: Vec<String>, sinks: OutputSinks) -> Self {
        let cmd = Command::new(BIN_NAME)
            .version(env!("CARGO_PKG_VERSION"))
            .about("Composable front end for configuration tooling")
            .subcommand_required(false);

        Self {
            cmd,
            runners: HashMap::new(),
            args,
            sinks,
        }
    }

    /// Attach a subcommand. Purely additive: previously registered
    /// subcommands and their runners are untouched.
    pub fn add_command(&mut self, spec: CommandSpec) {
        let CommandSpec { cmd, run } = spec;
        let name = cmd.get_name().to_string();
        let root = std::mem::replace(&mut self.cmd, Command::new(BIN_NAME));
        self.cmd = root.subcommand(cmd);
        self.runners.insert(name, run);
    }

    pub fn command(&self) -> &Command {
        &self.cmd
    }

    pub fn subcommand_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.cmd.get_subcommands().map(Command::get_name)
    }

    /// Parse the stored argument vector and dispatch the selected
    /// subcommand. Help and version requests are informational output and
    /// count as success; an empty vector renders root help.
    pub fn execute(mut self) -> CliResult<()> {
        let argv = std::iter::once(BIN_NAME.to_string()).chain(std::mem::take(&mut self.args));

        match self.cmd.clone().try_get_matches_from(argv) {
            Ok(matches) => self.dispatch(&matches),
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                self.sinks.info(e.to_string().trim_end());
                Ok(())
            }
            Err(e) => Err(CliError::Usage(usage_message(&e))),
        }
    }

    fn dispatch(&mut self, matches: &ArgMatches) -> CliResult<()> {
        match matches.subcommand() {
            Some((name, sub)) => {
                debug!("dispatching subcommand: {name}");
                let run = self
                    .runners
                    .remove(name)
                    .ok_or_else(|| CliError::Usage(format!("no runner registered for '{name}'")))?;
                run(&mut self.cmd, sub, &self.sinks)
            }
            None => {
                let help = self.cmd.render_long_help();
                self.sinks.info(help.to_string().trim_end());
                Ok(())
            }
        }
    }
}

/// Assemble the tool's root command with its own subcommands. The version
/// subcommand is attached later by the launcher.
pub fn build_root_cmd(args: Vec<String>, sinks: OutputSinks) -> RootCmd {
    let mut root = RootCmd::new(args, sinks);
    root.add_command(completion::command());
    root
}

// clap prefixes rendered errors with "error: "; the fatal sink adds its own.
fn usage_message(e: &clap::Error) -> String {
    let rendered = e.to_string();
    rendered
        .strip_prefix("error: ")
        .map(str::to_string)
        .unwrap_or(rendered)
}
