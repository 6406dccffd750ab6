//! Launcher orchestration: build the tree, attach the version subcommand,
//! execute, and compute the exit intent.

use crate::cli::output::OutputSinks;
use crate::cli::root::RootCmd;
use crate::cli::version;
use crate::exitcode;

/// Produces a runnable root command from an argument vector and output
/// sinks. Implemented by [`crate::cli::root::build_root_cmd`] and by test
/// doubles.
pub trait RootBuilder {
    fn build(self, args: Vec<String>, sinks: OutputSinks) -> RootCmd;
}

impl<F> RootBuilder for F
where
    F: FnOnce(Vec<String>, OutputSinks) -> RootCmd,
{
    fn build(self, args: Vec<String>, sinks: OutputSinks) -> RootCmd {
        self(args, sinks)
    }
}

/// Run the CLI and compute the process exit code. The caller applies it;
/// nothing below this frame terminates the process. Failures are rendered
/// once through the fatal sink and collapse to a single sentinel code.
pub fn run(builder: impl RootBuilder, args: Vec<String>, sinks: OutputSinks) -> i32 {
    let mut root = builder.build(args, sinks.clone());
    root.add_command(version::command());

    match root.execute() {
        Ok(()) => exitcode::OK,
        Err(e) => {
            sinks.fatal(e.to_string());
            exitcode::FAILURE
        }
    }
}
