//! Version subcommand: reports build metadata through the info sink

use std::fmt;

use clap::{Arg, ArgAction, Command};

use crate::cli::command::CommandSpec;
use crate::cli::root::BIN_NAME;

/// Build metadata compiled into the binary. Commit and date come from the
/// optional `CONFGEN_GIT_SHA` / `CONFGEN_BUILD_DATE` build environment.
pub struct BuildInfo {
    pub version: &'static str,
    pub commit: Option<&'static str>,
    pub build_date: Option<&'static str>,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            commit: option_env!("CONFGEN_GIT_SHA"),
            build_date: option_env!("CONFGEN_BUILD_DATE"),
        }
    }

    /// Bare version number
    pub fn short(&self) -> &str {
        self.version
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", BIN_NAME, self.version)?;
        match (self.commit, self.build_date) {
            (Some(commit), Some(date)) => write!(f, " ({commit} {date})"),
            (Some(commit), None) => write!(f, " ({commit})"),
            (None, Some(date)) => write!(f, " (built {date})"),
            (None, None) => Ok(()),
        }
    }
}

/// The self-describing version subcommand, attachable to any root command.
pub fn command() -> CommandSpec {
    let cmd = Command::new("version")
        .about("Print version and build metadata")
        .arg(
            Arg::new("short")
                .short('s')
                .long("short")
                .action(ArgAction::SetTrue)
                .help("Version number only"),
        );

    CommandSpec::new(cmd, |_, matches, sinks| {
        let info = BuildInfo::current();
        if matches.get_flag("short") {
            sinks.info(info.short());
        } else {
            sinks.info(info.to_string());
        }
        Ok(())
    })
}
