//! Terminal output formatting with colors, and the injectable output sinks
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use std::sync::Arc;

use colored::Colorize;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print warning (yellow "Warning:" prefix) to stderr
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Print plain output (no color, for data/help text)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// A line-oriented output capability.
pub type SinkFn = Arc<dyn Fn(&str) + Send + Sync>;

/// The two formatting capabilities injected into the command tree:
/// informational output and fatal-error output. Cloning shares the
/// underlying sinks, so a test harness can keep a handle on what the
/// tree writes.
#[derive(Clone)]
pub struct OutputSinks {
    info: SinkFn,
    fatal: SinkFn,
}

impl OutputSinks {
    pub fn new(info: SinkFn, fatal: SinkFn) -> Self {
        Self { info, fatal }
    }

    /// Sinks backed by the process's standard streams.
    pub fn stdio() -> Self {
        Self::new(Arc::new(|msg| info(msg)), Arc::new(|msg| error(msg)))
    }

    /// Write an informational line.
    pub fn info(&self, msg: impl AsRef<str>) {
        (self.info)(msg.as_ref());
    }

    /// Write a fatal-error line. Termination is the launcher's decision,
    /// not the sink's.
    pub fn fatal(&self, msg: impl AsRef<str>) {
        (self.fatal)(msg.as_ref());
    }
}

impl Default for OutputSinks {
    fn default() -> Self {
        Self::stdio()
    }
}
