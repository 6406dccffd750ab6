use std::{env, process};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use confgen::cli::output::{self, OutputSinks};
use confgen::cli::root::build_root_cmd;
use confgen::cli::run;
use confgen::config::Settings;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let settings = Settings::load(None).unwrap_or_else(|e| {
        output::warning(&format!("falling back to default settings: {e}"));
        Settings::default()
    });
    settings.color.apply();
    setup_logging(settings.log_filter.as_deref());

    process::exit(run(build_root_cmd, args, OutputSinks::stdio()));
}

fn setup_logging(default_filter: Option<&str>) {
    // RUST_LOG wins over the configured default
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter.unwrap_or("warn")))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(env_filter))
        .init();
}
