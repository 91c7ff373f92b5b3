use clap::{CommandFactory, Parser};
use clap_complete::CompleteEnv;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use pkgtag::cli::args::Cli;
use pkgtag::cli::commands::execute_command;
use pkgtag::cli::{output, CliResult};
use pkgtag::config::Settings;
use pkgtag::infrastructure::ServiceContainer;

fn main() {
    // Answers shell completion requests (COMPLETE=<shell>) and exits.
    CompleteEnv::with_factory(Cli::command).complete();

    let cli = Cli::parse();

    setup_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        if !e.is_reported() {
            output::error(&e);
        }
        std::process::exit(e.exit_code());
    }
}

fn run(cli: &Cli) -> CliResult<()> {
    let mut settings = Settings::load()?;
    if let Some(path) = &cli.database {
        settings = settings.with_database_path(path.clone());
    }
    tracing::debug!("database: {}", settings.database_path.display());

    let container = ServiceContainer::new(settings);
    execute_command(cli, &container)
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // RUST_LOG wins when set, otherwise -v decides
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    match level {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}
