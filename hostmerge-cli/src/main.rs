mod config;

use clap::Parser;
use config::{CliInputs, RunConfig};
use hostmerge_core::adapters::{FsScanSource, HttpProjectApi};
use hostmerge_core::publish::write_unmatched_report;
use hostmerge_core::{DroneError, run_merge};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "drone-blacksheepwall",
    about = "Parses a blacksheepwall JSON file into a lair project.",
    override_usage = "drone-blacksheepwall [options] <id> <filename>\n       \
                      export LAIR_ID=<id>; drone-blacksheepwall [options] <filename>",
    disable_version_flag = true
)]
struct Cli {
    /// Show version and exit.
    #[arg(short = 'v', long = "version")]
    show_version: bool,

    /// Allow insecure SSL connections.
    #[arg(short = 'k', long = "insecure")]
    insecure: bool,

    /// Import all hosts into Lair. By default only hostnames for hosts that already exist in the
    /// project are imported.
    #[arg(long)]
    force_hosts: bool,

    /// Disable data protection in the API server for excessive ports.
    #[arg(long)]
    force_ports: bool,

    /// A comma separated list of tags to add to every host that is imported.
    #[arg(long, default_value = "")]
    tags: String,

    /// [<id>] <filename>
    #[arg(value_name = "ARGS")]
    positionals: Vec<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = real_main() {
        debug!(kind = e.kind(), "run failed");
        eprintln!("Fatal: {e}");
        return ExitCode::from(e.exit_code());
    }
    ExitCode::SUCCESS
}

fn real_main() -> Result<(), DroneError> {
    let cli = Cli::parse_from(config::normalize_legacy_flags(std::env::args_os()));

    if cli.show_version {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Environment only; a credential-bearing URL never appears on the command line.
    let api_server = std::env::var(config::ENV_API_SERVER).ok();
    let lair_id = std::env::var(config::ENV_LAIR_ID).ok();

    let RunConfig {
        api,
        settings,
        filename,
    } = config::resolve(&CliInputs {
        api_server: api_server.as_deref(),
        lair_id: lair_id.as_deref(),
        positionals: &cli.positionals,
        insecure: cli.insecure,
        force_hosts: cli.force_hosts,
        force_ports: cli.force_ports,
        tags: &cli.tags,
    })?;

    let api = HttpProjectApi::new(api).map_err(|e| {
        DroneError::Configuration(format!("Error setting up client: Error {e:#}"))
    })?;
    let source = FsScanSource::new(filename);

    let outcome = run_merge(&settings, &source, &api)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_unmatched_report(&mut out, &outcome.reconciliation.unmatched, settings.force_hosts)
        .and_then(|()| writeln!(out, "Success: Operation completed successfully"))
        .map_err(|e| DroneError::Io(format!("Error writing report: {e}")))?;
    Ok(())
}
