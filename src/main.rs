use clap::error::ErrorKind;
use clap::Parser;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use horse_vpn::LaunchOutcome;

#[derive(Parser)]
#[command(name = "horse-vpn")]
#[command(about = "Connect to the pre-provisioned HorseVPN connection profile")]
#[command(version)]
struct Cli {
    /// Connection route, e.g. wss://gateway.example.net:8443
    route: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err)
            if err.kind() == ErrorKind::DisplayHelp
                || err.kind() == ErrorKind::DisplayVersion =>
        {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(_) => {
            // One diagnostic line, exit 1 (clap would exit 2)
            eprintln!("Usage: horse-vpn <route>");
            return ExitCode::from(1);
        }
    };

    // Set up logging
    // Logs go to stderr; stdout carries only the outcome line. The default
    // filter stays quiet so failures produce a single diagnostic line.
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match horse_vpn::launch(&cli.route) {
        Ok(LaunchOutcome::Connected { profile }) => {
            debug!("Connection profile '{}' is up", profile);
            println!("VPN connected");
            ExitCode::SUCCESS
        }
        Ok(LaunchOutcome::Deferred) => {
            // The elevated instance picks the work up; nothing to report here
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::from(1)
        }
    }
}
