use anyhow::{Context, Result};
use clap::{Arg, Command};

use hwbridge::{Bridge, StopReason};

fn main() -> Result<()> {
    let matches = Command::new("hwbridge")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Streams hardware sensor snapshots as JSON lines to stdout")
        .long_about(
            "Streams hardware sensor snapshots as JSON lines to stdout\n\n\
             The bridge discovers the process that launched its launcher and \
             polls CPU, memory and motherboard sensors every 500 ms until that \
             process exits or stdout is closed. Diagnostics go to stderr.",
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable debug logging on stderr")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    hwbridge::init_logging(matches.get_flag("verbose"));

    let mut bridge = Bridge::bootstrap().context("Failed to start the telemetry bridge")?;

    // stdout is the wire; lock it once for the whole run
    let stdout = std::io::stdout();
    let reason = bridge.run(stdout.lock());

    match reason {
        StopReason::ParentExited => log::info!("watched process exited, shutting down"),
        StopReason::OutputClosed => log::info!("output channel closed, shutting down"),
    }

    Ok(())
}
