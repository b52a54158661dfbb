use anyhow::Result;
use clap::Command;

use ps_monitor::commands;

fn main() -> Result<()> {
    ps_monitor::init_logging();

    // No meaningful arguments beyond the program invocation; clap still
    // provides --help and --version.
    Command::new("ps-monitor")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Real-time monitor for Claude CLI processes")
        .get_matches();

    commands::monitor::execute()
}
