//! CLI for chanwire
//!
//! Subcommands:
//! - `transcode`: re-encode line-delimited frames from one wire version to another
//! - `versions`: list the supported wire versions

use std::io::{self, BufWriter, Write};

use chanwire::config::{Settings, load_config};
use chanwire::serializer;
use chanwire::utils::logging;
use chanwire::{Error, Result, SerializerRegistry};
use clap::{Parser, Subcommand};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "chanwire", version, about = "Channel message wire-format tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Read one frame per line from stdin and write it back in another version
    Transcode {
        /// Wire version of the input frames (defaults to the configured version)
        #[arg(long)]
        from: Option<String>,
        /// Wire version of the output frames (defaults to the configured version)
        #[arg(long)]
        to: Option<String>,
    },
    /// Print the supported wire versions
    Versions,
}

fn main() {
    let cli = Cli::parse();
    let _ = dotenvy::dotenv();

    let settings = match load_config() {
        Ok(settings) => settings,
        Err(e) => {
            logging::init("info");
            error!("Failed to load configuration: {}", e);
            std::process::exit(2);
        }
    };
    logging::init(&settings.log.level);

    if let Err(e) = run(cli, &settings) {
        error!("chanwire failed: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli, settings: &Settings) -> Result<()> {
    let registry = SerializerRegistry::with_default_vsn(&settings.codec.default_vsn)?;
    match cli.command {
        Command::Transcode { from, to } => transcode(&registry, from.as_deref(), to.as_deref()),
        Command::Versions => versions(&registry),
    }
}

fn transcode(registry: &SerializerRegistry, from: Option<&str>, to: Option<&str>) -> Result<()> {
    let decoder = registry.resolve(from)?;
    let encoder = registry.resolve(to)?;
    info!(from = decoder.vsn(), to = encoder.vsn(), "transcoding stdin");

    let failures = serializer::transcode_lines(
        decoder.as_ref(),
        encoder.as_ref(),
        io::stdin().lock(),
        BufWriter::new(io::stdout().lock()),
    )?;
    if failures > 0 {
        return Err(Error::FramesRejected(failures));
    }
    Ok(())
}

fn versions(registry: &SerializerRegistry) -> Result<()> {
    let mut out = io::stdout().lock();
    for vsn in registry.versions() {
        let marker = if vsn == registry.default_vsn() { " (default)" } else { "" };
        writeln!(out, "{vsn}{marker}")?;
    }
    Ok(())
}
