use std::{fs, io::Write};

use clap::Parser;
use config::Config;
use design_configs::build_design_configs;
use log::{error, info};

mod config;
mod logger;

pub type BoxDynError = Box<dyn std::error::Error>;
pub type Result<T> = std::result::Result<T, BoxDynError>;

#[derive(clap::Parser, Debug)]
struct Args {
    /// Whether should print debug information
    #[arg(long)]
    debug: bool,

    /// Path to a JSON request with `designs`, `associativity` and `fast_ways`
    #[arg(short, long)]
    config: Option<String>,

    /// Design names, e.g. CSM,ATOR_2P (replaces the designs of the config file)
    #[arg(short, long = "design", value_delimiter = ',')]
    designs: Vec<String>,

    /// L2 associativity
    #[arg(short, long)]
    assoc: Option<usize>,

    /// Number of fast MSB ways, defaults to half the associativity
    #[arg(short, long)]
    fast_ways: Option<usize>,

    /// Where to write the latency table, stdout if absent
    #[arg(short, long)]
    output: Option<String>,

    /// Emit single-line JSON
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init(args.debug);

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let config = config.merge(args.designs, args.assoc, args.fast_ways);

    let Some(assoc) = config.associativity else {
        let msg = "Associativity must be given either with --assoc or in the config file";
        error!("{msg}");
        return Err(msg.into());
    };
    if config.designs.is_empty() {
        let msg = "No design given, use --design or the `designs` field of the config file";
        error!("{msg}");
        return Err(msg.into());
    }

    let table = build_design_configs(config.designs.as_slice(), assoc, config.fast_ways)
        .map_err(|e| {
            error!("{e}");
            e
        })?;

    let mut json = if args.compact {
        serde_json::to_string(&table)?
    } else {
        serde_json::to_string_pretty(&table)?
    };
    json.push('\n');

    match &args.output {
        Some(path) => {
            fs::write(path, json)?;
            info!("Wrote {} design(s) to {path}", table.len());
        }
        None => std::io::stdout().write_all(json.as_bytes())?,
    }

    Ok(())
}
