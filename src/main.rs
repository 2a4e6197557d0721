//! logidice - roll dice from the command line

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use logidice::{Command, CommandTable, Config, DicePlugin, FormatterKind, RollCommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Dice roller for tabletop notation
#[derive(Parser, Debug)]
#[command(
    name = "logidice",
    version,
    about = "Roll dice from notation like 2x1d20+1d4, 4dF or 5d10"
)]
struct Args {
    /// Configuration file (defaults to ./logidice.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Render replies over multiple lines
    #[arg(long)]
    multiline: bool,

    /// Render replies as collapsible blocks (implies spoilers)
    #[arg(long)]
    collapsible: bool,

    /// No markup in replies
    #[arg(long)]
    plain: bool,

    /// Print the raw result as JSON instead of a reply
    #[arg(long)]
    json: bool,

    /// roll, rollfate, rollww or rollscion; reads "<command> <notation>" lines from stdin when omitted
    command: Option<String>,

    /// Dice notation, e.g. 2x1d20+1d4
    notation: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.config {
        if !path.exists() {
            bail!("Config file not found: {}", path.display());
        }
    }

    let mut config = Config::load(args.config.as_deref()).context("Failed to load configuration")?;
    config.multiline |= args.multiline;
    if args.collapsible {
        config.collapsible = true;
        config.spoilers = true;
    }
    if args.plain {
        config.formatter = FormatterKind::Plain;
    }

    // Initialize tracing; replies go to stdout, logs to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(
            config
                .log_json
                .then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)),
        )
        .with(
            (!config.log_json)
                .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
        )
        .init();

    let plugin = config.plugin();
    let mut table = CommandTable::new();
    plugin.activate(&mut table);

    match &args.command {
        Some(command) => {
            let reply = run(&plugin, &table, command, &args.notation.join(" "), args.json).await?;
            println!("{}", reply);
        }
        None => {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Some(line) = lines.next_line().await? {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let (command, notation) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
                match run(&plugin, &table, command, notation.trim(), args.json).await {
                    Ok(reply) => println!("{}", reply),
                    Err(e) => {
                        warn!("{} failed: {}", command, e);
                        eprintln!("error: {}", e);
                    }
                }
            }
        }
    }

    Ok(())
}

async fn run(
    plugin: &DicePlugin,
    table: &CommandTable,
    command: &str,
    notation: &str,
    json: bool,
) -> Result<String> {
    if json {
        let mode = command.parse::<RollCommand>()?.mode();
        let result = plugin.roller().parse(notation, mode).await?;
        return Ok(serde_json::to_string_pretty(&result)?);
    }

    Ok(table.dispatch(command, Command::new(notation)).await?)
}
