use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use dungeon::{CellKind, DungeonGenerator, seeded_rng};
use log::info;
use tools::ascii::render_ascii;
use tools::config_file::ToolConfig;
use tools::seed::{generate_runtime_seed, resolve_seed};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Ascii,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Grid side length; clamped to 20..=50
    #[arg(short, long)]
    size: Option<usize>,
    /// Seed for the random stream; a fresh one is generated when omitted
    #[arg(long)]
    seed: Option<u64>,
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Ascii)]
    format: OutputFormat,
    /// Write the rendered dungeon here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ToolConfig::load(path)?,
        None => ToolConfig::default(),
    };
    if let Some(size) = args.size {
        config.generator.size = size;
    }

    let seed = resolve_seed(args.seed, config.seed, generate_runtime_seed());
    info!("using {} seed {}", seed.source(), seed.value());

    let dungeon = DungeonGenerator::new(config.generator.clone())
        .generate(&mut seeded_rng(seed.value()))
        .with_context(|| format!("Generation failed for seed {}, try another", seed.value()))?;

    let rendered = match args.format {
        OutputFormat::Ascii => render_ascii(&dungeon, &config.layout),
        OutputFormat::Json => dungeon.to_json().context("Failed to serialize dungeon")?,
    };

    match &args.output {
        Some(path) => fs::write(path, &rendered)
            .with_context(|| format!("Failed to write output file: {}", path.display()))?,
        None => println!("{rendered}"),
    }

    if args.format == OutputFormat::Ascii {
        println!("Seed: {}", seed.value());
        println!("Size: {0}x{0}", dungeon.size());
        println!("Goal: {:?}", dungeon.goal);
        println!("Player: {:?}", dungeon.player_spawn);
        println!("Floor tiles: {}", dungeon.grid.count_kind(CellKind::Floor));
        println!("Guards: {:?}", dungeon.guards);
        println!("Fingerprint: 0x{:016x}", dungeon.fingerprint());
    }

    Ok(())
}
