use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use asmgraph::parser::tig_info;
use asmgraph::{Assembler, AssemblyGraph, GraphFormat, ParserConfig};

/// Convert an assembler's graph into a strand-aware assembly graph
/// with inferred junctions, multiplicities and repeat colors.
#[derive(Parser, Debug)]
#[command(name = "asmgraph", version, about)]
struct Args {
    /// Input dialect: abyss-dot, flye-dot or gfa
    format: GraphFormat,
    /// Graph file written by the assembler
    input: PathBuf,
    /// Edges shorter than this are left out
    #[arg(short, long, default_value_t = 1)]
    min_edge_len: usize,
    /// Assembler that wrote the input (spades, abyss, canu, flye, ...)
    #[arg(short, long)]
    assembler: Option<Assembler>,
    /// Canu tigInfo table; looked up next to the input for canu if
    /// not given
    #[arg(long)]
    tig_info: Option<PathBuf>,
    /// Write JSON instead of a tab-separated table
    #[arg(long)]
    json: bool,
    /// Output file, stdout if absent
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Log more, repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .init();
}

fn config(args: &Args) -> ParserConfig {
    let assembler = args.assembler.clone().unwrap_or_default();
    let mut config = ParserConfig::new(args.min_edge_len);

    let table = args.tig_info.clone().or_else(|| {
        if assembler == Assembler::Canu {
            let dir = match args.input.parent() {
                Some(dir) if !dir.as_os_str().is_empty() => dir,
                _ => Path::new("."),
            };
            tig_info::find_in_dir(dir)
        } else {
            None
        }
    });
    if let Some(table) = table {
        info!("Using tigInfo table {}", table.display());
        config = config.with_tig_info(table);
    }

    config.with_assembler(assembler)
}

#[cfg(feature = "serde1")]
fn write_json<W: Write>(graph: &AssemblyGraph, out: W) -> Result<()> {
    graph.write_json(out)?;
    Ok(())
}

#[cfg(not(feature = "serde1"))]
fn write_json<W: Write>(_graph: &AssemblyGraph, _out: W) -> Result<()> {
    anyhow::bail!("JSON output requires the `serde1` feature")
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);

    let config = config(&args);
    let graph = AssemblyGraph::from_path(args.format, &args.input, &config)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    if graph.is_empty() {
        warn!("No edges found in {}", args.input.display());
    }
    eprintln!("{}", graph.summary());

    let out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?,
        ),
        None => Box::new(io::stdout()),
    };
    let mut out = BufWriter::new(out);

    if args.json {
        write_json(&graph, &mut out)?;
    } else {
        graph.write_tsv(&mut out)?;
    }
    out.flush()?;
    Ok(())
}
