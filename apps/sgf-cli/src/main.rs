use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use sgf_doc::{DocError, GraphDoc};
use sgf_encode::{EncodeError, EncodeOptions, SgfEncoder};
use sgf_graph::GraphSource;

#[derive(Parser)]
#[command(name = "sgf")]
#[command(about = "Encode graph documents as Simple Graph Format", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a graph document to SGF
    Encode {
        /// Path to the graph document (.yaml, .yml or .json)
        graph_path: PathBuf,
        /// Output file (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Fail if the emitted edges disagree with the declared edge count
        #[arg(long)]
        check_edge_count: bool,
    },
    /// Check that a graph document can be encoded
    Validate {
        /// Path to the graph document (.yaml, .yml or .json)
        graph_path: PathBuf,
    },
    /// Show a summary of a graph document
    Info {
        /// Path to the graph document (.yaml, .yml or .json)
        graph_path: PathBuf,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Doc(#[from] DocError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error("Failed to create output file: {path}")]
    OutputCreate { path: PathBuf, source: io::Error },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            graph_path,
            output,
            check_edge_count,
        } => cmd_encode(&graph_path, output.as_deref(), check_edge_count),
        Commands::Validate { graph_path } => cmd_validate(&graph_path),
        Commands::Info { graph_path } => cmd_info(&graph_path),
    }
}

/// CLI flag wins over the document's `encode` block when set.
fn encode_options(doc: &GraphDoc, check_edge_count: bool) -> EncodeOptions {
    doc.encode
        .with_edge_count_check(doc.encode.check_edge_count || check_edge_count)
}

fn cmd_encode(graph_path: &Path, output: Option<&Path>, check_edge_count: bool) -> CliResult<()> {
    let doc = sgf_doc::load(graph_path)?;
    let encoder = SgfEncoder::new(encode_options(&doc, check_edge_count));

    match output {
        Some(path) => {
            // Buffer first so a failed encoding leaves no partial file behind
            let text = encoder.encode_to_string(&doc)?;
            let file = File::create(path).map_err(|source| CliError::OutputCreate {
                path: path.to_path_buf(),
                source,
            })?;
            let mut writer = BufWriter::new(file);
            writer.write_all(text.as_bytes())?;
            writer.flush()?;
            tracing::info!(output = %path.display(), "wrote SGF");
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            encoder.write_to(&doc, &mut writer)?;
            writer.flush()?;
        }
    }
    Ok(())
}

fn cmd_validate(graph_path: &Path) -> CliResult<()> {
    println!("Validating graph document: {}", graph_path.display());
    let doc = sgf_doc::load(graph_path)?;
    let encoder = SgfEncoder::new(encode_options(&doc, false));
    let summary = encoder.write_to(&doc, &mut io::sink())?;
    println!(
        "✓ Graph is encodable ({} nodes, {} edges)",
        summary.nodes, summary.edges
    );
    Ok(())
}

fn cmd_info(graph_path: &Path) -> CliResult<()> {
    let doc = sgf_doc::load(graph_path)?;
    let direction = if doc.is_directed() {
        "directed"
    } else {
        "undirected"
    };
    println!("Graph: {}", doc.name());
    println!("  Direction: {}", direction);
    println!("  Nodes: {}", doc.node_count());
    println!("  Edges: {}", doc.edge_count());
    let weighted = doc
        .nodes
        .iter()
        .flat_map(|n| &n.edges)
        .filter(|e| e.weight.is_some())
        .count();
    println!("  Weighted edges: {}", weighted);
    if let Some(max) = doc.nodes.iter().max_by_key(|n| n.edges.len()) {
        println!("  Max out-degree: {} (node {})", max.edges.len(), max.id);
    }
    Ok(())
}
