use anyhow::{Context, Result};
use clap::Parser;
use eulerjug::Multigraph;
use solver::{circuit_line, logging};
use tracing::info;

/// Print an Eulerian circuit of an undirected multigraph.
#[derive(Parser, Debug)]
#[command(name = "euler")]
struct Args {
    /// Space separated edges, each written as its two vertex labels
    #[arg(short, long, default_value = "ab ag bc be bg cd de ef eg fh hg")]
    edges: String,

    /// Vertex the circuit starts and ends at
    #[arg(short, long, default_value_t = 'a')]
    start: char,
}

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();

    let mut graph: Multigraph<char> = args.edges.parse()
        .context("could not read edge list")?;
    info!(vertices = graph.vertex_count(), edges = graph.edge_count(), "graph loaded");

    let circuit = graph.euler_circuit(args.start)
        .with_context(|| format!("no Eulerian circuit from {}", args.start))?;

    println!("{}", circuit_line(&circuit));
    Ok(())
}
