use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use euler_lca::io::{parse_queries, parse_tree, TreeFormat};
use euler_lca::{AdjacencyList, LcaConfig, LcaIndex, NodeId, DEFAULT_ROOT};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "euler-lca", about = "Lowest common ancestor queries on static trees")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Answer LCA queries against a tree.
    Query {
        /// Tree description file.
        tree: PathBuf,
        /// Queries file (`<u> <v>` per line).
        queries: PathBuf,
        /// Layout of the tree file.
        #[arg(long, value_enum, default_value_t = FormatArg::Edges)]
        format: FormatArg,
        /// Node to root the tree at.
        #[arg(long, default_value_t = DEFAULT_ROOT)]
        root: NodeId,
    },
    /// Print the Euler tour, depths, and first occurrences of a tree.
    Tour {
        /// Tree description file.
        tree: PathBuf,
        /// Layout of the tree file.
        #[arg(long, value_enum, default_value_t = FormatArg::Edges)]
        format: FormatArg,
        /// Node to root the tree at.
        #[arg(long, default_value_t = DEFAULT_ROOT)]
        root: NodeId,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FormatArg {
    /// Node count, then `u v` per edge.
    Edges,
    /// Square 0/1 adjacency matrix.
    Matrix,
}

impl From<FormatArg> for TreeFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Edges => TreeFormat::Edges,
            FormatArg::Matrix => TreeFormat::Matrix,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Query {
            tree,
            queries,
            format,
            root,
        } => run_query(&tree, &queries, format.into(), root)?,
        Commands::Tour { tree, format, root } => run_tour(&tree, format.into(), root)?,
    }

    Ok(())
}

fn run_query(tree_path: &Path, queries_path: &Path, format: TreeFormat, root: NodeId) -> Result<()> {
    let index = load_index(tree_path, format, root)?;

    let text = std::fs::read_to_string(queries_path)
        .with_context(|| format!("failed to read queries from {}", queries_path.display()))?;
    let pairs = parse_queries(&text)
        .with_context(|| format!("failed to parse queries in {}", queries_path.display()))?;
    info!(queries = pairs.len(), "answering queries");

    for (u, v) in pairs {
        let lca = index
            .query(u, v)
            .with_context(|| format!("query ({u}, {v}) failed"))?;
        let distance = index.distance(u, v)?;
        println!("{u}\t{v}\t{lca}\t{distance}");
    }

    Ok(())
}

fn run_tour(tree_path: &Path, format: TreeFormat, root: NodeId) -> Result<()> {
    let index = load_index(tree_path, format, root)?;
    let tour = index.euler_tour();

    println!("tour\t{}", join(tour.nodes()));
    println!("depth\t{}", join(tour.depths()));
    let first: Vec<usize> = (0..tour.node_count())
        .filter_map(|node| tour.first_occurrence(node))
        .collect();
    println!("first\t{}", join(&first));

    Ok(())
}

fn load_index(path: &Path, format: TreeFormat, root: NodeId) -> Result<LcaIndex> {
    let adjacency = read_tree_file(path, format)?;
    LcaIndex::build(&adjacency, LcaConfig::with_root(root))
        .with_context(|| format!("failed to build lca index from {}", path.display()))
}

fn read_tree_file(path: &Path, format: TreeFormat) -> Result<AdjacencyList> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read tree from {}", path.display()))?;
    parse_tree(&text, format).with_context(|| format!("failed to parse tree in {}", path.display()))
}

fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
