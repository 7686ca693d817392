//! CLI entry point for the movie catalog.
//!
//! Every command prints its result as JSON on stdout; logs go to stderr.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use movies_core::MoviesConfig;
use movies_graph::{GraphClient, GraphConfig};
use movies_related::RelatedEntityGraphBuilder;

#[derive(Parser)]
#[command(name = "movies-related")]
#[command(about = "Query the movie catalog graph")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Config file prefix (default: movies).
    #[arg(short, long, default_value = "movies", global = true)]
    config: String,
}

#[derive(Subcommand)]
enum Command {
    /// Everything directly connected to a node.
    Related {
        /// Internal id of the anchor node.
        #[arg(long)]
        id: i64,
    },
    /// A movie and its cast.
    Title {
        #[arg(long)]
        title: String,
    },
    /// Movies whose title contains the query, ignoring case.
    Search {
        #[arg(long)]
        query: String,
    },
    /// Add one vote to a movie.
    Vote {
        #[arg(long)]
        title: String,
    },
    /// Movies and their actors as a force-layout graph.
    CastGraph {
        /// Maximum number of movies.
        #[arg(long, default_value_t = 100)]
        limit: u32,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    let config = MoviesConfig::load(&cli.config)?;
    let graph = GraphClient::connect(&GraphConfig::from(&config.neo4j)).await?;

    match cli.command {
        Command::Related { id } => {
            let builder = RelatedEntityGraphBuilder::new(graph);
            let result = builder.build(id).await?;
            println!("{}", serde_json::to_string(&result)?);
        }
        Command::Title { ref title } => {
            let result = graph.find_by_title(title).await?;
            println!("{}", serde_json::to_string(&result)?);
        }
        Command::Search { ref query } => {
            let result = graph.search(query).await?;
            println!("{}", serde_json::to_string(&result)?);
        }
        Command::Vote { ref title } => {
            let updated = graph.vote_by_title(title).await?;
            println!("{}", serde_json::json!({ "updated": updated }));
        }
        Command::CastGraph { limit } => {
            let result = graph.fetch_cast_graph(limit).await?;
            println!("{}", serde_json::to_string(&result)?);
        }
    }

    Ok(())
}
