//! `tripack`: pack RDF-style triples into integers and query them.
//!
//! **Usage:**
//! ```
//! tripack [--bound <R>] [--config <file>] [-v] <command>
//!
//! tripack encode <DECIMAL>
//! tripack decode <STRING>
//! tripack build --triple 0,2,5 --triple 0,3,8
//! tripack query (--graph <CODEC> | --decimal <N>) --pattern '0,*,8' [--mode single|any|all]
//! tripack triples (--graph <CODEC> | --decimal <N>) [--pattern '*,3,*']
//! tripack demo
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args as ClapArgs, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tripack::{Pattern, Triple, TripleSpace};
use tripack_clients::commands::{self, GraphInput, QueryMode};
use tripack_clients::config::{resolve_bounds, ConfigFile};

/// Pack triples into integers and query them with wildcard patterns.
#[derive(Parser)]
#[command(name = "tripack", version, about = "Triple-space packing and pattern queries")]
struct Args {
    /// Uniform bound R for every axis.
    #[arg(long, global = true, env = "TRIPACK_BOUND")]
    bound: Option<u32>,

    /// TOML config file with a `[space]` table.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG is set.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode a decimal integer as a codec string.
    Encode {
        /// Non-negative base-10 integer.
        decimal: String,
    },
    /// Decode a codec string to a decimal integer.
    Decode {
        /// Codec string.
        text: String,
    },
    /// Build a graph from triples.
    Build {
        /// Triple as `s,p,o`; repeatable.
        #[arg(long = "triple", required = true)]
        triples: Vec<Triple>,
    },
    /// Test patterns against a graph.
    Query {
        #[command(flatten)]
        graph: GraphArgs,

        /// Pattern as `s,p,o` with `*` wildcards; repeatable.
        #[arg(long = "pattern")]
        patterns: Vec<Pattern>,

        /// Combinator over the patterns.
        #[arg(long, value_enum, default_value_t = QueryMode::Single)]
        mode: QueryMode,
    },
    /// List the triples in a graph.
    Triples {
        #[command(flatten)]
        graph: GraphArgs,

        /// Only list triples matching this pattern.
        #[arg(long)]
        pattern: Option<Pattern>,
    },
    /// Run the worked example at R = 10.
    Demo,
}

#[derive(ClapArgs)]
#[group(required = true, multiple = false)]
struct GraphArgs {
    /// Graph as a codec string.
    #[arg(long = "graph")]
    codec: Option<String>,

    /// Graph as a base-10 integer.
    #[arg(long)]
    decimal: Option<String>,
}

impl GraphArgs {
    fn into_input(self) -> GraphInput {
        match (self.codec, self.decimal) {
            (Some(codec), _) => GraphInput::Codec(codec),
            (None, decimal) => GraphInput::Decimal(decimal.unwrap_or_default()),
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn space(args_bound: Option<u32>, config: Option<&PathBuf>) -> Result<TripleSpace> {
    let file = config.map(|path| ConfigFile::load(path)).transpose()?;
    let bounds = resolve_bounds(args_bound, file.as_ref())?;
    Ok(TripleSpace::with_bounds(bounds))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    match args.command {
        Command::Encode { decimal } => println!("{}", commands::encode(&decimal)?),
        Command::Decode { text } => println!("{}", commands::decode(&text)?),
        Command::Build { triples } => {
            let space = space(args.bound, args.config.as_ref())?;
            println!("{}", commands::build(&space, &triples)?);
        }
        Command::Query {
            graph,
            patterns,
            mode,
        } => {
            let space = space(args.bound, args.config.as_ref())?;
            let graph = graph.into_input().read()?;
            println!("{}", commands::query(&space, &graph, &patterns, mode)?);
        }
        Command::Triples { graph, pattern } => {
            let space = space(args.bound, args.config.as_ref())?;
            let graph = graph.into_input().read()?;
            for triple in commands::triples(&space, &graph, pattern)? {
                println!("{triple}");
            }
        }
        Command::Demo => {
            for line in commands::demo()? {
                println!("{line}");
            }
        }
    }

    Ok(())
}
