#![forbid(unsafe_code)]

mod cmd;
mod output;

use clap::{CommandFactory, Parser, Subcommand};
use output::{OutputMode, resolve_output_mode};
use skyroute_core::config::resolve_config;
use std::env;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    name = "skyroute",
    author,
    version,
    about = "skyroute: routing and connectivity analytics for airport route networks",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Route file to load (CSV: origin,destination,origin city,destination city,distance,cost).
    #[arg(long, global = true, env = "SKYROUTE_ROUTES", value_name = "FILE")]
    routes: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Shorthand for `--format json`.
    #[arg(long, global = true, hide = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        next_help_heading = "Routing",
        about = "Shortest route between two airports",
        long_about = "Find the shortest route by distance between two airports and report its total distance and fare.",
        after_help = "EXAMPLES:\n    # Shortest route from Allentown to Miami\n    skyroute route ABE MIA\n\n    # Emit machine-readable output\n    skyroute route ABE MIA --json"
    )]
    Route(cmd::route::RouteArgs),

    #[command(
        next_help_heading = "Routing",
        about = "Shortest routes into a region",
        long_about = "Find the shortest route from one airport to every airport in a region (the last two characters of the city, e.g. a state code).",
        after_help = "EXAMPLES:\n    # Every Florida airport reachable from Allentown\n    skyroute region ABE FL\n\n    # A city works too; its last two characters are used\n    skyroute region ABE \"Miami, FL\""
    )]
    Region(cmd::region::RegionArgs),

    #[command(
        next_help_heading = "Routing",
        about = "Shortest route with an exact number of stops",
        long_about = "Find the shortest route that passes through exactly K intermediate airports without visiting any airport twice.",
        after_help = "EXAMPLES:\n    # Allentown to Miami with exactly one stop\n    skyroute stops ABE MIA --stops 1"
    )]
    Stops(cmd::stops::StopsArgs),

    #[command(
        next_help_heading = "Analysis",
        about = "Rank airports by connections",
        long_about = "Count inbound and outbound routes per airport and rank airports by the total.",
        after_help = "EXAMPLES:\n    # Full ranking\n    skyroute connections\n\n    # Top five as JSON\n    skyroute connections --limit 5 --json"
    )]
    Connections(cmd::connections::ConnectionsArgs),

    #[command(
        next_help_heading = "Analysis",
        about = "Show the undirected fare projection",
        long_about = "Collapse routes into one undirected edge per airport pair, weighted by the cheaper fare of the two directions.",
        after_help = "EXAMPLES:\n    # Adjacency listing\n    skyroute projection"
    )]
    Projection(cmd::projection::ProjectionArgs),

    #[command(
        next_help_heading = "Analysis",
        about = "Minimum spanning tree of the fare projection",
        long_about = "Compute the minimum spanning tree of the fare projection with Prim's and/or Kruskal's algorithm.",
        after_help = "EXAMPLES:\n    # Both algorithms\n    skyroute mst\n\n    # Kruskal only, as JSON\n    skyroute mst --algorithm kruskal --json"
    )]
    Mst(cmd::mst::MstArgs),

    #[command(
        next_help_heading = "Project Maintenance",
        about = "Generate shell completion scripts",
        long_about = "Generate shell completion scripts for supported shells.",
        after_help = "EXAMPLES:\n    # Generate bash completions\n    skyroute completions bash\n\n    # Generate zsh completions\n    skyroute completions zsh"
    )]
    Completions(cmd::completions::CompletionsArgs),
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("SKYROUTE_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "skyroute=debug,skyroute_core=debug,info"
        } else {
            "warn"
        })
    });

    let format = env::var("SKYROUTE_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Commands::Completions(args) = &cli.command {
        let mut command = Cli::command();
        return cmd::completions::run_completions(args.shell, &mut command);
    }

    let project_root = env::current_dir()?;
    let config = resolve_config(&project_root, cli.routes.as_deref())?;
    let output = resolve_output_mode(cli.format, cli.json, config.user.output.as_deref());
    debug!(
        routes = %config.routes_file.display(),
        has_header = config.has_header,
        ?output,
        "resolved configuration"
    );

    let ctx = cmd::Context {
        output,
        routes_file: config.routes_file,
        has_header: config.has_header,
    };

    match &cli.command {
        Commands::Route(args) => cmd::route::run_route(args, &ctx),
        Commands::Region(args) => cmd::region::run_region(args, &ctx),
        Commands::Stops(args) => cmd::stops::run_stops(args, &ctx),
        Commands::Connections(args) => cmd::connections::run_connections(args, &ctx),
        Commands::Projection(args) => cmd::projection::run_projection(args, &ctx),
        Commands::Mst(args) => cmd::mst::run_mst(args, &ctx),
        Commands::Completions(_) => Ok(()),
    }
}
