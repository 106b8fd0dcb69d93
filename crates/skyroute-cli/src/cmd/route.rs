//! `skyroute route`: shortest route between two airports.

use std::io::{self, Write};

use clap::Args;
use skyroute_core::RouteResult;
use skyroute_core::routing::shortest_route;

use crate::cmd::{Context, format_path};
use crate::output::{pretty_kv, pretty_section, render_mode};

/// Arguments for `skyroute route`.
#[derive(Args, Debug)]
pub struct RouteArgs {
    /// Origin airport code.
    pub origin: String,
    /// Destination airport code.
    pub destination: String,
}

/// Execute `skyroute route`.
pub fn run_route(args: &RouteArgs, ctx: &Context) -> anyhow::Result<()> {
    let graph = ctx.load_graph()?;
    let result = shortest_route(&graph, &args.origin, &args.destination);
    render_mode(ctx.output, &result, write_route_text, write_route_pretty)
}

/// One line per route: path, distance, cost.
pub(crate) fn write_route_text(result: &RouteResult, w: &mut dyn Write) -> io::Result<()> {
    if result.found {
        writeln!(
            w,
            "{}  distance={}  cost={}",
            format_path(&result.path),
            result.total_distance,
            result.total_cost
        )
    } else {
        writeln!(w, "no route {} -> {}", result.origin, result.destination)
    }
}

pub(crate) fn write_route_pretty(result: &RouteResult, w: &mut dyn Write) -> io::Result<()> {
    pretty_section(w, &format!("Route {} → {}", result.origin, result.destination))?;
    if !result.found {
        return writeln!(w, "No route found.");
    }
    pretty_kv(w, "Path", format_path(&result.path))?;
    pretty_kv(w, "Distance", result.total_distance.to_string())?;
    pretty_kv(w, "Cost", result.total_cost.to_string())?;
    pretty_kv(w, "Legs", result.legs().to_string())
}
