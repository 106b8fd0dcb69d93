//! `skyroute stops`: shortest route with an exact number of stops.

use std::io::{self, Write};

use clap::Args;
use skyroute_core::routing::{StopsResult, routes_with_stops};

use crate::cmd::route::write_route_text;
use crate::cmd::{Context, format_path};
use crate::output::{pretty_kv, pretty_section, render_mode};

/// Arguments for `skyroute stops`.
#[derive(Args, Debug)]
pub struct StopsArgs {
    /// Origin airport code.
    pub origin: String,
    /// Destination airport code.
    pub destination: String,
    /// Exact number of intermediate airports.
    #[arg(short = 'k', long)]
    pub stops: usize,
}

/// Execute `skyroute stops`.
pub fn run_stops(args: &StopsArgs, ctx: &Context) -> anyhow::Result<()> {
    let graph = ctx.load_graph()?;
    let result = routes_with_stops(&graph, &args.origin, &args.destination, args.stops);
    render_mode(
        ctx.output,
        &result,
        |r, w| write_route_text(&r.route, w),
        render_stops_pretty,
    )
}

fn render_stops_pretty(result: &StopsResult, w: &mut dyn Write) -> io::Result<()> {
    let route = &result.route;
    pretty_section(
        w,
        &format!(
            "Route {} → {} with {} stop(s)",
            route.origin, route.destination, result.stops
        ),
    )?;
    if !route.found {
        return writeln!(w, "No route with exactly {} stop(s).", result.stops);
    }
    pretty_kv(w, "Path", format_path(&route.path))?;
    pretty_kv(w, "Distance", route.total_distance.to_string())?;
    pretty_kv(w, "Cost", route.total_cost.to_string())
}
