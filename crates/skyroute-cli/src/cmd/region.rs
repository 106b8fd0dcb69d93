//! `skyroute region`: shortest routes from one airport into a region.

use std::io::{self, Write};

use clap::Args;
use serde::Serialize;
use skyroute_core::RouteResult;
use skyroute_core::routing::region_routes;

use crate::cmd::Context;
use crate::cmd::route::{write_route_pretty, write_route_text};
use crate::output::{pretty_section, render_mode};

/// Arguments for `skyroute region`.
#[derive(Args, Debug)]
pub struct RegionArgs {
    /// Origin airport code.
    pub origin: String,
    /// Region code (e.g. `FL`) or a city ending in one (e.g. `"Miami, FL"`).
    pub region: String,
}

#[derive(Debug, Serialize)]
struct RegionReport {
    origin: String,
    region: String,
    routes: Vec<RouteResult>,
}

/// Execute `skyroute region`.
pub fn run_region(args: &RegionArgs, ctx: &Context) -> anyhow::Result<()> {
    let graph = ctx.load_graph()?;
    let report = RegionReport {
        origin: args.origin.clone(),
        region: args.region.clone(),
        routes: region_routes(&graph, &args.origin, &args.region),
    };
    render_mode(ctx.output, &report, render_region_text, render_region_pretty)
}

fn render_region_text(report: &RegionReport, w: &mut dyn Write) -> io::Result<()> {
    for route in &report.routes {
        write_route_text(route, w)?;
    }
    Ok(())
}

fn render_region_pretty(report: &RegionReport, w: &mut dyn Write) -> io::Result<()> {
    if report.routes.is_empty() {
        pretty_section(w, &format!("Region {}", report.region))?;
        return writeln!(w, "No airports in this region.");
    }
    for (i, route) in report.routes.iter().enumerate() {
        if i > 0 {
            writeln!(w)?;
        }
        write_route_pretty(route, w)?;
    }
    Ok(())
}
