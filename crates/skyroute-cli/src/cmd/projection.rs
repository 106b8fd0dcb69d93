//! `skyroute projection`: undirected fare graph listing.

use std::io::{self, Write};

use clap::Args;
use serde::Serialize;
use skyroute_core::FareGraph;
use skyroute_core::graph::ProjectionRow;

use crate::cmd::Context;
use crate::output::{pretty_kv, pretty_section, render_mode};

/// Arguments for `skyroute projection`.
#[derive(Args, Debug, Default)]
pub struct ProjectionArgs {}

#[derive(Debug, Serialize)]
struct ProjectionReport {
    airports: usize,
    edges: usize,
    rows: Vec<ProjectionRow>,
}

/// Execute `skyroute projection`.
pub fn run_projection(_args: &ProjectionArgs, ctx: &Context) -> anyhow::Result<()> {
    let graph = ctx.load_graph()?;
    let fares = FareGraph::from_routes(&graph);
    let report = ProjectionReport {
        airports: fares.node_count(),
        edges: fares.edge_count(),
        rows: fares.rows(),
    };
    render_mode(ctx.output, &report, render_text, render_pretty)
}

fn links(row: &ProjectionRow) -> String {
    row.links
        .iter()
        .map(|link| format!("{}({})", link.code, link.weight))
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_text(report: &ProjectionReport, w: &mut dyn Write) -> io::Result<()> {
    for row in &report.rows {
        writeln!(w, "{}: {}", row.code, links(row))?;
    }
    Ok(())
}

fn render_pretty(report: &ProjectionReport, w: &mut dyn Write) -> io::Result<()> {
    pretty_section(w, "Fare projection")?;
    pretty_kv(w, "Airports", report.airports.to_string())?;
    pretty_kv(w, "Edges", report.edges.to_string())?;
    writeln!(w)?;
    for row in &report.rows {
        if row.links.is_empty() {
            writeln!(w, "{:<6} (isolated)", row.code)?;
        } else {
            writeln!(w, "{:<6} {}", row.code, links(row))?;
        }
    }
    Ok(())
}
