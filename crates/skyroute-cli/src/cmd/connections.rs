//! `skyroute connections`: airports ranked by route count.

use std::io::{self, Write};

use clap::Args;
use serde::Serialize;
use skyroute_core::metrics::{ConnectionCount, connectivity_ranking};

use crate::cmd::Context;
use crate::output::{pretty_section, render_mode};

/// Arguments for `skyroute connections`.
#[derive(Args, Debug, Default)]
pub struct ConnectionsArgs {
    /// Show only the N most connected airports.
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
struct ConnectionsReport {
    airports: Vec<ConnectionCount>,
}

/// Execute `skyroute connections`.
pub fn run_connections(args: &ConnectionsArgs, ctx: &Context) -> anyhow::Result<()> {
    let graph = ctx.load_graph()?;
    let mut airports = connectivity_ranking(&graph);
    if let Some(limit) = args.limit {
        airports.truncate(limit);
    }
    let report = ConnectionsReport { airports };
    render_mode(ctx.output, &report, render_text, render_pretty)
}

fn render_text(report: &ConnectionsReport, w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "CODE  IN  OUT  TOTAL")?;
    for c in &report.airports {
        writeln!(w, "{}  {}  {}  {}", c.code, c.inbound, c.outbound, c.total)?;
    }
    Ok(())
}

fn render_pretty(report: &ConnectionsReport, w: &mut dyn Write) -> io::Result<()> {
    pretty_section(w, "Airport connections")?;
    writeln!(w, "{:<6} {:>8} {:>8} {:>8}", "CODE", "INBOUND", "OUTBOUND", "TOTAL")?;
    for c in &report.airports {
        writeln!(
            w,
            "{:<6} {:>8} {:>8} {:>8}",
            c.code, c.inbound, c.outbound, c.total
        )?;
    }
    Ok(())
}
