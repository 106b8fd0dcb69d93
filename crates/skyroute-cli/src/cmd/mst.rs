//! `skyroute mst`: minimum spanning tree of the fare projection.

use std::io::{self, Write};

use clap::{Args, ValueEnum};
use serde::Serialize;
use skyroute_core::FareGraph;
use skyroute_core::mst::{MstAlgorithm, SpanningTree};

use crate::cmd::Context;
use crate::output::{pretty_kv, pretty_section, render_mode};

/// Which spanning-tree algorithm(s) to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AlgorithmChoice {
    Prim,
    Kruskal,
    #[default]
    Both,
}

impl AlgorithmChoice {
    const fn algorithms(self) -> &'static [MstAlgorithm] {
        match self {
            Self::Prim => &[MstAlgorithm::Prim],
            Self::Kruskal => &[MstAlgorithm::Kruskal],
            Self::Both => &[MstAlgorithm::Prim, MstAlgorithm::Kruskal],
        }
    }
}

/// Arguments for `skyroute mst`.
#[derive(Args, Debug, Default)]
pub struct MstArgs {
    /// Algorithm to run.
    #[arg(long, value_enum, default_value_t = AlgorithmChoice::Both)]
    pub algorithm: AlgorithmChoice,
}

#[derive(Debug, Serialize)]
struct MstReport {
    trees: Vec<SpanningTree>,
}

/// Execute `skyroute mst`.
pub fn run_mst(args: &MstArgs, ctx: &Context) -> anyhow::Result<()> {
    let graph = ctx.load_graph()?;
    let fares = FareGraph::from_routes(&graph);
    let trees = args
        .algorithm
        .algorithms()
        .iter()
        .map(|algorithm| algorithm.run(&fares))
        .collect();
    render_mode(ctx.output, &MstReport { trees }, render_text, render_pretty)
}

fn render_text(report: &MstReport, w: &mut dyn Write) -> io::Result<()> {
    for tree in &report.trees {
        writeln!(
            w,
            "{}  total={}  edges={}  complete={}",
            tree.algorithm,
            tree.total_weight,
            tree.edges.len(),
            tree.complete
        )?;
        for edge in &tree.edges {
            writeln!(w, "{} - {}  {}", edge.from, edge.to, edge.weight)?;
        }
    }
    Ok(())
}

fn render_pretty(report: &MstReport, w: &mut dyn Write) -> io::Result<()> {
    for (i, tree) in report.trees.iter().enumerate() {
        if i > 0 {
            writeln!(w)?;
        }
        pretty_section(w, &format!("Minimum spanning tree ({})", tree.algorithm))?;
        for edge in &tree.edges {
            writeln!(w, "{:<6} - {:<6} {:>8}", edge.from, edge.to, edge.weight)?;
        }
        pretty_kv(w, "Total", tree.total_weight.to_string())?;
        if !tree.complete {
            writeln!(
                w,
                "warning: fare graph is disconnected; {} of {} tree edges found",
                tree.edges.len(),
                tree.node_count.saturating_sub(1)
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyroute_core::mst::TreeEdge;

    fn edge(from: &str, to: &str, weight: u64) -> TreeEdge {
        TreeEdge {
            from: from.to_string(),
            to: to.to_string(),
            weight,
        }
    }

    fn pretty(report: &MstReport) -> String {
        let mut buf = Vec::new();
        render_pretty(report, &mut buf).expect("render");
        String::from_utf8(buf).expect("utf8")
    }

    #[test]
    fn partial_forest_warning_counts_edges() {
        // Two components over four airports: every airport is covered but
        // only two of the three tree edges exist.
        let report = MstReport {
            trees: vec![SpanningTree {
                algorithm: MstAlgorithm::Kruskal,
                edges: vec![edge("A", "B", 4), edge("X", "Y", 1)],
                total_weight: 5,
                node_count: 4,
                complete: false,
            }],
        };
        let out = pretty(&report);
        assert!(out.contains("2 of 3 tree edges found"), "{out}");
        assert!(!out.contains("airports spanned"));
    }

    #[test]
    fn complete_tree_has_no_warning() {
        let report = MstReport {
            trees: vec![SpanningTree {
                algorithm: MstAlgorithm::Prim,
                edges: vec![edge("A", "B", 2)],
                total_weight: 2,
                node_count: 2,
                complete: true,
            }],
        };
        assert!(!pretty(&report).contains("warning"));
    }

    #[test]
    fn text_lists_every_tree() {
        let report = MstReport {
            trees: vec![
                SpanningTree {
                    algorithm: MstAlgorithm::Prim,
                    edges: vec![edge("A", "B", 2)],
                    total_weight: 2,
                    node_count: 2,
                    complete: true,
                },
                SpanningTree {
                    algorithm: MstAlgorithm::Kruskal,
                    edges: vec![edge("A", "B", 2)],
                    total_weight: 2,
                    node_count: 2,
                    complete: true,
                },
            ],
        };
        let mut buf = Vec::new();
        render_text(&report, &mut buf).expect("render");
        let out = String::from_utf8(buf).expect("utf8");
        assert!(out.contains("prim  total=2  edges=1  complete=true"));
        assert!(out.contains("kruskal  total=2"));
        assert_eq!(out.matches("A - B  2").count(), 2);
    }
}
