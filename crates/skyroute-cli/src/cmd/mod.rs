//! Subcommand handlers.

pub mod completions;
pub mod connections;
pub mod mst;
pub mod projection;
pub mod region;
pub mod route;
pub mod stops;

use std::path::PathBuf;

use skyroute_core::RouteGraph;
use skyroute_core::ingest::load_routes_from_path;

use crate::output::{CliError, OutputMode, render_error};

/// State shared by every graph command.
#[derive(Debug, Clone)]
pub struct Context {
    pub output: OutputMode,
    pub routes_file: PathBuf,
    pub has_header: bool,
}

impl Context {
    /// Load the route graph, rendering a structured error on failure.
    pub fn load_graph(&self) -> anyhow::Result<RouteGraph> {
        match load_routes_from_path(&self.routes_file, self.has_header) {
            Ok(graph) => Ok(graph),
            Err(err) => {
                render_error(
                    self.output,
                    &CliError::with_details(
                        format!("{err:#}"),
                        "pass --routes <FILE>, set SKYROUTE_ROUTES, or set data.routes_file in skyroute.toml",
                        "routes_unavailable",
                    ),
                )?;
                Err(err)
            }
        }
    }
}

/// `ABE -> ATL -> MIA`
pub(crate) fn format_path(path: &[String]) -> String {
    path.join(" -> ")
}
