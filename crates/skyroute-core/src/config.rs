//! Project and user configuration.
//!
//! Project settings come from `./skyroute.toml`; per-user settings from
//! `<config dir>/skyroute/config.toml`. Either file may be absent, and every
//! field has a default.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project config file name, relative to the project root.
pub const PROJECT_CONFIG_FILE: &str = "skyroute.toml";

/// Route file used when nothing else names one.
pub const DEFAULT_ROUTES_FILE: &str = "airports.txt";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub data: DataConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Route file, relative to the project root unless absolute.
    #[serde(default)]
    pub routes_file: Option<PathBuf>,
    /// Whether the first line of the route file is a header.
    #[serde(default = "default_true")]
    pub has_header: bool,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            routes_file: None,
            has_header: default_true(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default)]
    pub routes_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectiveConfig {
    pub project: ProjectConfig,
    pub user: UserConfig,
    pub routes_file: PathBuf,
    pub has_header: bool,
}

/// Load `skyroute.toml` from `project_root`, or defaults if it is missing.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_project_config(project_root: &Path) -> Result<ProjectConfig> {
    let path = project_root.join(PROJECT_CONFIG_FILE);
    if !path.exists() {
        return Ok(ProjectConfig::default());
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<ProjectConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Load the per-user config, or defaults if there is none.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_user_config() -> Result<UserConfig> {
    let Some(config_dir) = dirs::config_dir() else {
        return Ok(UserConfig::default());
    };
    load_user_config_from(&config_dir.join("skyroute/config.toml"))
}

/// Load a user config from an explicit path.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_user_config_from(path: &Path) -> Result<UserConfig> {
    if !path.exists() {
        return Ok(UserConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<UserConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Load both config layers and pick the route file.
///
/// # Errors
///
/// Returns an error if either config file is present but invalid.
pub fn resolve_config(project_root: &Path, cli_routes: Option<&Path>) -> Result<EffectiveConfig> {
    let project = load_project_config(project_root)?;
    let user = load_user_config()?;
    let routes_file = resolve_routes_file(project_root, cli_routes, &project, &user);
    let has_header = project.data.has_header;

    Ok(EffectiveConfig {
        project,
        user,
        routes_file,
        has_header,
    })
}

/// Route file precedence: CLI/env, project config, user config, default.
#[must_use]
pub fn resolve_routes_file(
    project_root: &Path,
    cli_routes: Option<&Path>,
    project: &ProjectConfig,
    user: &UserConfig,
) -> PathBuf {
    if let Some(path) = cli_routes {
        return path.to_path_buf();
    }
    if let Some(path) = &project.data.routes_file {
        return project_root.join(path);
    }
    if let Some(path) = &user.routes_file {
        return path.clone();
    }
    project_root.join(DEFAULT_ROUTES_FILE)
}

/// Map an output-mode string to its canonical name.
#[must_use]
pub fn normalize_output_mode(raw: &str) -> Option<&'static str> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "pretty" | "human" => Some("pretty"),
        "text" | "plain" => Some("text"),
        "json" => Some("json"),
        _ => None,
    }
}

const fn default_true() -> bool {
    true
}
