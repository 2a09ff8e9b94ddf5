//! # nail Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads, merges and validates the scaffolder's configuration.
//! Every setting has a built-in default, so a fresh install works without any
//! file on disk; the files only exist to point nail at a different template or
//! to adjust which template paths are dropped.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line flags / `NAIL_*` environment variables (applied by `commands::init`)
//! 2. Project-specific `.nail.toml` in the output parent directory or an ancestor
//! 3. User-specific `<config dir>/nail/config.toml`
//! 4. Default values defined in the code
//!
//! The project file search stops at the first directory containing `.git`.
//! Paths are expanded (`~` to the home directory) and the result is validated
//! before use.
//!
//! ## Example
//!
//! ```toml
//! [template]
//! source = "gitlab:my-org/web-template#main"
//!
//! [materialize]
//! extra_excludes = ["docs/internal"]
//!
//! [e2e]
//! dependencies = ["cypress", "@cypress/webpack-preprocessor"]
//!
//! [install]
//! alternatives = ["yarn", "pnpm"]
//! ```
//!
use crate::core::error::{NailError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub template: TemplateConfig,
    #[serde(default)]
    pub materialize: MaterializeConfig,
    #[serde(default)]
    pub e2e: E2eConfig,
    #[serde(default)]
    pub install: InstallConfig,
}

/// Where the template comes from and where it is staged.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TemplateConfig {
    /// Template reference, e.g. `owner/name#branch` or `local:/path/to/dir`.
    #[serde(default = "default_template_source")]
    pub source: String,
    /// Staging directory override (can use ~). Defaults to `tmp` next to the executable.
    #[serde(default)]
    pub staging_dir: Option<String>,
}

/// Paths that never make it from the template into a generated project.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MaterializeConfig {
    #[serde(default = "default_manifest")]
    pub manifest: String,
    #[serde(default = "default_license")]
    pub license: String,
    #[serde(default = "default_ci_config")]
    pub ci_config: String,
    /// Additional template-relative paths to exclude.
    #[serde(default)]
    pub extra_excludes: Vec<String>,
}

/// Everything that is removed when the user declines end-to-end testing.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct E2eConfig {
    #[serde(default = "default_e2e_directory")]
    pub directory: String,
    #[serde(default = "default_e2e_config_file")]
    pub config_file: String,
    /// Keys dropped from `devDependencies`.
    #[serde(default = "default_e2e_dependencies")]
    pub dependencies: Vec<String>,
    /// Keys dropped from `scripts`.
    #[serde(default = "default_e2e_scripts")]
    pub scripts: Vec<String>,
}

/// Package managers offered after generation.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct InstallConfig {
    /// Always offered, never probed.
    #[serde(default = "default_manager")]
    pub default_manager: String,
    /// Offered only when `<name> --version` succeeds.
    #[serde(default = "default_alternatives")]
    pub alternatives: Vec<String>,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            source: default_template_source(),
            staging_dir: None,
        }
    }
}

impl Default for MaterializeConfig {
    fn default() -> Self {
        Self {
            manifest: default_manifest(),
            license: default_license(),
            ci_config: default_ci_config(),
            extra_excludes: Vec::new(),
        }
    }
}

impl Default for E2eConfig {
    fn default() -> Self {
        Self {
            directory: default_e2e_directory(),
            config_file: default_e2e_config_file(),
            dependencies: default_e2e_dependencies(),
            scripts: default_e2e_scripts(),
        }
    }
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            default_manager: default_manager(),
            alternatives: default_alternatives(),
        }
    }
}

fn default_template_source() -> String {
    "halo-design/nail-cli-template".to_string()
}
fn default_manifest() -> String {
    "package.json".to_string()
}
fn default_license() -> String {
    "LICENSE".to_string()
}
fn default_ci_config() -> String {
    ".travis.yml".to_string()
}
fn default_e2e_directory() -> String {
    "cypress".to_string()
}
fn default_e2e_config_file() -> String {
    "cypress.json".to_string()
}
fn default_e2e_dependencies() -> Vec<String> {
    vec!["cypress".to_string()]
}
fn default_e2e_scripts() -> Vec<String> {
    vec!["cy:run".to_string(), "cy:open".to_string()]
}
fn default_manager() -> String {
    "npm".to_string()
}
fn default_alternatives() -> Vec<String> {
    vec!["yarn".to_string(), "cnpm".to_string(), "pnpm".to_string()]
}

const PROJECT_CONFIG_FILENAME: &str = ".nail.toml";

/// Loads, merges, expands and validates the configuration for this invocation.
///
/// `.nail.toml` is searched for from `working_dir` (the directory the project
/// is generated in) upwards.
pub fn load_config(working_dir: &Path) -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config(working_dir)?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged_config).context("Failed to expand paths in configuration")?;
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "Nail", "nail") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config(start: &Path) -> Result<Option<Config>> {
    if let Some(project_config_path) = find_project_config_path(start) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.nail.toml) found in {} or its ancestors.", start.display());
        Ok(None)
    }
}

fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Field-wise merge: a project value wins whenever it differs from the default.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let defaults = Config::default();

    fn pick<T: PartialEq>(project: T, user: T, default: &T) -> T {
        if project != *default {
            project
        } else {
            user
        }
    }

    Config {
        template: TemplateConfig {
            source: pick(
                project_cfg.template.source,
                user.template.source,
                &defaults.template.source,
            ),
            staging_dir: project_cfg
                .template
                .staging_dir
                .or(user.template.staging_dir),
        },
        materialize: MaterializeConfig {
            manifest: pick(
                project_cfg.materialize.manifest,
                user.materialize.manifest,
                &defaults.materialize.manifest,
            ),
            license: pick(
                project_cfg.materialize.license,
                user.materialize.license,
                &defaults.materialize.license,
            ),
            ci_config: pick(
                project_cfg.materialize.ci_config,
                user.materialize.ci_config,
                &defaults.materialize.ci_config,
            ),
            extra_excludes: pick(
                project_cfg.materialize.extra_excludes,
                user.materialize.extra_excludes,
                &defaults.materialize.extra_excludes,
            ),
        },
        e2e: E2eConfig {
            directory: pick(
                project_cfg.e2e.directory,
                user.e2e.directory,
                &defaults.e2e.directory,
            ),
            config_file: pick(
                project_cfg.e2e.config_file,
                user.e2e.config_file,
                &defaults.e2e.config_file,
            ),
            dependencies: pick(
                project_cfg.e2e.dependencies,
                user.e2e.dependencies,
                &defaults.e2e.dependencies,
            ),
            scripts: pick(
                project_cfg.e2e.scripts,
                user.e2e.scripts,
                &defaults.e2e.scripts,
            ),
        },
        install: InstallConfig {
            default_manager: pick(
                project_cfg.install.default_manager,
                user.install.default_manager,
                &defaults.install.default_manager,
            ),
            alternatives: pick(
                project_cfg.install.alternatives,
                user.install.alternatives,
                &defaults.install.alternatives,
            ),
        },
    }
}

fn expand_config_paths(config: &mut Config) -> Result<()> {
    if let Some(dir) = config.template.staging_dir.as_mut() {
        *dir = shellexpand::tilde(dir).into_owned();
        debug!("Expanded staging directory: {}", dir);
    }
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    if config.template.source.trim().is_empty() {
        return Err(anyhow!(NailError::Config(
            "Template source cannot be empty.".to_string()
        )));
    }
    if config.materialize.manifest.trim().is_empty() {
        return Err(anyhow!(NailError::Config(
            "Manifest file name cannot be empty.".to_string()
        )));
    }
    let excluded = [
        &config.materialize.license,
        &config.materialize.ci_config,
        &config.e2e.directory,
        &config.e2e.config_file,
    ];
    for path in excluded
        .into_iter()
        .chain(config.materialize.extra_excludes.iter())
    {
        if Path::new(path).is_absolute() {
            return Err(anyhow!(NailError::Config(format!(
                "Excluded path '{}' must be relative to the template root.",
                path
            ))));
        }
    }
    if config.install.default_manager.trim().is_empty() {
        return Err(anyhow!(NailError::Config(
            "Default package manager cannot be empty.".to_string()
        )));
    }
    info!("Configuration validation successful.");
    Ok(())
}
