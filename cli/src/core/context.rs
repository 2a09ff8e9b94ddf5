//! # nail Invocation Context
//!
//! File: cli/src/core/context.rs
//!
//! ## Overview
//!
//! `InvocationContext` gathers everything a single `nail init` run needs to
//! know before the first stage starts: where the command was run, where the
//! template is staged, which template to fetch and which paths to drop. It is
//! built once from the merged configuration plus command-line overrides and
//! then passed by reference to every stage. Nothing mutates it afterwards.
//!
use crate::common::fs::copy::ExclusionList;
use crate::core::config::{Config, E2eConfig, InstallConfig, MaterializeConfig};
use crate::core::error::Result;
use crate::core::template_ref::TemplateRef;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Name of the staging directory created next to the executable.
pub const STAGING_DIR_NAME: &str = "tmp";

#[derive(Debug, Clone)]
pub struct InvocationContext {
    /// Parent directory of the generated project.
    pub working_dir: PathBuf,
    /// Fresh copy of the template lives here during a run.
    pub staging_dir: PathBuf,
    pub template: TemplateRef,
    pub materialize: MaterializeConfig,
    pub e2e: E2eConfig,
    pub install: InstallConfig,
}

impl InvocationContext {
    /// Builds the context from configuration. `staging_dir` and `working_dir`
    /// default to `<exe dir>/tmp` and the current directory.
    pub fn new(config: Config, working_dir: PathBuf, staging_dir: Option<PathBuf>) -> Result<Self> {
        let template: TemplateRef = config
            .template
            .source
            .parse()
            .context("Configured template source is not a valid reference")?;
        let staging_dir = match staging_dir.or(config.template.staging_dir.map(PathBuf::from)) {
            Some(dir) if dir.is_absolute() => dir,
            Some(dir) => working_dir.join(dir),
            None => default_staging_dir()?,
        };
        Ok(Self {
            working_dir,
            staging_dir,
            template,
            materialize: config.materialize,
            e2e: config.e2e,
            install: config.install,
        })
    }

    /// Target directory for a (sanitized) project name.
    pub fn output_path(&self, project_dir_name: &str) -> PathBuf {
        self.working_dir.join(project_dir_name)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.staging_dir.join(&self.materialize.manifest)
    }

    /// Template paths left out of the generated project.
    ///
    /// The manifest, license and CI config are always excluded; the e2e
    /// directory and its config file only when e2e support was declined.
    pub fn exclusions(&self, include_e2e: bool) -> ExclusionList {
        let mut list = ExclusionList::new();
        list.add(&self.materialize.manifest);
        list.add(&self.materialize.license);
        list.add(&self.materialize.ci_config);
        if !include_e2e {
            list.add(&self.e2e.directory);
            list.add(&self.e2e.config_file);
        }
        for extra in &self.materialize.extra_excludes {
            list.add(extra);
        }
        list
    }
}

fn default_staging_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate the nail executable")?;
    let exe_dir = exe.parent().unwrap_or_else(|| Path::new("."));
    Ok(exe_dir.join(STAGING_DIR_NAME))
}
