//! # nail CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Every command is
//! run inside a sandbox: a temporary working directory plus a temporary `HOME`
//! so no user configuration leaks into the run.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Manifest used by the fixture template.
pub const TEMPLATE_MANIFEST: &str = r#"{
  "name": "nail-cli-template",
  "version": "0.1.0",
  "author": "template-author",
  "scripts": {
    "start": "webpack serve",
    "cy:run": "cypress run",
    "cy:open": "cypress open"
  },
  "devDependencies": {
    "cypress": "^13.0.0",
    "webpack": "^5.0.0"
  }
}"#;

/// Returns a `Command` for the compiled `nail` binary.
pub fn nail_cmd() -> Command {
    Command::cargo_bin("nail").expect("Failed to find nail binary for testing")
}

/// Temporary layout for one CLI run.
pub struct Sandbox {
    pub root: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("Failed to create sandbox dir");
        for dir in ["home", "work", "template"] {
            fs::create_dir_all(root.path().join(dir)).expect("Failed to create sandbox subdir");
        }
        Self { root }
    }

    pub fn work(&self) -> PathBuf {
        self.root.path().join("work")
    }

    pub fn staging(&self) -> PathBuf {
        self.root.path().join("staging")
    }

    pub fn template(&self) -> PathBuf {
        self.root.path().join("template")
    }

    /// Populates the fixture template with the files the scaffolder treats specially.
    pub fn write_template(&self) {
        let t = self.template();
        write(&t.join("package.json"), TEMPLATE_MANIFEST);
        write(&t.join("LICENSE"), "MIT License");
        write(&t.join(".travis.yml"), "language: node_js");
        write(&t.join("cypress.json"), "{}");
        write(&t.join("cypress/integration/home.spec.js"), "describe('home', () => {});");
        write(&t.join("src/index.js"), "console.log('hello');");
        write(&t.join("README.md"), "# nail template");
    }

    /// `nail` running in the work directory with an isolated home.
    pub fn cmd(&self) -> Command {
        let home = self.root.path().join("home");
        let mut cmd = nail_cmd();
        cmd.current_dir(self.work())
            .env("HOME", &home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env("NAIL_STAGING_DIR", self.staging())
            .env_remove("NAIL_TEMPLATE")
            .env_remove("RUST_LOG");
        cmd
    }
}

pub fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create fixture dir");
    }
    fs::write(path, content).expect("Failed to write fixture file");
}
