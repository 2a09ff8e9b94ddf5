//! # nail Template References
//!
//! File: cli/src/core/template_ref.rs
//!
//! ## Overview
//!
//! A template reference names the repository a new project is scaffolded
//! from. The string forms mirror the shorthand commonly used by JavaScript
//! scaffolding tools:
//!
//! | Form                                  | Source                               |
//! |---------------------------------------|--------------------------------------|
//! | `owner/name[#checkout]`               | GitHub archive                       |
//! | `github:owner/name[#checkout]`        | GitHub archive                       |
//! | `gitlab:owner/name[#checkout]`        | GitLab archive                       |
//! | `bitbucket:owner/name[#checkout]`     | Bitbucket archive                    |
//! | `direct:<url>`                        | `.tar.gz` at an arbitrary URL        |
//! | `local:<path>`                        | Directory on disk                    |
//!
//! The checkout defaults to `master`.
//!
use crate::core::error::NailError;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

const DEFAULT_CHECKOUT: &str = "master";

/// Hosting services with a predictable archive download URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Host {
    GitHub,
    GitLab,
    Bitbucket,
}

/// A parsed template reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateRef {
    Hosted {
        host: Host,
        owner: String,
        name: String,
        checkout: String,
    },
    Direct(String),
    Local(PathBuf),
}

impl TemplateRef {
    /// URL of the gzipped tarball for remote references, `None` for local ones.
    pub fn archive_url(&self) -> Option<String> {
        match self {
            TemplateRef::Hosted {
                host,
                owner,
                name,
                checkout,
            } => Some(match host {
                Host::GitHub => format!(
                    "https://codeload.github.com/{}/{}/tar.gz/{}",
                    owner, name, checkout
                ),
                Host::GitLab => format!(
                    "https://gitlab.com/{0}/{1}/-/archive/{2}/{1}-{2}.tar.gz",
                    owner, name, checkout
                ),
                Host::Bitbucket => format!(
                    "https://bitbucket.org/{}/{}/get/{}.tar.gz",
                    owner, name, checkout
                ),
            }),
            TemplateRef::Direct(url) => Some(url.clone()),
            TemplateRef::Local(_) => None,
        }
    }
}

impl FromStr for TemplateRef {
    type Err = NailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let reference = s.trim();
        let invalid = |reason: &str| NailError::TemplateRef {
            reference: s.to_string(),
            reason: reason.to_string(),
        };

        if let Some(url) = reference.strip_prefix("direct:") {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(invalid("direct references need an http(s) URL"));
            }
            return Ok(TemplateRef::Direct(url.to_string()));
        }
        if let Some(path) = reference.strip_prefix("local:") {
            if path.is_empty() {
                return Err(invalid("local references need a directory path"));
            }
            let expanded = shellexpand::tilde(path).into_owned();
            return Ok(TemplateRef::Local(PathBuf::from(expanded)));
        }

        let (host, rest) = match reference.split_once(':') {
            Some(("github", rest)) => (Host::GitHub, rest),
            Some(("gitlab", rest)) => (Host::GitLab, rest),
            Some(("bitbucket", rest)) => (Host::Bitbucket, rest),
            Some((other, _)) => {
                return Err(invalid(&format!("unknown source '{}'", other)));
            }
            None => (Host::GitHub, reference),
        };

        let (repo, checkout) = match rest.split_once('#') {
            Some((_, "")) => return Err(invalid("empty checkout after '#'")),
            Some((repo, checkout)) => (repo, checkout),
            None => (rest, DEFAULT_CHECKOUT),
        };

        match repo.split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(TemplateRef::Hosted {
                    host,
                    owner: owner.to_string(),
                    name: name.to_string(),
                    checkout: checkout.to_string(),
                })
            }
            _ => Err(invalid("expected owner/name")),
        }
    }
}

impl fmt::Display for TemplateRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateRef::Hosted {
                host,
                owner,
                name,
                checkout,
            } => {
                let prefix = match host {
                    Host::GitHub => "github",
                    Host::GitLab => "gitlab",
                    Host::Bitbucket => "bitbucket",
                };
                write!(f, "{}:{}/{}#{}", prefix, owner, name, checkout)
            }
            TemplateRef::Direct(url) => write!(f, "direct:{}", url),
            TemplateRef::Local(path) => write!(f, "local:{}", path.display()),
        }
    }
}
