//! # nail Init: Answers and Validation
//!
//! File: cli/src/commands/init/answers.rs
//!
//! ## Overview
//!
//! Collects the user's answers for `nail init`:
//!
//! 1. Project name: anything usable as a directory name (no `\ / : * ? " < > |`).
//! 2. Author name: 4 to 16 characters of `[a-zA-Z0-9_-]`.
//! 3. Whether to keep the end-to-end testing setup.
//! 4. Confirmation to generate into the computed target directory.
//!
//! Each answer can be pre-supplied on the command line (`AnswerPresets`). A
//! pre-supplied value runs through the same validator as typed input; because
//! there is nobody to re-prompt, an invalid preset is a `NailError::Validation`.
//!
use crate::common::ui::prompts::Prompter;
use crate::core::error::{NailError, Result};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, info};

static PROJECT_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^[^\\/:*?"<>|]+$"#).expect("project name pattern is valid"));
static AUTHOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]{4,16}$").expect("author pattern is valid"));

const PROJECT_NAME_HINT: &str = "Project names cannot contain \\ / : * ? \" < > |";
const AUTHOR_HINT: &str = "Use 4-16 letters, digits, '_' or '-'.";

pub const PROJECT_NAME_PROMPT: &str = "Please enter the project name:";
pub const AUTHOR_PROMPT: &str = "Please enter the author name:";
pub const E2E_PROMPT: &str = "Include end-to-end testing support (cypress)?";
pub const GENERATE_HERE_PROMPT: &str = "Generate project in current directory?";
pub const TARGET_EXISTS_PROMPT: &str = "Target directory exists. Continue?";

/// Answers supplied up front on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerPresets {
    pub name: Option<String>,
    pub author: Option<String>,
    pub e2e: Option<bool>,
    pub assume_yes: bool,
    pub installer: Option<String>,
}

/// The validated identity of the project being generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Name as typed.
    pub raw_name: String,
    /// Name with spaces replaced by hyphens; used for the directory and the manifest.
    pub project_name: String,
    pub author: String,
    pub include_e2e: bool,
}

pub fn validate_project_name(input: &str) -> std::result::Result<(), String> {
    if !PROJECT_NAME_RE.is_match(input) {
        return Err(PROJECT_NAME_HINT.to_string());
    }
    // `.` and `..` pass the pattern but would point at the working directory or its parent.
    if input == "." || input == ".." {
        return Err("Project name cannot be '.' or '..'".to_string());
    }
    Ok(())
}

pub fn validate_author(input: &str) -> std::result::Result<(), String> {
    if AUTHOR_RE.is_match(input) {
        Ok(())
    } else {
        Err(AUTHOR_HINT.to_string())
    }
}

/// Replaces every space with a hyphen. Case is left alone.
pub fn sanitize_project_name(raw: &str) -> String {
    raw.replace(' ', "-")
}

/// Asks for (or takes from `presets`) name, author and the e2e opt-in.
pub fn collect_identity(prompter: &dyn Prompter, presets: &AnswerPresets) -> Result<Identity> {
    let raw_name = answer_text(
        prompter,
        PROJECT_NAME_PROMPT,
        presets.name.as_deref(),
        "project name",
        PROJECT_NAME_HINT,
        &validate_project_name,
    )?;
    let author = answer_text(
        prompter,
        AUTHOR_PROMPT,
        presets.author.as_deref(),
        "author name",
        AUTHOR_HINT,
        &validate_author,
    )?;
    let include_e2e = match presets.e2e {
        Some(choice) => choice,
        None => prompter.confirm(E2E_PROMPT, true)?,
    };

    let identity = Identity {
        project_name: sanitize_project_name(&raw_name),
        raw_name,
        author,
        include_e2e,
    };
    info!("Collected answers: {:?}", identity);
    Ok(identity)
}

fn answer_text(
    prompter: &dyn Prompter,
    prompt: &str,
    preset: Option<&str>,
    field: &'static str,
    hint: &'static str,
    validate: &dyn Fn(&str) -> std::result::Result<(), String>,
) -> Result<String> {
    match preset {
        Some(value) => {
            debug!("Using preset {}: '{}'", field, value);
            if let Err(reason) = validate(value) {
                debug!("Preset {} rejected: {}", field, reason);
                anyhow::bail!(NailError::Validation {
                    field,
                    value: value.to_string(),
                    hint,
                });
            }
            Ok(value.to_string())
        }
        None => prompter.input(prompt, validate),
    }
}

/// Wording of the final confirmation. Existence of the target only changes
/// the question; answering yes overwrites in both cases.
pub fn confirmation_prompt(target_exists: bool) -> &'static str {
    if target_exists {
        TARGET_EXISTS_PROMPT
    } else {
        GENERATE_HERE_PROMPT
    }
}

/// Asks whether to generate into `output_path`. `assume_yes` answers for the user.
pub fn confirm_generation(
    prompter: &dyn Prompter,
    output_path: &Path,
    assume_yes: bool,
) -> Result<bool> {
    let exists = output_path.exists();
    debug!("Target {:?} exists: {}", output_path, exists);
    if assume_yes {
        return Ok(true);
    }
    prompter.confirm(confirmation_prompt(exists), true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ui::prompts::scripted::ScriptedPrompter;
    use tempfile::tempdir;

    #[test]
    fn test_project_name_rejects_reserved_characters() {
        for c in ['/', '\\', ':', '*', '?', '"', '<', '>', '|'] {
            let name = format!("my{}app", c);
            assert!(validate_project_name(&name).is_err(), "{:?} accepted", name);
        }
        assert!(validate_project_name("").is_err());
        assert!(validate_project_name("..").is_err());
    }

    #[test]
    fn test_project_name_accepts_ordinary_names() {
        for name in ["demo app", "My Project", "nail-app", "app.v2", "项目"] {
            assert!(validate_project_name(name).is_ok(), "{:?} rejected", name);
        }
    }

    #[test]
    fn test_author_validation() {
        for ok in ["owl_aford", "OwlAford", "abcd", "a-b_c-1234567890", "1234"] {
            assert!(validate_author(ok).is_ok(), "{:?} rejected", ok);
        }
        for bad in [
            "abc",
            "abcdefghijklmnopq",
            "owl aford",
            "owl.aford",
            "",
            "ówl_aford",
        ] {
            assert!(validate_author(bad).is_err(), "{:?} accepted", bad);
        }
    }

    #[test]
    fn test_sanitize_replaces_every_space_and_keeps_case() {
        assert_eq!(sanitize_project_name("My Project"), "My-Project");
        assert_eq!(sanitize_project_name("demo app"), "demo-app");
        assert_eq!(sanitize_project_name("a  b "), "a--b-");
    }

    #[test]
    fn test_collect_identity_reprompts_until_valid() {
        let prompter = ScriptedPrompter::new()
            .with_inputs(&["bad/name", "demo app", "ab", "owl_aford"])
            .with_confirms(&[false]);

        let identity = collect_identity(&prompter, &AnswerPresets::default()).unwrap();

        assert_eq!(
            identity,
            Identity {
                raw_name: "demo app".into(),
                project_name: "demo-app".into(),
                author: "owl_aford".into(),
                include_e2e: false,
            }
        );
        assert_eq!(prompter.rejected(), vec!["bad/name".to_string(), "ab".to_string()]);
        assert_eq!(
            prompter.asked(),
            vec![PROJECT_NAME_PROMPT, AUTHOR_PROMPT, E2E_PROMPT]
        );
    }

    #[test]
    fn test_collect_identity_uses_presets_without_prompting() {
        let prompter = ScriptedPrompter::new();
        let presets = AnswerPresets {
            name: Some("My Project".into()),
            author: Some("OwlAford".into()),
            e2e: Some(true),
            ..Default::default()
        };

        let identity = collect_identity(&prompter, &presets).unwrap();

        assert_eq!(identity.project_name, "My-Project");
        assert!(identity.include_e2e);
        assert!(prompter.asked().is_empty());
    }

    #[test]
    fn test_invalid_preset_is_validation_error() {
        let prompter = ScriptedPrompter::new();
        let presets = AnswerPresets {
            name: Some("demo".into()),
            author: Some("x".into()),
            ..Default::default()
        };

        let err = collect_identity(&prompter, &presets).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<NailError>(),
            Some(NailError::Validation { field: "author name", .. })
        ));
    }

    #[test]
    fn test_confirmation_wording_depends_on_target() {
        let temp = tempdir().unwrap();
        let existing = temp.path().to_path_buf();
        let missing = temp.path().join("demo-app");

        let prompter = ScriptedPrompter::new().with_confirms(&[true, false]);
        assert!(confirm_generation(&prompter, &existing, false).unwrap());
        assert!(!confirm_generation(&prompter, &missing, false).unwrap());
        assert_eq!(
            prompter.asked(),
            vec![TARGET_EXISTS_PROMPT, GENERATE_HERE_PROMPT]
        );
    }

    #[test]
    fn test_assume_yes_skips_confirmation() {
        let prompter = ScriptedPrompter::new();
        assert!(confirm_generation(&prompter, Path::new("/nonexistent/demo"), true).unwrap());
        assert!(prompter.asked().is_empty());
    }
}
