use crate::error::{RelnotesError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "batch-setup.json";
const DEFAULT_PROGRAM: &str = "prolific";
const DEFAULT_MARKER: &str = "ID";
const TEMP_FILENAME: &str = "batch-setup-study.json";

/// How a step pulls an identifier out of its output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Capture {
    /// Name later steps use to refer to the value, e.g. `{batch_id}`
    pub into: String,

    /// Line marker, matched against the text before the first colon
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Dotted path into JSON output; takes precedence over `marker`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_field: Option<String>,
}

/// A file rendered from a template before the step runs and removed after.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Render {
    /// Template path; placeholders allowed
    pub template: String,
    /// Literal token replaced inside the template
    pub token: String,
    /// Replacement value; placeholders allowed
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StepSpec {
    pub name: String,
    pub args: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capture: Option<Capture>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render: Option<Render>,
}

/// Batch setup configuration, stored in batch-setup.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Program plus any leading arguments, e.g. `["prolific"]`
    #[serde(default = "default_command")]
    pub command: Vec<String>,

    /// Values available to every step as `{name}`
    #[serde(default)]
    pub vars: BTreeMap<String, String>,

    /// Where rendered template files are written
    #[serde(default = "default_temp_path")]
    pub temp_path: PathBuf,

    #[serde(default = "default_steps")]
    pub steps: Vec<StepSpec>,
}

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

fn default_command() -> Vec<String> {
    vec![DEFAULT_PROGRAM.to_string()]
}

fn default_temp_path() -> PathBuf {
    std::env::temp_dir().join(TEMP_FILENAME)
}

fn args(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

fn capture(into: &str) -> Option<Capture> {
    Some(Capture {
        into: into.to_string(),
        marker: default_marker(),
        json_field: None,
    })
}

/// Dataset, batch and study creation for one AI task builder batch.
#[rustfmt::skip]
fn default_steps() -> Vec<StepSpec> {
    vec![
        StepSpec {
            name: "Create dataset".into(),
            args: args(&[
                "aitaskbuilder", "dataset", "create",
                "--name", "{batch_name}",
                "--workspace-id", "{workspace_id}",
            ]),
            capture: capture("dataset_id"),
            render: None,
        },
        StepSpec {
            name: "Upload dataset".into(),
            args: args(&[
                "aitaskbuilder", "dataset", "upload",
                "--dataset-id", "{dataset_id}",
                "--file", "{dataset_file}",
            ]),
            capture: None,
            render: None,
        },
        StepSpec {
            name: "Create batch".into(),
            args: args(&[
                "aitaskbuilder", "batch", "create",
                "--name", "{batch_name}",
                "--workspace-id", "{workspace_id}",
                "--dataset-id", "{dataset_id}",
                "--task-name", "{task_name}",
                "--task-introduction", "{task_introduction}",
                "--task-steps", "{task_steps}",
            ]),
            capture: capture("batch_id"),
            render: None,
        },
        StepSpec {
            name: "Set up batch".into(),
            args: args(&[
                "aitaskbuilder", "batch", "setup",
                "--batch-id", "{batch_id}",
                "--dataset-id", "{dataset_id}",
                "--tasks-per-group", "{tasks_per_group}",
            ]),
            capture: None,
            render: None,
        },
        StepSpec {
            name: "Create study".into(),
            args: args(&["study", "create", "--template-path", "{rendered_file}"]),
            capture: capture("study_id"),
            render: Some(Render {
                template: "{study_template}".into(),
                token: "${BATCH_ID}".into(),
                value: "{batch_id}".into(),
            }),
        },
    ]
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            vars: BTreeMap::new(),
            temp_path: default_temp_path(),
            steps: default_steps(),
        }
    }
}

impl PipelineConfig {
    /// Load config from a file that must exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(RelnotesError::DocumentNotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        let config: PipelineConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Load config from a file, or return defaults if it does not exist
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().is_file() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply a `key=value` override on top of `vars`
    pub fn set_var(&mut self, assignment: &str) -> Result<()> {
        let (key, value) = assignment.split_once('=').ok_or_else(|| {
            RelnotesError::InvalidInput(format!(
                "expected KEY=VALUE, got '{}'",
                assignment
            ))
        })?;
        let key = key.trim();
        if key.is_empty() {
            return Err(RelnotesError::InvalidInput(format!(
                "empty variable name in '{}'",
                assignment
            )));
        }
        self.vars.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
