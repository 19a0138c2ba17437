//! # Batch Setup Pipeline
//!
//! Runs an ordered list of platform CLI invocations for one batch. Each step's
//! arguments are templates over `{name}` placeholders; a step may capture an
//! identifier from its output (an `ID: ...` line, or a JSON field) that later
//! steps refer to by name.
//!
//! ```text
//! Create dataset ──dataset_id──▶ Upload dataset
//!        │                              │
//!        └────────dataset_id────▶ Create batch ──batch_id──▶ Set up batch
//!                                       │
//!                                       └──batch_id──▶ Create study (rendered template)
//! ```
//!
//! Execution is strictly sequential and stops at the first failure: a spawn
//! error, a non-zero exit, or a missing identifier. Nothing is retried and
//! nothing is rolled back. The plan is checked before the first step runs, so
//! a typo in a placeholder never leaves a half-created batch behind.

pub mod capture;
pub mod config;
pub mod runner;
pub mod template;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{RelnotesError, Result};
use config::{PipelineConfig, StepSpec};
use runner::CommandRunner;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use template::{placeholders, substitute, RenderedFile};
use tracing::{debug, info};

/// Placeholder holding the batch name given on the command line.
pub const BATCH_NAME: &str = "batch_name";
/// Placeholder holding the path of the current step's rendered file.
pub const RENDERED_FILE: &str = "rendered_file";

pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn steps(&self) -> &[StepSpec] {
        &self.config.steps
    }

    /// Checks that every placeholder resolves to a variable, the batch name,
    /// or a value captured by an earlier step.
    pub fn validate(&self) -> Result<()> {
        if self.config.command.is_empty() {
            return Err(RelnotesError::InvalidInput(
                "command must name the platform CLI program".to_string(),
            ));
        }
        if self.config.steps.is_empty() {
            return Err(RelnotesError::InvalidInput(
                "no steps configured".to_string(),
            ));
        }

        let mut known: BTreeSet<&str> = self.config.vars.keys().map(String::as_str).collect();
        known.insert(BATCH_NAME);

        for step in &self.config.steps {
            let check = |text: &str, known: &BTreeSet<&str>| -> Result<()> {
                match placeholders(text).find(|name| !known.contains(name)) {
                    Some(name) => Err(RelnotesError::UnresolvedPlaceholder {
                        step: step.name.clone(),
                        name: name.to_string(),
                    }),
                    None => Ok(()),
                }
            };

            if let Some(render) = &step.render {
                check(&render.template, &known)?;
                check(&render.value, &known)?;
            }

            let mut step_known = known.clone();
            if step.render.is_some() {
                step_known.insert(RENDERED_FILE);
            }
            for arg in &step.args {
                check(arg, &step_known)?;
            }

            if let Some(capture) = &step.capture {
                known.insert(capture.into.as_str());
            }
        }
        Ok(())
    }

    /// Runs every step in order. `on_step` is called with the 1-based index
    /// and step before each invocation.
    pub fn run<R, F>(&self, batch_name: &str, runner: &mut R, mut on_step: F) -> Result<CmdResult>
    where
        R: CommandRunner,
        F: FnMut(usize, &StepSpec),
    {
        let batch_name = batch_name.trim();
        if batch_name.is_empty() {
            return Err(RelnotesError::InvalidInput(
                "batch name cannot be empty".to_string(),
            ));
        }
        self.validate()?;

        let mut values = self.config.vars.clone();
        values.insert(BATCH_NAME.to_string(), batch_name.to_string());

        let mut result = CmdResult::default();
        for (index, step) in self.config.steps.iter().enumerate() {
            on_step(index + 1, step);
            if let Some(value) = self.run_step(step, &values, runner)? {
                if let Some(capture) = &step.capture {
                    result.add_message(CmdMessage::success(format!(
                        "{}: {} = {}",
                        step.name, capture.into, value
                    )));
                    result.captured.insert(capture.into.clone(), value.clone());
                    values.insert(capture.into.clone(), value);
                }
            } else {
                result.add_message(CmdMessage::success(format!("{}: done", step.name)));
            }
        }

        info!(batch = batch_name, steps = self.config.steps.len(), "batch setup complete");
        Ok(result)
    }

    fn run_step<R: CommandRunner>(
        &self,
        step: &StepSpec,
        values: &BTreeMap<String, String>,
        runner: &mut R,
    ) -> Result<Option<String>> {
        // Held until this function returns so the file outlives the process.
        let rendered = match &step.render {
            Some(render) => {
                let template = substitute(&render.template, values, &step.name)?;
                let value = substitute(&render.value, values, &step.name)?;
                Some(RenderedFile::create(
                    Path::new(&template),
                    &render.token,
                    &value,
                    &self.config.temp_path,
                )?)
            }
            None => None,
        };

        let mut step_values;
        let values = match &rendered {
            Some(file) => {
                step_values = values.clone();
                step_values.insert(
                    RENDERED_FILE.to_string(),
                    file.path().to_string_lossy().into_owned(),
                );
                &step_values
            }
            None => values,
        };

        let (program, leading) = self
            .config
            .command
            .split_first()
            .ok_or_else(|| RelnotesError::InvalidInput("empty command".to_string()))?;
        let mut args = leading.to_vec();
        for arg in &step.args {
            args.push(substitute(arg, values, &step.name)?);
        }

        debug!(step = %step.name, program = %program, ?args, "running step");
        let output = runner
            .run(program, &args)
            .map_err(|source| RelnotesError::Spawn {
                step: step.name.clone(),
                source,
            })?;

        if !output.success {
            return Err(RelnotesError::StepFailed {
                step: step.name.clone(),
                status: output.status_text(),
                output: output.output,
            });
        }
        info!(step = %step.name, "step succeeded");

        step.capture
            .as_ref()
            .map(|rule| capture::apply(rule, &step.name, &output.output))
            .transpose()
    }
}
