use std::io;
use std::process::Command;
use tracing::debug;

/// What an external invocation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    pub success: bool,
    /// Exit code, `None` when the process was killed by a signal
    pub code: Option<i32>,
    /// stdout followed by stderr
    pub output: String,
}

impl ProcessOutput {
    pub fn status_text(&self) -> String {
        match self.code {
            Some(code) => format!("exit code {}", code),
            None => "terminated by signal".to_string(),
        }
    }
}

/// Runs one external command to completion.
///
/// Only spawn failures are `Err`; a non-zero exit is reported through
/// [`ProcessOutput::success`].
pub trait CommandRunner {
    fn run(&mut self, program: &str, args: &[String]) -> io::Result<ProcessOutput>;
}

/// Runs commands with `std::process::Command` in the current directory,
/// blocking until they exit.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&mut self, program: &str, args: &[String]) -> io::Result<ProcessOutput> {
        let mut command = Command::new(program);
        command.args(args);

        debug!(program, ?args, "spawning");
        let output = command.output()?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.is_empty() {
            if !combined.is_empty() && !combined.ends_with('\n') {
                combined.push('\n');
            }
            combined.push_str(&stderr);
        }

        debug!(program, code = ?output.status.code(), "finished");
        Ok(ProcessOutput {
            success: output.status.success(),
            code: output.status.code(),
            output: combined,
        })
    }
}
