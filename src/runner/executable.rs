//! Executable abstraction for package manager binaries.
//!
//! The engine talks to an [`Executable`] instead of spawning processes
//! directly, so tests can swap in a double that records invocations.

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use thiserror::Error;

/// One invocation of an executable.
#[derive(Debug)]
pub struct Execution<'a> {
    /// Working directory of the invocation.
    pub dir: &'a Path,
    /// Arguments after the program name.
    pub args: &'a [String],
    /// Receives stdout and stderr in the order they were written.
    pub output: &'a mut Vec<u8>,
}

/// Why an invocation did not succeed.
#[derive(Error, Debug)]
pub enum ExecutionError {
    /// The process ran and exited unsuccessfully. `None` means it was
    /// terminated by a signal.
    #[error("{}", describe_exit(*code))]
    Exit { code: Option<i32> },

    /// The process could not be started.
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The process started but its output or exit status was lost.
    #[error("failed to collect output of {program}: {source}")]
    Collect {
        program: String,
        #[source]
        source: io::Error,
    },
}

fn describe_exit(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with code {code}"),
        None => "terminated by signal".to_string(),
    }
}

/// Something that can run an argument vector in a directory.
pub trait Executable {
    /// Run to completion, capturing output into `execution.output`.
    fn execute(&self, execution: Execution<'_>) -> Result<(), ExecutionError>;
}

impl<E: Executable + ?Sized> Executable for &E {
    fn execute(&self, execution: Execution<'_>) -> Result<(), ExecutionError> {
        (**self).execute(execution)
    }
}

/// Runs a binary as a child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessExecutable {
    program: PathBuf,
}

impl ProcessExecutable {
    /// Create an executable for a program name or path.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Executable for ProcessExecutable {
    fn execute(&self, execution: Execution<'_>) -> Result<(), ExecutionError> {
        let program = || self.program.display().to_string();
        let spawn_err = |source: io::Error| ExecutionError::Spawn {
            program: program(),
            source,
        };

        // Both streams share one pipe so the output keeps the order it was
        // written in.
        let (mut reader, writer) = os_pipe::pipe().map_err(spawn_err)?;
        let writer_clone = writer.try_clone().map_err(spawn_err)?;

        let mut command = Command::new(&self.program);
        command
            .args(execution.args)
            .current_dir(execution.dir)
            .stdin(Stdio::null())
            .stdout(writer)
            .stderr(writer_clone);

        tracing::trace!(
            program = %self.program.display(),
            args = ?execution.args,
            dir = %execution.dir.display(),
            "spawning"
        );

        let mut child = command.spawn().map_err(spawn_err)?;
        // The command holds the write ends; drop it so the read sees EOF.
        drop(command);

        let collect_err = |source: io::Error| ExecutionError::Collect {
            program: program(),
            source,
        };
        if let Err(source) = reader.read_to_end(execution.output) {
            let _ = child.kill();
            let _ = child.wait();
            return Err(collect_err(source));
        }
        let status = child.wait().map_err(collect_err)?;

        if status.success() {
            Ok(())
        } else {
            Err(ExecutionError::Exit {
                code: status.code(),
            })
        }
    }
}
