//! Generic external-tool invocation: resolve an executable from a list of
//! candidate names, spawn it, relay its output to the log, and report its
//! exit status.
//!
//! The locator and executor are injected so callers (and tests) can swap
//! in stubs; the defaults probe `PATH` via `which` and spawn through
//! `tokio::process` with line-buffered log relaying.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::error::Error;

/// Locates an executable from a prioritized list of candidate names.
pub trait ToolLocator: Send + Sync {
    /// Try each candidate in declared order; the first that resolves wins.
    fn resolve(&self, candidates: &[&str]) -> Option<PathBuf>;
}

/// Default locator: probes each candidate name on `PATH`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathLocator;

impl ToolLocator for PathLocator {
    fn resolve(&self, candidates: &[&str]) -> Option<PathBuf> {
        candidates.iter().find_map(|name| which::which(name).ok())
    }
}

/// Spawns a resolved executable and reports its exit code.
#[async_trait]
pub trait ProcessExecutor: Send + Sync {
    /// Run the program to completion, blocking the caller until it exits.
    /// Returns the child's exit code; errors only on launch failure.
    async fn run(
        &self,
        program: &Path,
        args: &[String],
        working_dir: Option<&Path>,
    ) -> Result<i32, Error>;
}

/// Default executor: pipes the child's stdout and stderr and relays each
/// line into the log while waiting for the process to finish.
#[derive(Debug, Clone, Copy, Default)]
pub struct StreamingExecutor;

#[async_trait]
impl ProcessExecutor for StreamingExecutor {
    async fn run(
        &self,
        program: &Path,
        args: &[String],
        working_dir: Option<&Path>,
    ) -> Result<i32, Error> {
        let mut cmd = Command::new(program);
        cmd.args(args).stdout(Stdio::piped()).stderr(Stdio::piped());
        if let Some(dir) = working_dir {
            cmd.current_dir(dir);
        }

        let mut child = cmd.spawn().map_err(|source| Error::Spawn {
            program: program.to_path_buf(),
            source,
        })?;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();

        let stdout_task = tokio::spawn(async move {
            if let Some(stdout) = stdout {
                let mut lines = BufReader::new(stdout).lines();
                while let Ok(Some(line)) = lines.next_line().await {
                    if !line.trim().is_empty() {
                        info!(target: "autorest", "{line}");
                    }
                }
            }
        });
        let stderr_task = tokio::spawn(async move {
            if let Some(stderr) = stderr {
                let mut lines = BufReader::new(stderr).lines();
                while let Ok(Some(line)) = lines.next_line().await {
                    if !line.trim().is_empty() {
                        warn!(target: "autorest", "{line}");
                    }
                }
            }
        });

        // Drain both streams before collecting the status so no output
        // is lost on fast-exiting children.
        let _ = tokio::join!(stdout_task, stderr_task);

        let status = child.wait().await.map_err(|source| Error::Spawn {
            program: program.to_path_buf(),
            source,
        })?;

        Ok(status.code().unwrap_or(-1))
    }
}

/// Resolves and runs one external tool.
///
/// Owns the candidate executable names, a locator, an executor, and an
/// optional working directory. One `run` call performs exactly one
/// resolve and one spawn; a non-zero exit status is an error, never a
/// partial result.
#[derive(Debug)]
pub struct ToolRunner<L, E> {
    candidates: Vec<String>,
    locator: L,
    executor: E,
    working_dir: Option<PathBuf>,
}

impl<L, E> ToolRunner<L, E>
where
    L: ToolLocator,
    E: ProcessExecutor,
{
    /// Create a runner for the given candidate executable names.
    pub fn new(candidates: impl IntoIterator<Item = impl Into<String>>, locator: L, executor: E) -> Self {
        Self {
            candidates: candidates.into_iter().map(Into::into).collect(),
            locator,
            executor,
            working_dir: None,
        }
    }

    /// Run the tool from this directory instead of the caller's.
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Locate the tool executable, trying candidate names in order.
    pub fn resolve(&self) -> Result<PathBuf, Error> {
        let names: Vec<&str> = self.candidates.iter().map(String::as_str).collect();
        self.locator
            .resolve(&names)
            .ok_or_else(|| Error::ToolNotFound {
                candidates: self.candidates.clone(),
            })
    }

    /// Resolve the executable and run it with the given arguments,
    /// waiting for completion. Fails on resolution failure, launch
    /// failure, or non-zero exit.
    pub async fn run(&self, args: &[String]) -> Result<(), Error> {
        let program = self.resolve()?;
        debug!(program = %program.display(), "resolved tool executable");

        let code = self
            .executor
            .run(&program, args, self.working_dir.as_deref())
            .await?;
        if code != 0 {
            return Err(Error::ToolFailed { code });
        }
        Ok(())
    }
}
