//! The AutoRest runner: one call renders settings into arguments, invokes
//! the AutoRest executable, and returns the directory the client was
//! generated into.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Error;
use crate::settings::AutoRestSettings;
use crate::tool::{PathLocator, ProcessExecutor, StreamingExecutor, ToolLocator, ToolRunner};

/// Candidate executable names for AutoRest, in resolution priority order.
pub const EXECUTABLE_NAMES: [&str; 2] = ["autorest.exe", "autorest"];

/// Invokes AutoRest against an API specification file.
///
/// Each generate call is independent: settings are constructed per call,
/// exactly one child process is spawned, and the caller is blocked until
/// it exits. There is no retry, timeout, or cancellation in this layer.
#[derive(Debug)]
pub struct AutoRestRunner<L = PathLocator, E = StreamingExecutor> {
    tool: ToolRunner<L, E>,
}

impl AutoRestRunner {
    /// Create a runner using the default PATH-based locator and the
    /// log-relaying executor.
    pub fn new() -> Self {
        Self::with_collaborators(PathLocator, StreamingExecutor)
    }
}

impl Default for AutoRestRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl<L, E> AutoRestRunner<L, E>
where
    L: ToolLocator,
    E: ProcessExecutor,
{
    /// Create a runner with explicit locator and executor collaborators.
    pub fn with_collaborators(locator: L, executor: E) -> Self {
        Self {
            tool: ToolRunner::new(EXECUTABLE_NAMES, locator, executor),
        }
    }

    /// Run AutoRest from this directory instead of the caller's.
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.tool = self.tool.with_working_dir(dir);
        self
    }

    /// Generate a client for the given API specification file using
    /// default settings.
    pub async fn generate(&self, input_file: impl AsRef<Path>) -> Result<PathBuf, Error> {
        let settings = AutoRestSettings::new(input_file.as_ref());
        self.generate_with_settings(input_file, settings).await
    }

    /// Generate a client, configuring the settings via a callback before
    /// rendering.
    pub async fn generate_with(
        &self,
        input_file: impl AsRef<Path>,
        configure: impl FnOnce(&mut AutoRestSettings),
    ) -> Result<PathBuf, Error> {
        let mut settings = AutoRestSettings::new(input_file.as_ref());
        configure(&mut settings);
        self.generate_with_settings(input_file, settings).await
    }

    /// Generate a client using the provided settings.
    ///
    /// The settings' input file defaults to `input_file` only when unset.
    /// Returns the configured output directory, or `./Generated` when
    /// none was configured. The returned path is advisory: this layer
    /// does not verify that AutoRest actually populated it.
    pub async fn generate_with_settings(
        &self,
        input_file: impl AsRef<Path>,
        mut settings: AutoRestSettings,
    ) -> Result<PathBuf, Error> {
        if settings.input_file.is_none() {
            settings.input_file = Some(input_file.as_ref().to_path_buf());
        }

        let args = settings.to_args()?;
        debug!(command = %args.join(" "), "invoking AutoRest");

        self.tool.run(&args).await?;
        Ok(settings.output_directory_or_default())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use super::*;

    #[derive(Debug, Clone)]
    struct Invocation {
        program: PathBuf,
        args: Vec<String>,
    }

    /// Executor stub that records every spawn and reports a fixed exit code.
    #[derive(Clone)]
    struct StubExecutor {
        exit_code: i32,
        calls: Arc<Mutex<Vec<Invocation>>>,
    }

    impl StubExecutor {
        fn succeeding() -> Self {
            Self::with_exit_code(0)
        }

        fn with_exit_code(exit_code: i32) -> Self {
            Self {
                exit_code,
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn calls(&self) -> Vec<Invocation> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ProcessExecutor for StubExecutor {
        async fn run(
            &self,
            program: &Path,
            args: &[String],
            _working_dir: Option<&Path>,
        ) -> Result<i32, Error> {
            self.calls.lock().unwrap().push(Invocation {
                program: program.to_path_buf(),
                args: args.to_vec(),
            });
            Ok(self.exit_code)
        }
    }

    /// Locator stub that only recognizes a fixed set of names.
    struct StubLocator {
        known: Vec<&'static str>,
    }

    impl StubLocator {
        fn knowing(known: &[&'static str]) -> Self {
            Self {
                known: known.to_vec(),
            }
        }
    }

    impl ToolLocator for StubLocator {
        fn resolve(&self, candidates: &[&str]) -> Option<PathBuf> {
            candidates
                .iter()
                .find(|candidate| self.known.contains(candidate))
                .map(|candidate| Path::new("/stub/bin").join(candidate))
        }
    }

    fn runner_with(executor: StubExecutor) -> AutoRestRunner<StubLocator, StubExecutor> {
        AutoRestRunner::with_collaborators(StubLocator::knowing(&["autorest"]), executor)
    }

    #[tokio::test]
    async fn generate_spawns_once_with_input_rendered_first() {
        let executor = StubExecutor::succeeding();
        let runner = runner_with(executor.clone());

        runner.generate("spec.json").await.unwrap();

        let calls = executor.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].args[0], "-Input");
        assert_eq!(calls[0].args[1], "spec.json");
    }

    #[tokio::test]
    async fn generate_returns_default_output_directory() {
        let runner = runner_with(StubExecutor::succeeding());
        let output = runner.generate("spec.json").await.unwrap();
        assert_eq!(output, PathBuf::from("./Generated"));
    }

    #[tokio::test]
    async fn generate_returns_configured_output_directory_verbatim() {
        let runner = runner_with(StubExecutor::succeeding());
        let output = runner
            .generate_with("spec.json", |settings| {
                settings.output_directory = Some(PathBuf::from("clients/petstore"));
            })
            .await
            .unwrap();
        assert_eq!(output, PathBuf::from("clients/petstore"));
    }

    #[tokio::test]
    async fn settings_input_file_wins_over_call_argument() {
        let executor = StubExecutor::succeeding();
        let runner = runner_with(executor.clone());

        let settings = AutoRestSettings::new("from-settings.json");
        runner
            .generate_with_settings("from-call.json", settings)
            .await
            .unwrap();

        assert_eq!(executor.calls()[0].args[1], "from-settings.json");
    }

    #[tokio::test]
    async fn nonzero_exit_propagates_with_the_tool_code() {
        let executor = StubExecutor::with_exit_code(3);
        let runner = runner_with(executor.clone());

        let result = runner.generate("spec.json").await;

        assert!(matches!(result, Err(Error::ToolFailed { code: 3 })));
        assert_eq!(executor.calls().len(), 1);
    }

    #[tokio::test]
    async fn empty_input_fails_before_any_spawn() {
        let executor = StubExecutor::succeeding();
        let runner = runner_with(executor.clone());

        let result = runner.generate("").await;

        assert!(matches!(result, Err(Error::MissingInputFile)));
        assert!(executor.calls().is_empty());
    }

    #[tokio::test]
    async fn resolution_falls_back_to_second_candidate_name() {
        // The stub only knows the bare name, so "autorest.exe" misses and
        // "autorest" must be tried next.
        let executor = StubExecutor::succeeding();
        let runner = AutoRestRunner::with_collaborators(
            StubLocator::knowing(&["autorest"]),
            executor.clone(),
        );

        runner.generate("spec.json").await.unwrap();

        assert_eq!(
            executor.calls()[0].program,
            Path::new("/stub/bin/autorest")
        );
    }

    #[tokio::test]
    async fn missing_tool_fails_without_spawning() {
        let executor = StubExecutor::succeeding();
        let runner =
            AutoRestRunner::with_collaborators(StubLocator::knowing(&[]), executor.clone());

        let result = runner.generate("spec.json").await;

        assert!(matches!(result, Err(Error::ToolNotFound { .. })));
        assert!(executor.calls().is_empty());
    }

    #[tokio::test]
    async fn returned_output_path_is_advisory_only() {
        // The runner reports ./Generated without checking that the tool
        // actually wrote anything there. Documented correctness gap,
        // inherited deliberately: verifying output is the pipeline's job.
        let dir = tempfile::tempdir().unwrap();
        let runner = runner_with(StubExecutor::succeeding()).with_working_dir(dir.path());

        let output = runner.generate("spec.json").await.unwrap();

        assert_eq!(output, PathBuf::from("./Generated"));
        assert!(!dir.path().join("Generated").exists());
    }
}
