//! Settings for a single AutoRest invocation and their rendering into
//! command-line arguments.
//!
//! Rendering is a pure transformation: the same settings state always
//! produces the same token sequence, in a fixed field order. Optional
//! fields that are unset contribute no tokens at all.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Error;

/// Directory AutoRest writes to when no output directory is configured.
pub const DEFAULT_OUTPUT_DIR: &str = "./Generated";

/// Target language generator passed to AutoRest via `-CodeGenerator`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
pub enum Generator {
    #[serde(rename = "CSharp")]
    CSharp,
    #[serde(rename = "Azure.CSharp")]
    AzureCSharp,
    #[serde(rename = "NodeJS")]
    NodeJs,
    #[serde(rename = "Python")]
    Python,
    #[serde(rename = "Ruby")]
    Ruby,
    #[serde(rename = "Java")]
    Java,
    #[serde(rename = "Go")]
    Go,
}

impl Generator {
    /// The spelling AutoRest expects on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Generator::CSharp => "CSharp",
            Generator::AzureCSharp => "Azure.CSharp",
            Generator::NodeJs => "NodeJS",
            Generator::Python => "Python",
            Generator::Ruby => "Ruby",
            Generator::Java => "Java",
            Generator::Go => "Go",
        }
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for one AutoRest invocation.
///
/// Created per invocation, configured once by the caller (directly or via
/// a configuration callback), consumed by [`AutoRestSettings::to_args`],
/// then discarded. `input_file` must be non-empty by render time; every
/// other field is optional and emits nothing when unset.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields, default)]
pub struct AutoRestSettings {
    /// Local API specification file (e.g. a swagger definition).
    pub input_file: Option<PathBuf>,
    /// Directory the generated client is written to.
    pub output_directory: Option<PathBuf>,
    /// Target language generator.
    pub generator: Option<Generator>,
    /// Modeler used to parse the input specification.
    pub modeler: Option<String>,
    /// Namespace for the generated client code.
    pub namespace: Option<String>,
    /// Name of the generated client type.
    pub client_name: Option<String>,
    /// Emit the whole client into a single file with this name.
    pub output_file_name: Option<String>,
    /// Flatten payloads with at most this many properties.
    pub payload_flattening_threshold: Option<u32>,
    /// Generate a credential property on the client.
    pub add_credentials: bool,
    /// License header comment placed at the top of generated files.
    pub header_comment: Option<String>,
    /// Ask AutoRest for verbose output.
    pub verbose: bool,
}

impl AutoRestSettings {
    /// Create settings for the given input specification file.
    pub fn new(input_file: impl Into<PathBuf>) -> Self {
        Self {
            input_file: Some(input_file.into()),
            ..Self::default()
        }
    }

    /// Load settings from a TOML file.
    ///
    /// Missing keys deserialize to their defaults; unknown keys are
    /// rejected so typos fail loudly instead of silently dropping options.
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let contents = fs::read_to_string(path).map_err(|source| Error::ReadSettings {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| Error::ParseSettings {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Render the settings into AutoRest command-line tokens.
    ///
    /// The input file pair always renders first; remaining fields follow in
    /// a fixed order so identical settings always produce identical token
    /// sequences. Fails with [`Error::MissingInputFile`] when no input file
    /// is set, before any process is spawned.
    pub fn to_args(&self) -> Result<Vec<String>, Error> {
        let input = self
            .input_file
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
            .ok_or(Error::MissingInputFile)?;

        let mut args = vec!["-Input".to_string(), input.display().to_string()];
        if let Some(dir) = &self.output_directory {
            args.push("-OutputDirectory".to_string());
            args.push(dir.display().to_string());
        }
        if let Some(generator) = self.generator {
            args.push("-CodeGenerator".to_string());
            args.push(generator.as_str().to_string());
        }
        if let Some(modeler) = &self.modeler {
            args.push("-Modeler".to_string());
            args.push(modeler.clone());
        }
        if let Some(namespace) = &self.namespace {
            args.push("-Namespace".to_string());
            args.push(namespace.clone());
        }
        if let Some(client_name) = &self.client_name {
            args.push("-ClientName".to_string());
            args.push(client_name.clone());
        }
        if let Some(file_name) = &self.output_file_name {
            args.push("-OutputFileName".to_string());
            args.push(file_name.clone());
        }
        if let Some(threshold) = self.payload_flattening_threshold {
            args.push("-PayloadFlatteningThreshold".to_string());
            args.push(threshold.to_string());
        }
        if self.add_credentials {
            args.push("-AddCredentials".to_string());
            args.push("true".to_string());
        }
        if let Some(header) = &self.header_comment {
            args.push("-Header".to_string());
            args.push(header.clone());
        }
        if self.verbose {
            args.push("-Verbose".to_string());
        }
        Ok(args)
    }

    /// The directory the caller should look for generated output in:
    /// the configured output directory, or [`DEFAULT_OUTPUT_DIR`].
    pub fn output_directory_or_default(&self) -> PathBuf {
        self.output_directory
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
    }
}
