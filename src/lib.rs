#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]

//! Thin adapter for invoking the AutoRest code generator from a build
//! pipeline.
//!
//! AutoRest itself is opaque: this crate only locates its executable,
//! renders a typed [`AutoRestSettings`] into command-line arguments,
//! spawns the process while relaying its output to the log, and returns
//! the conventional output directory.
//!
//! ```no_run
//! use autorest_run::{AutoRestRunner, Generator};
//!
//! # async fn demo() -> Result<(), autorest_run::Error> {
//! let runner = AutoRestRunner::new();
//! let output = runner
//!     .generate_with("petstore.json", |settings| {
//!         settings.generator = Some(Generator::CSharp);
//!         settings.namespace = Some("Petstore.Client".to_string());
//!     })
//!     .await?;
//! println!("client generated into {}", output.display());
//! # Ok(())
//! # }
//! ```

pub mod cli;
mod error;
mod runner;
mod settings;
mod tool;

pub use error::Error;
pub use runner::{AutoRestRunner, EXECUTABLE_NAMES};
pub use settings::{AutoRestSettings, DEFAULT_OUTPUT_DIR, Generator};
pub use tool::{PathLocator, ProcessExecutor, StreamingExecutor, ToolLocator, ToolRunner};
