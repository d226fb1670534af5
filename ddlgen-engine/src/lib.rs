//! DDL generation engine and export pipeline.
//!
//! The [`DdlEngine`] trait is the seam between the pipeline and whatever
//! produces DDL text; [`SqlEngine`] is the built-in implementation. The
//! [`ExportPipeline`] sequences directory provisioning, unit resolution,
//! script generation, and extension merging into the final script files.

mod dialect;
mod engine;
mod error;
mod merge;
mod pipeline;
mod report;
mod sink;
mod sql;

pub use dialect::{Dialect, IdGeneration};
pub use engine::{DdlEngine, EngineError, EngineOptions};
pub use error::ExportError;
pub use merge::merge_extensions;
pub use pipeline::{ExportConfig, ExportPipeline};
pub use report::{ExportReport, ScriptReport};
pub use sink::DiagnosticSink;
pub use sql::SqlEngine;
