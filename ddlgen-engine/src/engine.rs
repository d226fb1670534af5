use ddlgen_model::MappingModel;
use thiserror::Error;

use crate::{Dialect, DiagnosticSink, IdGeneration};

/// Options applied to the generation engine for one run.
#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Statement delimiter appended to every generated statement
    pub delimiter: String,

    pub dialect: Dialect,

    /// Identifier generation strategy for primary-key columns; `None`
    /// leaves the engine's default rendering in place
    pub id_generation: Option<IdGeneration>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            delimiter: ";".to_string(),
            dialect: Dialect::default(),
            id_generation: None,
        }
    }
}

/// A DDL generation engine.
///
/// Given a resolved mapping model, an engine produces the text of the
/// create, drop, and update scripts. Verbose per-entity diagnostics go to
/// the sink borrowed for the call, never to the process streams.
pub trait DdlEngine {
    /// Generate the schema creation script.
    fn create_script(
        &self,
        model: &MappingModel,
        options: &EngineOptions,
        sink: &mut DiagnosticSink,
    ) -> Result<String, EngineError>;

    /// Generate the schema removal script.
    fn drop_script(
        &self,
        model: &MappingModel,
        options: &EngineOptions,
        sink: &mut DiagnosticSink,
    ) -> Result<String, EngineError>;

    /// Generate the incremental update script, or `None` if this engine
    /// cannot produce one.
    fn update_script(
        &self,
        model: &MappingModel,
        options: &EngineOptions,
        sink: &mut DiagnosticSink,
    ) -> Result<Option<String>, EngineError>;
}

/// Engine-level failures, surfaced by the pipeline as generation failures.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("unknown dialect '{0}'")]
    UnknownDialect(String),

    #[error("unknown id generation strategy '{0}' (expected 'identity' or 'sequence')")]
    UnknownIdGeneration(String),

    #[error("{0}")]
    Render(String),
}
