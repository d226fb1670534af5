use std::{io, path::PathBuf};

use ddlgen_core::ScriptKind;
use thiserror::Error;

use crate::EngineError;

/// Failures of one export run. Every variant is fatal; the pipeline never
/// retries and never rolls back files already written.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Manifest, unit, or entity resolution failure
    #[error(transparent)]
    Model(#[from] Box<ddlgen_model::Error>),

    /// Invalid engine option, raised before any generation runs
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// The generation engine failed while producing a script
    #[error("{kind} script generation failed")]
    Generation {
        kind: ScriptKind,
        #[source]
        source: EngineError,
    },

    /// Directory creation, script write, or extension read failure
    #[error("i/o failure on '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ExportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ExportError::Io {
            path: path.into(),
            source,
        }
    }
}
