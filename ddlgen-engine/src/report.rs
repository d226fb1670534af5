use std::path::PathBuf;

use ddlgen_core::ScriptKind;

/// Summary of one completed export run.
#[derive(Debug)]
pub struct ExportReport {
    /// The resolved persistence unit name (trimmed)
    pub unit: String,

    /// Entities registered in the mapping model
    pub entity_count: usize,

    /// One entry per script artifact written, in pipeline order
    pub scripts: Vec<ScriptReport>,

    /// Engine diagnostics captured during generation
    pub diagnostics: Vec<String>,
}

/// Summary of one written script artifact.
#[derive(Debug)]
pub struct ScriptReport {
    pub kind: ScriptKind,
    pub path: PathBuf,

    /// Extension entries merged after the generated block
    pub merged_entries: usize,
}
