use std::path::{Path, PathBuf};

use ddlgen_core::{ScriptKind, ensure_parent_dirs, write_script};
use ddlgen_model::{ExtendedScripts, PersistenceUnitDescriptor, TypeResolver, resolve_unit};

use crate::{
    DdlEngine, Dialect, DiagnosticSink, EngineOptions, ExportError, ExportReport, IdGeneration,
    ScriptReport, merge_extensions,
};

/// Configuration of one export run.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Persistence unit to export; matched case-insensitively after trimming
    pub unit_name: String,

    /// Statement delimiter passed to the engine
    pub delimiter: String,

    pub create_output: PathBuf,
    pub drop_output: PathBuf,

    /// Presence toggles the optional update step
    pub update_output: Option<PathBuf>,

    /// Dialect override; empty or absent leaves the engine default
    pub dialect: Option<String>,

    /// Id-generation strategy override; empty or absent leaves the engine default
    pub id_generation: Option<String>,

    /// Extension scripts merged into each generated file
    pub extended: ExtendedScripts,
}

impl ExportConfig {
    pub fn new(unit_name: impl Into<String>) -> Self {
        Self {
            unit_name: unit_name.into(),
            delimiter: ";".to_string(),
            create_output: PathBuf::from("target/ddl/create.sql"),
            drop_output: PathBuf::from("target/ddl/drop.sql"),
            update_output: None,
            dialect: None,
            id_generation: None,
            extended: ExtendedScripts::default(),
        }
    }

    fn engine_options(&self) -> Result<EngineOptions, ExportError> {
        let mut options = EngineOptions {
            delimiter: self.delimiter.clone(),
            ..EngineOptions::default()
        };
        if let Some(dialect) = non_empty(self.dialect.as_deref()) {
            options.dialect = dialect.parse::<Dialect>()?;
        }
        if let Some(strategy) = non_empty(self.id_generation.as_deref()) {
            options.id_generation = Some(strategy.parse::<IdGeneration>()?);
        }
        Ok(options)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// The export pipeline: provision output directories, resolve the mapping
/// model, generate the create/drop/update scripts, then merge extension
/// entries into each.
///
/// The sequence is strictly linear and single-pass. Any failure is terminal
/// for the run; files already written stay on disk as-is.
pub struct ExportPipeline<'a> {
    engine: &'a dyn DdlEngine,
    config: ExportConfig,
}

impl<'a> ExportPipeline<'a> {
    pub fn new(engine: &'a dyn DdlEngine, config: ExportConfig) -> Self {
        Self { engine, config }
    }

    pub fn run(
        &self,
        descriptors: &[PersistenceUnitDescriptor],
        resolver: &dyn TypeResolver,
    ) -> Result<ExportReport, ExportError> {
        let config = &self.config;

        self.provision()?;

        // Invalid options fail before the model is touched
        let options = config.engine_options()?;

        let model = resolve_unit(&config.unit_name, descriptors, resolver)?;

        let mut sink = DiagnosticSink::default();
        let create = self
            .engine
            .create_script(&model, &options, &mut sink)
            .map_err(|e| generation(ScriptKind::Create, e))?;
        let drop = self
            .engine
            .drop_script(&model, &options, &mut sink)
            .map_err(|e| generation(ScriptKind::Drop, e))?;
        let update = match &config.update_output {
            Some(path) => self
                .engine
                .update_script(&model, &options, &mut sink)
                .map_err(|e| generation(ScriptKind::Update, e))?
                .map(|text| (path.as_path(), text)),
            None => None,
        };

        write(&config.create_output, &create)?;
        write(&config.drop_output, &drop)?;
        if let Some((path, text)) = &update {
            write(path, text)?;
        }

        let mut scripts = Vec::with_capacity(3);
        scripts.push(self.merge(ScriptKind::Create, &config.create_output)?);
        scripts.push(self.merge(ScriptKind::Drop, &config.drop_output)?);
        if let Some((path, _)) = &update {
            scripts.push(self.merge(ScriptKind::Update, path)?);
        }

        Ok(ExportReport {
            unit: config.unit_name.trim().to_string(),
            entity_count: model.len(),
            scripts,
            diagnostics: sink.into_lines(),
        })
    }

    /// Create the parent directories of every configured output file.
    fn provision(&self) -> Result<(), ExportError> {
        let config = &self.config;
        let mut paths = vec![config.create_output.as_path(), config.drop_output.as_path()];
        if let Some(update) = &config.update_output {
            paths.push(update.as_path());
        }
        for path in paths {
            ensure_parent_dirs([path]).map_err(|e| ExportError::io(path, e))?;
        }
        Ok(())
    }

    fn merge(&self, kind: ScriptKind, target: &Path) -> Result<ScriptReport, ExportError> {
        let entries = self.config.extended.for_kind(kind);
        merge_extensions(target, entries)?;
        Ok(ScriptReport {
            kind,
            path: target.to_path_buf(),
            merged_entries: entries.len(),
        })
    }
}

fn generation(kind: ScriptKind, source: crate::EngineError) -> ExportError {
    ExportError::Generation { kind, source }
}

fn write(path: &Path, content: &str) -> Result<(), ExportError> {
    write_script(path, content).map_err(|e| ExportError::io(path, e))
}
