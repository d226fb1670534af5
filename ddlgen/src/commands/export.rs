use std::path::PathBuf;

use clap::Args;
use ddlgen_engine::{ExportConfig, ExportError, ExportPipeline, ExportReport, SqlEngine};
use ddlgen_model::Manifest;
use eyre::{Result, WrapErr, bail};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct ExportCommand {
    /// Path to persistence.toml (defaults to ./persistence.toml)
    #[arg(short, long, default_value = "persistence.toml")]
    pub config: PathBuf,

    /// Persistence unit to export (defaults to the manifest's only unit)
    #[arg(short, long)]
    pub unit: Option<String>,

    /// Statement delimiter passed to the generation engine
    #[arg(long, default_value = ";")]
    pub delimiter: String,

    /// Output file for the creation script
    #[arg(long, default_value = "target/ddl/create.sql")]
    pub create_output: PathBuf,

    /// Output file for the drop script
    #[arg(long, default_value = "target/ddl/drop.sql")]
    pub drop_output: PathBuf,

    /// Output file for the update script; omitting it skips the update step
    #[arg(long)]
    pub update_output: Option<PathBuf>,

    /// SQL dialect (generic, postgres, mysql, sqlite)
    #[arg(long)]
    pub dialect: Option<String>,

    /// Primary-key generation strategy (identity, sequence)
    #[arg(long)]
    pub id_generation: Option<String>,

    /// Print engine diagnostics captured during generation
    #[arg(long)]
    pub verbose: bool,
}

impl ExportCommand {
    /// Run the export command
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.config).unwrap_or_exit();

        let unit = match &self.unit {
            Some(unit) => unit.clone(),
            None => match manifest.sole_unit() {
                Some(unit) => unit.to_string(),
                None => bail!(
                    "--unit is required when {} does not declare exactly one named unit",
                    self.config.display()
                ),
            },
        };

        let config = ExportConfig {
            unit_name: unit,
            delimiter: self.delimiter.clone(),
            create_output: self.create_output.clone(),
            drop_output: self.drop_output.clone(),
            update_output: self.update_output.clone(),
            dialect: self.dialect.clone(),
            id_generation: self.id_generation.clone(),
            extended: manifest.scripts.clone(),
        };

        let pipeline = ExportPipeline::new(&SqlEngine, config);
        let report = match pipeline.run(manifest.units(), &manifest) {
            Ok(report) => report,
            Err(ExportError::Model(e)) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
            Err(e) => return Err(e).wrap_err("Export failed"),
        };

        self.print_summary(&report);
        Ok(())
    }

    fn print_summary(&self, report: &ExportReport) {
        println!(
            "✓ Exported unit '{}' ({} entit{})\n",
            report.unit,
            report.entity_count,
            if report.entity_count == 1 { "y" } else { "ies" }
        );
        for script in &report.scripts {
            if script.merged_entries > 0 {
                println!(
                    "  {:<6} {} (+{} extension entr{})",
                    script.kind,
                    script.path.display(),
                    script.merged_entries,
                    if script.merged_entries == 1 { "y" } else { "ies" }
                );
            } else {
                println!("  {:<6} {}", script.kind, script.path.display());
            }
        }
        if self.verbose && !report.diagnostics.is_empty() {
            println!();
            for line in &report.diagnostics {
                println!("  {line}");
            }
        }
    }
}
