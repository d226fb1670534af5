use std::path::PathBuf;

use clap::Args;
use ddlgen_model::{Manifest, resolve_unit};
use eyre::Result;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to persistence.toml (defaults to ./persistence.toml)
    #[arg(short, long, default_value = "persistence.toml")]
    pub config: PathBuf,

    /// Also resolve this unit's entities against the manifest
    #[arg(short, long)]
    pub unit: Option<String>,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.config).unwrap_or_exit();

        println!("✓ {} is valid\n", self.config.display());

        let unit_count = manifest.units().len();
        println!(
            "  {} unit{}:",
            unit_count,
            if unit_count == 1 { "" } else { "s" }
        );
        for unit in manifest.units() {
            println!(
                "    {} ({} entit{})",
                unit.name.as_deref().unwrap_or("<unnamed>"),
                unit.entities.len(),
                if unit.entities.len() == 1 { "y" } else { "ies" }
            );
        }

        let entities: Vec<_> = manifest.entity_names().collect();
        if !entities.is_empty() {
            println!(
                "\n  {} entit{}: {}",
                entities.len(),
                if entities.len() == 1 { "y" } else { "ies" },
                entities.join(", ")
            );
        }

        if let Some(unit) = &self.unit {
            let model = resolve_unit(unit, manifest.units(), &manifest).unwrap_or_exit();
            println!(
                "\n✓ unit '{}' resolves to {} entit{}",
                unit.trim(),
                model.len(),
                if model.len() == 1 { "y" } else { "ies" }
            );
        }

        Ok(())
    }
}
