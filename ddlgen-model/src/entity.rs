use ddlgen_core::to_snake_case;
use indexmap::IndexMap;
use serde::Deserialize;

/// An entity definition as declared in the manifest under `[entity.<Name>]`.
///
/// The entity name is the table key in the manifest, so it is not part of
/// this struct; [`EntityDef::into_entity`] attaches it.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntityDef {
    /// Table name; defaults to the snake_cased entity name
    pub table: Option<String>,

    /// Columns in declaration order
    #[serde(default)]
    pub columns: IndexMap<String, Column>,
}

impl EntityDef {
    /// Resolve this definition into an [`Entity`] under the given name.
    pub fn into_entity(self, name: &str) -> Entity {
        let table = self
            .table
            .unwrap_or_else(|| to_snake_case(name));
        Entity {
            name: name.to_string(),
            table,
            columns: self.columns,
        }
    }
}

/// A column declaration.
///
/// The SQL type is an opaque pass-through string; ddlgen does not validate
/// dialect correctness.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Column {
    #[serde(rename = "type")]
    pub sql_type: String,

    #[serde(default = "default_nullable")]
    pub nullable: bool,

    #[serde(default)]
    pub primary_key: bool,

    #[serde(default)]
    pub unique: bool,

    /// Default value expression, rendered verbatim
    #[serde(default)]
    pub default: Option<String>,
}

fn default_nullable() -> bool {
    true
}

/// A resolved entity type registered in a mapping model.
#[derive(Debug, Clone)]
pub struct Entity {
    pub name: String,
    pub table: String,
    pub columns: IndexMap<String, Column>,
}

impl Entity {
    /// Names of the primary-key columns, in declaration order.
    pub fn primary_key_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|(_, column)| column.primary_key)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}
