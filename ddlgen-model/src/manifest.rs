use std::{path::Path, str::FromStr};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{
    Entity, EntityDef, Error, ExtendedScripts, PersistenceUnitDescriptor, Result, TypeResolver,
};

/// Root manifest for persistence.toml
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Persistence units, in declaration order
    #[serde(default, rename = "unit")]
    units: Vec<PersistenceUnitDescriptor>,

    /// Entity definitions, keyed by entity name
    #[serde(default, rename = "entity")]
    entities: IndexMap<String, EntityDef>,

    /// Extension scripts merged into the generated files
    #[serde(default)]
    pub scripts: ExtendedScripts,
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "persistence.toml")
    }
}

impl Manifest {
    /// Parse a persistence.toml file from the given path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a persistence.toml from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let manifest: Self =
            toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
        manifest.validate(content, filename)?;
        Ok(manifest)
    }

    /// Unit descriptors in declaration order
    pub fn units(&self) -> &[PersistenceUnitDescriptor] {
        &self.units
    }

    /// The only named unit, if the manifest declares exactly one
    pub fn sole_unit(&self) -> Option<&str> {
        let mut named = self.units.iter().filter_map(|unit| unit.name.as_deref());
        match (named.next(), named.next()) {
            (Some(name), None) => Some(name),
            _ => None,
        }
    }

    /// Declared entity names, in declaration order
    pub fn entity_names(&self) -> impl Iterator<Item = &str> {
        self.entities.keys().map(String::as_str)
    }

    /// Validate the manifest after parsing.
    ///
    /// Entity names referenced by units are deliberately not checked here;
    /// that happens at resolution time against the selected unit only, so a
    /// manifest may carry units whose entities are defined elsewhere.
    fn validate(&self, src: &str, filename: &str) -> Result<()> {
        for (name, entity) in &self.entities {
            if name.trim().is_empty() {
                return Err(Error::validation("entity name must not be empty", src, filename));
            }
            if entity.columns.is_empty() {
                return Err(Error::validation(
                    format!("entity '{name}' defines no columns"),
                    src,
                    filename,
                ));
            }
            if let Some(table) = &entity.table
                && table.trim().is_empty()
            {
                return Err(Error::validation(
                    format!("entity '{name}' has an empty table name"),
                    src,
                    filename,
                ));
            }
            for (column, def) in &entity.columns {
                if def.sql_type.trim().is_empty() {
                    return Err(Error::validation(
                        format!("column '{name}.{column}' has an empty type"),
                        src,
                        filename,
                    ));
                }
            }
        }
        Ok(())
    }
}

impl TypeResolver for Manifest {
    fn resolve(&self, name: &str) -> Option<Entity> {
        self.entities
            .get(name)
            .map(|def| def.clone().into_entity(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"
        [[unit]]
        name = "store"
        entities = ["Customer", "Order"]

        [entity.Customer.columns.id]
        type = "bigint"
        primary-key = true

        [entity.Customer.columns.email]
        type = "varchar(255)"
        nullable = false
        unique = true

        [entity.Order]
        table = "orders"

        [entity.Order.columns.id]
        type = "bigint"
        primary-key = true

        [scripts]
        create = ["create index idx_email on customer (email)"]
    "#;

    #[test]
    fn test_parse_manifest() {
        let manifest = Manifest::from_str(MANIFEST).unwrap();

        assert_eq!(manifest.units().len(), 1);
        assert_eq!(manifest.units()[0].name.as_deref(), Some("store"));
        assert_eq!(manifest.units()[0].entities, ["Customer", "Order"]);
        assert_eq!(manifest.scripts.create.len(), 1);
        assert!(manifest.scripts.drop.is_empty());
    }

    #[test]
    fn test_resolver_defaults_table_name() {
        let manifest = Manifest::from_str(MANIFEST).unwrap();

        let customer = manifest.resolve("Customer").unwrap();
        assert_eq!(customer.table, "customer");

        let order = manifest.resolve("Order").unwrap();
        assert_eq!(order.table, "orders");
    }

    #[test]
    fn test_resolver_unknown_entity() {
        let manifest = Manifest::from_str(MANIFEST).unwrap();
        assert!(manifest.resolve("Ghost").is_none());
    }

    #[test]
    fn test_column_order_is_declaration_order() {
        let manifest = Manifest::from_str(MANIFEST).unwrap();
        let customer = manifest.resolve("Customer").unwrap();

        let columns: Vec<_> = customer.columns.keys().map(String::as_str).collect();
        assert_eq!(columns, ["id", "email"]);
    }

    #[test]
    fn test_sole_unit() {
        let manifest = Manifest::from_str(MANIFEST).unwrap();
        assert_eq!(manifest.sole_unit(), Some("store"));
    }

    #[test]
    fn test_entity_without_columns_is_rejected() {
        let err = Manifest::from_str(
            r#"
            [entity.Empty]
            table = "empty"
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_empty_column_type_is_rejected() {
        let err = Manifest::from_str(
            r#"
            [entity.Customer.columns.id]
            type = " "
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_parse_error_carries_span() {
        let err = Manifest::from_str("[[unit]\nname = 1").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }
}
