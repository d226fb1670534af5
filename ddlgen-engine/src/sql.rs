use std::fmt::Write;

use ddlgen_model::{Entity, MappingModel};

use crate::{DdlEngine, DiagnosticSink, EngineError, EngineOptions, IdGeneration};

/// The built-in DDL engine.
///
/// Renders lowercase, delimiter-terminated statements: one `create table`
/// per entity in model order, drops in reverse order, and an update script
/// of conditional creates where the dialect supports them. Column types are
/// written verbatim from the model.
#[derive(Debug, Default)]
pub struct SqlEngine;

impl DdlEngine for SqlEngine {
    fn create_script(
        &self,
        model: &MappingModel,
        options: &EngineOptions,
        sink: &mut DiagnosticSink,
    ) -> Result<String, EngineError> {
        let mut out = String::new();
        if options.id_generation == Some(IdGeneration::Sequence) {
            for entity in model.entities() {
                if !entity.primary_key_columns().is_empty() {
                    let _ = writeln!(
                        out,
                        "create sequence {}_seq start with 1 increment by 1{}",
                        entity.table, options.delimiter
                    );
                }
            }
        }
        for entity in model.entities() {
            sink.note(format!(
                "exporting entity '{}' as table '{}'",
                entity.name, entity.table
            ));
            out.push_str(&table_statement(entity, options, false));
        }
        Ok(out)
    }

    fn drop_script(
        &self,
        model: &MappingModel,
        options: &EngineOptions,
        sink: &mut DiagnosticSink,
    ) -> Result<String, EngineError> {
        let mut out = String::new();
        // Reverse creation order so dependents go before their dependencies
        for entity in model.entities().iter().rev() {
            sink.note(format!("dropping table '{}'", entity.table));
            let _ = writeln!(
                out,
                "{}{}",
                options.dialect.drop_table(&entity.table),
                options.delimiter
            );
        }
        if options.id_generation == Some(IdGeneration::Sequence) {
            for entity in model.entities().iter().rev() {
                if !entity.primary_key_columns().is_empty() {
                    let seq = format!("{}_seq", entity.table);
                    let _ = writeln!(
                        out,
                        "{}{}",
                        options.dialect.drop_sequence(&seq),
                        options.delimiter
                    );
                }
            }
        }
        Ok(out)
    }

    fn update_script(
        &self,
        model: &MappingModel,
        options: &EngineOptions,
        sink: &mut DiagnosticSink,
    ) -> Result<Option<String>, EngineError> {
        let conditional = options.dialect.supports_if_not_exists();
        let mut out = String::new();
        if options.id_generation == Some(IdGeneration::Sequence) && conditional {
            for entity in model.entities() {
                if !entity.primary_key_columns().is_empty() {
                    let _ = writeln!(
                        out,
                        "create sequence if not exists {}_seq start with 1 increment by 1{}",
                        entity.table, options.delimiter
                    );
                }
            }
        }
        for entity in model.entities() {
            sink.note(format!("updating table '{}'", entity.table));
            out.push_str(&table_statement(entity, options, conditional));
        }
        Ok(Some(out))
    }
}

fn table_statement(entity: &Entity, options: &EngineOptions, conditional: bool) -> String {
    let mut lines = Vec::with_capacity(entity.columns.len() + 1);
    for (name, column) in &entity.columns {
        let mut line = format!("    {} {}", name, column.sql_type);
        if let Some(default) = &column.default {
            let _ = write!(line, " default {default}");
        }
        if column.primary_key || !column.nullable {
            line.push_str(" not null");
        }
        if column.primary_key && options.id_generation == Some(IdGeneration::Identity) {
            line.push_str(options.dialect.identity_suffix());
        }
        if column.unique && !column.primary_key {
            line.push_str(" unique");
        }
        lines.push(line);
    }

    let primary_key = entity.primary_key_columns();
    if !primary_key.is_empty() {
        lines.push(format!("    primary key ({})", primary_key.join(", ")));
    }

    let exists_clause = if conditional { "if not exists " } else { "" };
    format!(
        "create table {}{} (\n{}\n){}\n",
        exists_clause,
        entity.table,
        lines.join(",\n"),
        options.delimiter
    )
}

#[cfg(test)]
mod tests {
    use ddlgen_model::{Column, MappingModel};
    use indexmap::IndexMap;
    use insta::assert_snapshot;

    use super::*;
    use crate::Dialect;

    fn column(sql_type: &str) -> Column {
        Column {
            sql_type: sql_type.to_string(),
            nullable: true,
            primary_key: false,
            unique: false,
            default: None,
        }
    }

    fn store_model() -> MappingModel {
        let mut columns = IndexMap::new();
        columns.insert(
            "id".to_string(),
            Column {
                primary_key: true,
                ..column("bigint")
            },
        );
        columns.insert(
            "email".to_string(),
            Column {
                nullable: false,
                unique: true,
                ..column("varchar(255)")
            },
        );

        let mut model = MappingModel::default();
        model.add_entity(Entity {
            name: "Customer".to_string(),
            table: "customer".to_string(),
            columns,
        });

        let mut columns = IndexMap::new();
        columns.insert(
            "id".to_string(),
            Column {
                primary_key: true,
                ..column("bigint")
            },
        );
        model.add_entity(Entity {
            name: "Order".to_string(),
            table: "orders".to_string(),
            columns,
        });
        model
    }

    #[test]
    fn test_create_script_generic() {
        let mut sink = DiagnosticSink::default();
        let script = SqlEngine
            .create_script(&store_model(), &EngineOptions::default(), &mut sink)
            .unwrap();

        assert_snapshot!(script.trim_end(), @r"
        create table customer (
            id bigint not null,
            email varchar(255) not null unique,
            primary key (id)
        );
        create table orders (
            id bigint not null,
            primary key (id)
        );
        ");
        assert_eq!(sink.lines().len(), 2);
    }

    #[test]
    fn test_drop_script_reverses_order() {
        let mut sink = DiagnosticSink::default();
        let script = SqlEngine
            .drop_script(&store_model(), &EngineOptions::default(), &mut sink)
            .unwrap();

        assert_eq!(script, "drop table orders;\ndrop table customer;\n");
    }

    #[test]
    fn test_drop_script_postgres_decoration() {
        let options = EngineOptions {
            dialect: Dialect::Postgres,
            ..EngineOptions::default()
        };
        let mut sink = DiagnosticSink::default();
        let script = SqlEngine
            .drop_script(&store_model(), &options, &mut sink)
            .unwrap();

        assert_eq!(
            script,
            "drop table if exists orders cascade;\ndrop table if exists customer cascade;\n"
        );
    }

    #[test]
    fn test_identity_strategy_decorates_primary_key() {
        let options = EngineOptions {
            dialect: Dialect::Mysql,
            id_generation: Some(IdGeneration::Identity),
            ..EngineOptions::default()
        };
        let mut sink = DiagnosticSink::default();
        let script = SqlEngine
            .create_script(&store_model(), &options, &mut sink)
            .unwrap();

        assert!(script.contains("id bigint not null auto_increment,"));
    }

    #[test]
    fn test_sequence_strategy_emits_sequences() {
        let options = EngineOptions {
            id_generation: Some(IdGeneration::Sequence),
            ..EngineOptions::default()
        };
        let mut sink = DiagnosticSink::default();

        let create = SqlEngine
            .create_script(&store_model(), &options, &mut sink)
            .unwrap();
        assert!(create.starts_with("create sequence customer_seq start with 1 increment by 1;\n"));

        let drop = SqlEngine
            .drop_script(&store_model(), &options, &mut sink)
            .unwrap();
        assert!(drop.ends_with("drop sequence customer_seq;\n"));
    }

    #[test]
    fn test_update_script_conditional_creates() {
        let options = EngineOptions {
            dialect: Dialect::Sqlite,
            ..EngineOptions::default()
        };
        let mut sink = DiagnosticSink::default();
        let script = SqlEngine
            .update_script(&store_model(), &options, &mut sink)
            .unwrap()
            .unwrap();

        assert!(script.starts_with("create table if not exists customer (\n"));
    }

    #[test]
    fn test_custom_delimiter() {
        let options = EngineOptions {
            delimiter: "$$".to_string(),
            ..EngineOptions::default()
        };
        let mut sink = DiagnosticSink::default();
        let script = SqlEngine
            .drop_script(&store_model(), &options, &mut sink)
            .unwrap();

        assert_eq!(script, "drop table orders$$\ndrop table customer$$\n");
    }

    #[test]
    fn test_default_value_rendering() {
        let mut columns = IndexMap::new();
        columns.insert(
            "status".to_string(),
            Column {
                nullable: false,
                default: Some("'new'".to_string()),
                ..column("varchar(16)")
            },
        );
        let mut model = MappingModel::default();
        model.add_entity(Entity {
            name: "Ticket".to_string(),
            table: "ticket".to_string(),
            columns,
        });

        let mut sink = DiagnosticSink::default();
        let script = SqlEngine
            .create_script(&model, &EngineOptions::default(), &mut sink)
            .unwrap();

        assert!(script.contains("status varchar(16) default 'new' not null"));
    }

    #[test]
    fn test_empty_model_generates_empty_scripts() {
        let model = MappingModel::default();
        let mut sink = DiagnosticSink::default();

        let create = SqlEngine
            .create_script(&model, &EngineOptions::default(), &mut sink)
            .unwrap();
        assert!(create.is_empty());
        assert!(sink.lines().is_empty());
    }
}
