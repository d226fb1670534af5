use std::{fmt, str::FromStr};

use crate::EngineError;

/// SQL dialects the built-in engine can render for.
///
/// Differences are limited to identity-column syntax, drop-statement
/// decoration, and conditional-create support; column types are user
/// pass-through strings either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    #[default]
    Generic,
    Postgres,
    Mysql,
    Sqlite,
}

impl Dialect {
    /// Suffix rendered after a primary-key column under the identity
    /// strategy. SQLite rows carry an implicit rowid, so it gets none.
    pub(crate) fn identity_suffix(&self) -> &'static str {
        match self {
            Dialect::Generic | Dialect::Postgres => " generated by default as identity",
            Dialect::Mysql => " auto_increment",
            Dialect::Sqlite => "",
        }
    }

    pub(crate) fn drop_table(&self, table: &str) -> String {
        match self {
            Dialect::Generic => format!("drop table {table}"),
            Dialect::Postgres => format!("drop table if exists {table} cascade"),
            Dialect::Mysql | Dialect::Sqlite => format!("drop table if exists {table}"),
        }
    }

    pub(crate) fn drop_sequence(&self, sequence: &str) -> String {
        match self {
            Dialect::Generic => format!("drop sequence {sequence}"),
            _ => format!("drop sequence if exists {sequence}"),
        }
    }

    pub(crate) fn supports_if_not_exists(&self) -> bool {
        !matches!(self, Dialect::Generic)
    }
}

impl FromStr for Dialect {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "generic" => Ok(Dialect::Generic),
            "postgres" | "postgresql" => Ok(Dialect::Postgres),
            "mysql" | "mariadb" => Ok(Dialect::Mysql),
            "sqlite" => Ok(Dialect::Sqlite),
            other => Err(EngineError::UnknownDialect(other.to_string())),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dialect::Generic => "generic",
            Dialect::Postgres => "postgres",
            Dialect::Mysql => "mysql",
            Dialect::Sqlite => "sqlite",
        };
        f.write_str(name)
    }
}

/// Primary-key generation strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdGeneration {
    /// Database-generated identity columns
    Identity,
    /// One sequence per entity, named `<table>_seq`
    Sequence,
}

impl FromStr for IdGeneration {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "identity" => Ok(IdGeneration::Identity),
            "sequence" => Ok(IdGeneration::Sequence),
            other => Err(EngineError::UnknownIdGeneration(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_from_str() {
        assert_eq!("postgres".parse::<Dialect>().unwrap(), Dialect::Postgres);
        assert_eq!("PostgreSQL".parse::<Dialect>().unwrap(), Dialect::Postgres);
        assert_eq!(" mysql ".parse::<Dialect>().unwrap(), Dialect::Mysql);
        assert!(matches!(
            "oracle".parse::<Dialect>(),
            Err(EngineError::UnknownDialect(_))
        ));
    }

    #[test]
    fn test_id_generation_from_str() {
        assert_eq!(
            "identity".parse::<IdGeneration>().unwrap(),
            IdGeneration::Identity
        );
        assert!(matches!(
            "uuid".parse::<IdGeneration>(),
            Err(EngineError::UnknownIdGeneration(_))
        ));
    }
}
