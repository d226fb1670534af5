use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for ddlgen-model operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("check that the manifest path exists and is readable"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse persistence.toml")]
    #[diagnostic(code(ddlgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(ddlgen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("no persistence unit named '{unit}'")]
    #[diagnostic(
        code(ddlgen::unresolved_unit),
        help("declare a [[unit]] with name = \"{unit}\" in the manifest")
    )]
    UnresolvedUnit { unit: String },

    #[error("unit '{unit}' references unknown entity '{class}'")]
    #[diagnostic(
        code(ddlgen::unresolved_class),
        help("declare an [entity.{class}] table in the manifest")
    )]
    UnresolvedClass { class: String, unit: String },
}

impl Error {
    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a validation error with source context
    pub fn validation(message: impl Into<String>, src: &str, filename: &str) -> Box<Self> {
        Box::new(Error::Validation {
            src: NamedSource::new(filename, src.to_string()),
            span: None,
            message: message.into(),
        })
    }

    /// Create an unresolved-unit error
    pub fn unresolved_unit(unit: impl Into<String>) -> Box<Self> {
        Box::new(Error::UnresolvedUnit { unit: unit.into() })
    }

    /// Create an unresolved-class error
    pub fn unresolved_class(class: impl Into<String>, unit: impl Into<String>) -> Box<Self> {
        Box::new(Error::UnresolvedClass {
            class: class.into(),
            unit: unit.into(),
        })
    }
}
