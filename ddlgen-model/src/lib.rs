// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Persistence manifest parsing and mapping-model resolution.
//!
//! A `persistence.toml` manifest declares persistence units, entity
//! definitions, and extension scripts. The manifest doubles as the
//! [`TypeResolver`] used to turn a unit's managed entity names into a
//! [`MappingModel`] for DDL generation.

mod entity;
mod error;
mod manifest;
mod resolver;
mod scripts;
mod unit;

pub use entity::{Column, Entity, EntityDef};
pub use error::{Error, Result};
pub use manifest::Manifest;
pub use resolver::{MappingModel, TypeResolver, resolve_unit};
pub use scripts::ExtendedScripts;
pub use unit::PersistenceUnitDescriptor;
