use serde::Deserialize;

/// A persistence-unit descriptor: a named, ordered set of managed entity
/// names, declared in the manifest as `[[unit]]`.
///
/// Descriptors without a name can never be selected but are not rejected at
/// parse time.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PersistenceUnitDescriptor {
    pub name: Option<String>,

    /// Managed entity names, in declaration order
    #[serde(default)]
    pub entities: Vec<String>,
}

impl PersistenceUnitDescriptor {
    /// Whether this descriptor's name matches the given unit name,
    /// case-insensitively. An absent name never matches.
    pub fn matches(&self, unit_name: &str) -> bool {
        self.name
            .as_deref()
            .is_some_and(|name| name.eq_ignore_ascii_case(unit_name))
    }
}
