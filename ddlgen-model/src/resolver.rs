use crate::{Entity, Error, PersistenceUnitDescriptor, Result};

/// Capability to resolve a managed entity name into an entity type.
///
/// Injected into [`resolve_unit`] so unit resolution can be driven by a
/// manifest, or by a fake in tests, without any reflective machinery.
pub trait TypeResolver {
    fn resolve(&self, name: &str) -> Option<Entity>;
}

/// The resolved set of entity types belonging to one persistence unit,
/// consumed by the DDL generation engine.
#[derive(Debug, Clone, Default)]
pub struct MappingModel {
    entities: Vec<Entity>,
}

impl MappingModel {
    pub fn add_entity(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Entities in registration order.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// Resolve a persistence unit into a mapping model.
///
/// Descriptors are scanned in order; the first whose name case-insensitively
/// equals the trimmed unit name wins and any later match is ignored. The
/// selected unit's entity names are resolved in order through `resolver`;
/// the first name the resolver cannot satisfy fails the whole resolution,
/// so no partially populated model ever reaches the generation engine.
pub fn resolve_unit(
    unit_name: &str,
    descriptors: &[PersistenceUnitDescriptor],
    resolver: &dyn TypeResolver,
) -> Result<MappingModel> {
    let wanted = unit_name.trim();

    let descriptor = descriptors
        .iter()
        .find(|descriptor| descriptor.matches(wanted))
        .ok_or_else(|| Error::unresolved_unit(wanted))?;

    let mut model = MappingModel::default();
    for class in &descriptor.entities {
        let entity = resolver
            .resolve(class)
            .ok_or_else(|| Error::unresolved_class(class, wanted))?;
        model.add_entity(entity);
    }
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    struct FakeResolver(Vec<&'static str>);

    impl TypeResolver for FakeResolver {
        fn resolve(&self, name: &str) -> Option<Entity> {
            self.0.iter().any(|known| *known == name).then(|| Entity {
                name: name.to_string(),
                table: ddlgen_core::to_snake_case(name),
                columns: IndexMap::new(),
            })
        }
    }

    fn unit(name: Option<&str>, entities: &[&str]) -> PersistenceUnitDescriptor {
        PersistenceUnitDescriptor {
            name: name.map(String::from),
            entities: entities.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_resolve_case_insensitive_first_match() {
        let descriptors = vec![
            unit(Some("Orders"), &["Order"]),
            unit(Some("orders"), &["Customer"]),
        ];
        let resolver = FakeResolver(vec!["Order", "Customer"]);

        let model = resolve_unit("orders", &descriptors, &resolver).unwrap();
        assert_eq!(model.len(), 1);
        assert_eq!(model.entities()[0].name, "Order");
    }

    #[test]
    fn test_resolve_trims_unit_name() {
        let descriptors = vec![unit(Some("store"), &["Customer"])];
        let resolver = FakeResolver(vec!["Customer"]);

        let model = resolve_unit("  store ", &descriptors, &resolver).unwrap();
        assert_eq!(model.len(), 1);
    }

    #[test]
    fn test_resolve_skips_unnamed_descriptors() {
        let descriptors = vec![unit(None, &["Order"]), unit(Some("store"), &["Customer"])];
        let resolver = FakeResolver(vec!["Order", "Customer"]);

        let model = resolve_unit("store", &descriptors, &resolver).unwrap();
        assert_eq!(model.entities()[0].name, "Customer");
    }

    #[test]
    fn test_resolve_unknown_unit() {
        let descriptors = vec![unit(Some("store"), &[])];
        let resolver = FakeResolver(vec![]);

        let err = resolve_unit("billing", &descriptors, &resolver).unwrap_err();
        assert!(matches!(*err, Error::UnresolvedUnit { ref unit } if unit == "billing"));
    }

    #[test]
    fn test_resolve_unknown_entity_is_fatal() {
        let descriptors = vec![unit(Some("store"), &["Customer", "Ghost", "Order"])];
        let resolver = FakeResolver(vec!["Customer", "Order"]);

        let err = resolve_unit("store", &descriptors, &resolver).unwrap_err();
        assert!(matches!(*err, Error::UnresolvedClass { ref class, .. } if class == "Ghost"));
    }

    #[test]
    fn test_resolve_preserves_entity_order() {
        let descriptors = vec![unit(Some("store"), &["Order", "Customer"])];
        let resolver = FakeResolver(vec!["Customer", "Order"]);

        let model = resolve_unit("store", &descriptors, &resolver).unwrap();
        let names: Vec<_> = model.entities().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Order", "Customer"]);
    }
}
