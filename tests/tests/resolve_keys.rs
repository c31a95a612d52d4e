//! Key resolution scenarios.

use attrix_tests::prelude::*;
use uuid::Uuid;

const SHARED_GUID: Uuid = Uuid::from_u128(0x0f1e_2d3c_4b5a_6978_8796_a5b4_c3d2_e1f0);

fn world() -> FixtureResult<World> {
    World::builder()
        .well_known(catalog::standard())
        .document("main", |d| {
            d.local(70, "Mark", StorageKind::Text, catalog::GROUP_IDENTITY)
                .shared(71, "Fire Rating", StorageKind::Text, catalog::GROUP_IDENTITY, SHARED_GUID)
                .entity("WallType", |e| e.set("Comments", StorageValue::Text("from type".into())))
                .entity("Wall", |e| {
                    e.type_of("WallType")
                        .set("Width", StorageValue::Real(0.3))
                        .set("Mark", StorageValue::Text("W-1".into()))
                        .attach("Fire Rating")
                })
                .entity("OtherWall", |e| e.set("Width", StorageValue::Real(0.2)))
        })
        .document("linked", |d| {
            d.local(70, "Mark", StorageKind::Text, catalog::GROUP_IDENTITY)
                .entity("LinkedWall", |e| e.attach("Mark").attach("Width"))
        })
        .build()
}

mod numeric_ids {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_document_local_id_resolves_mark() -> FixtureResult<()> {
        // GIVEN
        let world = world()?;
        let wall = world.entity("Wall")?;

        // WHEN
        let handle = Resolver::new(world.host())
            .resolve(&wall, &AttributeKey::NumericId(DefinitionId::new(70)))
            .map_err(|e| FixtureError::expectation(e.to_string()))?;

        // THEN
        assert_eq!(handle.name(), "Mark");
        assert_eq!(&handle.definition, world.local("main", "Mark")?);
        Ok(())
    }

    #[test]
    fn test_unknown_id_is_hard_error() -> FixtureResult<()> {
        let world = world()?;
        let wall = world.entity("Wall")?;

        let error = Resolver::new(world.host())
            .resolve(&wall, &AttributeKey::NumericId(DefinitionId::new(999_999)))
            .unwrap_err();

        assert_eq!(error.severity(), Severity::Error);
        assert_eq!(error.to_string(), "Data conversion failed from Int to Parameter");
        Ok(())
    }

    #[test]
    fn test_same_number_means_each_documents_own_definition() -> FixtureResult<()> {
        // GIVEN - both documents define 70 as "Mark"
        let world = world()?;
        let resolver = Resolver::new(world.host());
        let key = AttributeKey::NumericId(DefinitionId::new(70));

        // WHEN
        let here = resolver.resolve(&world.entity("Wall")?, &key).unwrap();
        let there = resolver.resolve(&world.entity("LinkedWall")?, &key).unwrap();

        // THEN
        assert_eq!(&here.definition, world.local("main", "Mark")?);
        assert_eq!(&there.definition, world.local("linked", "Mark")?);
        Ok(())
    }
}

mod cross_document {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_scoped_key_from_other_document_is_error() -> FixtureResult<()> {
        let world = world()?;
        let key = DefinitionKey::new(world.document("linked")?, DefinitionId::new(70));

        let error = Resolver::new(world.host())
            .resolve(&world.entity("Wall")?, &key.into())
            .unwrap_err();

        assert_eq!(error.severity(), Severity::Error);
        assert!(matches!(error, ResolveError::ForeignDocument { .. }));
        Ok(())
    }

    #[test]
    fn test_live_reference_from_other_document_is_error() -> FixtureResult<()> {
        let world = world()?;
        let resolver = Resolver::new(world.host());
        let linked_width = resolver
            .resolve(&world.entity("LinkedWall")?, &AttributeKey::from("Width"))
            .unwrap();

        let error = resolver
            .resolve(&world.entity("Wall")?, &linked_width.into())
            .unwrap_err();

        assert_eq!(
            error.to_string(),
            "Parameter 'Width' doesn't belong to 'Element'"
        );
        Ok(())
    }
}

mod lookups {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_name_falls_back_to_type_attributes() -> FixtureResult<()> {
        let world = world()?;

        let handle = Resolver::new(world.host())
            .resolve(&world.entity("Wall")?, &AttributeKey::from("Comments"))
            .unwrap();

        assert_eq!(handle.owner, world.entity("WallType")?);
        Ok(())
    }

    #[test]
    fn test_global_id() -> FixtureResult<()> {
        let world = world()?;
        let resolver = Resolver::new(world.host());

        let found = resolver.resolve(&world.entity("Wall")?, &SHARED_GUID.into());
        let missing = resolver
            .resolve(&world.entity("OtherWall")?, &SHARED_GUID.into())
            .unwrap_err();

        assert_eq!(found.map(|h| h.name().to_string()), Ok("Fire Rating".to_string()));
        assert_eq!(missing.severity(), Severity::Warning);
        Ok(())
    }

    #[test]
    fn test_identity_is_entity_independent() -> FixtureResult<()> {
        let world = world()?;
        let resolver = Resolver::new(world.host());
        let width = AttributeKey::WellKnownId(catalog::width().id);

        let a = resolver.resolve(&world.entity("Wall")?, &width).unwrap();
        let b = resolver.resolve(&world.entity("OtherWall")?, &width).unwrap();

        assert_eq!(a.identity(), b.identity());
        assert_eq!(a.identity(), catalog::width().identity());
        Ok(())
    }

    #[test]
    fn test_wrapped_values_dispatch_by_shape() -> FixtureResult<()> {
        let world = world()?;
        let resolver = Resolver::new(world.host());
        let wall = world.entity("Wall")?;

        let by_int = resolver.resolve(&wall, &Value::Int(70).into()).unwrap();
        let by_guid = resolver.resolve(&wall, &Value::Guid(SHARED_GUID).into()).unwrap();
        let by_real = resolver.resolve(&wall, &Value::Real(70.0).into());

        assert_eq!(by_int.name(), "Mark");
        assert_eq!(by_guid.name(), "Fire Rating");
        assert_eq!(by_real, Err(ResolveError::unsupported_key("Real")));
        Ok(())
    }
}
