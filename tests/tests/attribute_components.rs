//! Attribute listing, get and set through the component layer.

use attrix_tests::prelude::*;

fn world() -> FixtureResult<World> {
    World::builder()
        .well_known(catalog::standard())
        .document("main", |d| {
            d.local(70, "Mark", StorageKind::Text, catalog::GROUP_IDENTITY)
                .entity("Level", |e| e)
                .entity("Wall", |e| {
                    e.set("Width", StorageValue::Real(0.3))
                        .read_only("Area", StorageValue::Real(12.0))
                        .attach("Comments")
                        .attach("Mark")
                        .attach("Base Level")
                })
        })
        .build()
}

mod listing {
    use super::*;
    use pretty_assertions::assert_eq;

    fn names(handles: &[attrix_core::AttributeHandle]) -> Vec<&str> {
        handles.iter().map(|h| h.name()).collect()
    }

    #[test]
    fn test_list_filters() -> FixtureResult<()> {
        let world = world()?;
        let wall = world.entity("Wall")?;

        let all = list_attributes(world.host(), &wall, &AttributeFilter::new());
        let geometry = list_attributes(
            world.host(),
            &wall,
            &AttributeFilter::new().in_group(catalog::GROUP_GEOMETRY),
        );
        let writable_geometry = list_attributes(
            world.host(),
            &wall,
            &AttributeFilter::new()
                .in_group(catalog::GROUP_GEOMETRY)
                .read_only(false),
        );
        let mark = list_attributes(world.host(), &wall, &AttributeFilter::new().named("Mark"));

        assert_eq!(names(&all), vec!["Area", "Width", "Comments", "Mark", "Base Level"]);
        assert_eq!(names(&geometry), vec!["Area", "Width"]);
        assert_eq!(names(&writable_geometry), vec!["Width"]);
        assert_eq!(names(&mark), vec!["Mark"]);
        Ok(())
    }
}

mod writes {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_set_then_get() -> FixtureResult<()> {
        // GIVEN
        let mut world = world()?;
        let wall = world.entity("Wall")?;
        let level = world.entity("Level")?;
        let coercer = Coercer::default();
        let mut diagnostics = Diagnostics::new();

        // WHEN
        set_attribute(
            world.host_mut(),
            &coercer,
            &wall,
            &AttributeKey::from("Base Level"),
            &Value::Entity(level),
            &mut diagnostics,
        );
        set_attribute(
            world.host_mut(),
            &coercer,
            &wall,
            &Value::Int(70).into(),
            &Value::from("W-12"),
            &mut diagnostics,
        );

        // THEN
        Expect::clean().check(&diagnostics)?;
        let base = get_attribute_value(
            world.host(),
            &coercer,
            &wall,
            &AttributeKey::from("Base Level"),
            &mut diagnostics,
        );
        let mark = get_attribute_value(
            world.host(),
            &coercer,
            &wall,
            &AttributeKey::NumericId(DefinitionId::new(70)),
            &mut diagnostics,
        );
        assert_eq!(base, Value::Entity(level));
        assert_eq!(mark, Value::Text("W-12".into()));
        Ok(())
    }

    #[test]
    fn test_read_only_is_refused() -> FixtureResult<()> {
        let mut world = world()?;
        let wall = world.entity("Wall")?;
        let mut diagnostics = Diagnostics::new();

        let updated = set_attribute(
            world.host_mut(),
            &Coercer::default(),
            &wall,
            &AttributeKey::from("Area"),
            &Value::Real(1.0),
            &mut diagnostics,
        );

        assert_eq!(updated, None);
        Expect::new()
            .errors(1)
            .message("Parameter 'Area' is read-only")
            .check(&diagnostics)?;
        Ok(())
    }

    #[test]
    fn test_batch_keeps_going_and_summarizes() -> FixtureResult<()> {
        // GIVEN
        let mut world = world()?;
        let wall = world.entity("Wall")?;
        let requests = vec![
            SetRequest::new(wall, "Comments", "checked"),
            SetRequest::new(wall, "Base Level", "Level 3"),
            SetRequest::new(wall, AttributeKey::NumericId(DefinitionId::new(999_999)), 1i64),
            SetRequest::new(wall, "Height", 3.0),
            SetRequest::new(wall, "Width", 0.35),
        ];
        let mut diagnostics = Diagnostics::new();

        // WHEN
        let summary = set_attributes(
            world.host_mut(),
            &Coercer::default(),
            &requests,
            &mut diagnostics,
        );

        // THEN
        assert_eq!(
            summary,
            BatchSummary {
                updated: 2,
                failed: 3,
                skipped: 0,
            }
        );
        Expect::new()
            .errors(2)
            .warnings(1)
            .remarks(1)
            .message("Unable to cast 'Value' from Text to Reference.")
            .message("Data conversion failed from Int to Parameter")
            .message("Parameter 'Height' not defined in 'Element'")
            .message("2 parameters updated, 3 failed, 0 skipped")
            .check(&diagnostics)?;
        let comments = get_attribute_value(
            world.host(),
            &Coercer::default(),
            &wall,
            &AttributeKey::from("Comments"),
            &mut diagnostics,
        );
        assert_eq!(comments, Value::Text("checked".into()));
        Ok(())
    }
}
