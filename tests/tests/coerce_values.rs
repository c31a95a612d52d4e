//! Value coercion scenarios against a live host.

use attrix_tests::prelude::*;
use pretty_assertions::assert_eq;

fn world() -> FixtureResult<World> {
    World::builder()
        .well_known(catalog::standard())
        .document("main", |d| {
            d.entity("Level 1", |e| e)
                .entity("Wall", |e| {
                    e.set("Width", StorageValue::Real(0.25))
                        .set("Area", StorageValue::Real(4.0))
                        .attach("Structural")
                        .set("Base Level", StorageValue::Reference(attrix_core::EntityId::new(1)))
                })
        })
        .build()
}

fn handle(world: &World, entity: &str, name: &str) -> FixtureResult<attrix_core::AttributeHandle> {
    Resolver::new(world.host())
        .resolve(&world.entity(entity)?, &AttributeKey::from(name))
        .map_err(|e| FixtureError::expectation(e.to_string()))
}

#[test]
fn test_text_into_reference_leaves_prior_value() -> FixtureResult<()> {
    // GIVEN
    let mut world = world()?;
    let coercer = Coercer::default();
    let base = handle(&world, "Wall", "Base Level")?;
    let before = coercer.from_storage(world.host(), &base);

    // WHEN
    let result = coercer.write(world.host_mut(), &base, &Value::from("Level 2"));

    // THEN
    assert_eq!(
        result,
        Err(CoerceError::mismatch(StorageKind::Reference, "Text"))
    );
    assert_eq!(coercer.from_storage(world.host(), &base), before);
    Ok(())
}

#[test]
fn test_length_round_trip_across_scales() -> FixtureResult<()> {
    let mut world = world()?;
    let width = handle(&world, "Wall", "Width")?;

    for scale in [0.001, 0.3048, 1.0, 25.4, 1000.0] {
        let coercer = Coercer::new(UnitConfig::new(scale)).unwrap();
        for v in [-12.5, 0.0, 1e-6, 3.75, 1e9] {
            coercer.write(world.host_mut(), &width, &Value::Real(v)).unwrap();
            let back = coercer.from_storage(world.host(), &width).as_real().unwrap();
            assert!(
                (back - v).abs() <= 1e-9 * v.abs().max(1.0),
                "scale {scale}: wrote {v}, read {back}"
            );
        }
    }
    Ok(())
}

#[test]
fn test_area_scales_by_square() -> FixtureResult<()> {
    // GIVEN - one model unit is 10 host units
    let mut world = world()?;
    let area = handle(&world, "Wall", "Area")?;
    let coercer = Coercer::new(UnitConfig::new(10.0)).unwrap();

    // WHEN
    coercer.write(world.host_mut(), &area, &Value::Real(500.0)).unwrap();

    // THEN
    assert_eq!(world.host().read(&area), Some(StorageValue::Real(5.0)));
    assert_eq!(coercer.from_storage(world.host(), &area), Value::Real(500.0));
    Ok(())
}

#[test]
fn test_integer_inputs() -> FixtureResult<()> {
    let mut world = world()?;
    let structural = handle(&world, "Wall", "Structural")?;
    let coercer = Coercer::default();

    coercer.write(world.host_mut(), &structural, &Value::Bool(true)).unwrap();
    assert_eq!(coercer.from_storage(world.host(), &structural), Value::Int(1));

    coercer.write(world.host_mut(), &structural, &Value::Real(-2.5)).unwrap();
    assert_eq!(coercer.from_storage(world.host(), &structural), Value::Int(-3));

    coercer.write(world.host_mut(), &structural, &Value::Real(1e12)).unwrap();
    assert_eq!(
        coercer.from_storage(world.host(), &structural),
        Value::Int(i64::from(i32::MAX))
    );
    Ok(())
}

#[test]
fn test_unit_config_from_json() {
    let config: UnitConfig = serde_json::from_str(r#"{ "model_unit_scale": 0.3048 }"#).unwrap();
    let defaulted: UnitConfig = serde_json::from_str("{}").unwrap();

    assert_eq!(config.model_unit_scale, 0.3048);
    assert_eq!(defaulted, UnitConfig::default());
    assert!(Coercer::new(UnitConfig::new(0.0)).is_err());
}
