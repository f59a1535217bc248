use super::*;

/// Tests that list records carry the expanded city and department.
///
/// Expected: Ok with `city`/`department` objects replacing the foreign keys
#[tokio::test]
async fn expands_city_and_department() -> Result<(), QueryError> {
    let test = TestBuilder::new().with_zone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (city, department, zone) = factory::helpers::create_zone_with_dependencies(db).await?;

    let records = ZoneRepository::new(db)
        .list(&FeatureParams::default(), QueryOptions::default())
        .await?;

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record["id"], JsonValue::from(zone.id));
    assert_eq!(record["city"]["name"], JsonValue::from(city.name));
    assert_eq!(record["department"]["id"], JsonValue::from(department.id));
    assert!(!record.contains_key("city_id"));
    assert_eq!(record["boundary"]["type"], JsonValue::from("Polygon"));

    Ok(())
}

/// Tests filtering zones by a foreign key written in camelCase.
///
/// Expected: Ok with only the zones of the requested city
#[tokio::test]
async fn filters_by_city() -> Result<(), QueryError> {
    let test = TestBuilder::new().with_zone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (city, department, _) = factory::helpers::create_zone_with_dependencies(db).await?;
    factory::helpers::create_zone_with_dependencies(db).await?;
    factory::create_zone(db, city.id, department.id).await?;

    let params = FeatureParams::from_query_str(&format!("cityId={}", city.id));
    let records = ZoneRepository::new(db)
        .list(&params, QueryOptions::default())
        .await?;

    assert_eq!(records.len(), 2);
    assert!(records
        .iter()
        .all(|record| record["city"]["id"] == JsonValue::from(city.id)));

    Ok(())
}

/// Tests that a projection without the foreign keys skips expansion.
///
/// Expected: Ok with records holding only `id` and `name`
#[tokio::test]
async fn projection_without_keys_is_not_expanded() -> Result<(), QueryError> {
    let test = TestBuilder::new().with_zone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_zone_with_dependencies(db).await?;

    let params = FeatureParams::from_query_str("fields=name");
    let records = ZoneRepository::new(db)
        .list(&params, QueryOptions::default())
        .await?;

    let keys: Vec<&str> = records[0].keys().map(String::as_str).collect();
    assert_eq!(keys.len(), 2);
    assert!(keys.contains(&"id"));
    assert!(keys.contains(&"name"));

    Ok(())
}

/// Tests that filtering on the GeoJSON column is rejected.
///
/// Expected: Err(QueryError::UnsupportedField)
#[tokio::test]
async fn rejects_boundary_filter() -> Result<(), QueryError> {
    let test = TestBuilder::new().with_zone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let params = FeatureParams::from_query_str("boundary=Polygon");
    let result = ZoneRepository::new(db)
        .list(&params, QueryOptions::default())
        .await;

    assert!(matches!(result, Err(QueryError::UnsupportedField(_))));

    Ok(())
}
