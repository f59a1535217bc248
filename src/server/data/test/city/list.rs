use super::*;

async fn seed(db: &sea_orm::DatabaseConnection) -> Result<(), DbErr> {
    for (name, state) in [
        ("Austin", "Texas"),
        ("Boise", "Idaho"),
        ("Dallas", "Texas"),
        ("Eugene", "Oregon"),
    ] {
        factory::city::CityFactory::new(db)
            .name(name)
            .state(state)
            .build()
            .await?;
    }

    Ok(())
}

fn names(records: &[crate::server::query::features::Record]) -> Vec<&str> {
    records
        .iter()
        .filter_map(|record| record.get("name").and_then(JsonValue::as_str))
        .collect()
}

/// Tests exact-match filtering combined with an explicit sort.
///
/// Expected: Ok with only the matching cities in the requested order
#[tokio::test]
async fn filters_and_sorts() -> Result<(), QueryError> {
    let test = TestBuilder::new().with_table(entity::prelude::City).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let params = FeatureParams::from_query_str("state=Texas&sort=-name");
    let records = CityRepository::new(db)
        .list(&params, QueryOptions::default())
        .await?;

    assert_eq!(names(&records), vec!["Dallas", "Austin"]);

    Ok(())
}

/// Tests that the default projection omits the version counter.
///
/// Expected: Ok with every other column present
#[tokio::test]
async fn hides_version_by_default() -> Result<(), QueryError> {
    let test = TestBuilder::new().with_table(entity::prelude::City).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let records = CityRepository::new(db)
        .list(&FeatureParams::default(), QueryOptions::default())
        .await?;

    assert_eq!(records.len(), 4);
    for record in &records {
        assert!(!record.contains_key("version"));
        assert!(record.contains_key("created_at"));
        assert!(record.contains_key("state"));
    }

    Ok(())
}

/// Tests an explicit projection, which always carries the ID.
///
/// Expected: Ok with records holding exactly `id` and `name`
#[tokio::test]
async fn projects_requested_fields() -> Result<(), QueryError> {
    let test = TestBuilder::new().with_table(entity::prelude::City).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let params = FeatureParams::from_query_str("fields=name&sort=name");
    let records = CityRepository::new(db)
        .list(&params, QueryOptions::default())
        .await?;

    let first = &records[0];
    assert_eq!(first.len(), 2);
    assert!(first.contains_key("id"));
    assert_eq!(first["name"], JsonValue::from("Austin"));

    Ok(())
}

/// Tests that a filter on a field the entity does not have matches nothing.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn unknown_filter_field_returns_empty_list() -> Result<(), QueryError> {
    let test = TestBuilder::new().with_table(entity::prelude::City).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let params = FeatureParams::from_query_str("population[gte]=1000");
    let records = CityRepository::new(db)
        .list(&params, QueryOptions::default())
        .await?;

    assert!(records.is_empty());

    Ok(())
}

/// Tests that the page size is clamped to the configured maximum.
///
/// Expected: Ok with at most `max_limit` records
#[tokio::test]
async fn clamps_limit_to_maximum() -> Result<(), QueryError> {
    let test = TestBuilder::new().with_table(entity::prelude::City).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let options = QueryOptions {
        default_limit: 100,
        max_limit: 3,
    };
    let params = FeatureParams::from_query_str("limit=50");
    let records = CityRepository::new(db).list(&params, options).await?;

    assert_eq!(records.len(), 3);

    Ok(())
}
