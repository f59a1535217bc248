use super::*;

/// Tests creating a city.
///
/// Verifies that the repository inserts the city with a zero version and
/// matching creation and update timestamps.
///
/// Expected: Ok with the inserted city
#[tokio::test]
async fn creates_city() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::City).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CityRepository::new(db);
    let city = repo
        .create(CreateCityParams {
            name: "Springfield".to_string(),
            state: "Illinois".to_string(),
        })
        .await?;

    assert_eq!(city.name, "Springfield");
    assert_eq!(city.version, 0);
    assert_eq!(city.created_at, city.updated_at);

    let stored = entity::prelude::City::find_by_id(city.id).one(db).await?;
    assert_eq!(stored, Some(city));

    Ok(())
}

/// Tests creating a city with a name that already exists.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::City).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_city(db).await?;

    let result = CityRepository::new(db)
        .create(CreateCityParams {
            name: existing.name,
            state: "Elsewhere".to_string(),
        })
        .await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
