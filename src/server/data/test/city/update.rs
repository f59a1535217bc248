use super::*;

/// Tests a partial update.
///
/// Verifies that unset fields are kept and that the version counter is bumped.
///
/// Expected: Ok(Some) with the updated city
#[tokio::test]
async fn updates_set_fields_and_bumps_version() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::City).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;

    let updated = CityRepository::new(db)
        .update(UpdateCityParams {
            id: city.id,
            name: Some("Capital City".to_string()),
            state: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Capital City");
    assert_eq!(updated.state, city.state);
    assert_eq!(updated.version, city.version + 1);
    assert!(updated.updated_at >= city.updated_at);

    Ok(())
}

/// Tests updating a city that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_city() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::City).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CityRepository::new(db)
        .update(UpdateCityParams {
            id: 999,
            name: Some("Nowhere".to_string()),
            state: None,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that each update increments the stored version rather than rewriting it.
///
/// Expected: version 2 after two updates, with the second name kept
#[tokio::test]
async fn consecutive_updates_each_bump_version() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::City).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let repo = CityRepository::new(db);

    for name in ["Northport", "Southport"] {
        repo.update(UpdateCityParams {
            id: city.id,
            name: Some(name.to_string()),
            state: None,
        })
        .await?;
    }

    let stored = entity::prelude::City::find_by_id(city.id).one(db).await?.unwrap();

    assert_eq!(stored.name, "Southport");
    assert_eq!(stored.version, city.version + 2);

    Ok(())
}
