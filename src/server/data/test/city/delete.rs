use super::*;

/// Tests deleting a city by ID.
///
/// Expected: Ok(true) and the city is gone
#[tokio::test]
async fn deletes_city() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::City).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let repo = CityRepository::new(db);

    assert!(repo.delete(city.id).await?);
    assert!(!repo.exists(city.id).await?);

    Ok(())
}

/// Tests deleting a city that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_city() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::City).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!CityRepository::new(db).delete(42).await?);

    Ok(())
}
