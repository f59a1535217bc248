use super::*;

/// Tests creating a department with its optional fields.
///
/// Expected: Ok with the inserted department
#[tokio::test]
async fn creates_department() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Department)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let department = DepartmentRepository::new(db)
        .create(CreateDepartmentParams {
            name: "Parks & Recreation".to_string(),
            description: Some("Parks, trails and public green spaces".to_string()),
            contact_email: None,
        })
        .await?;

    assert_eq!(department.name, "Parks & Recreation");
    assert!(department.description.is_some());
    assert_eq!(department.contact_email, None);
    assert_eq!(department.version, 0);

    Ok(())
}
