use super::*;

/// Tests setting an optional field that was previously empty.
///
/// Expected: Ok(Some) with the field set and the name kept
#[tokio::test]
async fn sets_contact_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Department)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;

    let updated = DepartmentRepository::new(db)
        .update(UpdateDepartmentParams {
            id: department.id,
            name: None,
            description: None,
            contact_email: Some("roads@example.org".to_string()),
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, department.name);
    assert_eq!(updated.contact_email.as_deref(), Some("roads@example.org"));
    assert_eq!(updated.version, 1);

    Ok(())
}
