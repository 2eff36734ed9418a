use super::*;

/// Tests storing a contact message with a related livery.
///
/// Expected: Ok with every field stored
#[tokio::test]
async fn creates_contact() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Contact).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let contact = ContactRepository::new(db)
        .create(CreateContactParams {
            contact_type: ContactType::Copyright,
            title: "My paint was reuploaded".to_string(),
            content: "Livery 12 is my work".to_string(),
            email: "artist@example.com".to_string(),
            related_livery_id: Some(12),
            related_livery_info: Some("A350-900 Lufthansa".to_string()),
        })
        .await?;

    assert_eq!(contact.contact_type, ContactType::Copyright);
    assert_eq!(contact.title, "My paint was reuploaded");
    assert_eq!(contact.related_livery_id, Some(12));
    assert_eq!(
        contact.related_livery_info.as_deref(),
        Some("A350-900 Lufthansa")
    );

    Ok(())
}
