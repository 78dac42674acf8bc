mod common;

use common::{CIVIL_FIRST, ELEC_SECOND, MockBackend, POWER};
use facultyhub::facultyhub_core::messages;
use facultyhub::facultyhub_models::{LevelId, SpecializationId, StudentId};
use facultyhub::modules::students::StudentService;

#[tokio::test]
async fn test_roster_for_level() {
    let backend = MockBackend::start().await;
    let client = backend.client();

    let students = StudentService::roster(&client, LevelId::new(CIVIL_FIRST), None)
        .await
        .unwrap();
    assert_eq!(students.len(), 3);
    assert!(students.iter().all(|s| !s.full_name.is_empty()));
    assert!(!students[0].has_account());
    assert!(students[1].has_account());
    assert!(students.iter().all(|s| s.national_id_checked().is_ok()));
}

#[tokio::test]
async fn test_roster_narrowed_by_specialization() {
    let backend = MockBackend::start().await;
    let client = backend.client();

    let students = StudentService::roster(
        &client,
        LevelId::new(ELEC_SECOND),
        Some(SpecializationId::new(POWER)),
    )
    .await
    .unwrap();
    assert_eq!(students.len(), 2);
    assert!(
        students
            .iter()
            .all(|s| s.specialization == Some(SpecializationId::new(POWER)))
    );
}

#[tokio::test]
async fn test_reset_password() {
    let backend = MockBackend::start().await;
    let client = backend.client();

    let message = StudentService::reset_password(&client, StudentId::new(20001))
        .await
        .unwrap();
    assert!(message.contains("20001"));
    assert_ne!(message, messages::PASSWORD_RESET);
    assert_eq!(
        backend.hits("student-affairs/students/20001/reset-password/"),
        1
    );
}
