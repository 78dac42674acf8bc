mod common;

use common::MockBackend;
use facultyhub::facultyhub_core::{ClientError, Operation, messages};
use facultyhub::facultyhub_models::grading_templates::weight_total_message;
use facultyhub::modules::grading_templates::{
    GradingTemplateForm, GradingTemplateService, WeightComponent,
};

#[tokio::test]
async fn test_create_template() {
    let backend = MockBackend::start().await;
    let client = backend.client();

    let mut form = GradingTemplateForm::new();
    form.set_name("Project heavy");
    form.set_weight(WeightComponent::Coursework, 40);
    form.set_weight(WeightComponent::Final, 20);
    assert_eq!(form.running_total(), 100);

    let (template, message) = GradingTemplateService::save(&client, &mut form)
        .await
        .unwrap();
    assert_eq!(message, messages::TEMPLATE_CREATED);
    assert_eq!(template.name, "Project heavy");
    assert_eq!(template.weights.coursework, 40);
    assert_eq!(form.id(), Some(template.id));

    let templates = GradingTemplateService::list(&client).await.unwrap();
    assert_eq!(templates.len(), 3);
}

#[tokio::test]
async fn test_create_default_template_with_slots_and_quizzes() {
    let backend = MockBackend::start().await;
    let client = backend.client();

    let mut form = GradingTemplateForm::new();
    form.set_name("Weekly quizzes");
    form.set_attendance_slots(12);
    form.set_quiz_count(6);
    form.set_default(true);

    let (template, _) = GradingTemplateService::save(&client, &mut form)
        .await
        .unwrap();
    assert_eq!(template.attendance_slots, 12);
    assert_eq!(template.quiz_count, 6);
    assert!(template.is_default);
}

#[tokio::test]
async fn test_update_template() {
    let backend = MockBackend::start().await;
    let client = backend.client();

    let templates = GradingTemplateService::list(&client).await.unwrap();
    let labs = templates.iter().find(|t| t.name == "Labs").unwrap();

    let mut form = GradingTemplateForm::edit(labs);
    assert!(form.is_edit());
    form.set_weight(WeightComponent::Attendance, 10);
    form.set_weight(WeightComponent::Quizzes, 10);

    let (template, message) = GradingTemplateService::save(&client, &mut form)
        .await
        .unwrap();
    assert_eq!(message, messages::TEMPLATE_UPDATED);
    assert_eq!(template.id, labs.id);
    assert_eq!(template.weights.attendance, 10);
    assert_eq!(backend.hits(&format!("grading-templates/{}/", labs.id)), 1);
}

#[tokio::test]
async fn test_unbalanced_template_never_sent() {
    let backend = MockBackend::start().await;
    let client = backend.client();

    let mut form = GradingTemplateForm::new();
    form.set_name("Almost");
    form.set_weight(WeightComponent::Final, 49);
    assert_eq!(form.running_total(), 99);
    assert_eq!(form.total_warning(), Some(weight_total_message(99)));
    assert!(!form.can_save());

    let err = GradingTemplateService::save(&client, &mut form).await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
    assert_eq!(err.user_message(Operation::SaveTemplate), weight_total_message(99));
    assert!(!form.is_saving());
    assert_eq!(backend.total_hits(), 0);
}

#[tokio::test]
async fn test_blank_name_never_sent() {
    let backend = MockBackend::start().await;
    let client = backend.client();

    let mut form = GradingTemplateForm::new();
    let err = GradingTemplateService::save(&client, &mut form).await.unwrap_err();
    assert_eq!(
        err.user_message(Operation::SaveTemplate),
        messages::TEMPLATE_NAME_REQUIRED
    );
    assert_eq!(backend.total_hits(), 0);
}
