use facultyhub_core::{ClientError, messages};
use facultyhub_models::{LevelId, ResetPasswordResponse, SpecializationId, Student, StudentId};
use tracing::{info, instrument};

use crate::api::{ApiClient, Params};

pub struct StudentService;

impl StudentService {
    /// Students of a level, narrowed to a specialization when given.
    #[instrument(skip(client))]
    pub async fn roster(
        client: &ApiClient,
        level: LevelId,
        specialization: Option<SpecializationId>,
    ) -> Result<Vec<Student>, ClientError> {
        let mut params: Params = vec![("level", level.to_string())];
        if let Some(specialization) = specialization {
            params.push(("specialization", specialization.to_string()));
        }
        client.get_list("student-affairs/students/", &params).await
    }

    /// Resets a student's password to the backend default. Returns the message to show.
    #[instrument(skip(client))]
    pub async fn reset_password(
        client: &ApiClient,
        student_id: StudentId,
    ) -> Result<String, ClientError> {
        let response: ResetPasswordResponse = client
            .post_empty(&format!("student-affairs/students/{}/reset-password/", student_id))
            .await?;

        info!(student.id = %student_id, "Student password reset");
        Ok(response
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| messages::PASSWORD_RESET.to_string()))
    }
}
