use facultyhub_core::ClientError;
use facultyhub_models::{ApproveGradesResponse, LevelId, PendingGrades, UploadGradesResponse};
use tracing::{info, instrument, warn};

use crate::api::{ApiClient, Params};
use crate::modules::exam_grades::model::GradeUploadForm;

pub struct ExamGradeService;

impl ExamGradeService {
    /// Uploads the form's grade sheet. Row-level problems come back in the
    /// response's `errors`, not as a failure.
    #[instrument(skip_all)]
    pub async fn upload(
        client: &ApiClient,
        form: &mut GradeUploadForm,
    ) -> Result<UploadGradesResponse, ClientError> {
        let grade_type = form.grade_type();
        let (level_id, body) = form.begin_upload()?;

        let result: Result<UploadGradesResponse, ClientError> =
            client.post_multipart("exam-grades/upload/", body).await;
        form.finish_upload(result.is_ok());

        match &result {
            Ok(response) => info!(
                level.id = %level_id,
                grade_type = %grade_type,
                row_errors = response.errors.len(),
                "Grades uploaded"
            ),
            Err(e) => warn!(level.id = %level_id, error = %e, "Grade upload failed"),
        }
        result
    }

    #[instrument(skip(client))]
    pub async fn pending(client: &ApiClient) -> Result<Vec<PendingGrades>, ClientError> {
        client.get_list("exam-grades/pending/", &Params::new()).await
    }

    #[instrument(skip(client))]
    pub async fn approve(
        client: &ApiClient,
        level_id: LevelId,
    ) -> Result<ApproveGradesResponse, ClientError> {
        let response: ApproveGradesResponse = client
            .post_empty(&format!("exam-grades/approve/{}/", level_id))
            .await?;

        info!(
            level.id = %level_id,
            approved = response.approved_count,
            "Grades approved"
        );
        Ok(response)
    }
}
