use facultyhub_core::{ClientError, messages};
use facultyhub_models::GradingTemplate;
use tracing::{info, instrument};

use crate::api::{ApiClient, Params};
use crate::modules::grading_templates::model::GradingTemplateForm;

pub struct GradingTemplateService;

impl GradingTemplateService {
    #[instrument(skip(client))]
    pub async fn list(client: &ApiClient) -> Result<Vec<GradingTemplate>, ClientError> {
        client.get_list("grading-templates/", &Params::new()).await
    }

    /// Creates or updates the template, depending on whether the form edits an
    /// existing one. Returns the saved template and the success message.
    #[instrument(skip_all, fields(template.id = ?form.id()))]
    pub async fn save(
        client: &ApiClient,
        form: &mut GradingTemplateForm,
    ) -> Result<(GradingTemplate, &'static str), ClientError> {
        let dto = form.begin_save()?;

        let (result, message) = match form.id() {
            Some(id) => (
                client
                    .put_json::<_, GradingTemplate>(&format!("grading-templates/{}/", id), &dto)
                    .await,
                messages::TEMPLATE_UPDATED,
            ),
            None => (
                client
                    .post_json::<_, GradingTemplate>("grading-templates/", &dto)
                    .await,
                messages::TEMPLATE_CREATED,
            ),
        };

        form.finish_save(result.as_ref().ok().map(|t| t.id));
        let template = result?;

        info!(template.id = %template.id, template.name = %template.name, "Grading template saved");
        Ok((template, message))
    }
}
