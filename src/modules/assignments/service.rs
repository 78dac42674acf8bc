use facultyhub_cache::{EntityKind, HierarchyCache, KindMismatch, Listing};
use facultyhub_core::{ClientError, messages};
use facultyhub_models::{
    AcademicYear, AcademicYearId, AssignDoctorRequest, AssignDoctorResponse, Assignment,
    Department, Doctor, GradingTemplate, Subject, Term,
};
use tracing::{info, instrument, warn};

use crate::api::{ApiClient, Params};
use crate::modules::assignments::model::{AssignmentForm, AssignmentFormData, AssignmentSubmitted};
use crate::modules::hierarchy::HierarchySource;

pub struct AssignmentService;

impl AssignmentService {
    /// Loads every list the form needs before the first selection, concurrently.
    #[instrument(skip(client))]
    pub async fn load_form_data(client: &ApiClient) -> Result<AssignmentFormData, ClientError> {
        let no_params = Params::new();
        let (departments, years, doctors, assignments, templates) = tokio::try_join!(
            client.get_list::<Department>("departments/", &no_params),
            client.get_list::<AcademicYear>("years/", &no_params),
            Self::list_doctors(client),
            Self::list_assignments(client),
            client.get_list::<GradingTemplate>("grading-templates/", &no_params),
        )?;

        Ok(AssignmentFormData {
            departments,
            years,
            doctors,
            assignments,
            templates,
        })
    }

    #[instrument(skip(client))]
    pub async fn list_assignments(client: &ApiClient) -> Result<Vec<Assignment>, ClientError> {
        client
            .get_list("staff-affairs/assignments/", &Params::new())
            .await
    }

    #[instrument(skip(client))]
    pub async fn list_doctors(client: &ApiClient) -> Result<Vec<Doctor>, ClientError> {
        client.get_list("staff-affairs/doctors/", &Params::new()).await
    }

    #[instrument(skip(client))]
    pub async fn list_terms(
        client: &ApiClient,
        academic_year: AcademicYearId,
    ) -> Result<Vec<Term>, ClientError> {
        let params: Params = vec![("academic_year", academic_year.to_string())];
        client.get_list("staff-affairs/terms/", &params).await
    }

    /// Subjects matching the form's level, term and specialization, through the
    /// screen's cache.
    #[instrument(skip_all)]
    pub async fn subjects_for<S: HierarchySource>(
        source: &S,
        cache: &mut HierarchyCache,
        form: &AssignmentForm,
    ) -> Result<Vec<Subject>, ClientError> {
        let Some(query) = form.subject_query() else {
            return Ok(Vec::new());
        };

        match cache
            .get_or_fetch(&query, |q| async move { source.fetch(&q).await })
            .await?
        {
            Listing::Subjects(subjects) => Ok(subjects),
            other => Err(KindMismatch {
                expected: EntityKind::Subjects,
                found: other.kind(),
            }
            .into()),
        }
    }

    #[instrument(skip(client))]
    pub async fn assign_doctor(
        client: &ApiClient,
        request: &AssignDoctorRequest,
    ) -> Result<AssignDoctorResponse, ClientError> {
        let response: AssignDoctorResponse = client
            .post_json("staff-affairs/assign-doctor/", request)
            .await?;

        info!(
            doctor.id = %request.doctor_id,
            subject.id = %request.subject_id,
            offering.id = ?response.offering_id,
            "Doctor assigned"
        );
        Ok(response)
    }

    /// Submits the form if it is complete and not already in flight.
    ///
    /// On success the assignment list is fetched again; a failed refresh does not
    /// turn the submission into an error. A rejection keeps the form as entered and
    /// returns the backend's error.
    #[instrument(skip_all)]
    pub async fn submit(
        client: &ApiClient,
        form: &mut AssignmentForm,
    ) -> Result<AssignmentSubmitted, ClientError> {
        let request = form.begin_submit()?;

        let result = Self::assign_doctor(client, &request).await;
        form.finish_submit(result.is_ok());
        let response = result.inspect_err(|e| warn!(error = %e, "Assignment rejected"))?;

        let message = if response.message.trim().is_empty() {
            messages::ASSIGNMENT_CREATED.to_string()
        } else {
            response.message
        };

        let assignments = Self::list_assignments(client)
            .await
            .inspect_err(|e| warn!(error = %e, "Assignment list refresh failed"))
            .ok();

        Ok(AssignmentSubmitted {
            message,
            assignments,
        })
    }
}
