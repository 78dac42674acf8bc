//! Interactive doctor assignment.

use anyhow::{Result, anyhow};
use facultyhub::api::ApiClient;
use facultyhub::facultyhub_cache::HierarchyCache;
use facultyhub::facultyhub_core::Operation;
use facultyhub::modules::assignments::{AssignmentForm, AssignmentService};
use tracing::info;

use crate::cli::prompt::{confirm, pick, pick_department, pick_level, pick_specialization, pick_year};

pub async fn run(client: &ApiClient) -> Result<()> {
    let data = AssignmentService::load_form_data(client)
        .await
        .map_err(|e| anyhow!(e.user_message(Operation::LoadFormData)))?;
    info!(
        doctors = data.doctors.len(),
        assignments = data.assignments.len(),
        "Assignment form loaded"
    );

    let mut cache = HierarchyCache::new();
    let mut form = AssignmentForm::new();
    form.prefill_template(&data.templates);

    loop {
        let Some(department) = pick_department(client, &mut cache).await? else {
            return Ok(());
        };
        let department_id = department.id;
        form.set_department(Some(department));

        let Some(year) = pick_year(&data.years)? else {
            return Ok(());
        };
        form.set_year(Some(year.clone()));

        let terms = AssignmentService::list_terms(client, year.id)
            .await
            .map_err(|e| anyhow!(e.user_message(Operation::LoadFormData)))?;
        let Some(term) = pick("الترم", &terms, |t| t.display_name().to_string())? else {
            return Ok(());
        };
        form.set_term(Some(term.clone()));

        let Some(level) = pick_level(client, &mut cache, department_id, year).await? else {
            return Ok(());
        };
        form.set_level(Some(level));

        if form.selection().requires_specialization() {
            let Some(specialization) = pick_specialization(client, &mut cache, department_id).await?
            else {
                return Ok(());
            };
            form.set_specialization(Some(specialization));
        }

        let subjects = AssignmentService::subjects_for(client, &mut cache, &form)
            .await
            .map_err(|e| anyhow!(e.user_message(Operation::LoadSubjects)))?;
        let Some(subject) = pick("المادة", &subjects, |s| format!("{} | {}", s.code, s.name))?
        else {
            return Ok(());
        };
        form.set_subject(Some(subject.clone()));

        let Some(doctor) = pick("الدكتور", &data.doctors, |d| d.full_name.clone())? else {
            return Ok(());
        };
        form.set_doctor(Some(doctor.clone()));

        if !data.templates.is_empty() {
            let template = pick("قالب التقييم", &data.templates, |t| {
                let marker = if t.is_default { " ★" } else { "" };
                format!("{}{}", t.name, marker)
            })?;
            if let Some(template) = template {
                form.set_template(Some(template.id));
            }
        }

        if !form.can_submit() || !confirm("تأكيد التعيين؟")? {
            return Ok(());
        }

        match AssignmentService::submit(client, &mut form).await {
            Ok(submitted) => {
                println!("✅ {}", submitted.message);
                if let Some(assignments) = &submitted.assignments {
                    println!("   عدد التعيينات: {}", assignments.len());
                }
            }
            Err(e) => eprintln!("❌ {}", e.user_message(Operation::AssignDoctor)),
        }

        if !confirm("تعيين آخر؟")? {
            return Ok(());
        }
    }
}
