//! Grade sheet upload and approval.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use facultyhub::api::ApiClient;
use facultyhub::facultyhub_cache::{HierarchyCache, Listing, Query};
use facultyhub::facultyhub_core::Operation;
use facultyhub::facultyhub_models::{GradeType, LevelId};
use facultyhub::modules::exam_grades::{ExamGradeService, GradeSheet, GradeUploadForm};

use crate::cli::prompt::{
    confirm, load, pick, pick_department, pick_level, pick_specialization, pick_year,
};

pub async fn upload(client: &ApiClient, grade_type: GradeType, file: &Path) -> Result<()> {
    let bytes = tokio::fs::read(file)
        .await
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let file_name = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "grades.xlsx".to_string());

    let mut cache = HierarchyCache::new();
    let mut form = GradeUploadForm::new();
    form.set_grade_type(grade_type);
    form.set_sheet(Some(GradeSheet::new(file_name, bytes)));

    let Some(department) = pick_department(client, &mut cache).await? else {
        return Ok(());
    };
    let department_id = department.id;
    form.set_department(Some(department));

    let Listing::Years(years) = load(
        client,
        &mut cache,
        Query::Years {
            department: department_id,
        },
        Operation::LoadYears,
    )
    .await?
    else {
        return Ok(());
    };
    let Some(year) = pick_year(&years)? else {
        return Ok(());
    };
    form.set_year(Some(year.clone()));

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

    let response = ExamGradeService::upload(client, &mut form)
        .await
        .map_err(|e| anyhow!(e.user_message(Operation::UploadGrades)))?;

    println!("✅ {}", response.message);
    for error in &response.errors {
        println!("   ⚠️  {}", error);
    }
    Ok(())
}

pub async fn pending(client: &ApiClient) -> Result<()> {
    let pending = ExamGradeService::pending(client)
        .await
        .map_err(|e| anyhow!(e.user_message(Operation::LoadPendingGrades)))?;

    if pending.is_empty() {
        println!("لا توجد درجات معلقة");
        return Ok(());
    }

    for row in &pending {
        println!(
            "[{}] {} | {} | {} | pending: {} (midterm {}, final {})",
            row.level_id,
            row.level_name,
            row.department.as_deref().unwrap_or("-"),
            row.academic_year.as_deref().unwrap_or("-"),
            row.pending_count,
            row.midterm_count,
            row.final_count,
        );
    }
    Ok(())
}

pub async fn approve(client: &ApiClient, level_id: Option<LevelId>) -> Result<()> {
    let level_id = match level_id {
        Some(id) => id,
        None => {
            let pending = ExamGradeService::pending(client)
                .await
                .map_err(|e| anyhow!(e.user_message(Operation::LoadPendingGrades)))?;
            let Some(row) = pick("الفرقة", &pending, |p| {
                format!("{} ({})", p.level_name, p.pending_count)
            })?
            else {
                return Ok(());
            };
            row.level_id
        }
    };

    if !confirm(&format!("اعتماد درجات الفرقة {}؟", level_id))? {
        return Ok(());
    }

    let response = ExamGradeService::approve(client, level_id)
        .await
        .map_err(|e| anyhow!(e.user_message(Operation::ApproveGrades)))?;
    println!("✅ {} ({})", response.message, response.approved_count);
    Ok(())
}
