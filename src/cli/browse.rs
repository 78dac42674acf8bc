//! Interactive drill-down over the hierarchy.

use anyhow::Result;
use facultyhub::api::ApiClient;
use facultyhub::facultyhub_core::Operation;
use facultyhub::facultyhub_models::StudentId;
use facultyhub::modules::hierarchy::{CommitOutcome, Explorer, Navigator, Stage, Target};
use facultyhub::modules::students::StudentService;

use crate::cli::prompt::{Choice, choose, confirm};

pub async fn run(client: &ApiClient, navigator: Navigator) -> Result<()> {
    let mut explorer = Explorer::new(client, navigator);
    explorer.start().await;

    loop {
        let nav = explorer.navigator();
        let trail = nav.breadcrumbs();
        if !trail.is_empty() {
            println!("\n{}", trail.join(" › "));
        }
        if let Some(error) = nav.error() {
            eprintln!("⚠️  {}", error);
        }

        let nested = nav.stage() != Stage::Departments;
        let (prompt, labels): (&str, Vec<String>) = match nav.stage() {
            Stage::Departments => (
                "القسم",
                nav.departments().iter().map(|d| d.name.clone()).collect(),
            ),
            Stage::Years => (
                "العام الدراسي",
                nav.years()
                    .iter()
                    .map(|y| format!("{} ({})", y.name, y.status.label()))
                    .collect(),
            ),
            Stage::Levels => (
                "الفرقة",
                nav.levels().iter().map(|l| l.label().to_string()).collect(),
            ),
            Stage::Specializations => (
                "التخصص",
                nav.specializations()
                    .iter()
                    .map(|s| s.name.clone())
                    .collect(),
            ),
            Stage::StudentsOrSubjects => match nav.target() {
                Target::Students => (
                    "الطلاب (اختر طالباً لإعادة تعيين كلمة المرور)",
                    nav.students()
                        .iter()
                        .map(|s| {
                            let account = if s.has_account() { "✓" } else { "✗" };
                            format!("{} | {} | {}", s.full_name, s.national_id, account)
                        })
                        .collect(),
                ),
                Target::Subjects { .. } => (
                    "المواد",
                    nav.subjects()
                        .iter()
                        .map(|s| format!("{} | {}", s.code, s.name))
                        .collect(),
                ),
            },
        };

        let choice = choose(prompt, &labels, nested)?;
        explorer.navigator_mut().dismiss_error();

        let outcome = match choice {
            Choice::Quit => return Ok(()),
            Choice::Back => {
                explorer.back();
                continue;
            }
            Choice::Home => explorer.reset().await,
            Choice::Item(i) => select(&mut explorer, client, i).await?,
        };

        if outcome == CommitOutcome::Stale {
            tracing::debug!("Ignored stale response");
        }
    }
}

async fn select(
    explorer: &mut Explorer<'_, ApiClient>,
    client: &ApiClient,
    index: usize,
) -> Result<CommitOutcome> {
    let nav = explorer.navigator();
    let outcome = match nav.stage() {
        Stage::Departments => match nav.departments().get(index).cloned() {
            Some(department) => explorer.select_department(department).await,
            None => CommitOutcome::Applied,
        },
        Stage::Years => match nav.years().get(index).cloned() {
            Some(year) => explorer.select_year(year).await?,
            None => CommitOutcome::Applied,
        },
        Stage::Levels => match nav.levels().get(index).cloned() {
            Some(level) => explorer.select_level(level).await?,
            None => CommitOutcome::Applied,
        },
        Stage::Specializations => match nav.specializations().get(index).cloned() {
            Some(specialization) => explorer.select_specialization(specialization).await?,
            None => CommitOutcome::Applied,
        },
        Stage::StudentsOrSubjects => {
            if let Some(student) = nav.students().get(index).cloned() {
                reset_password(explorer, client, &student.full_name, student.id).await?;
            }
            CommitOutcome::Applied
        }
    };
    Ok(outcome)
}

async fn reset_password(
    explorer: &mut Explorer<'_, ApiClient>,
    client: &ApiClient,
    name: &str,
    student_id: StudentId,
) -> Result<()> {
    if !confirm(&format!("إعادة تعيين كلمة المرور لـ {}؟", name))? {
        return Ok(());
    }

    match StudentService::reset_password(client, student_id).await {
        Ok(message) => {
            println!("✅ {}", message);
            explorer.refresh().await;
        }
        Err(e) => eprintln!("❌ {}", e.user_message(Operation::ResetPassword)),
    }
    Ok(())
}
