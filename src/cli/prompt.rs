//! Shared dialoguer prompts.

use anyhow::{Context, Result, bail};
use dialoguer::{Confirm, Select};
use facultyhub::api::ApiClient;
use facultyhub::facultyhub_cache::{HierarchyCache, Listing, Query};
use facultyhub::facultyhub_core::{ClientError, Operation, messages};
use facultyhub::facultyhub_models::{
    AcademicYear, Department, DepartmentId, Level, Specialization,
};
use facultyhub::modules::hierarchy::HierarchySource;

const BACK: &str = "↩ رجوع";
const HOME: &str = "⌂ الرئيسية";
const QUIT: &str = "✖ خروج";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Item(usize),
    Back,
    Home,
    Quit,
}

/// Menu over `labels`, followed by navigation entries when `nested`.
pub fn choose(prompt: &str, labels: &[String], nested: bool) -> Result<Choice> {
    let mut items: Vec<&str> = labels.iter().map(String::as_str).collect();
    if labels.is_empty() {
        println!("  ({})", messages::NO_DATA);
    }
    if nested {
        items.push(BACK);
        items.push(HOME);
    }
    items.push(QUIT);

    let picked = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact_opt()
        .context("Failed to read selection")?;

    let Some(index) = picked else {
        return Ok(Choice::Quit);
    };

    let choice = match index {
        i if i < labels.len() => Choice::Item(i),
        i if nested && i == labels.len() => Choice::Back,
        i if nested && i == labels.len() + 1 => Choice::Home,
        _ => Choice::Quit,
    };
    Ok(choice)
}

/// Picks one of `items`; `None` when the list is empty or the user quits.
pub fn pick<'a, T>(
    prompt: &str,
    items: &'a [T],
    label: impl Fn(&T) -> String,
) -> Result<Option<&'a T>> {
    if items.is_empty() {
        println!("{}: {}", prompt, messages::NO_DATA);
        return Ok(None);
    }
    let labels: Vec<String> = items.iter().map(label).collect();
    match choose(prompt, &labels, false)? {
        Choice::Item(i) => Ok(items.get(i)),
        _ => Ok(None),
    }
}

pub fn confirm(prompt: &str) -> Result<bool> {
    Confirm::new()
        .with_prompt(prompt)
        .default(true)
        .interact()
        .context("Failed to read confirmation")
}

/// Reads a hierarchy list through the screen cache, reporting failures in Arabic.
pub async fn load(
    client: &ApiClient,
    cache: &mut HierarchyCache,
    query: Query,
    operation: Operation,
) -> Result<Listing> {
    cache
        .get_or_fetch(&query, |q| async move { client.fetch(&q).await })
        .await
        .map_err(|e: ClientError| anyhow::anyhow!(e.user_message(operation)))
}

pub async fn pick_department(
    client: &ApiClient,
    cache: &mut HierarchyCache,
) -> Result<Option<Department>> {
    let Listing::Departments(departments) =
        load(client, cache, Query::Departments, Operation::LoadDepartments).await?
    else {
        bail!(Operation::LoadDepartments.fallback_message());
    };
    Ok(pick("القسم", &departments, |d| d.name.clone())?.cloned())
}

pub fn pick_year<'a>(years: &'a [AcademicYear]) -> Result<Option<&'a AcademicYear>> {
    pick("العام الدراسي", years, |y| {
        format!("{} ({})", y.name, y.status.label())
    })
}

pub async fn pick_level(
    client: &ApiClient,
    cache: &mut HierarchyCache,
    department: DepartmentId,
    year: &AcademicYear,
) -> Result<Option<Level>> {
    let query = Query::Levels {
        department,
        year: year.id,
    };
    let Listing::Levels(levels) = load(client, cache, query, Operation::LoadLevels).await? else {
        bail!(Operation::LoadLevels.fallback_message());
    };
    Ok(pick("الفرقة", &levels, |l| l.label().to_string())?.cloned())
}

pub async fn pick_specialization(
    client: &ApiClient,
    cache: &mut HierarchyCache,
    department: DepartmentId,
) -> Result<Option<Specialization>> {
    let query = Query::Specializations { department };
    let Listing::Specializations(specializations) =
        load(client, cache, query, Operation::LoadSpecializations).await?
    else {
        bail!(Operation::LoadSpecializations.fallback_message());
    };
    Ok(pick("التخصص", &specializations, |s| s.name.clone())?.cloned())
}
