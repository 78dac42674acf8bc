//! Where hierarchy lists come from.

use std::collections::HashSet;
use std::future::Future;
use std::pin::Pin;

use facultyhub_cache::{Listing, Query};
use facultyhub_core::ClientError;
use facultyhub_models::{AcademicYear, Department, Level, Specialization, Student, Subject};
use tracing::{debug, instrument};

use crate::api::{ApiClient, Params};

pub type FetchFuture<'a> = Pin<Box<dyn Future<Output = Result<Listing, ClientError>> + Send + 'a>>;

/// Answers hierarchy queries. The navigator never talks to the network itself.
pub trait HierarchySource: Send + Sync {
    fn fetch<'a>(&'a self, query: &'a Query) -> FetchFuture<'a>;
}

impl HierarchySource for ApiClient {
    fn fetch<'a>(&'a self, query: &'a Query) -> FetchFuture<'a> {
        Box::pin(fetch_listing(self, query))
    }
}

#[instrument(skip(client), fields(cache.key = %query))]
async fn fetch_listing(client: &ApiClient, query: &Query) -> Result<Listing, ClientError> {
    let listing = match query {
        Query::Departments => {
            Listing::Departments(client.get_list::<Department>("departments/", &Params::new()).await?)
        }
        Query::Years { department } => {
            let levels: Vec<Level> = client
                .get_list("levels/", &vec![("department", department.to_string())])
                .await?;
            let years: Vec<AcademicYear> = client.get_list("years/", &Params::new()).await?;
            Listing::Years(years_with_levels(years, &levels))
        }
        Query::Levels { department, year } => {
            let params: Params = vec![
                ("department", department.to_string()),
                ("academic_year", year.to_string()),
            ];
            Listing::Levels(client.get_list::<Level>("levels/", &params).await?)
        }
        Query::Specializations { department } => {
            let params: Params = vec![("department", department.to_string())];
            Listing::Specializations(
                client
                    .get_list::<Specialization>("specializations/", &params)
                    .await?,
            )
        }
        Query::Students {
            level,
            specialization,
        } => {
            let mut params: Params = vec![("level", level.to_string())];
            if let Some(specialization) = specialization {
                params.push(("specialization", specialization.to_string()));
            }
            Listing::Students(
                client
                    .get_list::<Student>("student-affairs/students/", &params)
                    .await?,
            )
        }
        Query::Subjects {
            department,
            level,
            semester,
            specialization,
        } => {
            let mut params: Params = vec![
                ("department", department.to_string()),
                ("level", level.as_str().to_string()),
                ("semester", semester.number().to_string()),
            ];
            if let Some(specialization) = specialization {
                params.push(("specialization", specialization.to_string()));
            }
            Listing::Subjects(client.get_list::<Subject>("subjects/", &params).await?)
        }
    };

    debug!(count = listing.len(), "Fetched listing");
    Ok(listing)
}

/// Academic years in which a department has at least one level.
///
/// A department with no levels yet gets every year, so that its first year can
/// still be picked.
pub fn years_with_levels(years: Vec<AcademicYear>, levels: &[Level]) -> Vec<AcademicYear> {
    if levels.is_empty() {
        return years;
    }

    let with_levels: HashSet<_> = levels.iter().map(|l| l.academic_year).collect();
    years
        .into_iter()
        .filter(|y| with_levels.contains(&y.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use facultyhub_models::{AcademicYearId, DepartmentId, LevelId, LevelName, YearStatus};

    fn year(id: i64) -> AcademicYear {
        AcademicYear {
            id: AcademicYearId::new(id),
            name: format!("{}-{}", 2020 + id, 2021 + id),
            status: YearStatus::Open,
            is_current: false,
            created_at: None,
        }
    }

    fn level(id: i64, year: i64) -> Level {
        Level {
            id: LevelId::new(id),
            name: LevelName::First,
            department: Some(DepartmentId::new(1)),
            academic_year: AcademicYearId::new(year),
            display_name: None,
        }
    }

    #[test]
    fn test_years_filtered_by_levels() {
        let years = vec![year(1), year(2), year(3)];
        let levels = vec![level(10, 1), level(11, 3), level(12, 3)];
        let ids: Vec<_> = years_with_levels(years, &levels)
            .iter()
            .map(|y| y.id.get())
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_years_fallback_without_levels() {
        let years = vec![year(1), year(2)];
        assert_eq!(years_with_levels(years.clone(), &[]), years);
    }
}
