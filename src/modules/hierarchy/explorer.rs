//! Async driver that resolves navigator fetches against a [`HierarchySource`].

use facultyhub_core::ClientError;
use facultyhub_models::{AcademicYear, Department, Level, Specialization};
use tracing::instrument;

use super::navigator::{CommitOutcome, Navigator, Stage, Step};
use super::source::HierarchySource;

pub struct Explorer<'a, S: HierarchySource> {
    source: &'a S,
    navigator: Navigator,
}

impl<'a, S: HierarchySource> Explorer<'a, S> {
    pub fn new(source: &'a S, navigator: Navigator) -> Self {
        Self { source, navigator }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut Navigator {
        &mut self.navigator
    }

    pub async fn start(&mut self) -> CommitOutcome {
        let step = self.navigator.start();
        self.resolve(step).await
    }

    pub async fn reset(&mut self) -> CommitOutcome {
        let step = self.navigator.reset();
        self.resolve(step).await
    }

    #[instrument(skip_all, fields(department.id = %department.id))]
    pub async fn select_department(&mut self, department: Department) -> CommitOutcome {
        let step = self.navigator.select_department(department);
        self.resolve(step).await
    }

    #[instrument(skip_all, fields(year.id = %year.id))]
    pub async fn select_year(&mut self, year: AcademicYear) -> Result<CommitOutcome, ClientError> {
        let step = self.navigator.select_year(year)?;
        Ok(self.resolve(step).await)
    }

    #[instrument(skip_all, fields(level.id = %level.id))]
    pub async fn select_level(&mut self, level: Level) -> Result<CommitOutcome, ClientError> {
        let step = self.navigator.select_level(level)?;
        Ok(self.resolve(step).await)
    }

    #[instrument(skip_all, fields(specialization.id = %specialization.id))]
    pub async fn select_specialization(
        &mut self,
        specialization: Specialization,
    ) -> Result<CommitOutcome, ClientError> {
        let step = self.navigator.select_specialization(specialization)?;
        Ok(self.resolve(step).await)
    }

    pub fn back(&mut self) -> Stage {
        self.navigator.back()
    }

    /// Fetches the terminal list again, bypassing the cache.
    pub async fn refresh(&mut self) -> Option<CommitOutcome> {
        let step = self.navigator.refresh()?;
        Some(self.resolve(step).await)
    }

    async fn resolve(&mut self, step: Step) -> CommitOutcome {
        match step {
            Step::Ready | Step::Waiting => CommitOutcome::Applied,
            Step::Fetch(request) => {
                let result = self.source.fetch(&request.query).await;
                self.navigator.commit(request.ticket, result)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::hierarchy::{EntryLevels, Target};
    use crate::modules::hierarchy::source::FetchFuture;
    use facultyhub_cache::{Listing, Query};
    use facultyhub_models::{AcademicYearId, DepartmentId, YearStatus};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSource {
        queries: Mutex<Vec<Query>>,
        fail_years: bool,
    }

    impl HierarchySource for RecordingSource {
        fn fetch<'a>(&'a self, query: &'a Query) -> FetchFuture<'a> {
            Box::pin(async move {
                self.queries.lock().unwrap().push(query.clone());
                match query {
                    Query::Departments => Ok(Listing::Departments(vec![Department {
                        id: DepartmentId::new(1),
                        name: "Civil".into(),
                        code: "CIV".into(),
                        description: None,
                        has_specializations: Some(false),
                    }])),
                    Query::Years { .. } if self.fail_years => Err(ClientError::server(502, None)),
                    Query::Years { .. } => Ok(Listing::Years(vec![AcademicYear {
                        id: AcademicYearId::new(1),
                        name: "2024-2025".into(),
                        status: YearStatus::Open,
                        is_current: true,
                        created_at: None,
                    }])),
                    _ => Ok(Listing::Levels(vec![])),
                }
            })
        }
    }

    #[tokio::test]
    async fn test_reentering_department_fetches_once() {
        let source = RecordingSource::default();
        let mut explorer = Explorer::new(
            &source,
            Navigator::new(Target::Students, EntryLevels::FIRST_ONLY),
        );

        assert_eq!(explorer.start().await, CommitOutcome::Applied);
        let civil = explorer.navigator().departments()[0].clone();

        explorer.select_department(civil.clone()).await;
        explorer.back();
        explorer.select_department(civil).await;

        assert_eq!(explorer.navigator().stage(), Stage::Years);
        assert_eq!(source.queries.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_failure_reported_and_stage_kept() {
        let source = RecordingSource {
            fail_years: true,
            ..Default::default()
        };
        let mut explorer = Explorer::new(
            &source,
            Navigator::new(Target::Students, EntryLevels::FIRST_ONLY),
        );
        explorer.start().await;
        let civil = explorer.navigator().departments()[0].clone();

        assert_eq!(explorer.select_department(civil).await, CommitOutcome::Failed);
        assert_eq!(explorer.navigator().stage(), Stage::Departments);
        assert!(explorer.navigator().error().is_some());
    }
}
