//! Drill-down navigation over the academic hierarchy.
//!
//! The chain is `Departments -> Years -> Levels -> [Specializations] -> terminal list`,
//! where the terminal list is students or subjects depending on the screen. The
//! specialization step is visited only when [`requires_specialization`] says so.
//!
//! The navigator is synchronous. A selection whose list is already cached is applied
//! at once ([`Step::Ready`]); otherwise it returns a [`FetchRequest`] and the caller
//! hands the result back through [`Navigator::commit`]. Nothing changes until a fetch
//! succeeds, so a failure leaves the previous stage in place. Each request carries a
//! [`Ticket`]; committing a ticket that has been superseded by a later selection is a
//! no-op, which is how late responses for an abandoned parent are discarded.

use facultyhub_cache::{EntityKind, HierarchyCache, Listing, Query};
use facultyhub_core::{ClientError, Operation, messages};
use facultyhub_models::{
    AcademicYear, Department, Level, Semester, Specialization, Student, Subject,
};
use tracing::{debug, warn};

use super::predicate::{EntryLevels, requires_specialization};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Departments,
    Years,
    Levels,
    Specializations,
    StudentsOrSubjects,
}

/// What the end of the chain lists. Fixed per screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Students,
    Subjects { semester: Semester },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub ticket: Ticket,
    pub query: Query,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Served from cache and already applied.
    Ready,
    /// The same query is already in flight; its commit will apply this selection.
    Waiting,
    /// The caller must resolve `query` and pass the result to [`Navigator::commit`].
    Fetch(FetchRequest),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    Applied,
    /// The ticket was superseded; the response was dropped.
    Stale,
    /// The fetch failed; the previous stage is kept and an inline error is set.
    Failed,
}

/// A selection waiting for its child list.
#[derive(Debug, Clone)]
enum Move {
    Home,
    Department(Department),
    Year(AcademicYear),
    Level(Level),
    Specialization(Specialization),
}

#[derive(Debug)]
struct Pending {
    ticket: Ticket,
    query: Query,
    step: Move,
}

#[derive(Debug)]
pub struct Navigator {
    target: Target,
    entry: EntryLevels,
    cache: HierarchyCache,

    department: Option<Department>,
    year: Option<AcademicYear>,
    level: Option<Level>,
    specialization: Option<Specialization>,

    departments: Vec<Department>,
    years: Vec<AcademicYear>,
    levels: Vec<Level>,
    specializations: Vec<Specialization>,
    terminal: Option<Listing>,

    pending: Option<Pending>,
    next_ticket: u64,
    error: Option<String>,
}

impl Navigator {
    pub fn new(target: Target, entry: EntryLevels) -> Self {
        Self {
            target,
            entry,
            cache: HierarchyCache::new(),
            department: None,
            year: None,
            level: None,
            specialization: None,
            departments: Vec::new(),
            years: Vec::new(),
            levels: Vec::new(),
            specializations: Vec::new(),
            terminal: None,
            pending: None,
            next_ticket: 0,
            error: None,
        }
    }

    /// The active stage, derived from the current selections alone.
    pub fn stage(&self) -> Stage {
        if self.department.is_none() {
            Stage::Departments
        } else if self.year.is_none() {
            Stage::Years
        } else if self.level.is_none() {
            Stage::Levels
        } else if self.requires_specialization() && self.specialization.is_none() {
            Stage::Specializations
        } else {
            Stage::StudentsOrSubjects
        }
    }

    pub fn requires_specialization(&self) -> bool {
        requires_specialization(self.department.as_ref(), self.level.as_ref(), self.entry)
    }

    /// Loads the department list. Equivalent to [`Navigator::reset`].
    pub fn start(&mut self) -> Step {
        self.reset()
    }

    /// Returns to the department list, clearing every selection.
    pub fn reset(&mut self) -> Step {
        self.clear_from(Stage::Departments);
        self.request(Query::Departments, Move::Home)
    }

    pub fn select_department(&mut self, department: Department) -> Step {
        let query = Query::Years {
            department: department.id,
        };
        self.request(query, Move::Department(department))
    }

    pub fn select_year(&mut self, year: AcademicYear) -> Result<Step, ClientError> {
        let department = self
            .department
            .as_ref()
            .ok_or_else(|| ClientError::incomplete(messages::INCOMPLETE_SELECTION))?;

        let query = Query::Levels {
            department: department.id,
            year: year.id,
        };
        Ok(self.request(query, Move::Year(year)))
    }

    pub fn select_level(&mut self, level: Level) -> Result<Step, ClientError> {
        let department = match (&self.department, &self.year) {
            (Some(department), Some(_)) => department,
            _ => return Err(ClientError::incomplete(messages::INCOMPLETE_SELECTION)),
        };

        let query = if requires_specialization(Some(department), Some(&level), self.entry) {
            Query::Specializations {
                department: department.id,
            }
        } else {
            self.terminal_query(department, &level, None)
        };
        Ok(self.request(query, Move::Level(level)))
    }

    pub fn select_specialization(
        &mut self,
        specialization: Specialization,
    ) -> Result<Step, ClientError> {
        let (department, level) = match (&self.department, &self.level) {
            (Some(department), Some(level)) if self.requires_specialization() => {
                (department, level)
            }
            _ => return Err(ClientError::incomplete(messages::INCOMPLETE_SELECTION)),
        };

        let query = self.terminal_query(department, level, Some(&specialization));
        Ok(self.request(query, Move::Specialization(specialization)))
    }

    /// Pops one step of the chain, mirroring the path taken forward.
    ///
    /// Lists of the stage returned to are still held, so this never fetches. Any
    /// in-flight request is abandoned.
    pub fn back(&mut self) -> Stage {
        self.pending = None;

        match self.stage() {
            Stage::Departments => {}
            Stage::Years => self.clear_from(Stage::Departments),
            Stage::Levels => self.clear_from(Stage::Years),
            Stage::Specializations => self.clear_from(Stage::Levels),
            Stage::StudentsOrSubjects => {
                if self.specialization.is_some() {
                    self.specialization = None;
                    self.terminal = None;
                } else {
                    self.clear_from(Stage::Levels);
                }
            }
        }

        self.stage()
    }

    /// Drops the cached terminal list and fetches it again, e.g. after a change
    /// made through another endpoint. `None` outside the terminal stage.
    pub fn refresh(&mut self) -> Option<Step> {
        if self.stage() != Stage::StudentsOrSubjects {
            return None;
        }

        let (department, level) = match (&self.department, &self.level) {
            (Some(department), Some(level)) => (department, level),
            _ => return None,
        };
        let query = self.terminal_query(department, level, self.specialization.as_ref());
        let step = match &self.specialization {
            Some(specialization) => Move::Specialization(specialization.clone()),
            None => Move::Level(level.clone()),
        };

        self.cache.invalidate(&query);
        Some(self.request(query, step))
    }

    /// Applies the result of a [`FetchRequest`].
    pub fn commit(
        &mut self,
        ticket: Ticket,
        result: Result<Listing, ClientError>,
    ) -> CommitOutcome {
        let pending = match self.pending.take() {
            Some(pending) if pending.ticket == ticket => pending,
            other => {
                debug!(ticket = ticket.0, "Discarding stale response");
                self.pending = other;
                return CommitOutcome::Stale;
            }
        };

        let listing = match result {
            Ok(listing) => listing,
            Err(e) => {
                warn!(cache.key = %pending.query, error = %e, "Hierarchy fetch failed");
                self.error = Some(e.user_message(load_operation(pending.query.kind())));
                return CommitOutcome::Failed;
            }
        };

        if !self.cache.insert(pending.query.clone(), listing.clone()) {
            self.error = Some(load_operation(pending.query.kind()).fallback_message().to_string());
            return CommitOutcome::Failed;
        }

        self.apply(pending.step, listing);
        CommitOutcome::Applied
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn target(&self) -> Target {
        self.target
    }

    pub fn department(&self) -> Option<&Department> {
        self.department.as_ref()
    }

    pub fn year(&self) -> Option<&AcademicYear> {
        self.year.as_ref()
    }

    pub fn level(&self) -> Option<&Level> {
        self.level.as_ref()
    }

    pub fn specialization(&self) -> Option<&Specialization> {
        self.specialization.as_ref()
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    pub fn years(&self) -> &[AcademicYear] {
        &self.years
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn specializations(&self) -> &[Specialization] {
        &self.specializations
    }

    pub fn students(&self) -> &[Student] {
        match &self.terminal {
            Some(Listing::Students(students)) => students,
            _ => &[],
        }
    }

    pub fn subjects(&self) -> &[Subject] {
        match &self.terminal {
            Some(Listing::Subjects(subjects)) => subjects,
            _ => &[],
        }
    }

    /// Whether the active stage's list loaded and came back empty.
    pub fn is_empty(&self) -> bool {
        match self.stage() {
            Stage::Departments => self.departments.is_empty(),
            Stage::Years => self.years.is_empty(),
            Stage::Levels => self.levels.is_empty(),
            Stage::Specializations => self.specializations.is_empty(),
            Stage::StudentsOrSubjects => self.terminal.as_ref().is_none_or(Listing::is_empty),
        }
    }

    /// Names of the current selections, root first.
    pub fn breadcrumbs(&self) -> Vec<String> {
        let mut trail = Vec::new();
        if let Some(department) = &self.department {
            trail.push(department.name.clone());
        }
        if let Some(year) = &self.year {
            trail.push(year.name.clone());
        }
        if let Some(level) = &self.level {
            trail.push(level.label().to_string());
        }
        if let Some(specialization) = &self.specialization {
            trail.push(specialization.name.clone());
        }
        trail
    }

    pub fn cache(&self) -> &HierarchyCache {
        &self.cache
    }

    fn terminal_query(
        &self,
        department: &Department,
        level: &Level,
        specialization: Option<&Specialization>,
    ) -> Query {
        let specialization = specialization.map(|s| s.id);
        match self.target {
            Target::Students => Query::Students {
                level: level.id,
                specialization,
            },
            Target::Subjects { semester } => Query::Subjects {
                department: department.id,
                level: level.name,
                semester,
                specialization,
            },
        }
    }

    /// Serves `query` from the cache or hands out a ticket for it. Either way any
    /// earlier pending request is superseded.
    fn request(&mut self, query: Query, step: Move) -> Step {
        if let Some(pending) = self.pending.as_mut()
            && pending.query == query
        {
            pending.step = step;
            return Step::Waiting;
        }
        self.pending = None;

        if let Some(listing) = self.cache.get(&query).cloned() {
            self.apply(step, listing);
            return Step::Ready;
        }

        self.next_ticket += 1;
        let ticket = Ticket(self.next_ticket);
        self.pending = Some(Pending {
            ticket,
            query: query.clone(),
            step,
        });
        Step::Fetch(FetchRequest { ticket, query })
    }

    fn apply(&mut self, step: Move, listing: Listing) {
        self.error = None;

        match (step, listing) {
            (Move::Home, Listing::Departments(departments)) => {
                self.clear_from(Stage::Departments);
                self.departments = departments;
            }
            (Move::Department(department), Listing::Years(years)) => {
                self.clear_from(Stage::Years);
                self.department = Some(department);
                self.years = years;
            }
            (Move::Year(year), Listing::Levels(levels)) => {
                self.clear_from(Stage::Levels);
                self.year = Some(year);
                self.levels = levels;
            }
            (Move::Level(level), Listing::Specializations(specializations)) => {
                self.clear_from(Stage::Specializations);
                self.level = Some(level);
                self.specializations = specializations;
            }
            (Move::Level(level), terminal @ (Listing::Students(_) | Listing::Subjects(_))) => {
                self.clear_from(Stage::Specializations);
                self.level = Some(level);
                self.specializations.clear();
                self.terminal = Some(terminal);
            }
            (
                Move::Specialization(specialization),
                terminal @ (Listing::Students(_) | Listing::Subjects(_)),
            ) => {
                self.specialization = Some(specialization);
                self.terminal = Some(terminal);
            }
            (step, listing) => {
                warn!(?step, listing.kind = %listing.kind(), "Listing does not match selection");
            }
        }
    }

    /// Clears the selection made at `stage` and everything below it.
    fn clear_from(&mut self, stage: Stage) {
        match stage {
            Stage::Departments => {
                self.department = None;
                self.years.clear();
                self.clear_from(Stage::Years);
            }
            Stage::Years => {
                self.year = None;
                self.levels.clear();
                self.clear_from(Stage::Levels);
            }
            Stage::Levels => {
                self.level = None;
                self.specializations.clear();
                self.clear_from(Stage::Specializations);
            }
            Stage::Specializations | Stage::StudentsOrSubjects => {
                self.specialization = None;
                self.terminal = None;
            }
        }
    }
}

fn load_operation(kind: EntityKind) -> Operation {
    match kind {
        EntityKind::Departments => Operation::LoadDepartments,
        EntityKind::Years => Operation::LoadYears,
        EntityKind::Levels => Operation::LoadLevels,
        EntityKind::Specializations => Operation::LoadSpecializations,
        EntityKind::Students => Operation::LoadStudents,
        EntityKind::Subjects => Operation::LoadSubjects,
    }
}
