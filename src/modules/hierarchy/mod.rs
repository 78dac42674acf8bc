//! Academic hierarchy navigation shared by every screen that drills down from
//! departments to students or subjects.

pub mod explorer;
pub mod navigator;
pub mod predicate;
pub mod selection;
pub mod source;

pub use explorer::Explorer;
pub use navigator::{CommitOutcome, FetchRequest, Navigator, Stage, Step, Target, Ticket};
pub use predicate::{EntryLevels, Flow, requires_specialization};
pub use selection::HierarchySelection;
pub use source::HierarchySource;
