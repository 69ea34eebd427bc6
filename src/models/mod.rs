pub mod finding;
pub mod priority;
pub mod report;

pub use finding::Finding;
pub use priority::{ComplianceLevel, InvalidPriorityError, Priority};
pub use report::{AggregateReport, DependencyAnalysis, PatternCompliance};
